#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! The explorer maps a 2x2 matrix to everything needed to draw it: the
//! transformed vector, the basis vectors and their slider angles, the
//! eigen-structure and, for complex eigenvalues, the spiral traced by the
//! discrete system `x_{k+1} = A x_k`. All outputs are recomputed from the
//! inputs on every change and collected in a serializable [`Frame`].

/// Layout and slider constants.
pub mod config;

/// Transformed grid lines clipped to the drawing area.
pub mod grid;

/// Query string encoding of the explorer state.
pub mod query;

/// Plane to screen mapping and arrow geometry.
pub mod screen;

/// The explorer state and its derived frame.
pub mod state;

pub use crate::grid::{Grid, GridLine};
pub use crate::query::{parse_query, to_query, InitialState};
pub use crate::screen::Arrow;
pub use crate::state::{Axis, ExplorerState, Frame, MatrixElement};
