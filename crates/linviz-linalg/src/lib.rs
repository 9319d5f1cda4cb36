#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Linviz Linalg
//!
//! Closed-form numerics for the 2x2 linear transformation explorer.
//!
//! - [`matrix`]: the [`Matrix2`] type and its scalar invariants.
//! - [`transform`]: conversion between matrix elements, basis vectors and the
//!   rotation/scale slider representation.
//! - [`eigen`]: real, defective and complex-conjugate eigendecomposition.
//! - [`trajectory`]: sampled state evolution along a complex eigenpair.
//!
//! ## Example
//!
//! ```rust
//! use linviz_linalg::{EigenDecomposition, Matrix2};
//!
//! let rotation = Matrix2::new(0.0, -1.0, 1.0, 0.0);
//! let eigen = EigenDecomposition::from_matrix(&rotation).unwrap();
//! assert!(eigen.is_complex());
//! ```

/// Error types for the linalg module.
pub mod error;

/// Eigendecomposition of 2x2 matrices.
pub mod eigen;

/// The 2x2 matrix type.
pub mod matrix;

/// Trajectories of linear systems along complex eigenpairs.
pub mod trajectory;

/// Matrix to rotation/scale decomposition and its inverse.
pub mod transform;

pub use crate::eigen::{ComplexEigenpair, EigenDecomposition};
pub use crate::error::LinalgError;
pub use crate::matrix::Matrix2;
pub use crate::trajectory::{continuous_trajectory, discrete_trajectory, Trajectory};
pub use crate::transform::{
    calculate_from_transforms, calculate_transformation, extract_basis_vectors, Transform,
    Transformation,
};

/// A point or direction in the plane.
pub type Vector2 = glam::DVec2;
