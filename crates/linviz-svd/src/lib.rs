#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Linviz Svd
//!
//! An RGB image of `M` pixels is flattened into an `M x 3` matrix and
//! decomposed as `A = U · diag(σ) · Vᵀ`. The rows of `Vᵀ` are directions in
//! color space and the columns of `U` tell how much of each direction every
//! pixel carries.
//!
//! - [`decomposition`]: the decomposition and its sign convention.
//! - [`reconstruct`]: low-rank and per-component renderings, plus the
//!   top-k raw RGB channel view used for comparison.
//! - [`state`]: the interactive state of the demo.

/// Error types for the svd module.
pub mod error;

/// Thin SVD of flattened RGB images.
pub mod decomposition;

/// Rendering of low-rank approximations.
pub mod reconstruct;

/// Interactive demo state.
pub mod state;

pub use crate::decomposition::{image_to_matrix, normalize_signs, ColorSvd};
pub use crate::error::SvdError;
pub use crate::reconstruct::{
    channel_at, component_image, reconstruct_rank, reconstruct_top_channels, u_column_grayscale,
};
pub use crate::state::SvdDemoState;
