#![deny(missing_docs)]
//! Image types and a synthetic shape image generator

/// image representation for visualization purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// Rasterizers for filled parametric shapes.
pub mod draw;

/// Synthetic image generation from a fixed pool of shapes.
pub mod generator;

/// Shape descriptors and colors.
pub mod shape;

/// Per-channel image statistics.
pub mod stats;

pub use crate::error::ImageError;
pub use crate::generator::ImageGenerator;
pub use crate::image::{Image, ImageSize};
pub use crate::shape::{Rgb, Shape, ShapeKind};
