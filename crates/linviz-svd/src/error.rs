use linviz_image::ImageError;

/// An error type for the svd module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SvdError {
    /// Error when the input cannot be decomposed into three color components.
    #[error("Expected a matrix with 3 columns and at least 3 rows, got {0}x{1}")]
    InvalidShape(usize, usize),

    /// Error when the requested rank exceeds the number of components.
    #[error("Rank {0} is out of range, the maximum rank is {1}")]
    InvalidRank(usize, usize),

    /// Error when a component index is out of range.
    #[error("Component {0} is out of range for {1} components")]
    InvalidComponent(usize, usize),

    /// Error when the decomposition does not match the requested image size.
    #[error("Decomposition has {0} rows but the image has {1} pixels")]
    SizeMismatch(usize, usize),

    /// Error when the input contains NaN or infinite values.
    #[error("Input matrix contains non-finite values")]
    NonFiniteInput,

    /// Error from the image module.
    #[error(transparent)]
    Image(#[from] ImageError),
}
