/// An error type for the linalg module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Error when a complex eigenpair is requested from a matrix without off-diagonal terms.
    #[error("Cannot compute eigenvectors for this matrix. Expected non-zero off-diagonal element")]
    DegenerateBasis,

    /// Error when the real and imaginary eigenvector parts do not span the plane.
    #[error("Real and imaginary eigenvectors are linearly dependent (determinant {determinant})")]
    LinearlyDependentBasis {
        /// The determinant of the `[real_vector, imag_vector]` basis.
        determinant: f64,
    },
}
