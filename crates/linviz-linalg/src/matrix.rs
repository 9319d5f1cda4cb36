use glam::DMat2;

use crate::Vector2;

/// A real 2x2 matrix stored by named element.
///
/// The element naming is row-major: `a12` is the entry in the first row and
/// second column. Any real values are valid, including singular matrices.
///
/// # Examples
///
/// ```
/// use linviz_linalg::{Matrix2, Vector2};
///
/// let shear = Matrix2::new(1.0, 1.0, 0.0, 1.0);
/// assert_eq!(shear.determinant(), 1.0);
/// assert_eq!(shear.mul_vec(Vector2::new(0.0, 1.0)), Vector2::new(1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix2 {
    /// Row 1, column 1.
    pub a11: f64,
    /// Row 1, column 2.
    pub a12: f64,
    /// Row 2, column 1.
    pub a21: f64,
    /// Row 2, column 2.
    pub a22: f64,
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix2 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// The zero matrix.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a matrix from its elements in row-major order.
    #[inline]
    pub const fn new(a11: f64, a12: f64, a21: f64, a22: f64) -> Self {
        Self { a11, a12, a21, a22 }
    }

    /// Create a matrix from `[a11, a12, a21, a22]`.
    #[inline]
    pub const fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// The elements as `[a11, a12, a21, a22]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.a11, self.a12, self.a21, self.a22]
    }

    /// Sum of the diagonal elements.
    #[inline]
    pub fn trace(&self) -> f64 {
        self.a11 + self.a22
    }

    /// `a11 * a22 - a12 * a21`.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a11 * self.a22 - self.a12 * self.a21
    }

    /// Discriminant of the characteristic polynomial, `trace^2 - 4 * det`.
    ///
    /// Negative values mean a complex-conjugate pair of eigenvalues.
    #[inline]
    pub fn discriminant(&self) -> f64 {
        let trace = self.trace();
        trace * trace - 4.0 * self.determinant()
    }

    /// Apply the matrix to a vector, `A * v`.
    #[inline]
    pub fn mul_vec(&self, v: Vector2) -> Vector2 {
        Vector2::new(
            self.a11 * v.x + self.a12 * v.y,
            self.a21 * v.x + self.a22 * v.y,
        )
    }

    /// Whether both off-diagonal elements are exactly zero.
    #[inline]
    pub fn is_diagonal(&self) -> bool {
        self.a12 == 0.0 && self.a21 == 0.0
    }
}

impl From<DMat2> for Matrix2 {
    #[inline]
    fn from(m: DMat2) -> Self {
        Self::new(m.x_axis.x, m.y_axis.x, m.x_axis.y, m.y_axis.y)
    }
}

impl From<Matrix2> for DMat2 {
    #[inline]
    fn from(m: Matrix2) -> Self {
        DMat2::from_cols(Vector2::new(m.a11, m.a21), Vector2::new(m.a12, m.a22))
    }
}

// Matrix-vector multiplication
impl std::ops::Mul<Vector2> for Matrix2 {
    type Output = Vector2;

    #[inline]
    fn mul(self, rhs: Vector2) -> Self::Output {
        self.mul_vec(rhs)
    }
}
