//! Eigendecomposition of a real 2x2 matrix.
//!
//! The eigenvalues are the roots of the characteristic polynomial
//!
//! ```text
//! λ² - trace(A) λ + det(A) = 0,   λ = trace/2 ± sqrt(trace² - 4 det)/2
//! ```
//!
//! The sign of the discriminant selects one of three cases, modelled by
//! [`EigenDecomposition`]: two real eigenvalues, a repeated eigenvalue with a
//! single eigenvector (defective matrix), or a complex-conjugate pair.
//!
//! Real eigenvectors are returned scaled by their eigenvalue, i.e. as
//! `λ · v / ‖v‖`, so that they can be drawn directly as `A v` for a unit `v`.

use crate::{LinalgError, Matrix2, Vector2};

/// One eigenvalue/eigenvector pair of a complex-conjugate pair.
///
/// The eigenvalue is `real_value + i imag_value` with `imag_value > 0` and
/// the eigenvector is `real_vector + i imag_vector`. The conjugate pair is
/// implied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexEigenpair {
    /// Real part of the eigenvalue.
    pub real_value: f64,
    /// Imaginary part of the eigenvalue.
    pub imag_value: f64,
    /// Real part of the eigenvector.
    pub real_vector: Vector2,
    /// Imaginary part of the eigenvector.
    pub imag_vector: Vector2,
}

impl ComplexEigenpair {
    /// Modulus of the eigenvalue.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.real_value.hypot(self.imag_value)
    }

    /// Argument of the eigenvalue in radians.
    #[inline]
    pub fn argument(&self) -> f64 {
        self.imag_value.atan2(self.real_value)
    }
}

/// The eigen-structure of a 2x2 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum EigenDecomposition {
    /// Two real eigenvalues with independent eigenvectors.
    ///
    /// Scalar matrices (`a11 == a22` and no off-diagonal terms) land here with
    /// equal eigenvalues and the standard basis as eigenvectors.
    RealDistinct {
        /// The larger eigenvalue (or `a11` for diagonal matrices).
        eigenvalue1: f64,
        /// The smaller eigenvalue (or `a22` for diagonal matrices).
        eigenvalue2: f64,
        /// Eigenvector of `eigenvalue1`, scaled by `eigenvalue1`.
        eigenvector1: Vector2,
        /// Eigenvector of `eigenvalue2`, scaled by `eigenvalue2`.
        eigenvector2: Vector2,
    },
    /// A repeated eigenvalue with a single independent eigenvector.
    Defective {
        /// The repeated eigenvalue.
        eigenvalue: f64,
        /// The only eigenvector, scaled by the eigenvalue.
        eigenvector: Vector2,
    },
    /// A complex-conjugate pair of eigenvalues.
    Complex(ComplexEigenpair),
}

/// Scale a raw eigenvector to length `|eigenvalue|`, keeping the sign of the eigenvalue.
#[inline]
fn scale_by_eigenvalue(v: Vector2, eigenvalue: f64) -> Vector2 {
    let norm = v.x.hypot(v.y);
    Vector2::new(eigenvalue * v.x / norm, eigenvalue * v.y / norm)
}

/// Solve `(A - λ I) v = 0` for the complex eigenvalue `real_value + i imag_value`.
pub(crate) fn complex_eigenpair(
    m: &Matrix2,
    real_value: f64,
    imag_value: f64,
) -> Result<ComplexEigenpair, LinalgError> {
    let a11_shifted = m.a11 - real_value;
    let a22_shifted = m.a22 - real_value;

    if m.is_diagonal() {
        return Err(LinalgError::DegenerateBasis);
    }

    let (real_vector, imag_vector) = if m.a12 != 0.0 {
        (
            Vector2::new(1.0, -a11_shifted / m.a12),
            Vector2::new(0.0, imag_value / m.a12),
        )
    } else {
        (
            Vector2::new(-a22_shifted / m.a21, 1.0),
            Vector2::new(imag_value / m.a21, 0.0),
        )
    };

    Ok(ComplexEigenpair {
        real_value,
        imag_value,
        real_vector,
        imag_vector,
    })
}

impl EigenDecomposition {
    /// Compute the eigendecomposition of a 2x2 matrix.
    ///
    /// # Arguments
    ///
    /// * `m` - The matrix to decompose. Any real values are accepted.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DegenerateBasis`] if the eigenvalues are complex but both
    /// off-diagonal elements are zero. This cannot happen for finite input
    /// and signals an internal inconsistency.
    ///
    /// # Example
    ///
    /// ```
    /// use linviz_linalg::{EigenDecomposition, Matrix2, Vector2};
    ///
    /// let eigen = EigenDecomposition::from_matrix(&Matrix2::new(2.0, 0.0, 0.0, 1.0)).unwrap();
    /// assert_eq!(
    ///     eigen,
    ///     EigenDecomposition::RealDistinct {
    ///         eigenvalue1: 2.0,
    ///         eigenvalue2: 1.0,
    ///         eigenvector1: Vector2::new(2.0, 0.0),
    ///         eigenvector2: Vector2::new(0.0, 1.0),
    ///     }
    /// );
    /// ```
    pub fn from_matrix(m: &Matrix2) -> Result<Self, LinalgError> {
        let discriminant = m.discriminant();
        let real_value = m.trace() / 2.0;

        let result = if discriminant < 0.0 {
            let imag_value = discriminant.abs().sqrt() / 2.0;
            Self::Complex(complex_eigenpair(m, real_value, imag_value)?)
        } else {
            let half_root = discriminant.sqrt() / 2.0;
            let (mut eigenvalue1, mut eigenvalue2) = (real_value + half_root, real_value - half_root);
            let mut defective = discriminant == 0.0;

            let (v1, v2) = if m.is_diagonal() {
                // keep the eigenvalues aligned with the basis vectors
                eigenvalue1 = m.a11;
                eigenvalue2 = m.a22;
                defective = false;
                (Vector2::X, Vector2::Y)
            } else if m.a12 != 0.0 {
                (
                    Vector2::new(1.0, (eigenvalue1 - m.a11) / m.a12),
                    Vector2::new(1.0, (eigenvalue2 - m.a11) / m.a12),
                )
            } else {
                (
                    Vector2::new((eigenvalue1 - m.a22) / m.a21, 1.0),
                    Vector2::new((eigenvalue2 - m.a22) / m.a21, 1.0),
                )
            };

            let eigenvector1 = scale_by_eigenvalue(v1, eigenvalue1);
            let eigenvector2 = scale_by_eigenvalue(v2, eigenvalue2);

            if defective {
                Self::Defective {
                    eigenvalue: eigenvalue1,
                    eigenvector: eigenvector1,
                }
            } else {
                Self::RealDistinct {
                    eigenvalue1,
                    eigenvalue2,
                    eigenvector1,
                    eigenvector2,
                }
            }
        };

        log::debug!("eigendecomposition of {m:?}: {result:?}");

        Ok(result)
    }

    /// Whether the eigenvalues form a complex-conjugate pair.
    #[inline]
    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Complex(_))
    }

    /// Whether the matrix has a repeated eigenvalue with a single eigenvector.
    #[inline]
    pub fn is_defective(&self) -> bool {
        matches!(self, Self::Defective { .. })
    }

    /// The two real eigenvalues, repeated for a defective matrix.
    pub fn real_eigenvalues(&self) -> Option<(f64, f64)> {
        match *self {
            Self::RealDistinct {
                eigenvalue1,
                eigenvalue2,
                ..
            } => Some((eigenvalue1, eigenvalue2)),
            Self::Defective { eigenvalue, .. } => Some((eigenvalue, eigenvalue)),
            Self::Complex(_) => None,
        }
    }

    /// The two scaled real eigenvectors, repeated for a defective matrix.
    pub fn real_eigenvectors(&self) -> Option<(Vector2, Vector2)> {
        match *self {
            Self::RealDistinct {
                eigenvector1,
                eigenvector2,
                ..
            } => Some((eigenvector1, eigenvector2)),
            Self::Defective { eigenvector, .. } => Some((eigenvector, eigenvector)),
            Self::Complex(_) => None,
        }
    }

    /// The complex eigenpair, if any.
    pub fn complex_pair(&self) -> Option<&ComplexEigenpair> {
        match self {
            Self::Complex(pair) => Some(pair),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_eigenpair(m: &Matrix2, eigenvalue: f64, scaled: Vector2) {
        let unit = scaled.normalize();
        let image = m.mul_vec(unit);
        assert_relative_eq!(image.x, eigenvalue * unit.x, epsilon = 1e-9);
        assert_relative_eq!(image.y, eigenvalue * unit.y, epsilon = 1e-9);
        assert_relative_eq!(scaled.length(), eigenvalue.abs(), epsilon = 1e-9);
    }

    #[test]
    fn test_diagonal() -> Result<(), LinalgError> {
        let eigen = EigenDecomposition::from_matrix(&Matrix2::new(2.0, 0.0, 0.0, 1.0))?;
        assert!(!eigen.is_complex());
        assert!(!eigen.is_defective());
        assert_eq!(
            eigen,
            EigenDecomposition::RealDistinct {
                eigenvalue1: 2.0,
                eigenvalue2: 1.0,
                eigenvector1: Vector2::new(2.0, 0.0),
                eigenvector2: Vector2::new(0.0, 1.0),
            }
        );
        Ok(())
    }

    #[test]
    fn test_diagonal_keeps_element_order() -> Result<(), LinalgError> {
        // a11 < a22: eigenvalue1 follows a11, not the larger root
        let eigen = EigenDecomposition::from_matrix(&Matrix2::new(-1.0, 0.0, 0.0, 3.0))?;
        assert_eq!(eigen.real_eigenvalues(), Some((-1.0, 3.0)));
        assert_eq!(
            eigen.real_eigenvectors(),
            Some((Vector2::new(-1.0, 0.0), Vector2::new(0.0, 3.0)))
        );
        Ok(())
    }

    #[test]
    fn test_identity_is_not_defective() -> Result<(), LinalgError> {
        let eigen = EigenDecomposition::from_matrix(&Matrix2::IDENTITY)?;
        assert!(!eigen.is_defective());
        assert_eq!(eigen.real_eigenvalues(), Some((1.0, 1.0)));
        Ok(())
    }

    #[test]
    fn test_rotation_is_complex() -> Result<(), LinalgError> {
        let m = Matrix2::new(0.0, -1.0, 1.0, 0.0);
        assert_eq!(m.trace(), 0.0);
        assert_eq!(m.determinant(), 1.0);
        assert_eq!(m.discriminant(), -4.0);

        let eigen = EigenDecomposition::from_matrix(&m)?;
        assert!(eigen.is_complex());
        let pair = eigen.complex_pair().ok_or(LinalgError::DegenerateBasis)?;
        assert_eq!(pair.real_value, 0.0);
        assert_eq!(pair.imag_value, 1.0);
        assert_eq!(pair.real_vector, Vector2::new(1.0, 0.0));
        assert_eq!(pair.imag_vector, Vector2::new(0.0, -1.0));
        assert_eq!(eigen.real_eigenvalues(), None);
        Ok(())
    }

    #[test]
    fn test_complex_eigenvector_solves_system() -> Result<(), LinalgError> {
        // (A - λI)(r + iw) = 0 with λ = a + ib splits into
        // (A - aI) r + b w = 0 and (A - aI) w - b r = 0
        for m in [
            Matrix2::new(1.0, -2.0, 3.0, 0.5),
            Matrix2::new(2.0, -5.0, 1.0, -2.0),
            Matrix2::new(3.0, -1.0, 4.0, 1.0),
            Matrix2::new(-0.5, 2.5, -1.0, 0.3),
        ] {
            let eigen = EigenDecomposition::from_matrix(&m)?;
            let pair = eigen.complex_pair().ok_or(LinalgError::DegenerateBasis)?;
            let (a, b) = (pair.real_value, pair.imag_value);
            let shifted = Matrix2::new(m.a11 - a, m.a12, m.a21, m.a22 - a);
            let re = shifted.mul_vec(pair.real_vector) + b * pair.imag_vector;
            let im = shifted.mul_vec(pair.imag_vector) - b * pair.real_vector;
            assert_relative_eq!(re.length(), 0.0, epsilon = 1e-12);
            assert_relative_eq!(im.length(), 0.0, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_complex_uses_a21_when_a12_is_zero() -> Result<(), LinalgError> {
        let pair = complex_eigenpair(&Matrix2::new(1.0, 0.0, 2.0, 1.0), 1.0, 1.0)?;
        assert_eq!(pair.real_vector, Vector2::new(0.0, 1.0));
        assert_eq!(pair.imag_vector, Vector2::new(0.5, 0.0));
        Ok(())
    }

    #[test]
    fn test_real_uses_a21_when_a12_is_zero() -> Result<(), LinalgError> {
        let m = Matrix2::new(2.0, 0.0, 1.0, 3.0);
        let eigen = EigenDecomposition::from_matrix(&m)?;
        assert_eq!(eigen.real_eigenvalues(), Some((3.0, 2.0)));
        let (v1, v2) = eigen
            .real_eigenvectors()
            .ok_or(LinalgError::DegenerateBasis)?;
        assert_relative_eq!(v1.x, 0.0);
        assert_relative_eq!(v1.y, 3.0);
        assert_eigenpair(&m, 2.0, v2);
        Ok(())
    }

    #[test]
    fn test_complex_without_off_diagonal_fails() {
        let res = complex_eigenpair(&Matrix2::new(1.0, 0.0, 0.0, 1.0), 1.0, 1.0);
        assert_eq!(res, Err(LinalgError::DegenerateBasis));
    }

    #[test]
    fn test_defective() -> Result<(), LinalgError> {
        let eigen = EigenDecomposition::from_matrix(&Matrix2::new(2.0, 1.0, 0.0, 2.0))?;
        assert!(eigen.is_defective());
        assert!(!eigen.is_complex());
        assert_eq!(eigen.real_eigenvalues(), Some((2.0, 2.0)));
        assert_eq!(
            eigen,
            EigenDecomposition::Defective {
                eigenvalue: 2.0,
                eigenvector: Vector2::new(2.0, 0.0),
            }
        );
        Ok(())
    }

    #[test]
    fn test_real_eigenvectors_satisfy_eigen_equation() -> Result<(), LinalgError> {
        let matrices = [
            Matrix2::new(1.0, 2.0, 3.0, 4.0),
            Matrix2::new(2.0, 1.0, 1.0, 2.0),
            Matrix2::new(1.0, 0.0, 2.0, 3.0),
            Matrix2::new(-1.5, 0.7, 0.2, 2.4),
            Matrix2::new(3.0, -2.0, 1.0, 0.0),
        ];
        for m in matrices.iter() {
            let eigen = EigenDecomposition::from_matrix(m)?;
            let (l1, l2) = eigen.real_eigenvalues().ok_or(LinalgError::DegenerateBasis)?;
            let (v1, v2) = eigen.real_eigenvectors().ok_or(LinalgError::DegenerateBasis)?;
            assert_eigenpair(m, l1, v1);
            assert_eigenpair(m, l2, v2);
            assert_relative_eq!(l1 + l2, m.trace(), epsilon = 1e-9);
            assert_relative_eq!(l1 * l2, m.determinant(), epsilon = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_singular_matrix_has_zero_eigenvector() -> Result<(), LinalgError> {
        // eigenvalue 0 scales its eigenvector down to the origin
        let eigen = EigenDecomposition::from_matrix(&Matrix2::new(1.0, 1.0, 1.0, 1.0))?;
        let (l1, l2) = eigen.real_eigenvalues().ok_or(LinalgError::DegenerateBasis)?;
        assert_relative_eq!(l1, 2.0);
        assert_relative_eq!(l2, 0.0);
        let (_, v2) = eigen.real_eigenvectors().ok_or(LinalgError::DegenerateBasis)?;
        assert_relative_eq!(v2.length(), 0.0);
        Ok(())
    }
}
