//! Conversions between matrix elements, basis vectors and rotation/scale sliders.
//!
//! The slider representation describes each basis vector by an angle in
//! degrees and a signed scale. [`calculate_from_transforms`] is not an exact
//! inverse of [`calculate_transformation`]: the sign of `a11`/`a22` is picked
//! from the quadrant of the rotation so that a non-negative scale slider can
//! cover the full `[0, 360)` rotation range.

use crate::{Matrix2, Vector2};

/// Rotation angles and scale factors of the two basis vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Rotation of the x basis vector in degrees.
    pub rotation_x: f64,
    /// Rotation of the y basis vector in degrees.
    pub rotation_y: f64,
    /// Scale along the x basis vector.
    pub scale_x: f64,
    /// Scale along the y basis vector.
    pub scale_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// Basis vectors, rotation angles and determinant derived from a matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transformation {
    /// Image of the x unit vector (first column).
    pub basis_x: Vector2,
    /// Image of the y unit vector (second column).
    pub basis_y: Vector2,
    /// Rotation of `basis_x` in degrees, in `[0, 360)`.
    pub rotation_x: f64,
    /// Rotation of `basis_y` in degrees, in `[0, 360)`.
    pub rotation_y: f64,
    /// Determinant of the matrix.
    pub determinant: f64,
}

impl Transformation {
    /// Slider positions for this transformation.
    ///
    /// Rotations are taken as computed. The scales are the diagonal elements
    /// `basis_x.x` and `basis_y.y` clamped into `scale_range`.
    pub fn slider_transform(&self, scale_range: (f64, f64)) -> Transform {
        let (min, max) = scale_range;
        Transform {
            rotation_x: self.rotation_x,
            rotation_y: self.rotation_y,
            scale_x: self.basis_x.x.max(min).min(max),
            scale_y: self.basis_y.y.max(min).min(max),
        }
    }
}

/// Extract the basis vectors (columns) of a matrix.
///
/// # Returns
///
/// `(basis_x, basis_y)` where `basis_x = (a11, a21)` and `basis_y = (a12, a22)`.
pub fn extract_basis_vectors(m: &Matrix2) -> (Vector2, Vector2) {
    let basis_x = Vector2::new(m.a11, m.a21);
    let basis_y = Vector2::new(m.a12, m.a22);
    (basis_x, basis_y)
}

#[inline]
fn normalize_degrees(angle: f64) -> f64 {
    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Calculate rotation angles and determinant of a matrix.
///
/// `rotation_x` is measured clockwise from the positive x axis and
/// `rotation_y` clockwise from the positive y axis. A zero-length basis
/// vector yields a rotation of 0.
///
/// # Example
///
/// ```
/// use linviz_linalg::{calculate_transformation, Matrix2};
///
/// let t = calculate_transformation(&Matrix2::new(0.0, -1.0, 1.0, 0.0));
/// assert!((t.rotation_x - 270.0).abs() < 1e-9);
/// assert!((t.rotation_y - 270.0).abs() < 1e-9);
/// assert_eq!(t.determinant, 1.0);
/// ```
pub fn calculate_transformation(m: &Matrix2) -> Transformation {
    let (basis_x, basis_y) = extract_basis_vectors(m);

    let rotation_x = normalize_degrees(-basis_x.y.atan2(basis_x.x).to_degrees());
    let rotation_y = normalize_degrees(basis_y.x.atan2(basis_y.y).to_degrees());

    Transformation {
        basis_x,
        basis_y,
        rotation_x,
        rotation_y,
        determinant: m.determinant(),
    }
}

/// Sign applied to a scale so rotations in `[90, 270)` flip the basis vector.
#[inline]
fn quadrant_sign(rotation: f64) -> f64 {
    if (90.0..270.0).contains(&rotation) {
        -1.0
    } else {
        1.0
    }
}

/// Calculate matrix elements from rotation angles and scale factors.
///
/// No clamping is performed: rotations close to 90 or 270 degrees produce
/// very large (or infinite) off-diagonal elements.
pub fn calculate_from_transforms(t: &Transform) -> Matrix2 {
    let theta_x = t.rotation_x.to_radians();
    let theta_y = t.rotation_y.to_radians();

    let a11 = quadrant_sign(t.rotation_x) * t.scale_x;
    let a21 = -theta_x.tan() * a11;
    let a22 = quadrant_sign(t.rotation_y) * t.scale_y;
    let a12 = theta_y.tan() * a22;

    Matrix2::new(a11, a12, a21, a22)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_extract_basis_vectors() {
        let (bx, by) = extract_basis_vectors(&Matrix2::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(bx, Vector2::new(1.0, 3.0));
        assert_eq!(by, Vector2::new(2.0, 4.0));
    }

    #[test]
    fn test_calculate_transformation_identity() {
        let t = calculate_transformation(&Matrix2::IDENTITY);
        assert_eq!(t.rotation_x, 0.0);
        assert_eq!(t.rotation_y, 0.0);
        assert_eq!(t.determinant, 1.0);
    }

    #[test]
    fn test_calculate_transformation_negative_angles_wrap() {
        // basis_x pointing up: atan2(1, 0) = 90 -> -90 -> 270
        let t = calculate_transformation(&Matrix2::new(0.0, 0.0, 1.0, 1.0));
        assert_relative_eq!(t.rotation_x, 270.0, epsilon = 1e-9);
        assert!(t.rotation_x >= 0.0 && t.rotation_x < 360.0);
    }

    #[test]
    fn test_calculate_transformation_zero_matrix() {
        let t = calculate_transformation(&Matrix2::ZERO);
        assert_eq!(t.rotation_x, 0.0);
        assert_eq!(t.rotation_y, 0.0);
        assert_eq!(t.determinant, 0.0);
    }

    #[test]
    fn test_calculate_from_transforms_identity() {
        let m = calculate_from_transforms(&Transform::default());
        assert_relative_eq!(m.a11, 1.0);
        assert_relative_eq!(m.a12, 0.0);
        assert_relative_eq!(m.a21, 0.0);
        assert_relative_eq!(m.a22, 1.0);
    }

    #[test]
    fn test_calculate_from_transforms_quadrant_sign() {
        let m = calculate_from_transforms(&Transform {
            rotation_x: 180.0,
            rotation_y: 90.0,
            scale_x: 2.0,
            scale_y: 1.0,
        });
        assert_relative_eq!(m.a11, -2.0);
        assert_eq!(m.a22, -1.0);
        // tan(90 deg) diverges and is passed through untouched.
        assert!(m.a12.abs() > 1e10);
    }

    #[test]
    fn test_rotation_roundtrip_stable_region() {
        let angles = [0.0, 15.0, 45.0, 89.0, 270.5, 300.0, 359.0];
        for &rx in angles.iter() {
            for &ry in angles.iter() {
                let m = calculate_from_transforms(&Transform {
                    rotation_x: rx,
                    rotation_y: ry,
                    scale_x: 1.5,
                    scale_y: 0.5,
                });
                let t = calculate_transformation(&m);
                assert_relative_eq!(t.rotation_x, rx, epsilon = 1e-9);
                assert_relative_eq!(t.rotation_y, ry, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_roundtrip_is_lossy_for_general_matrices() {
        // Known approximation: the heuristic encodes the x scale as a11, so
        // feeding back the column norm does not reproduce the matrix.
        let m = Matrix2::new(2.0, 0.0, 2.0, 1.0);
        let t = calculate_transformation(&m);
        let norm_x = t.basis_x.length();
        let back = calculate_from_transforms(&Transform {
            rotation_x: t.rotation_x,
            rotation_y: t.rotation_y,
            scale_x: norm_x,
            scale_y: t.basis_y.length(),
        });
        assert!((back.a11 - m.a11).abs() > 1e-3);
    }

    #[test]
    fn test_slider_transform_roundtrip() {
        let m = Matrix2::new(1.5, 0.3, -0.8, 2.0);
        let t = calculate_transformation(&m);
        let sliders = t.slider_transform((0.1, 3.0));
        let back = calculate_from_transforms(&sliders);
        assert_relative_eq!(back.a11, m.a11, epsilon = 1e-12);
        assert_relative_eq!(back.a12, m.a12, epsilon = 1e-12);
        assert_relative_eq!(back.a21, m.a21, epsilon = 1e-12);
        assert_relative_eq!(back.a22, m.a22, epsilon = 1e-12);
    }

    #[test]
    fn test_slider_transform_clamps_scale() {
        let t = calculate_transformation(&Matrix2::new(-1.0, 0.0, 0.0, 5.0));
        let sliders = t.slider_transform((0.1, 3.0));
        assert_eq!(sliders.scale_x, 0.1);
        assert_eq!(sliders.scale_y, 3.0);
    }
}
