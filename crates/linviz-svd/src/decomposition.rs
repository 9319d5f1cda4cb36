use faer::Mat;
use linviz_image::Image;

use crate::error::SvdError;

/// Number of color components of an RGB image.
pub const NUM_COMPONENTS: usize = 3;

/// Flatten an RGB image into a `(H * W) x 3` matrix with values in `[0, 1]`.
///
/// Row `i * W + j` holds the normalized color of the pixel at row `i` and
/// column `j`.
pub fn image_to_matrix(image: &Image<u8, 3>) -> Mat<f64> {
    let data = image.as_slice();
    Mat::from_fn(image.size().num_pixels(), NUM_COMPONENTS, |i, j| {
        data[i * NUM_COMPONENTS + j] as f64 / 255.0
    })
}

/// Thin singular value decomposition of a flattened RGB image.
///
/// `A ≈ U · diag(σ) · Vᵀ` with `A` of shape `M x 3`. Singular values are
/// ordered from largest to smallest and the signs are normalized with
/// [`normalize_signs`], so two decompositions of the same image are
/// identical.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorSvd {
    /// Left singular vectors, one row per pixel.
    pub u: Vec<[f64; 3]>,
    /// Singular values in non-increasing order.
    pub sigma: [f64; 3],
    /// Right singular vectors as rows, expressed in RGB space.
    pub vt: [[f64; 3]; 3],
}

impl ColorSvd {
    /// Decompose an RGB image.
    ///
    /// # Errors
    ///
    /// Returns [`SvdError::InvalidShape`] when the image has fewer than 3 pixels.
    ///
    /// # Example
    ///
    /// ```
    /// use linviz_image::{Image, ImageSize};
    /// use linviz_svd::ColorSvd;
    ///
    /// let image = Image::<u8, 3>::from_fn(ImageSize::square(4), |row, col| {
    ///     [(row * 60) as u8, (col * 60) as u8, 0]
    /// });
    /// let svd = ColorSvd::from_image(&image).unwrap();
    /// assert_eq!(svd.u.len(), 16);
    /// assert!(svd.sigma[0] >= svd.sigma[1]);
    /// ```
    pub fn from_image(image: &Image<u8, 3>) -> Result<Self, SvdError> {
        Self::from_matrix(&image_to_matrix(image))
    }

    /// Decompose an `M x 3` matrix.
    ///
    /// # Errors
    ///
    /// * [`SvdError::InvalidShape`] when the matrix is not `M x 3` with `M >= 3`.
    /// * [`SvdError::NonFiniteInput`] when an entry is NaN or infinite.
    pub fn from_matrix(a: &Mat<f64>) -> Result<Self, SvdError> {
        if a.ncols() != NUM_COMPONENTS || a.nrows() < NUM_COMPONENTS {
            return Err(SvdError::InvalidShape(a.nrows(), a.ncols()));
        }

        for j in 0..a.ncols() {
            for i in 0..a.nrows() {
                if !a.read(i, j).is_finite() {
                    return Err(SvdError::NonFiniteInput);
                }
            }
        }

        let svd = a.thin_svd();
        let (u, s, v) = (svd.u(), svd.s_diagonal(), svd.v());

        // faer already sorts the singular values, the permutation only makes
        // the ordering independent of the backend
        let mut order = [0, 1, 2];
        order.sort_by(|&p, &q| s.read(q).total_cmp(&s.read(p)));

        let sigma = order.map(|c| s.read(c));
        let mut vt = order.map(|c| [v.read(0, c), v.read(1, c), v.read(2, c)]);
        let mut u = (0..u.nrows())
            .map(|i| order.map(|c| u.read(i, c)))
            .collect::<Vec<_>>();

        normalize_signs(&mut u, &mut vt);

        log::debug!("color svd of {} rows: sigma = {:?}", a.nrows(), sigma);

        Ok(Self { u, sigma, vt })
    }

    /// Number of rows of `U`, i.e. pixels of the decomposed image.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.u.len()
    }

    /// The rank-1 term `σ_c u_c v_cᵀ` evaluated at one row.
    #[inline]
    pub fn component_at(&self, row: usize, c: usize) -> [f64; 3] {
        let weight = self.u[row][c] * self.sigma[c];
        self.vt[c].map(|v| weight * v)
    }

    /// Sum of the first `rank` terms evaluated at one row.
    pub fn approximation_at(&self, row: usize, rank: usize) -> [f64; 3] {
        (0..rank.min(NUM_COMPONENTS)).fold([0.0; 3], |mut acc, c| {
            let term = self.component_at(row, c);
            for ch in 0..3 {
                acc[ch] += term[ch];
            }
            acc
        })
    }
}

/// Resolve the sign ambiguity of an SVD in place.
///
/// For each row `i` of `vt`, the entry of largest magnitude (the first one on
/// ties) is made positive by negating row `i` of `vt` together with column `i`
/// of `u`. The product `U · diag(σ) · Vᵀ` is unchanged and applying the
/// function twice is the same as applying it once.
pub fn normalize_signs(u: &mut [[f64; 3]], vt: &mut [[f64; 3]; 3]) {
    for (i, row) in vt.iter_mut().enumerate() {
        let mut max_idx = 0;
        for j in 1..row.len() {
            if row[j].abs() > row[max_idx].abs() {
                max_idx = j;
            }
        }

        if row[max_idx] < 0.0 {
            row.iter_mut().for_each(|v| *v = -*v);
            u.iter_mut().for_each(|r| r[i] = -r[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use linviz_image::ImageSize;

    fn verify_reconstruction(a: &Mat<f64>, svd: &ColorSvd) {
        for i in 0..a.nrows() {
            let approx = svd.approximation_at(i, NUM_COMPONENTS);
            for j in 0..NUM_COMPONENTS {
                assert_relative_eq!(approx[j], a.read(i, j), epsilon = 1e-10);
            }
        }
    }

    fn verify_orthonormal_rows(vt: &[[f64; 3]; 3]) {
        for p in 0..3 {
            for q in 0..3 {
                let dot: f64 = (0..3).map(|k| vt[p][k] * vt[q][k]).sum();
                let expected = if p == q { 1.0 } else { 0.0 };
                assert_relative_eq!(dot, expected, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_image_to_matrix() -> Result<(), SvdError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![255, 0, 51, 0, 102, 255],
        )?;
        let a = image_to_matrix(&image);
        assert_eq!((a.nrows(), a.ncols()), (2, 3));
        assert_eq!(a.read(0, 0), 1.0);
        assert_eq!(a.read(0, 2), 0.2);
        assert_eq!(a.read(1, 1), 0.4);
        assert_eq!(a.read(1, 2), 1.0);
        Ok(())
    }

    #[test]
    fn test_from_matrix_reconstructs() -> Result<(), SvdError> {
        let a = Mat::from_fn(6, 3, |i, j| ((i * 3 + j) as f64 * 0.37).sin());
        let svd = ColorSvd::from_matrix(&a)?;
        assert!(svd.sigma[0] >= svd.sigma[1] && svd.sigma[1] >= svd.sigma[2]);
        assert!(svd.sigma[2] >= 0.0);
        verify_reconstruction(&a, &svd);
        verify_orthonormal_rows(&svd.vt);
        Ok(())
    }

    #[test]
    fn test_signs_are_normalized() -> Result<(), SvdError> {
        let a = Mat::from_fn(5, 3, |i, j| -((i + 2 * j) as f64) - 1.0);
        let svd = ColorSvd::from_matrix(&a)?;
        for row in &svd.vt {
            let max = row.iter().copied().fold(0.0f64, |m, v| m.max(v.abs()));
            let first = row.iter().position(|v| v.abs() == max);
            assert!(first.is_some_and(|idx| row[idx] > 0.0));
        }
        verify_reconstruction(&a, &svd);
        Ok(())
    }

    #[test]
    fn test_normalize_signs_is_idempotent() {
        let mut u = vec![[1.0, -2.0, 0.5], [0.25, 4.0, -1.0]];
        let mut vt = [[-0.8, 0.6, 0.0], [0.0, 0.0, -1.0], [0.6, 0.8, 0.0]];
        normalize_signs(&mut u, &mut vt);
        assert_eq!(vt[0], [0.8, -0.6, -0.0]);
        assert_eq!(vt[1], [-0.0, -0.0, 1.0]);
        assert_eq!(u[0], [-1.0, 2.0, 0.5]);

        let (u_once, vt_once) = (u.clone(), vt);
        normalize_signs(&mut u, &mut vt);
        assert_eq!(u, u_once);
        assert_eq!(vt, vt_once);
    }

    #[test]
    fn test_normalize_signs_ties_use_first_index() {
        let mut u = vec![[1.0, 1.0, 1.0]];
        let mut vt = [[-0.5, 0.5, 0.0], [0.5, -0.5, 0.0], [0.0, 0.0, 1.0]];
        normalize_signs(&mut u, &mut vt);
        assert_eq!(vt[0], [0.5, -0.5, -0.0]);
        assert_eq!(vt[1], [0.5, -0.5, 0.0]);
        assert_eq!(u[0], [-1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_invalid_shape() {
        let a = Mat::<f64>::zeros(2, 3);
        assert_eq!(ColorSvd::from_matrix(&a), Err(SvdError::InvalidShape(2, 3)));
        let a = Mat::<f64>::zeros(10, 2);
        assert_eq!(ColorSvd::from_matrix(&a), Err(SvdError::InvalidShape(10, 2)));
    }

    #[test]
    fn test_non_finite_input() {
        let a = Mat::from_fn(4, 3, |i, j| if i == 2 && j == 1 { f64::NAN } else { 1.0 });
        assert_eq!(ColorSvd::from_matrix(&a), Err(SvdError::NonFiniteInput));
    }

    #[test]
    fn test_black_image_has_zero_spectrum() -> Result<(), SvdError> {
        let image = Image::<u8, 3>::from_size_val(ImageSize::square(3), 0)?;
        let svd = ColorSvd::from_image(&image)?;
        for s in svd.sigma {
            assert_relative_eq!(s, 0.0, epsilon = 1e-12);
        }
        Ok(())
    }
}
