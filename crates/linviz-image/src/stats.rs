use num_traits::ToPrimitive;

use crate::error::ImageError;
use crate::image::Image;

/// Compute the per-channel population standard deviation and mean of an image.
///
/// # Arguments
///
/// * `image` - The input image.
///
/// # Returns
///
/// A tuple `(std, mean)` with one entry per channel.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] when the image has no pixels.
///
/// # Example
///
/// ```
/// use linviz_image::{Image, ImageSize};
/// use linviz_image::stats::std_mean;
///
/// let image = Image::<u8, 3>::new(
///    ImageSize {
///      width: 2,
///      height: 2,
///  },
/// vec![0, 1, 2, 253, 254, 255, 128, 129, 130, 64, 65, 66],
/// ).unwrap();
///
/// let (std, mean) = std_mean(&image).unwrap();
///
/// assert_eq!(mean, [111.25, 112.25, 113.25]);
/// assert!((std[0] - 93.5183805462862).abs() < 1e-9);
/// ```
pub fn std_mean<T, const C: usize>(image: &Image<T, C>) -> Result<([f64; C], [f64; C]), ImageError>
where
    T: ToPrimitive,
{
    let n = image.size().num_pixels();
    if n == 0 {
        return Err(ImageError::EmptyImage);
    }

    let (sum, sq_sum) = image.pixels().fold(
        ([0f64; C], [0f64; C]),
        |(mut sum, mut sq_sum), pixel| {
            for (c, val) in pixel.iter().enumerate() {
                let v = val.to_f64().unwrap_or(0.0);
                sum[c] += v;
                sq_sum[c] += v * v;
            }
            (sum, sq_sum)
        },
    );

    let n = n as f64;
    let mean = sum.map(|s| s / n);

    let mut std = [0f64; C];
    for c in 0..C {
        // rounding can push a constant channel slightly below zero
        std[c] = (sq_sum[c] / n - mean[c].powi(2)).max(0.0).sqrt();
    }

    Ok((std, mean))
}

/// Channel indices sorted by decreasing standard deviation.
///
/// Channels with equal spread keep their natural order.
pub fn channels_by_std<T, const C: usize>(image: &Image<T, C>) -> Result<[usize; C], ImageError>
where
    T: ToPrimitive,
{
    let (std, _) = std_mean(image)?;
    let mut order: [usize; C] = std::array::from_fn(|c| c);
    order.sort_by(|&a, &b| std[b].total_cmp(&std[a]));
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageSize;
    use approx::assert_relative_eq;

    #[test]
    fn test_std_mean() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 1, 2, 253, 254, 255, 128, 129, 130, 64, 65, 66],
        )?;

        let (std, mean) = std_mean(&image)?;
        for c in 0..3 {
            assert_relative_eq!(std[c], 93.5183805462862, epsilon = 1e-9);
        }
        assert_eq!(mean, [111.25, 112.25, 113.25]);
        Ok(())
    }

    #[test]
    fn test_std_mean_constant_channel() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val(ImageSize::square(3), 7)?;
        let (std, mean) = std_mean(&image)?;
        assert_eq!(std, [0.0; 3]);
        assert_eq!(mean, [7.0; 3]);
        Ok(())
    }

    #[test]
    fn test_std_mean_empty() {
        let image = Image::<u8, 3>::from_fn(ImageSize::square(0), |_, _| [0; 3]);
        assert_eq!(std_mean(&image), Err(ImageError::EmptyImage));
    }

    #[test]
    fn test_channels_by_std() -> Result<(), ImageError> {
        // green varies most, red and blue are constant
        let image = Image::<u8, 3>::new(ImageSize::square(2), vec![
            5, 0, 9, 5, 200, 9, 5, 0, 9, 5, 100, 9,
        ])?;
        assert_eq!(channels_by_std(&image)?, [1, 0, 2]);
        Ok(())
    }
}
