use linviz_image::{stats, Image, ImageSize, Rgb};

use crate::decomposition::{ColorSvd, NUM_COMPONENTS};
use crate::error::SvdError;

/// Map a normalized intensity to an 8-bit value, rounding to nearest and saturating.
#[inline]
fn to_u8(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

fn check_size(svd: &ColorSvd, size: ImageSize) -> Result<(), SvdError> {
    if svd.num_rows() != size.num_pixels() {
        return Err(SvdError::SizeMismatch(svd.num_rows(), size.num_pixels()));
    }
    Ok(())
}

fn check_component(c: usize) -> Result<(), SvdError> {
    if c >= NUM_COMPONENTS {
        return Err(SvdError::InvalidComponent(c, NUM_COMPONENTS));
    }
    Ok(())
}

/// Render the rank-`rank` approximation `Σ_{c<rank} σ_c u_c v_cᵀ` as an RGB image.
///
/// # Arguments
///
/// * `svd` - The decomposition of the original image.
/// * `size` - The size of the original image.
/// * `rank` - The number of components to keep, in `0..=3`.
///
/// # Errors
///
/// * [`SvdError::InvalidRank`] when `rank > 3`.
/// * [`SvdError::SizeMismatch`] when `size` does not match the decomposition.
///
/// A rank of zero yields a black image.
pub fn reconstruct_rank(
    svd: &ColorSvd,
    size: ImageSize,
    rank: usize,
) -> Result<Image<u8, 3>, SvdError> {
    if rank > NUM_COMPONENTS {
        return Err(SvdError::InvalidRank(rank, NUM_COMPONENTS));
    }
    check_size(svd, size)?;

    let data = (0..svd.num_rows())
        .flat_map(|row| svd.approximation_at(row, rank).map(to_u8))
        .collect();

    Ok(Image::new(size, data)?)
}

/// Render the single rank-1 term `σ_c u_c v_cᵀ` as an RGB image.
///
/// Negative contributions saturate to black.
pub fn component_image(
    svd: &ColorSvd,
    size: ImageSize,
    component: usize,
) -> Result<Image<u8, 3>, SvdError> {
    check_component(component)?;
    check_size(svd, size)?;

    let data = (0..svd.num_rows())
        .flat_map(|row| svd.component_at(row, component).map(to_u8))
        .collect();

    Ok(Image::new(size, data)?)
}

/// Render column `c` of `U` as a grayscale image, min-max normalized to `[0, 255]`.
///
/// A constant column renders black.
pub fn u_column_grayscale(
    svd: &ColorSvd,
    size: ImageSize,
    component: usize,
) -> Result<Image<u8, 1>, SvdError> {
    check_component(component)?;
    check_size(svd, size)?;

    let column = svd.u.iter().map(|row| row[component]);
    let (min, max) = column
        .clone()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;

    let data = column
        .map(|v| {
            if range > 0.0 {
                ((v - min) / range * 255.0).floor() as u8
            } else {
                0
            }
        })
        .collect();

    Ok(Image::new(size, data)?)
}

/// Keep the `k` raw channels with the largest standard deviation, zero the others.
///
/// This is the plain RGB counterpart of [`reconstruct_rank`]: channels are
/// ranked by their population standard deviation (ties keep R, G, B order) and
/// copied verbatim, no decomposition involved.
///
/// # Errors
///
/// * [`SvdError::InvalidRank`] when `k > 3`.
/// * [`SvdError::Image`] when the image is empty.
pub fn reconstruct_top_channels(image: &Image<u8, 3>, k: usize) -> Result<Image<u8, 3>, SvdError> {
    let keep = top_channel_mask(image, k)?;

    let data = image
        .pixels()
        .flat_map(|px| std::array::from_fn::<u8, 3, _>(|c| if keep[c] { px[c] } else { 0 }))
        .collect();

    Ok(Image::new(image.size(), data)?)
}

/// The value [`reconstruct_top_channels`] produces at a single pixel.
///
/// # Arguments
///
/// * `image` - The original image.
/// * `x` - The column of the pixel.
/// * `y` - The row of the pixel.
/// * `k` - The number of channels to keep.
pub fn channel_at(image: &Image<u8, 3>, x: usize, y: usize, k: usize) -> Result<Rgb, SvdError> {
    let keep = top_channel_mask(image, k)?;
    let px = image.pixel(x, y)?;
    Ok(std::array::from_fn(|c| if keep[c] { px[c] } else { 0 }))
}

fn top_channel_mask(image: &Image<u8, 3>, k: usize) -> Result<[bool; 3], SvdError> {
    if k > NUM_COMPONENTS {
        return Err(SvdError::InvalidRank(k, NUM_COMPONENTS));
    }
    let order = stats::channels_by_std(image)?;
    let mut keep = [false; 3];
    for &c in &order[..k] {
        keep[c] = true;
    }
    Ok(keep)
}
