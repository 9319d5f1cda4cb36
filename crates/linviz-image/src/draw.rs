//! Filled shape rasterizers.
//!
//! Every function paints in place and silently skips pixels outside the
//! image. Coordinates are `(x, y)` = (column, row) in pixels.

use std::f64::consts::PI;

use crate::image::Image;

/// Paint every pixel whose `(row, col)` satisfies `inside`.
fn fill_where<const C: usize>(
    img: &mut Image<u8, C>,
    color: [u8; C],
    inside: impl Fn(f64, f64) -> bool,
) {
    let cols = img.cols();
    for (idx, pixel) in img.as_slice_mut().chunks_exact_mut(C).enumerate() {
        let (row, col) = (idx / cols, idx % cols);
        if inside(row as f64, col as f64) {
            pixel.copy_from_slice(&color);
        }
    }
}

/// Draws a filled circle on an image inplace.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `center` - The center of the circle as (x, y).
/// * `radius` - The radius of the circle.
/// * `color` - The fill color.
pub fn draw_filled_circle<const C: usize>(
    img: &mut Image<u8, C>,
    center: (f64, f64),
    radius: f64,
    color: [u8; C],
) {
    let (cx, cy) = center;
    fill_where(img, color, |i, j| {
        ((i - cy).powi(2) + (j - cx).powi(2)).sqrt() <= radius
    });
}

/// Draws a filled axis-aligned rectangle on an image inplace.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `top_left` - The top-left corner as (x, y).
/// * `width` - The width of the rectangle.
/// * `height` - The height of the rectangle.
/// * `color` - The fill color.
pub fn draw_filled_rect<const C: usize>(
    img: &mut Image<u8, C>,
    top_left: (f64, f64),
    width: f64,
    height: f64,
    color: [u8; C],
) {
    let (x, y) = top_left;
    let row_start = y.floor().max(0.0) as usize;
    let row_end = (y + height).ceil().min(img.rows() as f64).max(0.0) as usize;
    let col_start = x.floor().max(0.0) as usize;
    let col_end = (x + width).ceil().min(img.cols() as f64).max(0.0) as usize;

    let cols = img.cols();
    let data = img.as_slice_mut();
    for row in row_start..row_end {
        for col in col_start..col_end {
            let idx = (row * cols + col) * C;
            data[idx..idx + C].copy_from_slice(&color);
        }
    }
}

/// Draws a filled right triangle with its right angle at `corner`.
///
/// The legs extend `size` pixels right and down from the corner.
pub fn draw_filled_triangle<const C: usize>(
    img: &mut Image<u8, C>,
    corner: (f64, f64),
    size: f64,
    color: [u8; C],
) {
    let (cx, cy) = corner;
    fill_where(img, color, |i, j| {
        let rel_i = i - cy;
        let rel_j = j - cx;
        rel_j >= 0.0 && rel_i >= 0.0 && rel_j < size - rel_i && rel_i < size
    });
}

/// Draws a filled diamond (L1 ball) of half-diagonal `size`.
pub fn draw_filled_diamond<const C: usize>(
    img: &mut Image<u8, C>,
    center: (f64, f64),
    size: f64,
    color: [u8; C],
) {
    let (cx, cy) = center;
    fill_where(img, color, |i, j| (j - cx).abs() + (i - cy).abs() <= size);
}

/// Draws a filled regular polygon.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `center` - The center of the polygon as (x, y).
/// * `size` - The circumradius.
/// * `sides` - The number of sides.
/// * `rotation` - The rotation in radians.
/// * `color` - The fill color.
pub fn draw_filled_polygon<const C: usize>(
    img: &mut Image<u8, C>,
    center: (f64, f64),
    size: f64,
    sides: u32,
    rotation: f64,
    color: [u8; C],
) {
    let (cx, cy) = center;
    let sector = 2.0 * PI / sides as f64;
    let half_sector = PI / sides as f64;
    let apothem = size * half_sector.cos();
    fill_where(img, color, |i, j| {
        let dx = j - cx;
        let dy = i - cy;
        let angle = dy.atan2(dx) + rotation;
        let dist = (dx * dx + dy * dy).sqrt();
        // distance to the edge along this direction; `%` keeps the sign of
        // the angle so negative angles fold into (-sector, 0]
        let edge = apothem / ((angle % sector) - half_sector).cos();
        dist <= edge.abs() && dist <= size
    });
}

/// Draws a filled five-pointed star with outer radius `size`.
pub fn draw_filled_star<const C: usize>(
    img: &mut Image<u8, C>,
    center: (f64, f64),
    size: f64,
    color: [u8; C],
) {
    let (cx, cy) = center;
    fill_where(img, color, |i, j| {
        let dx = j - cx;
        let dy = i - cy;
        let angle = dy.atan2(dx);
        let dist = (dx * dx + dy * dy).sqrt();
        let star_angle = ((angle + PI) % (2.0 * PI / 5.0)) - PI / 5.0;
        let star_radius = size * (0.5 + 0.5 * (5.0 * star_angle).cos());
        dist <= star_radius
    });
}

/// Draws a filled axis-aligned ellipse with semi-axes `width` and `height`.
pub fn draw_filled_ellipse<const C: usize>(
    img: &mut Image<u8, C>,
    center: (f64, f64),
    width: f64,
    height: f64,
    color: [u8; C],
) {
    let (cx, cy) = center;
    fill_where(img, color, |i, j| {
        let dx = (j - cx) / width;
        let dy = (i - cy) / height;
        dx * dx + dy * dy <= 1.0
    });
}

/// Draws a plus sign made of two bars of length `2 * size`.
///
/// The bar thickness is `max(3, floor(size / 4))`.
pub fn draw_filled_cross<const C: usize>(
    img: &mut Image<u8, C>,
    center: (f64, f64),
    size: f64,
    color: [u8; C],
) {
    let (cx, cy) = center;
    let thickness = (size / 4.0).floor().max(3.0);
    let length = (size * 2.0).floor();

    // horizontal bar
    draw_filled_rect(
        img,
        ((cx - size).floor(), (cy - thickness / 2.0).floor()),
        length,
        thickness,
        color,
    );

    // vertical bar
    draw_filled_rect(
        img,
        ((cx - thickness / 2.0).floor(), (cy - size).floor()),
        thickness,
        length,
        color,
    );
}

/// Draws a filled heart using the implicit curve `(x² + y² - 1)³ - x² y³ <= 0`.
pub fn draw_filled_heart<const C: usize>(
    img: &mut Image<u8, C>,
    center: (f64, f64),
    size: f64,
    color: [u8; C],
) {
    let (cx, cy) = center;
    fill_where(img, color, |i, j| {
        let dx = (j - cx) / size;
        let dy = (i - cy) / size;
        let r2 = dx * dx + dy * dy;
        (r2 - 1.0).powi(3) - dx * dx * dy.powi(3) <= 0.0 && r2 <= 2.0
    });
}
