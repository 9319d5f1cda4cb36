use std::f64::consts::PI;

use rand::Rng;

use crate::draw;
use crate::error::ImageError;
use crate::image::{Image, ImageSize};
use crate::shape::{Rgb, Shape, ShapeKind};

/// Side of the generated square images in pixels.
pub const IMAGE_SIZE: usize = 100;

/// Maximum number of colors in a palette.
pub const MAX_COLORS: usize = 10;

/// Maximum number of shapes in a pattern.
pub const MAX_SHAPES: usize = 10;

/// Palette colors in the order they are introduced.
pub const BASE_COLORS: [Rgb; MAX_COLORS] = [
    [255, 0, 0],     // red
    [0, 255, 0],     // green
    [0, 0, 255],     // blue
    [255, 255, 0],   // yellow
    [255, 0, 255],   // magenta
    [0, 255, 255],   // cyan
    [255, 128, 0],   // orange
    [128, 0, 255],   // purple
    [255, 192, 203], // pink
    [128, 255, 0],   // lime
];

/// Shape kinds in the order they are introduced.
pub const SHAPE_KINDS: [ShapeKind; 10] = ShapeKind::ALL;

/// Fill color used when the palette is empty.
pub const WHITE: Rgb = [255, 255, 255];

/// Distance kept between a shape anchor and the image border.
const ANCHOR_MARGIN: usize = 20;

const MIN_SHAPE_SIZE: i32 = 15;
const SHAPE_SIZE_SPAN: i32 = 20;

/// The first `min(complexity, MAX_COLORS)` base colors.
///
/// # Example
///
/// ```
/// use linviz_image::generator::color_palette;
///
/// assert_eq!(color_palette(2), vec![[255, 0, 0], [0, 255, 0]]);
/// assert_eq!(color_palette(42).len(), 10);
/// ```
pub fn color_palette(complexity: usize) -> Vec<Rgb> {
    BASE_COLORS[..complexity.min(BASE_COLORS.len())].to_vec()
}

/// Take the first `shape_complexity` shapes and color them cyclically from `palette`.
///
/// Every returned shape gets a color, white when the palette is empty.
pub fn assign_colors(shapes: &[Shape], palette: &[Rgb], shape_complexity: usize) -> Vec<Shape> {
    shapes
        .iter()
        .take(shape_complexity.min(shapes.len()))
        .enumerate()
        .map(|(i, shape)| {
            let color = if palette.is_empty() {
                WHITE
            } else {
                palette[i % palette.len()]
            };
            shape.with_color(color)
        })
        .collect()
}

/// Paint a single colored shape onto an RGB image.
///
/// Shapes without a color are skipped.
pub fn draw_shape(img: &mut Image<u8, 3>, shape: &Shape) {
    let Some(color) = shape.color else {
        return;
    };
    let anchor = (shape.x as f64, shape.y as f64);
    let size = shape.size as f64;

    match shape.kind {
        ShapeKind::Circle => draw::draw_filled_circle(img, anchor, size, color),
        ShapeKind::Rectangle => draw::draw_filled_rect(img, anchor, size, size, color),
        ShapeKind::Triangle => draw::draw_filled_triangle(img, anchor, size, color),
        ShapeKind::Diamond => draw::draw_filled_diamond(img, anchor, size, color),
        ShapeKind::Pentagon => {
            draw::draw_filled_polygon(img, anchor, size, 5, shape.rotation, color)
        }
        ShapeKind::Hexagon => {
            draw::draw_filled_polygon(img, anchor, size, 6, shape.rotation, color)
        }
        ShapeKind::Star => draw::draw_filled_star(img, anchor, size, color),
        ShapeKind::Ellipse => draw::draw_filled_ellipse(img, anchor, size, size * 0.7, color),
        ShapeKind::Cross => draw::draw_filled_cross(img, anchor, size, color),
        ShapeKind::Heart => draw::draw_filled_heart(img, anchor, size, color),
    }
}

/// Generates square RGB images from a pattern of shapes.
///
/// Shape positions are drawn once and kept, colors are applied on every
/// [`ImageGenerator::generate`] call so that changing the palette recolors
/// the same layout.
///
/// # Example
///
/// ```
/// use linviz_image::ImageGenerator;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let generator = ImageGenerator::new();
/// let mut rng = StdRng::seed_from_u64(7);
/// let shapes = generator.generate_shapes(&mut rng);
/// let image = generator.generate(3, 3, &shapes).unwrap();
/// assert_eq!(image.width(), 100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageGenerator {
    image_size: usize,
}

impl Default for ImageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageGenerator {
    /// A generator for `IMAGE_SIZE` x `IMAGE_SIZE` images.
    pub fn new() -> Self {
        Self::with_size(IMAGE_SIZE)
    }

    /// A generator for `side` x `side` images.
    pub fn with_size(side: usize) -> Self {
        Self { image_size: side }
    }

    /// The size of the generated images.
    pub fn image_size(&self) -> ImageSize {
        ImageSize::square(self.image_size)
    }

    fn random_shape<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Shape {
        let span = self.image_size.saturating_sub(2 * ANCHOR_MARGIN).max(1);
        Shape {
            kind: SHAPE_KINDS[index % SHAPE_KINDS.len()],
            color: None,
            x: (rng.random_range(0..span) + ANCHOR_MARGIN) as i32,
            y: (rng.random_range(0..span) + ANCHOR_MARGIN) as i32,
            size: rng.random_range(0..SHAPE_SIZE_SPAN) + MIN_SHAPE_SIZE,
            rotation: rng.random::<f64>() * 2.0 * PI,
        }
    }

    /// Draw a full pattern of `MAX_SHAPES` uncolored shapes.
    ///
    /// Kinds cycle through [`SHAPE_KINDS`]; anchors keep a 20 pixel margin to
    /// the border and sizes lie in `[15, 35)`.
    pub fn generate_shapes<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Shape> {
        (0..MAX_SHAPES)
            .map(|i| self.random_shape(i, rng))
            .collect()
    }

    /// Append up to `count` new shapes without exceeding `MAX_SHAPES`.
    ///
    /// Returns the number of shapes added.
    pub fn add_shapes<R: Rng + ?Sized>(
        &self,
        shapes: &mut Vec<Shape>,
        count: usize,
        rng: &mut R,
    ) -> usize {
        let added = count.min(MAX_SHAPES.saturating_sub(shapes.len()));
        for _ in 0..added {
            let shape = self.random_shape(shapes.len(), rng);
            shapes.push(shape);
        }
        if added < count {
            log::debug!("shape pattern is full, added {added} of {count} shapes");
        }
        added
    }

    /// Render the first `shape_complexity` shapes with a palette of
    /// `color_complexity` colors on a black background.
    ///
    /// # Errors
    ///
    /// Returns an error if the image buffer cannot be allocated with the
    /// generator size.
    pub fn generate(
        &self,
        color_complexity: usize,
        shape_complexity: usize,
        shapes: &[Shape],
    ) -> Result<Image<u8, 3>, ImageError> {
        let mut img = Image::from_size_val(self.image_size(), 0u8)?;

        let palette = color_palette(color_complexity);
        for shape in assign_colors(shapes, &palette, shape_complexity) {
            draw_shape(&mut img, &shape);
        }

        Ok(img)
    }
}
