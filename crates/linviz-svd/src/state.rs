use linviz_image::generator::{MAX_COLORS, MAX_SHAPES};
use linviz_image::{Image, ImageGenerator, Shape};
use rand::{rngs::StdRng, SeedableRng};

use crate::decomposition::{ColorSvd, NUM_COMPONENTS};
use crate::error::SvdError;
use crate::reconstruct;

/// Default number of palette colors.
pub const DEFAULT_COLOR_COMPLEXITY: usize = 3;

/// Default number of painted shapes.
pub const DEFAULT_SHAPE_COMPLEXITY: usize = 3;

/// Default rank of the displayed approximation.
pub const DEFAULT_RANK: usize = 3;

/// Interactive state of the color-space SVD demo.
///
/// The shape layout is drawn once from the seeded generator and kept across
/// complexity changes, so changing the palette recolors the same picture.
/// Every mutation rebuilds the image and its decomposition from scratch.
pub struct SvdDemoState {
    generator: ImageGenerator,
    rng: StdRng,
    shapes: Vec<Shape>,
    color_complexity: usize,
    shape_complexity: usize,
    current_rank: usize,
    hovered_vt_row: Option<usize>,
    hovered_original_image: bool,
    rank_slider_active: bool,
    image: Image<u8, 3>,
    svd: ColorSvd,
}

impl SvdDemoState {
    /// Create the demo state with default complexities and a shape layout drawn from `seed`.
    pub fn new(seed: u64) -> Result<Self, SvdError> {
        Self::with_generator(ImageGenerator::new(), seed)
    }

    /// Create the demo state with a custom image generator.
    pub fn with_generator(generator: ImageGenerator, seed: u64) -> Result<Self, SvdError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let shapes = generator.generate_shapes(&mut rng);

        let image = generator.generate(DEFAULT_COLOR_COMPLEXITY, DEFAULT_SHAPE_COMPLEXITY, &shapes)?;
        let svd = ColorSvd::from_image(&image)?;

        Ok(Self {
            generator,
            rng,
            shapes,
            color_complexity: DEFAULT_COLOR_COMPLEXITY,
            shape_complexity: DEFAULT_SHAPE_COMPLEXITY,
            current_rank: DEFAULT_RANK,
            hovered_vt_row: None,
            hovered_original_image: false,
            rank_slider_active: false,
            image,
            svd,
        })
    }

    /// Rebuild the image from the current shapes and complexities, then its SVD.
    pub fn regenerate(&mut self) -> Result<(), SvdError> {
        self.image =
            self.generator
                .generate(self.color_complexity, self.shape_complexity, &self.shapes)?;
        self.svd = ColorSvd::from_image(&self.image)?;
        Ok(())
    }

    /// Set both complexities at once, keeping at least as many shapes as colors.
    ///
    /// Raising the colors above the shapes raises the shapes, lowering the
    /// shapes below the colors lowers the colors. Values are capped at
    /// [`MAX_COLORS`] and [`MAX_SHAPES`]. The rank is clamped to the new
    /// [`SvdDemoState::max_rank`].
    pub fn set_complexity(&mut self, colors: usize, shapes: usize) -> Result<(), SvdError> {
        let mut colors = colors.min(MAX_COLORS);
        let mut shapes = shapes.min(MAX_SHAPES);

        if colors > self.shape_complexity && colors != self.color_complexity {
            let adjusted = shapes.max(colors);
            if adjusted != shapes {
                log::info!("shape complexity raised to {adjusted} to support {colors} colors");
            }
            shapes = adjusted;
        }

        if shapes < self.color_complexity && shapes != self.shape_complexity {
            let adjusted = colors.min(shapes);
            if adjusted != colors {
                log::info!("color complexity lowered to {adjusted} to match {shapes} shapes");
            }
            colors = adjusted;
        }

        let have = self.shapes.len();
        if shapes > have {
            self.generator
                .add_shapes(&mut self.shapes, shapes - have, &mut self.rng);
        }

        self.color_complexity = colors;
        self.shape_complexity = shapes;
        self.regenerate()?;
        self.current_rank = self.current_rank.min(self.max_rank());
        Ok(())
    }

    /// Change the number of palette colors.
    pub fn set_color_complexity(&mut self, colors: usize) -> Result<(), SvdError> {
        self.set_complexity(colors, self.shape_complexity)
    }

    /// Change the number of painted shapes.
    pub fn set_shape_complexity(&mut self, shapes: usize) -> Result<(), SvdError> {
        self.set_complexity(self.color_complexity, shapes)
    }

    /// Set the displayed rank, clamped to [`SvdDemoState::max_rank`].
    pub fn set_rank(&mut self, rank: usize) {
        self.current_rank = rank.min(self.max_rank());
    }

    /// The largest meaningful rank, `min(color_complexity, 3)`.
    pub fn max_rank(&self) -> usize {
        self.color_complexity.min(NUM_COMPONENTS)
    }

    /// Hover a row of `Vᵀ`, or clear the hover with `None`.
    pub fn set_hovered_vt_row(&mut self, row: Option<usize>) {
        self.hovered_vt_row = row.filter(|&r| r < NUM_COMPONENTS);
    }

    /// Toggle the hover over the original image.
    pub fn set_hovered_original_image(&mut self, hovered: bool) {
        self.hovered_original_image = hovered;
    }

    /// Toggle whether the rank slider is being dragged.
    pub fn set_rank_slider_active(&mut self, active: bool) {
        self.rank_slider_active = active;
    }

    /// The image shown in place of the original.
    ///
    /// While the original image is hovered this keeps the top `current_rank`
    /// RGB channels, otherwise it is the rank-`current_rank` SVD approximation.
    pub fn displayed_image(&self) -> Result<Image<u8, 3>, SvdError> {
        if self.hovered_original_image {
            reconstruct::reconstruct_top_channels(&self.image, self.current_rank)
        } else {
            reconstruct::reconstruct_rank(&self.svd, self.image.size(), self.current_rank)
        }
    }

    /// The columns of `U` to render in color rather than grayscale.
    pub fn highlighted_components(&self) -> Vec<usize> {
        (0..NUM_COMPONENTS)
            .filter(|&c| {
                self.hovered_vt_row == Some(c)
                    || (self.rank_slider_active && c < self.current_rank)
            })
            .collect()
    }

    /// The shape layout, colored or not.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The number of palette colors.
    pub fn color_complexity(&self) -> usize {
        self.color_complexity
    }

    /// The number of painted shapes.
    pub fn shape_complexity(&self) -> usize {
        self.shape_complexity
    }

    /// The rank of the displayed approximation.
    pub fn current_rank(&self) -> usize {
        self.current_rank
    }

    /// The hovered row of `Vᵀ`.
    pub fn hovered_vt_row(&self) -> Option<usize> {
        self.hovered_vt_row
    }

    /// Whether the original image is hovered.
    pub fn hovered_original_image(&self) -> bool {
        self.hovered_original_image
    }

    /// Whether the rank slider is being dragged.
    pub fn rank_slider_active(&self) -> bool {
        self.rank_slider_active
    }

    /// The generated image.
    pub fn image(&self) -> &Image<u8, 3> {
        &self.image
    }

    /// The decomposition of the generated image.
    pub fn svd(&self) -> &ColorSvd {
        &self.svd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() -> Result<(), SvdError> {
        let state = SvdDemoState::new(0)?;
        assert_eq!(state.color_complexity(), 3);
        assert_eq!(state.shape_complexity(), 3);
        assert_eq!(state.current_rank(), 3);
        assert_eq!(state.max_rank(), 3);
        assert_eq!(state.hovered_vt_row(), None);
        assert!(!state.hovered_original_image());
        assert!(!state.rank_slider_active());
        assert_eq!(state.shapes().len(), MAX_SHAPES);
        assert_eq!(state.svd().u.len(), state.image().size().num_pixels());
        Ok(())
    }

    #[test]
    fn test_rank_follows_color_complexity() -> Result<(), SvdError> {
        let mut state = SvdDemoState::new(1)?;
        state.set_color_complexity(2)?;
        assert_eq!(state.max_rank(), 2);
        assert_eq!(state.current_rank(), 2);

        state.set_rank(3);
        assert_eq!(state.current_rank(), 2);

        // a larger palette raises the limit but keeps the chosen rank
        state.set_color_complexity(7)?;
        assert_eq!(state.max_rank(), 3);
        assert_eq!(state.current_rank(), 2);
        state.set_rank(3);
        assert_eq!(state.current_rank(), 3);
        Ok(())
    }

    #[test]
    fn test_complexities_are_coupled() -> Result<(), SvdError> {
        let mut state = SvdDemoState::new(2)?;
        state.set_color_complexity(6)?;
        assert_eq!(state.shape_complexity(), 6);

        state.set_shape_complexity(4)?;
        assert_eq!(state.color_complexity(), 4);

        state.set_complexity(50, 50)?;
        assert_eq!(state.color_complexity(), MAX_COLORS);
        assert_eq!(state.shape_complexity(), MAX_SHAPES);
        Ok(())
    }

    #[test]
    fn test_short_layout_is_extended() -> Result<(), SvdError> {
        let mut state = SvdDemoState::new(5)?;
        state.shapes.truncate(4);
        let kept = state.shapes.clone();

        state.set_complexity(3, 8)?;
        assert_eq!(state.shapes().len(), 8);
        assert_eq!(&state.shapes()[..4], kept.as_slice());
        assert_eq!(state.shape_complexity(), 8);
        Ok(())
    }

    #[test]
    fn test_layout_is_kept_across_regeneration() -> Result<(), SvdError> {
        let mut state = SvdDemoState::new(3)?;
        let before = state.shapes().to_vec();
        state.set_color_complexity(5)?;
        state.set_color_complexity(3)?;
        assert_eq!(state.shapes(), before.as_slice());
        Ok(())
    }

    #[test]
    fn test_displayed_image_switches_path() -> Result<(), SvdError> {
        let mut state = SvdDemoState::new(4)?;
        state.set_rank(1);

        let svd_view = state.displayed_image()?;
        let expected = reconstruct::reconstruct_rank(state.svd(), state.image().size(), 1)?;
        assert_eq!(svd_view, expected);

        state.set_hovered_original_image(true);
        let rgb_view = state.displayed_image()?;
        let expected = reconstruct::reconstruct_top_channels(state.image(), 1)?;
        assert_eq!(rgb_view, expected);
        Ok(())
    }

    #[test]
    fn test_highlighted_components() -> Result<(), SvdError> {
        let mut state = SvdDemoState::new(5)?;
        assert!(state.highlighted_components().is_empty());

        state.set_hovered_vt_row(Some(2));
        assert_eq!(state.highlighted_components(), vec![2]);

        state.set_rank(2);
        state.set_rank_slider_active(true);
        assert_eq!(state.highlighted_components(), vec![0, 1, 2]);

        state.set_hovered_vt_row(None);
        assert_eq!(state.highlighted_components(), vec![0, 1]);

        state.set_hovered_vt_row(Some(7));
        assert_eq!(state.hovered_vt_row(), None);
        Ok(())
    }
}
