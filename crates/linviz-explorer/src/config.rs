use linviz_linalg::{Matrix2, Vector2};

/// Width of the drawing area in pixels.
pub const SVG_WIDTH: f64 = 400.0;

/// Height of the drawing area in pixels.
pub const SVG_HEIGHT: f64 = 400.0;

/// Screen position of the origin, x.
pub const CENTER_X: f64 = 200.0;

/// Screen position of the origin, y.
pub const CENTER_Y: f64 = 200.0;

/// Spacing between grid lines in pixels.
pub const GRID_BASE_SPACING: f64 = 20.0;

/// Pixels per unit of the plane.
pub const GRID_SCALE: f64 = 20.0;

/// Length of an arrowhead in pixels.
pub const ARROWHEAD_LENGTH: f64 = 3.0;

/// Arrows shorter than this, in pixels, are drawn without a head.
pub const MIN_VECTOR_LENGTH: f64 = 5.0;

/// Vertical offset of a vector label above the arrow midpoint, in pixels.
pub const LABEL_OFFSET: f64 = 5.0;

/// Lower bound of the matrix element sliders.
pub const MATRIX_MIN: f64 = -3.0;

/// Upper bound of the matrix element sliders.
pub const MATRIX_MAX: f64 = 3.0;

/// Step of the matrix element sliders.
pub const MATRIX_STEP: f64 = 0.1;

/// Range of the scale sliders.
pub const SCALE_RANGE: (f64, f64) = (0.1, 3.0);

/// Matrix shown on startup.
pub const DEFAULT_MATRIX: Matrix2 = Matrix2::IDENTITY;

/// Vector shown on startup.
pub const DEFAULT_VECTOR: Vector2 = Vector2::new(3.0, -3.0);
