use linviz_linalg::Vector2;
use serde::Serialize;

use crate::config::{
    ARROWHEAD_LENGTH, CENTER_X, CENTER_Y, GRID_SCALE, LABEL_OFFSET, MIN_VECTOR_LENGTH,
};

/// Map a point of the plane to screen pixels.
///
/// The origin lands on the drawing center and the y axis points up.
#[inline]
pub fn to_screen(p: Vector2) -> Vector2 {
    Vector2::new(CENTER_X + p.x * GRID_SCALE, CENTER_Y - p.y * GRID_SCALE)
}

/// Screen geometry of a vector drawn as an arrow from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arrow {
    /// Where the line starts, the screen origin.
    pub start: Vector2,
    /// Where the line stops, at the base of the arrowhead.
    pub line_end: Vector2,
    /// The tip of the arrow.
    pub tip: Vector2,
    /// Anchor of the label, above the midpoint.
    pub label: Vector2,
    /// Whether the arrow is long enough to carry a head.
    pub show_head: bool,
}

impl Arrow {
    /// The arrow for a vector of the plane.
    pub fn from_vector(v: Vector2) -> Self {
        let start = Vector2::new(CENTER_X, CENTER_Y);
        let tip = to_screen(v);
        let delta = tip - start;
        let length = delta.length();

        let show_head = length > MIN_VECTOR_LENGTH;
        let line_end = if show_head {
            tip - ARROWHEAD_LENGTH * delta / length
        } else {
            tip
        };

        let mid = to_screen(0.5 * v);
        let label = Vector2::new(mid.x, mid.y - LABEL_OFFSET);

        Self {
            start,
            line_end,
            tip,
            label,
            show_head,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_screen() {
        assert_eq!(to_screen(Vector2::ZERO), Vector2::new(200.0, 200.0));
        assert_eq!(to_screen(Vector2::new(1.0, 2.0)), Vector2::new(220.0, 160.0));
    }

    #[test]
    fn test_arrow_stops_before_the_head() {
        let arrow = Arrow::from_vector(Vector2::new(3.0, 0.0));
        assert!(arrow.show_head);
        assert_eq!(arrow.tip, Vector2::new(260.0, 200.0));
        assert_relative_eq!(arrow.line_end.x, 257.0);
        assert_relative_eq!(arrow.line_end.y, 200.0);
        assert_eq!(arrow.label, Vector2::new(230.0, 195.0));
    }

    #[test]
    fn test_short_arrow_has_no_head() {
        let arrow = Arrow::from_vector(Vector2::new(0.1, 0.1));
        assert!(!arrow.show_head);
        assert_eq!(arrow.line_end, arrow.tip);

        let zero = Arrow::from_vector(Vector2::ZERO);
        assert!(!zero.show_head);
        assert_eq!(zero.line_end, zero.start);
    }
}
