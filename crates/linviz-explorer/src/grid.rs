use linviz_linalg::Vector2;
use serde::Serialize;

use crate::config::{CENTER_X, CENTER_Y, GRID_BASE_SPACING, SVG_HEIGHT, SVG_WIDTH};

/// A grid line clipped to the drawing area, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLine {
    /// Signed distance from the main line, in grid steps. `0` is the axis.
    pub index: i32,
    /// Where the line crosses the complementary axis.
    pub intersection: Vector2,
    /// First clipped endpoint.
    pub start: Vector2,
    /// Second clipped endpoint.
    pub end: Vector2,
}

/// One family of parallel grid lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    /// The main line followed by the lines at `-1..=-n` and `1..=n`.
    pub lines: Vec<GridLine>,
    /// Tip of the unit basis vector drawn from the origin, if the basis is
    /// not zero.
    pub unit_tip: Option<Vector2>,
}

impl Grid {
    /// Lines parallel to the transformed x axis.
    ///
    /// They run at `rotation_x` degrees and are stacked along `basis_y`.
    pub fn horizontal(rotation_x: f64, basis_y: Vector2) -> Self {
        Self::new(rotation_x, basis_y, CENTER_Y)
    }

    /// Lines parallel to the transformed y axis.
    ///
    /// They run at `rotation_y + 90` degrees and are stacked along `basis_x`.
    pub fn vertical(rotation_y: f64, basis_x: Vector2) -> Self {
        Self::new(rotation_y + 90.0, basis_x, CENTER_X)
    }

    fn new(rotation: f64, basis: Vector2, center: f64) -> Self {
        let num_lines = (center / GRID_BASE_SPACING).floor() as i32;

        let mut lines = Vec::with_capacity(2 * num_lines as usize + 1);
        lines.push(grid_line(0, rotation, basis));
        lines.extend((1..=num_lines).map(|i| grid_line(-i, rotation, basis)));
        lines.extend((1..=num_lines).map(|i| grid_line(i, rotation, basis)));

        let unit_tip = (basis != Vector2::ZERO).then(|| intersection(1, basis));

        Self { lines, unit_tip }
    }
}

fn intersection(index: i32, basis: Vector2) -> Vector2 {
    let offset = basis * (index as f64 * GRID_BASE_SPACING);
    Vector2::new(CENTER_X + offset.x, CENTER_Y - offset.y)
}

fn grid_line(index: i32, rotation: f64, basis: Vector2) -> GridLine {
    let anchor = intersection(index, basis);

    // long enough to cross the whole drawing area from any anchor inside it
    let length = SVG_WIDTH.hypot(SVG_HEIGHT);
    let (sin, cos) = rotation.to_radians().sin_cos();
    let delta = Vector2::new(cos, sin) * length;

    GridLine {
        index,
        intersection: anchor,
        start: clip(anchor - delta, anchor),
        end: clip(anchor + delta, anchor),
    }
}

/// Pull `p` back along the segment from `anchor` onto the drawing area,
/// first against the top and bottom edges, then against the sides.
fn clip(p: Vector2, anchor: Vector2) -> Vector2 {
    let mut p = p;
    if p.y < 0.0 {
        let t = -anchor.y / (p.y - anchor.y);
        p = Vector2::new(anchor.x + t * (p.x - anchor.x), 0.0);
    }
    if p.y > SVG_HEIGHT {
        let t = (SVG_HEIGHT - anchor.y) / (p.y - anchor.y);
        p = Vector2::new(anchor.x + t * (p.x - anchor.x), SVG_HEIGHT);
    }
    if p.x < 0.0 {
        let t = -anchor.x / (p.x - anchor.x);
        p = Vector2::new(0.0, anchor.y + t * (p.y - anchor.y));
    }
    if p.x > SVG_WIDTH {
        let t = (SVG_WIDTH - anchor.x) / (p.x - anchor.x);
        p = Vector2::new(SVG_WIDTH, anchor.y + t * (p.y - anchor.y));
    }
    p
}
