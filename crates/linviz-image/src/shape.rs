/// An 8-bit RGB color.
pub type Rgb = [u8; 3];

/// The kinds of shape the generator can paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A filled disk of radius `size`.
    Circle,
    /// An axis-aligned `size` x `size` square anchored at its top-left corner.
    Rectangle,
    /// A right triangle with the right angle at the anchor.
    Triangle,
    /// A square rotated by 45 degrees with half-diagonal `size`.
    Diamond,
    /// A regular pentagon with circumradius `size`.
    Pentagon,
    /// A regular hexagon with circumradius `size`.
    Hexagon,
    /// A five-pointed star.
    Star,
    /// An ellipse with semi-axes `size` and `0.7 * size`.
    Ellipse,
    /// A plus sign with arms of length `size`.
    Cross,
    /// A heart drawn from the implicit heart curve.
    Heart,
}

impl ShapeKind {
    /// All shape kinds in generation order.
    pub const ALL: [ShapeKind; 10] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Diamond,
        ShapeKind::Pentagon,
        ShapeKind::Hexagon,
        ShapeKind::Star,
        ShapeKind::Ellipse,
        ShapeKind::Cross,
        ShapeKind::Heart,
    ];

    /// The lowercase name of the shape.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Star => "star",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Cross => "cross",
            ShapeKind::Heart => "heart",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A shape placed on the image.
///
/// Positions are in pixels with `x` the column and `y` the row of the anchor.
/// The color is assigned at generation time from the active palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    /// What to draw.
    pub kind: ShapeKind,
    /// The fill color, `None` until a palette is applied.
    pub color: Option<Rgb>,
    /// Column of the anchor point.
    pub x: i32,
    /// Row of the anchor point.
    pub y: i32,
    /// Characteristic size in pixels.
    pub size: i32,
    /// Rotation in radians, used by the regular polygons.
    pub rotation: f64,
}

impl Shape {
    /// A copy of the shape with the given color.
    pub fn with_color(self, color: Rgb) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }
}
