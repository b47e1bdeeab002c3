//! Shape definitions whose stroke follows their geometric scale.

mod arc;
mod circle;
mod label;
mod line;

pub use arc::Arc;
pub use circle::Circle;
pub use label::Label;
pub use line::Line;

use kurbo::{Affine, BezPath, Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flattening tolerance used when converting curves to paths, in world units.
pub const PATH_TOLERANCE: f64 = 1e-3;

/// One degree in radians.
pub const DEGREES: f64 = std::f64::consts::PI / 180.0;

/// Default stroke width for lines and arcs.
pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub const fn yellow() -> Self {
        Self::new(255, 255, 0, 255)
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties for shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width, in stroke units (see the renderer for the world mapping).
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    pub fill_color: Option<SerializableColor>,
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_opacity() -> f64 {
    1.0
}

impl ShapeStyle {
    /// A stroke-only style.
    pub fn stroked(color: SerializableColor, width: f64) -> Self {
        Self {
            stroke_color: color,
            stroke_width: width,
            ..Self::default()
        }
    }

    /// A fill-only style (zero stroke).
    pub fn filled(color: SerializableColor) -> Self {
        Self {
            stroke_color: color,
            stroke_width: 0.0,
            fill_color: Some(color),
            opacity: 1.0,
        }
    }

    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the stroke color with opacity applied.
    pub fn stroke_with_opacity(&self) -> Color {
        with_opacity(self.stroke_color, self.opacity)
    }

    /// Get the fill color with opacity applied.
    pub fn fill_with_opacity(&self) -> Option<Color> {
        self.fill_color.map(|c| with_opacity(c, self.opacity))
    }
}

fn with_opacity(color: SerializableColor, opacity: f64) -> Color {
    let alpha = (color.a as f64 * opacity.clamp(0.0, 1.0)) as u8;
    Color::from_rgba8(color.r, color.g, color.b, alpha)
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::white(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            fill_color: None,
            opacity: 1.0,
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Uniform scale by `factor` keeping `anchor` fixed.
pub fn scale_about(factor: f64, anchor: Point) -> Affine {
    let offset = anchor.to_vec2();
    Affine::translate(offset) * Affine::scale(factor) * Affine::translate(-offset)
}

/// Linear scale factor of an affine transform (1.0 for pure translations).
pub(crate) fn linear_scale(affine: Affine) -> f64 {
    affine.determinant().abs().sqrt()
}

/// Rotation carried by an affine transform, in radians.
pub(crate) fn rotation_of(affine: Affine) -> f64 {
    let coeffs = affine.as_coeffs();
    coeffs[1].atan2(coeffs[0])
}

/// Point at `angle` on the circle of `radius` around `center`.
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Common trait for all shapes.
///
/// World coordinates are y-up with angles measured counter-clockwise from
/// the positive x axis.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the bounding box in world coordinates.
    fn bounds(&self) -> Rect;

    /// Geometric center, used as the default scale anchor.
    fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ShapeStyle;

    /// Apply a transform to this shape's geometry. Style is left untouched.
    fn transform(&mut self, affine: Affine);

    /// Scale about `anchor` (the shape's center when `None`).
    ///
    /// Stroke width is multiplied by `factor` along with the geometry, so
    /// outlines keep their proportion to the shape. A non-positive factor is
    /// not rejected; the result is whatever the transform produces.
    fn scale(&mut self, factor: f64, anchor: Option<Point>) {
        let anchor = anchor.unwrap_or_else(|| self.center());
        self.style_mut().stroke_width *= factor;
        self.transform(scale_about(factor, anchor));
    }

    /// Translate by `delta`.
    fn shift(&mut self, delta: kurbo::Vec2) {
        self.transform(Affine::translate(delta));
    }
}

/// Enum wrapper for all shape types (for serialization and rendering).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Line(Line),
    Arc(Arc),
    Label(Label),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Circle(s) => s.id(),
            Shape::Line(s) => s.id(),
            Shape::Arc(s) => s.id(),
            Shape::Label(s) => s.id(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Circle(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Arc(s) => s.bounds(),
            Shape::Label(s) => s.bounds(),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Circle(s) => s.to_path(),
            Shape::Line(s) => s.to_path(),
            Shape::Arc(s) => s.to_path(),
            Shape::Label(s) => s.to_path(),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Circle(s) => s.style(),
            Shape::Line(s) => s.style(),
            Shape::Arc(s) => s.style(),
            Shape::Label(s) => s.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Circle(s) => s.style_mut(),
            Shape::Line(s) => s.style_mut(),
            Shape::Arc(s) => s.style_mut(),
            Shape::Label(s) => s.style_mut(),
        }
    }

    pub fn transform(&mut self, affine: Affine) {
        match self {
            Shape::Circle(s) => s.transform(affine),
            Shape::Line(s) => s.transform(affine),
            Shape::Arc(s) => s.transform(affine),
            Shape::Label(s) => s.transform(affine),
        }
    }

    pub fn scale(&mut self, factor: f64, anchor: Option<Point>) {
        match self {
            Shape::Circle(s) => s.scale(factor, anchor),
            Shape::Line(s) => s.scale(factor, anchor),
            Shape::Arc(s) => s.scale(factor, anchor),
            Shape::Label(s) => s.scale(factor, anchor),
        }
    }

    /// Get the label if this shape is a label.
    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Shape::Label(l) => Some(l),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let color = SerializableColor::from_hex("#1e1e1e").unwrap();
        assert_eq!(color, SerializableColor::new(30, 30, 30, 255));
        let color = SerializableColor::from_hex("ffff0080").unwrap();
        assert_eq!(color, SerializableColor::new(255, 255, 0, 128));
        assert!(SerializableColor::from_hex("#12345").is_none());
        assert!(SerializableColor::from_hex("#zzzzzz").is_none());
    }

    #[test]
    fn test_scale_about_keeps_anchor() {
        let anchor = Point::new(2.0, -1.0);
        let moved = scale_about(0.4, anchor) * anchor;
        assert!((moved.x - anchor.x).abs() < 1e-12);
        assert!((moved.y - anchor.y).abs() < 1e-12);

        let p = scale_about(2.0, anchor) * Point::new(3.0, -1.0);
        assert!((p.x - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_opacity_applied_to_stroke() {
        let mut style = ShapeStyle::stroked(SerializableColor::white(), 1.0);
        style.opacity = 0.5;
        assert_eq!(style.stroke_with_opacity().to_rgba8().a, 127);
    }

    #[test]
    fn test_shape_enum_scale_dispatch() {
        let mut shape = Shape::Circle(Circle::new(Point::ZERO, 1.0));
        let width = shape.style().stroke_width;
        shape.scale(3.0, None);
        assert!((shape.style().stroke_width - width * 3.0).abs() < 1e-12);
        assert!((shape.bounds().width() - 6.0).abs() < 1e-12);
    }
}
