//! Text label marker.
//!
//! Labels are placed, scaled and drawn as markers; glyph shaping is left to
//! whatever renders them. Extents are estimated from the character count.

use super::{ShapeId, ShapeStyle, ShapeTrait, linear_scale};
use kurbo::{Affine, BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// World units per point of font size.
pub const FONT_SIZE_TO_WORLD: f64 = 1.0 / 96.0;

/// A short text label positioned by its center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub(crate) id: ShapeId,
    /// Center of the label.
    pub position: Point,
    /// Text content.
    pub text: String,
    /// Font size in points.
    pub font_size: f64,
    /// Style properties (fill color is the text color).
    pub style: ShapeStyle,
}

impl Label {
    pub const DEFAULT_FONT_SIZE: f64 = 48.0;

    pub fn new(position: Point, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            text: text.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            style: ShapeStyle::filled(super::SerializableColor::white()),
        }
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the text, keeping the center.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Move the label's center to `point`.
    pub fn move_to(&mut self, point: Point) {
        self.position = point;
    }

    /// Estimated (width, height) in world units.
    pub fn size(&self) -> (f64, f64) {
        let height = self.font_size * FONT_SIZE_TO_WORLD;
        let chars = self.text.chars().count().max(1) as f64;
        (chars * height * 0.5, height)
    }
}

impl ShapeTrait for Label {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let (width, height) = self.size();
        Rect::from_center_size(self.position, (width, height))
    }

    fn center(&self) -> Point {
        self.position
    }

    fn to_path(&self) -> BezPath {
        let bounds = self.bounds();
        let mut path = BezPath::new();
        path.move_to(Point::new(bounds.x0, bounds.y0));
        path.line_to(Point::new(bounds.x1, bounds.y0));
        path.line_to(Point::new(bounds.x1, bounds.y1));
        path.line_to(Point::new(bounds.x0, bounds.y1));
        path.close_path();
        path
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn transform(&mut self, affine: Affine) {
        self.position = affine * self.position;
        self.font_size *= linear_scale(affine);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_estimate() {
        let label = Label::new(Point::ZERO, "ab").with_font_size(48.0);
        let (w, h) = label.size();
        assert!((h - 0.5).abs() < 1e-12);
        assert!((w - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_centered() {
        let label = Label::new(Point::new(1.0, 1.0), "θ");
        let bounds = label.bounds();
        assert!((bounds.center().x - 1.0).abs() < 1e-12);
        assert!((bounds.center().y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale_about_anchor() {
        let mut label = Label::new(Point::new(2.0, 0.0), "θ");
        label.scale(0.5, Some(Point::ZERO));
        assert!((label.position.x - 1.0).abs() < 1e-12);
        assert!((label.font_size - 24.0).abs() < 1e-12);
        // Fill-only labels have no stroke to scale.
        assert!(label.style.stroke_width.abs() < f64::EPSILON);
    }

    #[test]
    fn test_move_to() {
        let mut label = Label::new(Point::ZERO, "a)");
        label.move_to(Point::new(-3.0, 2.0));
        assert_eq!(label.center(), Point::new(-3.0, 2.0));
    }
}
