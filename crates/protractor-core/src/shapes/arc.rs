//! Circular arc shape.

use super::{PATH_TOLERANCE, ShapeId, ShapeStyle, ShapeTrait, linear_scale, point_on_circle, rotation_of};
use kurbo::{Affine, Arc as KurboArc, BezPath, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circular arc around `center`, starting at `start_angle` and sweeping
/// `sweep_angle` radians counter-clockwise (negative sweeps go clockwise).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arc {
    pub(crate) id: ShapeId,
    /// Center of the circle the arc lies on.
    pub center: Point,
    /// Radius. Kept in step with the rendered size by every transform.
    pub radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// Sweep angle in radians.
    pub sweep_angle: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Arc {
    /// Create a new arc.
    pub fn new(center: Point, radius: f64, start_angle: f64, sweep_angle: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius,
            start_angle,
            sweep_angle,
            style: ShapeStyle::default(),
        }
    }

    /// Replace the style.
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Point at `proportion` of the arc length (0.0 = start, 1.0 = end).
    ///
    /// On a circular arc the length proportion equals the angle proportion.
    pub fn point_from_proportion(&self, proportion: f64) -> Point {
        point_on_circle(
            self.center,
            self.radius,
            self.start_angle + self.sweep_angle * proportion,
        )
    }

    pub fn start_point(&self) -> Point {
        self.point_from_proportion(0.0)
    }

    pub fn end_point(&self) -> Point {
        self.point_from_proportion(1.0)
    }

    /// Get as a kurbo Arc.
    pub fn as_kurbo(&self) -> KurboArc {
        KurboArc::new(
            self.center,
            Vec2::new(self.radius, self.radius),
            self.start_angle,
            self.sweep_angle,
            0.0,
        )
    }
}

impl ShapeTrait for Arc {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        if self.sweep_angle == 0.0 {
            return Rect::from_points(self.start_point(), self.start_point());
        }
        self.as_kurbo().bounding_box()
    }

    fn center(&self) -> Point {
        self.bounds().center()
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        if self.sweep_angle == 0.0 || self.radius == 0.0 {
            return path;
        }
        path.move_to(self.start_point());
        self.as_kurbo().to_cubic_beziers(PATH_TOLERANCE, |p1, p2, p| {
            path.curve_to(p1, p2, p);
        });
        path
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn transform(&mut self, affine: Affine) {
        self.center = affine * self.center;
        self.radius *= linear_scale(affine);
        self.start_angle += rotation_of(affine);
    }
}
