//! Derived visuals of an angle widget.
//!
//! The tracking arc and label position are pure functions of the widget's
//! geometry and current angle. The widget's updater applies the result once
//! per frame; nothing here mutates a widget.

use crate::shapes::{Arc, ShapeStyle};
use kurbo::Point;

/// Inputs needed to derive the tracking arc and label placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleGeometry {
    /// Shared start point of the base and angle lines.
    pub origin: Point,
    /// Direction of the base line, in radians.
    pub base_angle: f64,
    /// Current angle swept from the base direction, in radians.
    pub sweep: f64,
    /// Radius of the tracking arc.
    pub arc_radius: f64,
    /// Radius of the virtual arc the label sits on.
    pub label_radius: f64,
    /// The label is only placed when `sweep` is strictly above this.
    pub label_threshold: f64,
}

/// Result of [`derive_visual`].
#[derive(Debug, Clone)]
pub struct AngleVisual {
    /// Freshly built tracking arc.
    pub arc: Arc,
    /// Where the label belongs on its virtual arc.
    pub label_position: Point,
    /// Whether the arc is wide enough to host the label.
    pub label_visible: bool,
}

/// Midpoint (by arc length) of the label's virtual arc.
pub fn label_position(geometry: &AngleGeometry) -> Point {
    Arc::new(
        geometry.origin,
        geometry.label_radius,
        geometry.base_angle,
        geometry.sweep,
    )
    .point_from_proportion(0.5)
}

/// Rebuild the tracking arc and label placement from scratch.
pub fn derive_visual(geometry: &AngleGeometry, arc_style: &ShapeStyle) -> AngleVisual {
    let arc = Arc::new(
        geometry.origin,
        geometry.arc_radius,
        geometry.base_angle,
        geometry.sweep,
    )
    .with_style(arc_style.clone());

    AngleVisual {
        arc,
        label_position: label_position(geometry),
        label_visible: geometry.sweep > geometry.label_threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::SerializableColor;

    fn geometry(sweep: f64) -> AngleGeometry {
        AngleGeometry {
            origin: Point::new(3.0, 0.0),
            base_angle: 0.0,
            sweep,
            arc_radius: 0.72,
            label_radius: 1.02,
            label_threshold: 28f64.to_radians(),
        }
    }

    #[test]
    fn test_arc_sweep_matches_angle() {
        let style = ShapeStyle::stroked(SerializableColor::yellow(), 4.0);
        let visual = derive_visual(&geometry(1.25), &style);
        assert!((visual.arc.sweep_angle - 1.25).abs() < f64::EPSILON);
        assert!((visual.arc.radius - 0.72).abs() < f64::EPSILON);
        assert_eq!(visual.arc.center, Point::new(3.0, 0.0));
        assert_eq!(visual.arc.style, style);
    }

    #[test]
    fn test_threshold_is_strict() {
        let style = ShapeStyle::default();
        let at = derive_visual(&geometry(28f64.to_radians()), &style);
        assert!(!at.label_visible);
        let above = derive_visual(&geometry(28f64.to_radians() + 1e-9), &style);
        assert!(above.label_visible);
    }

    #[test]
    fn test_label_on_bisector() {
        let sweep = 90f64.to_radians();
        let position = label_position(&geometry(sweep));
        let offset = position - Point::new(3.0, 0.0);
        assert!((offset.hypot() - 1.02).abs() < 1e-12);
        assert!((offset.y.atan2(offset.x) - sweep / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_base_angle_rotates_everything() {
        let mut g = geometry(1.0);
        g.base_angle = 0.5;
        let visual = derive_visual(&g, &ShapeStyle::default());
        assert!((visual.arc.start_angle - 0.5).abs() < f64::EPSILON);
        let offset = visual.label_position - g.origin;
        assert!((offset.y.atan2(offset.x) - 1.0).abs() < 1e-12);
    }
}
