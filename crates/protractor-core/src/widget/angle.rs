//! Circle with a growing angle arc and a floating θ label.

use super::visual::{AngleGeometry, AngleVisual, derive_visual, label_position};
use crate::animation::ValueTracker;
use crate::shapes::{
    Arc, Circle, DEFAULT_STROKE_WIDTH, DEGREES, Label, Line, SerializableColor, Shape, ShapeId,
    ShapeStyle, ShapeTrait, point_on_circle,
};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Angle (radians) the arc must exceed before the label is placed on it.
pub const LABEL_THRESHOLD: f64 = 28.0 * DEGREES;

/// Gap between the tracking arc and the label's virtual arc.
pub const LABEL_OFFSET: f64 = 0.3;

/// Where the label waits, relative to the origin, until it is first placed.
pub const PARKED_LABEL_OFFSET: Vec2 = Vec2::new(20.0, 0.0);

/// Construction parameters for an [`AngleWidget`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleWidgetConfig {
    /// Radius of the reference circle and of both lines.
    pub radius: f64,
    /// Radius of the tracking arc.
    pub small_radius: f64,
    /// Center of the circle.
    pub origin: Point,
    /// Direction of the base line, in radians.
    pub base_angle: f64,
    /// Gap between the tracking arc and the label.
    pub label_offset: f64,
    /// See [`LABEL_THRESHOLD`].
    pub label_threshold: f64,
    /// Label text.
    pub label_text: String,
    pub label_font_size: f64,
    pub circle_stroke_width: f64,
    pub circle_color: SerializableColor,
    pub line_stroke_width: f64,
    pub line_color: SerializableColor,
    pub arc_stroke_width: f64,
    /// Color of the tracking arc and the label.
    pub accent_color: SerializableColor,
}

impl Default for AngleWidgetConfig {
    fn default() -> Self {
        Self {
            radius: 3.0,
            small_radius: 0.72,
            origin: Point::ZERO,
            base_angle: 0.0,
            label_offset: LABEL_OFFSET,
            label_threshold: LABEL_THRESHOLD,
            label_text: "θ".to_string(),
            label_font_size: Label::DEFAULT_FONT_SIZE,
            circle_stroke_width: 0.7,
            circle_color: SerializableColor::new(0x1e, 0x1e, 0x1e, 255),
            line_stroke_width: DEFAULT_STROKE_WIDTH,
            line_color: SerializableColor::white(),
            arc_stroke_width: DEFAULT_STROKE_WIDTH,
            accent_color: SerializableColor::yellow(),
        }
    }
}

/// A reference circle, a fixed base line, a rotating angle line, a small arc
/// tracking the angle between them, and a label on that arc.
///
/// `current_angle` is the only state meant to be driven from outside. The
/// angle line, arc and label follow it whenever [`AngleWidget::update`] runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AngleWidget {
    id: ShapeId,
    pub circle: Circle,
    pub base_line: Line,
    pub angle_line: Line,
    pub tracking_arc: Arc,
    pub label: Label,
    pub current_angle: ValueTracker,
    small_radius: f64,
    base_label_offset: f64,
    label_offset: f64,
    label_threshold: f64,
    arc_style: ShapeStyle,
    label_placed: bool,
}

impl AngleWidget {
    pub fn new(config: &AngleWidgetConfig) -> Self {
        let origin = config.origin;
        let tip = point_on_circle(origin, config.radius, config.base_angle);

        let circle = Circle::new(origin, config.radius).with_style(ShapeStyle::stroked(
            config.circle_color,
            config.circle_stroke_width,
        ));
        let line_style = ShapeStyle::stroked(config.line_color, config.line_stroke_width);
        let base_line = Line::new(origin, tip).with_style(line_style.clone());
        let angle_line = Line::new(origin, tip).with_style(line_style);
        let arc_style = ShapeStyle::stroked(config.accent_color, config.arc_stroke_width);
        let tracking_arc = Arc::new(origin, config.small_radius, config.base_angle, 0.0)
            .with_style(arc_style.clone());
        let label = Label::new(origin + PARKED_LABEL_OFFSET, config.label_text.clone())
            .with_font_size(config.label_font_size)
            .with_style(ShapeStyle::filled(config.accent_color));

        Self {
            id: Uuid::new_v4(),
            circle,
            base_line,
            angle_line,
            tracking_arc,
            label,
            current_angle: ValueTracker::new(0.0),
            small_radius: config.small_radius,
            base_label_offset: config.label_offset,
            label_offset: config.label_offset,
            label_threshold: config.label_threshold,
            arc_style,
            label_placed: false,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Radius of the tracking arc.
    pub fn small_radius(&self) -> f64 {
        self.small_radius
    }

    pub fn label_offset(&self) -> f64 {
        self.label_offset
    }

    /// Radius of the virtual arc the label sits on.
    pub fn label_radius(&self) -> f64 {
        self.small_radius + self.label_offset
    }

    /// Fixed style every rebuilt tracking arc receives.
    pub fn arc_style(&self) -> &ShapeStyle {
        &self.arc_style
    }

    /// Center of the reference circle.
    pub fn center(&self) -> Point {
        self.circle.center
    }

    pub fn angle(&self) -> f64 {
        self.current_angle.get()
    }

    /// Set the driven angle. Takes effect on the next [`update`](Self::update).
    pub fn set_angle(&mut self, angle: f64) {
        self.current_angle.set(angle);
    }

    /// Whether the label has left its parking spot.
    pub fn label_placed(&self) -> bool {
        self.label_placed
    }

    /// Snapshot of the inputs to [`derive_visual`].
    pub fn geometry(&self) -> AngleGeometry {
        AngleGeometry {
            origin: self.base_line.start,
            base_angle: self.base_line.angle(),
            sweep: self.current_angle.get(),
            arc_radius: self.small_radius,
            label_radius: self.label_radius(),
            label_threshold: self.label_threshold,
        }
    }

    /// Derive the tracking arc and label placement for the current state.
    pub fn visual(&self) -> AngleVisual {
        derive_visual(&self.geometry(), &self.arc_style)
    }

    /// Per-frame updater: point the angle line at the current angle, rebuild
    /// the tracking arc, and place the label once the angle is wide enough.
    /// Below the threshold the label stays wherever it last was.
    pub fn update(&mut self) {
        let geometry = self.geometry();
        self.angle_line.set_angle(geometry.base_angle + geometry.sweep);

        let visual = derive_visual(&geometry, &self.arc_style);
        self.tracking_arc = visual.arc;
        if visual.label_visible {
            self.label.move_to(visual.label_position);
            self.label_placed = true;
        }
    }

    /// Scale the whole widget about the circle center.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        let anchor = self.circle.center;
        self.scale_about(factor, anchor)
    }

    /// Scale the whole widget rigidly about `anchor`.
    ///
    /// Every owned shape scales about the same point, so the parts keep their
    /// relative placement. The label gap becomes the configured offset times
    /// this call's `factor`, and the label is re-placed on its arc even below
    /// the threshold. The tracking arc's stroke returns to the fixed arc style
    /// on the next [`update`](Self::update).
    pub fn scale_about(&mut self, factor: f64, anchor: Point) -> &mut Self {
        self.circle.scale(factor, Some(anchor));
        self.base_line.scale(factor, Some(anchor));
        self.angle_line.scale(factor, Some(anchor));
        self.tracking_arc.scale(factor, Some(anchor));

        self.small_radius *= factor;
        self.label_offset = self.base_label_offset * factor;

        self.label.scale(factor, Some(anchor));
        self.label.move_to(label_position(&self.geometry()));
        self.label_placed = true;

        log::trace!(
            "scaled angle widget {} by {factor} (small radius {})",
            self.id,
            self.small_radius
        );
        self
    }

    /// Translate every owned shape by `delta`.
    pub fn shift(&mut self, delta: Vec2) -> &mut Self {
        self.circle.shift(delta);
        self.base_line.shift(delta);
        self.angle_line.shift(delta);
        self.tracking_arc.shift(delta);
        self.label.shift(delta);
        self
    }

    /// Shift so the circle center lands on `point`.
    pub fn move_to(&mut self, point: Point) -> &mut Self {
        let delta = point - self.circle.center;
        self.shift(delta)
    }

    /// Bounds of the visible geometry. The label only counts once placed.
    pub fn bounds(&self) -> Rect {
        let mut bounds = self
            .circle
            .bounds()
            .union(self.base_line.bounds())
            .union(self.angle_line.bounds());
        if self.tracking_arc.sweep_angle != 0.0 {
            bounds = bounds.union(self.tracking_arc.bounds());
        }
        if self.label_placed {
            bounds = bounds.union(self.label.bounds());
        }
        bounds
    }

    /// Owned shapes in draw order.
    pub fn shapes(&self) -> Vec<Shape> {
        vec![
            Shape::Circle(self.circle.clone()),
            Shape::Line(self.base_line.clone()),
            Shape::Line(self.angle_line.clone()),
            Shape::Arc(self.tracking_arc.clone()),
            Shape::Label(self.label.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn widget() -> AngleWidget {
        AngleWidget::new(&AngleWidgetConfig::default())
    }

    fn deg(d: f64) -> f64 {
        d.to_radians()
    }

    #[test]
    fn test_construction() {
        let w = widget();
        assert!((w.circle.radius - 3.0).abs() < f64::EPSILON);
        assert!((w.circle.style.stroke_width - 0.7).abs() < f64::EPSILON);
        assert_eq!(w.base_line.end, Point::new(3.0, 0.0));
        assert_eq!(w.angle_line.end, Point::new(3.0, 0.0));
        assert!(w.tracking_arc.sweep_angle.abs() < f64::EPSILON);
        assert_eq!(w.label.position, Point::ZERO + PARKED_LABEL_OFFSET);
        assert!(!w.label_placed());
    }

    #[test]
    fn test_update_rotates_angle_line() {
        let mut w = widget();
        w.set_angle(deg(90.0));
        w.update();
        assert!(w.angle_line.end.x.abs() < TOL);
        assert!((w.angle_line.end.y - 3.0).abs() < TOL);
        assert_eq!(w.base_line.end, Point::new(3.0, 0.0));
    }

    #[test]
    fn test_label_stays_parked_below_threshold() {
        let mut w = widget();
        let parked = w.label.position;
        for d in [0.0, 5.0, 20.0, 28.0] {
            w.set_angle(deg(d));
            w.update();
            assert_eq!(w.label.position, parked);
            assert!((w.tracking_arc.sweep_angle - deg(d)).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_label_keeps_last_position_when_angle_drops() {
        let mut w = widget();
        w.set_angle(deg(60.0));
        w.update();
        let placed = w.label.position;
        w.set_angle(deg(10.0));
        w.update();
        assert_eq!(w.label.position, placed);
    }

    #[test]
    fn test_ramp_to_163_degrees() {
        let mut w = widget();
        let steps = 120;
        for k in 0..=steps {
            w.set_angle(deg(163.0) * k as f64 / steps as f64);
            w.update();
        }
        assert!((w.tracking_arc.sweep_angle - deg(163.0)).abs() < TOL);
        assert!(w.visual().label_visible);
        assert!(w.label_placed());

        let offset = w.label.position - w.center();
        assert!((offset.hypot() - (0.72 + LABEL_OFFSET)).abs() < TOL);
        assert!((offset.y.atan2(offset.x) - deg(81.5)).abs() < TOL);
    }

    #[test]
    fn test_arc_rebuilt_regardless_of_prior_state() {
        let mut w = widget();
        w.tracking_arc.radius = 42.0;
        w.tracking_arc.style.stroke_width = 99.0;
        w.set_angle(deg(45.0));
        w.update();
        assert!((w.tracking_arc.radius - 0.72).abs() < f64::EPSILON);
        assert!((w.tracking_arc.style.stroke_width - DEFAULT_STROKE_WIDTH).abs() < f64::EPSILON);
        assert!((w.tracking_arc.sweep_angle - deg(45.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scale_by_point_four() {
        let mut w = widget();
        w.set_angle(deg(163.0));
        w.update();
        w.scale(0.4);

        assert!((w.small_radius() - 0.288).abs() < TOL);
        assert!((w.circle.style.stroke_width - 0.28).abs() < TOL);
        assert!((w.circle.radius - 1.2).abs() < TOL);
        assert!((w.tracking_arc.radius - 0.288).abs() < TOL);
        assert!((w.base_line.length() - 1.2).abs() < TOL);
        assert!((w.angle_line.length() - 1.2).abs() < TOL);
        assert!((w.label_radius() - (0.288 + LABEL_OFFSET * 0.4)).abs() < TOL);
        assert!((w.label.font_size - Label::DEFAULT_FONT_SIZE * 0.4).abs() < TOL);
        assert!((w.center() - Point::ZERO).hypot() < TOL);
    }

    #[test]
    fn test_rebuilt_arc_takes_fixed_style_after_scale() {
        let mut w = widget();
        w.set_angle(deg(163.0));
        w.update();
        w.scale(0.4);
        assert!((w.tracking_arc.style.stroke_width - DEFAULT_STROKE_WIDTH * 0.4).abs() < TOL);
        let label = w.label.position;

        w.update();
        assert!((w.tracking_arc.radius - 0.288).abs() < TOL);
        assert!((w.tracking_arc.style.stroke_width - DEFAULT_STROKE_WIDTH).abs() < TOL);
        assert_eq!(w.tracking_arc.style, *w.arc_style());
        assert!((w.label.position - label).hypot() < TOL);
    }

    #[test]
    fn test_scale_places_label_below_threshold() {
        let mut w = widget();
        w.set_angle(deg(10.0));
        w.update();
        w.scale(0.5);
        let offset = w.label.position - w.center();
        assert!((offset.hypot() - w.label_radius()).abs() < TOL);
        assert!((offset.y.atan2(offset.x) - deg(5.0)).abs() < TOL);
    }

    #[test]
    fn test_scale_is_rigid_about_shifted_center() {
        let mut w = widget();
        w.shift(Vec2::new(3.0, 0.0));
        w.set_angle(deg(90.0));
        w.update();
        w.scale(0.4);
        assert!((w.center() - Point::new(3.0, 0.0)).hypot() < TOL);
        assert!((w.base_line.start - Point::new(3.0, 0.0)).hypot() < TOL);
        assert!((w.tracking_arc.center - Point::new(3.0, 0.0)).hypot() < TOL);
    }

    #[test]
    fn test_label_gap_uses_latest_factor() {
        let mut w = widget();
        w.set_angle(deg(163.0));
        w.update();
        w.scale(0.5).scale(0.8);

        assert!((w.small_radius() - 0.288).abs() < TOL);
        assert!((w.label_offset() - LABEL_OFFSET * 0.8).abs() < TOL);
        assert!((w.label_radius() - (0.288 + LABEL_OFFSET * 0.8)).abs() < TOL);
        let offset = w.label.position - w.center();
        assert!((offset.hypot() - (0.288 + LABEL_OFFSET * 0.8)).abs() < TOL);
    }

    #[test]
    fn test_scale_composes_strokes_and_radii() {
        let mut twice = widget();
        twice.scale(0.5).scale(0.8);
        let mut once = widget();
        once.scale(0.4);
        assert!((twice.small_radius() - once.small_radius()).abs() < TOL);
        assert!((twice.circle.radius - once.circle.radius).abs() < TOL);
        assert!((twice.circle.style.stroke_width - once.circle.style.stroke_width).abs() < TOL);
        assert!((twice.base_line.style.stroke_width - once.base_line.style.stroke_width).abs() < TOL);
    }

    #[test]
    fn test_move_to_chains_after_scale() {
        let mut w = widget();
        w.set_angle(deg(60.0));
        w.update();
        w.scale(0.4).move_to(Point::new(-5.0, 2.0));
        assert!((w.center() - Point::new(-5.0, 2.0)).hypot() < TOL);
        assert!((w.base_line.start - Point::new(-5.0, 2.0)).hypot() < TOL);
        let offset = w.label.position - w.center();
        assert!((offset.hypot() - w.label_radius()).abs() < TOL);
    }

    #[test]
    fn test_bounds_ignore_parked_label() {
        let w = widget();
        let bounds = w.bounds();
        assert!((bounds.x1 - 3.0).abs() < TOL);
        assert!((bounds.x0 + 3.0).abs() < TOL);
    }

    #[test]
    fn test_shapes_in_draw_order() {
        let w = widget();
        let shapes = w.shapes();
        assert_eq!(shapes.len(), 5);
        assert!(matches!(shapes[0], Shape::Circle(_)));
        assert!(matches!(shapes[3], Shape::Arc(_)));
        assert!(shapes[4].as_label().is_some());
    }
}
