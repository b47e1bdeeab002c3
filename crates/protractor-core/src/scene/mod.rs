//! The angle scene: a scripted sequence of angle widgets.
//!
//! Each angle is created, swept from 0 to its value, shrunk and moved into a
//! summary grid. The scene advances a virtual clock and hands every frame to
//! a [`FrameSink`]; it never rasterizes anything itself.

mod config;
mod kind;
mod layout;

pub use config::{FrameConfig, SceneConfig};
pub use kind::{AngleKind, describe, readout_text, whole_degrees};
pub use layout::{
    GRID_ROWS, grid_targets, left_of_top_aligned, right_of_top_aligned, stacked_left_aligned,
};

use crate::animation::{FrameClock, Ramp, RateFunction};
use crate::shapes::{DEGREES, Label, Shape, ShapeStyle};
use crate::widget::AngleWidget;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Gap between the rightmost widget and the summary lines, in world units.
const SUMMARY_GAP: f64 = 0.5;

/// One rendered instant of the scene.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Zero-based frame number.
    pub index: u64,
    /// Seconds since the scene started.
    pub time: f64,
    /// Shapes in draw order.
    pub shapes: Vec<Shape>,
}

/// Consumer of scene frames.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame);
}

impl<F: FnMut(&Frame)> FrameSink for F {
    fn present(&mut self, frame: &Frame) {
        self(frame)
    }
}

/// Final state of one angle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AngleSummary {
    pub marker: String,
    pub degrees: f64,
    pub kind: AngleKind,
    pub description: String,
    pub center: Point,
    pub small_radius: f64,
    pub circle_stroke_width: f64,
    pub label_position: Point,
}

/// What a finished scene run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSummary {
    pub frames: u64,
    pub duration: f64,
    pub angles: Vec<AngleSummary>,
}

impl SceneSummary {
    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Drives the angle sequence described by a [`SceneConfig`].
pub struct AngleScene {
    config: SceneConfig,
    clock: FrameClock,
    frame_index: u64,
    widgets: Vec<AngleWidget>,
    markers: Vec<Label>,
    readout: Option<Label>,
    summary_lines: Vec<Label>,
}

impl AngleScene {
    pub fn new(config: SceneConfig) -> Self {
        let clock = FrameClock::new(config.frame.fps);
        Self {
            config,
            clock,
            frame_index: 0,
            widgets: Vec::new(),
            markers: Vec::new(),
            readout: None,
            summary_lines: Vec::new(),
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Widgets added so far.
    pub fn widgets(&self) -> &[AngleWidget] {
        &self.widgets
    }

    /// Frames emitted so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_index
    }

    /// Play the whole sequence into `sink`.
    pub fn run(&mut self, sink: &mut dyn FrameSink) -> SceneSummary {
        log::info!(
            "Running angle scene: {} angles at {} fps",
            self.config.angle_values.len(),
            self.clock.fps
        );

        let diameter = 2.0 * self.config.widget.radius;
        let targets = grid_targets(
            &self.config.frame,
            diameter,
            self.config.summary_scale,
            self.config.angle_values.len(),
        );

        let values = self.config.angle_values.clone();
        for (index, (&degrees, &target)) in values.iter().zip(&targets).enumerate() {
            self.play_angle(index, degrees, target, sink);
        }

        let summary = self.summary();
        for angle in &summary.angles {
            log::info!("{}", angle.description);
        }
        self.place_summary_lines(&summary);
        self.hold(self.config.final_hold, sink);

        log::info!(
            "Angle scene finished after {} frames ({:.2}s)",
            self.frame_index,
            self.elapsed()
        );
        SceneSummary {
            frames: self.frame_index,
            duration: self.elapsed(),
            ..summary
        }
    }

    fn play_angle(&mut self, index: usize, degrees: f64, target: Point, sink: &mut dyn FrameSink) {
        let marker = self.config.marker(index);
        log::debug!("Angle {marker}: creating widget for {degrees}°");

        let mut widget = AngleWidget::new(&self.config.widget);
        widget.shift(self.config.entry_shift);
        self.widgets.push(widget);
        self.hold(self.config.create_duration, sink);

        log::debug!("Angle {marker}: sweeping to {degrees}°");
        self.readout = Some(
            Label::new(Point::ZERO, readout_text(0.0))
                .with_font_size(self.config.readout_font_size)
                .with_style(ShapeStyle::filled(self.config.widget.line_color)),
        );
        let ramp = Ramp::new(0.0, degrees * DEGREES, self.config.sweep_duration(degrees))
            .with_rate(RateFunction::Linear);
        self.play_steps(ramp.duration, sink, |scene, t| {
            if let Some(widget) = scene.widgets.last_mut() {
                widget.set_angle(ramp.sample(t));
            }
        });
        self.hold(self.config.hold_after_sweep, sink);
        self.readout = None;

        log::debug!("Angle {marker}: shrinking by {}", self.config.summary_scale);
        let start = self.widgets[index].clone();
        let factor = self.config.summary_scale;
        self.play_steps(self.config.transition_duration, sink, |scene, t| {
            let mut widget = start.clone();
            widget.scale(1.0 + (factor - 1.0) * RateFunction::Smooth.apply(t));
            scene.widgets[index] = widget;
        });

        log::debug!("Angle {marker}: moving to ({:.3}, {:.3})", target.x, target.y);
        let start = self.widgets[index].clone();
        let from = start.center();
        self.play_steps(self.config.transition_duration, sink, |scene, t| {
            let mut widget = start.clone();
            widget.move_to(from.lerp(target, RateFunction::Smooth.apply(t)));
            scene.widgets[index] = widget;
        });

        let label = Label::new(Point::ZERO, marker).with_font_size(self.config.marker_font_size);
        let position = left_of_top_aligned(self.widgets[index].bounds(), label.size());
        let mut label = label.with_style(ShapeStyle::filled(self.config.widget.line_color));
        label.move_to(position);
        self.markers.push(label);
        self.hold(self.config.hold_after_place, sink);
    }

    /// Write one line per finished angle right of the grid, top down.
    fn place_summary_lines(&mut self, summary: &SceneSummary) {
        let frame = self.config.frame;
        let left = self
            .widgets
            .iter()
            .map(|w| w.bounds().x1)
            .fold(-frame.width / 2.0, f64::max)
            + SUMMARY_GAP;
        let style = ShapeStyle::filled(self.config.widget.line_color);
        let mut lines: Vec<Label> = summary
            .angles
            .iter()
            .map(|angle| {
                Label::new(Point::ZERO, angle.description.clone())
                    .with_font_size(self.config.summary_font_size)
                    .with_style(style.clone())
            })
            .collect();
        let sizes: Vec<(f64, f64)> = lines.iter().map(Label::size).collect();
        let spacing = sizes.first().map(|&(_, h)| h * 0.5).unwrap_or(0.0);
        let top = frame.height / 2.0 - SUMMARY_GAP;
        for (line, position) in lines
            .iter_mut()
            .zip(stacked_left_aligned(left, top, &sizes, spacing))
        {
            line.move_to(position);
        }
        self.summary_lines = lines;
    }

    /// Run `step` with the progress of each frame of a `duration`-long
    /// animation, emitting a frame after each. Zero-length animations jump
    /// straight to the end state without a frame.
    fn play_steps(
        &mut self,
        duration: f64,
        sink: &mut dyn FrameSink,
        mut step: impl FnMut(&mut Self, f64),
    ) {
        let progress: Vec<f64> = self.clock.progress(duration).collect();
        if progress.is_empty() {
            step(self, 1.0);
            self.refresh();
            return;
        }
        for t in progress {
            step(self, t);
            self.emit(sink);
        }
    }

    /// Emit frames for `seconds` without changing driven state.
    fn hold(&mut self, seconds: f64, sink: &mut dyn FrameSink) {
        for _ in 0..self.clock.frame_count(seconds) {
            self.emit(sink);
        }
    }

    /// Run every updater.
    fn refresh(&mut self) {
        for widget in &mut self.widgets {
            widget.update();
        }
        if let (Some(readout), Some(widget)) = (self.readout.as_mut(), self.widgets.last()) {
            readout.set_text(readout_text(widget.angle()));
            let mut anchor = widget.bounds();
            anchor.x1 -= self.config.readout_shift;
            readout.move_to(right_of_top_aligned(anchor, readout.size()));
        }
    }

    fn emit(&mut self, sink: &mut dyn FrameSink) {
        self.refresh();
        let frame = Frame {
            index: self.frame_index,
            time: self.elapsed(),
            shapes: self.snapshot(),
        };
        log::trace!("Frame {} at {:.3}s: {} shapes", frame.index, frame.time, frame.shapes.len());
        sink.present(&frame);
        self.frame_index += 1;
    }

    fn elapsed(&self) -> f64 {
        self.frame_index as f64 * self.clock.frame_duration()
    }

    /// Every visible shape, in draw order.
    pub fn snapshot(&self) -> Vec<Shape> {
        let mut shapes: Vec<Shape> = self.widgets.iter().flat_map(AngleWidget::shapes).collect();
        shapes.extend(self.markers.iter().cloned().map(Shape::Label));
        shapes.extend(self.summary_lines.iter().cloned().map(Shape::Label));
        if let Some(readout) = &self.readout {
            shapes.push(Shape::Label(readout.clone()));
        }
        shapes
    }

    fn summary(&self) -> SceneSummary {
        let angles = self
            .widgets
            .iter()
            .zip(&self.config.angle_values)
            .enumerate()
            .map(|(index, (widget, &degrees))| {
                let marker = self.config.marker(index);
                AngleSummary {
                    description: describe(&marker, degrees),
                    marker,
                    degrees,
                    kind: AngleKind::classify(degrees),
                    center: widget.center(),
                    small_radius: widget.small_radius(),
                    circle_stroke_width: widget.circle.style.stroke_width,
                    label_position: widget.label.position,
                }
            })
            .collect();
        SceneSummary {
            frames: self.frame_index,
            duration: self.elapsed(),
            angles,
        }
    }
}
