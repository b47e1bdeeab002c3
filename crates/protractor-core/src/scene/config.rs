//! Scene configuration.

use crate::animation::DEFAULT_FPS;
use crate::widget::AngleWidgetConfig;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Visible frame in world units, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub width: f64,
    pub height: f64,
    pub fps: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            width: 8.0 * 16.0 / 9.0,
            height: 8.0,
            fps: DEFAULT_FPS,
        }
    }
}

impl FrameConfig {
    /// The frame as a rectangle in world coordinates.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(Point::ZERO, (self.width, self.height))
    }
}

/// Everything the angle scene needs to know, with defaults matching the
/// six-angle sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Angles to draw, in degrees, in order.
    pub angle_values: Vec<f64>,
    /// Item markers shown next to each finished angle. Missing entries fall
    /// back to `a)`, `b)`, ...
    pub markers: Vec<String>,
    /// Factor each finished widget is shrunk by before moving to the grid.
    pub summary_scale: f64,
    /// Offset applied to each new widget before it is drawn.
    pub entry_shift: Vec2,
    /// Seconds spent creating each widget.
    pub create_duration: f64,
    /// Seconds a full turn would take; each sweep runs for its share.
    pub seconds_per_turn: f64,
    /// Seconds to hold after each sweep.
    pub hold_after_sweep: f64,
    /// Seconds for each of the scale and move transitions.
    pub transition_duration: f64,
    /// Seconds to hold after a widget reaches its grid cell.
    pub hold_after_place: f64,
    /// Seconds to hold at the end of the scene.
    pub final_hold: f64,
    pub readout_font_size: f64,
    /// Leftward nudge of the readout from the widget's right edge.
    pub readout_shift: f64,
    pub marker_font_size: f64,
    /// Font size of the closing per-angle summary lines.
    pub summary_font_size: f64,
    pub widget: AngleWidgetConfig,
    pub frame: FrameConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            angle_values: vec![163.0, 32.0, 227.0, 90.0, 270.0, 336.0],
            markers: ["a)", "b)", "c)", "d)", "e)", "f)"]
                .into_iter()
                .map(String::from)
                .collect(),
            summary_scale: 0.4,
            entry_shift: Vec2::new(3.0, 0.0),
            create_duration: 2.0,
            seconds_per_turn: 4.0,
            hold_after_sweep: 1.5,
            transition_duration: 1.0,
            hold_after_place: 1.0,
            final_hold: 1.0,
            readout_font_size: 48.0,
            readout_shift: 0.9,
            marker_font_size: 27.0,
            summary_font_size: 30.0,
            widget: AngleWidgetConfig::default(),
            frame: FrameConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Marker for the angle at `index`.
    pub fn marker(&self, index: usize) -> String {
        self.markers.get(index).cloned().unwrap_or_else(|| {
            let letter = (b'a' + (index % 26) as u8) as char;
            format!("{letter})")
        })
    }

    /// Seconds the sweep to `degrees` takes.
    pub fn sweep_duration(&self, degrees: f64) -> f64 {
        self.seconds_per_turn / 360.0 * degrees
    }
}
