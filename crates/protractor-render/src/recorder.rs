//! Recording renderer: keeps the draw commands of the last frame in viewport
//! pixels instead of encoding them for a GPU.

use crate::renderer::{RenderContext, Renderer, world_stroke_width};
use kurbo::{Affine, BezPath, Point};
use peniko::Color;
use protractor_core::shapes::{Label, Shape, ShapeStyle};

/// One draw command in viewport pixels.
#[derive(Debug, Clone)]
pub enum DrawOp {
    /// Stroke a path with the given width.
    Stroke {
        path: BezPath,
        width: f64,
        color: Color,
    },
    /// Fill a path.
    Fill { path: BezPath, color: Color },
    /// A text marker; the renderer does not shape glyphs.
    Marker {
        center: Point,
        text: String,
        height: f64,
        color: Color,
    },
}

/// Renderer that records draw commands.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    ops: Vec<DrawOp>,
    clear_color: Option<Color>,
    frames_built: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the most recent frame.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Background of the most recent frame.
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    pub fn frames_built(&self) -> u64 {
        self.frames_built
    }

    fn record_path(&mut self, path: BezPath, style: &ShapeStyle, transform: Affine, ppu: f64) {
        if path.elements().is_empty() {
            return;
        }
        let path = transform * path;
        if let Some(color) = style.fill_with_opacity() {
            self.ops.push(DrawOp::Fill {
                path: path.clone(),
                color,
            });
        }
        if style.stroke_width > 0.0 {
            self.ops.push(DrawOp::Stroke {
                path,
                width: world_stroke_width(style) * ppu,
                color: style.stroke_with_opacity(),
            });
        }
    }

    fn record_label(&mut self, label: &Label, transform: Affine, ppu: f64) {
        let (_, height) = label.size();
        let color = label
            .style
            .fill_with_opacity()
            .unwrap_or_else(|| label.style.stroke_with_opacity());
        self.ops.push(DrawOp::Marker {
            center: transform * label.position,
            text: label.text.clone(),
            height: height * ppu,
            color,
        });
    }
}

impl Renderer for RecordingRenderer {
    fn build_frame(&mut self, ctx: &RenderContext) {
        self.ops.clear();
        self.clear_color = Some(self.background_color(ctx));

        let transform = ctx.world_transform();
        let ppu = ctx.settings.pixels_per_unit();
        for shape in ctx.shapes() {
            match shape {
                Shape::Label(label) => self.record_label(label, transform, ppu),
                other => self.record_path(other.to_path(), other.style(), transform, ppu),
            }
        }
        self.frames_built += 1;
    }
}
