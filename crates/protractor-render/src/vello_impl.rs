//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer, world_stroke_width};
use kurbo::{Affine, BezPath, Circle, Rect, Stroke};
use peniko::Fill;
use protractor_core::shapes::{Label, Shape, ShapeStyle};
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    frames_built: u64,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            frames_built: 0,
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the built scene.
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    pub fn frames_built(&self) -> u64 {
        self.frames_built
    }

    fn render_path(&mut self, path: &BezPath, style: &ShapeStyle, transform: Affine) {
        if path.elements().is_empty() {
            return;
        }
        if let Some(fill_color) = style.fill_with_opacity() {
            self.scene.fill(Fill::NonZero, transform, fill_color, None, path);
        }
        if style.stroke_width > 0.0 {
            let stroke = Stroke::new(world_stroke_width(style));
            self.scene
                .stroke(&stroke, transform, style.stroke_with_opacity(), None, path);
        }
    }

    /// Labels are drawn as a dot at their anchor; glyphs are not shaped.
    fn render_label(&mut self, label: &Label, transform: Affine) {
        let (_, height) = label.size();
        let color = label
            .style
            .fill_with_opacity()
            .unwrap_or_else(|| label.style.stroke_with_opacity());
        let dot = Circle::new(label.position, height / 4.0);
        self.scene.fill(Fill::NonZero, transform, color, None, &dot);
    }
}

impl Renderer for VelloRenderer {
    fn build_frame(&mut self, ctx: &RenderContext) {
        self.scene.reset();

        let size = ctx.settings.viewport_size;
        let bg_rect = Rect::new(0.0, 0.0, size.width, size.height);
        self.scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            self.background_color(ctx),
            None,
            &bg_rect,
        );

        let transform = ctx.world_transform();
        for shape in ctx.shapes() {
            match shape {
                Shape::Label(label) => self.render_label(label, transform),
                other => self.render_path(&other.to_path(), other.style(), transform),
            }
        }
        self.frames_built += 1;
    }
}
