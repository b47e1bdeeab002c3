//! Renderer trait abstraction.

use kurbo::{Affine, Size, Vec2};
use peniko::Color;
use protractor_core::scene::{Frame, FrameConfig, FrameSink};
use protractor_core::shapes::{Shape, ShapeStyle};
use thiserror::Error;

/// World units of outline per unit of `ShapeStyle::stroke_width`.
pub const STROKE_WIDTH_MULTIPLE: f64 = 0.01;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid viewport {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("Invalid frame {width}x{height} (world units)")]
    InvalidFrame { width: f64, height: f64 },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Output settings shared by every frame of a run.
#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
    /// Visible world area.
    pub frame: FrameConfig,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            viewport_size: Size::new(1920.0, 1080.0),
            background_color: Color::from_rgba8(0, 0, 0, 255),
            frame: FrameConfig::default(),
        }
    }
}

impl RenderSettings {
    /// Reject sizes that would make the world transform degenerate.
    pub fn validate(&self) -> RenderResult<()> {
        let Size { width, height } = self.viewport_size;
        if !(width > 0.0 && height > 0.0) {
            return Err(RendererError::InvalidViewport { width, height });
        }
        if !(self.frame.width > 0.0 && self.frame.height > 0.0) {
            return Err(RendererError::InvalidFrame {
                width: self.frame.width,
                height: self.frame.height,
            });
        }
        Ok(())
    }

    /// Pixels per world unit. The frame width always fills the viewport.
    pub fn pixels_per_unit(&self) -> f64 {
        self.viewport_size.width / self.frame.width
    }

    /// World (y up, origin at the frame center) to viewport pixels (y down).
    pub fn world_transform(&self) -> Affine {
        let ppu = self.pixels_per_unit();
        Affine::translate(Vec2::new(
            self.viewport_size.width / 2.0,
            self.viewport_size.height / 2.0,
        )) * Affine::scale_non_uniform(ppu, -ppu)
    }
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The frame to render.
    pub frame: &'a Frame,
    pub settings: RenderSettings,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(frame: &'a Frame, settings: RenderSettings) -> Self {
        Self { frame, settings }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.settings.background_color = color;
        self
    }

    pub fn world_transform(&self) -> Affine {
        self.settings.world_transform()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.frame.shapes
    }
}

/// Outline width in world units for a style.
pub fn world_stroke_width(style: &ShapeStyle) -> f64 {
    style.stroke_width * STROKE_WIDTH_MULTIPLE
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    ///
    /// This method is called once per frame and should prepare all drawing commands.
    fn build_frame(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.settings.background_color
    }
}

/// Feeds scene frames into a [`Renderer`].
pub struct RenderSink<'r, R: Renderer> {
    renderer: &'r mut R,
    settings: RenderSettings,
    frames: u64,
}

impl<'r, R: Renderer> RenderSink<'r, R> {
    pub fn new(renderer: &'r mut R, settings: RenderSettings) -> RenderResult<Self> {
        settings.validate()?;
        log::debug!(
            "Render sink: {}x{} px at {:.2} px/unit",
            settings.viewport_size.width,
            settings.viewport_size.height,
            settings.pixels_per_unit()
        );
        Ok(Self {
            renderer,
            settings,
            frames: 0,
        })
    }

    /// Frames built so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<R: Renderer> FrameSink for RenderSink<'_, R> {
    fn present(&mut self, frame: &Frame) {
        let ctx = RenderContext::new(frame, self.settings);
        self.renderer.build_frame(&ctx);
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_world_transform_maps_frame_corners() {
        let settings = RenderSettings::default();
        let t = settings.world_transform();
        let center = t * Point::ZERO;
        assert!((center.x - 960.0).abs() < 1e-9);
        assert!((center.y - 540.0).abs() < 1e-9);

        let top_left = t * Point::new(-settings.frame.width / 2.0, settings.frame.height / 2.0);
        assert!(top_left.x.abs() < 1e-9);
        assert!(top_left.y.abs() < 1e-9);
    }

    #[test]
    fn test_validate() {
        assert!(RenderSettings::default().validate().is_ok());

        let settings = RenderSettings {
            viewport_size: Size::new(0.0, 1080.0),
            ..RenderSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(RendererError::InvalidViewport { .. })
        ));

        let mut settings = RenderSettings::default();
        settings.frame.height = -1.0;
        assert!(matches!(
            settings.validate(),
            Err(RendererError::InvalidFrame { .. })
        ));
    }

    #[test]
    fn test_world_stroke_width() {
        let style = ShapeStyle::default();
        assert!((world_stroke_width(&style) - 0.04).abs() < 1e-12);
    }
}
