//! Headless scene runner.

use crate::config::{AppConfig, AppError};
use protractor_core::{AngleScene, SceneSummary};
use protractor_render::{RenderSink, Renderer};

#[cfg(feature = "vello-renderer")]
type DefaultRenderer = protractor_render::VelloRenderer;
#[cfg(not(feature = "vello-renderer"))]
type DefaultRenderer = protractor_render::RecordingRenderer;

/// Main application struct.
pub struct App {
    config: AppConfig,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Play the scene through the default renderer.
    pub fn run(&self) -> Result<SceneSummary, AppError> {
        let mut renderer = DefaultRenderer::default();
        self.run_with(&mut renderer)
    }

    /// Play the scene through `renderer`.
    pub fn run_with<R: Renderer>(&self, renderer: &mut R) -> Result<SceneSummary, AppError> {
        let settings = self.config.to_render_settings();
        log::info!(
            "Rendering {}x{} viewport",
            self.config.viewport_width,
            self.config.viewport_height
        );
        let mut sink = RenderSink::new(renderer, settings)?;
        let mut scene = AngleScene::new(self.config.scene.clone());
        let summary = scene.run(&mut sink);
        log::info!("Built {} frames", sink.frames());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protractor_core::FrameConfig;
    use protractor_core::SceneConfig;
    use protractor_render::{RecordingRenderer, RendererError};

    fn quick_config() -> AppConfig {
        AppConfig {
            scene: SceneConfig {
                angle_values: vec![90.0, 200.0],
                frame: FrameConfig {
                    fps: 4,
                    ..FrameConfig::default()
                },
                ..SceneConfig::default()
            },
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_run_with_recorder() {
        let app = App::with_config(quick_config());
        let mut renderer = RecordingRenderer::new();
        let summary = app.run_with(&mut renderer).unwrap();
        assert_eq!(renderer.frames_built(), summary.frames);
        assert_eq!(summary.angles.len(), 2);
        assert_eq!(summary.angles[1].description, "b) reflex angle (200°)");
    }

    #[test]
    fn test_invalid_viewport_is_rejected() {
        let config = AppConfig {
            viewport_width: 0,
            ..quick_config()
        };
        let app = App::with_config(config);
        let err = app.run_with(&mut RecordingRenderer::new()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Render(RendererError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn test_default_run() {
        let app = App::with_config(quick_config());
        let summary = app.run().unwrap();
        assert!(summary.frames > 0);
    }
}
