//! Run configuration loaded from a JSON file.

use kurbo::Size;
use protractor_core::SceneConfig;
use protractor_core::shapes::SerializableColor;
use protractor_render::{RenderSettings, RendererError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by the runner.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Config(serde_json::Error),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
    #[error("Serialization error: {0}")]
    Serialize(serde_json::Error),
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub background_color: SerializableColor,
    pub scene: SceneConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1920,
            viewport_height: 1080,
            background_color: SerializableColor::black(),
            scene: SceneConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read a configuration file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(AppError::Config)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_render_settings(&self) -> RenderSettings {
        RenderSettings {
            viewport_size: Size::new(self.viewport_width as f64, self.viewport_height as f64),
            background_color: self.background_color.into(),
            frame: self.scene.frame,
        }
    }
}
