//! Protractor Application
//!
//! Loads a run configuration, plays the angle scene and renders every frame.

mod app;
mod config;

pub use app::App;
pub use config::{AppConfig, AppError};
