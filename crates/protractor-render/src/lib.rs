//! Protractor Render Library
//!
//! Turns scene frames into draw commands. The default implementation uses
//! Vello; [`RecordingRenderer`] keeps plain draw operations for headless runs.

mod recorder;
mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use recorder::{DrawOp, RecordingRenderer};
pub use renderer::{
    RenderContext, RenderResult, RenderSettings, RenderSink, Renderer, RendererError,
    STROKE_WIDTH_MULTIPLE, world_stroke_width,
};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
