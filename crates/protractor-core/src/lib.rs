//! Protractor Core Library
//!
//! Stroke-preserving shapes, the angle widget that tracks a swept angle with
//! an arc and a label, and the scripted scene that animates a set of them.

pub mod animation;
pub mod scene;
pub mod shapes;
pub mod widget;

pub use animation::{FrameClock, Ramp, RateFunction, ValueTracker};
pub use scene::{AngleKind, AngleScene, Frame, FrameConfig, FrameSink, SceneConfig, SceneSummary};
pub use shapes::{Shape, ShapeStyle, ShapeTrait, DEGREES};
pub use widget::{AngleVisual, AngleWidget, AngleWidgetConfig, derive_visual};
