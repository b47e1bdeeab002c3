//! Composite widgets built from stroke-preserving shapes.
//!
//! A widget owns its shapes and a small amount of driven state. Derived
//! parts are recomputed from that state by a per-frame `update` call rather
//! than being edited by whoever drives the widget.

mod angle;
mod visual;

pub use angle::{AngleWidget, AngleWidgetConfig, LABEL_OFFSET, LABEL_THRESHOLD, PARKED_LABEL_OFFSET};
pub use visual::{AngleGeometry, AngleVisual, derive_visual, label_position};
