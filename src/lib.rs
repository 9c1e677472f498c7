//! timeline-rs: horizontal time-axis widget.
//!
//! The crate keeps the time-to-pixel mapping and tick generation in `core`,
//! free of any windowing API, and exposes a backend-agnostic drawing contract
//! in `render` so the widget can be exercised headless or hosted in GTK4.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{AxisStyle, AxisView, AxisViewConfig};
pub use error::{TimelineError, TimelineResult};
