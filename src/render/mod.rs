mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, TextHAlign, TextPrimitive};

use crate::error::TimelineResult;

/// Minimal drawing contract a host surface must provide.
pub trait DrawingSurface {
    /// Removes everything drawn so far.
    fn clear(&mut self) -> TimelineResult<()>;

    fn draw_line(&mut self, line: &LinePrimitive) -> TimelineResult<()>;

    fn draw_text(&mut self, text: &TextPrimitive) -> TimelineResult<()>;
}

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from mapping and interaction logic. The
/// default pass validates the frame, clears the surface and replays every
/// primitive.
pub trait Renderer: DrawingSurface {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.clear()?;
        for line in &frame.lines {
            self.draw_line(line)?;
        }
        for text in &frame.texts {
            self.draw_text(text)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
