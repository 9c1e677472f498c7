use crate::error::TimelineResult;
use crate::render::{DrawingSurface, LinePrimitive, Renderer, TextPrimitive};

/// No-op renderer used by tests and headless usage.
///
/// Frames are still validated by `Renderer::render`, and the surface keeps
/// counters so tests can observe what a redraw produced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub clear_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
}

impl DrawingSurface for NullRenderer {
    fn clear(&mut self) -> TimelineResult<()> {
        self.clear_count += 1;
        self.last_line_count = 0;
        self.last_text_count = 0;
        Ok(())
    }

    fn draw_line(&mut self, _line: &LinePrimitive) -> TimelineResult<()> {
        self.last_line_count += 1;
        Ok(())
    }

    fn draw_text(&mut self, _text: &TextPrimitive) -> TimelineResult<()> {
        self.last_text_count += 1;
        Ok(())
    }
}

impl Renderer for NullRenderer {}
