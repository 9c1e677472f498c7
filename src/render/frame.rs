use crate::core::SurfaceSize;
use crate::error::{TimelineError, TimelineResult};
use crate::render::{LinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one axis draw pass.
///
/// Lines are drawn before texts so labels stay legible over tick marks.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub surface: SurfaceSize,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.surface.is_valid() {
            return Err(TimelineError::InvalidSurface {
                width: self.surface.width,
                height: self.surface.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }
}
