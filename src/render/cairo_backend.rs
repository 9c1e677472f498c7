use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{TimelineError, TimelineResult};
use crate::render::{
    Color, DrawingSurface, LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub clears: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TimelineResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Offscreen rendering goes to an owned image surface through `Renderer`;
/// `CairoContextRenderer` replays the same frame on a host-provided context.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    context: Context,
    clear_color: Color,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> TimelineResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(TimelineError::InvalidSurface {
                width: width.max(0) as u32,
                height: height.max(0) as u32,
            });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            surface,
            context,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            font_family: "Verdana".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> TimelineResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface to a PNG file.
    pub fn write_png(&self, path: &Path) -> TimelineResult<()> {
        self.surface.flush();
        let mut file = File::create(path).map_err(|err| {
            TimelineError::InvalidData(format!("failed to create {}: {err}", path.display()))
        })?;
        self.surface.write_to_png(&mut file).map_err(|err| {
            TimelineError::InvalidData(format!("failed to write png {}: {err}", path.display()))
        })
    }
}

impl DrawingSurface for CairoRenderer {
    fn clear(&mut self) -> TimelineResult<()> {
        paint_background(&self.context, self.clear_color)?;
        self.last_stats = CairoRenderStats {
            clears: self.last_stats.clears + 1,
            ..CairoRenderStats::default()
        };
        Ok(())
    }

    fn draw_line(&mut self, line: &LinePrimitive) -> TimelineResult<()> {
        stroke_line(&self.context, line)?;
        self.last_stats.lines_drawn += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> TimelineResult<()> {
        show_text(&self.context, text, &self.font_family);
        self.last_stats.texts_drawn += 1;
        Ok(())
    }
}

impl Renderer for CairoRenderer {}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TimelineResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        paint_background(context, self.clear_color)?;
        let mut stats = CairoRenderStats {
            clears: self.last_stats.clears + 1,
            ..CairoRenderStats::default()
        };
        for line in &frame.lines {
            stroke_line(context, line)?;
            stats.lines_drawn += 1;
        }
        for text in &frame.texts {
            show_text(context, text, &self.font_family);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

fn paint_background(context: &Context, color: Color) -> TimelineResult<()> {
    apply_color(context, color);
    context
        .paint()
        .map_err(|err| map_backend_error("failed to clear surface", err))
}

fn stroke_line(context: &Context, line: &LinePrimitive) -> TimelineResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn show_text(context: &Context, text: &TextPrimitive, font_family: &str) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description =
        FontDescription::from_string(&format!("{font_family} {}px", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };

    apply_color(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> TimelineError {
    TimelineError::InvalidData(format!("{prefix}: {err}"))
}
