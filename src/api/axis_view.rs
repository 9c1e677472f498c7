use chrono::FixedOffset;
use tracing::debug;

use crate::core::{MarkerList, SurfaceSize, TimeMapper, ViewState, generate_markers};
use crate::error::TimelineResult;
use crate::render::Renderer;

use super::{AxisStyle, AxisViewConfig};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Horizontal time-axis widget consumed by host applications.
///
/// `AxisView` owns the view state and the drawing surface. Every state change
/// made through its methods is followed by a full redraw, unless the host
/// turned that off with [`AxisView::set_redraw_on_change`] because it repaints
/// through its own draw callback.
pub struct AxisView<R: Renderer> {
    pub(super) renderer: R,
    pub(super) surface: SurfaceSize,
    pub(super) state: ViewState,
    pub(super) style: AxisStyle,
    pub(super) label_offset: FixedOffset,
    pub(super) redraw_on_change: bool,
}

impl<R: Renderer> AxisView<R> {
    /// Validates `config`, builds the view and draws the first frame.
    pub fn new(renderer: R, config: AxisViewConfig) -> TimelineResult<Self> {
        let state = config.validate()?;
        let label_offset = config.style.label_offset()?;
        let mut view = Self {
            renderer,
            surface: config.surface,
            state,
            style: config.style,
            label_offset,
            redraw_on_change: true,
        };
        debug!(
            width = config.surface.width,
            height = config.surface.height,
            focal_time_ms = state.focal_time_ms(),
            unit_seconds = state.unit_seconds(),
            unit_count = state.unit_count(),
            "axis view created"
        );
        view.render()?;
        Ok(view)
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn style(&self) -> AxisStyle {
        self.style
    }

    pub fn set_style(&mut self, style: AxisStyle) -> TimelineResult<()> {
        let style = style.validate()?;
        self.label_offset = style.label_offset()?;
        self.style = style;
        self.redraw_after_change()
    }

    #[must_use]
    pub fn mapper(&self) -> TimeMapper {
        TimeMapper::new(self.surface, self.state)
    }

    #[must_use]
    pub fn time_to_pixel(&self, time_ms: i64) -> f64 {
        self.mapper().time_to_pixel(time_ms)
    }

    #[must_use]
    pub fn pixel_to_time(&self, pixel: f64) -> i64 {
        self.mapper().pixel_to_time(pixel)
    }

    #[must_use]
    pub fn visible_time_range(&self) -> (i64, i64) {
        self.state.visible_range_ms()
    }

    /// Markers for the current view, rebuilt on every call.
    #[must_use]
    pub fn markers(&self) -> MarkerList {
        generate_markers(self.surface, self.state, self.label_offset)
    }

    #[must_use]
    pub fn redraw_on_change(&self) -> bool {
        self.redraw_on_change
    }

    /// Controls whether state changes repaint the owned renderer.
    ///
    /// Hosts that replay frames on their own context (see `platform_gtk`)
    /// disable it so the offscreen surface is not painted a second time.
    pub fn set_redraw_on_change(&mut self, enabled: bool) {
        self.redraw_on_change = enabled;
    }

    pub(super) fn redraw_after_change(&mut self) -> TimelineResult<()> {
        if self.redraw_on_change {
            self.render()
        } else {
            Ok(())
        }
    }

    /// Clears the surface and draws the baseline plus every marker.
    pub fn render(&mut self) -> TimelineResult<()> {
        let frame = self.build_render_frame();
        debug!(
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            unit_seconds = self.state.unit_seconds(),
            "redraw axis"
        );
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Used by GTK draw callbacks, which own the context for the pass.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> TimelineResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
