use crate::render::{LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::AxisView;

impl<R: Renderer> AxisView<R> {
    /// Vertical position of the baseline in surface pixels.
    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        f64::from(self.surface.height) - self.style.baseline_offset_px
    }

    /// Materializes the full scene for the current view state.
    ///
    /// The result depends only on surface, style and view state, so repeated
    /// calls without intervening changes are equal.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let style = self.style;
        let baseline_y = self.baseline_y();
        let markers = self.markers();

        let mut frame = RenderFrame::new(self.surface);
        frame.lines.reserve(markers.len() + 1);
        frame.texts.reserve(markers.len());

        frame.lines.push(LinePrimitive::horizontal(
            0.0,
            f64::from(self.surface.width),
            baseline_y,
            style.baseline_width,
            style.baseline_color,
        ));

        for marker in markers {
            frame.lines.push(LinePrimitive::vertical(
                marker.x_px,
                baseline_y,
                baseline_y + style.tick_length_px,
                style.tick_width,
                style.tick_color,
            ));
            frame.texts.push(TextPrimitive::new(
                marker.label,
                marker.x_px,
                baseline_y + style.label_offset_y_px,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Center,
            ));
        }

        frame
    }
}
