use crate::core::{SurfaceSize, ViewState};

/// Bidirectional mapping between epoch milliseconds and horizontal pixels.
///
/// The focal time sits at `width / 2`; one primary unit spans
/// `width / unit_count` pixels. Mapping never fails: any finite input yields
/// a finite result, fractional pixels included.
///
/// Arithmetic is done on the offset from the focal time so sub-pixel
/// precision survives large epoch values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeMapper {
    surface: SurfaceSize,
    state: ViewState,
}

impl TimeMapper {
    #[must_use]
    pub fn new(surface: SurfaceSize, state: ViewState) -> Self {
        Self { surface, state }
    }

    #[must_use]
    pub fn center_px(self) -> f64 {
        self.surface.center_x()
    }

    #[must_use]
    pub fn pixels_per_unit(self) -> f64 {
        f64::from(self.surface.width) / f64::from(self.state.unit_count())
    }

    /// Untruncated milliseconds per primary unit.
    #[must_use]
    pub fn millis_per_unit(self) -> f64 {
        self.state.unit_seconds() * 1000.0
    }

    #[must_use]
    pub fn pixels_per_milli(self) -> f64 {
        self.pixels_per_unit() / self.millis_per_unit()
    }

    #[must_use]
    pub fn time_to_pixel(self, time_ms: i64) -> f64 {
        let offset_ms = i128::from(time_ms) - i128::from(self.state.focal_time_ms());
        self.offset_to_pixel(offset_ms as f64)
    }

    /// Inverse of [`Self::time_to_pixel`], truncated toward zero to whole milliseconds.
    #[must_use]
    pub fn pixel_to_time(self, pixel: f64) -> i64 {
        let offset_ms = self.pixel_to_offset(pixel);
        let whole = offset_ms.floor();
        let mut time_ms = self.state.focal_time_ms().saturating_add(whole as i64);
        if time_ms < 0 && offset_ms > whole {
            time_ms += 1;
        }
        time_ms
    }

    /// Pixel of a fractional millisecond offset from the focal time.
    #[must_use]
    pub fn offset_to_pixel(self, offset_ms: f64) -> f64 {
        self.center_px() + offset_ms * self.pixels_per_unit() / self.millis_per_unit()
    }

    /// Fractional millisecond offset from the focal time at `pixel`.
    #[must_use]
    pub fn pixel_to_offset(self, pixel: f64) -> f64 {
        (pixel - self.center_px()) * self.millis_per_unit() / self.pixels_per_unit()
    }
}
