use chrono::{DateTime, Utc};

use crate::error::{TimelineError, TimelineResult};

pub const MIN_UNIT_SECONDS: f64 = 1.0;
pub const MAX_UNIT_SECONDS: f64 = 3_600.0;
pub const DEFAULT_UNIT_SECONDS: f64 = MAX_UNIT_SECONDS;
pub const DEFAULT_UNIT_COUNT: u32 = 24;

/// Mutable view of the time axis.
///
/// `focal_time_ms` is the timestamp drawn at the horizontal center,
/// `unit_seconds` is the duration of one primary division and
/// `unit_count` is how many divisions span the surface width.
/// `unit_seconds` stays within `[MIN_UNIT_SECONDS, MAX_UNIT_SECONDS]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    focal_time_ms: i64,
    unit_seconds: f64,
    unit_count: u32,
}

impl ViewState {
    pub fn new(focal_time_ms: i64, unit_seconds: f64, unit_count: u32) -> TimelineResult<Self> {
        validate_focal_time(focal_time_ms)?;
        if !unit_seconds.is_finite()
            || !(MIN_UNIT_SECONDS..=MAX_UNIT_SECONDS).contains(&unit_seconds)
        {
            return Err(TimelineError::InvalidConfig(format!(
                "unit seconds must be finite and in [{MIN_UNIT_SECONDS}, {MAX_UNIT_SECONDS}], got {unit_seconds}"
            )));
        }
        if unit_count == 0 {
            return Err(TimelineError::InvalidConfig(
                "unit count must be > 0".to_owned(),
            ));
        }

        Ok(Self {
            focal_time_ms,
            unit_seconds,
            unit_count,
        })
    }

    /// Default view: one-hour unit, 24 units across the surface.
    pub fn with_focal_time(focal_time_ms: i64) -> TimelineResult<Self> {
        Self::new(focal_time_ms, DEFAULT_UNIT_SECONDS, DEFAULT_UNIT_COUNT)
    }

    #[must_use]
    pub fn focal_time_ms(self) -> i64 {
        self.focal_time_ms
    }

    #[must_use]
    pub fn unit_seconds(self) -> f64 {
        self.unit_seconds
    }

    #[must_use]
    pub fn unit_count(self) -> u32 {
        self.unit_count
    }

    /// Duration of one primary unit in whole milliseconds.
    #[must_use]
    pub fn millis_per_unit(self) -> i64 {
        (self.unit_seconds * 1000.0).trunc() as i64
    }

    /// Visible `[start, end]` time range in milliseconds, centered on focal time.
    #[must_use]
    pub fn visible_range_ms(self) -> (i64, i64) {
        let half = (self.unit_seconds * f64::from(self.unit_count) * 1000.0 / 2.0).trunc() as i64;
        (
            self.focal_time_ms.saturating_sub(half),
            self.focal_time_ms.saturating_add(half),
        )
    }

    pub fn set_focal_time_ms(&mut self, focal_time_ms: i64) -> TimelineResult<()> {
        validate_focal_time(focal_time_ms)?;
        self.focal_time_ms = focal_time_ms;
        Ok(())
    }

    #[must_use]
    pub fn can_zoom_in(self) -> bool {
        self.unit_seconds > MIN_UNIT_SECONDS
    }

    #[must_use]
    pub fn can_zoom_out(self) -> bool {
        self.unit_seconds < MAX_UNIT_SECONDS
    }

    /// Returns the state with the primary unit halved, or `self` at the lower bound.
    #[must_use]
    pub fn zoomed_in(self) -> Self {
        if !self.can_zoom_in() {
            return self;
        }
        Self {
            unit_seconds: (self.unit_seconds / 2.0).max(MIN_UNIT_SECONDS),
            ..self
        }
    }

    /// Returns the state with the primary unit doubled, or `self` at the upper bound.
    #[must_use]
    pub fn zoomed_out(self) -> Self {
        if !self.can_zoom_out() {
            return self;
        }
        Self {
            unit_seconds: (self.unit_seconds * 2.0).min(MAX_UNIT_SECONDS),
            ..self
        }
    }
}

fn validate_focal_time(focal_time_ms: i64) -> TimelineResult<()> {
    if DateTime::<Utc>::from_timestamp_millis(focal_time_ms).is_none() {
        return Err(TimelineError::InvalidConfig(format!(
            "focal time {focal_time_ms}ms is outside the supported calendar range"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{MAX_UNIT_SECONDS, MIN_UNIT_SECONDS, ViewState};

    #[test]
    fn zoom_in_clamps_the_last_halving_to_one_second() {
        let state = ViewState::new(0, 1.7578125, 24).expect("valid state");
        let zoomed = state.zoomed_in();
        assert_eq!(zoomed.unit_seconds(), MIN_UNIT_SECONDS);
        assert_eq!(zoomed.zoomed_in(), zoomed);
    }

    #[test]
    fn zoom_out_clamps_the_last_doubling_to_one_hour() {
        let state = ViewState::new(0, 2048.0, 24).expect("valid state");
        let zoomed = state.zoomed_out();
        assert_eq!(zoomed.unit_seconds(), MAX_UNIT_SECONDS);
        assert_eq!(zoomed.zoomed_out(), zoomed);
    }

    #[test]
    fn millis_per_unit_truncates_fractional_milliseconds() {
        let state = ViewState::new(0, 14.0625, 24).expect("valid state");
        assert_eq!(state.millis_per_unit(), 14_062);
    }
}
