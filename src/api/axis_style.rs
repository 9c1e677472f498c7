use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};
use crate::render::Color;

const SECONDS_PER_DAY: i32 = 86_400;

/// Visual parameters for the baseline, tick marks and labels.
///
/// Vertical offsets are measured from the baseline, which itself sits
/// `baseline_offset_px` above the bottom edge of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyle {
    pub baseline_offset_px: f64,
    pub baseline_color: Color,
    pub baseline_width: f64,
    pub tick_length_px: f64,
    pub tick_color: Color,
    pub tick_width: f64,
    /// Distance from the baseline to the top of each label.
    pub label_offset_y_px: f64,
    pub label_font_size_px: f64,
    pub label_color: Color,
    /// Fixed UTC offset applied when formatting labels.
    pub label_utc_offset_seconds: i32,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            baseline_offset_px: 28.0,
            baseline_color: Color::rgb(0.8, 0.8, 0.8),
            baseline_width: 6.0,
            tick_length_px: 10.0,
            tick_color: Color::rgb(0.0, 0.0, 1.0),
            tick_width: 1.0,
            label_offset_y_px: 12.0,
            label_font_size_px: 10.0,
            label_color: Color::rgb(0.0, 0.0, 0.0),
            label_utc_offset_seconds: 0,
        }
    }
}

impl AxisStyle {
    pub fn validate(self) -> TimelineResult<Self> {
        for (name, value) in [
            ("baseline offset", self.baseline_offset_px),
            ("tick length", self.tick_length_px),
            ("label offset", self.label_offset_y_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TimelineError::InvalidConfig(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("baseline width", self.baseline_width),
            ("tick width", self.tick_width),
            ("label font size", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidConfig(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for color in [self.baseline_color, self.tick_color, self.label_color] {
            color
                .validate()
                .map_err(|err| TimelineError::InvalidConfig(err.to_string()))?;
        }
        self.label_offset()?;
        Ok(self)
    }

    pub fn label_offset(self) -> TimelineResult<FixedOffset> {
        if self.label_utc_offset_seconds.abs() >= SECONDS_PER_DAY {
            return Err(TimelineError::InvalidConfig(format!(
                "label utc offset must be within one day, got {}s",
                self.label_utc_offset_seconds
            )));
        }
        FixedOffset::east_opt(self.label_utc_offset_seconds).ok_or_else(|| {
            TimelineError::InvalidConfig(format!(
                "label utc offset {}s is out of range",
                self.label_utc_offset_seconds
            ))
        })
    }
}
