use chrono::{DateTime, FixedOffset, Utc};
use smallvec::SmallVec;

use crate::core::{SurfaceSize, TimeMapper, ViewState};

pub const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Units shorter than this get a seconds component in their labels.
pub const SECONDS_LABEL_THRESHOLD: f64 = 60.0;

/// One tick position plus its label, rebuilt on every redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub timestamp_ms: i64,
    pub x_px: f64,
    pub label: String,
}

pub type MarkerList = SmallVec<[Marker; 32]>;

/// Generates markers covering the visible range plus one unit on each side.
///
/// Tick phase is anchored to the wall-clock hour containing the padded lower
/// bound, so sub-hour units still land on `:00` of every hour. Ticks before
/// the padded lower bound are skipped.
#[must_use]
pub fn generate_markers(
    surface: SurfaceSize,
    state: ViewState,
    label_offset: FixedOffset,
) -> MarkerList {
    let mapper = TimeMapper::new(surface, state);
    let step = state.millis_per_unit();
    let (visible_start, visible_end) = state.visible_range_ms();
    let lower = visible_start.saturating_sub(step);
    let upper = visible_end.saturating_add(step);

    let hour_start = lower - lower.rem_euclid(MILLIS_PER_HOUR);
    let steps_to_lower = (lower - hour_start + step - 1) / step;
    let mut timestamp = hour_start + steps_to_lower * step;

    let mut markers = MarkerList::new();
    while timestamp <= upper {
        if let Some(label) = format_marker_label(timestamp, state.unit_seconds(), label_offset) {
            markers.push(Marker {
                timestamp_ms: timestamp,
                x_px: mapper.time_to_pixel(timestamp),
                label,
            });
        }
        match timestamp.checked_add(step) {
            Some(next) => timestamp = next,
            None => break,
        }
    }
    markers
}

/// Formats `HH:MM`, or `HH:MM:SS` for sub-minute units.
///
/// Returns `None` when the timestamp is outside chrono's calendar range.
#[must_use]
pub fn format_marker_label(
    timestamp_ms: i64,
    unit_seconds: f64,
    offset: FixedOffset,
) -> Option<String> {
    let time: DateTime<Utc> = DateTime::from_timestamp_millis(timestamp_ms)?;
    let pattern = if unit_seconds < SECONDS_LABEL_THRESHOLD {
        "%H:%M:%S"
    } else {
        "%H:%M"
    };
    Some(time.with_timezone(&offset).format(pattern).to_string())
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::format_marker_label;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).expect("utc offset")
    }

    #[test]
    fn label_switches_to_seconds_below_one_minute() {
        let ts = 1_704_110_400_000 + 5_000;
        assert_eq!(
            format_marker_label(ts, 60.0, utc()).as_deref(),
            Some("12:00")
        );
        assert_eq!(
            format_marker_label(ts, 30.0, utc()).as_deref(),
            Some("12:00:05")
        );
    }

    #[test]
    fn label_applies_fixed_offset() {
        let offset = FixedOffset::east_opt(2 * 3_600).expect("offset");
        assert_eq!(
            format_marker_label(1_704_110_400_000, 3_600.0, offset).as_deref(),
            Some("14:00")
        );
    }

    #[test]
    fn label_is_none_outside_calendar_range() {
        assert_eq!(format_marker_label(i64::MAX, 3_600.0, utc()), None);
    }
}
