use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_UNIT_COUNT, DEFAULT_UNIT_SECONDS, SurfaceSize, ViewState};
use crate::error::{TimelineError, TimelineResult};

use super::AxisStyle;

pub const AXIS_VIEW_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Public bootstrap configuration for [`super::AxisView`].
///
/// The focal time is injected explicitly so construction is deterministic;
/// `starting_now` is a convenience for hosts that want the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisViewConfig {
    pub surface: SurfaceSize,
    pub focal_time_ms: i64,
    #[serde(default = "default_unit_seconds")]
    pub unit_seconds: f64,
    #[serde(default = "default_unit_count")]
    pub unit_count: u32,
    #[serde(default)]
    pub style: AxisStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisViewConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: AxisViewConfig,
}

impl AxisViewConfig {
    #[must_use]
    pub fn new(surface: SurfaceSize, focal_time_ms: i64) -> Self {
        Self {
            surface,
            focal_time_ms,
            unit_seconds: default_unit_seconds(),
            unit_count: default_unit_count(),
            style: AxisStyle::default(),
        }
    }

    #[must_use]
    pub fn starting_now(surface: SurfaceSize) -> Self {
        Self::new(surface, Utc::now().timestamp_millis())
    }

    #[must_use]
    pub fn with_unit_seconds(mut self, unit_seconds: f64) -> Self {
        self.unit_seconds = unit_seconds;
        self
    }

    #[must_use]
    pub fn with_unit_count(mut self, unit_count: u32) -> Self {
        self.unit_count = unit_count;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Checks every field and returns the initial view state.
    pub fn validate(&self) -> TimelineResult<ViewState> {
        if !self.surface.is_valid() {
            return Err(TimelineError::InvalidSurface {
                width: self.surface.width,
                height: self.surface.height,
            });
        }
        self.style.validate()?;
        ViewState::new(self.focal_time_ms, self.unit_seconds, self.unit_count)
    }

    pub fn to_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        let payload = AxisViewConfigJsonContractV1 {
            schema_version: AXIS_VIEW_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TimelineError::InvalidConfig(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> TimelineResult<Self> {
        if let Ok(config) = serde_json::from_str::<AxisViewConfig>(input) {
            return Ok(config);
        }
        let payload: AxisViewConfigJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidConfig(format!("failed to parse config json payload: {e}"))
        })?;
        if payload.schema_version != AXIS_VIEW_CONFIG_JSON_SCHEMA_V1 {
            return Err(TimelineError::InvalidConfig(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

fn default_unit_seconds() -> f64 {
    DEFAULT_UNIT_SECONDS
}

fn default_unit_count() -> u32 {
    DEFAULT_UNIT_COUNT
}
