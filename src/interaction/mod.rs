use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::ViewState;

/// Host-independent user intent.
///
/// Hosts translate raw input (wheel deltas, pointer callbacks) into intents
/// and feed them to [`reduce`] or `AxisView::apply_intent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    ZoomIn,
    ZoomOut,
    /// Pointer intents are accepted but do not change the view; drag panning
    /// is not implemented.
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    PointerEnter { x: f64, y: f64 },
    PointerLeave,
}

impl Intent {
    /// Maps a vertical wheel delta to a zoom intent.
    ///
    /// Negative deltas (wheel away from the user) zoom in, positive deltas
    /// zoom out. Zero and non-finite deltas produce no intent.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return None;
        }
        if delta_y < 0.0 {
            Some(Self::ZoomIn)
        } else {
            Some(Self::ZoomOut)
        }
    }
}

/// Pure reducer: the view state that results from applying `intent`.
#[must_use]
pub fn reduce(state: ViewState, intent: Intent) -> ViewState {
    match intent {
        Intent::ZoomIn => state.zoomed_in(),
        Intent::ZoomOut => state.zoomed_out(),
        pointer => {
            trace!(intent = ?pointer, "pointer intent ignored");
            state
        }
    }
}
