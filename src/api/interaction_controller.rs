use tracing::{debug, trace};

use crate::error::TimelineResult;
use crate::interaction::{Intent, reduce};
use crate::render::Renderer;

use super::AxisView;

impl<R: Renderer> AxisView<R> {
    /// Applies one intent and redraws when the view state changed.
    ///
    /// Returns whether the view state changed.
    pub fn apply_intent(&mut self, intent: Intent) -> TimelineResult<bool> {
        let next = reduce(self.state, intent);
        if next == self.state {
            trace!(?intent, "intent left view unchanged");
            return Ok(false);
        }

        debug!(
            ?intent,
            from_unit_seconds = self.state.unit_seconds(),
            to_unit_seconds = next.unit_seconds(),
            "view state changed"
        );
        self.state = next;
        self.redraw_after_change()?;
        Ok(true)
    }

    /// Wheel handler: negative deltas zoom in, positive deltas zoom out.
    pub fn on_wheel(&mut self, delta_y: f64) -> TimelineResult<bool> {
        match Intent::from_wheel_delta(delta_y) {
            Some(intent) => self.apply_intent(intent),
            None => Ok(false),
        }
    }

    pub fn zoom_in(&mut self) -> TimelineResult<bool> {
        self.apply_intent(Intent::ZoomIn)
    }

    pub fn zoom_out(&mut self) -> TimelineResult<bool> {
        self.apply_intent(Intent::ZoomOut)
    }

    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> TimelineResult<bool> {
        self.apply_intent(Intent::PointerDown { x, y })
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> TimelineResult<bool> {
        self.apply_intent(Intent::PointerMove { x, y })
    }

    pub fn on_pointer_up(&mut self, x: f64, y: f64) -> TimelineResult<bool> {
        self.apply_intent(Intent::PointerUp { x, y })
    }

    pub fn on_pointer_enter(&mut self, x: f64, y: f64) -> TimelineResult<bool> {
        self.apply_intent(Intent::PointerEnter { x, y })
    }

    pub fn on_pointer_leave(&mut self) -> TimelineResult<bool> {
        self.apply_intent(Intent::PointerLeave)
    }

    /// Recenters the axis on `focal_time_ms` and redraws.
    pub fn set_focal_time(&mut self, focal_time_ms: i64) -> TimelineResult<()> {
        self.state.set_focal_time_ms(focal_time_ms)?;
        debug!(focal_time_ms, "focal time changed");
        self.redraw_after_change()
    }
}
