use log::debug;

use super::core::{PressPhase, PressTracker};
use crate::input::binding::GestureInput;
use crate::input::events::{ElementId, RawEvent};

impl PressTracker {
    /// Feeds one raw backend event into the tracker.
    ///
    /// # Arguments
    /// * `element` - Element the event was delivered on
    /// * `event` - Raw event in normalized form
    ///
    /// # Behavior
    /// The event kind is resolved against the device-class binding; unbound
    /// kinds and events for unattached elements are dropped. Bound events
    /// have their coordinates extracted (unwrapping dispatch-layer wrappers)
    /// and drive the element's press state machine.
    pub fn handle_event(&mut self, element: ElementId, event: &RawEvent) {
        let Some(input) = self.binding().resolve(event.kind) else {
            debug!("Ignoring unbound {:?} on {element:?}", event.kind);
            return;
        };

        if !self.is_attached(element) {
            debug!("Ignoring {:?} on unattached {element:?}", event.kind);
            return;
        }

        let (x, y) = event.coords();
        match input {
            GestureInput::Press => self.on_press(element, x, y),
            GestureInput::Move => self.on_move(element, x, y),
            GestureInput::Release => self.on_release(element, x, y),
        }
    }

    /// Processes a press-start input.
    ///
    /// Records the gesture origin and fires the press-start callback. A press
    /// arriving while the element already reads as pressing restarts the
    /// origin without firing callbacks again.
    fn on_press(&mut self, element: ElementId, x: f64, y: f64) {
        let Some(record) = self.records.get_mut(&element) else {
            return;
        };

        let was_idle = matches!(record.phase, PressPhase::Idle);
        record.phase = PressPhase::Pressing {
            origin_x: x,
            origin_y: y,
        };

        if was_idle {
            debug!("Press started on {element:?} at ({x:.1}, {y:.1})");
            (self.on_press_start)(element);
        }
    }

    /// Processes a pointer move input.
    ///
    /// # Behavior
    /// Moves while idle are ignored entirely. While pressing, drift beyond
    /// either threshold ends the press as a drag: the press-end callback
    /// fires and the record returns to idle. Only strictly greater drift
    /// aborts; drift exactly equal to a threshold keeps the press alive.
    fn on_move(&mut self, element: ElementId, x: f64, y: f64) {
        let Some(record) = self.records.get_mut(&element) else {
            return;
        };
        let PressPhase::Pressing { origin_x, origin_y } = record.phase else {
            return;
        };

        if (x - origin_x).abs() > self.config.threshold_x
            || (y - origin_y).abs() > self.config.threshold_y
        {
            record.phase = PressPhase::Idle;
            debug!("Press on {element:?} drifted past threshold, ending as drag");
            (self.on_press_end)(element);
        }
    }

    /// Processes a release input: button up, touch lift, touch cancel, or
    /// the pointer leaving the element.
    ///
    /// # Behavior
    /// Fires the press-end callback, then queues the activated callback if
    /// drift stayed strictly inside both thresholds. Releases while idle
    /// produce nothing; in particular the pointer leaving an element it was
    /// never pressed on is a no-op.
    fn on_release(&mut self, element: ElementId, x: f64, y: f64) {
        let Some(record) = self.records.get_mut(&element) else {
            return;
        };
        let PressPhase::Pressing { origin_x, origin_y } = record.phase else {
            return;
        };

        record.phase = PressPhase::Idle;
        debug!("Press ended on {element:?} at ({x:.1}, {y:.1})");
        (self.on_press_end)(element);

        // Boundary drift is dead on both paths: a move needs strictly more
        // than the threshold to abort, a release strictly less to activate.
        if (x - origin_x).abs() < self.config.threshold_x
            && (y - origin_y).abs() < self.config.threshold_y
        {
            self.schedule_activation(element);
        }
    }
}
