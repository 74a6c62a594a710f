//! Press state machine records and tracker construction.

use std::collections::HashMap;
use std::time::Instant;

use crate::config::TrackerConfig;
use crate::input::binding::{DeviceClass, EventBinding};
use crate::input::events::ElementId;

/// Callback invoked with the identity of the element a gesture happened on.
pub type PressCallback = Box<dyn FnMut(ElementId)>;

fn noop() -> PressCallback {
    Box::new(|_| {})
}

/// Caller-supplied tracker options.
///
/// Every field has a default (thresholds and delay from
/// [`TrackerConfig::default`], callbacks as no-ops), so callers set only what
/// they care about:
///
/// ```ignore
/// let options = TouchableOptions {
///     on_activated: Box::new(|element| open_link(element)),
///     ..TouchableOptions::default()
/// };
/// ```
pub struct TouchableOptions {
    /// Numeric settings: drift thresholds and activation delay
    pub config: TrackerConfig,
    /// Invoked when a press begins
    pub on_press_start: PressCallback,
    /// Invoked when a press ends, for any reason
    pub on_press_end: PressCallback,
    /// Invoked when a press ends without exceeding the drift thresholds
    pub on_activated: PressCallback,
}

impl Default for TouchableOptions {
    fn default() -> Self {
        Self {
            config: TrackerConfig::default(),
            on_press_start: noop(),
            on_press_end: noop(),
            on_activated: noop(),
        }
    }
}

/// Press phase of one element.
///
/// The gesture origin exists only while a press is in progress; returning to
/// `Idle` discards it, so stale coordinates can never leak into the next
/// gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressPhase {
    /// No press in progress - waiting for a press-start input
    Idle,
    /// A press began and has not yet ended
    Pressing {
        /// Screen X coordinate captured at press start
        origin_x: f64,
        /// Screen Y coordinate captured at press start
        origin_y: f64,
    },
}

/// Interaction record for one attached element.
#[derive(Debug)]
pub(super) struct PressRecord {
    pub(super) phase: PressPhase,
}

impl PressRecord {
    pub(super) fn idle() -> Self {
        Self {
            phase: PressPhase::Idle,
        }
    }
}

/// A scheduled activated callback awaiting its deadline.
#[derive(Debug)]
pub(super) struct PendingActivation {
    pub(super) element: ElementId,
    pub(super) due: Instant,
}

/// Press gesture tracker.
///
/// Owns an explicit interaction record for every attached element, keyed by
/// element identity, so no gesture bookkeeping leaks into the elements
/// themselves. One tracker serves any number of elements; their gestures
/// never interact.
///
/// The tracker is single-threaded and event-loop-driven: all handling happens
/// synchronously inside [`PressTracker::handle_event`], except activated
/// callbacks, which wait in a queue until the host pumps
/// [`PressTracker::advance`] past their deadline.
pub struct PressTracker {
    binding: EventBinding,
    pub(super) config: TrackerConfig,
    pub(super) records: HashMap<ElementId, PressRecord>,
    pub(super) pending: Vec<PendingActivation>,
    pub(super) on_press_start: PressCallback,
    pub(super) on_press_end: PressCallback,
    pub(super) on_activated: PressCallback,
}

impl PressTracker {
    /// Builds a tracker bound to the given device class.
    ///
    /// The class is fixed for the tracker's lifetime; raw events of the other
    /// device family are ignored. Options are clamped to acceptable ranges
    /// first (see [`TrackerConfig::validate_and_clamp`]).
    pub fn new(options: TouchableOptions, class: DeviceClass) -> Self {
        let config = options.config.sanitized();
        log::debug!(
            "Press tracker bound to {class:?} events ({:.1}x{:.1} thresholds, {}ms activation delay)",
            config.threshold_x,
            config.threshold_y,
            config.activation_delay_ms
        );

        Self {
            binding: EventBinding::for_class(class),
            config,
            records: HashMap::new(),
            pending: Vec::new(),
            on_press_start: options.on_press_start,
            on_press_end: options.on_press_end,
            on_activated: options.on_activated,
        }
    }

    /// Registers a collection of elements for gesture tracking.
    ///
    /// Each element is tracked independently. Re-attaching an element resets
    /// its record to idle. The collection is returned unchanged so call sites
    /// can keep chaining on it.
    pub fn attach(&mut self, elements: Vec<ElementId>) -> Vec<ElementId> {
        for &element in &elements {
            self.records.insert(element, PressRecord::idle());
        }
        log::debug!("Tracking {} element(s)", self.records.len());
        elements
    }

    /// Unregisters one element and discards its record.
    ///
    /// Returns whether the element was attached. A pending activation for the
    /// element is not withdrawn; it still fires.
    pub fn detach(&mut self, element: ElementId) -> bool {
        self.records.remove(&element).is_some()
    }

    /// Returns whether the element is currently registered.
    pub fn is_attached(&self, element: ElementId) -> bool {
        self.records.contains_key(&element)
    }

    /// Returns whether a press is in progress on the element.
    pub fn is_pressing(&self, element: ElementId) -> bool {
        matches!(
            self.records.get(&element),
            Some(PressRecord {
                phase: PressPhase::Pressing { .. }
            })
        )
    }

    /// The device class this tracker was bound to at construction.
    pub fn device_class(&self) -> DeviceClass {
        self.binding.class()
    }

    /// The sanitized settings the tracker runs with.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub(super) fn binding(&self) -> EventBinding {
        self.binding
    }

    /// Queues the activated callback for an element.
    ///
    /// The callback fires once the configured delay has elapsed and the host
    /// pumps [`PressTracker::advance`]. There is no way to withdraw it.
    pub(super) fn schedule_activation(&mut self, element: ElementId) {
        let due = Instant::now() + self.config.activation_delay();
        self.pending.push(PendingActivation { element, due });
    }

    /// Returns whether any activated callbacks are still waiting to fire.
    pub fn has_pending_activations(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Earliest deadline among pending activations.
    ///
    /// Hosts integrating with a timer-based event loop arm their next wakeup
    /// from this.
    pub fn next_activation_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|pending| pending.due).min()
    }

    /// Fires every pending activation whose deadline has passed.
    ///
    /// Entries fire in scheduling order. Returns whether entries remain, so
    /// event loops know to keep a timer armed.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.pending.is_empty() {
            return false;
        }

        let (due, waiting): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|pending| pending.due <= now);
        self.pending = waiting;

        for activation in due {
            log::debug!("Element {:?} activated", activation.element);
            (self.on_activated)(activation.element);
        }

        !self.pending.is_empty()
    }
}
