//! Input handling and press gesture state machine.
//!
//! This module translates raw backend pointer events into semantic press
//! gestures. It owns the per-element press records, the one-time
//! touch-vs-mouse binding decision, and the deferred activation queue.

pub mod binding;
pub mod events;
pub mod tracker;

// Re-export commonly used types at module level
pub use binding::{DeviceClass, EventBinding, GestureInput};
pub use events::{ElementId, RawEvent, RawEventKind, TouchPoint};
pub use tracker::{PressCallback, PressPhase, PressTracker, TouchableOptions};
