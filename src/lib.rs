//! Unified press gesture tracking for mouse and touch input.
//!
//! Converts raw backend pointer events into consistent press-start,
//! press-end, and activated (tap/click) callbacks so that press-state
//! styling and tap detection behave identically on desktop pointer devices
//! and touchscreens. The host application routes its platform events into a
//! [`PressTracker`]; the tracker owns all per-element interaction state.

pub mod config;
pub mod input;

pub use config::TrackerConfig;
pub use input::{
    DeviceClass, ElementId, EventBinding, GestureInput, PressCallback, PressPhase, PressTracker,
    RawEvent, RawEventKind, TouchPoint, TouchableOptions,
};
