mod core;
mod pointer;

pub use self::core::{PressCallback, PressPhase, PressTracker, TouchableOptions};
