//! Device-class binding: the one-time touch-vs-mouse decision.
//!
//! Whether the running environment delivers touch events is decided once when
//! a tracker is built. The resulting binding is a fixed table from raw event
//! kinds to the state machine's gesture inputs; kinds outside the table are
//! dropped before they reach any per-element state.

use super::events::RawEventKind;

/// Input device family a tracker is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    /// Environment delivers touch events; mouse kinds are left unbound
    Touch,
    /// Pointer-only environment; touch kinds are left unbound
    Mouse,
}

impl DeviceClass {
    /// Selects the device class from the host-reported touch capability.
    ///
    /// Callers probe their windowing layer once at setup and pass the answer
    /// here; the decision is never re-evaluated per event.
    pub fn from_touch_support(touch_supported: bool) -> Self {
        if touch_supported {
            Self::Touch
        } else {
            Self::Mouse
        }
    }
}

/// Normalized input alphabet of the press state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureInput {
    /// A contact began on the element
    Press,
    /// The contact moved
    Move,
    /// The contact ended: release, cancel, or the pointer leaving the element
    Release,
}

/// Fixed mapping from raw event kinds to gesture inputs for one device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBinding {
    class: DeviceClass,
}

impl EventBinding {
    /// The binding table for the given device class.
    pub fn for_class(class: DeviceClass) -> Self {
        Self { class }
    }

    /// The device class this binding was built for.
    pub fn class(&self) -> DeviceClass {
        self.class
    }

    /// Resolves a raw event kind against the binding table.
    ///
    /// Returns `None` for kinds the bound device class does not listen to.
    /// A pointer leaving the element ends the press the same way a button
    /// release does.
    pub fn resolve(&self, kind: RawEventKind) -> Option<GestureInput> {
        use RawEventKind::*;

        match self.class {
            DeviceClass::Touch => match kind {
                TouchStart => Some(GestureInput::Press),
                TouchMove => Some(GestureInput::Move),
                TouchEnd | TouchCancel => Some(GestureInput::Release),
                MouseDown | MouseMove | MouseUp | MouseOut => None,
            },
            DeviceClass::Mouse => match kind {
                MouseDown => Some(GestureInput::Press),
                MouseMove => Some(GestureInput::Move),
                MouseUp | MouseOut => Some(GestureInput::Release),
                TouchStart | TouchMove | TouchEnd | TouchCancel => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_support_selects_touch_class() {
        assert_eq!(DeviceClass::from_touch_support(true), DeviceClass::Touch);
        assert_eq!(DeviceClass::from_touch_support(false), DeviceClass::Mouse);
    }

    #[test]
    fn touch_binding_table() {
        let binding = EventBinding::for_class(DeviceClass::Touch);
        assert_eq!(
            binding.resolve(RawEventKind::TouchStart),
            Some(GestureInput::Press)
        );
        assert_eq!(
            binding.resolve(RawEventKind::TouchMove),
            Some(GestureInput::Move)
        );
        assert_eq!(
            binding.resolve(RawEventKind::TouchEnd),
            Some(GestureInput::Release)
        );
        assert_eq!(
            binding.resolve(RawEventKind::TouchCancel),
            Some(GestureInput::Release)
        );
        for kind in [
            RawEventKind::MouseDown,
            RawEventKind::MouseMove,
            RawEventKind::MouseUp,
            RawEventKind::MouseOut,
        ] {
            assert_eq!(binding.resolve(kind), None);
        }
    }

    #[test]
    fn mouse_binding_table() {
        let binding = EventBinding::for_class(DeviceClass::Mouse);
        assert_eq!(
            binding.resolve(RawEventKind::MouseDown),
            Some(GestureInput::Press)
        );
        assert_eq!(
            binding.resolve(RawEventKind::MouseMove),
            Some(GestureInput::Move)
        );
        assert_eq!(
            binding.resolve(RawEventKind::MouseUp),
            Some(GestureInput::Release)
        );
        assert_eq!(
            binding.resolve(RawEventKind::MouseOut),
            Some(GestureInput::Release)
        );
        for kind in [
            RawEventKind::TouchStart,
            RawEventKind::TouchMove,
            RawEventKind::TouchEnd,
            RawEventKind::TouchCancel,
        ] {
            assert_eq!(binding.resolve(kind), None);
        }
    }
}
