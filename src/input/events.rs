//! Generic input event types for cross-backend compatibility.

/// Identity of a tracked UI element.
///
/// Backend implementations map whatever handle they use for interactive
/// elements (widget ids, node keys, entity ids) to this opaque value for
/// unified gesture handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Raw pointer event classification.
///
/// Backend implementations map their native event types to these generic
/// kinds; which of them a tracker listens to is decided by its device-class
/// binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEventKind {
    /// Finger made contact with the surface
    TouchStart,
    /// Finger moved while in contact
    TouchMove,
    /// Finger lifted from the surface
    TouchEnd,
    /// Touch sequence aborted by the platform
    TouchCancel,
    /// Mouse button pressed
    MouseDown,
    /// Mouse moved
    MouseMove,
    /// Mouse button released
    MouseUp,
    /// Pointer left the element
    MouseOut,
}

/// One changed contact point carried by a touch event.
///
/// Coordinate fields are optional so malformed events can simply omit them;
/// extraction treats a missing field as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchPoint {
    /// Screen X coordinate of the contact
    pub screen_x: Option<f64>,
    /// Screen Y coordinate of the contact
    pub screen_y: Option<f64>,
}

impl TouchPoint {
    /// A contact point with both coordinates present.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            screen_x: Some(x),
            screen_y: Some(y),
        }
    }
}

/// A backend pointer event in normalized form.
///
/// Dispatch layers that re-emit events set `original` to the event they
/// wrapped; coordinate extraction always unwraps to the innermost native
/// event first, so synthetic wrappers never hide the real position.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    /// What happened
    pub kind: RawEventKind,
    /// Pointer X position, when the backend supplied one
    pub client_x: Option<f64>,
    /// Pointer Y position, when the backend supplied one
    pub client_y: Option<f64>,
    /// Contact points that changed in this event (touch backends only)
    pub changed_touches: Vec<TouchPoint>,
    /// The underlying native event, when this event is a dispatch-layer wrapper
    pub original: Option<Box<RawEvent>>,
}

impl RawEvent {
    /// An event with no coordinate payload at all.
    pub fn bare(kind: RawEventKind) -> Self {
        Self {
            kind,
            client_x: None,
            client_y: None,
            changed_touches: Vec::new(),
            original: None,
        }
    }

    /// A mouse-style event positioned at client coordinates.
    pub fn mouse(kind: RawEventKind, x: f64, y: f64) -> Self {
        Self {
            client_x: Some(x),
            client_y: Some(y),
            ..Self::bare(kind)
        }
    }

    /// A touch-style event carrying the given changed contact points.
    pub fn touch(kind: RawEventKind, points: Vec<TouchPoint>) -> Self {
        Self {
            changed_touches: points,
            ..Self::bare(kind)
        }
    }

    /// A dispatch-layer wrapper around a native event.
    ///
    /// The wrapper keeps its own kind (that is what listeners were bound to)
    /// but carries no position of its own.
    pub fn synthetic(kind: RawEventKind, native: RawEvent) -> Self {
        Self {
            original: Some(Box::new(native)),
            ..Self::bare(kind)
        }
    }

    /// Returns the innermost native event, unwrapping any wrappers.
    pub fn native(&self) -> &RawEvent {
        let mut event = self;
        while let Some(inner) = event.original.as_deref() {
            event = inner;
        }
        event
    }

    /// Extracts the (x, y) position used for gesture tracking.
    ///
    /// Touch events use the first changed contact point's screen coordinates;
    /// everything else falls back to the pointer's client coordinates. Any
    /// missing coordinate field reads as 0.0, so malformed events degrade
    /// gracefully instead of failing.
    pub fn coords(&self) -> (f64, f64) {
        let event = self.native();
        if let Some(touch) = event.changed_touches.first() {
            (touch.screen_x.unwrap_or(0.0), touch.screen_y.unwrap_or(0.0))
        } else {
            (event.client_x.unwrap_or(0.0), event.client_y.unwrap_or(0.0))
        }
    }
}
