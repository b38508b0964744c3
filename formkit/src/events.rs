//! Event results and pointer events.

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, the platform default should run.
    Ignored,
    /// Event was consumed, suppress the platform default (e.g. form submit).
    Consumed,
}

// =============================================================================
// Pointer Events
// =============================================================================

/// Which pointer transition a listener reacts to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed.
    #[default]
    MouseDown,
    /// Button released.
    MouseUp,
}

/// A pointer event raised by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    /// Press or release.
    pub kind: PointerEventKind,
    /// Id of the element under the pointer, if any.
    pub target: Option<String>,
}

impl PointerEvent {
    /// Create a mouse-down event on the given element.
    pub fn mouse_down(target: impl Into<String>) -> Self {
        Self {
            kind: PointerEventKind::MouseDown,
            target: Some(target.into()),
        }
    }

    /// Create a mouse-up event on the given element.
    pub fn mouse_up(target: impl Into<String>) -> Self {
        Self {
            kind: PointerEventKind::MouseUp,
            target: Some(target.into()),
        }
    }

    /// Create an event that hit no element (e.g. the window background).
    pub fn untargeted(kind: PointerEventKind) -> Self {
        Self { kind, target: None }
    }
}
