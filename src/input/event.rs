/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// turns them into pending orbit motion on the controller.
///
/// # Example
///
/// ```ignore
/// input_processor.handle_event(
///     &mut controller,
///     InputEvent::PointerDown { x: 100.0, y: 200.0, button: PointerButton::Primary },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Button pressed over the viewport.
    PointerDown {
        /// Horizontal position in CSS/physical pixels.
        x: f32,
        /// Vertical position in CSS/physical pixels.
        y: f32,
        /// Which button went down.
        button: PointerButton,
    },
    /// Pointer moved to an absolute screen position.
    PointerMoved {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Button released.
    PointerUp {
        /// Which button went up.
        button: PointerButton,
    },
    /// Scroll wheel, positive `delta_y` scrolls away from the target.
    Wheel {
        /// Signed vertical scroll amount.
        delta_y: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
}

/// Platform-agnostic pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) button.
    Primary,
    /// Auxiliary (middle/wheel) button.
    Auxiliary,
    /// Secondary (right) button.
    Secondary,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code. Unknown codes count as
    /// primary.
    #[must_use]
    pub fn from_dom_code(code: i16) -> Self {
        match code {
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}
