//! Input handling: event types, key actions, and the input processor
//! that turns raw host events into orbit motion and viewer commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Routes raw events to the orbit controller.
pub mod processor;

pub use event::{InputEvent, PointerButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
