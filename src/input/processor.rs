//! Converts raw platform events into orbit motion and viewer commands.
//!
//! The `InputProcessor` owns the transient modifier state and the
//! key-binding map. Pointer and wheel events only accumulate motion on the
//! [`OrbitController`]; the camera pose is recomputed once per frame by
//! the frame driver, never from inside an event handler.

use glam::Vec2;

use super::event::{InputEvent, PointerButton};
use super::keyboard::KeyAction;
use crate::camera::controller::{Gesture, OrbitController, ZoomDirection};
use crate::options::KeybindingOptions;
use crate::viewer::ViewCommand;

/// Routes raw host events to the orbit controller.
///
/// # Usage
///
/// ```ignore
/// // In the host's event callbacks:
/// input_processor.handle_event(&mut controller, event);
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyC") {
///     context.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewCommand> {
        self.key_bindings.lookup(key).map(|action| match action {
            KeyAction::Recenter => ViewCommand::Recenter,
            KeyAction::ResetScale => ViewCommand::ResetScale,
        })
    }

    /// Feed one raw event.
    ///
    /// Primary-button drags orbit (or pan while shift is held); secondary
    /// and auxiliary drags pan; wheel steps zoom.
    pub fn handle_event(
        &mut self,
        controller: &mut OrbitController,
        event: InputEvent,
    ) {
        match event {
            InputEvent::PointerDown { x, y, button } => {
                let point = Vec2::new(x, y);
                match button {
                    PointerButton::Primary if !self.shift_pressed => {
                        controller.begin_rotation(point);
                    }
                    _ => controller.begin_pan(point),
                }
            }
            InputEvent::PointerMoved { x, y } => {
                let point = Vec2::new(x, y);
                match controller.gesture() {
                    Gesture::Rotating { .. } => {
                        controller.continue_rotation(point);
                    }
                    Gesture::Panning { .. } => controller.continue_pan(point),
                    Gesture::None => {}
                }
            }
            InputEvent::PointerUp { .. } => controller.end_rotation(),
            InputEvent::Wheel { delta_y } => {
                if let Some(direction) = ZoomDirection::from_wheel_delta(delta_y)
                {
                    controller.zoom(direction);
                }
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::controller::PendingMotion;
    use crate::camera::core::Camera;
    use crate::options::{CameraOptions, ControlOptions};

    fn controller() -> OrbitController {
        let camera = Camera::from_options(&CameraOptions::default(), 1.0);
        OrbitController::new(&camera, ControlOptions::default())
    }

    fn down(x: f32, y: f32, button: PointerButton) -> InputEvent {
        InputEvent::PointerDown { x, y, button }
    }

    #[test]
    fn primary_drag_rotates() {
        let mut input = InputProcessor::new();
        let mut ctrl = controller();
        input.handle_event(&mut ctrl, down(0.0, 0.0, PointerButton::Primary));
        input.handle_event(&mut ctrl, InputEvent::PointerMoved { x: 20.0, y: 0.0 });
        assert!(matches!(ctrl.gesture(), Gesture::Rotating { .. }));
        assert!(ctrl.pending().azimuth < 0.0);

        input.handle_event(
            &mut ctrl,
            InputEvent::PointerUp {
                button: PointerButton::Primary,
            },
        );
        assert_eq!(ctrl.gesture(), Gesture::None);
    }

    #[test]
    fn moves_without_button_do_nothing() {
        let mut input = InputProcessor::new();
        let mut ctrl = controller();
        input.handle_event(&mut ctrl, InputEvent::PointerMoved { x: 20.0, y: 9.0 });
        assert_eq!(ctrl.pending(), PendingMotion::default());
    }

    #[test]
    fn shift_or_secondary_pans() {
        let mut input = InputProcessor::new();
        let mut ctrl = controller();
        input.handle_event(&mut ctrl, InputEvent::ModifiersChanged { shift: true });
        input.handle_event(&mut ctrl, down(0.0, 0.0, PointerButton::Primary));
        assert!(matches!(ctrl.gesture(), Gesture::Panning { .. }));

        input.handle_event(&mut ctrl, InputEvent::ModifiersChanged { shift: false });
        input.handle_event(&mut ctrl, down(0.0, 0.0, PointerButton::Secondary));
        input.handle_event(&mut ctrl, InputEvent::PointerMoved { x: 10.0, y: 0.0 });
        assert!(matches!(ctrl.gesture(), Gesture::Panning { .. }));
        assert!(ctrl.pending().pan.x > 0.0);
        assert_eq!(ctrl.pending().azimuth, 0.0);
    }

    #[test]
    fn wheel_sets_zoom_scale() {
        let mut input = InputProcessor::new();
        let mut ctrl = controller();
        input.handle_event(&mut ctrl, InputEvent::Wheel { delta_y: -120.0 });
        assert!((ctrl.pending().scale - 1.0 / 1.1).abs() < 1e-6);
        input.handle_event(&mut ctrl, InputEvent::Wheel { delta_y: 120.0 });
        assert!((ctrl.pending().scale - 1.1).abs() < 1e-6);
        input.handle_event(&mut ctrl, InputEvent::Wheel { delta_y: 0.0 });
        assert!((ctrl.pending().scale - 1.1).abs() < 1e-6);
    }

    #[test]
    fn key_presses_map_to_commands() {
        let input = InputProcessor::new();
        assert_eq!(input.handle_key_press("KeyC"), Some(ViewCommand::Recenter));
        assert_eq!(input.handle_key_press("KeyR"), Some(ViewCommand::ResetScale));
        assert_eq!(input.handle_key_press("KeyZ"), None);
    }

    #[test]
    fn dom_button_codes() {
        assert_eq!(PointerButton::from_dom_code(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom_code(1), PointerButton::Auxiliary);
        assert_eq!(PointerButton::from_dom_code(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_dom_code(4), PointerButton::Primary);
    }
}
