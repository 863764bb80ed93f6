//! Browser bindings.
//!
//! [`WebViewer`] wraps a [`ViewerContext`] for JavaScript. The page owns
//! the canvas, the renderer, and the `requestAnimationFrame` loop:
//!
//! 1. construct a `WebViewer` with the canvas size
//! 2. call [`WebViewer::attach`] once to route pointer, wheel, and key
//!    events from the canvas into the viewer
//! 3. call [`WebViewer::frame`] from every animation frame (with the
//!    `requestAnimationFrame` timestamp, or nothing to use the viewer's
//!    clock) and draw with the returned matrices
//!
//! Listener closures are leaked with `forget()`; they live as long as the
//! page.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, HtmlCanvasElement, KeyboardEvent, PointerEvent,
    WheelEvent,
};

use crate::error::CubeviewError;
use crate::input::{InputEvent, PointerButton};
use crate::options::Options;
use crate::viewer::{ViewCommand, ViewerContext};

/// Install the panic hook and route `log` to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

fn to_js(err: &CubeviewError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn web_error(context: &str, err: &JsValue) -> CubeviewError {
    CubeviewError::Web(format!("{context}: {err:?}"))
}

/// A viewer bound to one canvas.
#[wasm_bindgen]
pub struct WebViewer {
    inner: Rc<RefCell<ViewerContext>>,
    attached: bool,
}

#[wasm_bindgen]
impl WebViewer {
    /// Create a viewer for a `width` x `height` canvas. `options_toml`
    /// overrides the defaults when given.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        options_toml: Option<String>,
    ) -> Result<WebViewer, JsValue> {
        let options = match options_toml {
            Some(text) => Options::from_toml_str(&text).map_err(|e| to_js(&e))?,
            None => Options::default(),
        };
        let viewer =
            ViewerContext::new(options, width, height).map_err(|e| to_js(&e))?;
        Ok(Self {
            inner: Rc::new(RefCell::new(viewer)),
            attached: false,
        })
    }

    /// Register canvas and window listeners. Later calls are no-ops.
    pub fn attach(&mut self, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        if self.attached {
            log::warn!("attach called twice; listeners already registered");
            return Ok(());
        }
        register_listeners(&self.inner, canvas).map_err(|e| to_js(&e))?;
        self.attached = true;
        log::info!("listeners attached");
        Ok(())
    }

    /// Advance one frame at `elapsed_ms` since page start, or by the
    /// viewer's own clock when omitted. Returns the column-major
    /// view-projection matrix.
    pub fn frame(&self, elapsed_ms: Option<f64>) -> Vec<f32> {
        let mut viewer = self.inner.borrow_mut();
        let uniform = match elapsed_ms {
            Some(ms) => viewer.frame((ms / 1000.0) as f32),
            None => viewer.frame_now(),
        };
        uniform.view_proj.as_flattened().to_vec()
    }

    /// Column-major model matrix of the box.
    #[wasm_bindgen(js_name = modelMatrix)]
    pub fn model_matrix(&self) -> Vec<f32> {
        self.inner.borrow().model_matrix().to_cols_array().to_vec()
    }

    /// Camera position, for lighting.
    #[wasm_bindgen(js_name = eyePosition)]
    pub fn eye_position(&self) -> Vec<f32> {
        self.inner.borrow().camera().eye.to_array().to_vec()
    }

    /// Apply the dimension text fields. Unparseable or too-small values
    /// are replaced; the applied scale is returned so the page can echo
    /// it back into the fields.
    #[wasm_bindgen(js_name = setScale)]
    pub fn set_scale(&self, x: &str, y: &str, z: &str) -> Result<Vec<f32>, JsValue> {
        let mut viewer = self.inner.borrow_mut();
        let model = viewer.model();
        let scale = Vec3::new(
            model.parse_axis(x),
            model.parse_axis(y),
            model.parse_axis(z),
        );
        let _ = viewer
            .execute(ViewCommand::SetScale(scale))
            .map_err(|e| to_js(&e))?;
        Ok(viewer.model().scale().to_array().to_vec())
    }

    /// Re-fit the camera to the box.
    pub fn recenter(&self) -> Result<(), JsValue> {
        let _ = self.inner.borrow_mut().recenter().map_err(|e| to_js(&e))?;
        Ok(())
    }

    /// Back to a unit cube, then re-fit.
    #[wasm_bindgen(js_name = resetScale)]
    pub fn reset_scale(&self) -> Result<(), JsValue> {
        let _ = self
            .inner
            .borrow_mut()
            .execute(ViewCommand::ResetScale)
            .map_err(|e| to_js(&e))?;
        Ok(())
    }

    /// Canvas resized.
    pub fn resize(&self, width: u32, height: u32) {
        self.inner.borrow_mut().resize(width, height);
    }

    /// Texture repeat for the current scale.
    #[wasm_bindgen(js_name = textureRepeat)]
    pub fn texture_repeat(&self) -> Vec<f32> {
        self.inner.borrow().model().texture_repeat().to_array().to_vec()
    }

    /// Smoothed frame rate.
    pub fn fps(&self) -> f32 {
        self.inner.borrow().fps()
    }
}

fn dispatch(viewer: &Rc<RefCell<ViewerContext>>, event: InputEvent) {
    match viewer.try_borrow_mut() {
        Ok(mut viewer) => viewer.handle_event(event),
        Err(_) => log::warn!("viewer busy, dropped {event:?}"),
    }
}

fn register_listeners(
    viewer: &Rc<RefCell<ViewerContext>>,
    canvas: &HtmlCanvasElement,
) -> Result<(), CubeviewError> {
    // pointerdown
    let state = Rc::clone(viewer);
    let target = canvas.clone();
    let on_down = Closure::<dyn FnMut(PointerEvent)>::new(
        move |evt: PointerEvent| {
            if let Err(e) = target.set_pointer_capture(evt.pointer_id()) {
                log::debug!("pointer capture failed: {e:?}");
            }
            dispatch(
                &state,
                InputEvent::ModifiersChanged {
                    shift: evt.shift_key(),
                },
            );
            dispatch(
                &state,
                InputEvent::PointerDown {
                    x: evt.offset_x() as f32,
                    y: evt.offset_y() as f32,
                    button: PointerButton::from_dom_code(evt.button()),
                },
            );
        },
    );
    canvas
        .add_event_listener_with_callback(
            "pointerdown",
            on_down.as_ref().unchecked_ref(),
        )
        .map_err(|e| web_error("pointerdown listener", &e))?;
    on_down.forget();

    // pointermove
    let state = Rc::clone(viewer);
    let on_move = Closure::<dyn FnMut(PointerEvent)>::new(
        move |evt: PointerEvent| {
            dispatch(
                &state,
                InputEvent::PointerMoved {
                    x: evt.offset_x() as f32,
                    y: evt.offset_y() as f32,
                },
            );
        },
    );
    canvas
        .add_event_listener_with_callback(
            "pointermove",
            on_move.as_ref().unchecked_ref(),
        )
        .map_err(|e| web_error("pointermove listener", &e))?;
    on_move.forget();

    // pointerup and pointercancel both end the gesture
    let state = Rc::clone(viewer);
    let on_up = Closure::<dyn FnMut(PointerEvent)>::new(
        move |evt: PointerEvent| {
            dispatch(
                &state,
                InputEvent::PointerUp {
                    button: PointerButton::from_dom_code(evt.button()),
                },
            );
        },
    );
    for name in ["pointerup", "pointercancel"] {
        canvas
            .add_event_listener_with_callback(name, on_up.as_ref().unchecked_ref())
            .map_err(|e| web_error(name, &e))?;
    }
    on_up.forget();

    // wheel, non-passive so the page does not scroll
    let state = Rc::clone(viewer);
    let on_wheel = Closure::<dyn FnMut(WheelEvent)>::new(
        move |evt: WheelEvent| {
            evt.prevent_default();
            dispatch(
                &state,
                InputEvent::Wheel {
                    delta_y: evt.delta_y() as f32,
                },
            );
        },
    );
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    canvas
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            on_wheel.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| web_error("wheel listener", &e))?;
    on_wheel.forget();

    // secondary button pans instead of opening the menu
    let on_menu = Closure::<dyn FnMut(web_sys::Event)>::new(
        move |evt: web_sys::Event| evt.prevent_default(),
    );
    canvas
        .add_event_listener_with_callback(
            "contextmenu",
            on_menu.as_ref().unchecked_ref(),
        )
        .map_err(|e| web_error("contextmenu listener", &e))?;
    on_menu.forget();

    // keydown on the window
    let state = Rc::clone(viewer);
    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(
        move |evt: KeyboardEvent| {
            if evt.repeat() {
                return;
            }
            let Ok(mut viewer) = state.try_borrow_mut() else {
                return;
            };
            match viewer.handle_key_press(&evt.code()) {
                Ok(Some(fit)) => {
                    log::debug!("key {} refit to {:.3}", evt.code(), fit.distance);
                }
                Ok(None) => {}
                Err(e) => log::warn!("key {}: {e}", evt.code()),
            }
        },
    );
    web_sys::window()
        .ok_or_else(|| CubeviewError::Web("no global window".into()))?
        .add_event_listener_with_callback(
            "keydown",
            on_key.as_ref().unchecked_ref(),
        )
        .map_err(|e| web_error("keydown listener", &e))?;
    on_key.forget();

    Ok(())
}
