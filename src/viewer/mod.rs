//! Application context for a single-object viewer.
//!
//! [`ViewerContext`] owns the camera, the orbit controller, the displayed
//! box, and the input processor. Hosts (the browser glue, the CLI, tests)
//! construct one and drive it:
//!
//! ```
//! # use cubeview::{Options, ViewerContext, ViewCommand};
//! # use glam::Vec3;
//! let mut viewer = ViewerContext::new(Options::default(), 800, 600)?;
//! let _ = viewer.execute(ViewCommand::SetScale(Vec3::new(2.0, 1.0, 1.0)))?;
//! let uniform = viewer.frame(0.016);
//! assert!(uniform.view_proj[0][0].is_finite());
//! # Ok::<(), cubeview::CubeviewError>(())
//! ```

mod command;

pub use command::ViewCommand;
use glam::{Mat4, Vec3};

use crate::camera::controller::OrbitController;
use crate::camera::core::{Camera, CameraUniform};
use crate::camera::fit::{fit_camera_to_bounds, FitResult};
use crate::clock::FrameClock;
use crate::error::CubeviewError;
use crate::input::{InputEvent, InputProcessor};
use crate::model::BoxModel;
use crate::options::Options;

/// Everything one viewport needs, constructed once and passed around by
/// reference.
#[derive(Debug, Clone)]
pub struct ViewerContext {
    camera: Camera,
    controller: OrbitController,
    model: BoxModel,
    input: InputProcessor,
    options: Options,
    clock: FrameClock,
    last_fit: FitResult,
}

impl ViewerContext {
    /// Build a viewer for a `width` x `height` viewport and frame the box.
    pub fn new(
        options: Options,
        width: u32,
        height: u32,
    ) -> Result<Self, CubeviewError> {
        let mut camera = Camera::from_options(&options.camera, 1.0);
        camera.set_viewport(width, height);
        let mut controller =
            OrbitController::new(&camera, options.controls.clone());
        let model = BoxModel::new(options.model.clone());

        let last_fit = fit_camera_to_bounds(
            &mut camera,
            &mut controller,
            &model,
            options.fit.padding,
            options.fit.min_near,
        )?;
        log::info!(
            "initial framing: {width}x{height}, distance {:.3}",
            last_fit.camera_distance
        );

        Ok(Self {
            camera,
            controller,
            model,
            input: InputProcessor::with_key_bindings(
                options.keybindings.clone(),
            ),
            options,
            clock: FrameClock::new(),
            last_fit,
        })
    }

    /// Current camera pose.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The orbit controller.
    #[must_use]
    pub fn controller(&self) -> &OrbitController {
        &self.controller
    }

    /// The displayed box.
    #[must_use]
    pub fn model(&self) -> &BoxModel {
        &self.model
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Framing from the most recent fit.
    #[must_use]
    pub fn last_fit(&self) -> &FitResult {
        &self.last_fit
    }

    /// Smoothed frames per second of the frame driver.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    /// Model-to-world matrix for the host renderer.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from(self.model.transform())
    }

    /// Run a discrete command. Every command ends with a re-fit, whose
    /// framing is returned.
    pub fn execute(
        &mut self,
        command: ViewCommand,
    ) -> Result<FitResult, CubeviewError> {
        match command {
            ViewCommand::Recenter => {}
            ViewCommand::ResetScale => self.model.reset_scale(),
            ViewCommand::SetScale(scale) => {
                let applied = self.model.set_scale(scale);
                log::debug!("scale set to {applied}");
            }
        }
        self.refit()
    }

    /// Re-fit the camera to the box as it is now.
    pub fn recenter(&mut self) -> Result<FitResult, CubeviewError> {
        self.execute(ViewCommand::Recenter)
    }

    fn refit(&mut self) -> Result<FitResult, CubeviewError> {
        self.last_fit = fit_camera_to_bounds(
            &mut self.camera,
            &mut self.controller,
            &self.model,
            self.options.fit.padding,
            self.options.fit.min_near,
        )?;
        Ok(self.last_fit)
    }

    /// Replace all options and re-fit with the new projection, up vector,
    /// and limits.
    ///
    /// `camera.initial_position`, `camera.znear`, and `camera.zfar` only
    /// seed the pose before the first fit; the current viewing direction
    /// and the fitted clip planes are kept.
    pub fn set_options(
        &mut self,
        options: Options,
    ) -> Result<FitResult, CubeviewError> {
        self.camera.fovy = options.camera.fovy;
        let up = Vec3::from_array(options.camera.up);
        if up.is_finite() && up != Vec3::ZERO {
            self.camera.up = up.normalize();
            self.controller.set_up(self.camera.up);
        } else {
            log::warn!("keeping up vector, {up} is degenerate");
        }
        self.controller.set_options(options.controls.clone());
        self.model.set_options(options.model.clone());
        self.input.set_key_bindings(options.keybindings.clone());
        self.options = options;
        self.refit()
    }

    /// Feed a pointer, wheel, or modifier event. Only accumulates motion;
    /// the camera moves on the next [`frame`](Self::frame).
    pub fn handle_event(&mut self, event: InputEvent) {
        self.input.handle_event(&mut self.controller, event);
    }

    /// Feed a key press. Returns the new framing if the key was bound.
    pub fn handle_key_press(
        &mut self,
        key: &str,
    ) -> Result<Option<FitResult>, CubeviewError> {
        match self.input.handle_key_press(key) {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    /// Viewport size changed. Only the aspect ratio follows; the framing
    /// is kept until the next fit.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    /// Advance one frame at `elapsed` seconds since start: spin the box,
    /// apply pending orbit motion exactly once, and return the uniform to
    /// draw with.
    pub fn frame(&mut self, elapsed: f32) -> CameraUniform {
        self.model.spin_to(elapsed);
        self.controller.update(&mut self.camera);
        self.clock.end_frame();
        self.camera.uniform()
    }

    /// [`frame`](Self::frame) using the context's own clock.
    pub fn frame_now(&mut self) -> CameraUniform {
        let elapsed = self.clock.elapsed().as_secs_f32();
        self.frame(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerButton;

    fn viewer() -> ViewerContext {
        ViewerContext::new(Options::default(), 800, 800).unwrap()
    }

    #[test]
    fn construction_frames_the_box() {
        let v = viewer();
        assert_eq!(v.controller().target(), Vec3::ZERO);
        assert!((v.last_fit().distance - 1.25).abs() < 1e-5);
        // Default limits hold the camera at least 3 units out.
        assert!((v.camera().distance() - 3.0).abs() < 1e-4);
        assert!(v.camera().znear < 3.0 && 3.0 < v.camera().zfar);
    }

    #[test]
    fn larger_scale_moves_camera_back() {
        let mut v = viewer();
        let fit = v.execute(ViewCommand::SetScale(Vec3::splat(4.0))).unwrap();
        assert!((fit.fit_radius - 2.5).abs() < 1e-5);
        assert!((v.camera().distance() - 5.0).abs() < 1e-3);

        let reset = v.execute(ViewCommand::ResetScale).unwrap();
        assert_eq!(v.model().scale(), Vec3::ONE);
        assert!((reset.fit_radius - 0.625).abs() < 1e-6);
    }

    #[test]
    fn recenter_is_idempotent() {
        let mut v = viewer();
        let _ = v.execute(ViewCommand::SetScale(Vec3::new(6.0, 2.0, 1.0))).unwrap();
        let first = v.recenter().unwrap();
        let eye = v.camera().eye;
        let second = v.recenter().unwrap();
        assert_eq!(first.distance, second.distance);
        assert_eq!(first.near, second.near);
        assert_eq!(first.far, second.far);
        assert!((v.camera().eye - eye).length() < 1e-4);
    }

    #[test]
    fn drag_moves_camera_only_on_frame() {
        let mut v = viewer();
        let before = v.camera().eye;
        v.handle_event(InputEvent::PointerDown {
            x: 0.0,
            y: 0.0,
            button: PointerButton::Primary,
        });
        v.handle_event(InputEvent::PointerMoved { x: 80.0, y: 0.0 });
        v.handle_event(InputEvent::PointerUp {
            button: PointerButton::Primary,
        });
        assert_eq!(v.camera().eye, before);

        let _ = v.frame(0.0);
        let after_one = v.camera().eye;
        assert!((after_one - before).length() > 1e-3);

        // Damping keeps it drifting on later frames.
        let _ = v.frame(0.016);
        assert!((v.camera().eye - after_one).length() > 1e-5);
        assert!((v.camera().distance() - 3.0).abs() < 1e-3);
    }

    #[test]
    fn frame_spins_model_and_returns_uniform() {
        let mut v = viewer();
        let uniform = v.frame(2.0);
        assert_eq!(v.model().rotation(), Vec3::new(1.2, 1.6, 0.0));
        assert_eq!(uniform.position, v.camera().eye.to_array());
        assert!(v.model_matrix().is_finite());
    }

    #[test]
    fn recenter_after_pan_targets_box_center() {
        let mut v = viewer();
        v.handle_event(InputEvent::PointerDown {
            x: 0.0,
            y: 0.0,
            button: PointerButton::Secondary,
        });
        v.handle_event(InputEvent::PointerMoved { x: 200.0, y: 0.0 });
        v.handle_event(InputEvent::PointerUp {
            button: PointerButton::Secondary,
        });
        let _ = v.frame(0.0);
        assert_ne!(v.controller().target(), Vec3::ZERO);

        let fit = v.recenter().unwrap();
        assert_eq!(v.controller().target(), fit.center);
        assert_eq!(v.camera().target, fit.center);

        let eye = v.camera().eye;
        let _ = v.recenter().unwrap();
        assert_eq!(v.controller().target(), fit.center);
        assert!((v.camera().eye - eye).length() < 1e-5);
    }

    #[test]
    fn zero_width_viewport_keeps_a_valid_pose() {
        let mut v = ViewerContext::new(Options::default(), 0, 600).unwrap();
        assert_eq!(v.camera().aspect, 1.0);

        v.resize(800, 400);
        v.resize(0, 400);
        assert_eq!(v.camera().aspect, 2.0);
        assert!(v.recenter().is_ok());
        let uniform = v.frame(0.0);
        assert!(uniform.view_proj.iter().flatten().all(|x| x.is_finite()));
    }

    #[test]
    fn new_up_vector_changes_orbit_axis() {
        let mut v = viewer();
        let mut options = Options::default();
        options.camera.up = [0.0, 0.0, 2.0];
        options.controls.enable_damping = false;
        let _ = v.set_options(options).unwrap();
        assert_eq!(v.camera().up, Vec3::Z);

        let height = v.camera().eye.z;
        let distance = v.camera().distance();
        v.handle_event(InputEvent::PointerDown {
            x: 0.0,
            y: 0.0,
            button: PointerButton::Primary,
        });
        v.handle_event(InputEvent::PointerMoved { x: 60.0, y: 0.0 });
        let before = v.camera().eye;
        let _ = v.frame(0.0);
        assert!((v.camera().eye - before).length() > 1e-3);
        assert!((v.camera().eye.z - height).abs() < 1e-3);
        assert!((v.camera().distance() - distance).abs() < 1e-3);
    }

    #[test]
    fn resize_changes_aspect_only() {
        let mut v = viewer();
        let eye = v.camera().eye;
        v.resize(1200, 600);
        assert_eq!(v.camera().aspect, 2.0);
        assert_eq!(v.camera().eye, eye);
    }

    #[test]
    fn bound_keys_execute_commands() {
        let mut v = viewer();
        let _ = v.execute(ViewCommand::SetScale(Vec3::splat(3.0))).unwrap();
        let fit = v.handle_key_press("KeyR").unwrap();
        assert!(fit.is_some());
        assert_eq!(v.model().scale(), Vec3::ONE);
        assert!(v.handle_key_press("KeyQ").unwrap().is_none());
    }

    #[test]
    fn new_options_apply_and_refit() {
        let mut v = viewer();
        let mut options = Options::default();
        options.controls.min_distance = 0.1;
        options.fit.padding = 2.0;
        let fit = v.set_options(options).unwrap();
        assert!((fit.fit_radius - 1.0).abs() < 1e-6);
        assert!((v.camera().distance() - fit.distance).abs() < 1e-4);
    }
}
