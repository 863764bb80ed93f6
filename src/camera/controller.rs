use glam::{Quat, Vec2, Vec3};

use crate::camera::core::Camera;
use crate::camera::spherical::Spherical;
use crate::options::ControlOptions;

/// Radians of orbit per pixel of pointer travel at `rotate_speed = 1`.
pub const ROTATE_SENSITIVITY: f32 = 0.005;
/// Radius multiplier for one wheel notch.
pub const ZOOM_STEP: f32 = 1.1;
/// World units of pan per pixel, per unit of orbit radius.
const PAN_SENSITIVITY: f32 = 0.002;

/// Direction of a discrete zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Move toward the target.
    In,
    /// Move away from the target.
    Out,
}

impl ZoomDirection {
    /// Radius multiplier this step applies on the next update.
    #[must_use]
    pub fn scale(self) -> f32 {
        match self {
            Self::In => 1.0 / ZOOM_STEP,
            Self::Out => ZOOM_STEP,
        }
    }

    /// Map a wheel delta: positive scrolls away, negative scrolls in, zero
    /// (or NaN) is no zoom.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::Out)
        } else if delta_y < 0.0 {
            Some(Self::In)
        } else {
            None
        }
    }
}

/// The pointer gesture in progress, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No button held.
    #[default]
    None,
    /// Dragging to orbit around the target.
    Rotating {
        /// Screen point where the drag began.
        start: Vec2,
        /// Most recent screen point.
        last: Vec2,
    },
    /// Dragging to slide the target across the view plane.
    Panning {
        /// Screen point where the drag began.
        start: Vec2,
        /// Most recent screen point.
        last: Vec2,
    },
}

/// Motion accumulated from input and not yet fully applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingMotion {
    /// Azimuth delta in radians.
    pub azimuth: f32,
    /// Polar delta in radians.
    pub polar: f32,
    /// Screen-space pan, pixels scaled by pan speed.
    pub pan: Vec2,
    /// One-shot radius multiplier (1 = no zoom).
    pub scale: f32,
}

impl Default for PendingMotion {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            polar: 0.0,
            pan: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

/// Damped orbit controller.
///
/// Input methods only accumulate [`PendingMotion`]; the camera moves
/// exclusively inside [`update`](Self::update), which the frame driver calls
/// once per frame.
#[derive(Debug, Clone)]
pub struct OrbitController {
    target: Vec3,
    spherical: Spherical,
    pending: PendingMotion,
    gesture: Gesture,
    options: ControlOptions,
    /// Maps the camera's up vector onto +Y.
    up_to_y: Quat,
    y_to_up: Quat,
}

/// `min.max(max.min(v))`: unlike `f32::clamp` this never panics on an
/// inverted range and resolves to `min`.
fn clamp_range(v: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(v))
}

impl OrbitController {
    /// Create a controller orbiting the camera's current target.
    #[must_use]
    pub fn new(camera: &Camera, options: ControlOptions) -> Self {
        let up_to_y =
            Quat::from_rotation_arc(camera.up.normalize_or(Vec3::Y), Vec3::Y);
        Self {
            target: camera.target,
            spherical: Spherical::from_vec3(
                up_to_y * (camera.eye - camera.target),
            ),
            pending: PendingMotion::default(),
            gesture: Gesture::None,
            options,
            up_to_y,
            y_to_up: up_to_y.inverse(),
        }
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Replace the orbit target. Takes effect on the next update.
    pub fn set_target(&mut self, target: Vec3) {
        if target.is_finite() {
            self.target = target;
        } else {
            log::warn!("ignoring non-finite orbit target {target}");
        }
    }

    /// Orbit state as of the last update.
    #[must_use]
    pub fn spherical(&self) -> Spherical {
        self.spherical
    }

    /// Motion still waiting to be applied.
    #[must_use]
    pub fn pending(&self) -> PendingMotion {
        self.pending
    }

    /// Active pointer gesture.
    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Current limits and sensitivities.
    #[must_use]
    pub fn options(&self) -> &ControlOptions {
        &self.options
    }

    /// Swap in new limits; they apply from the next update.
    pub fn set_options(&mut self, options: ControlOptions) {
        self.options = options;
    }

    /// Re-derive the orbit frame from a new camera up vector. The orbit
    /// state is recomputed from the camera on the next update.
    pub fn set_up(&mut self, up: Vec3) {
        if !up.is_finite() || up == Vec3::ZERO {
            log::warn!("ignoring degenerate up vector {up}");
            return;
        }
        self.up_to_y = Quat::from_rotation_arc(up.normalize(), Vec3::Y);
        self.y_to_up = self.up_to_y.inverse();
    }

    /// Start an orbit drag at `point`, replacing any gesture in progress.
    pub fn begin_rotation(&mut self, point: Vec2) {
        if !self.options.enabled || !self.options.enable_rotate {
            return;
        }
        if !point.is_finite() {
            log::warn!("ignoring non-finite pointer position {point}");
            return;
        }
        self.gesture = Gesture::Rotating { start: point, last: point };
    }

    /// Feed the next pointer position of an orbit drag.
    ///
    /// Dragging right decreases the azimuth, dragging down decreases the
    /// polar angle. No-op unless a rotation is active.
    pub fn continue_rotation(&mut self, point: Vec2) {
        let Gesture::Rotating { start, last } = self.gesture else {
            return;
        };
        if !point.is_finite() {
            log::warn!("ignoring non-finite pointer position {point}");
            return;
        }
        let delta =
            (point - last) * self.options.rotate_speed * ROTATE_SENSITIVITY;
        self.pending.azimuth -= delta.x;
        self.pending.polar -= delta.y;
        self.gesture = Gesture::Rotating { start, last: point };
    }

    /// End whatever gesture is active. Idempotent.
    pub fn end_rotation(&mut self) {
        self.gesture = Gesture::None;
    }

    /// Start a pan drag at `point`, replacing any gesture in progress.
    pub fn begin_pan(&mut self, point: Vec2) {
        if !self.options.enabled || !self.options.enable_pan {
            return;
        }
        if !point.is_finite() {
            log::warn!("ignoring non-finite pointer position {point}");
            return;
        }
        self.gesture = Gesture::Panning { start: point, last: point };
    }

    /// Feed the next pointer position of a pan drag. No-op unless a pan is
    /// active.
    pub fn continue_pan(&mut self, point: Vec2) {
        let Gesture::Panning { start, last } = self.gesture else {
            return;
        };
        if !point.is_finite() {
            log::warn!("ignoring non-finite pointer position {point}");
            return;
        }
        self.pending.pan += (point - last) * self.options.pan_speed;
        self.gesture = Gesture::Panning { start, last: point };
    }

    /// Request one zoom step, consumed by the next update.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        if !self.options.enabled || !self.options.enable_zoom {
            return;
        }
        self.pending.scale = direction.scale();
    }

    /// Drop all pending orbit, pan, and zoom motion. An active gesture is
    /// kept, so a drag in progress continues from its last point.
    pub fn stop(&mut self) {
        self.pending = PendingMotion::default();
    }

    /// Apply pending motion to `camera` with all limits enforced, then
    /// decay (damping) or clear the pending motion.
    pub fn update(&mut self, camera: &mut Camera) {
        if !camera.eye.is_finite() || !self.target.is_finite() {
            log::warn!("skipping orbit update: camera pose is not finite");
            return;
        }
        let opts = &self.options;
        let mut s = Spherical::from_vec3(self.up_to_y * (camera.eye - self.target));

        s.theta += self.pending.azimuth;
        s.phi += self.pending.polar;

        s.theta =
            clamp_range(s.theta, opts.min_azimuth_angle, opts.max_azimuth_angle);
        s.phi = clamp_range(s.phi, opts.min_polar_angle, opts.max_polar_angle);
        s.make_safe();

        s.radius = clamp_range(
            s.radius * self.pending.scale,
            opts.min_distance,
            opts.max_distance,
        );

        if self.pending.pan != Vec2::ZERO {
            let pan = self.pending.pan * (s.radius * PAN_SENSITIVITY);
            self.target += camera.right() * -pan.x + camera.true_up() * pan.y;
        }

        camera.eye = self.target + self.y_to_up * s.to_vec3();
        camera.look_at(self.target);
        self.spherical = s;

        if opts.enable_damping {
            let decay = opts.decay();
            self.pending.azimuth *= decay;
            self.pending.polar *= decay;
            self.pending.pan *= decay;
        } else {
            self.pending.azimuth = 0.0;
            self.pending.polar = 0.0;
            self.pending.pan = Vec2::ZERO;
        }
        self.pending.scale = 1.0;
    }
}
