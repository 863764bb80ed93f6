use glam::{Mat4, Vec3};

use crate::camera::frustum::Frustum;
use crate::options::CameraOptions;

/// Perspective camera defined by eye position, look-at target, and
/// projection parameters.
///
/// The camera's orientation is derived: it always faces `target` with
/// `up` as the reference up direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Uniform block handed to the host renderer once per frame.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Camera {
    /// Build a camera from options with the given viewport aspect ratio,
    /// looking at the world origin.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(options.initial_position),
            target: Vec3::ZERO,
            up: Vec3::from_array(options.up).normalize_or(Vec3::Y),
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Turn the camera to face `point`. Position is unchanged.
    pub fn look_at(&mut self, point: Vec3) {
        self.target = point;
    }

    /// Unit vector from the camera toward its target.
    ///
    /// Falls back to -Z when eye and target coincide.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or(Vec3::NEG_Z)
    }

    /// Unit vector from the target back toward the camera (the camera's
    /// local +Z axis).
    #[must_use]
    pub fn backward(&self) -> Vec3 {
        -self.forward()
    }

    /// Camera-space right axis in world coordinates.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or(Vec3::X)
    }

    /// Camera-space up axis in world coordinates, orthogonal to forward.
    #[must_use]
    pub fn true_up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize_or(self.up)
    }

    /// Distance from the eye to the target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    /// Update the aspect ratio from a viewport size in pixels.
    ///
    /// A viewport with either side zero (a collapsed container) is
    /// ignored and the previous aspect is kept.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("ignoring collapsed viewport {width}x{height}");
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// Whether every pose and projection parameter is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.eye.is_finite()
            && self.target.is_finite()
            && self.up.is_finite()
            && self.aspect.is_finite()
            && self.fovy.is_finite()
            && self.znear.is_finite()
            && self.zfar.is_finite()
    }

    /// Right-handed view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix ([0,1] depth range).
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// View frustum for the current pose and projection.
    #[must_use]
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(self.build_matrix())
    }

    /// Snapshot this camera into a GPU-ready uniform.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.build_matrix().to_cols_array_2d(),
            position: self.eye.to_array(),
            aspect: self.aspect,
            forward: self.forward().to_array(),
            fovy: self.fovy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::from_options(&CameraOptions::default(), 1.0)
    }

    #[test]
    fn default_camera_sits_on_the_diagonal() {
        let cam = camera();
        assert_eq!(cam.eye, Vec3::splat(5.0));
        assert_eq!(cam.target, Vec3::ZERO);
        assert!((cam.forward() - Vec3::splat(-1.0).normalize()).length() < 1e-6);
    }

    #[test]
    fn axes_are_orthonormal() {
        let cam = camera();
        let (f, r, u) = (cam.forward(), cam.right(), cam.true_up());
        assert!(f.dot(r).abs() < 1e-6);
        assert!(f.dot(u).abs() < 1e-6);
        assert!(r.dot(u).abs() < 1e-6);
        assert!(u.y > 0.0);
    }

    #[test]
    fn degenerate_forward_falls_back() {
        let mut cam = camera();
        cam.eye = Vec3::ONE;
        cam.target = Vec3::ONE;
        assert_eq!(cam.forward(), Vec3::NEG_Z);
        assert_eq!(cam.backward(), Vec3::Z);
    }

    #[test]
    fn set_viewport_ignores_collapsed_sides() {
        let mut cam = camera();
        cam.set_viewport(1600, 800);
        assert_eq!(cam.aspect, 2.0);
        cam.set_viewport(1600, 0);
        assert_eq!(cam.aspect, 2.0);
        cam.set_viewport(0, 600);
        assert_eq!(cam.aspect, 2.0);
        assert!(cam.build_matrix().is_finite());
    }

    #[test]
    fn non_finite_pose_is_detected() {
        let mut cam = camera();
        assert!(cam.is_finite());
        cam.aspect = f32::NAN;
        assert!(!cam.is_finite());
    }

    #[test]
    fn uniform_matches_camera() {
        let cam = camera();
        let uniform = cam.uniform();
        assert_eq!(uniform.position, [5.0, 5.0, 5.0]);
        assert_eq!(uniform.fovy, 60.0);
        assert!(uniform.view_proj.iter().flatten().all(|v| v.is_finite()));
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 96);
    }
}
