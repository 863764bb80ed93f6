//! Fit-to-object framing.
//!
//! Moves the camera straight back along its current viewing axis until the
//! object's bounding sphere fits both the vertical and horizontal field of
//! view, then brackets the object with the clip planes and hands the new
//! pose back to the orbit controller.

use glam::Vec3;
use serde::Serialize;

use crate::camera::bounds::Bounded;
use crate::camera::controller::OrbitController;
use crate::camera::core::Camera;
use crate::error::CubeviewError;

/// Smallest gap kept between the near and far planes.
const MIN_DEPTH_RANGE: f32 = 1e-3;
/// Relative difference beyond which the controller is considered to have
/// clamped the fitted distance.
const CLAMP_TOLERANCE: f32 = 1e-4;

/// Framing computed by [`fit_camera_to_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitResult {
    /// Bounding box center, now the orbit target.
    pub center: Vec3,
    /// Bounding-sphere radius times padding.
    pub fit_radius: f32,
    /// Distance needed for the vertical field of view.
    pub vertical_distance: f32,
    /// Distance needed for the horizontal field of view.
    pub horizontal_distance: f32,
    /// Chosen eye-to-center distance (the larger of the two).
    pub distance: f32,
    /// Eye-to-center distance after the controller applied its distance
    /// limits. Equals `distance` unless a limit was hit.
    pub camera_distance: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

/// Distance at which a sphere of `fit_radius` exactly fits a symmetric
/// frustum, as `(vertical, horizontal)`.
#[must_use]
pub fn fit_distances(fit_radius: f32, fovy_deg: f32, aspect: f32) -> (f32, f32) {
    let half_v = fovy_deg.to_radians() * 0.5;
    let half_h = (half_v.tan() * aspect).atan();
    (fit_radius / half_v.sin(), fit_radius / half_h.sin())
}

/// Near and far planes bracketing a sphere of `fit_radius` at `distance`.
/// The half-depth never drops below `MIN_DEPTH_RANGE`, so a positive
/// `distance` always lies strictly between the planes.
fn clip_planes(distance: f32, fit_radius: f32, min_near: f32) -> (f32, f32) {
    let half_depth = (fit_radius * 2.0).max(MIN_DEPTH_RANGE);
    let near = (distance - half_depth).max(min_near);
    let far = (distance + half_depth).max(near + MIN_DEPTH_RANGE);
    (near, far)
}

/// Reframe `camera` so `object` is fully visible with `padding` margin.
///
/// The viewing direction is preserved; only the distance, clip planes and
/// orbit target change. The controller is updated once so its orbit state
/// matches the new pose. If the controller's distance limits move the
/// camera, the clip planes are re-bracketed around where it ended up.
/// Calling this twice with unchanged bounds and no input in between yields
/// the same pose.
///
/// Rejects non-finite bounds or pose and non-positive padding.
pub fn fit_camera_to_bounds(
    camera: &mut Camera,
    controller: &mut OrbitController,
    object: &impl Bounded,
    padding: f32,
    min_near: f32,
) -> Result<FitResult, CubeviewError> {
    let bounds = object.world_bounds();
    if !bounds.is_finite() {
        return Err(CubeviewError::NonFiniteBounds);
    }
    if !camera.is_finite() {
        return Err(CubeviewError::NonFinitePose);
    }
    if !padding.is_finite() || padding <= 0.0 {
        return Err(CubeviewError::InvalidPadding(padding));
    }

    let center = bounds.center();
    let fit_radius = bounds.bounding_radius() * padding;

    camera.look_at(center);

    let (vertical_distance, horizontal_distance) =
        fit_distances(fit_radius, camera.fovy, camera.aspect);
    let distance = vertical_distance.max(horizontal_distance);
    if !distance.is_finite() {
        return Err(CubeviewError::NonFinitePose);
    }

    let back = camera.backward();
    camera.eye = center + back * distance;

    let (mut near, mut far) = clip_planes(distance, fit_radius, min_near);
    camera.znear = near;
    camera.zfar = far;

    // Leftover orbit or pan motion would drag the target off `center`.
    controller.stop();
    controller.set_target(center);
    controller.update(camera);

    let camera_distance = camera.distance();
    if (camera_distance - distance).abs() > CLAMP_TOLERANCE * distance.max(1.0)
    {
        (near, far) = clip_planes(camera_distance, fit_radius, min_near);
        camera.znear = near;
        camera.zfar = far;
        log::debug!(
            "fit: distance {distance:.3} clamped to {camera_distance:.3}"
        );
    }

    log::debug!(
        "fit: center={center} radius={fit_radius:.3} distance={distance:.3} \
         near={near:.3} far={far:.3}"
    );

    Ok(FitResult {
        center,
        fit_radius,
        vertical_distance,
        horizontal_distance,
        distance,
        camera_distance,
        near,
        far,
    })
}
