//! View frustum extracted from a view-projection matrix.
//!
//! Used to confirm that a fitted bounding sphere actually lies inside the
//! camera's view volume.

use glam::{Mat4, Vec3, Vec4};

/// A plane `n · p + d = 0` with a unit normal pointing into the frustum.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin.
    pub distance: f32,
}

impl Plane {
    fn from_row(row: Vec4) -> Self {
        let normal = row.truncate();
        let len = normal.length();
        if len > 0.0 {
            Self {
                normal: normal / len,
                distance: row.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from `point` to the plane (positive = inside).
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// Six inward-facing clipping planes: left, right, bottom, top, near, far.
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Clipping planes.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Gribb/Hartmann plane extraction for a right-handed projection with
    /// [0,1] depth.
    #[must_use]
    pub fn from_view_projection(vp: Mat4) -> Self {
        let m = vp.transpose();
        let (r0, r1, r2, r3) = (m.x_axis, m.y_axis, m.z_axis, m.w_axis);

        Self {
            planes: [
                Plane::from_row(r3 + r0),
                Plane::from_row(r3 - r0),
                Plane::from_row(r3 + r1),
                Plane::from_row(r3 - r1),
                Plane::from_row(r2),
                Plane::from_row(r3 - r2),
            ],
        }
    }

    /// Whether `point` is inside every plane.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|p| p.distance_to_point(point) >= 0.0)
    }

    /// Whether a sphere lies entirely inside the frustum, with `tolerance`
    /// world units of slack per plane.
    #[must_use]
    pub fn contains_sphere(
        &self,
        center: Vec3,
        radius: f32,
        tolerance: f32,
    ) -> bool {
        self.planes
            .iter()
            .all(|p| p.distance_to_point(center) >= radius - tolerance)
    }

    /// Whether the side planes (left, right, bottom, top) all contain the
    /// sphere, ignoring near/far.
    #[must_use]
    pub fn sides_contain_sphere(
        &self,
        center: Vec3,
        radius: f32,
        tolerance: f32,
    ) -> bool {
        self.planes[..4]
            .iter()
            .all(|p| p.distance_to_point(center) >= radius - tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looking_down_z() -> Frustum {
        let proj = Mat4::perspective_rh(45.0_f32.to_radians(), 1.0, 0.1, 100.0);
        let view =
            Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        Frustum::from_view_projection(proj * view)
    }

    #[test]
    fn origin_inside_point_behind_outside() {
        let frustum = looking_down_z();
        assert!(frustum.contains_point(Vec3::ZERO));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 20.0)));
    }

    #[test]
    fn sphere_containment() {
        let frustum = looking_down_z();
        assert!(frustum.contains_sphere(Vec3::ZERO, 1.0, 0.0));
        // half-height of the view at distance 10 is 10 * tan(22.5°) ≈ 4.14
        assert!(!frustum.contains_sphere(Vec3::ZERO, 5.0, 0.0));
        assert!(!frustum.sides_contain_sphere(Vec3::ZERO, 5.0, 0.0));
    }
}
