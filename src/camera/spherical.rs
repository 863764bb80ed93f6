//! Spherical coordinates for orbit offsets.
//!
//! Y-up convention: `phi` is the polar angle measured from +Y, `theta` is
//! the azimuth measured from +Z toward +X.

use std::f32::consts::PI;

use glam::Vec3;

/// Polar-angle margin kept away from the poles.
pub const POLE_EPSILON: f32 = 1e-6;

/// A point on a sphere: radius, polar angle, and azimuth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f32,
    /// Polar angle from +Y in radians, in `[0, π]`.
    pub phi: f32,
    /// Azimuth around +Y in radians, zero on +Z.
    pub theta: f32,
}

impl Spherical {
    /// Create from explicit components.
    #[must_use]
    pub const fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    /// Convert a Cartesian offset. A zero offset maps to all-zero angles.
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    /// Convert back to a Cartesian offset.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let ring = sin_phi * self.radius;
        Vec3::new(ring * sin_theta, cos_phi * self.radius, ring * cos_theta)
    }

    /// Keep `phi` strictly inside `(0, π)` so the view never looks straight
    /// along the up axis.
    pub fn make_safe(&mut self) {
        self.phi = self.phi.clamp(POLE_EPSILON, PI - POLE_EPSILON);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn axis_conventions() {
        let on_z = Spherical::from_vec3(Vec3::new(0.0, 0.0, 2.0));
        assert!((on_z.radius - 2.0).abs() < 1e-6);
        assert!((on_z.phi - FRAC_PI_2).abs() < 1e-6);
        assert!(on_z.theta.abs() < 1e-6);

        let on_x = Spherical::from_vec3(Vec3::X);
        assert!((on_x.theta - FRAC_PI_2).abs() < 1e-6);

        let on_y = Spherical::from_vec3(Vec3::Y);
        assert!(on_y.phi.abs() < 1e-6);
    }

    #[test]
    fn conversion_recovers_diagonal_offset() {
        let v = Vec3::new(5.0, 5.0, 5.0);
        let back = Spherical::from_vec3(v).to_vec3();
        assert!((back - v).length() < 1e-5);
    }

    #[test]
    fn zero_offset_is_all_zero() {
        assert_eq!(Spherical::from_vec3(Vec3::ZERO), Spherical::default());
    }

    #[test]
    fn make_safe_moves_off_the_poles() {
        let mut s = Spherical::new(1.0, 0.0, 0.0);
        s.make_safe();
        assert!(s.phi > 0.0);

        s.phi = PI;
        s.make_safe();
        assert!(s.phi < PI);

        s.phi = 1.0;
        s.make_safe();
        assert_eq!(s.phi, 1.0);
    }
}
