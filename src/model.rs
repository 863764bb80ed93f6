//! The displayed object: a unit cube scaled per axis and spun over time.

use glam::{Affine3A, EulerRot, Quat, Vec2, Vec3};

use crate::camera::bounds::{Aabb, Bounded};
use crate::options::ModelOptions;

/// Scale-and-spin state of the viewed box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxModel {
    scale: Vec3,
    rotation: Vec3,
    options: ModelOptions,
}

impl BoxModel {
    /// Unit cube at the origin, unrotated.
    #[must_use]
    pub fn new(options: ModelOptions) -> Self {
        Self {
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
            options,
        }
    }

    /// Current per-axis scale.
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Current Euler rotation (XYZ, radians).
    #[must_use]
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Sanitize one scale component: NaN, zero, or infinite input falls
    /// back to 1, then anything below `min_scale` (negatives included) is
    /// raised to it.
    #[must_use]
    pub fn sanitize_axis(&self, value: f32) -> f32 {
        let value = if value.is_finite() && value != 0.0 {
            value
        } else {
            1.0
        };
        value.max(self.options.min_scale)
    }

    /// Parse a dimension text field. Like a browser number parse, the
    /// longest leading numeric prefix is used, so `"2.5cm"` reads as 2.5.
    #[must_use]
    pub fn parse_axis(&self, text: &str) -> f32 {
        self.sanitize_axis(float_prefix(text.trim_start()))
    }

    /// Set the scale after sanitizing each axis. Returns the applied
    /// scale.
    pub fn set_scale(&mut self, scale: Vec3) -> Vec3 {
        self.scale = Vec3::new(
            self.sanitize_axis(scale.x),
            self.sanitize_axis(scale.y),
            self.sanitize_axis(scale.z),
        );
        self.scale
    }

    /// Swap in new options, re-sanitizing the current scale against them.
    pub fn set_options(&mut self, options: ModelOptions) {
        self.options = options;
        let _ = self.set_scale(self.scale);
    }

    /// Back to a unit cube.
    pub fn reset_scale(&mut self) {
        self.scale = Vec3::ONE;
    }

    /// Texture repeat so the grain does not stretch on large faces.
    #[must_use]
    pub fn texture_repeat(&self) -> Vec2 {
        Vec2::new(self.scale.x.max(1.0), self.scale.y.max(1.0))
    }

    /// Set the spin for `elapsed` seconds since start.
    pub fn spin_to(&mut self, elapsed: f32) {
        if !self.options.spin || !elapsed.is_finite() {
            return;
        }
        let [rx, ry] = self.options.spin_rate;
        self.rotation = Vec3::new(elapsed * rx, elapsed * ry, 0.0);
    }

    /// Model-to-world transform.
    #[must_use]
    pub fn transform(&self) -> Affine3A {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Affine3A::from_scale_rotation_translation(self.scale, rotation, Vec3::ZERO)
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Value of the longest prefix of `text` that forms a decimal number, or
/// NaN when there is none.
fn float_prefix(text: &str) -> f32 {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return f32::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    text[..end].parse().unwrap_or(f32::NAN)
}

impl Bounded for BoxModel {
    fn world_bounds(&self) -> Aabb {
        Aabb::from_center_size(Vec3::ZERO, Vec3::ONE).transformed(&self.transform())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> BoxModel {
        BoxModel::new(ModelOptions::default())
    }

    #[test]
    fn scale_is_sanitized() {
        let mut m = model();
        let applied = m.set_scale(Vec3::new(2.0, 0.05, f32::NAN));
        assert_eq!(applied, Vec3::new(2.0, 0.1, 1.0));
        assert_eq!(m.set_scale(Vec3::new(-3.0, 0.0, 1.5)), Vec3::new(0.1, 1.0, 1.5));
        assert_eq!(m.sanitize_axis(f32::INFINITY), 1.0);
    }

    #[test]
    fn text_inputs_parse_like_the_form() {
        let m = model();
        assert_eq!(m.parse_axis(" 2.5 "), 2.5);
        assert_eq!(m.parse_axis("2.5cm"), 2.5);
        assert_eq!(m.parse_axis("-3"), 0.1);
        assert_eq!(m.parse_axis("1e2px"), 100.0);
        assert_eq!(m.parse_axis("4e"), 4.0);
        assert_eq!(m.parse_axis(".5"), 0.5);
        assert_eq!(m.parse_axis("0"), 1.0);
        assert_eq!(m.parse_axis(""), 1.0);
        assert_eq!(m.parse_axis("-"), 1.0);
        assert_eq!(m.parse_axis("abc"), 1.0);
        assert_eq!(m.parse_axis("0.01"), 0.1);
    }

    #[test]
    fn texture_repeat_never_below_one() {
        let mut m = model();
        let _ = m.set_scale(Vec3::new(3.0, 0.5, 2.0));
        assert_eq!(m.texture_repeat(), Vec2::new(3.0, 1.0));
    }

    #[test]
    fn unrotated_bounds_match_scale() {
        let mut m = model();
        let _ = m.set_scale(Vec3::new(2.0, 1.0, 4.0));
        let bounds = m.world_bounds();
        assert!((bounds.size() - Vec3::new(2.0, 1.0, 4.0)).length() < 1e-6);
        assert_eq!(bounds.bounding_radius(), 2.0);
    }

    #[test]
    fn spinning_changes_bounds() {
        let mut m = model();
        m.spin_to(1.0);
        assert_eq!(m.rotation(), Vec3::new(0.6, 0.8, 0.0));
        let bounds = m.world_bounds();
        assert!(bounds.size().max_element() > 1.0);
        assert!(bounds.center().length() < 1e-6);
    }

    #[test]
    fn spin_can_be_disabled() {
        let mut m = BoxModel::new(ModelOptions {
            spin: false,
            ..ModelOptions::default()
        });
        m.spin_to(3.0);
        assert_eq!(m.rotation(), Vec3::ZERO);
    }
}
