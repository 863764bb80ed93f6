use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// Orbit limits, damping, and input sensitivity.
///
/// Angles are in radians. Inverted ranges (`min > max`) are not rejected;
/// they clamp to a degenerate but finite pose.
pub struct ControlOptions {
    /// Master switch for all pointer and wheel input.
    #[schemars(skip)]
    pub enabled: bool,
    /// Allow rotate gestures.
    #[schemars(title = "Rotate")]
    pub enable_rotate: bool,
    /// Allow wheel zoom.
    #[schemars(title = "Zoom")]
    pub enable_zoom: bool,
    /// Allow pan gestures.
    #[schemars(title = "Pan")]
    pub enable_pan: bool,
    /// Closest the camera may get to the target.
    #[schemars(title = "Min Distance", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub min_distance: f32,
    /// Farthest the camera may get from the target.
    #[schemars(title = "Max Distance", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub max_distance: f32,
    /// Lower polar-angle limit (0 = looking straight down).
    #[schemars(skip)]
    pub min_polar_angle: f32,
    /// Upper polar-angle limit (π = looking straight up).
    #[schemars(skip)]
    pub max_polar_angle: f32,
    /// Lower azimuth limit.
    #[schemars(skip)]
    pub min_azimuth_angle: f32,
    /// Upper azimuth limit.
    #[schemars(skip)]
    pub max_azimuth_angle: f32,
    /// Let pending motion decay over several updates instead of stopping.
    #[schemars(title = "Damping")]
    pub enable_damping: bool,
    /// Fraction of pending motion removed per update when damping.
    #[schemars(title = "Damping Factor", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub pan_speed: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            enable_rotate: true,
            enable_zoom: true,
            enable_pan: true,
            min_distance: 3.0,
            max_distance: 20.0,
            min_polar_angle: PI * 0.1,
            max_polar_angle: PI * 0.9,
            min_azimuth_angle: -PI * 0.85,
            max_azimuth_angle: PI * 0.85,
            enable_damping: true,
            damping_factor: 0.1,
            rotate_speed: 0.7,
            pan_speed: 0.6,
        }
    }
}

impl ControlOptions {
    /// Multiplier applied to pending motion after each damped update.
    #[must_use]
    pub fn decay(&self) -> f32 {
        (1.0 - self.damping_factor).clamp(0.0, 1.0)
    }
}
