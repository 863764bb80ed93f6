//! Camera system for a single-object viewer.
//!
//! Provides a damped orbit controller with clamped angles and distance,
//! fit-to-object framing, and frustum tests.

/// Axis-aligned bounds and the bounds-provider trait.
pub mod bounds;
/// Damped spherical orbit controller.
pub mod controller;
/// Core camera struct and GPU uniform type.
pub mod core;
/// Fit-to-object framing.
pub mod fit;
/// View frustum extraction and containment tests.
pub mod frustum;
/// Spherical coordinates for orbit offsets.
pub mod spherical;

pub use bounds::{Aabb, Bounded};
pub use controller::{Gesture, OrbitController, PendingMotion, ZoomDirection};
pub use self::core::{Camera, CameraUniform};
pub use fit::{fit_camera_to_bounds, FitResult};
