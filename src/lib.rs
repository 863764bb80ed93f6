// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert on known-good values
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Interaction core for a single-object 3D viewer.
//!
//! Cubeview keeps a camera orbiting a target with clamped, damped
//! spherical motion, and re-frames that camera whenever the viewed object
//! changes size. Drawing is left to the host renderer, which receives a
//! [`CameraUniform`] every frame.
//!
//! # Key entry points
//!
//! - [`camera::OrbitController`] - damped orbit with angle and distance
//!   limits
//! - [`camera::fit_camera_to_bounds`] - fit-to-object framing
//! - [`ViewerContext`] - application context tying camera, controller,
//!   box, and input together
//! - [`Options`] - TOML-backed configuration
//!
//! # Frame model
//!
//! Input callbacks only accumulate pending motion on the controller. The
//! host's per-frame callback calls [`ViewerContext::frame`], which applies
//! that motion exactly once before the scene is drawn.

pub mod camera;
/// Frame timing for the per-frame driver.
pub mod clock;
pub mod error;
pub mod input;
/// The viewed box.
pub mod model;
pub mod options;
pub mod viewer;
/// Browser glue (requires the `web` feature).
#[cfg(feature = "web")]
pub mod web;

pub use camera::{Camera, CameraUniform, FitResult, OrbitController};
pub use error::CubeviewError;
pub use input::{InputEvent, InputProcessor, PointerButton};
pub use options::Options;
pub use viewer::{ViewCommand, ViewerContext};
