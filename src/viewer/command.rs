//! The viewer's interactive vocabulary.
//!
//! Every discrete operation, whether triggered by a key press, a form
//! input, a button, or a programmatic call, is a `ViewCommand` passed to
//! [`ViewerContext::execute`](super::ViewerContext::execute). Continuous
//! pointer input goes through the input processor instead.

use glam::Vec3;

/// A discrete viewer operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    /// Re-fit the camera to the box at its current scale.
    Recenter,
    /// Restore unit scale, then re-fit.
    ResetScale,
    /// Apply a per-axis scale (sanitized), then re-fit.
    SetScale(Vec3),
}
