//! Crate-level error types.

use std::fmt;

/// Errors produced by the cubeview crate.
#[derive(Debug)]
pub enum CubeviewError {
    /// A bounding box had a NaN or infinite coordinate.
    NonFiniteBounds,
    /// The camera pose (position, fov, aspect) was not finite.
    NonFinitePose,
    /// Fit padding must be finite and strictly positive.
    InvalidPadding(f32),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Browser host failure (missing window, listener registration).
    Web(String),
}

impl fmt::Display for CubeviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBounds => {
                write!(f, "bounding box has non-finite coordinates")
            }
            Self::NonFinitePose => write!(f, "camera pose is not finite"),
            Self::InvalidPadding(p) => {
                write!(f, "fit padding must be finite and positive, got {p}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Web(msg) => write!(f, "web host error: {msg}"),
        }
    }
}

impl std::error::Error for CubeviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CubeviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
