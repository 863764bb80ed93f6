use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Framing", inline)]
#[serde(default)]
/// Fit-to-object framing parameters.
pub struct FitOptions {
    /// Multiplier on the bounding-sphere radius.
    #[schemars(title = "Padding", range(min = 1.0, max = 3.0), extend("step" = 0.05))]
    pub padding: f32,
    /// Floor for the near clipping plane.
    #[schemars(skip)]
    pub min_near: f32,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding: 1.25,
            min_near: 0.01,
        }
    }
}
