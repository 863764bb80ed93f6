use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Model", inline)]
#[serde(default)]
/// Displayed box parameters.
pub struct ModelOptions {
    /// Smallest accepted per-axis scale.
    #[schemars(skip)]
    pub min_scale: f32,
    /// Spin rate about X and Y in radians per second.
    #[schemars(skip)]
    pub spin_rate: [f32; 2],
    /// Whether the box spins at all.
    #[schemars(title = "Spin")]
    pub spin: bool,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            min_scale: 0.1,
            spin_rate: [0.6, 0.8],
            spin: true,
        }
    }
}
