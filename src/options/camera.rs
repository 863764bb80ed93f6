use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and starting pose.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance before the first fit.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance before the first fit.
    #[schemars(skip)]
    pub zfar: f32,
    /// Eye position before the first fit. Only its direction from the
    /// object survives fitting.
    #[schemars(skip)]
    pub initial_position: [f32; 3],
    /// Camera up vector.
    #[schemars(skip)]
    pub up: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            initial_position: [5.0, 5.0, 5.0],
            up: [0.0, 1.0, 0.0],
        }
    }
}
