//! Viewer options with TOML preset support.
//!
//! Camera projection, orbit limits, framing, the displayed box, and key
//! bindings are consolidated here. Options serialize to/from TOML so a
//! viewer setup can be saved as a preset.

mod camera;
mod controls;
mod fit;
mod keybindings;
mod model;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use fit::FitOptions;
pub use keybindings::KeybindingOptions;
pub use model::ModelOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CubeviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and starting pose.
    pub camera: CameraOptions,
    /// Orbit limits, damping, and sensitivity.
    pub controls: ControlOptions,
    /// Fit-to-object framing.
    pub fit: FitOptions,
    /// Displayed box.
    pub model: ModelOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, CubeviewError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| CubeviewError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Serialize to pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String, CubeviewError> {
        toml::to_string_pretty(self)
            .map_err(|e| CubeviewError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CubeviewError> {
        let content =
            std::fs::read_to_string(path).map_err(CubeviewError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CubeviewError> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CubeviewError::Io)?;
        }
        std::fs::write(path, content).map_err(CubeviewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = opts.to_toml_string().unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[controls]
min_distance = 0.5
enable_damping = false
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.controls.min_distance, 0.5);
        assert!(!opts.controls.enable_damping);
        // Everything else should be default
        assert_eq!(opts.controls.max_distance, 20.0);
        assert_eq!(opts.controls.max_azimuth_angle, PI * 0.85);
        assert_eq!(opts.fit.padding, 1.25);
        assert_eq!(opts.camera.fovy, 60.0);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[controls]\nmin_distance = \"far\"")
            .unwrap_err();
        assert!(matches!(err, CubeviewError::OptionsParse(_)));
    }

    #[test]
    fn default_decay_matches_fixed_point_nine() {
        assert!((ControlOptions::default().decay() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn keybinding_lookup_survives_reload() {
        let toml_str = r#"
[keybindings.bindings]
recenter = "Space"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("Space"), Some(KeyAction::Recenter));
        assert_eq!(opts.keybindings.lookup("KeyC"), None);

        let defaults = Options::default();
        assert_eq!(
            defaults.keybindings.lookup("KeyR"),
            Some(KeyAction::ResetScale)
        );
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = Options::default();
        opts.fit.padding = 1.5;
        opts.save(&dir.path().join("presets/wide.toml")).unwrap();
        Options::default()
            .save(&dir.path().join("presets/default.toml"))
            .unwrap();
        std::fs::write(dir.path().join("presets/notes.txt"), "x").unwrap();

        let loaded = Options::load(&dir.path().join("presets/wide.toml")).unwrap();
        assert_eq!(loaded.fit.padding, 1.5);
        assert_eq!(
            Options::list_presets(&dir.path().join("presets")),
            vec!["default".to_owned(), "wide".to_owned()]
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/cubeview.toml"))
            .unwrap_err();
        assert!(matches!(err, CubeviewError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("controls"));
        assert!(props.contains_key("fit"));
        assert!(props.contains_key("model"));
        assert!(!props.contains_key("keybindings"));

        let controls = &props["controls"]["properties"];
        assert!(controls.get("rotate_speed").is_some());
        assert!(controls.get("min_distance").is_some());
        assert!(controls.get("min_polar_angle").is_none());
        assert!(controls.get("enabled").is_none());
    }
}
