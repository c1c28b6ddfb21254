use crate::scene::{HemisphereLight, SkyParameters, WaterParameters};
use crate::view::RenderView;
use seascape_common::Transform;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from reading or writing a scene configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunable scene parameters. Any field missing from a config file keeps its
/// default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub view: RenderView,
    pub sky: SkyParameters,
    pub water: WaterParameters,
    pub light: HemisphereLight,
    pub model: ModelPlacement,
}

/// Where and how large the loaded model appears.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelPlacement {
    /// Largest extent of the model after fitting, in world units.
    pub fit_size: f32,
    /// Applied after fitting.
    pub transform: Transform,
}

impl Default for ModelPlacement {
    fn default() -> Self {
        Self {
            fit_size: 10.0,
            transform: Transform::default(),
        }
    }
}

impl SceneConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path.as_ref())?;
        let config: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        tracing::debug!(path = %path.as_ref().display(), "scene config loaded");
        Ok(config)
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, r#"{{ "sky": {{ "elevation": 45.0 }}, "water": {{ "water_color": 255 }} }}"#)
            .unwrap();

        let config = SceneConfig::load(tmp.path()).unwrap();
        assert_eq!(config.sky.elevation, 45.0);
        assert_eq!(config.sky.turbidity, 10.0);
        assert_eq!(config.water.water_color.0, 255);
        assert_eq!(config.view, RenderView::default());
    }

    #[test]
    fn save_and_load() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let mut config = SceneConfig::default();
        config.model.fit_size = 4.0;
        config.save(tmp.path()).unwrap();

        let loaded = SceneConfig::load(tmp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn sky_and_water_expose_only_rendered_fields() {
        let value = serde_json::to_value(SceneConfig::default()).unwrap();
        let keys = |section: &str| -> Vec<String> {
            let mut keys: Vec<String> = value[section]
                .as_object()
                .unwrap()
                .keys()
                .cloned()
                .collect();
            keys.sort();
            keys
        };
        assert_eq!(
            keys("sky"),
            [
                "azimuth",
                "elevation",
                "mie_coefficient",
                "mie_directional_g",
                "rayleigh",
                "turbidity"
            ]
        );
        assert_eq!(
            keys("water"),
            ["distortion_scale", "size", "sun_color", "water_color"]
        );
    }

    #[test]
    fn bad_json_is_reported() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "not json").unwrap();
        assert!(matches!(
            SceneConfig::load(tmp.path()),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            SceneConfig::load("no/such/config.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
