//! Scene model loading.
//!
//! A scene model is a glTF file flattened into one mesh: every triangle
//! primitive of the default scene, with node transforms applied. Models are
//! identified by a hash of their file contents.
//!
//! # Invariants
//! - A loaded model always has at least one triangle.
//! - Indices always reference existing vertices.
//! - A load failure is fatal to scene startup; nothing retries.

mod loader;
mod model;

pub use loader::{DEFAULT_MODEL_PATH, load_scene_model};
pub use model::{Bounds, ModelId, ModelVertex, SceneModel};

use std::path::PathBuf;

/// Errors from loading a scene model.
#[derive(Debug, thiserror::Error)]
pub enum AssetLoadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("glTF error in {path}: {source}")]
    Gltf {
        path: PathBuf,
        #[source]
        source: gltf::Error,
    },
    #[error("no triangle geometry found in {0}")]
    NoGeometry(PathBuf),
}

pub fn crate_info() -> &'static str {
    "seascape-assets v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("assets"));
    }
}
