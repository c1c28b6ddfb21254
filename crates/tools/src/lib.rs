//! Developer Tooling: read-only scene and model inspection.
//!
//! # Invariants
//! - Inspection never mutates the scene.

mod inspector;

pub use inspector::{ModelInfo, SceneInspector, SceneSummary};

pub fn crate_info() -> &'static str {
    "seascape-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
