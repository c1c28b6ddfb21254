use seascape_assets::SceneModel;
use seascape_kernel::SceneContext;
use serde::Serialize;

/// Scene inspector for developer tooling.
///
/// Provides read-only queries against the scene state for the HUD, the CLI
/// and debugging.
pub struct SceneInspector;

impl SceneInspector {
    /// Produce a summary of the scene state.
    pub fn summary(scene: &SceneContext) -> SceneSummary {
        let motion = scene.motion.state();
        let scroll = scene.scroll();
        SceneSummary {
            frame: scene.frame(),
            ready: scene.is_ready(),
            moving: motion.is_moving,
            speed: motion.speed,
            brake_accumulator: motion.brake_accumulator,
            scroll_time: scroll.time,
            scroll_travel: scroll.travel,
        }
    }

    /// Geometry statistics for a loaded model.
    pub fn model_info(model: &SceneModel) -> ModelInfo {
        let size = model.bounds.size();
        ModelInfo {
            id: model.id.to_string(),
            name: model.name.clone(),
            vertices: model.vertices.len(),
            triangles: model.triangle_count(),
            min: model.bounds.min.to_array(),
            size: size.to_array(),
        }
    }
}

/// Summary of scene state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSummary {
    pub frame: u64,
    pub ready: bool,
    pub moving: bool,
    pub speed: f32,
    pub brake_accumulator: f32,
    pub scroll_time: f64,
    pub scroll_travel: f64,
}

impl std::fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scene: frame={} moving={} speed={:.4} brake={:.2} scroll={:.4}+{:.4}",
            self.frame,
            self.moving,
            self.speed,
            self.brake_accumulator,
            self.scroll_time,
            self.scroll_travel
        )
    }
}

/// Geometry statistics of a loaded model.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub vertices: usize,
    pub triangles: usize,
    pub min: [f32; 3],
    pub size: [f32; 3],
}

impl std::fmt::Display for ModelInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Model [{}] {:?} vertices={} triangles={} size=({:.2}, {:.2}, {:.2})",
            &self.id[..8],
            self.name,
            self.vertices,
            self.triangles,
            self.size[0],
            self.size[1],
            self.size[2],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use seascape_assets::{Bounds, ModelId, ModelVertex};

    #[test]
    fn summary_fresh_scene() {
        let scene = SceneContext::new();
        let summary = SceneInspector::summary(&scene);
        assert_eq!(summary.frame, 0);
        assert!(!summary.moving);
        assert_eq!(summary.speed, 0.0);
    }

    #[test]
    fn summary_tracks_motion_and_frames() {
        let mut scene = SceneContext::new();
        scene.motion.accelerate();
        scene.motion.brake();
        scene.update();
        scene.update();

        let summary = SceneInspector::summary(&scene);
        assert_eq!(summary.frame, 2);
        assert!(summary.moving);
        assert!((summary.brake_accumulator - 0.1).abs() < 1e-6);
        assert!(summary.scroll_time > 0.0);
    }

    #[test]
    fn summary_display() {
        let scene = SceneContext::new();
        let s = format!("{}", SceneInspector::summary(&scene));
        assert!(s.contains("frame=0"));
        assert!(s.contains("moving=false"));
    }

    #[test]
    fn model_info() {
        let vertex = ModelVertex {
            position: [0.0; 3],
            normal: [0.0, 1.0, 0.0],
        };
        let model = SceneModel {
            id: ModelId(0xabcdef),
            name: "bunny".into(),
            vertices: vec![vertex; 4],
            indices: vec![0, 1, 2, 2, 3, 0],
            bounds: Bounds {
                min: Vec3::ZERO,
                max: Vec3::new(1.0, 2.0, 3.0),
            },
        };
        let info = SceneInspector::model_info(&model);
        assert_eq!(info.triangles, 2);
        assert_eq!(info.size, [1.0, 2.0, 3.0]);
        let s = info.to_string();
        assert!(s.contains("\"bunny\""));
        assert!(s.contains("triangles=2"));
    }
}
