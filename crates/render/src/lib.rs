//! Rendering Adapter: renderer-agnostic scene description.
//!
//! # Invariants
//! - Renderers never mutate scene state.
//! - Per-frame uniforms derive from the scene context and the configuration.
//!
//! The GPU backend lives in `seascape-render-wgpu`; the debug text renderer
//! here serves the CLI and tests.

mod config;
mod renderer;
mod scene;
mod view;

pub use config::{ConfigError, ModelPlacement, SceneConfig};
pub use renderer::{DebugTextRenderer, Renderer};
pub use scene::{FrameUniforms, HemisphereLight, SkyParameters, WaterParameters, WaterUniforms};
pub use view::RenderView;

pub fn crate_info() -> &'static str {
    "seascape-render v0.1.0"
}
