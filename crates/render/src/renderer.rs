use crate::scene::FrameUniforms;
use crate::view::RenderView;
use seascape_kernel::{MotionPhase, SceneContext};
use std::fmt::Write;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene context, the frame uniforms and a view, then
/// produces output. It never mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, scene: &SceneContext, frame: &FrameUniforms, view: &RenderView)
    -> Self::Output;
}

/// Human-readable frame description, for the CLI and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &SceneContext, frame: &FrameUniforms, view: &RenderView) -> String {
        let motion = scene.motion.state();
        let phase = match scene.motion.phase() {
            MotionPhase::Idle => "idle",
            MotionPhase::Moving => "moving",
        };
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== Scene (frame={}, ready={}) ===",
            scene.frame(),
            scene.is_ready()
        );
        let _ = writeln!(
            out,
            "Motion: {phase} speed={:.4} brake={:.2}",
            motion.speed, motion.brake_accumulator
        );
        let _ = writeln!(
            out,
            "Water: time={:.4} speed={:.4}",
            frame.water.time, frame.water.speed
        );
        let s = frame.sun_position;
        let _ = writeln!(
            out,
            "Sky: sun=({:.3}, {:.3}, {:.3}) turbidity={:.1} rayleigh={:.1}",
            s.x, s.y, s.z, frame.sky.turbidity, frame.sky.rayleigh
        );
        let _ = writeln!(
            out,
            "Camera: eye=({:.1}, {:.1}, {:.1}) fov={:.0} aspect={:.2}",
            view.eye.x, view.eye.y, view.eye.z, view.fov_degrees, view.aspect
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SkyParameters;

    fn frame_for(scene: &SceneContext) -> FrameUniforms {
        FrameUniforms::new(scene.scroll(), SkyParameters::default())
    }

    #[test]
    fn debug_renderer_fresh_scene() {
        let scene = SceneContext::new();
        let output = DebugTextRenderer::new().render(
            &scene,
            &frame_for(&scene),
            &RenderView::default(),
        );

        assert!(output.contains("frame=0"));
        assert!(output.contains("idle speed=0.0000"));
        assert!(output.contains("fov=75"));
    }

    #[test]
    fn debug_renderer_after_motion() {
        let mut scene = SceneContext::new();
        scene.motion.accelerate();
        scene.update();
        scene.mark_ready();

        let output = DebugTextRenderer::new().render(
            &scene,
            &frame_for(&scene),
            &RenderView::default(),
        );
        assert!(output.contains("frame=1, ready=true"));
        assert!(output.contains("moving speed=0.0040"));
    }
}
