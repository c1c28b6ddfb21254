use crate::motion::MotionModel;
use crate::scroll::ScrollOffset;
use seascape_input::{ActionEvent, InputDispatcher};

/// Everything the scene mutates at runtime.
///
/// Key handlers and the frame step both borrow this mutably; the owner (the
/// app loop) decides when each runs, and each runs to completion.
#[derive(Debug, Clone, Default)]
pub struct SceneContext {
    pub motion: MotionModel,
    scroll: ScrollOffset,
    frame: u64,
    ready: bool,
}

impl SceneContext {
    /// At rest: speed 0, not moving, accumulator 0, offset 0, not ready.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_motion(motion: MotionModel) -> Self {
        Self {
            motion,
            ..Self::default()
        }
    }

    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Whether scene initialization (asset upload) has finished.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn mark_ready(&mut self) {
        if !self.ready {
            self.ready = true;
            tracing::info!(frame = self.frame, "scene ready");
        }
    }

    /// Run one frame step and return the offset to write into the water
    /// uniforms.
    pub fn update(&mut self) -> ScrollOffset {
        let speed = self.motion.is_moving().then(|| self.motion.speed());
        self.scroll.advance(speed);
        self.frame += 1;
        tracing::trace!(
            frame = self.frame,
            time = self.scroll.time,
            travel = self.scroll.travel,
            "frame step"
        );
        self.scroll
    }

    /// Wire the pressed events to the motion model. Released events stay
    /// unhandled.
    pub fn bind_controls(dispatcher: &mut InputDispatcher<SceneContext>) {
        dispatcher.subscribe(ActionEvent::Accelerate, |ctx| ctx.motion.accelerate());
        dispatcher.subscribe(ActionEvent::Brake, |ctx| ctx.motion.brake());
    }
}
