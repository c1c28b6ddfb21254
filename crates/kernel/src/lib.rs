//! Scene Kernel: the motion model, the scroll offset, and the frame step.
//!
//! # Invariants
//! - `speed` stays within `0.0..=1.0`.
//! - All state lives in an explicit [`SceneContext`]; there are no globals.
//! - The frame step is frame-count based, never wall-clock based.

pub mod context;
pub mod motion;
pub mod scroll;

pub use context::SceneContext;
pub use motion::{MotionModel, MotionPhase, MotionState};
pub use scroll::ScrollOffset;
