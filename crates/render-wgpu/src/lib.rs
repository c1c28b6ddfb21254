//! wgpu render backend for the seascape demo.
//!
//! Draws a full-screen procedural sky, a water plane animated by the per-frame
//! water uniforms, and the uploaded scene model under a hemisphere light.
//!
//! # Invariants
//! - Renderer never mutates scene state.
//! - Water animation comes only from the uniforms it is handed each frame.

mod gpu;
mod shaders;

pub use gpu::WgpuRenderer;
