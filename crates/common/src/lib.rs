//! Shared types and utilities for the seascape workspace.

pub mod ease;
pub mod types;

pub use ease::{ease_out_cubic, ease_out_quad};
pub use types::{Rgb, Transform};
