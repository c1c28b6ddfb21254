//! Input Dispatcher: raw key codes mapped to typed action events.
//!
//! # Invariants
//! - Consumers subscribe to actions, never to raw key codes.
//! - Unbound keys are dropped silently; they are not errors.
//! - Subscribers run synchronously, in registration order.

pub mod action;
pub mod binding;
pub mod dispatch;

pub use action::{Action, ActionEvent, InputError};
pub use binding::{Key, KeyBindings};
pub use dispatch::InputDispatcher;

pub fn crate_info() -> &'static str {
    "seascape-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
