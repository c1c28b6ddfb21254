use std::fmt;
use std::str::FromStr;

/// A semantic game action, independent of the physical key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Speed the vehicle up.
    Accelerate,
    /// Slow the vehicle down.
    Brake,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Accelerate, Action::Brake];

    pub fn name(self) -> &'static str {
        match self {
            Action::Accelerate => "accelerate",
            Action::Brake => "brake",
        }
    }

    /// The event published when the action's key goes down.
    pub fn pressed(self) -> ActionEvent {
        match self {
            Action::Accelerate => ActionEvent::Accelerate,
            Action::Brake => ActionEvent::Brake,
        }
    }

    /// The event published when the action's key comes back up.
    pub fn released(self) -> ActionEvent {
        match self {
            Action::Accelerate => ActionEvent::AccelerateReleased,
            Action::Brake => ActionEvent::BrakeReleased,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Action::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InputError::UnknownAction(trimmed.to_string()))
    }
}

/// An event on the action bus. Carries no payload beyond its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionEvent {
    Accelerate,
    Brake,
    AccelerateReleased,
    BrakeReleased,
}

impl ActionEvent {
    /// The action this event belongs to.
    pub fn action(self) -> Action {
        match self {
            ActionEvent::Accelerate | ActionEvent::AccelerateReleased => Action::Accelerate,
            ActionEvent::Brake | ActionEvent::BrakeReleased => Action::Brake,
        }
    }

    pub fn is_release(self) -> bool {
        matches!(
            self,
            ActionEvent::AccelerateReleased | ActionEvent::BrakeReleased
        )
    }
}

/// Errors from input handling.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown action: {0:?} (expected \"accelerate\" or \"brake\")")]
    UnknownAction(String),
}
