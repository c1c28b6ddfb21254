use crate::action::Action;
use std::collections::BTreeMap;
use std::fmt;

/// A physical key, identified by its legacy numeric key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(pub u32);

impl Key {
    pub const W: Key = Key(87);
    pub const S: Key = Key(83);

    /// Key code for an ASCII letter or digit, using the uppercase code point.
    pub fn from_char(c: char) -> Option<Key> {
        if c.is_ascii_alphanumeric() {
            Some(Key(c.to_ascii_uppercase() as u32))
        } else {
            None
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match char::from_u32(self.0).filter(|c| c.is_ascii_alphanumeric()) {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "key {}", self.0),
        }
    }
}

/// Fixed key-to-action table. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    map: BTreeMap<Key, Action>,
}

impl Default for KeyBindings {
    /// `W` accelerates, `S` brakes.
    fn default() -> Self {
        Self::from_pairs([(Key::W, Action::Accelerate), (Key::S, Action::Brake)])
    }
}

impl KeyBindings {
    /// Build a table from `(key, action)` pairs. A later pair for the same key
    /// replaces an earlier one.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Key, Action)>) -> Self {
        Self {
            map: pairs.into_iter().collect(),
        }
    }

    pub fn action_for(&self, key: Key) -> Option<Action> {
        self.map.get(&key).copied()
    }

    /// First key bound to `action`, in key-code order.
    pub fn key_for(&self, action: Action) -> Option<Key> {
        self.map
            .iter()
            .find(|(_, a)| **a == action)
            .map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Key, Action)> + '_ {
        self.map.iter().map(|(k, a)| (*k, *a))
    }
}
