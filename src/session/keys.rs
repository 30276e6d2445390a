//! Keyboard bindings.

use serde::{Deserialize, Serialize};

use crate::core::action::{Action, Direction};

/// A bound key, named after the DOM `KeyboardEvent.key` values the host sends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowDown,
    Space,
    Enter,
}

impl Key {
    /// Look up a key by its `KeyboardEvent.key` name. Unbound keys yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowDown" => Some(Key::ArrowDown),
            " " | "Space" | "Spacebar" => Some(Key::Space),
            "Enter" => Some(Key::Enter),
            _ => None,
        }
    }

    /// The action this key triggers.
    #[must_use]
    pub fn action(self) -> Action {
        match self {
            Key::ArrowLeft => Action::Move(Direction::Left),
            Key::ArrowRight => Action::Move(Direction::Right),
            Key::ArrowDown => Action::Move(Direction::Down),
            Key::Space => Action::Rotate,
            Key::Enter => Action::HardDrop,
        }
    }
}
