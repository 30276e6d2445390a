//! Actions fed into the engine and the outcomes they produce.
//!
//! Every input the engine reacts to is an `Action`: player moves, the gravity
//! timer, lifecycle buttons and resize notifications from the rendering
//! surface. Applying an action always succeeds; an action with no effect
//! yields `Outcome::Unchanged`.

use serde::{Deserialize, Serialize};

use super::config::BoardDimensions;
use crate::pieces::PieceId;

/// Horizontal or downward shift of the current piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Cell offset `(dx, dy)` for one step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// An input to the engine.
///
/// ## Example
///
/// ```
/// use skill_blocks::core::{Action, Direction};
///
/// let actions = [
///     Action::Start,
///     Action::Move(Direction::Left),
///     Action::Rotate,
///     Action::HardDrop,
///     Action::Resize { width_px: 900.0, height_px: 800.0 },
/// ];
/// assert_eq!(actions.len(), 5);
/// assert_eq!(Direction::Left.delta(), (-1, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Clear the board and begin placing pieces.
    Start,
    /// Stop and clear everything.
    Reset,
    /// Shift the current piece by one cell.
    Move(Direction),
    /// Rotate the current piece clockwise.
    Rotate,
    /// Drop the current piece to its lowest legal row and place it.
    HardDrop,
    /// Gravity timer step.
    Tick,
    /// The rendering surface's available pixel space changed.
    Resize { width_px: f64, height_px: f64 },
}

/// What applying an action did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The action had no effect.
    Unchanged,
    /// A round began with a fresh board.
    Started,
    /// Everything was cleared and the engine is idle.
    Reset,
    /// The current piece moved one cell.
    Moved,
    /// The current piece rotated.
    Rotated,
    /// The current piece was placed and the queue advanced.
    Placed { id: PieceId },
    /// Board dimensions changed; the board was cleared.
    Resized {
        from: BoardDimensions,
        to: BoardDimensions,
    },
}

impl Outcome {
    /// Check if the action changed any state.
    #[must_use]
    pub fn changed(&self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }

    /// The placed piece's ID, if this outcome is a placement.
    #[must_use]
    pub fn placed_id(&self) -> Option<&PieceId> {
        match self {
            Outcome::Placed { id } => Some(id),
            _ => None,
        }
    }
}
