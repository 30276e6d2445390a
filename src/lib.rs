//! # skill-blocks
//!
//! A falling-block placement sandbox used to showcase skills on a portfolio
//! site. Each piece carries one skill; the player moves, rotates and drops
//! pieces onto a grid sized to the page. There is no scoring and no game
//! over.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: `rules::reduce(state, action)` is the only way state
//!    changes. Timers and input live in `session`.
//!
//! 2. **Deterministic**: Shapes come from an injected, seedable `GameRng`,
//!    so a seed plus an action sequence replays exactly.
//!
//! 3. **No-op on illegal input**: Actions never fail; they report
//!    `Outcome::Unchanged`.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, actions, state, errors
//! - `pieces`: Shape catalog, rotation, piece instances
//! - `board`: Occupancy grid and collision test
//! - `skills`: Skill records, the cycling skill pool, default catalog
//! - `rules`: `reduce`/`apply` and `BlockEngine`
//! - `session`: Gravity clock, key bindings, render snapshots

pub mod core;
pub mod pieces;
pub mod board;
pub mod skills;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    GameRng,
    BoardConfig, BoardDimensions,
    Action, Direction, Outcome,
    EngineState, Phase,
    ConfigError, EngineError,
};

pub use crate::pieces::{Piece, PieceId, Shape, ShapeKind};

pub use crate::board::Board;

pub use crate::skills::{Skill, SkillId, SkillPool, portfolio_skills};

pub use crate::rules::{BlockEngine, reduce};

pub use crate::session::{GravityClock, Key, Session, Snapshot};
