//! Core engine types: RNG, configuration, actions, state, errors.
//!
//! This module contains the building blocks shared by the rules and the
//! session adapter. The host configures them via `BoardConfig` rather than
//! modifying the core.

pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use rng::GameRng;
pub use config::{
    BoardConfig, BoardDimensions, DEFAULT_CELL_SIZE, DEFAULT_DROP_INTERVAL_MS, DEFAULT_MAX_DIMENSION,
};
pub use action::{Action, Direction, Outcome};
pub use state::{EngineState, Phase};
pub use error::{ConfigError, EngineError};
