//! Placement rules and the engine object.
//!
//! - `reduce`/`apply`: the pure transition core
//! - `BlockEngine`: owns a state and applies actions in place

mod block_engine;
pub mod engine;

pub use block_engine::BlockEngine;
pub use engine::{apply, reduce};
