//! Piece shapes and instances.
//!
//! - `ShapeKind`/`Shape`: the 7-shape catalog and clockwise rotation
//! - `Piece`/`PieceId`: a skill-tagged shape at a board position

mod piece;
mod shape;

pub use piece::{spawn_column, Piece, PieceId};
pub use shape::{Shape, ShapeKind};
