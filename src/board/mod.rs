//! Board occupancy grid.
//!
//! See `Board` for the collision test shared by every move, rotation and drop.

mod grid;

pub use grid::Board;
