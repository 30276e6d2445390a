//! Occupancy grid and collision test.
//!
//! The grid is a cache: the placed-piece collection is the source of truth,
//! and `Board::rebuild` recomputes the grid from it. A cell is occupied iff
//! some placed piece covers it.
//!
//! Cells live in an `im::Vector`, so cloning a board (as `reduce` does on
//! every action) shares structure instead of copying the grid.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::config::BoardDimensions;
use crate::pieces::Piece;

/// Row-major occupancy grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    dims: BoardDimensions,
    cells: Vector<bool>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(dims: BoardDimensions) -> Self {
        Self {
            dims,
            cells: std::iter::repeat(false).take(dims.area()).collect(),
        }
    }

    /// Rebuild occupancy from a set of placed pieces.
    ///
    /// Cells of pieces that fall outside the board are ignored.
    #[must_use]
    pub fn rebuild<'a>(dims: BoardDimensions, placed: impl IntoIterator<Item = &'a Piece>) -> Self {
        let mut board = Self::new(dims);
        for piece in placed {
            board.fill(piece);
        }
        board
    }

    #[must_use]
    pub fn dimensions(&self) -> BoardDimensions {
        self.dims
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.dims.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.dims.height
    }

    /// Check if `(x, y)` lies on the board.
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.dims.width && (y as usize) < self.dims.height
    }

    /// Check if `(x, y)` is occupied. Off-board cells read as empty.
    #[must_use]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Collision test: every filled cell of `piece` is on the board and free.
    ///
    /// A piece with any violating cell is rejected in full.
    #[must_use]
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .all(|(x, y)| self.in_bounds(x, y) && !self.is_occupied(x, y))
    }

    /// Mark every on-board cell of `piece` as occupied.
    pub fn fill(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if let Some(i) = self.index(x, y) {
                self.cells[i] = true;
            }
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Occupancy as rows of 0/1, for renderers and host bindings.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        let width = self.dims.width;
        (0..self.dims.height)
            .map(|y| (0..width).map(|x| u8::from(self.cells[y * width + x])).collect())
            .collect()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.dims.width + x as usize)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &c in row {
                f.write_str(if c == 1 { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
