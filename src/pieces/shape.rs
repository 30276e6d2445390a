//! Piece shapes: small 0/1 matrices and their clockwise rotation.
//!
//! Shapes are stored row-major in a `SmallVec` sized for the 4x4 bounding box
//! every catalog shape fits in, so cloning a piece never touches the heap.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The 7 catalog shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    /// Every shape, in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Spawn orientation of this shape.
    #[must_use]
    pub fn shape(self) -> Shape {
        use ShapeKind::*;
        match self {
            I => Shape::from_rows(&[&[1, 1, 1, 1]]),
            O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
            T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            L => Shape::from_rows(&[&[1, 0], &[1, 0], &[1, 1]]),
            J => Shape::from_rows(&[&[0, 1], &[0, 1], &[1, 1]]),
            S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        }
    }
}

/// Rectangular occupancy matrix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    rows: usize,
    cols: usize,
    cells: SmallVec<[bool; 16]>,
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Panics if `rows` is empty or ragged.
    #[must_use]
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty(), "Shape must have at least one row");
        let cols = rows[0].len();
        assert!(cols > 0, "Shape must have at least one column");
        assert!(
            rows.iter().all(|r| r.len() == cols),
            "Shape rows must all have the same length"
        );

        Self {
            rows: rows.len(),
            cols,
            cells: rows.iter().flat_map(|r| r.iter().map(|&c| c != 0)).collect(),
        }
    }

    /// Number of columns in the bounding box.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cols
    }

    /// Number of rows in the bounding box.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows
    }

    /// Whether the cell at (`row`, `col`) is filled. Out of range is empty.
    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Number of filled cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Offsets `(dx, dy)` of filled cells relative to the top-left corner.
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(move |(i, _)| ((i % cols) as i32, (i / cols) as i32))
    }

    /// Rotate 90° clockwise into a new shape.
    ///
    /// Transposes then reverses: `out[r][c] = self[rows - 1 - c][r]`.
    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        let (rows, cols) = (self.cols, self.rows);
        let mut cells = SmallVec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(self.cells[(self.rows - 1 - c) * self.cols + r]);
            }
        }
        Self { rows, cols, cells }
    }

    /// Rows of 0/1 values, for renderers.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|&c| u8::from(c)).collect())
            .collect()
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &c in row {
                f.write_str(if c { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_cell_counts() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.shape().cell_count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_dimensions() {
        let t = ShapeKind::T.shape();
        assert_eq!(t.width(), 3);
        assert_eq!(t.height(), 2);
        assert!(!t.is_filled(0, 0));
        assert!(t.is_filled(0, 1));
        assert!(!t.is_filled(5, 5));
    }

    #[test]
    fn test_rotate_i() {
        let vertical = ShapeKind::I.shape().rotated_cw();
        assert_eq!(vertical.width(), 1);
        assert_eq!(vertical.height(), 4);
        assert_eq!(vertical.to_rows(), vec![vec![1], vec![1], vec![1], vec![1]]);
    }

    #[test]
    fn test_rotate_t() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let rotated = ShapeKind::T.shape().rotated_cw();
        assert_eq!(rotated.to_rows(), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
    }

    #[test]
    fn test_rotate_l() {
        // #.
        // #.   ->  ###
        // ##       #..
        let rotated = ShapeKind::L.shape().rotated_cw();
        assert_eq!(rotated.to_rows(), vec![vec![1, 1, 1], vec![1, 0, 0]]);
    }

    #[test]
    fn test_rotate_does_not_touch_template() {
        let template = ShapeKind::S.shape();
        let _ = template.rotated_cw();
        assert_eq!(template, ShapeKind::S.shape());
    }

    #[test]
    fn test_four_rotations_identity() {
        for kind in ShapeKind::ALL {
            let shape = kind.shape();
            let full = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(full, shape, "{:?}", kind);
        }
    }

    #[test]
    fn test_offsets() {
        let offsets: Vec<_> = ShapeKind::S.shape().offsets().collect();
        assert_eq!(offsets, vec![(1, 0), (2, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ShapeKind::Z.shape()), "##.\n.##");
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_ragged_rows_panic() {
        let _ = Shape::from_rows(&[&[1, 1], &[1]]);
    }
}
