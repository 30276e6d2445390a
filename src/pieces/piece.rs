//! Piece instances: a shape, a skill and a board position.

use serde::{Deserialize, Serialize};

use super::shape::{Shape, ShapeKind};
use crate::skills::{Skill, SkillId};

/// Unique piece identifier.
///
/// Combines the skill with the engine's creation serial, so two pieces
/// carrying the same skill in different cycles never collide. Rendered as
/// `"<skill>-<serial>"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId {
    /// Creation serial, monotonic per engine.
    pub serial: u64,
    pub skill: SkillId,
}

impl PieceId {
    #[must_use]
    pub fn new(skill: SkillId, serial: u64) -> Self {
        Self { serial, skill }
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.skill, self.serial)
    }
}

/// A piece in flight or on the board.
///
/// `(x, y)` is the board cell under the top-left corner of the shape's
/// bounding box.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: ShapeKind,
    pub shape: Shape,
    pub skill: Skill,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece in the spawn orientation of `kind`, centered
    /// horizontally on a board `board_width` cells wide, at row 0.
    #[must_use]
    pub fn spawn(id: PieceId, kind: ShapeKind, skill: Skill, board_width: usize) -> Self {
        let shape = kind.shape();
        let x = spawn_column(board_width, shape.width());
        Self {
            id,
            kind,
            shape,
            skill,
            x,
            y: 0,
        }
    }

    /// Copy of this piece at a new origin.
    #[must_use]
    pub fn at(&self, x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..self.clone()
        }
    }

    /// Copy of this piece rotated clockwise around its origin.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..self.clone()
        }
    }

    /// Absolute board coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .offsets()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Width of the bounding box in cells.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.shape.width() as i32
    }

    /// Height of the bounding box in cells.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.shape.height() as i32
    }
}

/// Column that centers a shape `shape_width` wide: `floor(w/2) - floor(sw/2)`.
#[must_use]
pub fn spawn_column(board_width: usize, shape_width: usize) -> i32 {
    (board_width / 2) as i32 - (shape_width / 2) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(kind: ShapeKind, width: usize) -> Piece {
        let skill = Skill::new("rust", "Rust", "Languages");
        Piece::spawn(PieceId::new(skill.id.clone(), 1), kind, skill, width)
    }

    #[test]
    fn test_spawn_centered() {
        assert_eq!(piece(ShapeKind::I, 10).x, 3);
        assert_eq!(piece(ShapeKind::O, 10).x, 4);
        assert_eq!(piece(ShapeKind::T, 10).x, 4);
        assert_eq!(piece(ShapeKind::I, 4).x, 0);
        assert_eq!(piece(ShapeKind::T, 7).y, 0);
    }

    #[test]
    fn test_cells_offset_by_origin() {
        let p = piece(ShapeKind::O, 10).at(2, 5);
        let cells: Vec<_> = p.cells().collect();
        assert_eq!(cells, vec![(2, 5), (3, 5), (2, 6), (3, 6)]);
    }

    #[test]
    fn test_rotated_keeps_identity_and_origin() {
        let p = piece(ShapeKind::I, 10);
        let r = p.rotated();

        assert_eq!(r.id, p.id);
        assert_eq!((r.x, r.y), (p.x, p.y));
        assert_eq!((r.width(), r.height()), (1, 4));
        assert_eq!((p.width(), p.height()), (4, 1));
    }

    #[test]
    fn test_piece_id_display() {
        let id = PieceId::new(SkillId::new("python"), 12);
        assert_eq!(id.to_string(), "python-12");
    }

    #[test]
    fn test_piece_id_orders_by_creation() {
        let a = PieceId::new(SkillId::new("zig"), 1);
        let b = PieceId::new(SkillId::new("ada"), 2);
        assert!(a < b);
    }
}
