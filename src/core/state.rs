//! Engine state: everything one `reduce` step reads and writes.
//!
//! ## EngineState
//!
//! - Lifecycle phase (idle / playing)
//! - Board occupancy cache and placed pieces
//! - Current and next piece
//! - Skill pool and the full skill list it resets from
//! - RNG and the piece serial counter
//!
//! Uses `im` persistent data structures so `reduce` can clone the state
//! cheaply before applying an action.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::config::{BoardConfig, BoardDimensions};
use super::rng::GameRng;
use crate::board::Board;
use crate::pieces::{Piece, PieceId};
use crate::skills::{Skill, SkillPool};

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Not started, or reset.
    #[default]
    Idle,
    /// A piece is (usually) in flight and gravity is active.
    Playing,
}

/// Complete engine state.
///
/// Mutated only through `rules::apply`/`rules::reduce`.
#[derive(Clone, Debug)]
pub struct EngineState {
    pub(crate) config: BoardConfig,
    pub(crate) skills: Vector<Skill>,
    pub(crate) phase: Phase,
    pub(crate) board: Board,
    pub(crate) current: Option<Piece>,
    pub(crate) next: Option<Piece>,
    pub(crate) placed: OrdMap<PieceId, Piece>,
    pub(crate) pool: SkillPool,
    pub(crate) rng: GameRng,
    pub(crate) next_serial: u64,
}

impl EngineState {
    /// Create an idle state with an empty board at the configured initial size.
    ///
    /// Does not validate `config` or the skill list; `BlockEngine::new` does.
    #[must_use]
    pub fn new(skills: impl IntoIterator<Item = Skill>, config: BoardConfig, seed: u64) -> Self {
        let skills: Vector<Skill> = skills.into_iter().collect();
        Self {
            board: Board::new(config.initial),
            pool: SkillPool::new(&skills),
            config,
            skills,
            phase: Phase::Idle,
            current: None,
            next: None,
            placed: OrdMap::new(),
            rng: GameRng::new(seed),
            next_serial: 0,
        }
    }

    // === Lifecycle ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// The in-flight piece overlaps placed cells and cannot be placed.
    ///
    /// Happens when a piece spawns onto a stack reaching row 0. The piece can
    /// still be moved clear; otherwise the round needs a reset.
    #[must_use]
    pub fn is_jammed(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|piece| !self.board.can_place(piece))
    }

    // === Pieces ===

    #[must_use]
    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn next(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    /// Placed pieces keyed by ID, in creation order.
    #[must_use]
    pub fn placed(&self) -> &OrdMap<PieceId, Piece> {
        &self.placed
    }

    // === Board ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn dimensions(&self) -> BoardDimensions {
        self.board.dimensions()
    }

    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.config.cell_size
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Check the occupancy cache against the placed collection.
    #[must_use]
    pub fn board_matches_placed(&self) -> bool {
        Board::rebuild(self.dimensions(), self.placed.values()) == self.board
    }

    // === Skills ===

    /// The full skill list the pool resets from.
    #[must_use]
    pub fn skills(&self) -> &Vector<Skill> {
        &self.skills
    }

    #[must_use]
    pub fn pool(&self) -> &SkillPool {
        &self.pool
    }

    /// Skills held by the current and next pieces.
    pub fn in_flight_skills(&self) -> impl Iterator<Item = &Skill> {
        self.current
            .iter()
            .chain(self.next.iter())
            .map(|piece| &piece.skill)
    }

    // === RNG ===

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}
