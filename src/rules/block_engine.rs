//! `BlockEngine`: an owned engine state plus convenience actions.

use rustc_hash::FxHashSet;

use super::engine::apply;
use crate::core::action::{Action, Direction, Outcome};
use crate::core::config::{BoardConfig, BoardDimensions};
use crate::core::error::EngineError;
use crate::core::state::EngineState;
use crate::pieces::{Piece, PieceId};
use crate::skills::Skill;

/// Block placement engine.
///
/// Wraps an `EngineState` and applies actions to it in place. For a pure
/// state-to-state transition use `rules::reduce` directly.
///
/// ## Example
///
/// ```
/// use skill_blocks::core::{BoardConfig, Outcome};
/// use skill_blocks::rules::BlockEngine;
/// use skill_blocks::skills::portfolio_skills;
///
/// let mut engine = BlockEngine::new(portfolio_skills(), BoardConfig::default(), 42).unwrap();
/// assert_eq!(engine.start(), Outcome::Started);
///
/// let outcome = engine.hard_drop();
/// assert!(outcome.placed_id().is_some());
/// assert_eq!(engine.placed().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct BlockEngine {
    state: EngineState,
}

impl BlockEngine {
    /// Create an idle engine.
    ///
    /// Fails if `config` is invalid or two skills share an ID.
    pub fn new(
        skills: impl IntoIterator<Item = Skill>,
        config: BoardConfig,
        seed: u64,
    ) -> Result<Self, EngineError> {
        config.validate()?;

        let skills: Vec<Skill> = skills.into_iter().collect();
        let mut seen = FxHashSet::default();
        for skill in &skills {
            if !seen.insert(&skill.id) {
                return Err(EngineError::DuplicateSkill(skill.id.clone()));
            }
        }

        Ok(Self {
            state: EngineState::new(skills, config, seed),
        })
    }

    /// Wrap an existing state.
    #[must_use]
    pub fn from_state(state: EngineState) -> Self {
        Self { state }
    }

    /// Apply any action.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        apply(&mut self.state, &action)
    }

    // === Actions ===

    pub fn start(&mut self) -> Outcome {
        self.dispatch(Action::Start)
    }

    pub fn reset(&mut self) -> Outcome {
        self.dispatch(Action::Reset)
    }

    pub fn move_left(&mut self) -> Outcome {
        self.dispatch(Action::Move(Direction::Left))
    }

    pub fn move_right(&mut self) -> Outcome {
        self.dispatch(Action::Move(Direction::Right))
    }

    pub fn move_down(&mut self) -> Outcome {
        self.dispatch(Action::Move(Direction::Down))
    }

    pub fn rotate(&mut self) -> Outcome {
        self.dispatch(Action::Rotate)
    }

    pub fn hard_drop(&mut self) -> Outcome {
        self.dispatch(Action::HardDrop)
    }

    /// One gravity step.
    pub fn tick(&mut self) -> Outcome {
        self.dispatch(Action::Tick)
    }

    /// Recompute board dimensions from a pixel budget.
    pub fn resize(&mut self, width_px: f64, height_px: f64) -> Outcome {
        self.dispatch(Action::Resize {
            width_px,
            height_px,
        })
    }

    // === State ===

    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> EngineState {
        self.state
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Piece> {
        self.state.current()
    }

    #[must_use]
    pub fn next(&self) -> Option<&Piece> {
        self.state.next()
    }

    #[must_use]
    pub fn placed(&self) -> &im::OrdMap<PieceId, Piece> {
        self.state.placed()
    }

    #[must_use]
    pub fn dimensions(&self) -> BoardDimensions {
        self.state.dimensions()
    }

    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.state.cell_size()
    }
}
