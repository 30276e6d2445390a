//! Placement rules: the pure `reduce(state, action)` core.
//!
//! Every action is applied as one atomic step. In particular, placing a
//! piece, recording its skill as used and promoting the next piece all
//! happen inside the same `apply` call, so no caller can observe a state
//! where the piece is placed but the queue has not advanced.
//!
//! ## Rules
//!
//! - `can_place`: every filled cell on the board and unoccupied
//! - Moves shift by one cell, clamped to the board; illegal moves are no-ops
//! - A downward step that cannot advance places the piece
//! - Rotation is clockwise at the same origin, with no wall kicks
//! - Hard drop falls while the next row is legal, then places
//! - Gravity ticks are unclamped downward steps

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::core::action::{Action, Direction, Outcome};
use crate::core::state::{EngineState, Phase};
use crate::pieces::{Piece, PieceId, ShapeKind};
use crate::skills::{Skill, SkillPool};

/// Apply `action` to a copy of `state`.
///
/// `state` is left untouched. The copy shares structure with it through `im`,
/// so copying does not grow with the board size.
#[must_use]
pub fn reduce(state: &EngineState, action: &Action) -> (EngineState, Outcome) {
    let mut next = state.clone();
    let outcome = apply(&mut next, action);
    (next, outcome)
}

/// Apply `action` in place.
///
/// Never fails: an action with no effect returns `Outcome::Unchanged` and
/// leaves `state` as it was.
pub fn apply(state: &mut EngineState, action: &Action) -> Outcome {
    match *action {
        Action::Start => start(state),
        Action::Reset => reset(state),
        Action::Resize {
            width_px,
            height_px,
        } => resize(state, width_px, height_px),
        Action::Move(direction) => with_current(state, |s, piece| shift(s, piece, direction)),
        Action::Rotate => with_current(state, rotate),
        Action::HardDrop => with_current(state, hard_drop),
        Action::Tick => with_current(state, tick),
    }
}

/// Run a piece action only while playing with a piece in flight.
fn with_current(
    state: &mut EngineState,
    f: impl FnOnce(&mut EngineState, Piece) -> Outcome,
) -> Outcome {
    if state.phase != Phase::Playing {
        return Outcome::Unchanged;
    }
    match state.current.clone() {
        Some(piece) => f(state, piece),
        None => Outcome::Unchanged,
    }
}

// === Lifecycle ===

fn start(state: &mut EngineState) -> Outcome {
    begin_round(state);
    state.phase = Phase::Playing;

    let dims = state.dimensions();
    debug!(
        board = %dims,
        cell_size = state.config.cell_size,
        canvas_px = ?dims.canvas_px(state.config.cell_size),
        skills = state.skills.len(),
        "round started"
    );
    Outcome::Started
}

fn reset(state: &mut EngineState) -> Outcome {
    clear_round(state);
    state.phase = Phase::Idle;
    debug!(board = %state.dimensions(), "engine reset");
    Outcome::Reset
}

/// Clear the board, placed pieces and pool, then spawn current and next.
fn begin_round(state: &mut EngineState) {
    clear_round(state);
    state.current = draw_piece(state);
    state.next = draw_piece(state);
}

fn clear_round(state: &mut EngineState) {
    state.board = Board::new(state.dimensions());
    state.placed.clear();
    state.pool = SkillPool::new(&state.skills);
    state.current = None;
    state.next = None;
}

fn resize(state: &mut EngineState, width_px: f64, height_px: f64) -> Outcome {
    let from = state.dimensions();
    let to = state.config.dimensions_for(width_px, height_px);
    if to == from {
        return Outcome::Unchanged;
    }

    info!(%from, %to, width_px, height_px, "board dimensions changed");
    state.board = Board::new(to);
    if state.phase == Phase::Playing {
        begin_round(state);
    } else {
        clear_round(state);
    }
    Outcome::Resized { from, to }
}

// === Piece actions ===

fn shift(state: &mut EngineState, piece: Piece, direction: Direction) -> Outcome {
    let dims = state.dimensions();
    let (width, height) = (dims.width as i32, dims.height as i32);

    let (dx, dy) = direction.delta();
    let x = (piece.x + dx).clamp(0, (width - piece.width()).max(0));
    let y = (piece.y + dy).min(height - piece.height());

    let advanced = (x, y) != (piece.x, piece.y);
    let candidate = piece.at(x, y);

    if advanced && state.board.can_place(&candidate) {
        state.current = Some(candidate);
        return Outcome::Moved;
    }

    if direction == Direction::Down {
        place_current(state)
    } else {
        Outcome::Unchanged
    }
}

fn rotate(state: &mut EngineState, piece: Piece) -> Outcome {
    let rotated = piece.rotated();
    if state.board.can_place(&rotated) {
        state.current = Some(rotated);
        Outcome::Rotated
    } else {
        Outcome::Unchanged
    }
}

fn hard_drop(state: &mut EngineState, piece: Piece) -> Outcome {
    let mut landed = piece;
    loop {
        let below = landed.at(landed.x, landed.y + 1);
        if !state.board.can_place(&below) {
            break;
        }
        landed = below;
    }

    let before = state.current.replace(landed);
    match place_current(state) {
        Outcome::Unchanged => {
            state.current = before;
            Outcome::Unchanged
        }
        outcome => outcome,
    }
}

fn tick(state: &mut EngineState, piece: Piece) -> Outcome {
    let below = piece.at(piece.x, piece.y + 1);
    if state.board.can_place(&below) {
        state.current = Some(below);
        Outcome::Moved
    } else {
        place_current(state)
    }
}

// === Placement ===

/// Place the current piece and advance the queue in one step.
///
/// Refuses (returns `Unchanged`) if the current piece collides, which only
/// happens when it spawned onto occupied cells.
fn place_current(state: &mut EngineState) -> Outcome {
    let piece = match state.current.as_ref() {
        Some(piece) if state.board.can_place(piece) => piece.clone(),
        _ => return Outcome::Unchanged,
    };

    state.board.fill(&piece);
    state.pool.mark_used(piece.skill.clone());
    let id = piece.id.clone();
    trace!(piece = %id, kind = ?piece.kind, x = piece.x, y = piece.y, "piece placed");
    state.placed.insert(id.clone(), piece);

    state.current = match state.next.take() {
        Some(next) => Some(next.at(next.x, 0)),
        None => draw_piece(state),
    };
    state.next = draw_piece(state);

    Outcome::Placed { id }
}

/// Draw a skill from the pool and spawn a piece for it.
fn draw_piece(state: &mut EngineState) -> Option<Piece> {
    let skill = state.pool.draw()?;
    Some(spawn(state, skill))
}

/// Spawn a piece with a random catalog shape, centered at row 0.
fn spawn(state: &mut EngineState, skill: Skill) -> Piece {
    let kind = state
        .rng
        .choose(&ShapeKind::ALL)
        .copied()
        .unwrap_or(ShapeKind::O);
    state.next_serial += 1;
    let id = PieceId::new(skill.id.clone(), state.next_serial);
    Piece::spawn(id, kind, skill, state.dimensions().width)
}
