//! Render-ready view of the engine.

use serde::{Deserialize, Serialize};

use crate::core::state::EngineState;
use crate::pieces::Piece;

/// Everything a rendering surface needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub playing: bool,
    pub jammed: bool,
    pub current: Option<Piece>,
    pub next: Option<Piece>,
    /// Placed pieces in creation order.
    pub placed: Vec<Piece>,
    /// Board width in cells.
    pub width: usize,
    /// Board height in cells.
    pub height: usize,
    pub cell_size: u32,
    pub canvas_width_px: u32,
    pub canvas_height_px: u32,
}

impl Snapshot {
    #[must_use]
    pub fn of(state: &EngineState) -> Self {
        let dims = state.dimensions();
        let (canvas_width_px, canvas_height_px) = dims.canvas_px(state.cell_size());
        Self {
            playing: state.is_playing(),
            jammed: state.is_jammed(),
            current: state.current().cloned(),
            next: state.next().cloned(),
            placed: state.placed().values().cloned().collect(),
            width: dims.width,
            height: dims.height,
            cell_size: state.cell_size(),
            canvas_width_px,
            canvas_height_px,
        }
    }
}
