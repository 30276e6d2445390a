//! Session bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, BoardConfig, Direction, Outcome};
use crate::rules::BlockEngine;
use crate::session::Session;
use crate::skills::{portfolio_skills, Skill};

/// Python wrapper for Outcome.
#[pyclass(name = "Outcome")]
#[derive(Clone, Debug)]
pub struct PyOutcome(pub Outcome);

#[pymethods]
impl PyOutcome {
    /// Whether the action changed any state.
    #[getter]
    fn changed(&self) -> bool {
        self.0.changed()
    }

    /// ID of the placed piece, for placements.
    #[getter]
    fn placed_id(&self) -> Option<String> {
        self.0.placed_id().map(ToString::to_string)
    }

    fn __repr__(&self) -> String {
        format!("Outcome({:?})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for Session.
///
/// Drives the block placement engine from a Python host.
#[pyclass(name = "BlockSession")]
pub struct PyBlockSession {
    session: Session,
}

#[pymethods]
impl PyBlockSession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - skills: list of (id, name, category, color, icon) tuples; the
    ///   portfolio skill list when omitted
    /// - seed: RNG seed for deterministic shape sequences
    /// - cell_size: cell edge in pixels
    /// - drop_interval_ms: gravity interval
    #[new]
    #[pyo3(signature = (
        skills = None,
        seed = 42,
        cell_size = 30,
        drop_interval_ms = 1000
    ))]
    fn new(
        skills: Option<Vec<(String, String, String, String, String)>>,
        seed: u64,
        cell_size: u32,
        drop_interval_ms: u64,
    ) -> PyResult<Self> {
        let skills: Vec<Skill> = match skills {
            Some(rows) => rows
                .into_iter()
                .map(|(id, name, category, color, icon)| {
                    Skill::new(id, name, category).with_color(color).with_icon(icon)
                })
                .collect(),
            None => portfolio_skills(),
        };
        let config = BoardConfig::new()
            .with_cell_size(cell_size)
            .with_drop_interval_ms(drop_interval_ms);

        let engine = BlockEngine::new(skills, config, seed)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            session: Session::new(engine),
        })
    }

    fn start(&mut self, now_ms: u64) -> PyOutcome {
        PyOutcome(self.session.start(now_ms))
    }

    fn reset(&mut self) -> PyOutcome {
        PyOutcome(self.session.reset())
    }

    fn move_left(&mut self) -> PyOutcome {
        PyOutcome(self.session.dispatch(Action::Move(Direction::Left)))
    }

    fn move_right(&mut self) -> PyOutcome {
        PyOutcome(self.session.dispatch(Action::Move(Direction::Right)))
    }

    fn move_down(&mut self) -> PyOutcome {
        PyOutcome(self.session.dispatch(Action::Move(Direction::Down)))
    }

    fn rotate(&mut self) -> PyOutcome {
        PyOutcome(self.session.dispatch(Action::Rotate))
    }

    fn hard_drop(&mut self) -> PyOutcome {
        PyOutcome(self.session.dispatch(Action::HardDrop))
    }

    /// One gravity step, independent of the clock.
    fn tick(&mut self) -> PyOutcome {
        PyOutcome(self.session.dispatch(Action::Tick))
    }

    /// Apply gravity ticks due at `now_ms`; returns how many changed state.
    fn update(&mut self, now_ms: u64) -> usize {
        self.session.update(now_ms).len()
    }

    /// Handle a `KeyboardEvent.key` name.
    fn key(&mut self, name: &str) -> PyOutcome {
        PyOutcome(self.session.handle_key(name))
    }

    fn resize(&mut self, width_px: f64, height_px: f64) -> PyOutcome {
        PyOutcome(self.session.resize(width_px, height_px))
    }

    #[getter]
    fn is_playing(&self) -> bool {
        self.session.engine().is_playing()
    }

    #[getter]
    fn width(&self) -> usize {
        self.session.engine().dimensions().width
    }

    #[getter]
    fn height(&self) -> usize {
        self.session.engine().dimensions().height
    }

    #[getter]
    fn cell_size(&self) -> u32 {
        self.session.engine().cell_size()
    }

    /// Number of placed pieces.
    fn placed_count(&self) -> usize {
        self.session.engine().placed().len()
    }

    /// Current piece as (skill id, x, y, shape rows), or None.
    fn current(&self) -> Option<(String, i32, i32, Vec<Vec<u8>>)> {
        self.session
            .engine()
            .current()
            .map(|p| (p.skill.id.to_string(), p.x, p.y, p.shape.to_rows()))
    }

    /// Placed pieces as (id, skill id, x, y, shape rows), oldest first.
    fn placed(&self) -> Vec<(String, String, i32, i32, Vec<Vec<u8>>)> {
        self.session
            .engine()
            .placed()
            .values()
            .map(|p| (p.id.to_string(), p.skill.id.to_string(), p.x, p.y, p.shape.to_rows()))
            .collect()
    }

    /// Board occupancy as a (height, width) uint8 numpy array.
    fn board_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let board = self.session.engine().state().board();
        let flat: Vec<u8> = board.to_rows().into_iter().flatten().collect();
        PyArray1::from_vec_bound(py, flat).reshape([board.height(), board.width()])
    }

    fn __repr__(&self) -> String {
        let dims = self.session.engine().dimensions();
        format!(
            "BlockSession(board={}, playing={}, placed={})",
            dims,
            self.session.engine().is_playing(),
            self.session.engine().placed().len()
        )
    }
}
