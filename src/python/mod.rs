//! Python bindings for the skill-blocks engine.
//!
//! Lets a Python host drive a session, e.g. for scripted demos or for
//! rendering the board with numpy tooling.
//!
//! # Quick Start
//!
//! ```python
//! import skill_blocks as sb
//!
//! session = sb.BlockSession(seed=7)
//! session.resize(1280.0, 900.0)
//! session.start(0)
//!
//! session.key("ArrowLeft")
//! session.update(3000)          # three gravity ticks
//! outcome = session.key("Enter")
//! print(outcome.placed_id)
//!
//! grid = session.board_numpy()  # shape (height, width), dtype uint8
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// skill-blocks: a falling-block skills showcase.
#[pymodule]
fn skill_blocks(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBlockSession>()?;
    m.add_class::<PyOutcome>()?;

    Ok(())
}
