//! Session adapter: timer and input plumbing around the engine.
//!
//! The engine core is pure; this module owns the parts that depend on the
//! host's event loop:
//! - `GravityClock`: converts host timestamps into gravity ticks
//! - `Key`: keyboard bindings
//! - `Snapshot`: serializable view for the rendering surface
//!
//! ## Concurrency
//!
//! Every `Session` method takes `&mut self` and applies its whole effect
//! before returning, so ticks, key presses and resizes are serialized by
//! construction. A multi-threaded host should put the session behind one
//! `Mutex` and hold it for each call. `reset` disarms the clock and clears
//! the engine in the same call, so no tick can land on the cleared state.

mod clock;
mod keys;
mod snapshot;

pub use clock::GravityClock;
pub use keys::Key;
pub use snapshot::Snapshot;

use tracing::debug;

use crate::core::action::{Action, Outcome};
use crate::rules::BlockEngine;

/// An engine driven by host time and input.
///
/// ## Example
///
/// ```
/// use skill_blocks::core::BoardConfig;
/// use skill_blocks::rules::BlockEngine;
/// use skill_blocks::session::Session;
/// use skill_blocks::skills::portfolio_skills;
///
/// let engine = BlockEngine::new(portfolio_skills(), BoardConfig::default(), 42).unwrap();
/// let mut session = Session::new(engine);
///
/// session.start(0);
/// session.update(2_000); // two gravity ticks
/// assert_eq!(session.engine().current().unwrap().y, 2);
///
/// session.handle_key("Enter");
/// assert_eq!(session.snapshot().placed.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    engine: BlockEngine,
    clock: GravityClock,
}

impl Session {
    /// Wrap an engine. The clock uses the engine's configured interval.
    #[must_use]
    pub fn new(engine: BlockEngine) -> Self {
        let clock = GravityClock::new(engine.state().config().drop_interval_ms);
        Self { engine, clock }
    }

    /// Start a round and arm gravity from `now_ms`.
    pub fn start(&mut self, now_ms: u64) -> Outcome {
        let outcome = self.engine.start();
        self.clock.arm(now_ms);
        outcome
    }

    /// Stop gravity and reset the engine.
    pub fn reset(&mut self) -> Outcome {
        self.clock.disarm();
        self.engine.reset()
    }

    /// Apply every gravity tick due at `now_ms`.
    ///
    /// Returns the outcomes of ticks that changed state.
    pub fn update(&mut self, now_ms: u64) -> Vec<Outcome> {
        let ticks = self.clock.advance(now_ms);
        if !self.engine.is_playing() {
            return Vec::new();
        }

        (0..ticks)
            .map(|_| self.engine.tick())
            .filter(Outcome::changed)
            .collect()
    }

    /// Handle a `KeyboardEvent.key` name. Unbound keys are ignored.
    ///
    /// Manual soft drops do not reset the gravity clock.
    pub fn handle_key(&mut self, name: &str) -> Outcome {
        match Key::from_name(name) {
            Some(key) => self.engine.dispatch(key.action()),
            None => Outcome::Unchanged,
        }
    }

    /// Report the rendering surface's pixel budget.
    pub fn resize(&mut self, width_px: f64, height_px: f64) -> Outcome {
        let outcome = self.engine.resize(width_px, height_px);
        if let Outcome::Resized { from, to } = &outcome {
            debug!(%from, %to, playing = self.engine.is_playing(), "session resized");
        }
        outcome
    }

    /// Apply a piece or resize action directly.
    ///
    /// `Start` needs a timestamp to arm the clock, so it is a no-op here;
    /// call `start` instead. `Reset` disarms the clock as `reset` does.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        match action {
            Action::Start => Outcome::Unchanged,
            Action::Reset => self.reset(),
            Action::Resize {
                width_px,
                height_px,
            } => self.resize(width_px, height_px),
            other => self.engine.dispatch(other),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &BlockEngine {
        &self.engine
    }

    #[must_use]
    pub fn clock(&self) -> &GravityClock {
        &self.clock
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self.engine.state())
    }
}
