//! Skill pool: which skill the next piece carries.
//!
//! The pool holds two ordered sequences:
//! - `available`: skills not yet drawn this cycle
//! - `used`: skills whose piece has been placed
//!
//! Drawing takes the front of `available`. A drawn skill belongs to an
//! in-flight piece until that piece is placed, at which point it moves to
//! `used`. When `available` runs dry, `used` becomes the new `available`, so
//! the pool cycles forever as long as any skill exists.
//!
//! Conservation: `available + used + in-flight == total`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::skill::Skill;

/// Cycling pool of skills.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPool {
    available: Vector<Skill>,
    used: Vector<Skill>,
    cycles: u32,
}

impl SkillPool {
    /// Create a pool with every skill available, in order.
    #[must_use]
    pub fn new(skills: &Vector<Skill>) -> Self {
        Self {
            available: skills.clone(),
            used: Vector::new(),
            cycles: 0,
        }
    }

    /// Take the next skill.
    ///
    /// Promotes `used` to `available` first if `available` is empty.
    /// Returns `None` only when both sequences are empty.
    pub fn draw(&mut self) -> Option<Skill> {
        if self.available.is_empty() && !self.used.is_empty() {
            self.available = std::mem::take(&mut self.used);
            self.cycles += 1;
        }
        self.available.pop_front()
    }

    /// Record that a piece carrying `skill` was placed.
    pub fn mark_used(&mut self, skill: Skill) {
        self.used.push_back(skill);
    }

    /// Skills not yet drawn this cycle.
    #[must_use]
    pub fn available(&self) -> &Vector<Skill> {
        &self.available
    }

    /// Skills whose pieces have been placed this cycle.
    #[must_use]
    pub fn used(&self) -> &Vector<Skill> {
        &self.used
    }

    /// Number of skills held by the pool (excludes in-flight skills).
    #[must_use]
    pub fn len(&self) -> usize {
        self.available.len() + self.used.len()
    }

    /// Check if the pool holds no skills.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty() && self.used.is_empty()
    }

    /// How many times `used` has been recycled.
    #[must_use]
    pub fn cycles(&self) -> u32 {
        self.cycles
    }
}
