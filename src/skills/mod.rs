//! Skills carried by pieces.
//!
//! - `Skill`/`SkillId`: host-supplied display records
//! - `SkillPool`: the cycling available/used sequences
//! - `portfolio_skills`: the default list shown on the Tools page

mod catalog;
mod pool;
mod skill;

pub use catalog::portfolio_skills;
pub use pool::SkillPool;
pub use skill::{abbreviate, Skill, SkillId};
