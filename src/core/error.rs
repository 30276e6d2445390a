//! Construction and configuration errors.
//!
//! Actions never fail (an illegal move is reported as `Outcome::Unchanged`),
//! so errors only arise while building an engine.

use thiserror::Error;

use super::config::BoardDimensions;
use crate::skills::SkillId;

/// Invalid `BoardConfig` values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell size must be at least 1px")]
    ZeroCellSize,

    #[error("minimum board dimensions must be non-zero (got {width}x{height})")]
    ZeroMinimumDimension { width: usize, height: usize },

    #[error("maximum board dimensions {max} are below the minimum {min}")]
    MaximumBelowMinimum {
        min: BoardDimensions,
        max: BoardDimensions,
    },

    #[error("initial board dimensions must be non-zero (got {width}x{height})")]
    EmptyInitialBoard { width: usize, height: usize },

    #[error("gravity interval must be at least 1ms")]
    ZeroDropInterval,
}

/// Errors raised when constructing a `BlockEngine`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid board configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("skill id `{0}` appears more than once")]
    DuplicateSkill(SkillId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::from(ConfigError::ZeroCellSize);
        assert_eq!(
            err.to_string(),
            "invalid board configuration: cell size must be at least 1px"
        );

        let dup = EngineError::DuplicateSkill(SkillId::new("rust"));
        assert_eq!(dup.to_string(), "skill id `rust` appears more than once");
    }
}
