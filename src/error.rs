//! Engine-level error kinds.
//!
//! Construction-time validation on individual value objects (`FootballTeam`,
//! `GameContext`, the per-play `Result` types, ...) stays with the teacher's
//! `Raw` + `TryFrom<Raw, Error = String>` pattern used throughout this crate -
//! those are local, single-value checks with no useful further structure.
//!
//! `GameError` covers the coarser failure modes of the simulation pipeline
//! itself: malformed configuration, a transition that violates an invariant,
//! an applicator post-condition failure, and PRNG/resource misuse. Only the
//! orchestrator (`game::play::GameSimulator`) and the state manager
//! (`game::state::GameStateManager`) surface it; calculators and the matchup
//! matrix engine never raise (see `game::transition`).
use thiserror::Error;

use crate::game::transition::ValidationError;

/// # `GameError` enum
///
/// The four error kinds from the engine's error handling design: malformed
/// configuration (fatal at construction), a rolled-back rule violation
/// (recoverable once), an applicator post-condition failure (treated the
/// same as a validation error), and PRNG/resource misuse (fatal).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// Missing or malformed archetype/concept-matrix configuration. Fatal at
    /// game start - there is no safe fallback for a structurally broken
    /// configuration table, only for an unrecognized archetype *identifier*
    /// (which falls back to `CoachArchetype::Balanced`, see `team::archetype`).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A calculated `Transition` violated one or more invariants. Carries
    /// the rule violations the validator found so the orchestrator can
    /// decide whether a safe-fallback retry is possible.
    #[error("validation failed with {} violation(s): {}", .0.len(), describe(.0))]
    Validation(Vec<ValidationError>),

    /// The applicator's post-condition check failed after a transition
    /// otherwise passed validation (e.g. resulting yardsToGo exceeded
    /// distance-to-goal). Handled identically to `Validation`.
    #[error("post-condition failure: {0}")]
    Logic(String),

    /// PRNG misuse or an out-of-range seed. Fatal; there is no retry.
    #[error("resource error: {0}")]
    Resource(String),
}

fn describe(violations: &[ValidationError]) -> String {
    violations.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("; ")
}

impl GameError {
    /// Whether the orchestrator may attempt the documented single
    /// safe-fallback retry (no-gain, clock runs 20s) for this error, per the
    /// error handling design: `Validation` and `Logic` are recoverable once,
    /// `Configuration` and `Resource` are always fatal.
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::error::GameError;
    ///
    /// let err = GameError::Logic(String::from("yardsToGo exceeded distance-to-goal"));
    /// assert!(err.retryable());
    ///
    /// let fatal = GameError::Resource(String::from("seed out of range"));
    /// assert!(!fatal.retryable());
    /// ```
    pub fn retryable(&self) -> bool {
        matches!(self, GameError::Validation(_) | GameError::Logic(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::transition::ValidationCode;

    #[test]
    fn test_retryable_classification() {
        assert!(GameError::Validation(vec![
            ValidationError{ code: ValidationCode::Field001, message: String::from("test") }
        ]).retryable());
        assert!(GameError::Logic(String::from("test")).retryable());
        assert!(!GameError::Configuration(String::from("test")).retryable());
        assert!(!GameError::Resource(String::from("test")).retryable());
    }
}
