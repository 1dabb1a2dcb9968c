//! The game-state manager: orchestrates calculate -> validate -> apply for
//! one play and produces the audit trail the external statistics sink
//! consumes. Stateless - matches the teacher's `PlaySimulator`/
//! `DriveSimulator` "unit struct wrapping child operations" pattern -
//! and maintains no state between plays beyond what is in `GameContext`.
use serde::{Serialize, Deserialize};

use crate::error::GameError;
use crate::game::context::GameContext;
use crate::game::play::Game;
use crate::game::play::result::PlayResult;
use crate::game::play::result::run::RunResultBuilder;
use crate::game::transition::{self, Transition, TransitionApplicator, TransitionValidator, ValidationError};

const SAFE_FALLBACK_DURATION: u32 = 20;

/// # `AuditEntry` struct
///
/// A serializable record of one play's state transition: the pre- and
/// post-play context, the computed transition, any validation errors
/// encountered (populated only when a safe-fallback retry was needed), and
/// the time elapsed. Mirrors the audit record an external statistics sink
/// would consume.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AuditEntry {
    pre: GameContext,
    post: GameContext,
    transition: Transition,
    validation_errors: Vec<ValidationError>,
    time_elapsed: u32
}

impl AuditEntry {
    /// Borrow the pre-play context
    pub fn pre(&self) -> &GameContext {
        &self.pre
    }

    /// Borrow the post-play context
    pub fn post(&self) -> &GameContext {
        &self.post
    }

    /// Borrow the transition that was applied
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Borrow the validation errors encountered, if any. A non-empty list
    /// means the originally calculated transition was rejected and the
    /// game proceeded on the safe-fallback transition instead.
    pub fn validation_errors(&self) -> &Vec<ValidationError> {
        &self.validation_errors
    }

    /// Whether this play's transition required a safe-fallback retry
    pub fn had_validation_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }

    /// Get the time elapsed on this play, in seconds
    pub fn time_elapsed(&self) -> u32 {
        self.time_elapsed
    }
}

/// # `GameStateManager` struct
///
/// Orchestrates the calculate -> validate -> apply pipeline for a single
/// play, with the documented single safe-fallback retry: if the calculated
/// transition fails validation (or the applicator's post-condition check),
/// re-attempt once with a no-gain, clock-runs-20-seconds substitute
/// transition before surfacing a fatal [`GameError::Validation`].
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Serialize, Deserialize)]
pub struct GameStateManager {}

impl GameStateManager {
    /// Initialize a new GameStateManager
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::state::GameStateManager;
    ///
    /// let my_manager = GameStateManager::new();
    /// ```
    pub fn new() -> GameStateManager {
        GameStateManager{}
    }

    /// Process one play: calculate its transition, validate it, and apply
    /// it, retrying once with a safe fallback if validation or application
    /// fails.
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::context::GameContext;
    /// use fbsim_core::game::play::result::run::RunResult;
    /// use fbsim_core::game::state::GameStateManager;
    ///
    /// let context = GameContext::new();
    /// let result = RunResult::new();
    /// let manager = GameStateManager::new();
    /// let (new_context, audit) = manager.process_play(&context, &result).unwrap();
    /// assert!(!audit.had_validation_errors());
    /// ```
    pub fn process_play(
        &self,
        context: &GameContext,
        result: &(impl PlayResult + ?Sized)
    ) -> Result<(GameContext, AuditEntry), GameError> {
        let transition = transition::calculate(context, result);
        let validator = TransitionValidator::new();
        let violations = validator.validate(context, &transition);
        if violations.is_empty() {
            let applicator = TransitionApplicator::new();
            let time_elapsed = result.play_duration();
            match applicator.apply(context, transition.clone()) {
                Ok(post) => {
                    tracing::debug!(time_elapsed, "processed play");
                    return Ok((post.clone(), AuditEntry{
                        pre: context.clone(),
                        post,
                        transition,
                        validation_errors: Vec::new(),
                        time_elapsed
                    }));
                },
                Err(_) => {
                    tracing::warn!("applicator post-condition failed, retrying with safe fallback");
                    return self.retry_with_fallback(context, vec![ValidationError{
                        code: crate::game::transition::ValidationCode::Cross005,
                        message: String::from("applicator post-condition check failed")
                    }]);
                }
            }
        }

        tracing::warn!(violations = violations.len(), "transition failed validation, retrying with safe fallback");
        self.retry_with_fallback(context, violations)
    }

    /// Re-attempt a play's transition with a no-gain, 20-second substitute.
    /// If the fallback itself fails validation or application, the game
    /// terminates with a fatal [`GameError::Validation`] or
    /// [`GameError::Logic`].
    fn retry_with_fallback(
        &self,
        context: &GameContext,
        violations: Vec<ValidationError>
    ) -> Result<(GameContext, AuditEntry), GameError> {
        let fallback = RunResultBuilder::new()
            .yards_gained(0)
            .play_duration(SAFE_FALLBACK_DURATION)
            .build()
            .map_err(GameError::Configuration)?;

        let transition = transition::calculate(context, &fallback);
        let validator = TransitionValidator::new();
        let fallback_violations = validator.validate(context, &transition);
        if !fallback_violations.is_empty() {
            tracing::error!(violations = fallback_violations.len(), "safe fallback also failed validation, terminating game");
            return Err(GameError::Validation(fallback_violations));
        }

        let applicator = TransitionApplicator::new();
        match applicator.apply(context, transition.clone()) {
            Ok(post) => Ok((post.clone(), AuditEntry{
                pre: context.clone(),
                post,
                transition,
                validation_errors: violations,
                time_elapsed: SAFE_FALLBACK_DURATION
            })),
            Err(_) => {
                tracing::error!("safe fallback failed to apply, terminating game");
                Err(GameError::Logic(String::from("safe fallback transition failed the applicator's post-condition check")))
            }
        }
    }
}

/// # `GameResult` struct
///
/// The final, external-facing summary of a completed game: the winner,
/// final scores, total plays simulated, total game time, and the ordered
/// play-by-play log. Constructed once a [`Game`]'s final [`GameContext`]
/// reports `game_over()`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GameResult {
    home_winner: Option<bool>,
    home_score: u32,
    away_score: u32,
    total_plays: usize,
    total_time_seconds: u32
}

impl GameResult {
    /// Summarize a completed game and its final context into a `GameResult`.
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::context::GameContext;
    /// use fbsim_core::game::play::Game;
    /// use fbsim_core::game::state::GameResult;
    ///
    /// let game = Game::new();
    /// let context = GameContext::new();
    /// let result = GameResult::from_game(&game, &context);
    /// assert_eq!(result.total_plays(), 0);
    /// ```
    pub fn from_game(game: &Game, final_context: &GameContext) -> GameResult {
        let total_plays: usize = game.drives().iter().map(|d| d.plays().len()).sum();
        let home_winner = if final_context.home_score() > final_context.away_score() {
            Some(true)
        } else if final_context.away_score() > final_context.home_score() {
            Some(false)
        } else {
            None
        };
        GameResult{
            home_winner,
            home_score: final_context.home_score(),
            away_score: final_context.away_score(),
            total_plays,
            total_time_seconds: final_context.quarter().max(1) * 900
        }
    }

    /// Whether the home team won. `None` if the game ended tied.
    pub fn home_winner(&self) -> Option<bool> {
        self.home_winner
    }

    /// Get the final home score
    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    /// Get the final away score
    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    /// Get the total number of plays simulated
    pub fn total_plays(&self) -> usize {
        self.total_plays
    }

    /// Get the total game time, in seconds, the box score spans
    pub fn total_time_seconds(&self) -> u32 {
        self.total_time_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::play::result::run::RunResult;

    #[test]
    fn test_process_play_no_violations() {
        let context = GameContext::new();
        let result = RunResult::new();
        let manager = GameStateManager::new();
        let (new_context, audit) = manager.process_play(&context, &result).unwrap();
        assert!(!audit.had_validation_errors());
        assert_eq!(*audit.pre(), context);
        assert_eq!(*audit.post(), new_context);
    }

    #[test]
    fn test_process_play_matches_next_context() {
        let context = GameContext::new();
        let result = RunResultBuilder::new().yards_gained(7).build().unwrap();
        let manager = GameStateManager::new();
        let (new_context, _audit) = manager.process_play(&context, &result).unwrap();
        let expected = context.next_context(&result);
        assert_eq!(new_context, expected);
    }

    #[test]
    fn test_game_result_from_empty_game() {
        let game = Game::new();
        let context = GameContext::new();
        let result = GameResult::from_game(&game, &context);
        assert_eq!(result.total_plays(), 0);
        assert_eq!(result.home_winner(), None);
    }
}
