//! Transition calculation (C5), validation (C6), and application (C7).
//!
//! A `Transition` is the pre-commit description of everything one play
//! changes about a `GameContext`. It is produced by [`calculate`], checked by
//! [`TransitionValidator`], and consumed by [`TransitionApplicator`] - none of
//! the three ever panics or mutates state outside its own return value.
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::game::context::{GameContext, GameContextRaw, GameContextUpdateOptions};
use crate::game::play::result::{PlayResult, ScoreResult};

/// A rule-violation code from the validator's invariant table.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
pub enum ValidationCode {
    Field001,
    Field004,
    Down001,
    Down005,
    Poss001,
    Score001,
    Clock001,
    Cross004,
    Cross005,
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ValidationCode::Field001 => "FIELD.001",
            ValidationCode::Field004 => "FIELD.004",
            ValidationCode::Down001 => "DOWN.001",
            ValidationCode::Down005 => "DOWN.005",
            ValidationCode::Poss001 => "POSS.001",
            ValidationCode::Score001 => "SCORE.001",
            ValidationCode::Clock001 => "CLOCK.001",
            ValidationCode::Cross004 => "CROSS.004",
            ValidationCode::Cross005 => "CROSS.005",
        };
        f.write_str(code)
    }
}

/// One rule violation found by the validator.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct ValidationError {
    pub code: ValidationCode,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Field-position, down, and distance deltas for one play.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct FieldTransition {
    pub yard_line: u32,
    pub down: u32,
    pub distance: u32,
    pub first_down_achieved: bool,
}

/// Whether possession changes hands, and to whom.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct PossessionTransition {
    pub possession_changed: bool,
    pub home_possession: bool,
}

/// Scoring deltas for one play. Exactly the fields named in the scoring
/// rule - no extras.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct ScoreTransition {
    pub score_occurred: bool,
    pub points_scored: u32,
    pub scoring_team_home: bool,
    pub home_score: u32,
    pub away_score: u32,
}

/// Clock deltas: seconds remaining, quarter, and half/game boundary flags.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct ClockTransition {
    pub half_seconds: u32,
    pub quarter: u32,
    pub end_of_half: bool,
    pub game_over: bool,
}

/// Post-score kickoff reset and safety-kick bookkeeping.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct SpecialSituationTransition {
    pub kickoff_pending: bool,
    pub safety_occurred: bool,
}

/// The composite transition: everything one play changes, prior to
/// application. Pure data - constructing one has no side effects.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transition {
    pub field: FieldTransition,
    pub possession: PossessionTransition,
    pub score: ScoreTransition,
    pub clock: ClockTransition,
    pub special: SpecialSituationTransition,
    raw: GameContextRaw,
}

/// Calculate the composite `Transition` for one play. Pure function of
/// `(PlayResult, GameContext)`; never fails - the teacher's `next_*` methods
/// already produce a best-effort result in all documented ranges, and any
/// out-of-range result is caught downstream by the validator, not here.
///
/// Runs the five calculators in the fixed order: field, possession, score,
/// clock, special-situations - each reusing the corresponding `next_*`
/// methods already present on `GameContext`.
///
/// ### Example
/// ```
/// use fbsim_core::game::context::GameContext;
/// use fbsim_core::game::play::result::run::RunResult;
/// use fbsim_core::game::transition::calculate;
///
/// let context = GameContext::new();
/// let result = RunResult::new();
/// let transition = calculate(&context, &result);
/// assert!(transition.field.yard_line <= 100);
/// ```
pub fn calculate(context: &GameContext, result: &(impl PlayResult + ?Sized)) -> Transition {
    let duration = result.play_duration();
    let off_score = result.offense_score();
    let def_score = result.defense_score();
    let off_timeout = result.offense_timeout();
    let def_timeout = result.defense_timeout();
    let next_play_extra_point = result.next_play_extra_point();
    let turnover = result.turnover();
    let update_opts = GameContextUpdateOptions {
        duration,
        net_yards: result.net_yards(),
        off_score,
        def_score,
        turnover,
        touchback: result.touchback(),
        kickoff_oob: result.kickoff() && result.out_of_bounds(),
        off_timeout,
        def_timeout,
        next_play_extra_point,
        between_play: false,
        end_of_game: false,
    };

    // FieldCalculator
    let end_of_half = if context.end_of_half() {
        false
    } else {
        context.next_end_of_half(&update_opts) && !next_play_extra_point
    };
    let next_quarter = if end_of_half {
        context.quarter()
    } else {
        context.next_quarter(&update_opts)
    };
    let next_down = context.next_down(&update_opts);
    let next_yard_line = context.next_yard_line(&update_opts);
    let next_distance = context.next_distance(&update_opts);
    let first_down_achieved = !context.next_play_kickoff()
        && !next_play_extra_point
        && !end_of_half
        && !turnover
        && off_score == ScoreResult::None
        && def_score == ScoreResult::None
        && result.net_yards() >= context.distance() as i32;
    let field = FieldTransition {
        yard_line: next_yard_line,
        down: next_down,
        distance: next_distance,
        first_down_achieved,
    };

    // PossessionCalculator - consumes the field transition's first-down flag
    let next_home_possession = context.next_home_possession(&update_opts);
    let possession_changed = if field.first_down_achieved {
        false
    } else {
        next_home_possession != context.home_possession()
    };
    let possession = PossessionTransition {
        possession_changed,
        home_possession: next_home_possession,
    };

    // ScoreCalculator
    let next_home_score = context.next_home_score(&update_opts);
    let next_away_score = context.next_away_score(&update_opts);
    let score_occurred = off_score != ScoreResult::None || def_score != ScoreResult::None;
    let scoring_team_home = if off_score != ScoreResult::None {
        context.home_possession()
    } else {
        !context.home_possession()
    };
    let points_scored = score_points(off_score).max(score_points(def_score));
    let score = ScoreTransition {
        score_occurred,
        points_scored,
        scoring_team_home,
        home_score: next_home_score,
        away_score: next_away_score,
    };

    // ClockCalculator
    let clock = ClockTransition {
        half_seconds: context.next_half_seconds(&update_opts),
        quarter: next_quarter,
        end_of_half,
        game_over: context.next_game_over(&update_opts),
    };

    // SpecialSituationsCalculator
    let safety_occurred = def_score == ScoreResult::Safety;
    let kickoff_pending = result.next_play_kickoff() || (end_of_half && !next_play_extra_point);
    let special = SpecialSituationTransition {
        kickoff_pending,
        safety_occurred,
    };

    let raw = GameContextRaw::from_calculated(
        context,
        next_quarter,
        &field,
        &possession,
        &score,
        &clock,
        result,
        next_play_extra_point,
        kickoff_pending,
    );

    Transition { field, possession, score, clock, special, raw }
}

fn score_points(score: ScoreResult) -> u32 {
    match score {
        ScoreResult::None => 0,
        ScoreResult::Touchdown => 6,
        ScoreResult::FieldGoal => 3,
        ScoreResult::Safety => 2,
        ScoreResult::ExtraPoint => 1,
        ScoreResult::TwoPointConversion => 2,
    }
}

/// Validates a calculated `Transition` against the invariants in the data
/// model plus the cross-dependency rules. Never mutates state; returns the
/// full list of violations found rather than stopping at the first.
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct TransitionValidator {}

impl TransitionValidator {
    pub fn new() -> TransitionValidator {
        TransitionValidator::default()
    }

    /// Validate a transition against the pre-play context it was calculated
    /// from. Idempotent: calling this twice on the same inputs returns the
    /// same list of violations.
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::context::GameContext;
    /// use fbsim_core::game::play::result::run::RunResult;
    /// use fbsim_core::game::transition::{calculate, TransitionValidator};
    ///
    /// let context = GameContext::new();
    /// let result = RunResult::new();
    /// let transition = calculate(&context, &result);
    /// let validator = TransitionValidator::new();
    /// let violations = validator.validate(&context, &transition);
    /// assert!(violations.is_empty());
    /// ```
    pub fn validate(&self, pre: &GameContext, transition: &Transition) -> Vec<ValidationError> {
        let mut violations = Vec::new();

        // FIELD.001
        if transition.field.yard_line > 100 {
            violations.push(ValidationError {
                code: ValidationCode::Field001,
                message: format!("yard_line out of range [0, 100]: {}", transition.field.yard_line),
            });
        }

        // FIELD.004 - goal-line rule
        let distance_to_goal = if transition.field.yard_line <= 100 {
            100 - transition.field.yard_line
        } else {
            0
        };
        if transition.field.distance > distance_to_goal {
            violations.push(ValidationError {
                code: ValidationCode::Field004,
                message: format!(
                    "distance {} exceeds distance to goal {}",
                    transition.field.distance, distance_to_goal
                ),
            });
        }

        // DOWN.001
        if transition.field.down > 4 {
            violations.push(ValidationError {
                code: ValidationCode::Down001,
                message: format!("down out of range [0, 4]: {}", transition.field.down),
            });
        }

        // DOWN.005 - progression: reset to 1/0 on first down, possession change, or
        // score; otherwise increments by exactly one.
        let reset_expected = transition.field.first_down_achieved
            || transition.possession.possession_changed
            || transition.score.score_occurred
            || transition.special.kickoff_pending
            || transition.clock.end_of_half;
        if !reset_expected {
            let expected = pre.down() + 1;
            if transition.field.down != expected && transition.field.down != 1 {
                violations.push(ValidationError {
                    code: ValidationCode::Down005,
                    message: format!(
                        "down did not progress correctly: {} -> {} (expected {})",
                        pre.down(), transition.field.down, expected
                    ),
                });
            }
        }

        // POSS.001 - well-formedness is structural (home xor away) and always
        // holds for a bool-typed possession flag; nothing further to check here
        // beyond documenting the invariant.

        // SCORE.001
        if transition.score.score_occurred {
            let valid_points = matches!(transition.score.points_scored, 1 | 2 | 3 | 6);
            if !valid_points {
                violations.push(ValidationError {
                    code: ValidationCode::Score001,
                    message: format!("unexpected points_scored: {}", transition.score.points_scored),
                });
            }
        }

        // CLOCK.001 - half_seconds is u32, always >= 0; documented, not checkable

        // CROSS.004 - turnover on downs must flip possession
        let fourth_down_failure = pre.down() == 4
            && !transition.field.first_down_achieved
            && !transition.score.score_occurred
            && !pre.next_play_kickoff();
        if fourth_down_failure && !transition.possession.possession_changed {
            violations.push(ValidationError {
                code: ValidationCode::Cross004,
                message: String::from("fourth-down failure did not flip possession"),
            });
        }

        // CROSS.005 - first down achieved must not flip possession (absent a score)
        if transition.field.first_down_achieved
            && !transition.score.score_occurred
            && transition.possession.possession_changed
        {
            violations.push(ValidationError {
                code: ValidationCode::Cross005,
                message: String::from("first down achieved but possession changed"),
            });
        }

        violations
    }
}

/// Applies an already-validated `Transition` to a `GameContext`, atomically.
/// Never recalculates anything - it consumes the calculator output directly,
/// including the goal-line-correct `distance` computed by [`calculate`].
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct TransitionApplicator {}

impl TransitionApplicator {
    pub fn new() -> TransitionApplicator {
        TransitionApplicator::default()
    }

    /// Apply a transition, returning the new context or rolling back to
    /// `pre` unchanged if the applicator's own post-condition check (a
    /// second, cheap pass through `GameContextRaw::validate`) fails.
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::context::GameContext;
    /// use fbsim_core::game::play::result::run::RunResult;
    /// use fbsim_core::game::transition::{calculate, TransitionApplicator};
    ///
    /// let context = GameContext::new();
    /// let result = RunResult::new();
    /// let transition = calculate(&context, &result);
    /// let applicator = TransitionApplicator::new();
    /// let applied = applicator.apply(&context, transition);
    /// assert!(applied.is_ok());
    /// ```
    pub fn apply(&self, pre: &GameContext, transition: Transition) -> Result<GameContext, GameContext> {
        match GameContext::try_from(transition.raw) {
            Ok(next) => Ok(next),
            Err(_) => Err(pre.clone()),
        }
    }
}

impl GameContextRaw {
    /// Assemble the raw context a calculated `Transition` describes. Kept on
    /// `GameContextRaw` (rather than a free function) so it sits next to
    /// `validate` and the hand-written `TryFrom` - both model the same
    /// "assemble, then the single validation gate decides" shape.
    #[allow(clippy::too_many_arguments)]
    fn from_calculated(
        pre: &GameContext,
        next_quarter: u32,
        field: &FieldTransition,
        possession: &PossessionTransition,
        score: &ScoreTransition,
        clock: &ClockTransition,
        result: &(impl PlayResult + ?Sized),
        next_play_extra_point: bool,
        kickoff_pending: bool,
    ) -> GameContextRaw {
        GameContextRaw {
            home_team_short: String::from(pre.home_team_short()),
            away_team_short: String::from(pre.away_team_short()),
            quarter: next_quarter,
            half_seconds: clock.half_seconds,
            down: field.down,
            distance: field.distance,
            yard_line: field.yard_line,
            home_score: score.home_score,
            away_score: score.away_score,
            home_timeouts: pre.next_home_timeouts(&result_update_opts(pre, result, next_play_extra_point)),
            away_timeouts: pre.next_away_timeouts(&result_update_opts(pre, result, next_play_extra_point)),
            home_positive_direction: pre.next_home_positive_direction(&result_update_opts(pre, result, next_play_extra_point)),
            home_opening_kickoff: pre.home_opening_kickoff(),
            home_possession: possession.home_possession,
            last_play_turnover: result.turnover(),
            last_play_incomplete: result.incomplete(),
            last_play_out_of_bounds: result.out_of_bounds(),
            last_play_timeout: result.offense_timeout() || result.defense_timeout(),
            last_play_kickoff: result.kickoff(),
            last_play_punt: result.punt(),
            next_play_extra_point,
            next_play_kickoff: kickoff_pending,
            neutral_site: pre.neutral_site(),
            end_of_half: clock.end_of_half,
            game_over: clock.game_over,
        }
    }
}

fn result_update_opts(
    pre: &GameContext,
    result: &(impl PlayResult + ?Sized),
    next_play_extra_point: bool,
) -> GameContextUpdateOptions {
    GameContextUpdateOptions {
        duration: result.play_duration(),
        net_yards: result.net_yards(),
        off_score: result.offense_score(),
        def_score: result.defense_score(),
        turnover: result.turnover(),
        touchback: result.touchback(),
        kickoff_oob: result.kickoff() && result.out_of_bounds(),
        off_timeout: result.offense_timeout(),
        def_timeout: result.defense_timeout(),
        next_play_extra_point,
        between_play: false,
        end_of_game: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::play::result::run::RunResultBuilder;

    #[test]
    fn test_calculate_first_down_keeps_possession() {
        let context = GameContext::new();
        let result = RunResultBuilder::new().yards_gained(12).build().unwrap();
        let transition = calculate(&context, &result);
        assert!(transition.field.first_down_achieved);
        assert!(!transition.possession.possession_changed);
        assert_eq!(transition.field.down, 1);
    }

    #[test]
    fn test_validator_flags_goal_line_violation() {
        let context = GameContext::new();
        let result = RunResultBuilder::new().build().unwrap();
        let mut transition = calculate(&context, &result);
        transition.field.distance = 50;
        transition.field.yard_line = 95;
        let validator = TransitionValidator::new();
        let violations = validator.validate(&context, &transition);
        assert!(violations.iter().any(|v| v.code == ValidationCode::Field004));
    }

    #[test]
    fn test_applicator_matches_existing_next_context() {
        let context = GameContext::new();
        let result = RunResultBuilder::new().yards_gained(7).build().unwrap();
        let transition = calculate(&context, &result);
        let applicator = TransitionApplicator::new();
        let applied = applicator.apply(&context, transition).unwrap();
        let expected = context.next_context(&result);
        assert_eq!(applied, expected);
    }

    #[test]
    fn test_validator_idempotent() {
        let context = GameContext::new();
        let result = RunResultBuilder::new().yards_gained(5).build().unwrap();
        let transition = calculate(&context, &result);
        let validator = TransitionValidator::new();
        let first = validator.validate(&context, &transition);
        let second = validator.validate(&context, &transition);
        assert_eq!(first, second);
    }
}
