//! The clock strategy: the authoritative elapsed game time for a play,
//! derived from the offensive coach's archetype and the situation the play
//! was run in. Each concrete `PlayResult` already derives a yardage-based
//! duration (see e.g. `game::play::result::pass::PassResult`); the clock
//! strategy takes that as its base time and layers archetype and
//! situational adjustments on top, rather than duplicating it.
use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Serialize, Deserialize};

use crate::game::context::GameContext;
use crate::game::play::call::PlayCall;
use crate::game::play::context::PlayContext;
use crate::game::play::result::{PlayResult, ScoreResult};
use crate::team::archetype::CoachArchetype;

const CLOCK_FLOOR_SECONDS: u32 = 8;
const CLOCK_CEIL_SECONDS: u32 = 45;

// Score differential situational adjustments, from the offense's perspective
const SCORE_DIFF_BLOWOUT: i32 = 14;
const SCORE_DIFF_LEAD_CLOSE: i32 = 7;
const ADJ_LEAD_BLOWOUT: i32 = 5;
const ADJ_LEAD_CLOSE: i32 = 3;
const ADJ_TRAIL_BLOWOUT: i32 = -4;
const ADJ_TRAIL_CLOSE: i32 = -2;

// Down/distance situational adjustments
const LONG_YARDAGE: u32 = 7;
const ADJ_THIRD_AND_LONG: i32 = -1;
const ADJ_FOURTH_DOWN: i32 = 2;

// Field position situational adjustments
const ADJ_RED_ZONE: i32 = 2;
const ADJ_GOAL_LINE: i32 = 4;

// Two-minute warning situational adjustments
const TWO_MINUTE_WARNING_SECONDS: u32 = 120;
const ADJ_TWO_MINUTE_LEADING: i32 = 3;
const ADJ_TWO_MINUTE_TRAILING: i32 = -3;

/// # `ClockArchetypeAdjustment` struct
///
/// The additive seconds one coaching archetype applies to a play's base
/// duration: a flat adjustment plus a handful of situational toggles that
/// only that archetype cares about.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ClockArchetypeAdjustment {
    base: i32,
    run: i32,
    pass: i32,
    no_huddle: i32,
    critical_down: i32,
    fourth_down: i32
}

impl ClockArchetypeAdjustment {
    /// Construct a new `ClockArchetypeAdjustment`
    pub fn new(
        base: i32,
        run: i32,
        pass: i32,
        no_huddle: i32,
        critical_down: i32,
        fourth_down: i32
    ) -> ClockArchetypeAdjustment {
        ClockArchetypeAdjustment{ base, run, pass, no_huddle, critical_down, fourth_down }
    }
}

lazy_static! {
    /// Registry of per-archetype clock adjustments. `ClockStrategy::time_elapsed`
    /// consults this by exact archetype, falling back through
    /// [`CoachArchetype::fallback`] to `Balanced`, and finally to a
    /// placeholder zero-adjustment if even `Balanced` were ever missing.
    pub static ref CLOCK_REGISTRY: HashMap<CoachArchetype, ClockArchetypeAdjustment> = {
        let mut registry = HashMap::new();
        registry.insert(CoachArchetype::RunHeavy, ClockArchetypeAdjustment::new(4, 2, 0, 0, 0, 0));
        registry.insert(CoachArchetype::AirRaid, ClockArchetypeAdjustment::new(-3, 0, -2, -5, 0, 0));
        registry.insert(CoachArchetype::WestCoast, ClockArchetypeAdjustment::new(-1, 0, -1, 0, 0, 0));
        registry.insert(CoachArchetype::Balanced, ClockArchetypeAdjustment::new(0, 0, 0, 0, 0, 0));
        registry.insert(CoachArchetype::Conservative, ClockArchetypeAdjustment::new(2, 0, 0, 0, 1, 0));
        registry.insert(CoachArchetype::Aggressive, ClockArchetypeAdjustment::new(-2, 0, 0, 0, 0, 1));
        registry
    };
}

/// # `ClockStrategy` struct
///
/// A `ClockStrategy` computes the elapsed game time for a play. It is
/// stateless: every call takes the full situation as parameters, so a
/// single instance can be shared across an arbitrary number of games.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Serialize, Deserialize)]
pub struct ClockStrategy {}

impl ClockStrategy {
    /// Initialize a new ClockStrategy
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::clock::ClockStrategy;
    ///
    /// let my_strategy = ClockStrategy::new();
    /// ```
    pub fn new() -> ClockStrategy {
        ClockStrategy{}
    }

    /// Look up the clock adjustment for an archetype, following the
    /// fallback chain (exact -> balanced -> placeholder) documented on
    /// [`CoachArchetype::fallback`].
    fn adjustment_for(archetype: &CoachArchetype) -> ClockArchetypeAdjustment {
        if let Some(adjustment) = CLOCK_REGISTRY.get(archetype) {
            return *adjustment;
        }
        if let Some(fallback) = archetype.fallback() {
            if let Some(adjustment) = CLOCK_REGISTRY.get(&fallback) {
                return *adjustment;
            }
        }
        ClockArchetypeAdjustment::default()
    }

    /// Compute the elapsed game time, in seconds, for a play.
    ///
    /// Takes the result's own `play_duration()` as the base time, then
    /// layers the offense's archetype adjustment and the situational
    /// adjustments (score differential, two-minute warning, down/distance,
    /// field position) before clamping to `[8, 45]`. A play that stops the
    /// clock (incompletion, out of bounds, score, ...) still has elapsed
    /// time computed and subtracted here; whether the *following* play
    /// starts with a running or stopped clock is a property of the result
    /// itself, handled by `GameContext::next_half_seconds`.
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::clock::ClockStrategy;
    /// use fbsim_core::game::context::GameContext;
    /// use fbsim_core::game::play::call::PlayCall;
    /// use fbsim_core::game::play::result::run::RunResult;
    /// use fbsim_core::team::archetype::CoachArchetype;
    ///
    /// let context = GameContext::new();
    /// let result = RunResult::new();
    /// let strategy = ClockStrategy::new();
    /// let elapsed = strategy.time_elapsed(CoachArchetype::RunHeavy, PlayCall::Run, &result, &context);
    /// assert!(elapsed >= 8 && elapsed <= 45);
    /// ```
    pub fn time_elapsed(
        &self,
        archetype: CoachArchetype,
        play_call: PlayCall,
        result: &impl PlayResult,
        context: &GameContext
    ) -> u32 {
        let play_context = PlayContext::from(context);
        let adjustment = Self::adjustment_for(&archetype);

        let mut elapsed: i32 = result.play_duration() as i32 + adjustment.base;
        match play_call {
            PlayCall::Run => elapsed += adjustment.run,
            PlayCall::Pass => elapsed += adjustment.pass,
            _ => {}
        }
        if play_context.no_huddle(archetype) {
            elapsed += adjustment.no_huddle;
        }
        if play_context.critical_down() {
            elapsed += adjustment.critical_down;
        }
        if play_context.down() == 4 {
            elapsed += adjustment.fourth_down;
        }

        elapsed += Self::score_diff_adjustment(play_context.score_diff());
        elapsed += Self::two_minute_adjustment(&play_context);
        elapsed += Self::down_distance_adjustment(&play_context);
        elapsed += Self::field_position_adjustment(&play_context);

        elapsed.clamp(CLOCK_FLOOR_SECONDS as i32, CLOCK_CEIL_SECONDS as i32) as u32
    }

    /// Score differential situational adjustment
    fn score_diff_adjustment(score_diff: i32) -> i32 {
        if score_diff > SCORE_DIFF_BLOWOUT {
            ADJ_LEAD_BLOWOUT
        } else if score_diff >= SCORE_DIFF_LEAD_CLOSE {
            ADJ_LEAD_CLOSE
        } else if score_diff < -SCORE_DIFF_BLOWOUT {
            ADJ_TRAIL_BLOWOUT
        } else if score_diff <= -SCORE_DIFF_LEAD_CLOSE {
            ADJ_TRAIL_CLOSE
        } else {
            0
        }
    }

    /// Two-minute warning situational adjustment
    fn two_minute_adjustment(play_context: &PlayContext) -> i32 {
        if play_context.quarter() < 4 || play_context.half_seconds() >= TWO_MINUTE_WARNING_SECONDS {
            return 0;
        }
        if play_context.score_diff() > 0 {
            ADJ_TWO_MINUTE_LEADING
        } else if play_context.score_diff() < 0 {
            ADJ_TWO_MINUTE_TRAILING
        } else {
            0
        }
    }

    /// Down/distance situational adjustment
    fn down_distance_adjustment(play_context: &PlayContext) -> i32 {
        let mut adjustment = 0;
        if play_context.down() == 3 && play_context.distance() >= LONG_YARDAGE {
            adjustment += ADJ_THIRD_AND_LONG;
        }
        if play_context.down() == 4 {
            adjustment += ADJ_FOURTH_DOWN;
        }
        adjustment
    }

    /// Field position situational adjustment
    fn field_position_adjustment(play_context: &PlayContext) -> i32 {
        if play_context.goal_line() {
            ADJ_GOAL_LINE
        } else if play_context.red_zone() {
            ADJ_RED_ZONE
        } else {
            0
        }
    }
}

/// # `TimedPlayResult` struct
///
/// Wraps a borrowed `PlayResult` to override its `play_duration` with a
/// value computed by `ClockStrategy::time_elapsed`, delegating every other
/// method to the wrapped result unchanged. Lets the game-state manager
/// consult the clock strategy's elapsed time without each `*ResultSimulator`
/// needing to know about archetypes or situation at all.
pub struct TimedPlayResult<'a, R: PlayResult + ?Sized> {
    inner: &'a R,
    elapsed: u32
}

impl<'a, R: PlayResult + ?Sized> TimedPlayResult<'a, R> {
    /// Wrap a play result with a precomputed elapsed time.
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::clock::TimedPlayResult;
    /// use fbsim_core::game::play::result::{PlayResult, run::RunResult};
    ///
    /// let result = RunResult::new();
    /// let timed = TimedPlayResult::new(&result, 30);
    /// assert_eq!(timed.play_duration(), 30);
    /// ```
    pub fn new(inner: &'a R, elapsed: u32) -> TimedPlayResult<'a, R> {
        TimedPlayResult{ inner, elapsed }
    }
}

impl<'a, R: PlayResult + ?Sized> PlayResult for TimedPlayResult<'a, R> {
    fn play_duration(&self) -> u32 {
        self.elapsed
    }
    fn net_yards(&self) -> i32 {
        self.inner.net_yards()
    }
    fn turnover(&self) -> bool {
        self.inner.turnover()
    }
    fn offense_score(&self) -> ScoreResult {
        self.inner.offense_score()
    }
    fn defense_score(&self) -> ScoreResult {
        self.inner.defense_score()
    }
    fn offense_timeout(&self) -> bool {
        self.inner.offense_timeout()
    }
    fn defense_timeout(&self) -> bool {
        self.inner.defense_timeout()
    }
    fn incomplete(&self) -> bool {
        self.inner.incomplete()
    }
    fn out_of_bounds(&self) -> bool {
        self.inner.out_of_bounds()
    }
    fn touchback(&self) -> bool {
        self.inner.touchback()
    }
    fn kickoff(&self) -> bool {
        self.inner.kickoff()
    }
    fn punt(&self) -> bool {
        self.inner.punt()
    }
    fn next_play_kickoff(&self) -> bool {
        self.inner.next_play_kickoff()
    }
    fn next_play_extra_point(&self) -> bool {
        self.inner.next_play_extra_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::play::result::run::RunResult;

    #[test]
    fn test_clamp_floor_and_ceiling() {
        let context = GameContext::new();
        let result = RunResult::new();
        let strategy = ClockStrategy::new();
        let elapsed = strategy.time_elapsed(CoachArchetype::Balanced, PlayCall::Run, &result, &context);
        assert!((CLOCK_FLOOR_SECONDS..=CLOCK_CEIL_SECONDS).contains(&elapsed));
    }

    #[test]
    fn test_adjustment_for_falls_back_to_balanced() {
        let adjustment = ClockStrategy::adjustment_for(&CoachArchetype::RunHeavy);
        assert_eq!(adjustment, *CLOCK_REGISTRY.get(&CoachArchetype::RunHeavy).unwrap());
    }

    #[test]
    fn test_score_diff_adjustment_blowout_lead() {
        assert_eq!(ClockStrategy::score_diff_adjustment(21), ADJ_LEAD_BLOWOUT);
        assert_eq!(ClockStrategy::score_diff_adjustment(-21), ADJ_TRAIL_BLOWOUT);
        assert_eq!(ClockStrategy::score_diff_adjustment(3), 0);
    }

    #[test]
    fn test_timed_play_result_overrides_duration_only() {
        let result = RunResult::new();
        let timed = TimedPlayResult::new(&result, 30);
        assert_eq!(timed.play_duration(), 30);
        assert_eq!(timed.net_yards(), result.net_yards());
        assert_eq!(timed.turnover(), result.turnover());
    }

    #[test]
    fn test_every_archetype_resolves_in_registry() {
        for archetype in [
            CoachArchetype::RunHeavy, CoachArchetype::Balanced, CoachArchetype::AirRaid,
            CoachArchetype::WestCoast, CoachArchetype::Conservative, CoachArchetype::Aggressive
        ] {
            let _ = ClockStrategy::adjustment_for(&archetype);
        }
    }
}
