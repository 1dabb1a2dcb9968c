//! The personnel selector: chooses an offensive/defensive formation from
//! the play call and situation, and packages it with the rating bundles
//! the matchup math consults. This crate operates exclusively in
//! team-rating mode - no individual player roster is modeled anywhere in
//! the corpus this was grounded on - so the "eleven players per side" of
//! the regression literature collapses to the offense/defense/coach rating
//! bundles already on `FootballTeam`; this module adds only the formation
//! tag and exposes it together with those bundles as a `PersonnelPackage`.
use serde::{Serialize, Deserialize};

use crate::game::play::PlaySimulatable;
use crate::game::play::call::PlayCall;
use crate::game::play::context::PlayContext;
use crate::team::coach::FootballTeamCoach;
use crate::team::defense::FootballTeamDefense;
use crate::team::offense::FootballTeamOffense;

/// # `Formation` enum
///
/// An offensive or defensive formation, selected from the play call and
/// the situation it was called in.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Serialize, Deserialize)]
pub enum Formation {
    /// Condensed short-yardage run package
    GoalLine,
    /// I-formation run package
    IFormation,
    /// Spread run/pass package favoring space over power
    ShotgunSpread,
    /// Standard balanced run/pass package
    Standard,
    /// Defensive prevent shell
    Prevent,
    /// Field goal / extra point unit
    FieldGoalUnit,
    /// Punt unit
    PuntUnit,
    /// Kickoff unit
    KickoffUnit
}

impl Formation {
    /// Select the offensive formation for a play call and situation.
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::context::GameContext;
    /// use fbsim_core::game::personnel::Formation;
    /// use fbsim_core::game::play::call::PlayCall;
    /// use fbsim_core::game::play::context::PlayContext;
    ///
    /// let context = PlayContext::from(&GameContext::new());
    /// let formation = Formation::select_offense(PlayCall::Run, &context);
    /// assert_eq!(formation, Formation::Standard);
    /// ```
    pub fn select_offense(play_call: PlayCall, context: &PlayContext) -> Formation {
        match play_call {
            PlayCall::FieldGoal | PlayCall::ExtraPoint => Formation::FieldGoalUnit,
            PlayCall::Punt => Formation::PuntUnit,
            PlayCall::Kickoff => Formation::KickoffUnit,
            PlayCall::QbKneel | PlayCall::QbSpike => Formation::Standard,
            PlayCall::Run => {
                if context.goal_line() {
                    Formation::GoalLine
                } else if context.distance() <= 2 {
                    Formation::IFormation
                } else {
                    Formation::Standard
                }
            },
            PlayCall::Pass => {
                if context.down() == 3 && context.distance() >= 7 {
                    Formation::ShotgunSpread
                } else {
                    Formation::Standard
                }
            }
        }
    }

    /// Select the defensive formation for a situation. The only deviation
    /// from the standard package modeled is a prevent shell when the
    /// defense is protecting a lead late in the half.
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::context::GameContext;
    /// use fbsim_core::game::personnel::Formation;
    /// use fbsim_core::game::play::context::PlayContext;
    ///
    /// let context = PlayContext::from(&GameContext::new());
    /// let formation = Formation::select_defense(&context);
    /// assert_eq!(formation, Formation::Standard);
    /// ```
    pub fn select_defense(context: &PlayContext) -> Formation {
        if context.defense_conserve_clock() {
            Formation::Prevent
        } else {
            Formation::Standard
        }
    }
}

/// # `PersonnelPackage` struct
///
/// The on-field personnel for one team on one play: a formation tag plus
/// the rating bundles the matchup matrix engine reads attribute sets from.
/// Ephemeral - constructed fresh for each play, not retained across the
/// drive.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct PersonnelPackage<'a> {
    formation: Formation,
    coach: &'a FootballTeamCoach,
    offense: &'a FootballTeamOffense,
    defense: &'a FootballTeamDefense
}

impl<'a> PersonnelPackage<'a> {
    /// Get the package's formation
    pub fn formation(&self) -> Formation {
        self.formation
    }

    /// Borrow the package's coach rating bundle
    pub fn coach(&self) -> &FootballTeamCoach {
        self.coach
    }

    /// Borrow the package's offense rating bundle
    pub fn offense(&self) -> &FootballTeamOffense {
        self.offense
    }

    /// Borrow the package's defense rating bundle
    pub fn defense(&self) -> &FootballTeamDefense {
        self.defense
    }
}

/// # `PersonnelSelector` struct
///
/// A stateless selector that builds offensive and defensive
/// `PersonnelPackage`s for a play. Fatigue decrement (applying wear to
/// selected players after a play) is out of scope in team-rating mode:
/// there is no per-player state to decrement, only the team-level rating
/// bundle, which does not degrade within a single game.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Serialize, Deserialize)]
pub struct PersonnelSelector {}

impl PersonnelSelector {
    /// Initialize a new PersonnelSelector
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::personnel::PersonnelSelector;
    ///
    /// let my_selector = PersonnelSelector::new();
    /// ```
    pub fn new() -> PersonnelSelector {
        PersonnelSelector{}
    }

    /// Select the offense's personnel package for a play call and situation.
    pub fn select_offense<'a>(
        &self,
        offense: &'a impl PlaySimulatable,
        play_call: PlayCall,
        context: &PlayContext
    ) -> PersonnelPackage<'a> {
        PersonnelPackage{
            formation: Formation::select_offense(play_call, context),
            coach: offense.coach(),
            offense: offense.offense(),
            defense: offense.defense()
        }
    }

    /// Select the defense's personnel package for a situation.
    pub fn select_defense<'a>(
        &self,
        defense: &'a impl PlaySimulatable,
        context: &PlayContext
    ) -> PersonnelPackage<'a> {
        PersonnelPackage{
            formation: Formation::select_defense(context),
            coach: defense.coach(),
            offense: defense.offense(),
            defense: defense.defense()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::context::{GameContext, GameContextBuilder};
    use crate::team::FootballTeam;

    #[test]
    fn test_select_offense_goal_line() {
        let context = PlayContext::from(
            &GameContextBuilder::new().yard_line(95).distance(10).build().unwrap()
        );
        assert_eq!(Formation::select_offense(PlayCall::Run, &context), Formation::GoalLine);
    }

    #[test]
    fn test_select_offense_shotgun_on_third_and_long() {
        let context = PlayContext::from(
            &GameContextBuilder::new().down(3).distance(9).build().unwrap()
        );
        assert_eq!(Formation::select_offense(PlayCall::Pass, &context), Formation::ShotgunSpread);
    }

    #[test]
    fn test_personnel_selector_packages_ratings() {
        let team = FootballTeam::new();
        let context = PlayContext::from(&GameContext::new());
        let selector = PersonnelSelector::new();
        let package = selector.select_offense(&team, PlayCall::Run, &context);
        assert_eq!(package.offense().overall(), team.offense().overall());
    }
}
