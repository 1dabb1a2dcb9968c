//! Coaching archetypes: the closed vocabulary of offensive philosophies that
//! parameterize both play-calling (`game::play::call`) and clock management
//! (`game::clock`).

use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

/// # `CoachArchetype` enum
///
/// A named coaching philosophy. Unknown or unparsable archetype identifiers
/// fall back to `Balanced` rather than failing - the play-call decider and
/// clock strategy must never error on a bad archetype string, only on
/// malformed structural configuration (see `game::error::GameError::Configuration`).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Serialize, Deserialize)]
pub enum CoachArchetype {
    RunHeavy,
    Balanced,
    AirRaid,
    WestCoast,
    Conservative,
    Aggressive,
}

impl Default for CoachArchetype {
    /// Default constructor for the CoachArchetype enum
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::team::archetype::CoachArchetype;
    ///
    /// let my_archetype = CoachArchetype::default();
    /// assert!(my_archetype == CoachArchetype::Balanced);
    /// ```
    fn default() -> Self {
        CoachArchetype::Balanced
    }
}

impl FromStr for CoachArchetype {
    type Err = std::convert::Infallible;

    /// Parse a `CoachArchetype` from a string identifier. Never fails:
    /// an unrecognized alias falls back to `Balanced`, matching the
    /// external-interface contract that archetype identifiers come from
    /// a closed vocabulary with "balanced" as the universal fallback.
    ///
    /// ### Example
    /// ```
    /// use std::str::FromStr;
    /// use fbsim_core::team::archetype::CoachArchetype;
    ///
    /// let my_archetype = CoachArchetype::from_str("air_raid").unwrap();
    /// assert!(my_archetype == CoachArchetype::AirRaid);
    ///
    /// let fallback = CoachArchetype::from_str("unknown").unwrap();
    /// assert!(fallback == CoachArchetype::Balanced);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "run_heavy" | "run-heavy" | "runheavy" => CoachArchetype::RunHeavy,
            "air_raid" | "air-raid" | "airraid" => CoachArchetype::AirRaid,
            "west_coast" | "west-coast" | "westcoast" => CoachArchetype::WestCoast,
            "conservative" => CoachArchetype::Conservative,
            "aggressive" => CoachArchetype::Aggressive,
            "balanced" => CoachArchetype::Balanced,
            _ => CoachArchetype::Balanced,
        })
    }
}

impl fmt::Display for CoachArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoachArchetype::RunHeavy => "run_heavy",
            CoachArchetype::Balanced => "balanced",
            CoachArchetype::AirRaid => "air_raid",
            CoachArchetype::WestCoast => "west_coast",
            CoachArchetype::Conservative => "conservative",
            CoachArchetype::Aggressive => "aggressive",
        };
        f.write_str(name)
    }
}

impl CoachArchetype {
    /// Resolve the next archetype in the fallback chain when a lookup for
    /// `self` is missing from a registry keyed by archetype. Every
    /// archetype but `Balanced` falls back to `Balanced`; `Balanced` has
    /// no further fallback (the registry must always define it).
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::team::archetype::CoachArchetype;
    ///
    /// assert!(CoachArchetype::AirRaid.fallback() == Some(CoachArchetype::Balanced));
    /// assert!(CoachArchetype::Balanced.fallback() == None);
    /// ```
    pub fn fallback(&self) -> Option<CoachArchetype> {
        match self {
            CoachArchetype::Balanced => None,
            _ => Some(CoachArchetype::Balanced),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_fallback() {
        assert_eq!(CoachArchetype::from_str("west_coast").unwrap(), CoachArchetype::WestCoast);
        assert_eq!(CoachArchetype::from_str("not-a-real-archetype").unwrap(), CoachArchetype::Balanced);
    }

    #[test]
    fn test_fallback_chain_terminates() {
        let mut current = CoachArchetype::Aggressive;
        let mut steps = 0;
        while let Some(next) = current.fallback() {
            current = next;
            steps += 1;
            assert!(steps <= 2, "fallback chain should terminate quickly");
        }
        assert_eq!(current, CoachArchetype::Balanced);
    }
}
