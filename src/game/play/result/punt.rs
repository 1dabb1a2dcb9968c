//! Punt resolution: blocks, landing spot inside/outside the 20, fair
//! catches, returns, muffs, and the rare punt-return touchdown.
use rand::Rng;
use serde::{Serialize, Deserialize};
use rand_distr::{Normal, Distribution, Exp, SkewNormal};

use crate::game::context::GameContext;
use crate::game::play::PlaySimulatable;
use crate::game::play::result::{PlayResult, PlayTypeResult, PlayResultSimulator, ScoreResult};

// Punt block probability regression
const P_BLOCK_INTR: f64 = -0.0010160286505995551_f64;
const P_BLOCK_COEF: f64 = 0.00703673_f64;

// Punt inside 20 skill-based probability regression
const P_PUNT_INSIDE_20_SKILL_INTR: f64 = 0.21398823243670145_f64;
const P_PUNT_INSIDE_20_SKILL_COEF: f64 = 0.32878206_f64;

// Punt inside 20 yard-line-based probability regression
const P_PUNT_INSIDE_20_YARD_LINE_PARAM_1: f64 = 0.783829627_f64;
const P_PUNT_INSIDE_20_YARD_LINE_PARAM_2: f64 = -0.200560110_f64;
const P_PUNT_INSIDE_20_YARD_LINE_PARAM_3: f64 = 0.651500015_f64;
const P_PUNT_INSIDE_20_YARD_LINE_PARAM_4: f64 = -0.00178251834_f64;

// Punt inside 20 mean relative distance regression
const PUNT_INSIDE_20_MEAN_REL_DIST_INTR: f64 = 0.20907739629135946_f64;
const PUNT_INSIDE_20_MEAN_REL_DIST_COEF: f64 = -0.0001755_f64;

// Punt inside 20 std relative distance regression
const PUNT_INSIDE_20_STD_REL_DIST_INTR: f64 = 0.17519244654293623_f64;
const PUNT_INSIDE_20_STD_REL_DIST_COEF: f64 = -0.0016178_f64;

// Punt inside 20 skew relative distance regression
const PUNT_INSIDE_20_SKEW_REL_DIST_INTR: f64 = 3.691739354624472_f64;
const PUNT_INSIDE_20_SKEW_REL_DIST_COEF_1: f64 = -0.11961015_f64;
const PUNT_INSIDE_20_SKEW_REL_DIST_COEF_2: f64 = 0.00081621_f64;

// Punt outside 20 mean relative distance regression
const PUNT_OUTSIDE_20_MEAN_REL_DIST_INTR: f64 = -0.24995460069957565_f64;
const PUNT_OUTSIDE_20_MEAN_REL_DIST_COEF_1: f64 = 0.0400507456_f64;
const PUNT_OUTSIDE_20_MEAN_REL_DIST_COEF_2: f64 = -0.000758718087_f64;
const PUNT_OUTSIDE_20_MEAN_REL_DIST_COEF_3: f64 = 0.00000442573043_f64;

// Punt outside 20 std relative distance regression
const PUNT_OUTSIDE_20_STD_REL_DIST_INTR: f64 = 0.2748076520973469_f64;
const PUNT_OUTSIDE_20_STD_REL_DIST_COEF: f64 = -0.00196699_f64;

// Punt outside 20 skew relative distance regression
const PUNT_OUTSIDE_20_SKEW_REL_DIST_INTR: f64 = -5.631745519232158_f64;
const PUNT_OUTSIDE_20_SKEW_REL_DIST_COEF_1: f64 = 0.19789058_f64;
const PUNT_OUTSIDE_20_SKEW_REL_DIST_COEF_2: f64 = -0.00134607_f64;

// Punt out of bounds probability regression
const P_PUNT_OOB_INTR: f64 = -0.0846243447082426_f64;
const P_PUNT_OOB_COEF_1: f64 = 0.00575805979_f64;
const P_PUNT_OOB_COEF_2: f64 = -0.0000428367831_f64;

// Punt fair catch probability regression
const P_FAIR_CATCH_INTR: f64 = 0.47613371173695526_f64;
const P_FAIR_CATCH_COEF: f64 = -0.00141214_f64;

// Punt muffed probability regression
const P_MUFFED_PUNT_INTR: f64 = 0.036855240326056096_f64;
const P_MUFFED_PUNT_COEF: f64 = -0.02771741_f64;

// Mean relative punt return yards regression
const MEAN_REL_RETURN_YARDS_INTR: f64 = -0.0570321871_f64;
const MEAN_REL_RETURN_YARDS_COEF_1: f64 = -0.02282631_f64;
const MEAN_REL_RETURN_YARDS_COEF_2: f64 = 0.28982747_f64;

// Std relative punt return yards regression
const STD_REL_RETURN_YARDS_INTR: f64 = 0.06751127059206394_f64;
const STD_REL_RETURN_YARDS_COEF_1: f64 = 0.01035858_f64;
const STD_REL_RETURN_YARDS_COEF_2: f64 = 0.26338509_f64;

// Skew relative punt return yards regression
const SKEW_REL_RETURN_YARDS_INTR: f64 = -0.0167472281_f64;
const SKEW_REL_RETURN_YARDS_COEF_1: f64 = 7.06931813_f64;
const SKEW_REL_RETURN_YARDS_COEF_2: f64 = -6.94528823_f64;

// Fumble probability regression
const P_FUMBLE_INTR: f64 = 0.0460047101408259_f64;
const P_FUMBLE_COEF: f64 = -0.04389777_f64;

// Punt play duration regression
const PUNT_PLAY_DURATION_INTR: f64 = 5.2792296_f64;
const PUNT_PLAY_DURATION_COEF: f64 = 0.09291598_f64;

/// # `PuntResultRaw` struct
///
/// A `PuntResultRaw` represents a result of a punt play prior to validation
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Serialize, Deserialize)]
pub struct PuntResultRaw {
    fumble_return_yards: i32,
    punt_yards: i32,
    punt_return_yards: i32,
    play_duration: u32,
    blocked: bool,
    touchback: bool,
    out_of_bounds: bool,
    fair_catch: bool,
    muffed: bool,
    fumble: bool,
    touchdown: bool
}

impl PuntResultRaw {
    pub fn validate(&self) -> Result<(), String> {
        // Ensure punt yards are no more than 100
        if self.punt_yards > 100 {
            return Err(
                format!(
                    "Punt yards is not in range [0, 100]: {}",
                    self.punt_yards
                )
            )
        }

        // Ensure punt return yards are no more than 100
        if self.punt_return_yards > 100 {
            return Err(
                format!(
                    "Punt return yards is not in range [0, 100]: {}",
                    self.punt_return_yards
                )
            )
        }

        // Ensure play duration is no more than 100 seconds
        if self.play_duration > 100 {
            return Err(
                format!(
                    "Play duration is not in range [0, 100]: {}",
                    self.play_duration
                )
            )
        }

        // Ensure fumble return yards are no more than 100
        if self.fumble_return_yards > 100 {
            return Err(
                format!(
                    "Fumble return yards is not in range [0, 100]: {}",
                    self.fumble_return_yards
                )
            )
        }

        // Ensure mutual exclusivity of touchback, oob, and fair catch
        if self.out_of_bounds && (self.fair_catch || self.touchback) ||
            (self.fair_catch && self.touchback) {
            return Err(
                format!(
                    "Must have at most one true across touchback ({}), out of bounds ({}), and fair catch ({})",
                    self.touchback, self.out_of_bounds, self.fair_catch
                )
            )
        }

        // A blocked punt cannot also touchback, go out of bounds, or be fair caught
        if self.blocked && (self.touchback || self.out_of_bounds || self.fair_catch) {
            return Err(
                format!(
                    "Cannot both block the punt and touchback ({}), out of bounds ({}), or fair catch ({})",
                    self.touchback, self.out_of_bounds, self.fair_catch
                )
            )
        }

        // Ensure not both touchdown and either touchback, oob, fair catch
        if self.touchdown && (self.touchback || self.out_of_bounds || self.fair_catch) {
            return Err(
                format!(
                    "Cannot both score a touchdown and touchback ({}), out of bounds ({}), or fair catch ({})",
                    self.touchback, self.out_of_bounds, self.fair_catch
                )
            )
        }
        Ok(())
    }
}

/// # `PuntResult` struct
///
/// A `PuntResult` represents a result of a punt play
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Serialize)]
pub struct PuntResult {
    fumble_return_yards: i32,
    punt_yards: i32,
    punt_return_yards: i32,
    play_duration: u32,
    blocked: bool,
    touchback: bool,
    out_of_bounds: bool,
    fair_catch: bool,
    muffed: bool,
    fumble: bool,
    touchdown: bool
}

impl TryFrom<PuntResultRaw> for PuntResult {
    type Error = String;

    fn try_from(item: PuntResultRaw) -> Result<Self, Self::Error> {
        // Validate the raw punt result
        match item.validate() {
            Ok(()) => (),
            Err(error) => return Err(error),
        };

        // If valid, then convert
        Ok(
            PuntResult{
                fumble_return_yards: item.fumble_return_yards,
                punt_yards: item.punt_yards,
                punt_return_yards: item.punt_return_yards,
                play_duration: item.play_duration,
                blocked: item.blocked,
                touchback: item.touchback,
                out_of_bounds: item.out_of_bounds,
                fair_catch: item.fair_catch,
                muffed: item.muffed,
                fumble: item.fumble,
                touchdown: item.touchdown
            }
        )
    }
}

impl<'de> Deserialize<'de> for PuntResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Only deserialize if the conversion from raw succeeds
        let raw = PuntResultRaw::deserialize(deserializer)?;
        PuntResult::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Default for PuntResult {
    /// Default constructor for the PuntResult class
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResult;
    ///
    /// let my_result = PuntResult::default();
    /// ```
    fn default() -> Self {
        PuntResult{
            fumble_return_yards: 0,
            punt_yards: 0,
            punt_return_yards: 0,
            play_duration: 0,
            blocked: false,
            touchback: false,
            out_of_bounds: false,
            fair_catch: false,
            muffed: false,
            fumble: false,
            touchdown: false
        }
    }
}

impl std::fmt::Display for PuntResult {
    /// Format a `PuntResult` as a string.
    ///
    /// ### Example
    ///
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResult;
    ///
    /// let my_result = PuntResult::default();
    /// println!("{}", my_result);
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.blocked {
            return f.write_str("Punt BLOCKED!");
        }
        let distance_str = format!("Punt {} yards", self.punt_yards);
        let landing_suffix = if self.touchback {
            " for a touchback."
        } else if self.out_of_bounds {
            " out of bounds."
        } else if self.fair_catch {
            " for a fair catch."
        } else if self.muffed {
            " MUFFED by the return man."
        } else {
            " fielded."
        };
        let return_str = if !(
            self.touchback || self.out_of_bounds || self.fair_catch || self.muffed
        ) {
            format!(" Returned {} yards.", self.punt_return_yards)
        } else {
            String::from("")
        };
        let fumble_str = if self.fumble {
            format!(" FUMBLED recovered by the punting team, returned {} yards.", self.fumble_return_yards)
        } else {
            String::from("")
        };
        let touchdown_str = if self.touchdown {
            " TOUCHDOWN!"
        } else {
            ""
        };
        let punt_str = format!(
            "{}{}{}{}{}",
            &distance_str,
            landing_suffix,
            &return_str,
            &fumble_str,
            &touchdown_str
        );
        f.write_str(punt_str.trim())
    }
}

impl PlayResult for PuntResult {
    fn next_context(&self, context: &GameContext) -> GameContext {
        context.next_context(self)
    }

    fn play_duration(&self) -> u32 {
        self.play_duration
    }

    fn net_yards(&self) -> i32 {
        self.punt_yards - self.punt_return_yards - self.fumble_return_yards
    }

    fn turnover(&self) -> bool {
        // In this case, turnover means change of possession
        // Usually fumble means turnover but in this case fumble means no change of possession
        !self.fumble
    }

    fn offense_score(&self) -> ScoreResult {
        if self.touchdown && self.fumble {
            return ScoreResult::Touchdown;
        }
        ScoreResult::None
    }

    fn defense_score(&self) -> ScoreResult {
        if self.touchdown && !self.fumble {
            return ScoreResult::Touchdown;
        }
        ScoreResult::None
    }

    fn offense_timeout(&self) -> bool { false }

    fn defense_timeout(&self) -> bool { false }

    fn incomplete(&self) -> bool { false }

    fn out_of_bounds(&self) -> bool {
        self.out_of_bounds
    }

    fn touchback(&self) -> bool {
        self.touchback
    }

    fn punt(&self) -> bool { true }

    fn next_play_kickoff(&self) -> bool { false }

    fn next_play_extra_point(&self) -> bool {
        self.touchdown
    }
}

impl PuntResult {
    /// Initialize a new punt result
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResult;
    ///
    /// let my_res = PuntResult::new();
    /// ```
    pub fn new() -> PuntResult {
        PuntResult::default()
    }

    /// Get a punt result's fumble_return_yards property
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResult;
    ///
    /// let my_res = PuntResult::new();
    /// let fumble_return_yards = my_res.fumble_return_yards();
    /// assert!(fumble_return_yards == 0);
    /// ```
    pub fn fumble_return_yards(&self) -> i32 {
        self.fumble_return_yards
    }

    /// Get a punt result's punt_yards property
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResult;
    ///
    /// let my_res = PuntResult::new();
    /// let punt_yards = my_res.punt_yards();
    /// assert!(punt_yards == 0);
    /// ```
    pub fn punt_yards(&self) -> i32 {
        self.punt_yards
    }

    /// Get a punt result's punt_return_yards property
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResult;
    ///
    /// let my_res = PuntResult::new();
    /// let punt_return_yards = my_res.punt_return_yards();
    /// assert!(punt_return_yards == 0);
    /// ```
    pub fn punt_return_yards(&self) -> i32 {
        self.punt_return_yards
    }

    /// Get a punt result's play_duration property
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResult;
    ///
    /// let my_res = PuntResult::new();
    /// let play_duration = my_res.play_duration();
    /// assert!(play_duration == 0);
    /// ```
    pub fn play_duration(&self) -> u32 {
        self.play_duration
    }

    /// Get a punt result's blocked property
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResult;
    ///
    /// let my_res = PuntResult::new();
    /// let blocked = my_res.blocked();
    /// assert!(!blocked);
    /// ```
    pub fn blocked(&self) -> bool {
        self.blocked
    }

    /// Get a punt result's touchback property
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResult;
    ///
    /// let my_res = PuntResult::new();
    /// let touchback = my_res.touchback();
    /// assert!(!touchback);
    /// ```
    pub fn touchback(&self) -> bool {
        self.touchback
    }

    /// Get a punt result's out_of_bounds property
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResult;
    ///
    /// let my_res = PuntResult::new();
    /// let out_of_bounds = my_res.out_of_bounds();
    /// assert!(!out_of_bounds);
    /// ```
    pub fn out_of_bounds(&self) -> bool {
        self.out_of_bounds
    }

    /// Get a punt result's fair_catch property
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResult;
    ///
    /// let my_res = PuntResult::new();
    /// let fair_catch = my_res.fair_catch();
    /// assert!(!fair_catch);
    /// ```
    pub fn fair_catch(&self) -> bool {
        self.fair_catch
    }

    /// Get a punt result's muffed property
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResult;
    ///
    /// let my_res = PuntResult::new();
    /// let muffed = my_res.muffed();
    /// assert!(!muffed);
    /// ```
    pub fn muffed(&self) -> bool {
        self.muffed
    }

    /// Get a punt result's fumble property
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResult;
    ///
    /// let my_res = PuntResult::new();
    /// let fumble = my_res.fumble();
    /// assert!(!fumble);
    /// ```
    pub fn fumble(&self) -> bool {
        self.fumble
    }

    /// Get a punt result's touchdown property
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResult;
    ///
    /// let my_res = PuntResult::new();
    /// let touchdown = my_res.touchdown();
    /// assert!(!touchdown);
    /// ```
    pub fn touchdown(&self) -> bool {
        self.touchdown
    }
}

/// # `PuntResultBuilder` struct
///
/// A `PuntResultBuilder` is a builder pattern implementation for the
/// `PuntResult` struct.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Serialize)]
pub struct PuntResultBuilder {
    fumble_return_yards: i32,
    punt_yards: i32,
    punt_return_yards: i32,
    play_duration: u32,
    blocked: bool,
    touchback: bool,
    out_of_bounds: bool,
    fair_catch: bool,
    muffed: bool,
    fumble: bool,
    touchdown: bool
}

impl Default for PuntResultBuilder {
    /// Default constructor for the PuntResultBuilder class
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResultBuilder;
    ///
    /// let my_builder = PuntResultBuilder::default();
    /// ```
    fn default() -> Self {
        PuntResultBuilder{
            fumble_return_yards: 0,
            punt_yards: 0,
            punt_return_yards: 0,
            play_duration: 0,
            blocked: false,
            touchback: false,
            out_of_bounds: false,
            fair_catch: false,
            muffed: false,
            fumble: false,
            touchdown: false
        }
    }
}

impl PuntResultBuilder {
    /// Initialize a new PuntResultBuilder
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResultBuilder;
    ///
    /// let my_builder = PuntResultBuilder::new();
    /// ```
    pub fn new() -> PuntResultBuilder {
        PuntResultBuilder::default()
    }

    /// Set the fumble_return_yards property
    pub fn fumble_return_yards(mut self, fumble_return_yards: i32) -> Self {
        self.fumble_return_yards = fumble_return_yards;
        self
    }

    /// Set the punt_yards property
    pub fn punt_yards(mut self, punt_yards: i32) -> Self {
        self.punt_yards = punt_yards;
        self
    }

    /// Set the punt_return_yards property
    pub fn punt_return_yards(mut self, punt_return_yards: i32) -> Self {
        self.punt_return_yards = punt_return_yards;
        self
    }

    /// Set the play_duration property
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResultBuilder;
    ///
    /// let my_result = PuntResultBuilder::new()
    ///     .play_duration(7)
    ///     .build()
    ///     .unwrap();
    /// assert!(my_result.play_duration() == 7);
    /// ```
    pub fn play_duration(mut self, play_duration: u32) -> Self {
        self.play_duration = play_duration;
        self
    }

    /// Set the blocked property
    pub fn blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }

    /// Set the touchback property
    pub fn touchback(mut self, touchback: bool) -> Self {
        self.touchback = touchback;
        self
    }

    /// Set the out_of_bounds property
    pub fn out_of_bounds(mut self, out_of_bounds: bool) -> Self {
        self.out_of_bounds = out_of_bounds;
        self
    }

    /// Set the fair_catch property
    pub fn fair_catch(mut self, fair_catch: bool) -> Self {
        self.fair_catch = fair_catch;
        self
    }

    /// Set the muffed property
    pub fn muffed(mut self, muffed: bool) -> Self {
        self.muffed = muffed;
        self
    }

    /// Set the fumble property
    pub fn fumble(mut self, fumble: bool) -> Self {
        self.fumble = fumble;
        self
    }

    /// Set the touchdown property
    pub fn touchdown(mut self, touchdown: bool) -> Self {
        self.touchdown = touchdown;
        self
    }

    /// Build the PuntResult
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResultBuilder;
    ///
    /// let my_result = PuntResultBuilder::new()
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn build(self) -> Result<PuntResult, String> {
        let raw = PuntResultRaw{
            fumble_return_yards: self.fumble_return_yards,
            punt_yards: self.punt_yards,
            punt_return_yards: self.punt_return_yards,
            play_duration: self.play_duration,
            blocked: self.blocked,
            touchback: self.touchback,
            out_of_bounds: self.out_of_bounds,
            fair_catch: self.fair_catch,
            muffed: self.muffed,
            fumble: self.fumble,
            touchdown: self.touchdown
        };
        PuntResult::try_from(raw)
    }
}

/// # `PuntResultSimulator` struct
///
/// A `PuntResultSimulator` represents a simulator which can produce a result of a punt
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Serialize, Deserialize)]
pub struct PuntResultSimulator {}

impl PuntResultSimulator {
    /// Initialize a new PuntResultSimulator
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::game::play::result::punt::PuntResultSimulator;
    ///
    /// let my_sim = PuntResultSimulator::new();
    /// ```
    pub fn new() -> PuntResultSimulator {
        PuntResultSimulator{}
    }

    /// Generates whether the punt was blocked
    fn blocked(&self, norm_blocking: f64, rng: &mut impl Rng) -> bool {
        let p_block: f64 = 1_f64.min(0_f64.max(
            P_BLOCK_INTR + (P_BLOCK_COEF * norm_blocking)
        ));
        rng.gen::<f64>() < p_block
    }

    /// Generates whether the punt landed inside the receiving team's 20
    fn inside_20(&self, norm_punting: f64, yard_line: u32, rng: &mut impl Rng) -> bool {
        let p_skill: f64 = 1_f64.min(0_f64.max(
            P_PUNT_INSIDE_20_SKILL_INTR + (P_PUNT_INSIDE_20_SKILL_COEF * norm_punting)
        ));
        let yard_line_f: f64 = yard_line as f64;
        let p_yard_line: f64 = 1_f64.min(0_f64.max(
            P_PUNT_INSIDE_20_YARD_LINE_PARAM_1 +
                (P_PUNT_INSIDE_20_YARD_LINE_PARAM_2 * yard_line_f) +
                (P_PUNT_INSIDE_20_YARD_LINE_PARAM_3 * yard_line_f.powi(2) / 100_f64) +
                (P_PUNT_INSIDE_20_YARD_LINE_PARAM_4 * yard_line_f.powi(3) / 100_f64)
        ));
        rng.gen::<f64>() < (0.5_f64 * p_skill + 0.5_f64 * p_yard_line)
    }

    /// Generates the punt's relative landing distance (as a fraction of the
    /// field remaining between the line of scrimmage and the end zone)
    fn relative_distance(&self, norm_punting: f64, field_remaining: f64, inside_20: bool, rng: &mut impl Rng) -> f64 {
        let mean_rel_dist: f64 = if inside_20 {
            PUNT_INSIDE_20_MEAN_REL_DIST_INTR + (PUNT_INSIDE_20_MEAN_REL_DIST_COEF * field_remaining)
        } else {
            PUNT_OUTSIDE_20_MEAN_REL_DIST_INTR +
                (PUNT_OUTSIDE_20_MEAN_REL_DIST_COEF_1 * norm_punting) +
                (PUNT_OUTSIDE_20_MEAN_REL_DIST_COEF_2 * field_remaining) +
                (PUNT_OUTSIDE_20_MEAN_REL_DIST_COEF_3 * field_remaining.powi(2))
        };
        let std_rel_dist: f64 = if inside_20 {
            PUNT_INSIDE_20_STD_REL_DIST_INTR + (PUNT_INSIDE_20_STD_REL_DIST_COEF * field_remaining)
        } else {
            PUNT_OUTSIDE_20_STD_REL_DIST_INTR + (PUNT_OUTSIDE_20_STD_REL_DIST_COEF * field_remaining)
        };
        let skew_rel_dist: f64 = if inside_20 {
            PUNT_INSIDE_20_SKEW_REL_DIST_INTR +
                (PUNT_INSIDE_20_SKEW_REL_DIST_COEF_1 * norm_punting) +
                (PUNT_INSIDE_20_SKEW_REL_DIST_COEF_2 * field_remaining)
        } else {
            PUNT_OUTSIDE_20_SKEW_REL_DIST_INTR +
                (PUNT_OUTSIDE_20_SKEW_REL_DIST_COEF_1 * norm_punting) +
                (PUNT_OUTSIDE_20_SKEW_REL_DIST_COEF_2 * field_remaining)
        };
        let rel_dist_dist = SkewNormal::new(mean_rel_dist, std_rel_dist.abs().max(0.01), skew_rel_dist).unwrap();
        0_f64.max(1_f64.min(rel_dist_dist.sample(rng)))
    }

    /// Generates whether the punt went out of bounds
    fn out_of_bounds(&self, norm_punting: f64, field_remaining: f64, rng: &mut impl Rng) -> bool {
        let p_oob: f64 = 1_f64.min(0_f64.max(
            P_PUNT_OOB_INTR + (P_PUNT_OOB_COEF_1 * norm_punting) + (P_PUNT_OOB_COEF_2 * field_remaining)
        ));
        rng.gen::<f64>() < p_oob
    }

    /// Generates whether a fair catch was called on the punt
    fn fair_catch(&self, norm_diff_returning: f64, rng: &mut impl Rng) -> bool {
        let p_fair_catch: f64 = 1_f64.min(0_f64.max(
            P_FAIR_CATCH_INTR + (P_FAIR_CATCH_COEF * norm_diff_returning)
        ));
        rng.gen::<f64>() < p_fair_catch
    }

    /// Generates whether the punt was muffed by the return man
    fn muffed(&self, norm_diff_returning: f64, rng: &mut impl Rng) -> bool {
        let p_muffed: f64 = 1_f64.min(0_f64.max(
            P_MUFFED_PUNT_INTR + (P_MUFFED_PUNT_COEF * norm_diff_returning)
        ));
        rng.gen::<f64>() < p_muffed
    }

    /// Generates the punt return yards as a fraction of the punt distance,
    /// scaled to absolute yards by the caller
    fn relative_return_yards(&self, norm_diff_returning: f64, punt_distance_f: f64, rng: &mut impl Rng) -> f64 {
        let mean_rel_return: f64 = MEAN_REL_RETURN_YARDS_INTR +
            (MEAN_REL_RETURN_YARDS_COEF_1 * punt_distance_f) +
            (MEAN_REL_RETURN_YARDS_COEF_2 * norm_diff_returning);
        let std_rel_return: f64 = STD_REL_RETURN_YARDS_INTR +
            (STD_REL_RETURN_YARDS_COEF_1 * punt_distance_f) +
            (STD_REL_RETURN_YARDS_COEF_2 * norm_diff_returning);
        let skew_rel_return: f64 = SKEW_REL_RETURN_YARDS_INTR +
            (SKEW_REL_RETURN_YARDS_COEF_1 * norm_diff_returning) +
            (SKEW_REL_RETURN_YARDS_COEF_2 * norm_diff_returning.powi(2));
        let rel_return_dist = SkewNormal::new(mean_rel_return, std_rel_return.abs().max(0.01), skew_rel_return).unwrap();
        rel_return_dist.sample(rng)
    }

    /// Generates whether a fumble occurred on the punt return
    fn fumble(&self, norm_diff_returning: f64, rng: &mut impl Rng) -> bool {
        let p_fumble: f64 = 1_f64.min(0_f64.max(
            P_FUMBLE_INTR + (P_FUMBLE_COEF * norm_diff_returning)
        ));
        rng.gen::<f64>() < p_fumble
    }

    /// Generates the fumble recovery return yards
    fn fumble_return_yards(&self, rng: &mut impl Rng) -> i32 {
        Exp::new(1_f64).unwrap().sample(rng).round() as i32
    }

    /// Generates the duration of the punt play in seconds
    fn play_duration(&self, total_yards: u32, rng: &mut impl Rng) -> u32 {
        let mean_duration: f64 = PUNT_PLAY_DURATION_INTR + (PUNT_PLAY_DURATION_COEF * total_yards as f64);
        let duration_dist = Normal::new(mean_duration, 2_f64).unwrap();
        u32::try_from(duration_dist.sample(rng).round() as i32).unwrap_or_default()
    }
}

impl PlayResultSimulator for PuntResultSimulator {
    /// Simulate a punt
    ///
    /// ### Example
    /// ```
    /// use fbsim_core::team::FootballTeam;
    /// use fbsim_core::game::context::GameContext;
    /// use fbsim_core::game::play::result::PlayResultSimulator;
    /// use fbsim_core::game::play::result::punt::PuntResultSimulator;
    ///
    /// // Initialize home & away teams
    /// let my_off = FootballTeam::new();
    /// let my_def = FootballTeam::new();
    ///
    /// // Initialize a game context
    /// let my_context = GameContext::new();
    ///
    /// // Initialize a punt simulator and simulate a punt
    /// let my_sim = PuntResultSimulator::new();
    /// let mut rng = rand::thread_rng();
    /// let my_res = my_sim.sim(&my_off, &my_def, &my_context, &mut rng);
    /// ```
    fn sim(&self, offense: &impl PlaySimulatable, defense: &impl PlaySimulatable, context: &GameContext, rng: &mut impl Rng) -> PlayTypeResult {
        // Calculate normalized skill diffs & skill levels
        let norm_punting: f64 = offense.offense().punting() as f64 / 100_f64;
        let norm_blocking: f64 = 0.5_f64 + ((defense.defense().blitzing() as f64 - offense.offense().blocking() as f64) / 200_f64);
        let norm_diff_returning: f64 = 0.5_f64 + ((defense.defense().kick_returning() as f64 - offense.offense().kick_return_defense() as f64) / 200_f64);
        let yard_line: u32 = context.yard_line();
        let field_remaining: f64 = context.yards_to_touchdown() as f64;
        let td_yards: i32 = context.yards_to_touchdown();
        let safety_yards: i32 = context.yards_to_safety();

        // Generate whether the punt was blocked
        let blocked: bool = self.blocked(norm_blocking, rng);

        // Generate whether the punt landed inside the receiving team's 20
        let inside_20: bool = if !blocked {
            self.inside_20(norm_punting, yard_line, rng)
        } else {
            false
        };

        // Generate the punt distance, capped so it cannot cross the goal line
        let punt_distance: i32 = if !blocked {
            let rel_dist = self.relative_distance(norm_punting, field_remaining, inside_20, rng);
            td_yards.min((rel_dist * field_remaining).round() as i32)
        } else {
            0
        };

        // Generate whether the punt went out of bounds
        let out_of_bounds: bool = if !blocked {
            self.out_of_bounds(norm_punting, field_remaining, rng)
        } else {
            false
        };

        // A punt that reaches the goal line without going out of bounds is a touchback
        let touchback: bool = !blocked && !out_of_bounds && punt_distance >= td_yards;

        // Generate whether a fair catch was called
        let fair_catch: bool = if !(blocked || out_of_bounds || touchback) {
            self.fair_catch(norm_diff_returning, rng)
        } else {
            false
        };

        // Generate whether the punt was muffed by the return man
        let muffed: bool = if !(blocked || out_of_bounds || touchback || fair_catch) {
            self.muffed(norm_diff_returning, rng)
        } else {
            false
        };

        // Generate the punt return yards
        let punt_return_yards: i32 = if !(blocked || out_of_bounds || touchback || fair_catch || muffed) {
            let punt_distance_f = punt_distance as f64;
            let rel_return = self.relative_return_yards(norm_diff_returning, punt_distance_f, rng);
            (rel_return * punt_distance_f).round() as i32
        } else {
            0
        };

        // Generate whether a fumble occurred on the return
        let fumble: bool = if !(blocked || out_of_bounds || touchback || fair_catch || muffed) {
            self.fumble(norm_diff_returning, rng)
        } else {
            false
        };

        // Generate the fumble return yards
        let fumble_return_yards: i32 = if fumble {
            self.fumble_return_yards(rng)
        } else {
            0
        };

        // Generate the duration of the punt play in seconds
        let total_yards: u32 = punt_distance.unsigned_abs() + punt_return_yards.unsigned_abs() + fumble_return_yards.unsigned_abs();
        let play_duration: u32 = if blocked {
            0
        } else {
            self.play_duration(total_yards, rng)
        };

        // Check whether a touchdown occurred, either on the return or on a
        // recovered muff/fumble by the punting team
        let touchdown: bool = if muffed || fumble {
            false
        } else if !(blocked || out_of_bounds || touchback || fair_catch) {
            punt_distance - punt_return_yards < safety_yards
        } else {
            false
        };

        let raw = PuntResultRaw{
            fumble_return_yards,
            punt_yards: punt_distance,
            punt_return_yards,
            play_duration,
            blocked,
            touchback,
            out_of_bounds,
            fair_catch,
            muffed,
            fumble,
            touchdown
        };
        let punt_res = PuntResult::try_from(raw).unwrap();
        PlayTypeResult::Punt(punt_res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::context::GameContext;
    use crate::team::FootballTeam;

    #[test]
    fn test_punt_result_builder_defaults() {
        let result = PuntResultBuilder::new().build().unwrap();
        assert_eq!(result.punt_yards(), 0);
        assert!(!result.touchdown());
    }

    #[test]
    fn test_punt_result_rejects_conflicting_landing_spots() {
        let result = PuntResultBuilder::new()
            .touchback(true)
            .fair_catch(true)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_punt_result_turnover_is_possession_change() {
        let result = PuntResultBuilder::new().punt_yards(40).build().unwrap();
        assert!(result.turnover());
    }

    #[test]
    fn test_sim_produces_nonnegative_total_yards() {
        let offense = FootballTeam::new();
        let defense = FootballTeam::new();
        let context = GameContext::new();
        let sim = PuntResultSimulator::new();
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let result = sim.sim(&offense, &defense, &context, &mut rng);
            if let PlayTypeResult::Punt(punt) = result {
                assert!(punt.punt_yards() >= 0);
                assert!(punt.punt_return_yards() >= 0);
            } else {
                panic!("expected a Punt result");
            }
        }
    }
}
