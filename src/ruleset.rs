//! Ruleset configuration.
//!
//! Every free function in the crate runs under [`Ruleset::STANDARD`]. A
//! `Ruleset` loaded from JSON exposes the same queries for a tuned variant;
//! both sides of a battle must agree on the ruleset and on
//! [`RULES_VERSION`], or their verdicts diverge.

use serde::{Deserialize, Serialize};

use crate::board::season::{season_for_turn_with, turns_left_in_season_with};
use crate::board::{Board, InputError, Position, Season, Side, UnitClass, STANDARD_TURNS_PER_SEASON};
use crate::combat::bonus::{compute_bonuses_with, Bonuses};
use crate::movegen::deploy::{can_deploy_with, legal_deployments_with, DeployError};
use crate::movegen::engage::{can_engage_with, Engagement};
use crate::movegen::{legal_actions_with, random_action_with, Action};
use crate::movegen::movement::{can_move, MoveEffect, MoveError};

/// Version of the rule semantics implemented by this crate.
pub const RULES_VERSION: u32 = 1;

/// Errors loading a ruleset.
#[derive(Debug, thiserror::Error)]
pub enum RulesetError {
    #[error("failed to parse ruleset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read ruleset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("turns_per_season must be at least 1")]
    ZeroSeasonLength,

    #[error("bonus weight {field} = {value} is outside 0..=1000")]
    WeightOutOfRange { field: &'static str, value: i32 },
}

/// Upper bound for every bonus weight accepted by [`Ruleset::validate`].
pub const MAX_BONUS_WEIGHT: i32 = 1000;

/// Per-neighbour contributions used by the combat bonus calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusWeights {
    /// Added to attack when own attack beats the neighbour's defense.
    pub attack_advantage: i32,
    /// Subtracted from attack when own attack is below the neighbour's defense.
    pub attack_disadvantage: i32,
    pub speed_advantage: i32,
    /// Defense gained per neighbour of the same class.
    pub class_synergy: i32,
    /// Attack/defense/speed gained per neighbour when the unit itself is Support.
    pub support_self: i32,
    /// Attack/defense gained per Support neighbour.
    pub support_neighbor: i32,
}

impl BonusWeights {
    pub const STANDARD: BonusWeights = BonusWeights {
        attack_advantage: 5,
        attack_disadvantage: 3,
        speed_advantage: 3,
        class_synergy: 5,
        support_self: 2,
        support_neighbor: 3,
    };

    fn named(&self) -> [(&'static str, i32); 6] {
        [
            ("attack_advantage", self.attack_advantage),
            ("attack_disadvantage", self.attack_disadvantage),
            ("speed_advantage", self.speed_advantage),
            ("class_synergy", self.class_synergy),
            ("support_self", self.support_self),
            ("support_neighbor", self.support_neighbor),
        ]
    }

    /// Weights are magnitudes; the calculator applies the signs.
    pub fn validate(&self) -> Result<(), RulesetError> {
        match self
            .named()
            .into_iter()
            .find(|(_, v)| !(0..=MAX_BONUS_WEIGHT).contains(v))
        {
            Some((field, value)) => Err(RulesetError::WeightOutOfRange { field, value }),
            None => Ok(()),
        }
    }
}

impl Default for BonusWeights {
    fn default() -> Self {
        BonusWeights::STANDARD
    }
}

/// Tunable rule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    pub turns_per_season: u32,
    pub bonus: BonusWeights,
}

impl Default for Ruleset {
    fn default() -> Self {
        Ruleset::STANDARD
    }
}

impl Ruleset {
    pub const STANDARD: Ruleset = Ruleset {
        turns_per_season: STANDARD_TURNS_PER_SEASON,
        bonus: BonusWeights::STANDARD,
    };

    /// Parses a ruleset from JSON. Missing fields take standard values.
    pub fn from_json(json: &str) -> Result<Ruleset, RulesetError> {
        let ruleset: Ruleset = serde_json::from_str(json)?;
        ruleset.validate()?;
        Ok(ruleset)
    }

    /// Loads a ruleset from a JSON file.
    pub fn load(path: &std::path::Path) -> Result<Ruleset, RulesetError> {
        let data = std::fs::read_to_string(path)?;
        Ruleset::from_json(&data)
    }

    pub fn validate(&self) -> Result<(), RulesetError> {
        if self.turns_per_season == 0 {
            return Err(RulesetError::ZeroSeasonLength);
        }
        self.bonus.validate()
    }

    pub fn season_for_turn(&self, turn: u32) -> Result<Season, InputError> {
        season_for_turn_with(turn, self.turns_per_season)
    }

    pub fn turns_left_in_season(&self, turn: u32) -> Result<u32, InputError> {
        turns_left_in_season_with(turn, self.turns_per_season)
    }

    pub fn can_deploy(
        &self,
        position: Position,
        side: Side,
        turn: u32,
        board: &Board,
    ) -> Result<(), DeployError> {
        can_deploy_with(self, position, side, turn, board)
    }

    pub fn legal_deployments(
        &self,
        side: Side,
        turn: u32,
        board: &Board,
    ) -> Result<Vec<Position>, InputError> {
        legal_deployments_with(self, side, turn, board)
    }

    /// Movement does not depend on tunable parameters.
    pub fn can_move(
        &self,
        unit_class: UnitClass,
        from: Position,
        to: Position,
        side: Side,
        board: &Board,
    ) -> Result<MoveEffect, MoveError> {
        can_move(unit_class, from, to, side, board)
    }

    pub fn can_engage(
        &self,
        from: Position,
        to: Position,
        side: Side,
        board: &Board,
    ) -> Result<Engagement, MoveError> {
        can_engage_with(&self.bonus, from, to, side, board)
    }

    pub fn compute_bonuses(&self, position: Position, board: &Board) -> Bonuses {
        compute_bonuses_with(&self.bonus, position, board)
    }

    pub fn legal_actions(
        &self,
        side: Side,
        turn: u32,
        board: &Board,
    ) -> Result<Vec<Action>, InputError> {
        legal_actions_with(self, side, turn, board)
    }

    pub fn random_action(
        &self,
        side: Side,
        turn: u32,
        board: &Board,
        rng: &mut impl rand::Rng,
    ) -> Result<Option<Action>, InputError> {
        random_action_with(self, side, turn, board, rng)
    }
}
