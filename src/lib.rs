//! Ashwood battlefield rules library.
//!
//! Board geometry, season policy, deployment and movement legality, combat
//! bonuses, and the text protocol used by the binary entry point. Every rule
//! query is a pure function of its arguments.

pub mod board;
pub mod combat;
pub mod engine;
pub mod movegen;
pub mod protocol;
pub mod ruleset;

pub use board::{Board, InputError, Occupant, Position, Season, Side, Unit, UnitClass};
pub use combat::{compute_bonuses, effective_stats, seasonal_modifier, Bonuses};
pub use movegen::{
    can_deploy, can_engage, can_move, can_move_unit, legal_actions, legal_deployments,
    legal_moves, random_action, Action, DeployError, Engagement, MoveEffect, MoveError,
};
pub use ruleset::{Ruleset, RULES_VERSION};
