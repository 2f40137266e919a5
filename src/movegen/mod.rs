//! Legal action generation.
//!
//! Validates deployments, moves and engagements for one side on a board
//! snapshot, and enumerates every legal action of a side for a given turn.

pub mod cavalry;
pub mod deploy;
pub mod engage;
pub mod movement;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, InputError, Position, Side};
use crate::ruleset::Ruleset;

pub use cavalry::{cavalry_rays, walk_ray, Compass, Ray, ALL_DIRECTIONS, MAX_CHARGE};
pub use deploy::{can_deploy, legal_deployments, supply_chain_holds, DeployError};
use deploy::legal_deployments_with;
pub use engage::{can_engage, legal_engagements, Engagement};
pub use movement::{can_move, can_move_unit, legal_moves, pike_forward, MoveEffect, MoveError};

/// One thing a side may do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Action {
    Deploy { position: Position },
    Move { from: Position, to: Position, effect: MoveEffect },
    Engage { from: Position, to: Position },
}

pub(crate) fn legal_actions_with(
    rules: &Ruleset,
    side: Side,
    turn: u32,
    board: &Board,
) -> Result<Vec<Action>, InputError> {
    let mut actions: Vec<Action> = legal_deployments_with(rules, side, turn, board)?
        .into_iter()
        .map(|position| Action::Deploy { position })
        .collect();

    let origins: Vec<Position> = board
        .occupants()
        .filter(|(_, o)| o.side == side)
        .map(|(p, _)| p)
        .collect();

    for from in origins {
        for (to, effect) in legal_moves(from, board) {
            actions.push(Action::Move { from, to, effect });
        }
        for to in legal_engagements(from, board) {
            actions.push(Action::Engage { from, to });
        }
    }

    Ok(actions)
}

pub(crate) fn random_action_with(
    rules: &Ruleset,
    side: Side,
    turn: u32,
    board: &Board,
    rng: &mut impl Rng,
) -> Result<Option<Action>, InputError> {
    let legal = legal_actions_with(rules, side, turn, board)?;
    if legal.is_empty() {
        return Ok(None);
    }
    let idx = rng.gen_range(0..legal.len());
    Ok(Some(legal[idx]))
}

/// Every legal action of `side` on `turn`: deployments first, then moves and
/// engagements grouped by origin in ascending order.
pub fn legal_actions(side: Side, turn: u32, board: &Board) -> Result<Vec<Action>, InputError> {
    legal_actions_with(&Ruleset::STANDARD, side, turn, board)
}

/// Picks one legal action for `side` uniformly at random.
///
/// Returns `None` when the side has nothing legal to do.
pub fn random_action(
    side: Side,
    turn: u32,
    board: &Board,
    rng: &mut impl Rng,
) -> Result<Option<Action>, InputError> {
    random_action_with(&Ruleset::STANDARD, side, turn, board, rng)
}
