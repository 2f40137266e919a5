//! Movement legality.
//!
//! Validates a single move of a friendly unit and reports whether the
//! destination is empty or holds an enemy. Each unit class has its own
//! reach:
//!
//! | Class            | Reach                                            |
//! |------------------|--------------------------------------------------|
//! | Infantry, Archer | one orthogonal step (a border link counts)       |
//! | Pike             | the single cell straight ahead                   |
//! | Cavalry          | 1-2 cells along a compass ray, no jumping        |
//! | Elite            | own sector, or two neighbour hops                |
//! | Support          | any full neighbour                               |

use serde::{Deserialize, Serialize};

use crate::board::{
    cross_sector_link, full_neighbors, is_neighbor, is_orthogonal_step, link_direction, Board,
    Position, Side, UnitClass,
};

use super::cavalry::check_charge;

/// What a legal move does on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveEffect {
    /// The destination was empty.
    Relocate,
    /// The destination holds an enemy; resolving the fight is the caller's job.
    AttackOpportunity,
}

impl MoveEffect {
    pub const fn name(self) -> &'static str {
        match self {
            MoveEffect::Relocate => "relocate",
            MoveEffect::AttackOpportunity => "attack_opportunity",
        }
    }
}

/// Why a move (or engagement) was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("unit at {0} belongs to the other side")]
    NotOwner(Position),

    #[error("no unit at {0}")]
    OriginEmpty(Position),

    #[error("{to} is out of reach from {from}")]
    InvalidDistance { from: Position, to: Position },

    #[error("{to} is not in a legal direction from {from}")]
    InvalidDirection { from: Position, to: Position },

    #[error("path from {from} to {to} is blocked at {at}")]
    PathBlocked {
        from: Position,
        to: Position,
        at: Position,
    },

    #[error("no border link carries {from} toward {to}")]
    NoBorderLink { from: Position, to: Position },

    #[error("{0} is held by a friendly unit")]
    DestinationFriendlyOccupied(Position),

    #[error("no unit to engage at {0}")]
    NoTarget(Position),
}

impl MoveError {
    /// Stable snake_case code for adapters.
    pub const fn code(self) -> &'static str {
        match self {
            MoveError::NotOwner(_) => "not_owner",
            MoveError::OriginEmpty(_) => "origin_empty",
            MoveError::InvalidDistance { .. } => "invalid_distance",
            MoveError::InvalidDirection { .. } => "invalid_direction",
            MoveError::PathBlocked { .. } => "path_blocked",
            MoveError::NoBorderLink { .. } => "no_border_link",
            MoveError::DestinationFriendlyOccupied(_) => "destination_friendly_occupied",
            MoveError::NoTarget(_) => "no_target",
        }
    }
}

/// The cell a pike of `side` at `from` may advance to, if any.
///
/// Inside the sector this is the next row in the side's facing; on the
/// front edge it is the border link, when that link leads straight ahead.
pub fn pike_forward(from: Position, side: Side) -> Option<Position> {
    let ahead = side.forward();
    if let Some(next) = from.step_in_sector(ahead, 0) {
        return Some(next);
    }
    match link_direction(from) {
        Some((d_row, 0)) if d_row == ahead => cross_sector_link(from),
        _ => None,
    }
}

/// Returns true if `to` is within two neighbour hops of `from`.
fn within_two_hops(from: Position, to: Position) -> bool {
    is_neighbor(from, to) || full_neighbors(from).into_iter().any(|n| is_neighbor(n, to))
}

/// Applies the class-specific reach rule, assuming ownership checks passed.
fn check_reach(
    unit_class: UnitClass,
    from: Position,
    to: Position,
    side: Side,
    board: &Board,
) -> Result<(), MoveError> {
    let miss = || {
        if is_neighbor(from, to) {
            MoveError::InvalidDirection { from, to }
        } else {
            MoveError::InvalidDistance { from, to }
        }
    };

    match unit_class {
        UnitClass::Infantry | UnitClass::Archer => {
            if is_orthogonal_step(from, to) {
                Ok(())
            } else {
                Err(miss())
            }
        }
        UnitClass::Pike => {
            if pike_forward(from, side) == Some(to) {
                Ok(())
            } else {
                Err(miss())
            }
        }
        UnitClass::Cavalry => check_charge(from, to, board),
        UnitClass::Elite => {
            if from.sector() == to.sector() || within_two_hops(from, to) {
                Ok(())
            } else {
                Err(MoveError::InvalidDistance { from, to })
            }
        }
        UnitClass::Support => {
            if is_neighbor(from, to) {
                Ok(())
            } else {
                Err(MoveError::InvalidDistance { from, to })
            }
        }
    }
}

/// Ownership and destination checks shared by moves and engagements.
///
/// Returns the side holding `to`, if any.
pub(crate) fn check_endpoints(
    from: Position,
    to: Position,
    side: Side,
    board: &Board,
) -> Result<Option<Side>, MoveError> {
    if from == to {
        return Err(MoveError::InvalidDistance { from, to });
    }
    let origin = board.get(from).ok_or(MoveError::OriginEmpty(from))?;
    if origin.side != side {
        return Err(MoveError::NotOwner(from));
    }
    match board.side_at(to) {
        Some(s) if s == side => Err(MoveError::DestinationFriendlyOccupied(to)),
        other => Ok(other),
    }
}

fn check_move(
    unit_class: UnitClass,
    from: Position,
    to: Position,
    side: Side,
    board: &Board,
) -> Result<MoveEffect, MoveError> {
    let occupant = check_endpoints(from, to, side, board)?;
    check_reach(unit_class, from, to, side, board)?;
    Ok(match occupant {
        None => MoveEffect::Relocate,
        Some(_) => MoveEffect::AttackOpportunity,
    })
}

/// Checks whether the `side` unit of class `unit_class` at `from` may move to `to`.
pub fn can_move(
    unit_class: UnitClass,
    from: Position,
    to: Position,
    side: Side,
    board: &Board,
) -> Result<MoveEffect, MoveError> {
    let verdict = check_move(unit_class, from, to, side, board);
    if let Err(e) = &verdict {
        tracing::debug!(%from, %to, ?side, ?unit_class, code = e.code(), "move rejected");
    }
    verdict
}

/// Like [`can_move`], reading the class from the unit standing at `from`.
pub fn can_move_unit(
    from: Position,
    to: Position,
    side: Side,
    board: &Board,
) -> Result<MoveEffect, MoveError> {
    let class = board.get(from).ok_or(MoveError::OriginEmpty(from))?.unit.class;
    can_move(class, from, to, side, board)
}

/// Every legal destination for the unit at `from`, ascending.
///
/// Empty if `from` is empty.
pub fn legal_moves(from: Position, board: &Board) -> Vec<(Position, MoveEffect)> {
    let occupant = match board.get(from) {
        Some(o) => *o,
        None => return Vec::new(),
    };
    crate::board::all_positions()
        .filter_map(|to| {
            check_move(occupant.unit.class, from, to, occupant.side, board)
                .ok()
                .map(|effect| (to, effect))
        })
        .collect()
}
