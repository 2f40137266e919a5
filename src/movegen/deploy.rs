//! Deployment legality.
//!
//! A new unit may enter the board on an empty cell of its own zone that the
//! current season leaves open. Once a side holds a sector, every further
//! deployment there must touch a friendly unit inside that sector, so a
//! garrison grows as one connected cluster from its first foothold. Border
//! links never carry supply.

use crate::board::{
    in_sector_neighbors, is_available, is_in_zone, Board, InputError, Position, Side,
};
use crate::ruleset::Ruleset;

/// Why a deployment was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeployError {
    #[error("position {0} is already occupied")]
    PositionOccupied(Position),

    #[error("position {0} lies outside the deploying side's zone")]
    WrongZone(Position),

    #[error("position {0} is closed this season")]
    SeasonRestricted(Position),

    #[error("supply chain broken: no friendly unit next to position {0} in its sector")]
    SupplyChainBroken(Position),

    #[error(transparent)]
    Input(#[from] InputError),
}

impl DeployError {
    /// Stable snake_case code for adapters.
    pub const fn code(self) -> &'static str {
        match self {
            DeployError::PositionOccupied(_) => "position_occupied",
            DeployError::WrongZone(_) => "wrong_zone",
            DeployError::SeasonRestricted(_) => "season_restricted",
            DeployError::SupplyChainBroken(_) => "supply_chain_broken",
            DeployError::Input(e) => e.code(),
        }
    }
}

/// Returns true if a new unit of `side` at `position` keeps its sector's
/// garrison connected.
pub fn supply_chain_holds(position: Position, side: Side, board: &Board) -> bool {
    if board.count_in_sector(position.sector(), side) == 0 {
        return true;
    }
    in_sector_neighbors(position)
        .into_iter()
        .any(|n| board.side_at(n) == Some(side))
}

pub(crate) fn can_deploy_with(
    rules: &Ruleset,
    position: Position,
    side: Side,
    turn: u32,
    board: &Board,
) -> Result<(), DeployError> {
    let season = rules.season_for_turn(turn)?;

    let verdict = if board.is_occupied(position) {
        Err(DeployError::PositionOccupied(position))
    } else if !is_in_zone(position, side) {
        Err(DeployError::WrongZone(position))
    } else if !is_available(position, season) {
        Err(DeployError::SeasonRestricted(position))
    } else if !supply_chain_holds(position, side, board) {
        Err(DeployError::SupplyChainBroken(position))
    } else {
        Ok(())
    };

    if let Err(e) = &verdict {
        tracing::debug!(%position, ?side, turn, ?season, code = e.code(), "deployment rejected");
    }
    verdict
}

/// Checks whether `side` may deploy a new unit at `position` on `turn`.
///
/// Checks run in a fixed order and the first failure is reported.
pub fn can_deploy(
    position: Position,
    side: Side,
    turn: u32,
    board: &Board,
) -> Result<(), DeployError> {
    can_deploy_with(&Ruleset::STANDARD, position, side, turn, board)
}

pub(crate) fn legal_deployments_with(
    rules: &Ruleset,
    side: Side,
    turn: u32,
    board: &Board,
) -> Result<Vec<Position>, InputError> {
    rules.season_for_turn(turn)?;
    Ok(crate::board::all_positions()
        .filter(|p| can_deploy_with(rules, *p, side, turn, board).is_ok())
        .collect())
}

/// Every position where `side` could deploy on `turn`, ascending.
pub fn legal_deployments(side: Side, turn: u32, board: &Board) -> Result<Vec<Position>, InputError> {
    legal_deployments_with(&Ruleset::STANDARD, side, turn, board)
}
