//! Engagement legality.
//!
//! An engagement targets an enemy-held cell without the attacker moving
//! there first. Cavalry engages along a charge ray; every other class only
//! reaches its full neighbours.

use serde::{Deserialize, Serialize};

use crate::board::{is_neighbor, Board, Occupant, Position, Side, UnitClass};
use crate::combat::bonus::{compute_bonuses_with, Bonuses};
use crate::ruleset::{BonusWeights, Ruleset};

use super::cavalry::check_charge;
use super::movement::{check_endpoints, MoveError};

/// Both parties of a legal engagement, with their positional bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub attacker: Occupant,
    pub defender: Occupant,
    pub attacker_bonuses: Bonuses,
    pub defender_bonuses: Bonuses,
}

/// Ownership, target and reach checks; both occupants on success.
fn check_target(
    from: Position,
    to: Position,
    side: Side,
    board: &Board,
) -> Result<(Occupant, Occupant), MoveError> {
    if check_endpoints(from, to, side, board)?.is_none() {
        return Err(MoveError::NoTarget(to));
    }
    let (attacker, defender) = match (board.get(from), board.get(to)) {
        (Some(a), Some(d)) => (*a, *d),
        (None, _) => return Err(MoveError::OriginEmpty(from)),
        (_, None) => return Err(MoveError::NoTarget(to)),
    };

    if attacker.unit.class == UnitClass::Cavalry {
        check_charge(from, to, board)?;
    } else if !is_neighbor(from, to) {
        return Err(MoveError::InvalidDistance { from, to });
    }
    Ok((attacker, defender))
}

pub(crate) fn can_engage_with(
    weights: &BonusWeights,
    from: Position,
    to: Position,
    side: Side,
    board: &Board,
) -> Result<Engagement, MoveError> {
    let verdict = check_target(from, to, side, board).map(|(attacker, defender)| Engagement {
        attacker,
        defender,
        attacker_bonuses: compute_bonuses_with(weights, from, board),
        defender_bonuses: compute_bonuses_with(weights, to, board),
    });
    if let Err(e) = &verdict {
        tracing::debug!(%from, %to, ?side, code = e.code(), "engagement rejected");
    }
    verdict
}

/// Checks whether the `side` unit at `from` may engage the enemy at `to`.
pub fn can_engage(
    from: Position,
    to: Position,
    side: Side,
    board: &Board,
) -> Result<Engagement, MoveError> {
    can_engage_with(&Ruleset::STANDARD.bonus, from, to, side, board)
}

/// Every enemy the unit at `from` may engage, ascending.
///
/// Reach does not depend on the bonus weights, so this holds under every
/// ruleset.
pub fn legal_engagements(from: Position, board: &Board) -> Vec<Position> {
    let side = match board.side_at(from) {
        Some(s) => s,
        None => return Vec::new(),
    };
    board
        .occupants()
        .filter(|(_, o)| o.side != side)
        .map(|(p, _)| p)
        .filter(|to| check_target(from, *to, side, board).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Unit;

    fn pos(n: u32) -> Position {
        Position::new(n).unwrap()
    }

    #[test]
    fn empty_target() {
        let mut board = Board::empty();
        board.place(pos(5), Side::Invader, Unit::new(UnitClass::Infantry, 5, 5, 5));
        assert_eq!(
            can_engage(pos(5), pos(6), Side::Invader, &board),
            Err(MoveError::NoTarget(pos(6)))
        );
    }

    #[test]
    fn ownership_checks_come_first() {
        let mut board = Board::empty();
        board.place(pos(5), Side::Defender, Unit::new(UnitClass::Infantry, 5, 5, 5));
        assert_eq!(
            can_engage(pos(5), pos(6), Side::Invader, &board),
            Err(MoveError::NotOwner(pos(5)))
        );
        board.place(pos(6), Side::Defender, Unit::new(UnitClass::Pike, 5, 5, 5));
        assert_eq!(
            can_engage(pos(5), pos(6), Side::Defender, &board),
            Err(MoveError::DestinationFriendlyOccupied(pos(6)))
        );
    }

    #[test]
    fn melee_reaches_diagonals_and_links() {
        let mut board = Board::empty();
        board.place(pos(9), Side::Invader, Unit::new(UnitClass::Pike, 5, 5, 5));
        board.place(pos(5), Side::Defender, Unit::new(UnitClass::Infantry, 4, 2, 1));
        board.place(pos(10), Side::Defender, Unit::new(UnitClass::Infantry, 4, 2, 1));
        board.place(pos(1), Side::Defender, Unit::new(UnitClass::Infantry, 4, 2, 1));

        let e = can_engage(pos(9), pos(5), Side::Invader, &board).unwrap();
        assert_eq!(e.attacker.unit.class, UnitClass::Pike);
        assert_eq!(e.defender.side, Side::Defender);
        assert_eq!(e.attacker_bonuses, compute_bonuses_with(&Ruleset::STANDARD.bonus, pos(9), &board));

        assert!(can_engage(pos(9), pos(10), Side::Invader, &board).is_ok());
        assert_eq!(
            can_engage(pos(9), pos(1), Side::Invader, &board),
            Err(MoveError::InvalidDistance { from: pos(9), to: pos(1) })
        );
        assert_eq!(legal_engagements(pos(9), &board), vec![pos(5), pos(10)]);
    }

    #[test]
    fn cavalry_engages_along_rays() {
        let mut board = Board::empty();
        board.place(pos(1), Side::Invader, Unit::new(UnitClass::Cavalry, 6, 2, 6));
        board.place(pos(3), Side::Defender, Unit::new(UnitClass::Archer, 3, 1, 2));
        assert!(can_engage(pos(1), pos(3), Side::Invader, &board).is_ok());

        board.place(pos(2), Side::Defender, Unit::new(UnitClass::Archer, 3, 1, 2));
        assert_eq!(
            can_engage(pos(1), pos(3), Side::Invader, &board),
            Err(MoveError::PathBlocked { from: pos(1), to: pos(3), at: pos(2) })
        );
        assert_eq!(legal_engagements(pos(1), &board), vec![pos(2)]);
    }

    #[test]
    fn listed_engagements_hold_under_tuned_weights() {
        let mut board = Board::empty();
        board.place(pos(5), Side::Invader, Unit::new(UnitClass::Support, 5, 5, 5));
        board.place(pos(6), Side::Defender, Unit::new(UnitClass::Infantry, 2, 9, 1));
        board.place(pos(2), Side::Defender, Unit::new(UnitClass::Support, 2, 2, 9));
        let weights = BonusWeights {
            support_self: 0,
            support_neighbor: 40,
            ..BonusWeights::STANDARD
        };
        for to in legal_engagements(pos(5), &board) {
            let e = can_engage_with(&weights, pos(5), to, Side::Invader, &board).unwrap();
            assert_eq!(e.defender.side, Side::Defender);
        }
        let e = can_engage_with(&weights, pos(5), pos(6), Side::Invader, &board).unwrap();
        // -3 for the stronger infantry, +5 over the support, +40 from it.
        assert_eq!(e.attacker_bonuses.attack, 42);
    }
}
