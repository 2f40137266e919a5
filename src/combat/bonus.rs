//! Positional combat bonuses.
//!
//! A deployed unit gains or loses modifiers from every occupied cell in its
//! full neighbourhood (in-sector cells plus the border link). All
//! contributions are additive, so neighbour order never matters. The running
//! totals may dip below zero; only the final sums are floored at 0.
//!
//! Occupancy changes on every action, so bonuses are recomputed on demand
//! and never stored.

use serde::{Deserialize, Serialize};

use crate::board::{full_neighbors, Board, Position, Unit, UnitClass};
use crate::ruleset::BonusWeights;

/// Positional modifiers for one unit. Always non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bonuses {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl Bonuses {
    pub const NONE: Bonuses = Bonuses {
        attack: 0,
        defense: 0,
        speed: 0,
    };

    pub const fn total(self) -> u32 {
        self.attack.saturating_add(self.defense).saturating_add(self.speed)
    }
}

/// Signed running totals before flooring. Saturates so that unvalidated
/// weights cannot overflow.
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    attack: i32,
    defense: i32,
    speed: i32,
}

impl Accumulator {
    fn add_neighbor(&mut self, weights: &BonusWeights, own: &Unit, other: &Unit) {
        if own.attack > other.defense {
            self.attack = self.attack.saturating_add(weights.attack_advantage);
        } else if own.attack < other.defense {
            self.attack = self.attack.saturating_sub(weights.attack_disadvantage);
        }

        if own.speed > other.speed {
            self.speed = self.speed.saturating_add(weights.speed_advantage);
        }

        if own.class == other.class {
            self.defense = self.defense.saturating_add(weights.class_synergy);
        }

        if own.class == UnitClass::Support {
            self.attack = self.attack.saturating_add(weights.support_self);
            self.defense = self.defense.saturating_add(weights.support_self);
            self.speed = self.speed.saturating_add(weights.support_self);
        }

        if other.class == UnitClass::Support {
            self.attack = self.attack.saturating_add(weights.support_neighbor);
            self.defense = self.defense.saturating_add(weights.support_neighbor);
        }
    }

    fn floor(self) -> Bonuses {
        Bonuses {
            attack: self.attack.max(0) as u32,
            defense: self.defense.max(0) as u32,
            speed: self.speed.max(0) as u32,
        }
    }
}

/// Computes the bonuses for the unit at `position` with the given weights.
///
/// An empty position has no bonuses.
pub fn compute_bonuses_with(weights: &BonusWeights, position: Position, board: &Board) -> Bonuses {
    let own = match board.get(position) {
        Some(o) => o.unit,
        None => return Bonuses::NONE,
    };

    let mut acc = Accumulator::default();
    for n in full_neighbors(position) {
        if let Some(other) = board.get(n) {
            acc.add_neighbor(weights, &own, &other.unit);
        }
    }
    acc.floor()
}

/// Computes the bonuses for the unit at `position` under the standard weights.
pub fn compute_bonuses(position: Position, board: &Board) -> Bonuses {
    compute_bonuses_with(&BonusWeights::STANDARD, position, board)
}

/// Bonuses for every occupied cell, ascending by position.
pub fn board_bonuses(board: &Board) -> Vec<(Position, Bonuses)> {
    board
        .occupants()
        .map(|(p, _)| (p, compute_bonuses(p, board)))
        .collect()
}
