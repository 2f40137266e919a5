//! Seasonal stat modifiers.
//!
//! Each class reacts to the season independently of its position. The
//! modifiers compose with positional bonuses by plain addition; nothing else
//! couples the two tables.
//!
//! Odd seasons play as the mild, open-field phase, Prime as the harsh one,
//! and Even is neutral ground.

use serde::{Deserialize, Serialize};

use crate::board::{Season, Unit, UnitClass};

use super::bonus::Bonuses;

/// A signed change to each stat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatDelta {
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub special: i32,
}

const fn delta(attack: i32, defense: i32, speed: i32, special: i32) -> StatDelta {
    StatDelta {
        attack,
        defense,
        speed,
        special,
    }
}

const NEUTRAL: StatDelta = delta(0, 0, 0, 0);

/// Returns the modifier a class receives in a season.
pub const fn seasonal_modifier(class: UnitClass, season: Season) -> StatDelta {
    match (class, season) {
        // Steady except in the harsh season.
        (UnitClass::Infantry, Season::Prime) => delta(-2, -1, -1, 0),
        (UnitClass::Infantry, _) => NEUTRAL,

        (UnitClass::Pike, Season::Prime) => delta(0, 4, 0, 0),
        (UnitClass::Pike, _) => NEUTRAL,

        (UnitClass::Archer, Season::Odd) => delta(3, 0, 1, 0),
        (UnitClass::Archer, Season::Even) => NEUTRAL,
        (UnitClass::Archer, Season::Prime) => delta(-1, 0, 0, 0),

        (UnitClass::Cavalry, Season::Odd) => delta(3, 0, 2, 0),
        (UnitClass::Cavalry, Season::Even) => NEUTRAL,
        (UnitClass::Cavalry, Season::Prime) => delta(-3, 0, -3, 0),

        (UnitClass::Elite, _) => NEUTRAL,

        (UnitClass::Support, Season::Prime) => delta(0, 1, 0, 2),
        (UnitClass::Support, _) => NEUTRAL,
    }
}

/// Stats after positional bonuses and seasonal modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectiveStats {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub special: u32,
}

fn apply(base: u32, bonus: u32, delta: i32) -> u32 {
    let total = i64::from(base) + i64::from(bonus) + i64::from(delta);
    total.clamp(0, i64::from(u32::MAX)) as u32
}

/// Base stats plus bonuses plus the seasonal modifier, each floored at 0.
pub fn effective_stats(unit: &Unit, bonuses: Bonuses, season: Season) -> EffectiveStats {
    let d = seasonal_modifier(unit.class, season);
    EffectiveStats {
        attack: apply(unit.attack, bonuses.attack, d.attack),
        defense: apply(unit.defense, bonuses.defense, d.defense),
        speed: apply(unit.speed, bonuses.speed, d.speed),
        special: apply(unit.special, 0, d.special),
    }
}
