//! Zone ownership and facing.
//!
//! The invader holds sectors 0-2 (positions 1-27) and faces down the sector
//! grid; the defender holds sectors 3-5 (positions 28-54) and faces up.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Last position of the invader zone.
pub const INVADER_ZONE_END: u8 = 27;

/// One of the two commanders in a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Invader,
    Defender,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::Invader => Side::Defender,
            Side::Defender => Side::Invader,
        }
    }

    /// Row direction this side advances in.
    pub const fn forward(self) -> i8 {
        match self {
            Side::Invader => 1,
            Side::Defender => -1,
        }
    }

    /// Single-character notation abbreviation.
    pub const fn notation_char(self) -> char {
        match self {
            Side::Invader => 'i',
            Side::Defender => 'd',
        }
    }

    pub fn from_notation_char(c: char) -> Option<Side> {
        match c {
            'i' => Some(Side::Invader),
            'd' => Some(Side::Defender),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::Invader => "invader",
            Side::Defender => "defender",
        }
    }

    pub fn from_name(name: &str) -> Option<Side> {
        match name {
            "invader" | "i" => Some(Side::Invader),
            "defender" | "d" => Some(Side::Defender),
            _ => None,
        }
    }
}

/// The zone a position belongs to.
pub const fn zone_of(position: Position) -> Side {
    if position.get() <= INVADER_ZONE_END {
        Side::Invader
    } else {
        Side::Defender
    }
}

pub fn is_in_zone(position: Position, side: Side) -> bool {
    zone_of(position) == side
}
