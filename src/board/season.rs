//! Seasonal cycle and position availability.
//!
//! Seasons rotate Odd -> Even -> Prime every `turns_per_season` turns (8 in
//! the standard ruleset). The season decides which positions may receive a
//! new deployment.

use serde::{Deserialize, Serialize};

use super::position::{all_positions, InputError, Position};

/// Turns per season in the standard ruleset.
pub const STANDARD_TURNS_PER_SEASON: u32 = 8;

/// The prime-numbered positions, the only cells open during a Prime season.
pub const PRIME_POSITIONS: [u8; 16] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];

/// The season of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Odd,
    Even,
    Prime,
}

/// All seasons in cycle order.
pub const ALL_SEASONS: [Season; 3] = [Season::Odd, Season::Even, Season::Prime];

impl Season {
    /// Lowercase name used by the query protocol.
    pub const fn name(self) -> &'static str {
        match self {
            Season::Odd => "odd",
            Season::Even => "even",
            Season::Prime => "prime",
        }
    }

    pub fn from_name(name: &str) -> Option<Season> {
        match name {
            "odd" => Some(Season::Odd),
            "even" => Some(Season::Even),
            "prime" => Some(Season::Prime),
            _ => None,
        }
    }
}

/// Season for a 1-based turn counter under a given cycle length.
pub fn season_for_turn_with(turn: u32, turns_per_season: u32) -> Result<Season, InputError> {
    if turn == 0 {
        return Err(InputError::InvalidTurn(turn));
    }
    let index = ((turn - 1) / turns_per_season.max(1)) % 3;
    Ok(ALL_SEASONS[index as usize])
}

/// Season for a 1-based turn counter in the standard ruleset.
pub fn season_for_turn(turn: u32) -> Result<Season, InputError> {
    season_for_turn_with(turn, STANDARD_TURNS_PER_SEASON)
}

/// Turns remaining in the current season, counting the current turn.
pub fn turns_left_in_season_with(turn: u32, turns_per_season: u32) -> Result<u32, InputError> {
    if turn == 0 {
        return Err(InputError::InvalidTurn(turn));
    }
    let len = turns_per_season.max(1);
    Ok(len - ((turn - 1) % len))
}

pub fn turns_left_in_season(turn: u32) -> Result<u32, InputError> {
    turns_left_in_season_with(turn, STANDARD_TURNS_PER_SEASON)
}

/// Returns true if the position accepts deployments in `season`.
pub fn is_available(position: Position, season: Season) -> bool {
    let n = position.get();
    match season {
        Season::Odd => n % 2 == 1,
        Season::Even => n % 2 == 0,
        Season::Prime => PRIME_POSITIONS.contains(&n),
    }
}

/// All positions open in `season`, ascending.
pub fn available_positions(season: Season) -> Vec<Position> {
    all_positions().filter(|p| is_available(*p, season)).collect()
}
