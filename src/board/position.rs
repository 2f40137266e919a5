//! Battlefield positions and their sector coordinates.
//!
//! The battlefield is 54 cells split into six 3x3 sectors. A position is the
//! 1-based global index of a cell; the sector, row, and column are derived
//! from it and never stored separately.
//!
//! Sectors are laid out as a 2x3 grid:
//!
//! ```text
//!   0  1  2     invader zone (positions 1-27)
//!   3  4  5     defender zone (positions 28-54)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The number of cells on the battlefield.
pub const POSITION_COUNT: usize = 54;

/// The number of 3x3 sectors.
pub const SECTOR_COUNT: u8 = 6;

/// Cells per sector.
pub const SECTOR_SIZE: u8 = 9;

/// Rows (and columns) per sector.
pub const SECTOR_SIDE: u8 = 3;

/// Sectors per row of the sector grid.
pub const SECTORS_PER_ROW: u8 = 3;

/// Malformed input handed to the engine.
///
/// These are programmer errors on the caller's side; they surface at the
/// boundary where a raw integer becomes an engine value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("coordinates out of bounds (sector {sector}, row {row}, col {col})")]
    OutOfBounds { sector: u8, row: u8, col: u8 },

    #[error("position {0} is outside 1..=54")]
    InvalidPosition(u32),

    #[error("turn counter must start at 1, got {0}")]
    InvalidTurn(u32),
}

impl InputError {
    /// Stable snake_case code for adapters.
    pub const fn code(self) -> &'static str {
        match self {
            InputError::OutOfBounds { .. } | InputError::InvalidPosition(_) => "out_of_bounds",
            InputError::InvalidTurn(_) => "invalid_turn",
        }
    }
}

/// A cell on the battlefield, guaranteed to lie in 1..=54.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Position(u8);

/// Sector-local coordinates of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coords {
    pub sector: u8,
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Validates a raw 1-based index.
    pub fn new(index: u32) -> Result<Position, InputError> {
        if (1..=POSITION_COUNT as u32).contains(&index) {
            Ok(Position(index as u8))
        } else {
            Err(InputError::InvalidPosition(index))
        }
    }

    /// Builds a position from a 0-based slot index (0..54).
    pub(crate) const fn from_slot(slot: usize) -> Position {
        Position(slot as u8 + 1)
    }

    /// Unchecked constructor for compile-time tables.
    pub(crate) const fn at(index: u8) -> Position {
        Position(index)
    }

    /// The 1-based global index.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The 0-based slot index, for array lookups.
    pub const fn slot(self) -> usize {
        self.0 as usize - 1
    }

    /// Index within the sector, 0..9 in row-major order.
    pub const fn local(self) -> u8 {
        (self.0 - 1) % SECTOR_SIZE
    }

    pub const fn sector(self) -> u8 {
        (self.0 - 1) / SECTOR_SIZE
    }

    pub const fn row(self) -> u8 {
        self.local() / SECTOR_SIDE
    }

    pub const fn col(self) -> u8 {
        self.local() % SECTOR_SIDE
    }

    pub const fn coords(self) -> Coords {
        Coords {
            sector: self.sector(),
            row: self.row(),
            col: self.col(),
        }
    }

    /// Row on the full 6x9 battlefield, used for straight-line geometry.
    pub const fn global_row(self) -> i8 {
        ((self.sector() / SECTORS_PER_ROW) * SECTOR_SIDE + self.row()) as i8
    }

    /// Column on the full 6x9 battlefield.
    pub const fn global_col(self) -> i8 {
        ((self.sector() % SECTORS_PER_ROW) * SECTOR_SIDE + self.col()) as i8
    }

    /// Moves by a unit step inside the sector, or `None` at the sector edge.
    pub fn step_in_sector(self, d_row: i8, d_col: i8) -> Option<Position> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if !(0..SECTOR_SIDE as i8).contains(&row) || !(0..SECTOR_SIDE as i8).contains(&col) {
            return None;
        }
        from_coords(self.sector(), row as u8, col as u8).ok()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Position {
    type Error = InputError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Position::new(index)
    }
}

impl From<Position> for u32 {
    fn from(p: Position) -> u32 {
        p.0 as u32
    }
}

/// Splits a position into (sector, row, col).
pub const fn to_coords(position: Position) -> Coords {
    position.coords()
}

/// Inverse of [`to_coords`].
pub fn from_coords(sector: u8, row: u8, col: u8) -> Result<Position, InputError> {
    if sector >= SECTOR_COUNT || row >= SECTOR_SIDE || col >= SECTOR_SIDE {
        return Err(InputError::OutOfBounds { sector, row, col });
    }
    Ok(Position(sector * SECTOR_SIZE + row * SECTOR_SIDE + col + 1))
}

/// All positions in ascending order.
pub fn all_positions() -> impl Iterator<Item = Position> {
    (0..POSITION_COUNT).map(Position::from_slot)
}

/// All positions of one sector in ascending order.
pub fn sector_positions(sector: u8) -> Result<impl Iterator<Item = Position>, InputError> {
    if sector >= SECTOR_COUNT {
        return Err(InputError::OutOfBounds { sector, row: 0, col: 0 });
    }
    let base = sector as usize * SECTOR_SIZE as usize;
    Ok((base..base + SECTOR_SIZE as usize).map(Position::from_slot))
}
