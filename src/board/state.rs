//! Board occupancy snapshot.
//!
//! The engine never owns a board between calls; callers hand in a `Board`
//! on every query. It is a fixed-size array indexed by position slot, so a
//! snapshot is cheap to copy and lookups are O(1).

use serde::{Deserialize, Serialize};

use super::position::{all_positions, Position, POSITION_COUNT};
use super::unit::Unit;
use super::zone::Side;

/// A deployed unit and the side that commands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupant {
    pub unit: Unit,
    pub side: Side,
}

/// One occupied cell, the serialized form of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Position,
    pub side: Side,
    pub unit: Unit,
}

/// Rejected board construction from placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("position {0} is listed twice")]
pub struct DuplicatePlacement(pub Position);

/// Occupancy of every cell: at most one unit per position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Placement>", into = "Vec<Placement>")]
pub struct Board {
    cells: [Option<Occupant>; POSITION_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            cells: [None; POSITION_COUNT],
        }
    }

    /// Places a unit on the board. Returns false if the position is already occupied.
    pub fn place(&mut self, position: Position, side: Side, unit: Unit) -> bool {
        let cell = &mut self.cells[position.slot()];
        if cell.is_some() {
            return false;
        }
        *cell = Some(Occupant { unit, side });
        true
    }

    /// Removes and returns the occupant of a position.
    pub fn remove(&mut self, position: Position) -> Option<Occupant> {
        self.cells[position.slot()].take()
    }

    pub fn get(&self, position: Position) -> Option<&Occupant> {
        self.cells[position.slot()].as_ref()
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.cells[position.slot()].is_some()
    }

    /// The side occupying a position, if any.
    pub fn side_at(&self, position: Position) -> Option<Side> {
        self.get(position).map(|o| o.side)
    }

    /// Iterates occupied cells in ascending position order.
    pub fn occupants(&self) -> impl Iterator<Item = (Position, &Occupant)> + '_ {
        all_positions().filter_map(move |p| self.get(p).map(|o| (p, o)))
    }

    /// Counts units of `side` deployed in `sector`.
    pub fn count_in_sector(&self, sector: u8, side: Side) -> usize {
        self.occupants()
            .filter(|(p, o)| p.sector() == sector && o.side == side)
            .count()
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }
}

impl TryFrom<Vec<Placement>> for Board {
    type Error = DuplicatePlacement;

    fn try_from(placements: Vec<Placement>) -> Result<Self, Self::Error> {
        let mut board = Board::empty();
        for pl in placements {
            if !board.place(pl.position, pl.side, pl.unit) {
                return Err(DuplicatePlacement(pl.position));
            }
        }
        Ok(board)
    }
}

impl From<Board> for Vec<Placement> {
    fn from(board: Board) -> Self {
        board
            .occupants()
            .map(|(position, o)| Placement {
                position,
                side: o.side,
                unit: o.unit,
            })
            .collect()
    }
}
