//! Cavalry charges.
//!
//! Cavalry moves 1 or 2 cells along one of the eight compass rays and may
//! not jump: every cell strictly between origin and destination must be
//! empty. A ray stays in its sector until a step would cross the sector
//! edge. It then continues only through the current cell's border link,
//! and only if that link leads into the sector the step was entering.
//! Otherwise the ray ends at the edge.

use crate::board::{cross_sector_link, link_direction, Board, Position};

use super::movement::MoveError;

/// Maximum cells a charge covers.
pub const MAX_CHARGE: usize = 2;

/// The eight compass directions, row growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compass {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

pub const ALL_DIRECTIONS: [Compass; 8] = [
    Compass::North,
    Compass::NorthEast,
    Compass::East,
    Compass::SouthEast,
    Compass::South,
    Compass::SouthWest,
    Compass::West,
    Compass::NorthWest,
];

impl Compass {
    /// Unit vector (d_row, d_col).
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Compass::North => (-1, 0),
            Compass::NorthEast => (-1, 1),
            Compass::East => (0, 1),
            Compass::SouthEast => (1, 1),
            Compass::South => (1, 0),
            Compass::SouthWest => (1, -1),
            Compass::West => (0, -1),
            Compass::NorthWest => (-1, -1),
        }
    }
}

/// The cells a charge in one direction can reach, nearest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ray {
    pub direction: Compass,
    pub cells: Vec<Position>,
    /// True if the ray stopped short at a sector edge with no matching link.
    pub cut_at_edge: bool,
}

/// -1, 0 or 1 depending on which side of 0..3 the coordinate fell out.
fn edge_exit(v: i8) -> i8 {
    if v < 0 {
        -1
    } else if v > 2 {
        1
    } else {
        0
    }
}

/// One step along a ray, following a border link at the sector edge.
fn ray_step(from: Position, direction: Compass) -> Option<Position> {
    let (d_row, d_col) = direction.delta();
    if let Some(next) = from.step_in_sector(d_row, d_col) {
        return Some(next);
    }
    let exit = (
        edge_exit(from.row() as i8 + d_row),
        edge_exit(from.col() as i8 + d_col),
    );
    match link_direction(from) {
        Some(dir) if dir == exit => cross_sector_link(from),
        _ => None,
    }
}

/// Walks one ray up to the charge length.
pub fn walk_ray(from: Position, direction: Compass) -> Ray {
    let mut cells = Vec::with_capacity(MAX_CHARGE);
    let mut cur = from;
    let mut cut_at_edge = false;
    while cells.len() < MAX_CHARGE {
        match ray_step(cur, direction) {
            Some(next) => {
                cells.push(next);
                cur = next;
            }
            None => {
                cut_at_edge = true;
                break;
            }
        }
    }
    tracing::trace!(%from, ?direction, ?cells, cut_at_edge, "cavalry ray");
    Ray {
        direction,
        cells,
        cut_at_edge,
    }
}

/// All eight rays from a position.
pub fn cavalry_rays(from: Position) -> Vec<Ray> {
    ALL_DIRECTIONS.iter().map(|d| walk_ray(from, *d)).collect()
}

/// Checks the path of a cavalry charge from `from` to `to`.
///
/// Only the geometry and the cells strictly between the two ends are
/// examined; ownership of either end is the caller's concern.
pub fn check_charge(from: Position, to: Position, board: &Board) -> Result<(), MoveError> {
    let mut blocker = None;
    for ray in cavalry_rays(from) {
        let k = match ray.cells.iter().position(|c| *c == to) {
            Some(k) => k,
            None => continue,
        };
        match ray.cells[..k].iter().find(|c| board.is_occupied(**c)) {
            None => return Ok(()),
            Some(b) => blocker = Some(*b),
        }
    }
    if let Some(at) = blocker {
        return Err(MoveError::PathBlocked { from, to, at });
    }
    Err(classify_miss(from, to))
}

/// Names why `to` lies on no ray from `from`, using the full-board geometry.
fn classify_miss(from: Position, to: Position) -> MoveError {
    let d_row = to.global_row() - from.global_row();
    let d_col = to.global_col() - from.global_col();
    let straight = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if !straight {
        MoveError::InvalidDirection { from, to }
    } else if d_row.abs().max(d_col.abs()) as usize > MAX_CHARGE {
        MoveError::InvalidDistance { from, to }
    } else {
        MoveError::NoBorderLink { from, to }
    }
}
