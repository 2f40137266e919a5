//! Adjacency graph for the six-sector battlefield.
//!
//! Two kinds of edges exist. Inside a sector every cell touches its
//! 8-neighbourhood (Chebyshev distance 1). Between sectors the only
//! traversable edges are the hand-curated border links below; they are not
//! derivable from the grid geometry and are stored as a compile-time table.
//!
//! Each linked sector pair contributes exactly three links, and every cell
//! takes part in at most one link, so a position-indexed reverse table holds
//! the whole graph.

use super::position::{Position, POSITION_COUNT, SECTORS_PER_ROW};

/// An unordered cross-sector link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderLink {
    pub a: Position,
    pub b: Position,
}

impl BorderLink {
    /// Returns the other end of the link, if `p` is one of its ends.
    pub fn other(&self, p: Position) -> Option<Position> {
        if p == self.a {
            Some(self.b)
        } else if p == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Shorthand constructor (used only in table construction).
const fn link(a: u8, b: u8) -> BorderLink {
    BorderLink {
        a: Position::at(a),
        b: Position::at(b),
    }
}

/// Total number of border links.
///
/// Seven linked sector pairs, three links each:
/// - within the invader zone: 0-1, 1-2
/// - within the defender zone: 3-4, 4-5
/// - across the zones: 0-3, 1-4, 2-5
pub const BORDER_LINK_COUNT: usize = 21;

const LINK_TABLE: [BorderLink; BORDER_LINK_COUNT] = [
    // ====================================================================
    // Horizontal pairs: right column of s joins left column of s+1,
    // rows mirrored ((r,2) <-> (2-r,0)).
    // ====================================================================
    // Sector 0 <-> 1
    link(3, 16),
    link(6, 13),
    link(9, 10),
    // Sector 1 <-> 2
    link(12, 25),
    link(15, 22),
    link(18, 19),
    // Sector 3 <-> 4
    link(30, 43),
    link(33, 40),
    link(36, 37),
    // Sector 4 <-> 5
    link(39, 52),
    link(42, 49),
    link(45, 46),
    // ====================================================================
    // Zone crossings: middle column of s joins middle column of s+3,
    // rows mirrored ((r,1) <-> (2-r,1)).
    // ====================================================================
    // Sector 0 <-> 3
    link(2, 35),
    link(5, 32),
    link(8, 29),
    // Sector 1 <-> 4
    link(11, 44),
    link(14, 41),
    link(17, 38),
    // Sector 2 <-> 5
    link(20, 53),
    link(23, 50),
    link(26, 47),
];

/// The complete border-link table.
pub static BORDER_LINKS: [BorderLink; BORDER_LINK_COUNT] = LINK_TABLE;

/// Reverse index: slot -> linked position.
static LINK_INDEX: [Option<Position>; POSITION_COUNT] = build_link_index(&LINK_TABLE);

const fn build_link_index(table: &[BorderLink; BORDER_LINK_COUNT]) -> [Option<Position>; POSITION_COUNT] {
    let mut index = [None; POSITION_COUNT];
    let mut i = 0;
    while i < BORDER_LINK_COUNT {
        let l = table[i];
        index[l.a.slot()] = Some(l.b);
        index[l.b.slot()] = Some(l.a);
        i += 1;
    }
    index
}

/// Returns the cell on the other side of `position`'s border link, if any.
pub fn cross_sector_link(position: Position) -> Option<Position> {
    LINK_INDEX[position.slot()]
}

/// Returns the sector-grid offset (d_row, d_col) that `position`'s link leads in.
///
/// (0, 1) points to the sector on the right, (1, 0) to the sector below.
pub fn link_direction(position: Position) -> Option<(i8, i8)> {
    let target = cross_sector_link(position)?;
    Some(sector_offset(position.sector(), target.sector()))
}

/// Offset between two sectors on the 2x3 sector grid.
pub(crate) fn sector_offset(from: u8, to: u8) -> (i8, i8) {
    let d_row = (to / SECTORS_PER_ROW) as i8 - (from / SECTORS_PER_ROW) as i8;
    let d_col = (to % SECTORS_PER_ROW) as i8 - (from % SECTORS_PER_ROW) as i8;
    (d_row, d_col)
}

/// Returns the in-sector 8-neighbourhood of `position`, ascending.
pub fn in_sector_neighbors(position: Position) -> Vec<Position> {
    let mut result = Vec::with_capacity(8);
    for d_row in -1..=1 {
        for d_col in -1..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            if let Some(n) = position.step_in_sector(d_row, d_col) {
                result.push(n);
            }
        }
    }
    result
}

/// In-sector neighbours plus the border link, if any.
pub fn full_neighbors(position: Position) -> Vec<Position> {
    let mut result = in_sector_neighbors(position);
    if let Some(linked) = cross_sector_link(position) {
        result.push(linked);
    }
    result
}

/// Returns true if `to` is one of `from`'s full neighbours.
pub fn is_neighbor(from: Position, to: Position) -> bool {
    if cross_sector_link(from) == Some(to) {
        return true;
    }
    from.sector() == to.sector()
        && from != to
        && from.row().abs_diff(to.row()) <= 1
        && from.col().abs_diff(to.col()) <= 1
}

/// Returns true if `to` is one orthogonal step from `from`.
///
/// A border link counts as a single orthogonal step.
pub fn is_orthogonal_step(from: Position, to: Position) -> bool {
    if cross_sector_link(from) == Some(to) {
        return true;
    }
    from.sector() == to.sector() && from.row().abs_diff(to.row()) + from.col().abs_diff(to.col()) == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::position::all_positions;
    use std::collections::HashSet;

    fn pos(n: u32) -> Position {
        Position::new(n).unwrap()
    }

    #[test]
    fn link_table_is_symmetric() {
        for p in all_positions() {
            if let Some(q) = cross_sector_link(p) {
                assert_eq!(cross_sector_link(q), Some(p), "link {} -> {} not mirrored", p, q);
            }
        }
    }

    #[test]
    fn links_always_cross_sectors() {
        for l in BORDER_LINKS.iter() {
            assert_ne!(l.a.sector(), l.b.sector(), "link {}-{} stays in one sector", l.a, l.b);
        }
    }

    #[test]
    fn each_position_in_at_most_one_link() {
        let mut seen = HashSet::new();
        for l in BORDER_LINKS.iter() {
            assert!(seen.insert(l.a), "{} linked twice", l.a);
            assert!(seen.insert(l.b), "{} linked twice", l.b);
        }
        assert_eq!(seen.len(), BORDER_LINK_COUNT * 2);
    }

    #[test]
    fn three_links_per_sector_pair() {
        let pairs = [(0, 1), (1, 2), (3, 4), (4, 5), (0, 3), (1, 4), (2, 5)];
        for (s, t) in pairs {
            let count = BORDER_LINKS
                .iter()
                .filter(|l| {
                    let (x, y) = (l.a.sector(), l.b.sector());
                    (x, y) == (s, t) || (x, y) == (t, s)
                })
                .count();
            assert_eq!(count, 3, "sector pair {}-{}", s, t);
        }
    }

    #[test]
    fn nine_and_ten_are_linked() {
        assert_eq!(cross_sector_link(pos(9)), Some(pos(10)));
        assert!(full_neighbors(pos(9)).contains(&pos(10)));
        assert_eq!(link_direction(pos(9)), Some((0, 1)));
        assert_eq!(link_direction(pos(10)), Some((0, -1)));
    }

    #[test]
    fn zone_crossing_link_points_down() {
        assert_eq!(cross_sector_link(pos(8)), Some(pos(29)));
        assert_eq!(link_direction(pos(8)), Some((1, 0)));
        assert_eq!(link_direction(pos(29)), Some((-1, 0)));
    }

    #[test]
    fn unlinked_corner() {
        assert_eq!(cross_sector_link(pos(1)), None);
        assert_eq!(cross_sector_link(pos(7)), None);
        assert_eq!(link_direction(pos(1)), None);
    }

    #[test]
    fn centre_has_eight_neighbours() {
        let n = in_sector_neighbors(pos(5));
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&pos(5)));
    }

    #[test]
    fn corner_has_three_neighbours() {
        let n = in_sector_neighbors(pos(1));
        assert_eq!(n, vec![pos(2), pos(4), pos(5)]);
    }

    #[test]
    fn in_sector_neighbors_never_leave_sector() {
        for p in all_positions() {
            for n in in_sector_neighbors(p) {
                assert_eq!(n.sector(), p.sector());
            }
        }
    }

    #[test]
    fn neighbour_relation_is_symmetric() {
        for p in all_positions() {
            for q in in_sector_neighbors(p) {
                assert!(in_sector_neighbors(q).contains(&p));
            }
        }
    }

    #[test]
    fn is_neighbor_matches_full_neighbors() {
        for p in all_positions() {
            let full: HashSet<Position> = full_neighbors(p).into_iter().collect();
            for q in all_positions() {
                assert_eq!(is_neighbor(p, q), full.contains(&q), "{} vs {}", p, q);
            }
        }
    }

    #[test]
    fn orthogonal_steps() {
        assert!(is_orthogonal_step(pos(5), pos(2)));
        assert!(is_orthogonal_step(pos(5), pos(6)));
        assert!(!is_orthogonal_step(pos(5), pos(1)));
        // 3 and 4 are consecutive numbers in different rows.
        assert!(!is_orthogonal_step(pos(3), pos(4)));
        assert!(is_orthogonal_step(pos(9), pos(10)));
    }
}
