//! Board representation.
//!
//! Contains positions and their coordinates, the adjacency and border-link
//! graph, season and zone policy, unit descriptors, and the occupancy
//! snapshot that callers hand to every rules query.

pub mod adjacency;
pub mod position;
pub mod season;
pub mod state;
pub mod unit;
pub mod zone;

pub use adjacency::{
    cross_sector_link, full_neighbors, in_sector_neighbors, is_neighbor, is_orthogonal_step,
    link_direction, BorderLink, BORDER_LINKS, BORDER_LINK_COUNT,
};
pub use position::{
    all_positions, from_coords, sector_positions, to_coords, Coords, InputError, Position,
    POSITION_COUNT, SECTOR_COUNT,
};
pub use season::{
    available_positions, is_available, season_for_turn, turns_left_in_season, Season,
    ALL_SEASONS, PRIME_POSITIONS, STANDARD_TURNS_PER_SEASON,
};
pub use state::{Board, DuplicatePlacement, Occupant, Placement};
pub use unit::{Unit, UnitClass, ALL_CLASSES};
pub use zone::{is_in_zone, zone_of, Side, INVADER_ZONE_END};
