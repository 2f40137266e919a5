//! Combat modifiers.
//!
//! Positional bonuses derived from a unit's neighbourhood, and the
//! independent per-season stat table.

pub mod bonus;
pub mod seasonal;

pub use bonus::{board_bonuses, compute_bonuses, compute_bonuses_with, Bonuses};
pub use seasonal::{effective_stats, seasonal_modifier, EffectiveStats, StatDelta};
