//! Combat matchups: elemental effectiveness and the boss roster

pub mod bosses;
pub mod effectiveness;

pub use bosses::{category_total, get_boss, Boss, BossCategory, BOSSES};
pub use effectiveness::{pair_multiplier, type_effectiveness, ChartEntry, TYPE_CHART};
