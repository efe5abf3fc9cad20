//! Static goal-structure definitions and base capacity

use crate::core::config::AdvisorConfig;
use crate::core::error::{AdvisorError, Result};
use serde::Serialize;

/// A base facility and the work it needs staffed
#[derive(Debug, Clone, Serialize)]
pub struct GoalStructure {
    pub name: &'static str,
    /// Skills the structure needs; empty for passive structures
    pub skills: &'static [&'static str],
    /// Importance weight, 1 (low) to 3 (high)
    pub priority: u32,
}

impl GoalStructure {
    /// Passive structures need no work at all
    pub fn is_passive(&self) -> bool {
        self.skills.is_empty()
    }
}

const fn structure(name: &'static str, skills: &'static [&'static str], priority: u32) -> GoalStructure {
    GoalStructure {
        name,
        skills,
        priority,
    }
}

const CROPS: &[&str] = &["Planting", "Watering", "Gathering"];

/// Global structure table
pub static STRUCTURES: &[GoalStructure] = &[
    // Plantations & farms
    structure("Wheat Plantation", CROPS, 1),
    structure("Berry Plantation", CROPS, 1),
    structure("Tomato Plantation", CROPS, 1),
    structure("Lettuce Plantation", CROPS, 1),
    structure("Potato Plantation", CROPS, 1),
    structure("Ranch", &["Farming"], 1),
    structure("Chicken Ranch", &["Farming"], 1),
    // Resource gathering
    structure("Logging Site", &["Lumbering"], 2),
    structure("Stone Pit", &["Mining"], 2),
    structure("Ore Mining Site", &["Mining"], 2),
    structure("Coal Mining Site", &["Mining"], 2),
    structure("Sulfur Mining Site", &["Mining"], 2),
    // Crafting
    structure("Primitive Workbench", &["Handiwork"], 3),
    structure("Weapon Workbench", &["Handiwork"], 3),
    structure("Pal Gear Workbench", &["Handiwork"], 3),
    structure("High Quality Workbench", &["Handiwork"], 3),
    structure("Sphere Workbench", &["Handiwork"], 3),
    structure("Primitive Sphere Assembly", &["Handiwork"], 3),
    structure("Sphere Assembly Line", &["Handiwork"], 3),
    structure("Advanced Sphere Assembly", &["Handiwork"], 3),
    // Processing
    structure("Crusher", &["Handiwork", "Transporting"], 2),
    structure("Mill", &["Watering"], 2),
    structure("Furnace", &["Kindling"], 2),
    structure("Electric Furnace", &["Kindling"], 2),
    structure("Improved Furnace", &["Kindling"], 2),
    // Cooking
    structure("Cooking Pot", &["Kindling"], 2),
    structure("Electric Kitchen", &["Kindling"], 2),
    structure("Brewery", &["Transporting"], 3),
    // Medicine
    structure("Medieval Medicine Workbench", &["Medicine"], 2),
    structure("High Quality Medicine Workbench", &["Medicine"], 2),
    // Climate control
    structure("Cooler Box", &["Cooling"], 3),
    structure("Refrigerator", &["Cooling"], 3),
    structure("Electric Heater", &["Kindling"], 3),
    structure("Heater", &["Kindling"], 3),
    structure("Hot Spring", &["Watering"], 3),
    // Power & utilities
    structure("Power Generator", &["Electricity"], 2),
    structure("Feed Box", &[], 3),
    structure("Monitoring Stand", &[], 3),
    structure("Incubator", &[], 3),
    structure("Breeding Farm", &[], 3),
    structure("Pal Bed", &[], 3),
];

/// Look up a structure by name (case-insensitive)
pub fn get_structure(name: &str) -> Option<&'static GoalStructure> {
    let name = name.trim();
    STRUCTURES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

/// Resolve a list of selected names, failing on the first unknown one
pub fn resolve_structures<S: AsRef<str>>(names: &[S]) -> Result<Vec<&'static GoalStructure>> {
    names
        .iter()
        .map(|name| {
            get_structure(name.as_ref())
                .ok_or_else(|| AdvisorError::UnknownStructure(name.as_ref().to_string()))
        })
        .collect()
}

/// Max team size per base level
const BASE_LEVEL_CAPACITY: [usize; 20] = [5, 5, 6, 6, 7, 7, 8, 8, 9, 10, 10, 11, 11, 12, 12, 13, 13, 14, 14, 15];

/// How many workers a base of the given level can hold
///
/// Levels outside 1..=20 fall back to `config.default_capacity`.
pub fn capacity_for_base_level(level: u32, config: &AdvisorConfig) -> usize {
    level
        .checked_sub(1)
        .and_then(|idx| BASE_LEVEL_CAPACITY.get(idx as usize))
        .copied()
        .unwrap_or(config.default_capacity)
}
