//! Static boss table
//!
//! Both the battle advisor (types, level) and the achievement evaluator
//! (category) read from this table. A defeated boss is categorised by
//! looking its name up here, never by inspecting the name itself.

use crate::core::types::Element::{self, Dark, Dragon, Electric, Fire, Grass, Ground, Ice, Neutral, Water};
use crate::core::types::TypeSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boss grouping used for per-category progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BossCategory {
    TowerBoss,
    AlphaPal,
    Legendary,
    RaidBoss,
}

impl BossCategory {
    pub const ALL: [BossCategory; 4] = [
        BossCategory::TowerBoss,
        BossCategory::AlphaPal,
        BossCategory::Legendary,
        BossCategory::RaidBoss,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            BossCategory::TowerBoss => "Tower Boss",
            BossCategory::AlphaPal => "Alpha Pal",
            BossCategory::Legendary => "Legendary",
            BossCategory::RaidBoss => "Raid Boss",
        }
    }
}

impl fmt::Display for BossCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Definition of a boss opponent
#[derive(Debug, Clone, Serialize)]
pub struct Boss {
    pub name: &'static str,
    pub types: &'static [Element],
    /// Baseline challenge level
    pub level: u32,
    pub category: BossCategory,
    pub location: &'static str,
    pub description: &'static str,
}

impl Boss {
    /// Normalised type set for the effectiveness calculator
    pub fn type_set(&self) -> TypeSet {
        TypeSet::new(self.types.iter().copied()).unwrap_or_else(|| TypeSet::single(Neutral))
    }
}

const fn boss(
    name: &'static str,
    types: &'static [Element],
    level: u32,
    category: BossCategory,
    location: &'static str,
    description: &'static str,
) -> Boss {
    Boss {
        name,
        types,
        level,
        category,
        location,
        description,
    }
}

use self::BossCategory::{AlphaPal, Legendary, RaidBoss, TowerBoss};

/// Global boss table
pub static BOSSES: &[Boss] = &[
    // Tower bosses
    boss("Zoe and Grizzbolt", &[Electric, Neutral], 15, TowerBoss, "Rayne Syndicate Tower", "First tower boss - Electric/Neutral type"),
    boss("Lily and Lyleen", &[Grass], 23, TowerBoss, "Free Pal Alliance Tower", "Second tower boss - Pure Grass type"),
    boss("Axel and Orserk", &[Dragon, Electric], 31, TowerBoss, "Brothers of the Eternal Pyre Tower", "Third tower boss - Dragon/Electric hybrid"),
    boss("Marcus and Faleris", &[Fire], 38, TowerBoss, "PAL Genetic Research Unit Tower", "Fourth tower boss - Pure Fire type"),
    boss("Victor and Shadowbeak", &[Dark], 50, TowerBoss, "Rayne Syndicate Tower (Final)", "Final tower boss - Pure Dark type"),
    // Alpha pals (world bosses first)
    boss("Mammorest", &[Grass], 13, AlphaPal, "World Boss", "Grass type world boss"),
    boss("Kingpaca", &[Neutral], 18, AlphaPal, "World Boss", "Neutral type alpha boss"),
    boss("Bushi", &[Fire], 23, AlphaPal, "World Boss", "Fire type world boss"),
    boss("Wumpo", &[Ice], 28, AlphaPal, "World Boss", "Ice type world boss"),
    boss("Blazamut", &[Fire], 49, AlphaPal, "World Boss", "High-level Fire type"),
    boss("Chillet", &[Ice, Dragon], 11, AlphaPal, "Alpha Pal", "Early Ice/Dragon alpha"),
    boss("Penking", &[Water, Ice], 20, AlphaPal, "Alpha Pal", "Water/Ice alpha"),
    boss("Sweepa", &[Ice], 24, AlphaPal, "Alpha Pal", "Ice type alpha"),
    boss("Mossanda", &[Grass], 30, AlphaPal, "Alpha Pal", "Grass type alpha"),
    boss("Katress", &[Dark], 33, AlphaPal, "Alpha Pal", "Dark type alpha"),
    boss("Beakon", &[Electric], 35, AlphaPal, "Alpha Pal", "Electric type alpha"),
    boss("Jormuntide", &[Dragon, Water], 38, AlphaPal, "Alpha Pal", "Dragon/Water alpha"),
    boss("Menasting", &[Dark, Ground], 44, AlphaPal, "Alpha Pal", "Dark/Ground alpha"),
    boss("Astegon", &[Dragon, Dark], 50, AlphaPal, "Alpha Pal", "Dragon/Dark alpha"),
    // Legendaries
    boss("Frostallion", &[Ice], 50, Legendary, "Legendary", "Ice legendary"),
    boss("Jetragon", &[Dragon], 50, Legendary, "Legendary", "Dragon legendary"),
    boss("Necromus", &[Dark], 50, Legendary, "Legendary", "Dark legendary"),
    boss("Paladius", &[Neutral], 50, Legendary, "Legendary", "Neutral legendary"),
    boss("Frostallion Noct", &[Dark], 50, Legendary, "Legendary", "Dark legendary variant"),
    // Raids
    boss("Bellanoir", &[Dark], 50, RaidBoss, "Raid", "Summoned Dark raid boss"),
    boss("Bellanoir Libero", &[Dark], 60, RaidBoss, "Raid", "Empowered Dark raid boss"),
];

/// Look up a boss by name (case-insensitive)
pub fn get_boss(name: &str) -> Option<&'static Boss> {
    let name = name.trim();
    BOSSES.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

/// Number of bosses in a category
pub fn category_total(category: BossCategory) -> usize {
    BOSSES.iter().filter(|b| b.category == category).count()
}
