//! Static achievement definitions

use crate::combat::BossCategory;
use crate::core::error::{AdvisorError, Result};
use crate::progress::facts::{USED_BASE_ADVISOR, USED_BATTLE_ADVISOR};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Achievement grouping for display and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AchievementCategory {
    Discovery,
    Combat,
    Exploration,
}

impl AchievementCategory {
    pub const ALL: [AchievementCategory; 3] = [
        AchievementCategory::Discovery,
        AchievementCategory::Combat,
        AchievementCategory::Exploration,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            AchievementCategory::Discovery => "Discovery",
            AchievementCategory::Combat => "Combat",
            AchievementCategory::Exploration => "Exploration",
        }
    }
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AchievementCategory {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        AchievementCategory::ALL
            .iter()
            .copied()
            .find(|c| c.display_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AdvisorError::UnknownCategory(trimmed.to_string()))
    }
}

/// Predicate over progress facts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Requirement {
    /// At least `count` distinct discoveries
    DiscoveryCount { count: usize },
    /// Every catalog item discovered
    DiscoverAll,
    /// At least `count` distinct bosses defeated
    DefeatCount { count: usize },
    /// Every boss in the boss table defeated
    DefeatAll,
    /// At least `count` defeated bosses of one category
    CategoryDefeatCount { category: BossCategory, count: usize },
    /// A feature flag is set
    FeatureUsed { flag: &'static str },
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub requirement: Requirement,
}

const fn achievement(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: AchievementCategory,
    requirement: Requirement,
) -> Achievement {
    Achievement {
        id,
        name,
        description,
        category,
        requirement,
    }
}

use self::AchievementCategory::{Combat, Discovery, Exploration};
use self::Requirement::{
    CategoryDefeatCount, DefeatAll, DefeatCount, DiscoverAll, DiscoveryCount, FeatureUsed,
};

/// Global achievement table
pub static ACHIEVEMENTS: &[Achievement] = &[
    // Discovery
    achievement("first_discovery", "First Discovery", "Discover your first Pal", Discovery, DiscoveryCount { count: 1 }),
    achievement("pal_collector", "Pal Collector", "Discover 25 Pals", Discovery, DiscoveryCount { count: 25 }),
    achievement("pal_master", "Pal Master", "Discover 50 Pals", Discovery, DiscoveryCount { count: 50 }),
    achievement("pal_completionist", "Paldex Completionist", "Discover 100 Pals", Discovery, DiscoveryCount { count: 100 }),
    achievement("gotta_catch_em_all", "Gotta Catch 'Em All!", "Discover every single Pal in the game", Discovery, DiscoverAll),
    // Combat
    achievement("first_blood", "First Blood", "Defeat your first boss", Combat, DefeatCount { count: 1 }),
    achievement("tower_beginner", "Tower Beginner", "Defeat your first Tower Boss", Combat, CategoryDefeatCount { category: BossCategory::TowerBoss, count: 1 }),
    achievement("tower_conqueror", "Tower Conqueror", "Defeat all 5 Tower Bosses", Combat, CategoryDefeatCount { category: BossCategory::TowerBoss, count: 5 }),
    achievement("alpha_hunter", "Alpha Hunter", "Defeat 5 Alpha Pals", Combat, CategoryDefeatCount { category: BossCategory::AlphaPal, count: 5 }),
    achievement("alpha_slayer", "Alpha Slayer", "Defeat 10 Alpha Pals", Combat, CategoryDefeatCount { category: BossCategory::AlphaPal, count: 10 }),
    achievement("legendary_challenger", "Legendary Challenger", "Defeat your first Legendary Pal", Combat, CategoryDefeatCount { category: BossCategory::Legendary, count: 1 }),
    achievement("legendary_slayer", "Legendary Slayer", "Defeat all Legendary Pals", Combat, CategoryDefeatCount { category: BossCategory::Legendary, count: 5 }),
    achievement("raid_warrior", "Raid Warrior", "Defeat a Raid Boss", Combat, CategoryDefeatCount { category: BossCategory::RaidBoss, count: 1 }),
    achievement("raid_master", "Raid Master", "Defeat all Raid Bosses", Combat, CategoryDefeatCount { category: BossCategory::RaidBoss, count: 2 }),
    achievement("boss_hunter", "Boss Hunter", "Defeat 20 bosses total", Combat, DefeatCount { count: 20 }),
    achievement("boss_master", "Boss Master", "Defeat every boss in the game", Combat, DefeatAll),
    // Exploration
    achievement("explorer", "Explorer", "Use the Base Advisor feature", Exploration, FeatureUsed { flag: USED_BASE_ADVISOR }),
    achievement("strategist", "Strategist", "Use the Battle Advisor feature", Exploration, FeatureUsed { flag: USED_BATTLE_ADVISOR }),
];

/// Look up an achievement by id
pub fn get_achievement(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::category_total;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<&str> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ACHIEVEMENTS.len());
        assert_eq!(ACHIEVEMENTS.len(), 18);
    }

    #[test]
    fn test_category_thresholds_reachable() {
        for a in ACHIEVEMENTS {
            if let Requirement::CategoryDefeatCount { category, count } = a.requirement {
                assert!(
                    count <= category_total(category),
                    "{} needs {} of {} but only {} exist",
                    a.id,
                    count,
                    category,
                    category_total(category)
                );
            }
        }
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(" combat".parse::<AchievementCategory>().unwrap(), AchievementCategory::Combat);
        assert_eq!("EXPLORATION".parse::<AchievementCategory>().unwrap(), AchievementCategory::Exploration);
        let err = "cooking".parse::<AchievementCategory>().unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownCategory(ref raw) if raw == "cooking"));
        assert_eq!(err.to_string(), "Unknown achievement category: cooking");
    }

    #[test]
    fn test_get_achievement() {
        let a = get_achievement("gotta_catch_em_all").unwrap();
        assert_eq!(a.requirement, Requirement::DiscoverAll);
        assert!(get_achievement("nope").is_none());
    }
}
