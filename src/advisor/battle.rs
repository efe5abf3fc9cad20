//! Boss matchups: pick the team with the best type advantage

use crate::advisor::ranking::{rank, select_top, Scored};
use crate::catalog::{Catalog, CatalogItem, Collection};
use crate::combat::{type_effectiveness, Boss};
use crate::core::config::AdvisorConfig;
use crate::core::types::TypeSet;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::fmt;

/// How hard an item hits the boss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effectiveness {
    SuperEffective,
    Effective,
    Neutral,
    NotEffective,
}

impl Effectiveness {
    /// Label for an offensive multiplier
    pub fn from_offensive(offensive: f32, config: &AdvisorConfig) -> Self {
        if offensive >= config.super_effective_threshold {
            Effectiveness::SuperEffective
        } else if offensive >= config.effective_threshold {
            Effectiveness::Effective
        } else if offensive <= config.not_effective_threshold {
            Effectiveness::NotEffective
        } else {
            Effectiveness::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Effectiveness::SuperEffective => "super effective",
            Effectiveness::Effective => "effective",
            Effectiveness::Neutral => "neutral",
            Effectiveness::NotEffective => "not effective",
        }
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scored item in the battle ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattleCandidate {
    pub id: String,
    pub name: String,
    pub types: TypeSet,
    /// Item types attacking the boss
    pub offensive: f32,
    /// Boss types attacking the item
    pub defensive: f32,
    pub resistance: f32,
    pub work_bonus: f32,
    pub score: f32,
    pub effectiveness: Effectiveness,
    pub suggested_level: u32,
}

impl Scored for BattleCandidate {
    type Key = OrderedFloat<f32>;

    fn score_key(&self) -> OrderedFloat<f32> {
        OrderedFloat(self.score)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BattlePlan {
    pub boss: Boss,
    pub team_size: usize,
    pub team: Vec<BattleCandidate>,
    /// Every discovered item, ranked
    pub all_scores: Vec<BattleCandidate>,
}

/// Outcome of a battle recommendation
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BattleRecommendation {
    NoBossSelected,
    NoCollection,
    Recommended(BattlePlan),
}

/// Score contribution from how well the item takes the boss's hits
pub fn resistance_factor(defensive: f32, config: &AdvisorConfig) -> f32 {
    if defensive <= config.resist_threshold {
        config.resist_factor
    } else if defensive >= config.weak_threshold {
        config.weak_factor
    } else {
        config.neutral_factor
    }
}

/// Level to bring against a boss given the offensive multiplier
pub fn suggested_level(boss_level: u32, offensive: f32, config: &AdvisorConfig) -> u32 {
    if offensive >= config.super_effective_threshold {
        boss_level.saturating_sub(config.level_offset).max(1)
    } else if offensive <= config.underlevel_threshold {
        boss_level + config.level_offset
    } else {
        boss_level
    }
}

/// Score one item against a boss
pub fn score_battle_item(item: &CatalogItem, boss: &Boss, config: &AdvisorConfig) -> BattleCandidate {
    let boss_types = boss.type_set();
    let offensive = type_effectiveness(&item.types, &boss_types);
    let defensive = type_effectiveness(&boss_types, &item.types);
    let resistance = resistance_factor(defensive, config);
    let work_bonus = item.skills().len() as f32 * config.battle_work_bonus;
    let score = offensive * config.offensive_weight + resistance + work_bonus;

    BattleCandidate {
        id: item.id.clone(),
        name: item.name.clone(),
        types: item.types.clone(),
        offensive,
        defensive,
        resistance,
        work_bonus,
        score,
        effectiveness: Effectiveness::from_offensive(offensive, config),
        suggested_level: suggested_level(boss.level, offensive, config),
    }
}

/// Recommend up to `team_size` discovered items against a boss
///
/// `team_size` is clamped to `1..=config.max_team_size`.
pub fn recommend_battle_team(
    catalog: &Catalog,
    collection: &Collection,
    boss: Option<&Boss>,
    team_size: usize,
    config: &AdvisorConfig,
) -> BattleRecommendation {
    let Some(boss) = boss else {
        return BattleRecommendation::NoBossSelected;
    };

    let discovered: Vec<&CatalogItem> = catalog.discovered(collection).collect();
    if discovered.is_empty() {
        tracing::debug!(boss = boss.name, "battle recommendation skipped: empty collection");
        return BattleRecommendation::NoCollection;
    }

    let team_size = team_size.clamp(1, config.max_team_size);
    let all_scores = rank(
        discovered
            .iter()
            .map(|item| score_battle_item(item, boss, config))
            .collect(),
    );
    let team = select_top(&all_scores, team_size);
    tracing::debug!(boss = boss.name, team = team.len(), team_size, "battle team selected");

    BattleRecommendation::Recommended(BattlePlan {
        boss: boss.clone(),
        team_size,
        team,
        all_scores,
    })
}
