//! Achievement evaluation
//!
//! Unlocked status is never stored. Every call recomputes it from the
//! current facts, so wiping the facts relocks everything and identical
//! facts always give an identical report.

use crate::catalog::Catalog;
use crate::combat::{category_total, get_boss, BossCategory, BOSSES};
use crate::progress::achievements::{Achievement, AchievementCategory, Requirement, ACHIEVEMENTS};
use crate::progress::facts::ProgressFacts;
use ahash::AHashMap;
use serde::Serialize;

/// Defeated/total bosses for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    pub category: BossCategory,
    pub defeated: usize,
    pub total: usize,
}

/// Counts derived from a facts snapshot
#[derive(Debug, Clone)]
pub struct ProgressTally<'a> {
    pub discovered: usize,
    pub all_discovered: bool,
    pub defeated: usize,
    pub all_defeated: bool,
    per_category: AHashMap<BossCategory, usize>,
    facts: &'a ProgressFacts,
}

impl<'a> ProgressTally<'a> {
    pub fn new(facts: &'a ProgressFacts, catalog: &Catalog) -> Self {
        let collection = facts.collection();
        let all_discovered = !catalog.is_empty() && catalog.items().iter().all(|item| collection.contains(&item.name));

        let defeats = facts.distinct_defeats();
        let mut per_category: AHashMap<BossCategory, usize> = AHashMap::new();
        for name in &defeats {
            match get_boss(name) {
                Some(boss) => *per_category.entry(boss.category).or_insert(0) += 1,
                None => tracing::debug!(boss = %name, "defeated name not in boss table"),
            }
        }
        let all_defeated = BOSSES
            .iter()
            .all(|boss| defeats.iter().any(|d| d.trim().eq_ignore_ascii_case(boss.name)));

        Self {
            discovered: collection.len(),
            all_discovered,
            defeated: defeats.len(),
            all_defeated,
            per_category,
            facts,
        }
    }

    pub fn category_defeats(&self, category: BossCategory) -> usize {
        self.per_category.get(&category).copied().unwrap_or(0)
    }

    /// Evaluate one requirement
    pub fn satisfies(&self, requirement: &Requirement) -> bool {
        match *requirement {
            Requirement::DiscoveryCount { count } => self.discovered >= count,
            Requirement::DiscoverAll => self.all_discovered,
            Requirement::DefeatCount { count } => self.defeated >= count,
            Requirement::DefeatAll => self.all_defeated,
            Requirement::CategoryDefeatCount { category, count } => self.category_defeats(category) >= count,
            Requirement::FeatureUsed { flag } => self.facts.flag(flag),
        }
    }

    /// Per-category progress over the whole boss table
    pub fn category_progress(&self) -> Vec<CategoryProgress> {
        BossCategory::ALL
            .iter()
            .map(|&category| CategoryProgress {
                category,
                defeated: self.category_defeats(category),
                total: category_total(category),
            })
            .collect()
    }
}

/// Result of an evaluation pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementReport {
    /// Unlocked ids, in definition order
    pub unlocked: Vec<&'static str>,
    pub total: usize,
    pub category_progress: Vec<CategoryProgress>,
    pub discovered: usize,
    pub catalog_total: usize,
    pub defeated: usize,
}

impl AchievementReport {
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.iter().any(|u| *u == id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Rounded percentage of achievements unlocked
    pub fn completion_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.unlocked.len() as f64 / self.total as f64) * 100.0).round() as u32
    }

    /// Achievements of one category with their unlocked status
    pub fn filter<'d>(
        &self,
        definitions: &'d [Achievement],
        category: Option<AchievementCategory>,
    ) -> Vec<(&'d Achievement, bool)> {
        definitions
            .iter()
            .filter(|a| category.map_or(true, |c| a.category == c))
            .map(|a| (a, self.is_unlocked(a.id)))
            .collect()
    }
}

/// Evaluate a set of achievement definitions against a facts snapshot
pub fn evaluate_with(definitions: &[Achievement], facts: &ProgressFacts, catalog: &Catalog) -> AchievementReport {
    let tally = ProgressTally::new(facts, catalog);
    let unlocked: Vec<&'static str> = definitions
        .iter()
        .filter(|a| tally.satisfies(&a.requirement))
        .map(|a| a.id)
        .collect();

    tracing::debug!(
        unlocked = unlocked.len(),
        total = definitions.len(),
        discovered = tally.discovered,
        defeated = tally.defeated,
        "achievements evaluated"
    );

    AchievementReport {
        unlocked,
        total: definitions.len(),
        category_progress: tally.category_progress(),
        discovered: tally.discovered,
        catalog_total: catalog.len(),
        defeated: tally.defeated,
    }
}

/// Evaluate the built-in achievement table
pub fn evaluate_achievements(facts: &ProgressFacts, catalog: &Catalog) -> AchievementReport {
    evaluate_with(ACHIEVEMENTS, facts, catalog)
}
