//! Base staffing: pick the team that best covers the selected structures

use crate::advisor::ranking::{rank, select_top, Scored};
use crate::advisor::structures::GoalStructure;
use crate::catalog::{Catalog, CatalogItem, Collection};
use crate::core::config::AdvisorConfig;
use crate::core::types::TypeSet;
use crate::skills::SkillSet;
use serde::Serialize;

/// Aggregated demand for one skill across the selected structures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillDemand {
    pub skill: String,
    /// Number of selected structures requesting the skill
    pub demand: u32,
    /// Priority of the first structure that requested it
    pub priority: u32,
}

/// A scored item in the work ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkCandidate {
    pub id: String,
    pub name: String,
    pub types: TypeSet,
    pub score: u32,
    /// Demanded skills this item has, as `"<skill> Lv.<n>"`, in demand order
    pub matched: Vec<String>,
    /// Sum of levels over `matched`
    pub total_level: u32,
    pub skills: SkillSet,
}

impl Scored for WorkCandidate {
    type Key = u32;

    fn score_key(&self) -> u32 {
        self.score
    }
}

/// Whether the selected team covers one demanded skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCoverage {
    pub skill: String,
    pub demand: u32,
    pub covered: bool,
    /// Highest level among contributors, 0 when uncovered
    pub level: u32,
    /// Team members having the skill, in team order
    pub contributors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkPlan {
    pub capacity: usize,
    pub demands: Vec<SkillDemand>,
    pub team: Vec<WorkCandidate>,
    pub coverage: Vec<SkillCoverage>,
    /// Some (but not all) selected structures are passive
    pub has_passive_structures: bool,
}

/// Outcome of a work recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum WorkRecommendation {
    /// No structure was selected
    NoGoalSelected,
    /// Nothing has been discovered yet
    NoCollection,
    /// Every selected structure is passive; the team is ranked on versatility alone
    PassiveOnly { team: Vec<WorkCandidate> },
    Recommended(WorkPlan),
}

/// Aggregate demanded skills in first-request order
pub fn aggregate_demand(structures: &[&GoalStructure]) -> Vec<SkillDemand> {
    let mut demands: Vec<SkillDemand> = Vec::new();
    for structure in structures {
        for &skill in structure.skills {
            match demands.iter_mut().find(|d| d.skill == skill) {
                Some(existing) => existing.demand += 1,
                None => demands.push(SkillDemand {
                    skill: skill.to_string(),
                    demand: 1,
                    priority: structure.priority,
                }),
            }
        }
    }
    demands
}

/// Score one item against the aggregated demand
///
/// Arithmetic saturates at `u32::MAX`.
pub fn score_work_item(item: &CatalogItem, demands: &[SkillDemand], config: &AdvisorConfig) -> WorkCandidate {
    let skills = item.skills();
    let mut score = 0u32;
    let mut total_level = 0u32;
    let mut matched = Vec::new();

    for demand in demands {
        if let Some(level) = skills.proficiency(&demand.skill) {
            let weighted = level
                .saturating_mul(config.work_level_weight)
                .saturating_mul(demand.demand)
                .saturating_mul(demand.priority);
            score = score.saturating_add(weighted);
            total_level = total_level.saturating_add(level);
            matched.push(format!("{} Lv.{}", demand.skill, level));
        }
    }

    let versatility = u32::try_from(skills.len()).unwrap_or(u32::MAX);
    score = score.saturating_add(versatility.saturating_mul(config.versatility_bonus));

    WorkCandidate {
        id: item.id.clone(),
        name: item.name.clone(),
        types: item.types.clone(),
        score,
        matched,
        total_level,
        skills,
    }
}

/// Per-skill coverage of a selected team
pub fn compute_coverage(team: &[WorkCandidate], demands: &[SkillDemand]) -> Vec<SkillCoverage> {
    demands
        .iter()
        .map(|demand| {
            let mut coverage = SkillCoverage {
                skill: demand.skill.clone(),
                demand: demand.demand,
                covered: false,
                level: 0,
                contributors: Vec::new(),
            };
            for member in team {
                if let Some(level) = member.skills.proficiency(&demand.skill) {
                    coverage.covered = true;
                    coverage.level = coverage.level.max(level);
                    coverage.contributors.push(member.name.clone());
                }
            }
            coverage
        })
        .collect()
}

/// Recommend a base team of at most `capacity` discovered items
pub fn recommend_work_team(
    catalog: &Catalog,
    collection: &Collection,
    structures: &[&GoalStructure],
    capacity: usize,
    config: &AdvisorConfig,
) -> WorkRecommendation {
    if structures.is_empty() {
        return WorkRecommendation::NoGoalSelected;
    }

    let discovered: Vec<&CatalogItem> = catalog.discovered(collection).collect();
    if discovered.is_empty() {
        tracing::debug!("work recommendation skipped: empty collection");
        return WorkRecommendation::NoCollection;
    }

    let demands = aggregate_demand(structures);
    let has_passive_structures = structures.iter().any(|s| s.is_passive());

    let ranked = rank(
        discovered
            .iter()
            .map(|item| score_work_item(item, &demands, config))
            .collect(),
    );
    let team = select_top(&ranked, capacity);

    if demands.is_empty() {
        tracing::debug!(team = team.len(), "only passive structures selected");
        return WorkRecommendation::PassiveOnly { team };
    }

    let coverage = compute_coverage(&team, &demands);
    tracing::debug!(
        team = team.len(),
        capacity,
        covered = coverage.iter().filter(|c| c.covered).count(),
        demanded = demands.len(),
        "work team selected"
    );

    WorkRecommendation::Recommended(WorkPlan {
        capacity,
        demands,
        team,
        coverage,
        has_passive_structures,
    })
}
