//! Team recommenders
//!
//! Both advisors share one shape: score every discovered item, rank them,
//! keep the top N. They are pure functions of the catalog, the collection,
//! the selection and the config, and return a tagged outcome so callers can
//! tell "nothing discovered" apart from "nothing selected".

pub mod battle;
pub mod ranking;
pub mod structures;
pub mod work;

pub use battle::{
    recommend_battle_team, resistance_factor, score_battle_item, suggested_level, BattleCandidate,
    BattlePlan, BattleRecommendation, Effectiveness,
};
pub use ranking::{rank, select_top, Scored};
pub use structures::{capacity_for_base_level, get_structure, resolve_structures, GoalStructure, STRUCTURES};
pub use work::{
    aggregate_demand, compute_coverage, recommend_work_team, score_work_item, SkillCoverage, SkillDemand,
    WorkCandidate, WorkPlan, WorkRecommendation,
};
