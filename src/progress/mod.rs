//! Progress facts and the achievements derived from them

pub mod achievements;
pub mod evaluator;
pub mod facts;

pub use achievements::{get_achievement, Achievement, AchievementCategory, Requirement, ACHIEVEMENTS};
pub use evaluator::{evaluate_achievements, evaluate_with, AchievementReport, CategoryProgress, ProgressTally};
pub use facts::{ProgressFacts, USED_BASE_ADVISOR, USED_BATTLE_ADVISOR};
