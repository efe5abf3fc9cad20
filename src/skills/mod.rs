//! Work-suitability skills
//!
//! Catalog items describe what they can work on as free text. Everything
//! downstream consumes the parsed [`SkillSet`] instead.

pub mod parser;

pub use parser::{parse_optional_skills, parse_skills, SkillSet};
