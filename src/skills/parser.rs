//! Work-suitability descriptor parsing
//!
//! Descriptors look like `"Handiwork Lv.2, Mining Lv.3"`. Entries without a
//! `Lv.<n>` suffix are dropped rather than failing the whole descriptor.
//! Levels too large for a `u32` saturate at `u32::MAX`.

use nom::bytes::complete::tag;
use nom::character::complete::{anychar, digit1, multispace1};
use nom::combinator::map;
use nom::multi::many_till;
use nom::{IResult, Parser};
use serde::{Deserialize, Serialize};

/// Parsed skill → level mapping, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    entries: Vec<(String, u32)>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a skill level (last write wins)
    pub fn insert(&mut self, skill: impl Into<String>, level: u32) {
        let skill = skill.into();
        match self.entries.iter_mut().find(|(name, _)| *name == skill) {
            Some(entry) => entry.1 = level,
            None => self.entries.push((skill, level)),
        }
    }

    /// Level for a skill, including level 0 entries
    pub fn level(&self, skill: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == skill)
            .map(|(_, level)| *level)
    }

    /// Level for a skill the item can actually work (level >= 1)
    pub fn proficiency(&self, skill: &str) -> Option<u32> {
        self.level(skill).filter(|level| *level >= 1)
    }

    /// Number of distinct skills parsed
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(name, level)| (name.as_str(), *level))
    }
}

impl FromIterator<(String, u32)> for SkillSet {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for (skill, level) in iter {
            set.insert(skill, level);
        }
        set
    }
}

/// `<name><whitespace>Lv.<digits>`; the name is everything before the
/// first whitespace run that is followed by `Lv.` and a number.
fn skill_entry(input: &str) -> IResult<&str, (String, u32)> {
    // digit1 only yields ASCII digits, so parsing can only fail on overflow
    let level = map(digit1, |digits: &str| digits.parse::<u32>().unwrap_or(u32::MAX));
    let (rest, (chars, (_, _, level))) =
        many_till(anychar, (multispace1, tag("Lv."), level)).parse(input)?;
    let name: String = chars.into_iter().collect();
    Ok((rest, (name.trim().to_string(), level)))
}

/// Parse a comma-separated work descriptor into a [`SkillSet`]
///
/// Empty input yields an empty set. Malformed entries are skipped.
pub fn parse_skills(descriptor: &str) -> SkillSet {
    descriptor
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| match skill_entry(part) {
            Ok((_, (name, level))) if !name.is_empty() => Some((name, level)),
            _ => None,
        })
        .collect()
}

/// Same as [`parse_skills`] for an optional descriptor
pub fn parse_optional_skills(descriptor: Option<&str>) -> SkillSet {
    descriptor.map(parse_skills).unwrap_or_default()
}
