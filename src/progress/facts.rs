//! Raw progress facts
//!
//! The persistence layer owns this record; the evaluator only reads a
//! snapshot. The helpers here are what a collaborator calls when the player
//! discovers an item, beats a boss or uses a feature.

use crate::catalog::Collection;
use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Flag set the first time the base advisor is used
pub const USED_BASE_ADVISOR: &str = "used_base_advisor";
/// Flag set the first time the battle advisor is used
pub const USED_BATTLE_ADVISOR: &str = "used_battle_advisor";

fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressFacts {
    /// Discovered item names, in discovery order
    #[serde(default)]
    pub discovered: Vec<String>,
    /// Defeated boss names, in defeat order
    #[serde(default)]
    pub defeated_bosses: Vec<String>,
    /// Named feature-usage flags
    #[serde(default)]
    pub flags: BTreeMap<String, bool>,
}

impl ProgressFacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Record a discovery. Returns false if it was already known.
    pub fn discover(&mut self, name: &str) -> bool {
        if self.discovered.iter().any(|d| same_name(d, name)) {
            return false;
        }
        self.discovered.push(name.trim().to_string());
        true
    }

    /// Record a boss defeat. Returns false if it was already recorded.
    pub fn record_defeat(&mut self, boss: &str) -> bool {
        if self.defeated_bosses.iter().any(|d| same_name(d, boss)) {
            return false;
        }
        self.defeated_bosses.push(boss.trim().to_string());
        true
    }

    pub fn set_flag(&mut self, key: &str, value: bool) {
        self.flags.insert(key.to_string(), value);
    }

    /// Missing flags read as false
    pub fn flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Explicit wipe of every fact
    pub fn reset(&mut self) {
        self.discovered.clear();
        self.defeated_bosses.clear();
        self.flags.clear();
    }

    /// Snapshot of discovered names as a collection
    pub fn collection(&self) -> Collection {
        Collection::from_names(&self.discovered)
    }

    /// Distinct defeated boss names (case-insensitive), first spelling kept
    pub fn distinct_defeats(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for name in &self.defeated_bosses {
            if !seen.iter().any(|s| same_name(s, name)) {
                seen.push(name.as_str());
            }
        }
        seen
    }
}
