//! Advisor configuration with documented constants
//!
//! All scoring weights and thresholds used by the recommenders live here,
//! so a balance pass only touches one file (or one TOML override).

use crate::core::error::{AdvisorError, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration for the recommenders
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    // === WORK COVERAGE ===
    /// Points per skill level for a demanded skill
    ///
    /// Multiplied by the demand count and the structure priority, so a
    /// Lv.3 miner for two priority-2 mining sites scores 3 × 10 × 2 × 2 = 120.
    pub work_level_weight: u32,

    /// Flat points per distinct parsed skill (versatility)
    ///
    /// Small next to `work_level_weight`; mostly separates items that match
    /// nothing required.
    pub versatility_bonus: u32,

    // === BATTLE MATCHUP ===
    /// Weight applied to the offensive multiplier in the total score
    pub offensive_weight: f32,

    /// Boss-to-item multiplier at or below which the item counts as resisting
    pub resist_threshold: f32,

    /// Score contribution for resisting the boss
    pub resist_factor: f32,

    /// Boss-to-item multiplier at or above which the item counts as weak
    pub weak_threshold: f32,

    /// Score contribution for being weak to the boss
    pub weak_factor: f32,

    /// Score contribution when neither resisting nor weak
    pub neutral_factor: f32,

    /// Points per distinct parsed skill in a battle score (tie-breaker only)
    pub battle_work_bonus: f32,

    /// Offensive multiplier for the "super effective" label
    pub super_effective_threshold: f32,

    /// Offensive multiplier for the "effective" label
    pub effective_threshold: f32,

    /// Offensive multiplier at or below which the label is "not effective"
    pub not_effective_threshold: f32,

    /// Offensive multiplier at or below which the suggested level goes up
    pub underlevel_threshold: f32,

    /// Levels added or removed from the boss level for the suggestion
    pub level_offset: u32,

    /// Largest battle team the advisor will propose
    pub max_team_size: usize,

    // === BASE ===
    /// Capacity used when a base level has no entry in the capacity table
    pub default_capacity: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            work_level_weight: 10,
            versatility_bonus: 2,

            offensive_weight: 2.0,
            resist_threshold: 0.5,
            resist_factor: 1.5,
            weak_threshold: 2.0,
            weak_factor: 0.5,
            neutral_factor: 1.0,
            battle_work_bonus: 0.1,

            super_effective_threshold: 2.0,
            effective_threshold: 1.5,
            not_effective_threshold: 0.5,
            underlevel_threshold: 0.75,
            level_offset: 5,
            max_team_size: 5,

            default_capacity: 5,
        }
    }
}

impl AdvisorConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML override; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AdvisorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML override from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.resist_threshold >= self.weak_threshold {
            return Err(AdvisorError::InvalidConfig(format!(
                "resist_threshold ({}) should be < weak_threshold ({})",
                self.resist_threshold, self.weak_threshold
            )));
        }

        if self.not_effective_threshold >= self.effective_threshold
            || self.effective_threshold > self.super_effective_threshold
        {
            return Err(AdvisorError::InvalidConfig(format!(
                "label thresholds must be ordered: {} < {} <= {}",
                self.not_effective_threshold,
                self.effective_threshold,
                self.super_effective_threshold
            )));
        }

        if self.underlevel_threshold >= self.super_effective_threshold {
            return Err(AdvisorError::InvalidConfig(format!(
                "underlevel_threshold ({}) should be < super_effective_threshold ({})",
                self.underlevel_threshold, self.super_effective_threshold
            )));
        }

        if self.max_team_size == 0 {
            return Err(AdvisorError::InvalidConfig("max_team_size must be positive".into()));
        }

        if self.default_capacity == 0 {
            return Err(AdvisorError::InvalidConfig("default_capacity must be positive".into()));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<AdvisorConfig> = OnceLock::new();

/// Get the global advisor config (initializes with defaults if not set)
pub fn config() -> &'static AdvisorConfig {
    CONFIG.get_or_init(AdvisorConfig::default)
}

/// Set the global advisor config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: AdvisorConfig) -> std::result::Result<(), AdvisorConfig> {
    CONFIG.set(config)
}
