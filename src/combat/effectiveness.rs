//! Type effectiveness: directed attacker → defender multiplier chart
//!
//! Multi-type sides stack multiplicatively over the full cross-product.
//! Pairs absent from the chart are neutral (1.0).

use crate::core::types::Element::{Dark, Dragon, Electric, Fire, Grass, Ground, Ice, Neutral, Water};
use crate::core::types::{Element, TypeSet};

/// One directed chart entry
#[derive(Debug, Clone, Copy)]
pub struct ChartEntry {
    pub attacker: Element,
    pub defender: Element,
    pub multiplier: f32,
}

const fn entry(attacker: Element, defender: Element, multiplier: f32) -> ChartEntry {
    ChartEntry {
        attacker,
        defender,
        multiplier,
    }
}

/// Static effectiveness chart (attacker → defender)
///
/// 2.0 super effective, 0.5 resisted, 0.25 barely effective.
pub static TYPE_CHART: &[ChartEntry] = &[
    entry(Fire, Grass, 2.0),
    entry(Fire, Ice, 2.0),
    entry(Fire, Water, 0.5),
    entry(Fire, Ground, 0.5),
    entry(Fire, Fire, 0.5),
    entry(Fire, Dragon, 0.5),
    entry(Water, Fire, 2.0),
    entry(Water, Ground, 2.0),
    entry(Water, Water, 0.5),
    entry(Water, Grass, 0.5),
    entry(Water, Dragon, 0.5),
    entry(Grass, Water, 2.0),
    entry(Grass, Ground, 2.0),
    entry(Grass, Fire, 0.5),
    entry(Grass, Grass, 0.5),
    entry(Electric, Water, 2.0),
    entry(Electric, Electric, 0.5),
    entry(Electric, Ground, 0.25),
    entry(Electric, Dragon, 0.5),
    entry(Ice, Grass, 2.0),
    entry(Ice, Ground, 2.0),
    entry(Ice, Dragon, 2.0),
    entry(Ice, Fire, 0.5),
    entry(Ice, Water, 0.5),
    entry(Ice, Ice, 0.5),
    entry(Ground, Fire, 2.0),
    entry(Ground, Electric, 2.0),
    entry(Ground, Grass, 0.5),
    entry(Ground, Water, 0.5),
    entry(Dark, Dark, 2.0),
    entry(Dark, Neutral, 1.0),
    entry(Dragon, Dragon, 2.0),
    entry(Dragon, Ice, 0.5),
    entry(Neutral, Dark, 0.5),
];

/// Multiplier for a single attacker/defender pair
pub fn pair_multiplier(attacker: Element, defender: Element) -> f32 {
    TYPE_CHART
        .iter()
        .find(|e| e.attacker == attacker && e.defender == defender)
        .map(|e| e.multiplier)
        .unwrap_or(1.0)
}

/// Total multiplier of `attacking` hitting `defending`
///
/// Product of [`pair_multiplier`] over every (attacker tag, defender tag)
/// pair. Swapping the arguments gives the defensive view, which is
/// generally different because the chart is directed.
pub fn type_effectiveness(attacking: &TypeSet, defending: &TypeSet) -> f32 {
    attacking
        .iter()
        .flat_map(|a| defending.iter().map(move |d| pair_multiplier(a, d)))
        .product()
}
