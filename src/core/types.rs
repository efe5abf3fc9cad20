//! Core type definitions used throughout the codebase

use crate::core::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Elemental type tag carried by catalog items and bosses
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    Neutral,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Ground,
    Dark,
    Dragon,
}

impl Element {
    pub const ALL: [Element; 9] = [
        Element::Neutral,
        Element::Fire,
        Element::Water,
        Element::Grass,
        Element::Electric,
        Element::Ice,
        Element::Ground,
        Element::Dark,
        Element::Dragon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Element::Neutral => "Neutral",
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Grass => "Grass",
            Element::Electric => "Electric",
            Element::Ice => "Ice",
            Element::Ground => "Ground",
            Element::Dark => "Dark",
            Element::Dragon => "Dragon",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Element::ALL
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AdvisorError::UnknownElement(trimmed.to_string()))
    }
}

/// Non-empty, ordered, duplicate-free set of elements
///
/// Every "type" field is normalised into this shape when data enters the
/// crate, so the calculators never deal with single-tag vs list variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TypeSet(Vec<Element>);

impl TypeSet {
    /// Build from a sequence of elements, keeping first-seen order.
    ///
    /// Returns `None` when the sequence is empty.
    pub fn new(elements: impl IntoIterator<Item = Element>) -> Option<Self> {
        let mut tags: Vec<Element> = Vec::new();
        for element in elements {
            if !tags.contains(&element) {
                tags.push(element);
            }
        }
        if tags.is_empty() {
            None
        } else {
            Some(Self(tags))
        }
    }

    pub fn single(element: Element) -> Self {
        Self(vec![element])
    }

    /// Parse a comma-separated tag list such as `"Electric, Neutral"`
    pub fn parse(raw: &str) -> Result<Self> {
        let mut elements = Vec::new();
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            elements.push(part.parse::<Element>()?);
        }
        Self::new(elements).ok_or_else(|| AdvisorError::EmptyTypeSet(raw.to_string()))
    }

    pub fn elements(&self) -> &[Element] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Element> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, element: Element) -> bool {
        self.0.contains(&element)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(Element::name).collect();
        f.write_str(&names.join(", "))
    }
}

impl<'de> Deserialize<'de> for TypeSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        let joined = match Raw::deserialize(deserializer)? {
            Raw::One(s) => s,
            Raw::Many(list) => list.join(","),
        };
        TypeSet::parse(&joined).map_err(serde::de::Error::custom)
    }
}
