//! Catalog items and the discovered collection

use crate::core::error::{AdvisorError, Result};
use crate::core::types::TypeSet;
use crate::skills::{parse_skills, SkillSet};
use ahash::{AHashMap, AHashSet};
use serde::Serialize;

/// One collectible creature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub types: TypeSet,
    /// Raw work descriptor, e.g. `"Kindling Lv.2, Transporting Lv.1"`
    pub work: String,
    /// What the item yields, if anything
    pub gives: Option<String>,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, types: TypeSet, work: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            types,
            work: work.into(),
            gives: None,
        }
    }

    pub fn with_gives(mut self, gives: impl Into<String>) -> Self {
        self.gives = Some(gives.into());
        self
    }

    /// Parsed work skills
    pub fn skills(&self) -> SkillSet {
        parse_skills(&self.work)
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Ordered, read-only list of every catalog item
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    by_name: AHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names (case-insensitive)
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        let mut by_name = AHashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if by_name.insert(name_key(&item.name), idx).is_some() {
                return Err(AdvisorError::DuplicateItem(item.name.clone()));
            }
        }
        Ok(Self { items, by_name })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&CatalogItem> {
        self.by_name.get(&name_key(name)).map(|&idx| &self.items[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name_key(name))
    }

    /// Discovered items, in catalog order
    ///
    /// Catalog order is the base order the recommenders rank from, so equal
    /// scores always come out in the same order.
    pub fn discovered<'a>(&'a self, collection: &'a Collection) -> impl Iterator<Item = &'a CatalogItem> + 'a {
        self.items.iter().filter(move |item| collection.contains(&item.name))
    }
}

/// Snapshot of the item names the player has discovered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    names: AHashSet<String>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|n| name_key(n.as_ref())).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name_key(name))
    }

    /// Distinct discovered names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
