//! Load the catalog from JSON
//!
//! The source data is loose: `type` can be a single tag, a comma-separated
//! string or a list, and the work descriptor hides under several keys as a
//! string or a list. Everything is normalised here so the rest of the crate
//! sees one shape.

use crate::catalog::item::{Catalog, CatalogItem};
use crate::core::error::Result;
use crate::core::types::TypeSet;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawWork {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    id: Option<RawId>,
    name: String,
    #[serde(rename = "type", alias = "types")]
    types: TypeSet,
    #[serde(default, rename = "work suitability", alias = "workSuitability", alias = "work")]
    work: Option<RawWork>,
    #[serde(default)]
    gives: Option<String>,
}

impl RawItem {
    fn into_item(self, position: usize) -> CatalogItem {
        let id = match self.id {
            Some(RawId::Number(n)) => n.to_string(),
            Some(RawId::Text(s)) => s,
            None => (position + 1).to_string(),
        };
        let work = match self.work {
            Some(RawWork::Text(s)) => s,
            Some(RawWork::List(parts)) => parts.join(", "),
            None => {
                tracing::debug!(item = %self.name, "catalog item has no work descriptor");
                String::new()
            }
        };
        let item = CatalogItem::new(id, self.name.trim(), self.types, work);
        match self.gives.filter(|g| !g.trim().is_empty()) {
            Some(gives) => item.with_gives(gives),
            None => item,
        }
    }
}

/// Parse a catalog from a JSON array of items
pub fn load_catalog_from_json(json: &str) -> Result<Catalog> {
    let raw: Vec<RawItem> = serde_json::from_str(json)?;
    let items: Vec<CatalogItem> = raw
        .into_iter()
        .enumerate()
        .map(|(position, item)| item.into_item(position))
        .collect();
    let catalog = Catalog::new(items)?;
    tracing::info!(items = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Load a catalog JSON file from disk
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)?;
    load_catalog_from_json(&content)
}
