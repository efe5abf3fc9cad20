//! Item catalog and the player's discovered collection

pub mod item;
pub mod loader;

pub use item::{Catalog, CatalogItem, Collection};
pub use loader::{load_catalog, load_catalog_from_json};
