//! Paldex Advisor - team recommendations and achievements for a creature-collection companion
//!
//! Everything here is a pure function of explicit snapshots (catalog,
//! collection, selection, progress facts). Nothing is cached between calls.

pub mod advisor;
pub mod catalog;
pub mod combat;
pub mod core;
pub mod progress;
pub mod skills;
