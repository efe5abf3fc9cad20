pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, AdvisorConfig};
pub use error::{AdvisorError, Result};
pub use types::{Element, TypeSet};
