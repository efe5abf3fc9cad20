use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Unknown structure: {0}")]
    UnknownStructure(String),

    #[error("Unknown boss: {0}")]
    UnknownBoss(String),

    #[error("Unknown achievement category: {0}")]
    UnknownCategory(String),

    #[error("Unknown element type: {0}")]
    UnknownElement(String),

    #[error("No element type in: {0:?}")]
    EmptyTypeSet(String),

    #[error("Duplicate catalog item: {0}")]
    DuplicateItem(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
