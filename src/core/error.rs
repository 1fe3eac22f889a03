use thiserror::Error;

use crate::core::types::Side;

#[derive(Error, Debug)]
pub enum SkirmishError {
    #[error("Invalid unit '{name}': {reason}")]
    InvalidUnit { name: String, reason: String },

    #[error("{0} has no units; battle cannot start")]
    EmptyRoster(Side),

    #[error("Rosters are locked while a battle is in progress")]
    RosterLocked,

    #[error("No unit named '{0}' in the catalog")]
    UnknownUnit(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog format error: {0}")]
    CatalogFormat(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SkirmishError>;
