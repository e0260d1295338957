//! Error types for the mamastrength_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for mamastrength_core operations
///
/// "Not found" and "already recorded" conditions are not errors; those are
/// expressed as `Option`/`bool` returns by the stores.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Low-level database failure
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// A store operation failed against the local database
    #[error("Storage error: {0}")]
    Storage(String),
}
