//! Error types

use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing value: {0}")]
    Missing(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Errors from the fallible edges of catalog-core (config, URL resolution, input files, lookups).
///
/// The decision and derivation functions themselves never fail.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog-core operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
