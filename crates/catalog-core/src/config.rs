//! Configuration for catalog-core
//!
//! Login redirect parameters and display tunables. Every field has a default,
//! so a partial TOML or JSON document only needs the values it overrides.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Scan-request and login redirect settings
    pub access: AccessConfig,
    /// Truncation bounds and placeholders
    pub display: DisplayConfig,
}

/// Access resolution configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// External authentication endpoint anonymous viewers are sent to
    pub login_url: String,
    /// Query parameter carrying the encoded return address
    pub redirect_param: String,
    /// Scheme prefixed to scan-request addresses stored without one
    pub default_scheme: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            login_url: "https://login.nypl.org/auth/login".to_string(),
            redirect_param: "redirect_uri".to_string(),
            default_scheme: "https".to_string(),
        }
    }
}

/// Display formatting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Base address relative links and covers are resolved against
    pub base_url: String,
    /// Maximum characters of a publication place before truncation
    pub place_max_chars: usize,
    /// Maximum characters of a publisher name before truncation
    pub publisher_max_chars: usize,
    /// Text shown when a value is absent
    pub placeholder_text: String,
    /// Image shown when an edition has no cover
    pub placeholder_cover: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://digital-research-books-beta.nypl.org/".to_string(),
            place_max_chars: 40,
            publisher_max_chars: 40,
            placeholder_text: "Unknown".to_string(),
            placeholder_cover: "/images/placeholder-book-cover.png".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.access.login_url.trim().is_empty() {
            return Err(ConfigError::Missing("access.login_url".to_string()));
        }
        if url::Url::parse(&self.access.login_url).is_err() {
            return Err(ConfigError::InvalidUrl(self.access.login_url.clone()));
        }
        if self.access.redirect_param.trim().is_empty() {
            return Err(ConfigError::Missing("access.redirect_param".to_string()));
        }

        let scheme = &self.access.default_scheme;
        let scheme_ok = !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c));
        if !scheme_ok {
            return Err(ConfigError::OutOfRange(format!(
                "access.default_scheme '{}' is not a URL scheme",
                scheme
            )));
        }

        if url::Url::parse(&self.display.base_url).is_err() {
            return Err(ConfigError::InvalidUrl(self.display.base_url.clone()));
        }
        if self.display.place_max_chars == 0 {
            return Err(ConfigError::OutOfRange(
                "display.place_max_chars must be positive".to_string(),
            ));
        }
        if self.display.publisher_max_chars == 0 {
            return Err(ConfigError::OutOfRange(
                "display.publisher_max_chars must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
