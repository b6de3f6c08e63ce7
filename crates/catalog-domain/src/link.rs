//! Access link representation

use crate::de::null_as_default;
use serde::{Deserialize, Serialize};

/// Intent flags attached to an access link.
///
/// The catalog service sends these as an open bag of booleans. Only the flags
/// named here are kept; anything else is dropped during deserialization so an
/// unknown flag can never match a classification rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkFlags {
    pub reader: Option<bool>,
    pub embed: Option<bool>,
    pub download: Option<bool>,
    pub edd: Option<bool>,
    pub catalog: Option<bool>,
    pub nypl_login: Option<bool>,
}

impl LinkFlags {
    pub fn is_reader(&self) -> bool {
        self.reader.unwrap_or(false)
    }

    pub fn is_embed(&self) -> bool {
        self.embed.unwrap_or(false)
    }

    pub fn is_download(&self) -> bool {
        self.download.unwrap_or(false)
    }

    pub fn is_edd(&self) -> bool {
        self.edd.unwrap_or(false)
    }

    pub fn is_catalog(&self) -> bool {
        self.catalog.unwrap_or(false)
    }

    /// Whether the resource sits behind the library's login wall.
    pub fn requires_login(&self) -> bool {
        self.nypl_login.unwrap_or(false)
    }
}

/// One reachable resource variant of an item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessLink {
    #[serde(alias = "url")]
    pub href: String,
    #[serde(alias = "mediaType", default, deserialize_with = "null_as_default")]
    pub media_type: String,
    #[serde(default)]
    pub rel: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: LinkFlags,
    /// Last modification timestamp as sent by the service (ISO 8601)
    #[serde(default)]
    pub modified: Option<String>,
}

impl AccessLink {
    /// Create a link with no flags set
    pub fn new(href: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            media_type: media_type.into(),
            ..Default::default()
        }
    }

    /// Builder method to replace the flag set
    pub fn with_flags(mut self, flags: LinkFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Builder method to set the modification timestamp
    pub fn with_modified(mut self, modified: impl Into<String>) -> Self {
        self.modified = Some(modified.into());
        self
    }
}
