//! Item and rights domain model

use crate::de::null_as_default;
use crate::AccessLink;
use serde::{Deserialize, Serialize};

/// Rights attached to an item
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rights {
    #[serde(default)]
    pub license: String,
    #[serde(alias = "rightsStatement", default)]
    pub rights_statement: String,
}

/// One physical or digital manifestation of an edition
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<AccessLink>,
    #[serde(default)]
    pub rights: Option<Rights>,
    /// Holding institution or content source, when known
    #[serde(default)]
    pub source: Option<String>,
}

impl Item {
    pub fn new(links: Vec<AccessLink>) -> Self {
        Self {
            links,
            ..Default::default()
        }
    }

    /// Builder method to attach rights
    pub fn with_rights(mut self, license: impl Into<String>, statement: impl Into<String>) -> Self {
        self.rights = Some(Rights {
            license: license.into(),
            rights_statement: statement.into(),
        });
        self
    }

    /// First link of the item, if any
    pub fn first_link(&self) -> Option<&AccessLink> {
        self.links.first()
    }
}
