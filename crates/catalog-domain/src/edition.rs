//! Edition domain model

use crate::de::null_as_default;
use crate::{Agent, Item};
use serde::{Deserialize, Serialize};

/// One edition of a work
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Edition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(alias = "subTitle", default)]
    pub sub_title: Option<String>,
    #[serde(alias = "publicationPlace", default)]
    pub publication_place: Option<String>,
    #[serde(alias = "publicationDate", default)]
    pub publication_date: Option<String>,
    #[serde(alias = "editionStatement", default)]
    pub edition_statement: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
    /// Cover image address, possibly relative
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub agents: Vec<Agent>,
}

impl Edition {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// First item of the edition, if any
    pub fn first_item(&self) -> Option<&Item> {
        self.items.first()
    }
}
