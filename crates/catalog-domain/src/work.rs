//! Work domain model

use crate::de::null_as_default;
use crate::{Agent, Edition};
use serde::{Deserialize, Serialize};

/// Measurement quantity flagging an official government publication
pub const GOVERNMENT_DOCUMENT: &str = "government_document";

/// A numeric work-level attribute
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub quantity: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: f64,
}

impl Measurement {
    pub fn new(quantity: impl Into<String>, value: f64) -> Self {
        Self {
            quantity: quantity.into(),
            value,
        }
    }

    /// Non-zero and not NaN
    pub fn is_truthy(&self) -> bool {
        self.value != 0.0 && !self.value.is_nan()
    }
}

/// The bibliographic umbrella over one or more editions
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Work {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(alias = "subTitle", default)]
    pub sub_title: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub agents: Vec<Agent>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub measurements: Vec<Measurement>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub editions: Vec<Edition>,
}

impl Work {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Look up an edition by id
    pub fn edition(&self, id: &str) -> Option<&Edition> {
        self.editions.iter().find(|e| e.id == id)
    }
}
