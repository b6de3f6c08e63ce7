//! Agent representation

use crate::de::null_as_default;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// A named party credited on a work or edition
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
}

impl Agent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: Vec::new(),
        }
    }

    /// Builder method to add a role
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Whether the agent holds `role`, ignoring surrounding whitespace and ASCII case.
    pub fn has_role(&self, role: &str) -> bool {
        let wanted = role.trim();
        self.roles
            .iter()
            .any(|r| r.trim().eq_ignore_ascii_case(wanted))
    }

    /// Whether the agent holds any of `roles`.
    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|r| self.has_role(r))
    }

    /// Key used to decide whether two agent records name the same party.
    ///
    /// NFKC-normalized, lowercased, whitespace collapsed.
    pub fn name_key(&self) -> String {
        self.name
            .nfkc()
            .collect::<String>()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
