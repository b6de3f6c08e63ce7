//! Viewer authentication state

use serde::{Deserialize, Serialize};

/// Whether the current viewer holds a valid access credential.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthState {
    Authenticated,
    #[default]
    Anonymous,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

impl From<bool> for AuthState {
    fn from(authenticated: bool) -> Self {
        if authenticated {
            Self::Authenticated
        } else {
            Self::Anonymous
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_from_bool() {
        assert_eq!(AuthState::from(true), AuthState::Authenticated);
        assert_eq!(AuthState::from(false), AuthState::Anonymous);
        assert!(!AuthState::default().is_authenticated());
    }
}
