//! Per-item access decision.

use catalog_domain::{AccessLink, AuthState, Edition, Item};
use serde::{Deserialize, Serialize};

use super::classify::{first_of, AccessCategory};
use crate::config::AccessConfig;
use crate::display::{encode_return_to, ensure_scheme};

/// The affordance an item exposes to the current viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccessDecision {
    /// At least one readable, embedable or downloadable link exists.
    DirectAccess {
        read_link: Option<AccessLink>,
        download_link: Option<AccessLink>,
    },
    /// Authenticated viewer may request a scan at `target`.
    RequestScan { link: AccessLink, target: String },
    /// Anonymous viewer must log in first; `return_to` is URL-encoded.
    RequestScanLoginRequired { return_to: String },
    /// No usable link.
    Unavailable,
}

impl AccessDecision {
    /// Stable label for logs and machine output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DirectAccess { .. } => "direct_access",
            Self::RequestScan { .. } => "request_scan",
            Self::RequestScanLoginRequired { .. } => "request_scan_login_required",
            Self::Unavailable => "unavailable",
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, Self::Unavailable)
    }

    /// Login URL the renderer should redirect to, for `RequestScanLoginRequired` only.
    pub fn login_redirect(&self, config: &AccessConfig) -> Option<String> {
        match self {
            Self::RequestScanLoginRequired { return_to } => {
                let sep = if config.login_url.contains('?') { '&' } else { '?' };
                Some(format!(
                    "{}{}{}={}",
                    config.login_url, sep, config.redirect_param, return_to
                ))
            }
            _ => None,
        }
    }
}

/// Resolves access decisions under a given configuration.
#[derive(Debug, Clone, Default)]
pub struct AccessResolver {
    config: AccessConfig,
}

impl AccessResolver {
    pub fn new(config: AccessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    /// Decide the affordance for one item's links.
    ///
    /// Direct access (read or download) always outranks a scan request, even
    /// when a requestable link is present. For reading, a `Readable` link is
    /// preferred over an `Embedable` one.
    pub fn resolve(&self, links: &[AccessLink], auth: AuthState, current_page: &str) -> AccessDecision {
        let read_link = first_of(links, AccessCategory::Readable)
            .or_else(|| first_of(links, AccessCategory::Embedable));
        let download_link = first_of(links, AccessCategory::Downloadable);

        let decision = if read_link.is_some() || download_link.is_some() {
            AccessDecision::DirectAccess {
                read_link: read_link.cloned(),
                download_link: download_link.cloned(),
            }
        } else if let Some(link) = first_of(links, AccessCategory::Requestable) {
            if auth.is_authenticated() {
                AccessDecision::RequestScan {
                    target: ensure_scheme(&link.href, &self.config.default_scheme),
                    link: link.clone(),
                }
            } else {
                AccessDecision::RequestScanLoginRequired {
                    return_to: encode_return_to(current_page),
                }
            }
        } else {
            AccessDecision::Unavailable
        };

        tracing::debug!(
            links = links.len(),
            ?auth,
            decision = decision.kind(),
            "resolved access"
        );
        decision
    }

    /// Decide the affordance for an item.
    pub fn resolve_item(&self, item: &Item, auth: AuthState, current_page: &str) -> AccessDecision {
        self.resolve(&item.links, auth, current_page)
    }

    /// Decide the affordance for every item of an edition, in item order.
    pub fn resolve_edition(
        &self,
        edition: &Edition,
        auth: AuthState,
        current_page: &str,
    ) -> Vec<AccessDecision> {
        edition
            .items
            .iter()
            .map(|item| self.resolve_item(item, auth, current_page))
            .collect()
    }
}

/// Decide the affordance for one item's links under the default configuration.
pub fn resolve_access(links: &[AccessLink], auth: AuthState, current_page: &str) -> AccessDecision {
    AccessResolver::default().resolve(links, auth, current_page)
}
