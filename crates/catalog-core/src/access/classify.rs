//! Access link classification.

use catalog_domain::AccessLink;
use serde::{Deserialize, Serialize};

/// How an access link may be consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessCategory {
    /// Opens in the local reader
    Readable,
    /// Opens in an embedded third-party viewer
    Embedable,
    /// Fetchable file
    Downloadable,
    /// Externally mediated digitization request (EDD)
    Requestable,
    /// Catalog record only
    Catalog,
}

impl AccessCategory {
    /// Every category, in classification order.
    pub fn all() -> &'static [AccessCategory] {
        &[
            AccessCategory::Readable,
            AccessCategory::Embedable,
            AccessCategory::Downloadable,
            AccessCategory::Requestable,
            AccessCategory::Catalog,
        ]
    }

    /// Whether the link can be consumed without an intermediary request.
    pub fn is_direct(&self) -> bool {
        matches!(
            self,
            Self::Readable | Self::Embedable | Self::Downloadable
        )
    }

    /// Display name for logs and UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Readable => "Read Online",
            Self::Embedable => "Read Online (embedded)",
            Self::Downloadable => "Download",
            Self::Requestable => "Request Scan",
            Self::Catalog => "View in Catalog",
        }
    }
}

/// Classify a link by its flags.
///
/// Rules are checked in order and the first match wins:
/// `reader` → Readable, `embed` → Embedable, `download` → Downloadable,
/// `edd` → Requestable, `catalog` → Catalog. A link with none of these
/// flags set has no category.
///
/// # Examples
/// ```
/// use catalog_core::{classify, AccessCategory};
/// use catalog_core::domain::{AccessLink, LinkFlags};
///
/// let link = AccessLink::new("https://example.org/b.epub", "application/epub+zip")
///     .with_flags(LinkFlags { download: Some(true), ..Default::default() });
/// assert_eq!(classify(&link), Some(AccessCategory::Downloadable));
/// assert_eq!(classify(&AccessLink::new("x", "text/html")), None);
/// ```
pub fn classify(link: &AccessLink) -> Option<AccessCategory> {
    let flags = &link.flags;
    let category = if flags.is_reader() {
        Some(AccessCategory::Readable)
    } else if flags.is_embed() {
        Some(AccessCategory::Embedable)
    } else if flags.is_download() {
        Some(AccessCategory::Downloadable)
    } else if flags.is_edd() {
        Some(AccessCategory::Requestable)
    } else if flags.is_catalog() {
        Some(AccessCategory::Catalog)
    } else {
        None
    };

    tracing::trace!(
        href = %link.href,
        media_type = %link.media_type,
        ?category,
        "classified access link"
    );
    category
}

/// First link in `links` classified as `category`.
pub fn first_of<'a>(links: &'a [AccessLink], category: AccessCategory) -> Option<&'a AccessLink> {
    links.iter().find(|l| classify(l) == Some(category))
}
