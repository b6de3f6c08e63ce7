//! Display formatting helpers.
//!
//! Deterministic string and URL utilities shared by the access resolver, the
//! citation builder and rendering code.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::citation::CitationData;
use crate::config::DisplayConfig;
use crate::error::Result;

/// Appended to text cut short by [`truncate_words`].
pub const ELLIPSIS: &str = "...";

/// Truncate `text` to at most `max_chars` characters at a whitespace boundary.
///
/// Text within the bound is returned unchanged. Otherwise the cut falls on
/// the last whitespace at or before the bound and [`ELLIPSIS`] is appended.
/// A word is never split: if the first word alone is longer than the bound,
/// the whole first word is kept.
///
/// # Examples
/// ```
/// use catalog_core::truncate_words;
/// assert_eq!(truncate_words("New York", 40), "New York");
/// assert_eq!(truncate_words("London and New York", 12), "London and...");
/// ```
pub fn truncate_words(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    // Byte offset of the first character past the bound.
    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let head = &text[..cut];
    let at_boundary = text[cut..].starts_with(char::is_whitespace);

    let kept = if at_boundary {
        head.trim_end()
    } else {
        match head.rfind(char::is_whitespace) {
            Some(idx) => head[..idx].trim_end(),
            None => "",
        }
    };

    if !kept.trim().is_empty() {
        return format!("{}{}", kept, ELLIPSIS);
    }

    // Nothing fits before the bound; keep the first word whole.
    let trimmed = text.trim();
    match trimmed.split_whitespace().next() {
        Some(word) if word.len() < trimmed.len() => format!("{}{}", word, ELLIPSIS),
        _ => trimmed.to_string(),
    }
}

/// Return `value` unless it is absent or blank, else `placeholder`.
pub fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder,
    }
}

/// Publication place, placeholder-substituted and truncated.
pub fn display_place(place: Option<&str>, config: &DisplayConfig) -> String {
    truncate_words(
        or_placeholder(place, &config.placeholder_text),
        config.place_max_chars,
    )
}

/// Publisher names joined with `", "`, placeholder-substituted and truncated.
pub fn display_publishers(publishers: &[String], config: &DisplayConfig) -> String {
    let joined = publishers.join(", ");
    truncate_words(
        or_placeholder(Some(joined.as_str()), &config.placeholder_text),
        config.publisher_max_chars,
    )
}

/// Absolute address of a cover image, falling back to the placeholder image.
pub fn cover_or_placeholder(cover: Option<&str>, config: &DisplayConfig) -> Result<String> {
    let cover = or_placeholder(cover, &config.placeholder_cover);
    absolute_url(cover, &config.base_url)
}

/// Render-ready strings for the citation panel of an edition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationDisplay {
    pub place: String,
    pub publishers: String,
    pub cover: String,
}

/// Apply the display bounds and placeholders to a built citation.
///
/// `cover` is the edition's cover image address, if any. Fails only when the
/// configured base URL is invalid.
pub fn display_citation(
    citation: &CitationData,
    cover: Option<&str>,
    config: &DisplayConfig,
) -> Result<CitationDisplay> {
    Ok(CitationDisplay {
        place: display_place(citation.publication_place.as_deref(), config),
        publishers: display_publishers(&citation.publishers, config),
        cover: cover_or_placeholder(cover, config)?,
    })
}

/// Whether `href` already carries a scheme and host.
fn has_scheme(href: &str) -> bool {
    Url::parse(href).map(|u| u.has_host()).unwrap_or(false)
}

/// Prefix `scheme` onto an address stored without one.
///
/// Protocol-relative (`//host/path`) and bare (`host/path`) addresses both
/// gain `scheme://`. Addresses that already name a scheme are returned as-is.
/// Empty input stays empty.
pub fn ensure_scheme(href: &str, scheme: &str) -> String {
    let href = href.trim();
    if href.is_empty() || has_scheme(href) {
        return href.to_string();
    }
    let rest = href.strip_prefix("//").unwrap_or(href);
    format!("{}://{}", scheme, rest)
}

/// Resolve a possibly protocol- or path-relative address against `base`.
///
/// Fails only when `base` itself is not a valid absolute URL.
pub fn absolute_url(href: &str, base: &str) -> Result<String> {
    let base = Url::parse(base)?;
    let resolved = base.join(href.trim())?;
    Ok(resolved.to_string())
}

/// URL-encode a post-login return address.
pub fn encode_return_to(address: &str) -> String {
    urlencoding::encode(address).into_owned()
}
