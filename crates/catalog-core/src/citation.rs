//! Citation record derivation
//!
//! Builds a [`CitationData`] from a work and one of its editions: role
//! partitioned agent names, resolved title, publication metadata, one
//! representative source link and the government-document flag.

use std::collections::HashSet;

use catalog_domain::{Agent, Edition, Work, GOVERNMENT_DOCUMENT};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Credited roles with a dedicated citation list
pub const ROLE_AUTHOR: &str = "author";
pub const ROLE_EDITOR: &str = "editor";
pub const ROLE_ILLUSTRATOR: &str = "illustrator";
pub const ROLE_TRANSLATOR: &str = "translator";
pub const ROLE_PUBLISHER: &str = "publisher";

/// Roles that route an agent out of the contributors bucket
pub const CATEGORIZED_ROLES: &[&str] = &[
    ROLE_AUTHOR,
    ROLE_EDITOR,
    ROLE_TRANSLATOR,
    ROLE_ILLUSTRATOR,
    ROLE_PUBLISHER,
];

/// Display-ready citation metadata for one edition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationData {
    pub title: String,
    pub sub_title: Option<String>,
    pub authors: Vec<String>,
    pub editors: Vec<String>,
    pub illustrators: Vec<String>,
    pub translators: Vec<String>,
    pub publishers: Vec<String>,
    pub contributors: Vec<String>,
    pub publication_place: Option<String>,
    pub publication_date: Option<String>,
    pub edition_statement: Option<String>,
    pub volume: Option<String>,
    pub series: Option<String>,
    /// Address of the first link of the first item
    pub source_link: Option<String>,
    /// Modification timestamp of that same link
    pub source_modified: Option<String>,
    /// License of the first item, when rights are known
    pub license: Option<String>,
    pub is_government_doc: bool,
}

impl CitationData {
    /// Citation for the work's first edition, or for the work alone when it has none.
    pub fn from_work(work: &Work) -> Self {
        match work.editions.first() {
            Some(edition) => build_citation(work, edition),
            None => build_citation(work, &Edition::default()),
        }
    }
}

/// Citation for the edition with id `edition_id`, or for the first edition when no id is given.
///
/// An id that names no edition of the work is an error rather than a silent
/// fallback to another edition.
pub fn citation_for_edition(work: &Work, edition_id: Option<&str>) -> Result<CitationData> {
    match edition_id {
        None => Ok(CitationData::from_work(work)),
        Some(id) => work
            .edition(id)
            .map(|edition| build_citation(work, edition))
            .ok_or_else(|| CatalogError::NotFound(format!("edition {}", id))),
    }
}

/// Names of agents holding `include` and none of `exclude`, in input order.
pub fn agents_with_role(agents: &[Agent], include: &str, exclude: &[&str]) -> Vec<String> {
    agents
        .iter()
        .filter(|a| a.has_role(include) && !a.has_any_role(exclude))
        .map(|a| a.name.clone())
        .collect()
}

/// Names of agents holding none of the categorized roles, de-duplicated.
fn uncategorized_agents<'a>(agents: impl IntoIterator<Item = &'a Agent>) -> Vec<String> {
    let mut seen = HashSet::new();
    agents
        .into_iter()
        .filter(|a| !a.has_any_role(CATEGORIZED_ROLES))
        .filter(|a| seen.insert(a.name_key()))
        .map(|a| a.name.clone())
        .collect()
}

/// Whether the work carries a truthy `government_document` measurement.
pub fn is_government_document(work: &Work) -> bool {
    work.measurements
        .iter()
        .any(|m| m.quantity == GOVERNMENT_DOCUMENT && m.is_truthy())
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

/// Build the citation record for `edition` of `work`.
pub fn build_citation(work: &Work, edition: &Edition) -> CitationData {
    // An edition without agents of its own is credited with the work's.
    let edition_agents = if edition.agents.is_empty() {
        &work.agents
    } else {
        &edition.agents
    };
    let source = edition.first_item().and_then(|item| item.first_link());
    let license = edition
        .first_item()
        .and_then(|item| item.rights.as_ref())
        .map(|r| r.license.clone())
        .filter(|l| !l.trim().is_empty());

    let citation = CitationData {
        title: non_blank(&edition.title).unwrap_or_else(|| work.title.clone()),
        sub_title: non_blank(&edition.sub_title).or_else(|| non_blank(&work.sub_title)),
        authors: agents_with_role(&work.agents, ROLE_AUTHOR, &[]),
        editors: agents_with_role(&work.agents, ROLE_EDITOR, &[ROLE_AUTHOR]),
        illustrators: agents_with_role(&work.agents, ROLE_ILLUSTRATOR, &[ROLE_AUTHOR]),
        translators: agents_with_role(&work.agents, ROLE_TRANSLATOR, &[ROLE_AUTHOR]),
        publishers: agents_with_role(edition_agents, ROLE_PUBLISHER, &[]),
        contributors: uncategorized_agents(work.agents.iter().chain(edition_agents.iter())),
        publication_place: non_blank(&edition.publication_place),
        publication_date: non_blank(&edition.publication_date),
        edition_statement: non_blank(&edition.edition_statement),
        volume: non_blank(&edition.volume),
        series: non_blank(&work.series),
        source_link: source.map(|l| l.href.clone()),
        source_modified: source.and_then(|l| l.modified.clone()),
        license,
        is_government_doc: is_government_document(work),
    };

    tracing::debug!(
        edition = %edition.id,
        authors = citation.authors.len(),
        contributors = citation.contributors.len(),
        has_source = citation.source_link.is_some(),
        government_doc = citation.is_government_doc,
        "built citation"
    );
    citation
}
