//! Access resolution integration tests

mod common;

use catalog_core::domain::{AccessLink, AuthState, LinkFlags};
use catalog_core::{
    classify, resolve_access, AccessCategory, AccessDecision, AccessResolver, CatalogConfig,
};
use common::fixtures::{load_fixture, load_item_fixture, load_work_fixture};
use proptest::prelude::*;
use rstest::rstest;

const PAGE: &str = "https://books.example.org/work/b3e2c1f4?featured=2001";

// === Fixture scenarios ===

#[rstest]
#[case(AuthState::Anonymous)]
#[case(AuthState::Authenticated)]
fn test_reader_and_download_both_exposed(#[case] auth: AuthState) {
    let item = load_item_fixture("epub_reader_download.json");
    let decision = resolve_access(&item.links, auth, PAGE);

    match decision {
        AccessDecision::DirectAccess {
            read_link,
            download_link,
        } => {
            let read = read_link.expect("read link");
            let download = download_link.expect("download link");
            assert_eq!(read.media_type, "application/epub+xml");
            assert_eq!(download.media_type, "application/epub+zip");
        }
        other => panic!("expected direct access, got {:?}", other),
    }
}

#[test]
fn test_edd_only_anonymous_requires_login() {
    let item = load_item_fixture("edd_only.json");
    let decision = resolve_access(&item.links, AuthState::Anonymous, PAGE);

    assert_eq!(
        decision,
        AccessDecision::RequestScanLoginRequired {
            return_to: urlencoding::encode(PAGE).into_owned(),
        }
    );
}

#[test]
fn test_edd_only_authenticated_requests_scan() {
    let item = load_item_fixture("edd_only.json");
    let decision = resolve_access(&item.links, AuthState::Authenticated, PAGE);

    match decision {
        AccessDecision::RequestScan { link, target } => {
            assert_eq!(link.media_type, "application/html+edd");
            assert!(target.starts_with("https://www.nypl.org/research/"));
            assert!(target.ends_with(&link.href));
        }
        other => panic!("expected scan request, got {:?}", other),
    }
}

#[test]
fn test_null_links_unavailable() {
    let item = load_item_fixture("null_links.json");
    assert!(item.links.is_empty());
    assert_eq!(
        resolve_access(&item.links, AuthState::Authenticated, PAGE),
        AccessDecision::Unavailable
    );
}

#[test]
fn test_null_flags_link_is_inert() {
    let item = load_item_fixture("null_flags.json");
    assert_eq!(item.links.len(), 2);
    assert_eq!(classify(&item.links[0]), None);

    match resolve_access(&item.links, AuthState::Anonymous, PAGE) {
        AccessDecision::DirectAccess {
            read_link: None,
            download_link: Some(link),
        } => assert_eq!(link.href, "https://example.org/pdfs/9.pdf"),
        other => panic!("expected download only, got {:?}", other),
    }
}

#[test]
fn test_edition_items_resolved_in_order() {
    let work = load_work_fixture("government_report.json");
    let edition = work.edition("2001").expect("edition 2001");
    let decisions = AccessResolver::default().resolve_edition(edition, AuthState::Anonymous, PAGE);

    assert_eq!(decisions.len(), 2);
    match &decisions[0] {
        AccessDecision::DirectAccess {
            read_link: Some(link),
            download_link: None,
        } => assert_eq!(classify(link), Some(AccessCategory::Embedable)),
        other => panic!("expected embedded read, got {:?}", other),
    }
    assert_eq!(decisions[1].kind(), "direct_access");
}

#[test]
fn test_configured_login_redirect() {
    let config = CatalogConfig::from_toml(&load_fixture("config.toml")).unwrap();
    config.validate().unwrap();

    let item = load_item_fixture("edd_only.json");
    let resolver = AccessResolver::new(config.access.clone());
    let decision = resolver.resolve_item(&item, AuthState::Anonymous, "https://books.example.org/x");

    assert_eq!(
        decision.login_redirect(resolver.config()).as_deref(),
        Some("https://login.example.org/auth/login?redirect_uri=https%3A%2F%2Fbooks.example.org%2Fx")
    );
}

// === Properties ===

fn flag(value: bool) -> Option<bool> {
    value.then_some(true)
}

fn arb_flags() -> impl Strategy<Value = LinkFlags> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(reader, embed, download, edd, catalog, login)| LinkFlags {
            reader: flag(reader),
            embed: flag(embed),
            download: flag(download),
            edd: flag(edd),
            catalog: flag(catalog),
            nypl_login: flag(login),
        })
}

fn arb_link() -> impl Strategy<Value = AccessLink> {
    ("[a-z]{1,8}\\.org/[a-z0-9]{0,6}", arb_flags())
        .prop_map(|(href, flags)| AccessLink::new(href, "text/html").with_flags(flags))
}

proptest! {
    #[test]
    fn prop_classify_none_iff_no_flag(flags in arb_flags()) {
        let link = AccessLink::new("example.org", "text/html").with_flags(flags);
        let any_set = flags.is_reader()
            || flags.is_embed()
            || flags.is_download()
            || flags.is_edd()
            || flags.is_catalog();
        prop_assert_eq!(classify(&link).is_none(), !any_set);
    }

    #[test]
    fn prop_direct_link_always_wins(links in prop::collection::vec(arb_link(), 0..6), authed in any::<bool>()) {
        let decision = resolve_access(&links, AuthState::from(authed), PAGE);
        let has_direct = links
            .iter()
            .any(|l| classify(l).is_some_and(|c| c.is_direct()));
        let has_request = links
            .iter()
            .any(|l| classify(l) == Some(AccessCategory::Requestable));

        match decision {
            AccessDecision::DirectAccess { .. } => prop_assert!(has_direct),
            AccessDecision::RequestScan { .. } => prop_assert!(!has_direct && has_request && authed),
            AccessDecision::RequestScanLoginRequired { .. } => {
                prop_assert!(!has_direct && has_request && !authed)
            }
            AccessDecision::Unavailable => prop_assert!(!has_direct && !has_request),
        }
    }
}
