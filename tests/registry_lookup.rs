//! Integration tests for icon lookup by stored value

mod common;

use common::{Content, InMemoryHost, ROOT_ID, ctx, registry};
use std::sync::Arc;

fn values(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn sample_host() -> InMemoryHost {
    InMemoryHost::with_root()
        .subfolder("social", "Social")
        .svg("f-home", ROOT_ID, "home.svg", None, None)
        .svg("f-cart", ROOT_ID, "c1.svg", Some("Shopping Cart"), None)
        .svg("f-gh", "social", "gh.svg", Some("GitHub Logo"), Some("github"))
        .svg("f-bell", "social", "bell.svg", None, None)
}

#[tokio::test]
async fn test_lookup_across_root_and_subfolders() {
    let host = Arc::new(sample_host());
    let icons = registry(host)
        .icons_by_value(&ctx(), &values(&["home", "shopping-cart", "github"]))
        .await
        .unwrap();

    assert_eq!(icons.len(), 3);
    assert_eq!(icons["home"].file_id, "f-home");
    assert_eq!(icons["shopping-cart"].label, "Shopping Cart");
    assert_eq!(icons["shopping-cart"].key, "c1");
    assert_eq!(icons["github"].label, "GitHub Logo");
    assert_eq!(icons["github"].svg, "<svg id=\"f-gh\"></svg>");
}

/// Only requested icons have their content read
#[tokio::test]
async fn test_only_requested_content_is_fetched() {
    let host = Arc::new(sample_host());
    registry(host.clone())
        .icons_by_value(&ctx(), &values(&["bell"]))
        .await
        .unwrap();

    assert_eq!(host.opened(), vec!["f-bell"]);
}

/// Unknown values are simply absent
#[tokio::test]
async fn test_unknown_value_yields_empty_mapping() {
    let host = Arc::new(sample_host());
    let icons = registry(host.clone())
        .icons_by_value(&ctx(), &values(&["foo"]))
        .await
        .unwrap();

    assert!(icons.is_empty());
    assert!(host.opened().is_empty());
}

/// Description takes precedence, so the title-derived value no longer matches
#[tokio::test]
async fn test_description_replaces_title_value() {
    let host = Arc::new(sample_host());
    let icons = registry(host)
        .icons_by_value(&ctx(), &values(&["github-logo", "github"]))
        .await
        .unwrap();

    assert_eq!(icons.keys().collect::<Vec<_>>(), vec!["github"]);
}

/// Missing root folder is not an error on this path
#[tokio::test]
async fn test_missing_root_returns_empty_mapping() {
    let host = Arc::new(InMemoryHost::new());
    let icons = registry(host)
        .icons_by_value(&ctx(), &values(&["home"]))
        .await
        .unwrap();

    assert!(icons.is_empty());
}

/// Unreadable icons are left out of the mapping
#[tokio::test]
async fn test_unreadable_match_is_absent() {
    let host = Arc::new(
        sample_host().file_with_content("f-bad", ROOT_ID, "bad.svg", None, None, "image/svg+xml", Content::Unreadable),
    );
    let icons = registry(host)
        .icons_by_value(&ctx(), &values(&["bad", "home"]))
        .await
        .unwrap();

    assert!(!icons.contains_key("bad"));
    assert!(icons.contains_key("home"));
}

/// When two files derive the same value, the first readable one wins
#[tokio::test]
async fn test_colliding_values_keep_first_readable_file() {
    let host = Arc::new(
        InMemoryHost::with_root()
            .subfolder("sub", "Sub")
            .file_with_content("first", ROOT_ID, "x.svg", Some("Star"), None, "image/svg+xml", Content::Unreadable)
            .svg("second", ROOT_ID, "y.svg", Some("star"), None)
            .svg("third", "sub", "z.svg", None, Some("star")),
    );
    let icons = registry(host.clone())
        .icons_by_value(&ctx(), &values(&["star"]))
        .await
        .unwrap();

    assert_eq!(icons["star"].file_id, "second");
    assert_eq!(host.opened(), vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_file_query_failure_propagates() {
    let mut host = sample_host();
    host.fail_file_queries = true;

    let result = registry(Arc::new(host))
        .icons_by_value(&ctx(), &values(&["home"]))
        .await;
    assert!(result.is_err());
}
