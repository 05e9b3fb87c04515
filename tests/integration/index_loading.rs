//! Index loading from disk, parse failures and base path resolution.

use super::common::{help_center_docs, write_index_file, write_raw_index};
use docsift::{load_index_file, parse_index, BasePath, LoadError, LoadState, SearchIndex};
use std::path::Path;

// ============================================================================
// LOADING
// ============================================================================

#[test]
fn test_load_index_file_round_trips_fixture() {
    let docs = help_center_docs();
    let file = write_index_file(&docs);

    let loaded = load_index_file(file.path()).expect("load fixture");
    assert_eq!(loaded, docs);

    let mut index = SearchIndex::new();
    assert_eq!(index.install(Ok(loaded)).expect("install"), docs.len());
    assert_eq!(index.state(), LoadState::Loaded);
    assert_eq!(index.len(), docs.len());
}

#[test]
fn test_parse_camel_case_fields() {
    let docs = parse_index(
        br#"[{
            "title": "Advanced Setup",
            "section": "Config",
            "searchText": "advanced setup",
            "content": "How to configure everything.",
            "url": "articles/setup.html",
            "extra": "ignored"
        }]"#,
    )
    .expect("parse");

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].search_text, "advanced setup");
    assert_eq!(docs[0].content, "How to configure everything.");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_index_file(Path::new("/nonexistent/search-index.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("search-index.json"));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let bodies: [&[u8]; 3] = [
        b"not json",
        br#"{"title": "object, not array"}"#,
        br#"[{"title": 3, "url": "a"}]"#,
    ];
    for body in bodies {
        let file = write_raw_index(body);
        let err = load_index_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)), "body {:?}", String::from_utf8_lossy(body));
    }
}

#[test]
fn test_missing_url_is_parse_error() {
    assert!(matches!(
        parse_index(br#"[{"title": "No link"}]"#),
        Err(LoadError::Parse(_))
    ));
}

#[test]
fn test_failed_install_leaves_index_failed() {
    let mut index = SearchIndex::new();
    let file = write_raw_index(b"<html>404</html>");
    let outcome = load_index_file(file.path());

    assert!(index.install(outcome).is_err());
    assert_eq!(index.state(), LoadState::Failed);
    assert!(index.is_empty());
}

#[test]
fn test_http_error_message() {
    assert_eq!(
        LoadError::Http { status: 503 }.to_string(),
        "HTTP error! status: 503"
    );
}

// ============================================================================
// BASE PATH
// ============================================================================

#[test]
fn test_base_path_from_page_location() {
    let nested = ["sections", "articles"];
    assert_eq!(BasePath::resolve("/", &nested).as_str(), "");
    assert_eq!(BasePath::resolve("/index.html", &nested).as_str(), "");
    assert_eq!(BasePath::resolve("/search.html", &nested).as_str(), "");
    assert_eq!(
        BasePath::resolve("/help/articles/article_7.html", &nested).as_str(),
        "../"
    );
    assert_eq!(
        BasePath::resolve("/sections/billing.html", &nested).as_str(),
        "../"
    );
    // A name that only starts the same way is not the directory
    assert_eq!(BasePath::resolve("/articles-archive.html", &nested).as_str(), "");
}

#[test]
fn test_flat_site_never_prefixes() {
    let none: [&str; 0] = [];
    assert_eq!(BasePath::resolve("/articles/a.html", &none).as_str(), "");
}

#[test]
fn test_base_path_applies_to_all_links() {
    let base = BasePath::resolve("/articles/a.html", &["articles"]);
    assert_eq!(base.join("search-index.json"), "../search-index.json");
    assert_eq!(base.join("articles/b.html"), "../articles/b.html");
    assert_eq!(
        base.full_results_url("search.html", "reset password"),
        "../search.html?q=reset%20password"
    );
    assert_eq!(
        base.full_results_url("search.html", "a&b=c?"),
        "../search.html?q=a%26b%3Dc%3F"
    );
}
