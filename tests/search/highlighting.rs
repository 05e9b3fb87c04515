//! Highlighting and excerpt tests.

use docsift::testing::make_doc;
use docsift::{excerpt, highlight_text, score_match, Fragment};

// ============================================================================
// MARKING
// ============================================================================

#[test]
fn test_marks_each_query_word() {
    let highlighted = highlight_text("The Quick Fox", "quick fox");
    assert_eq!(
        highlighted.to_html(),
        "The <mark>Quick</mark> <mark>Fox</mark>"
    );
    assert_eq!(highlighted.marked().collect::<Vec<_>>(), vec!["Quick", "Fox"]);
}

#[test]
fn test_marks_every_occurrence_preserving_case() {
    let highlighted = highlight_text("Setup, SETUP and setup", "setup");
    assert_eq!(
        highlighted.marked().collect::<Vec<_>>(),
        vec!["Setup", "SETUP", "setup"]
    );
}

#[test]
fn test_empty_query_leaves_text_alone() {
    let highlighted = highlight_text("Getting Started", "");
    assert!(!highlighted.has_marks());
    assert_eq!(highlighted.to_string(), "Getting Started");
    assert_eq!(highlighted.to_html(), "Getting Started");
}

#[test]
fn test_single_character_words_not_marked() {
    let highlighted = highlight_text("a cat and a hat", "a hat");
    assert_eq!(highlighted.to_html(), "a cat and a <mark>hat</mark>");
}

#[test]
fn test_overlapping_words_merge() {
    // "set" lands inside the "Setup" mark; it stays one mark
    let highlighted = highlight_text("Advanced Setup", "setup set");
    assert_eq!(highlighted.to_html(), "Advanced <mark>Setup</mark>");
}

#[test]
fn test_adjacent_marks_merge() {
    let highlighted = highlight_text("foobar", "foo bar");
    assert_eq!(highlighted.fragments(), &[Fragment::Marked("foobar".into())]);
}

#[test]
fn test_marker_text_never_matched() {
    // A later pass for "mark" must not hit the <mark> tags from the first
    let highlighted = highlight_text("Bookmark a page", "book mark");
    assert_eq!(highlighted.to_html(), "<mark>Bookmark</mark> a page");
}

#[test]
fn test_metacharacters_are_literal() {
    let highlighted = highlight_text("C++ (advanced) vs C", "c++ (advanced)");
    assert_eq!(
        highlighted.to_html(),
        "<mark>C++</mark> <mark>(advanced)</mark> vs C"
    );
    assert!(!highlight_text("anything", ".*").has_marks());
}

#[test]
fn test_html_escaped_outside_and_inside_marks() {
    let highlighted = highlight_text("Use <b> & <i> tags", "<b>");
    assert_eq!(
        highlighted.to_html(),
        "Use <mark>&lt;b&gt;</mark> &amp; &lt;i&gt; tags"
    );
}

#[test]
fn test_render_with_custom_markers() {
    let highlighted = highlight_text("Password Reset", "reset");
    assert_eq!(highlighted.render_with("[", "]"), "Password [Reset]");
}

#[test]
fn test_non_ascii_case_folding() {
    let highlighted = highlight_text("Über Straße", "über");
    assert_eq!(highlighted.to_html(), "<mark>Über</mark> Straße");
}

#[test]
fn test_word_final_sigma_marked_where_scored() {
    let doc = make_doc("ΟΔΟΣ", "", "", "odos.html");
    assert!(score_match(&doc, "ΟΔΟΣ") >= 100);
    assert_eq!(
        highlight_text("ΟΔΟΣ", "ΟΔΟΣ").fragments(),
        &[Fragment::Marked("ΟΔΟΣ".into())]
    );
    assert_eq!(highlight_text("Η ΟΔΟΣ", "οδος").to_html(), "Η <mark>ΟΔΟΣ</mark>");
}

// ============================================================================
// EXCERPTS
// ============================================================================

#[test]
fn test_excerpt_always_ends_with_ellipsis() {
    assert_eq!(excerpt("Short body", 120), "Short body...");
    assert_eq!(excerpt("", 120), "...");
}

#[test]
fn test_excerpt_cuts_at_character_count() {
    let long = "é".repeat(200);
    let cut = excerpt(&long, 120);
    assert_eq!(cut.chars().count(), 123);
    assert!(cut.ends_with("..."));
}

#[test]
fn test_excerpt_highlighting() {
    let content = format!("{} setup", "x ".repeat(100));
    // The word falls past the cut, so the excerpt has nothing to mark
    assert!(!highlight_text(&excerpt(&content, 120), "setup").has_marks());
    assert!(highlight_text(&excerpt("setup in one minute", 120), "setup").has_marks());
}
