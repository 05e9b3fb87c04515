//! Ranking tests: ordering, tiebreaks and the result cap.

use super::common::{help_center_index, make_doc, setup_scenario_docs};
use docsift::{perform_search, perform_search_with, rank, SearchIndex, SearchOptions, ScoredDocument};

fn titles<'a>(results: &[ScoredDocument<'a>]) -> Vec<&'a str> {
    results.iter().map(|r| r.doc.title.as_str()).collect()
}

// ============================================================================
// ORDERING
// ============================================================================

#[test]
fn test_setup_scenario_returns_only_advanced_setup() {
    let index = SearchIndex::from_documents(setup_scenario_docs());
    let results = perform_search("setup", &index);

    assert_eq!(titles(&results), vec!["Advanced Setup"]);
    assert!(results[0].score >= 100);
    assert_eq!(results[0].position, 1);
}

#[test]
fn test_title_hit_outranks_body_hits() {
    let index = help_center_index();
    let results = perform_search("password", &index);

    assert_eq!(titles(&results), vec!["Password Reset", "Account Settings"]);
    assert_eq!(results[0].score, 184);
    assert_eq!(results[1].score, 2);
}

#[test]
fn test_equal_scores_keep_index_order() {
    let index = help_center_index();
    let results = perform_search("account", &index);

    assert_eq!(
        titles(&results),
        vec![
            "Account Settings",
            "Password Reset",
            "Getting Started",
            "Two-Factor Authentication",
        ]
    );
    assert_eq!(results[2].score, results[3].score);
    assert!(results[2].position < results[3].position);
}

#[test]
fn test_multi_word_tie_broken_by_position() {
    let index = help_center_index();
    let results = perform_search("billing payment", &index);

    assert_eq!(
        titles(&results),
        vec!["Billing Overview", "Update Payment Method"]
    );
    assert_eq!(results[0].score, 44);
    assert_eq!(results[1].score, 44);
}

#[test]
fn test_rank_stable_ties() {
    let a = make_doc("A", "", "", "a.html");
    let b = make_doc("B", "", "", "b.html");
    let c = make_doc("C", "", "", "c.html");
    let scored = vec![
        ScoredDocument { doc: &a, position: 0, score: 5 },
        ScoredDocument { doc: &b, position: 1, score: 10 },
        ScoredDocument { doc: &c, position: 2, score: 5 },
    ];

    assert_eq!(titles(&rank(scored, 10)), vec!["B", "A", "C"]);
}

#[test]
fn test_rank_drops_zero_scores() {
    let a = make_doc("A", "", "", "a.html");
    let b = make_doc("B", "", "", "b.html");
    let scored = vec![
        ScoredDocument { doc: &a, position: 0, score: 0 },
        ScoredDocument { doc: &b, position: 1, score: 1 },
    ];

    assert_eq!(titles(&rank(scored, 10)), vec!["B"]);
}

// ============================================================================
// CAP
// ============================================================================

fn many_matches(count: usize) -> SearchIndex {
    let docs = (0..count)
        .map(|i| {
            make_doc(
                &format!("Article {i}"),
                "Guides",
                &"install ".repeat(i + 1),
                &format!("a{i}.html"),
            )
        })
        .collect();
    SearchIndex::from_documents(docs)
}

#[test]
fn test_results_capped_at_ten() {
    let index = many_matches(25);
    let results = perform_search("install", &index);

    assert_eq!(results.len(), 10);
    // Most body occurrences first
    assert_eq!(results[0].doc.title, "Article 24");
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_custom_limit() {
    let index = many_matches(25);
    let options = SearchOptions {
        limit: 3,
        ..SearchOptions::default()
    };
    assert_eq!(perform_search_with("install", &index, &options).len(), 3);

    let options = SearchOptions {
        limit: 50,
        ..SearchOptions::default()
    };
    assert_eq!(perform_search_with("install", &index, &options).len(), 25);
}

#[test]
fn test_fewer_matches_than_cap() {
    let index = many_matches(4);
    assert_eq!(perform_search("install", &index).len(), 4);
}
