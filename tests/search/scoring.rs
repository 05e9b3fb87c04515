//! Scoring rule tests.
//!
//! Each rule adds its points independently. These pin the weights with
//! hand-computed totals so a change to any one of them shows up here.

use super::common::{make_doc, setup_scenario_docs};
use docsift::{
    score_match, BODY_OCCURRENCE_SCORE, SECTION_PHRASE_SCORE, SECTION_WORD_SCORE,
    TITLE_PHRASE_SCORE, TITLE_PREFIX_BONUS, TITLE_WORD_SCORE,
};

// ============================================================================
// INDIVIDUAL RULES
// ============================================================================

#[test]
fn test_title_phrase_and_word() {
    let doc = make_doc("Advanced Setup", "", "", "b.html");
    assert_eq!(
        score_match(&doc, "setup"),
        TITLE_PHRASE_SCORE + TITLE_WORD_SCORE
    );
}

#[test]
fn test_title_prefix_bonus() {
    let doc = make_doc("Setup Guide", "", "", "a.html");
    assert_eq!(
        score_match(&doc, "setup"),
        TITLE_PHRASE_SCORE + TITLE_PREFIX_BONUS + TITLE_WORD_SCORE
    );
}

#[test]
fn test_section_phrase_and_words() {
    let doc = make_doc("Contact Us", "Getting Help", "", "c.html");
    assert_eq!(
        score_match(&doc, "getting help"),
        SECTION_PHRASE_SCORE + 2 * SECTION_WORD_SCORE
    );
}

#[test]
fn test_body_counts_every_occurrence() {
    let doc = make_doc("Unrelated", "", "setup then setup again, setup", "d.html");
    assert_eq!(score_match(&doc, "setup"), 3 * BODY_OCCURRENCE_SCORE);
}

#[test]
fn test_body_occurrences_do_not_overlap() {
    let doc = make_doc("Unrelated", "", "aaaa", "d.html");
    assert_eq!(score_match(&doc, "aa"), 2 * BODY_OCCURRENCE_SCORE);
}

#[test]
fn test_title_word_counts_once_per_word() {
    // "setup" twice in the title is still one title word hit
    let doc = make_doc("Setup the setup", "", "", "e.html");
    assert_eq!(
        score_match(&doc, "setup"),
        TITLE_PHRASE_SCORE + TITLE_PREFIX_BONUS + TITLE_WORD_SCORE
    );
}

#[test]
fn test_rules_are_additive() {
    let doc = make_doc(
        "Getting Started",
        "Basics",
        "getting started guide",
        "a.html",
    );
    // phrase 100 + prefix 50 + two title words 60 + body 2 × 2
    assert_eq!(score_match(&doc, "getting started"), 214);
}

// ============================================================================
// QUERY SHAPE
// ============================================================================

#[test]
fn test_single_character_words_dropped() {
    let [_, setup] = <[_; 2]>::try_from(setup_scenario_docs()).unwrap();
    // "a" takes no part in word rules; the phrase "a setup" is nowhere
    assert_eq!(
        score_match(&setup, "a setup"),
        TITLE_WORD_SCORE + 2 * BODY_OCCURRENCE_SCORE
    );
}

#[test]
fn test_case_insensitive() {
    let [_, setup] = <[_; 2]>::try_from(setup_scenario_docs()).unwrap();
    let expected = score_match(&setup, "setup");
    for query in ["SETUP", "Setup", "sEtUp"] {
        assert_eq!(score_match(&setup, query), expected, "query {query:?}");
    }
}

#[test]
fn test_no_match_scores_zero() {
    let [started, _] = <[_; 2]>::try_from(setup_scenario_docs()).unwrap();
    assert_eq!(score_match(&started, "setup"), 0);
    assert_eq!(score_match(&started, "zzz"), 0);
}

#[test]
fn test_exact_title_scores_at_least_150() {
    for title in ["Billing", "Two-Factor Authentication", "FAQ"] {
        let doc = make_doc(title, "Misc", "", "x.html");
        for query in [title.to_string(), title.to_lowercase(), title.to_uppercase()] {
            assert!(
                score_match(&doc, &query) >= TITLE_PHRASE_SCORE + TITLE_PREFIX_BONUS,
                "title {title:?} query {query:?}"
            );
        }
    }
}

#[test]
fn test_punctuation_is_literal() {
    let doc = make_doc("C++ (advanced)", "", "c++ c++", "cpp.html");
    // prefix phrase + title word + two body hits
    assert_eq!(score_match(&doc, "c++"), 100 + 50 + 30 + 4);
    assert_eq!(score_match(&doc, ".*"), 0);
}
