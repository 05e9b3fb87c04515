// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Scores are additive integer points. Every rule that fires adds its points;
//! nothing is exclusive. The weights are tuned so that a whole-query title hit
//! dominates, word hits in the title come next, and body frequency only
//! separates documents that tie on metadata.
//!
//! # Rules
//!
//! | Rule                                   | Points          |
//! |----------------------------------------|-----------------|
//! | whole query in title                   | 100             |
//! | ... and title starts with query        | +50             |
//! | each query word in title               | 30              |
//! | whole query in section                 | 20              |
//! | each query word in section             | 10              |
//! | each occurrence of a word in body text | 2               |
//!
//! Query words are the whitespace-separated tokens of at least two characters.
//! The whole-query rules still apply to one-character queries, which is why
//! [`crate::perform_search`] refuses those before scoring.
//!
//! # Key Invariant: exact title ≥ 150
//!
//! A query equal to a document's title (any casing) always scores at least
//! `TITLE_PHRASE_SCORE + TITLE_PREFIX_BONUS`, whatever else is in the index.

use crate::search::utils::query_words;
use crate::types::Document;

/// Whole query appears somewhere in the title.
pub const TITLE_PHRASE_SCORE: u32 = 100;

/// Title starts with the whole query.
pub const TITLE_PREFIX_BONUS: u32 = 50;

/// Per query word found in the title.
pub const TITLE_WORD_SCORE: u32 = 30;

/// Whole query appears somewhere in the section label.
pub const SECTION_PHRASE_SCORE: u32 = 20;

/// Per query word found in the section label.
pub const SECTION_WORD_SCORE: u32 = 10;

/// Per occurrence of a query word in the body text.
pub const BODY_OCCURRENCE_SCORE: u32 = 2;

/// Score a document against a query. Zero means "not a match".
///
/// Pure and case-insensitive: `score_match(doc, "Title")`,
/// `score_match(doc, "title")` and `score_match(doc, "TITLE")` agree.
///
/// # Example
///
/// ```ignore
/// let doc = Document { title: "Advanced Setup".into(), url: "b.html".into(), ..Default::default() };
/// assert_eq!(score_match(&doc, "setup"), 100 + 30);
/// ```
pub fn score_match(doc: &Document, query: &str) -> u32 {
    let query = query.to_lowercase();
    let words = query_words(&query);
    score_prepared(doc, &query, &words)
}

/// Scoring with the query already lowercased and split.
///
/// `perform_search` scores every document against the same query, so it
/// prepares the query once and calls this in the loop.
pub fn score_prepared(doc: &Document, query_lower: &str, words: &[String]) -> u32 {
    let title = doc.title.to_lowercase();
    let section = doc.section.to_lowercase();
    let body = doc.search_text.to_lowercase();

    let mut score: u32 = 0;

    if title.contains(query_lower) {
        score = score.saturating_add(TITLE_PHRASE_SCORE);
        if title.starts_with(query_lower) {
            score = score.saturating_add(TITLE_PREFIX_BONUS);
        }
    }

    for word in words {
        if title.contains(word.as_str()) {
            score = score.saturating_add(TITLE_WORD_SCORE);
        }
    }

    if section.contains(query_lower) {
        score = score.saturating_add(SECTION_PHRASE_SCORE);
    }

    for word in words {
        if section.contains(word.as_str()) {
            score = score.saturating_add(SECTION_WORD_SCORE);
        }
    }

    for word in words {
        let occurrences = body.matches(word.as_str()).count() as u32;
        score = score.saturating_add(occurrences.saturating_mul(BODY_OCCURRENCE_SCORE));
    }

    score
}
