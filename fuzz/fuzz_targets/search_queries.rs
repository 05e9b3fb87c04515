// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Arbitrary documents and an arbitrary query go through `perform_search`.
//! Emoji, combining marks, characters whose lowercase is longer than
//! themselves: none of it may panic, and the ranking contract must hold.

#![no_main]

use arbitrary::Arbitrary;
use docsift::{perform_search, score_match, Document, SearchIndex};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    docs: Vec<(String, String, String)>,
    query: String,
}

fuzz_target!(|input: Input| {
    // Cap sizes to avoid timeouts
    let query: String = input.query.chars().take(200).collect();
    let docs: Vec<Document> = input
        .docs
        .into_iter()
        .take(50)
        .map(|(title, section, search_text)| Document {
            title,
            section,
            search_text,
            content: String::new(),
            url: "doc.html".to_string(),
        })
        .collect();

    let index = SearchIndex::from_documents(docs);
    let results = perform_search(&query, &index);

    // INVARIANT 1: capped
    assert!(results.len() <= 10, "got {} results", results.len());

    // INVARIANT 2: short queries never match
    if query.trim().chars().count() < 2 {
        assert!(results.is_empty());
    }

    // INVARIANT 3: sorted, stable, positive, and consistent with score_match
    for pair in results.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].position < pair[1].position),
            "out of order: {:?} then {:?}",
            (pair[0].position, pair[0].score),
            (pair[1].position, pair[1].score)
        );
    }
    for result in &results {
        assert!(result.score > 0);
        assert_eq!(result.score, score_match(result.doc, &query));
    }
});
