// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlighting.
//!
//! Highlighting splits text at byte offsets found by case-insensitive
//! matching. A bad offset is a panic on a char boundary; a bad merge loses
//! or duplicates text.

#![no_main]

use docsift::{excerpt, highlight_text};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, String)| {
    let (text, query) = input;
    let text: String = text.chars().take(2_000).collect();
    let query: String = query.chars().take(200).collect();

    let highlighted = highlight_text(&text, &query);

    // INVARIANT 1: the text survives untouched
    assert_eq!(highlighted.to_string(), text);

    // INVARIANT 2: no empty fragments, no two neighbours of the same kind
    let fragments = highlighted.fragments();
    assert!(fragments.iter().all(|f| !f.text().is_empty()));
    for pair in fragments.windows(2) {
        assert_ne!(pair[0].is_marked(), pair[1].is_marked());
    }

    // INVARIANT 3: the HTML never carries raw angle brackets from the text
    let html = highlighted.to_html();
    let stripped = html.replace("<mark>", "").replace("</mark>", "");
    assert!(!stripped.contains('<') && !stripped.contains('>'));

    // Excerpts cut on character boundaries
    let cut = excerpt(&text, 120);
    assert!(cut.ends_with("..."));
});
