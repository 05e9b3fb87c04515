// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: score everything, keep the best ten.
//!
//! There is no inverted index here. A help center has a few hundred articles
//! and the widget scores every one of them on each (debounced) query, which
//! finishes well inside a frame. The cost is bounded by
//! `documents × query words`.

pub mod utils;

use crate::loader::SearchIndex;
use crate::scoring::{ranking::rank, score_prepared};
use crate::types::ScoredDocument;
use log::debug;
use serde::Deserialize;
use utils::{char_len, query_words};

/// Search options. Defaults match the shipped widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Maximum number of results to return (default: 10)
    pub limit: usize,
    /// Shortest trimmed query that gets scored (default: 2)
    pub min_query_len: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            min_query_len: 2,
        }
    }
}

/// Rank the index against `query` with default options.
///
/// Returns at most ten results, best first, ties in index order. Returns
/// nothing when the query is shorter than two characters or the index has
/// not loaded yet. Use [`SearchIndex::is_loaded`] to tell those apart from
/// "no matches".
pub fn perform_search<'a>(query: &str, index: &'a SearchIndex) -> Vec<ScoredDocument<'a>> {
    perform_search_with(query, index, &SearchOptions::default())
}

/// Rank the index against `query`.
pub fn perform_search_with<'a>(
    query: &str,
    index: &'a SearchIndex,
    options: &SearchOptions,
) -> Vec<ScoredDocument<'a>> {
    if char_len(query.trim()) < options.min_query_len {
        return Vec::new();
    }

    if !index.is_loaded() {
        debug!("search index not loaded yet, skipping {:?}", query);
        return Vec::new();
    }

    debug!("searching for {:?}", query);

    let query_lower = query.to_lowercase();
    let words = query_words(&query_lower);

    let scored: Vec<ScoredDocument<'a>> = index
        .documents()
        .iter()
        .enumerate()
        .map(|(position, doc)| ScoredDocument {
            doc,
            position,
            score: score_prepared(doc, &query_lower, &words),
        })
        .collect();

    let results = rank(scored, options.limit);
    debug!("found {} results for {:?}", results.len(), query);
    results
}
