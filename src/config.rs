// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget configuration.
//!
//! Everything a host page might reasonably want to tune, with defaults that
//! match the shipped help center. The browser binding deserializes this from
//! an optional JS object, so every field is optional there:
//!
//! ```js
//! SearchWidget.mount("searchInput", { graceDelayMs: 200, nestedDirs: [] });
//! ```

use crate::search::SearchOptions;
use serde::Deserialize;
use std::time::Duration;

/// Quiet period after the last keystroke before a search runs.
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// Delay before hiding the dropdown, long enough for a click on a result to
/// land first.
pub const DEFAULT_GRACE_DELAY_MS: u64 = 300;

/// Characters of article content shown in a result row.
pub const DEFAULT_EXCERPT_CHARS: usize = 120;

/// Index file name, relative to the site root.
pub const DEFAULT_INDEX_FILE: &str = "search-index.json";

/// Full-results page, relative to the site root.
pub const DEFAULT_RESULTS_PAGE: &str = "search.html";

/// Subdirectories whose pages sit one level below the site root.
pub const DEFAULT_NESTED_DIRS: &[&str] = &["sections", "articles"];

/// Tunables for one mounted widget.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Debounce delay in milliseconds (default: 150)
    pub debounce_ms: u64,
    /// Grace delay before hiding, in milliseconds (default: 300)
    pub grace_delay_ms: u64,
    /// Shortest trimmed query that triggers a search (default: 2)
    pub min_query_len: usize,
    /// Maximum number of results to render (default: 10)
    pub limit: usize,
    /// Excerpt length in characters (default: 120)
    pub excerpt_chars: usize,
    /// Index file name (default: "search-index.json")
    pub index_file: String,
    /// Full-results page name (default: "search.html")
    pub results_page: String,
    /// Directories that make a page "nested" (default: ["sections", "articles"]).
    /// Empty means every page resolves links relative to itself.
    pub nested_dirs: Vec<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        let search = SearchOptions::default();
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            grace_delay_ms: DEFAULT_GRACE_DELAY_MS,
            min_query_len: search.min_query_len,
            limit: search.limit,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            index_file: DEFAULT_INDEX_FILE.to_string(),
            results_page: DEFAULT_RESULTS_PAGE.to_string(),
            nested_dirs: DEFAULT_NESTED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl WidgetConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn grace_delay(&self) -> Duration {
        Duration::from_millis(self.grace_delay_ms)
    }

    /// The subset the query engine cares about.
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            limit: self.limit,
            min_query_len: self.min_query_len,
        }
    }
}
