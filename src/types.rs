// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records a search works with.
//!
//! A [`Document`] is one article as it appears in `search-index.json`. The
//! index builder emits more fields than we care about (`id`, `section_id`,
//! `updated`); serde drops them. Everything except `url` is optional, and a
//! missing or `null` text field reads as the empty string so scoring never
//! has to think about `Option`.
//!
//! A [`ScoredDocument`] pairs a borrowed document with its score for one
//! query. It never outlives the search call that produced it.

use serde::{Deserialize, Deserializer, Serialize};

/// One searchable article.
///
/// **Invariant**: immutable once loaded. The index swaps whole `Vec`s, it
/// never edits a document in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Article title, the strongest scoring field.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Category label shown under the title.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub section: String,
    /// Flattened body text. Only used for frequency scoring.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub search_text: String,
    /// Plain-text body the excerpt is cut from.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    /// Link target, relative to the site root.
    pub url: String,
}

impl Document {
    /// Section label for display: `Unknown` for uncategorised articles.
    pub fn section_label(&self) -> &str {
        if self.section.is_empty() {
            "Unknown"
        } else {
            &self.section
        }
    }
}

/// Treat `"field": null` the same as a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A document with its relevance score for one query.
///
/// `position` is the document's slot in the index. Ranking uses it as the
/// tiebreaker, so equal scores come back in authoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredDocument<'a> {
    pub doc: &'a Document,
    pub position: usize,
    pub score: u32,
}

/// Serializable projection of a scored document for JSON consumers (the CLI's
/// `--json` flag and the browser binding's `query()`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultOutput {
    pub title: String,
    pub section: String,
    pub url: String,
    pub score: u32,
}

impl SearchResultOutput {
    /// Project a scored document, resolving its url against `href`.
    pub fn new(scored: &ScoredDocument<'_>, href: String) -> Self {
        Self {
            title: scored.doc.title.clone(),
            section: scored.doc.section_label().to_string(),
            url: href,
            score: scored.score,
        }
    }
}
