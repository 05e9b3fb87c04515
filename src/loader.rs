// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index loading: one attempt, then live with the outcome.
//!
//! The widget fetches `search-index.json` once per page view. If it arrives,
//! it becomes the index for the rest of the page's life. If it doesn't, the
//! index stays empty and `is_loaded()` stays false forever. No retry, no
//! timeout, no partial load. The failure goes to the log and nowhere else,
//! since "no results yet" is already a valid thing for the dropdown to show.
//!
//! Where the index lives depends on how deep the current page is. Article and
//! section pages sit one directory below the site root, so everything they
//! link to needs a `../` prefix. [`BasePath`] works that out once from the
//! page's pathname and applies it to the index URL, result links and the
//! full-results page alike.

use crate::error::LoadError;
use crate::types::Document;
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;

// =============================================================================
// BASE PATH
// =============================================================================

/// Relative prefix that makes site-root links resolve from the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// Prefix for pages nested one level below the root.
    pub const PARENT: &'static str = "../";

    /// Pages at the site root link relative to themselves.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Work out the prefix from a page pathname such as
    /// `/help/articles/article_42.html`.
    ///
    /// Any pathname containing `/<dir>/` for one of `nested_dirs` gets `../`.
    /// Passing no directories gives the flat-site behaviour: always `""`.
    pub fn resolve<S: AsRef<str>>(pathname: &str, nested_dirs: &[S]) -> Self {
        let nested = nested_dirs
            .iter()
            .map(AsRef::as_ref)
            .filter(|dir| !dir.is_empty())
            .any(|dir| pathname.contains(&format!("/{dir}/")));
        if nested {
            Self(Self::PARENT.to_string())
        } else {
            Self::root()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix a site-root-relative link.
    pub fn join(&self, relative: &str) -> String {
        format!("{}{}", self.0, relative)
    }

    /// Link to the full-results page with the raw query as `?q=`.
    pub fn full_results_url(&self, results_page: &str, query: &str) -> String {
        format!("{}{}?q={}", self.0, results_page, urlencoding::encode(query))
    }
}

// =============================================================================
// SEARCH INDEX
// =============================================================================

/// Where the one load attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch still in flight.
    Pending,
    /// Documents installed.
    Loaded,
    /// Fetch failed. Terminal: the index stays empty.
    Failed,
}

/// The immutable document collection for one page view.
///
/// **Invariant**: `state == Loaded` or `documents` is empty. Documents are
/// shared behind an `Arc` and never mutated after install.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    documents: Arc<[Document]>,
    state: LoadState,
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchIndex {
    /// An empty index waiting for its one load.
    pub fn new() -> Self {
        Self {
            documents: Arc::from(Vec::new()),
            state: LoadState::Pending,
        }
    }

    /// An already-loaded index. Tests, the CLI and benches start here.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: Arc::from(documents),
            state: LoadState::Loaded,
        }
    }

    /// Install the outcome of the load attempt.
    ///
    /// Success makes the documents live and returns how many there are.
    /// Failure is logged and handed back; the index stays empty and unloaded.
    /// Any call after the first is refused with [`LoadError::AlreadyAttempted`]
    /// and leaves the first outcome in place.
    pub fn install(&mut self, outcome: Result<Vec<Document>, LoadError>) -> Result<usize, LoadError> {
        if self.state != LoadState::Pending {
            warn!("ignoring second search index load ({:?} already)", self.state);
            return Err(LoadError::AlreadyAttempted);
        }

        match outcome {
            Ok(documents) => {
                let count = documents.len();
                self.documents = Arc::from(documents);
                self.state = LoadState::Loaded;
                info!("search index loaded: {} articles", count);
                Ok(count)
            }
            Err(err) => {
                self.state = LoadState::Failed;
                warn!("failed to load search index: {}", err);
                Err(err)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Decode a `search-index.json` body.
pub fn parse_index(bytes: &[u8]) -> Result<Vec<Document>, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Read and decode an index file from disk.
pub fn load_index_file(path: &Path) -> Result<Vec<Document>, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_index(&bytes)
}
