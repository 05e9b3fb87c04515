// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! There is exactly one way for the widget to fail: the index doesn't load.
//! Even that isn't fatal. The state installer logs it and carries on with an
//! empty index, so these errors only ever reach the log and the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Why the search index could not be installed.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The server answered, but not with a 2xx.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The request never completed (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// The body was not a JSON array of documents.
    #[error("malformed search index: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading a local index file failed (CLI and tests).
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One load attempt per page view. A second install is refused.
    #[error("search index load was already attempted")]
    AlreadyAttempted,
}
