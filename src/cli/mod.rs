// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Two subcommands: `search` runs a query against a `search-index.json` the
//! way the widget would and shows the dropdown rows, and `inspect` summarizes
//! what an index contains so a site author can spot missing fields before
//! shipping it.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Query and inspect documentation search indexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index file and display results
    Search {
        /// Path to search-index.json
        file: String,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Page pathname the search runs from (decides the link prefix)
        ///
        /// Pages under /sections/ or /articles/ get "../" in front of every
        /// result link, exactly as the widget resolves them in the browser.
        #[arg(long, default_value = "/")]
        page: String,

        /// Emit results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summarize an index file
    Inspect {
        /// Path to search-index.json
        file: String,
    },
}
