//! Client-side search for static documentation sites.
//!
//! A help center ships a `search-index.json` next to its pages. This crate
//! loads it once, scores every article against what the reader types, and
//! drives a dropdown of ranked, highlighted results with keyboard
//! navigation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  loader.rs  │────▶│  search/     │────▶│ highlight.rs │
//! │ (SearchIndex│     │ (perform_    │     │ (Highlighted,│
//! │  BasePath)  │     │  search)     │     │  excerpt)    │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │ scoring/           │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    controller/                       │
//! │  (SearchController, DebouncedTrigger, Panel,         │
//! │   ResultsSurface - host-agnostic)                    │
//! └─────────────────────────────────────────────────────┘
//!        │
//!        ▼
//!   wasm.rs (DOM surface, fetch, setTimeout)   main.rs (CLI)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use docsift::{perform_search, Document, SearchIndex};
//!
//! let index = SearchIndex::from_documents(vec![Document { ... }]);
//! for hit in perform_search("setup", &index) {
//!     println!("{} ({})", hit.doc.title, hit.score);
//! }
//! ```

pub mod config;
pub mod controller;
mod error;
pub mod highlight;
pub mod loader;
mod scoring;
pub mod search;
pub mod testing;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::WidgetConfig;
pub use controller::surface::{panel_html, Panel, ResultRow, ResultsSurface};
pub use controller::timer::{DebouncedTrigger, Scheduler, TimerKind, TimerToken};
pub use controller::{Key, KeyOutcome, Phase, SearchController, SearchState};
pub use error::LoadError;
pub use highlight::{excerpt, highlight_text, Fragment, Highlighted};
pub use loader::{load_index_file, parse_index, BasePath, LoadState, SearchIndex};
pub use scoring::ranking::{compare_scored, rank};
pub use scoring::{
    score_match, score_prepared, BODY_OCCURRENCE_SCORE, SECTION_PHRASE_SCORE, SECTION_WORD_SCORE,
    TITLE_PHRASE_SCORE, TITLE_PREFIX_BONUS, TITLE_WORD_SCORE,
};
pub use search::utils::query_words;
pub use search::{perform_search, perform_search_with, SearchOptions};
pub use types::{Document, ScoredDocument, SearchResultOutput};
