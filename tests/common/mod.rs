//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docsift::testing::{ManualScheduler, RecordingSurface};
use docsift::{BasePath, Document, SearchController, SearchIndex, WidgetConfig};
use std::io::Write;
use tempfile::NamedTempFile;

// Re-export canonical test utilities from docsift::testing
pub use docsift::testing::{advance, make_doc, SurfaceEvent};

pub type TestController = SearchController<RecordingSurface, ManualScheduler>;

// ============================================================================
// FIXTURES
// ============================================================================

/// The two-article index from the "setup" walkthrough.
pub fn setup_scenario_docs() -> Vec<Document> {
    vec![
        make_doc(
            "Getting Started",
            "Basics",
            "getting started guide",
            "a.html",
        ),
        make_doc(
            "Advanced Setup",
            "Config",
            "advanced setup config setup",
            "b.html",
        ),
    ]
}

/// A small help center: a handful of sections, overlapping vocabulary, and
/// one article with no section label.
pub fn help_center_docs() -> Vec<Document> {
    vec![
        make_doc(
            "Getting Started",
            "Basics",
            "create an account and sign in to get started",
            "articles/getting-started.html",
        ),
        make_doc(
            "Password Reset",
            "Account",
            "reset your password from the sign in page password email",
            "articles/password-reset.html",
        ),
        make_doc(
            "Billing Overview",
            "Billing",
            "invoices payment methods and billing cycles",
            "articles/billing-overview.html",
        ),
        make_doc(
            "Update Payment Method",
            "Billing",
            "change the card used for payment payment",
            "articles/update-payment.html",
        ),
        make_doc(
            "Account Settings",
            "Account",
            "profile email password and notification settings",
            "articles/account-settings.html",
        ),
        make_doc(
            "Two-Factor Authentication",
            "Security",
            "protect your account with a second factor",
            "articles/two-factor.html",
        ),
        make_doc(
            "Release Notes",
            "",
            "what changed in each release",
            "articles/release-notes.html",
        ),
    ]
}

pub fn help_center_index() -> SearchIndex {
    SearchIndex::from_documents(help_center_docs())
}

/// Write `docs` as a `search-index.json` file.
pub fn write_index_file(docs: &[Document]) -> NamedTempFile {
    let json = serde_json::to_vec(docs).expect("serialize fixture");
    write_raw_index(&json)
}

/// Write arbitrary bytes where an index file is expected.
pub fn write_raw_index(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

// ============================================================================
// CONTROLLERS
// ============================================================================

/// Controller on a root page whose index is still loading.
pub fn pending_controller() -> TestController {
    SearchController::new(
        WidgetConfig::default(),
        BasePath::root(),
        RecordingSurface::default(),
        ManualScheduler::default(),
    )
}

/// Controller with `docs` already loaded, running on `pathname`.
pub fn loaded_controller(docs: Vec<Document>, pathname: &str) -> TestController {
    let config = WidgetConfig::default();
    let base = BasePath::resolve(pathname, &config.nested_dirs);
    SearchController::with_index(
        config,
        base,
        SearchIndex::from_documents(docs),
        RecordingSurface::default(),
        ManualScheduler::default(),
    )
}

/// Type `query` one character at a time, `gap_ms` apart.
pub fn type_slowly(controller: &mut TestController, query: &str, gap_ms: u64) {
    let mut typed = String::new();
    for c in query.chars() {
        typed.push(c);
        controller.on_input(&typed);
        advance(controller, gap_ms);
    }
}
