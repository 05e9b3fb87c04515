// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The presentation contract.
//!
//! The controller never touches a DOM. It describes what the dropdown should
//! show as a [`Panel`] and hands it to a [`ResultsSurface`]. The browser
//! binding implements the trait against real elements; tests implement it
//! with a recorder.

use crate::highlight::{escape_html, Highlighted};

/// One rendered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// Title with query words marked.
    pub title: Highlighted,
    /// Section label (`Unknown` when the document has none).
    pub section: String,
    /// Content excerpt with query words marked.
    pub excerpt: Highlighted,
    /// Navigable target, already resolved against the base path.
    pub href: String,
    pub score: u32,
}

/// What the dropdown shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// The index hasn't arrived yet. Deliberately not "no results".
    Loading,
    /// Searched, found nothing.
    Empty { query: String },
    /// Ranked rows plus a link to the full-results page.
    Results {
        rows: Vec<ResultRow>,
        see_all_href: String,
    },
}

impl Panel {
    /// Rows that keyboard selection can land on.
    pub fn rows(&self) -> &[ResultRow] {
        match self {
            Panel::Results { rows, .. } => rows,
            Panel::Loading | Panel::Empty { .. } => &[],
        }
    }
}

/// Whatever hosts the dropdown.
pub trait ResultsSurface {
    /// Replace the dropdown content. Any previous selection is gone.
    fn render(&mut self, panel: &Panel);

    /// Show or hide the dropdown.
    fn set_visible(&mut self, visible: bool);

    /// Mark exactly one row as selected and scroll it into view, or clear
    /// the selection with `None`.
    fn select(&mut self, row: Option<usize>);

    /// Follow a link (a result row or the full-results page).
    fn navigate(&mut self, href: &str);
}

// =============================================================================
// HTML RENDERING
// =============================================================================

/// CSS class on each result anchor. Hosts query it to apply selection.
pub const RESULT_ITEM_CLASS: &str = "search-result-item";

/// CSS class toggled on the selected row.
pub const SELECTED_CLASS: &str = "selected";

/// Render a panel to the help center's dropdown markup.
pub fn panel_html(panel: &Panel) -> String {
    match panel {
        Panel::Loading => {
            r#"<div class="search-no-results">Loading search index...</div>"#.to_string()
        }
        Panel::Empty { query } => format!(
            r#"<div class="search-no-results">No results found for "{}"<div class="search-no-results-hint">Try different keywords</div></div>"#,
            escape_html(query)
        ),
        Panel::Results { rows, see_all_href } => {
            let mut html = String::from(r#"<div class="search-results-list">"#);
            for (index, row) in rows.iter().enumerate() {
                html.push_str(&format!(
                    concat!(
                        r#"<a href="{href}" class="{class}" data-index="{index}">"#,
                        r#"<div class="search-result-title">{title}</div>"#,
                        r#"<div class="search-result-meta">{section}</div>"#,
                        r#"<div class="search-result-excerpt">{excerpt}</div>"#,
                        "</a>"
                    ),
                    href = escape_html(&row.href),
                    class = RESULT_ITEM_CLASS,
                    index = index,
                    title = row.title.to_html(),
                    section = escape_html(&row.section),
                    excerpt = row.excerpt.to_html(),
                ));
            }
            html.push_str("</div>");
            html.push_str(&format!(
                r#"<div class="search-results-footer"><a href="{}">See all results →</a></div>"#,
                escape_html(see_all_href)
            ));
            html
        }
    }
}
