// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting and excerpts for result rows.
//!
//! Highlighting works on fragments rather than on a marked-up string. Each
//! query word gets its own pass, in query order, and each pass splits every
//! fragment (marked or not) around that word's occurrences. A match inside
//! an already-marked fragment stays marked, and neighbouring marked pieces
//! merge, so overlapping words simply produce one wider mark. Marker tags
//! never exist until render time, which means a later word can't match the
//! `mark` in `<mark>`.

use crate::search::utils::{find_ci, query_words};
use std::fmt;

/// Opening marker used by [`Highlighted::to_html`].
pub const MARK_OPEN: &str = "<mark>";

/// Closing marker used by [`Highlighted::to_html`].
pub const MARK_CLOSE: &str = "</mark>";

/// Appended to every excerpt.
pub const ELLIPSIS: &str = "...";

/// A piece of highlighted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Plain(String),
    Marked(String),
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Plain(text) | Fragment::Marked(text) => text,
        }
    }

    pub fn is_marked(&self) -> bool {
        matches!(self, Fragment::Marked(_))
    }
}

/// Text with match spans marked, original casing preserved.
///
/// `Display` prints the bare text. Use [`to_html`](Self::to_html) or
/// [`render_with`](Self::render_with) to get markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlighted {
    fragments: Vec<Fragment>,
}

impl Highlighted {
    /// Unmarked text.
    pub fn plain(text: &str) -> Self {
        let mut highlighted = Self::default();
        highlighted.push(Fragment::Plain(text.to_string()));
        highlighted
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The marked spans, in order.
    pub fn marked(&self) -> impl Iterator<Item = &str> {
        self.fragments
            .iter()
            .filter(|f| f.is_marked())
            .map(Fragment::text)
    }

    pub fn has_marks(&self) -> bool {
        self.fragments.iter().any(Fragment::is_marked)
    }

    /// Render with custom markers around each marked span. Text is emitted
    /// verbatim; escaping is the caller's business.
    pub fn render_with(&self, open: &str, close: &str) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Plain(text) => out.push_str(text),
                Fragment::Marked(text) => {
                    out.push_str(open);
                    out.push_str(text);
                    out.push_str(close);
                }
            }
        }
        out
    }

    /// Render as HTML: text escaped, marks as `<mark>…</mark>`.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Plain(text) => out.push_str(&escape_html(text)),
                Fragment::Marked(text) => {
                    out.push_str(MARK_OPEN);
                    out.push_str(&escape_html(text));
                    out.push_str(MARK_CLOSE);
                }
            }
        }
        out
    }

    /// Append a fragment, merging with the previous one when they're the
    /// same kind. Empty fragments are dropped.
    fn push(&mut self, fragment: Fragment) {
        if fragment.text().is_empty() {
            return;
        }
        let same_kind = self
            .fragments
            .last()
            .is_some_and(|last| last.is_marked() == fragment.is_marked());
        if same_kind {
            if let Some(Fragment::Plain(prev) | Fragment::Marked(prev)) = self.fragments.last_mut() {
                prev.push_str(fragment.text());
            }
        } else {
            self.fragments.push(fragment);
        }
    }

    /// One pass: split every fragment around occurrences of `word`.
    fn mark_word(self, word: &str) -> Self {
        let mut out = Self::default();
        for fragment in self.fragments {
            let marked = fragment.is_marked();
            let mut rest = fragment.text();
            while let Some((start, end)) = find_ci(rest, word) {
                let before = &rest[..start];
                out.push(if marked {
                    Fragment::Marked(before.to_string())
                } else {
                    Fragment::Plain(before.to_string())
                });
                out.push(Fragment::Marked(rest[start..end].to_string()));
                rest = &rest[end..];
            }
            out.push(if marked {
                Fragment::Marked(rest.to_string())
            } else {
                Fragment::Plain(rest.to_string())
            });
        }
        out
    }
}

impl fmt::Display for Highlighted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment.text())?;
        }
        Ok(())
    }
}

impl Extend<Fragment> for Highlighted {
    fn extend<I: IntoIterator<Item = Fragment>>(&mut self, iter: I) {
        for fragment in iter {
            self.push(fragment);
        }
    }
}

/// Mark every case-insensitive occurrence of each query word in `text`.
///
/// Words are split the same way scoring splits them (whitespace, two
/// characters or more). An empty query leaves the text untouched.
///
/// # Example
///
/// ```ignore
/// let h = highlight_text("The Quick Fox", "quick fox");
/// assert_eq!(h.to_html(), "The <mark>Quick</mark> <mark>Fox</mark>");
/// ```
pub fn highlight_text(text: &str, query: &str) -> Highlighted {
    query_words(query)
        .iter()
        .fold(Highlighted::plain(text), |acc, word| acc.mark_word(word))
}

/// Cut the display excerpt: the first `max_chars` characters of the
/// content, then `...` whether or not anything was cut.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let cut = content
        .char_indices()
        .nth(max_chars)
        .map_or(content.len(), |(offset, _)| offset);
    format!("{}{}", &content[..cut], ELLIPSIS)
}

/// Escape text for inclusion in HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
