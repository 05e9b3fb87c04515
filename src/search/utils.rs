// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for scoring and highlighting.
//!
//! Query parsing and case-insensitive matching. Both the scorer and the
//! highlighter split the query the same way; keeping one copy here stops the
//! two from drifting apart.

/// Shortest query word that takes part in per-word rules.
pub const MIN_WORD_CHARS: usize = 2;

/// Split a query into lowercase words, dropping single-character tokens.
///
/// # Example
///
/// ```ignore
/// let words = query_words("How to a Setup");
/// assert_eq!(words, vec!["how", "to", "setup"]);
/// ```
pub fn query_words(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_WORD_CHARS)
        .map(str::to_string)
        .collect()
}

/// Length in characters, the unit every query threshold is expressed in.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// If `haystack` starts with `needle` ignoring case, return how many bytes
/// of `haystack` the match covers.
///
/// `needle` must already be lowercase. The match has to end on a character
/// boundary of `haystack`: if lowercasing one haystack character expands to
/// several and the needle ends halfway through them, that is not a match.
pub fn match_len_ci(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }

    let mut wanted = needle.chars().map(fold_sigma).peekable();
    for (offset, ch) in haystack.char_indices() {
        for lower in ch.to_lowercase().map(fold_sigma) {
            if wanted.next() != Some(lower) {
                return None;
            }
        }
        if wanted.peek().is_none() {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}

/// `str::to_lowercase` writes a word-final `Σ` as `ς`, `char::to_lowercase`
/// always as `σ`.
fn fold_sigma(ch: char) -> char {
    if ch == 'ς' {
        'σ'
    } else {
        ch
    }
}

/// Find the first case-insensitive occurrence of `needle` in `haystack`,
/// returning its byte range in `haystack`.
pub fn find_ci(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    haystack.char_indices().find_map(|(start, _)| {
        match_len_ci(&haystack[start..], needle).map(|len| (start, start + len))
    })
}
