// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the docsift CLI.
//!
//! OneDark on dark terminals, One Light on light ones. `DOCSIFT_THEME`
//! ("dark" / "light") wins, then the `COLORFGBG` hint, then dark. Colors are
//! dropped entirely when stdout is not a TTY or `NO_COLOR` is set, so piped
//! output stays greppable.

use docsift::{Fragment, Highlighted};
use std::sync::OnceLock;

/// Width between the box borders.
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("DOCSIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up are light, except 8 (dark gray)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// A palette slot: (OneDark, One Light).
type Swatch = ((u8, u8, u8), (u8, u8, u8));

const GREEN: Swatch = ((152, 195, 121), (80, 161, 79));
const YELLOW: Swatch = ((229, 192, 123), (193, 132, 1));
const BLUE: Swatch = ((97, 175, 239), (64, 120, 242));
const CYAN: Swatch = ((86, 182, 194), (1, 132, 188));
const GRAY: Swatch = ((92, 99, 112), (160, 161, 167));
const BRIGHT_GREEN: Swatch = ((166, 226, 46), (68, 140, 39));

fn paint(swatch: Swatch) -> String {
    match theme() {
        Theme::Dark => rgb(swatch.0),
        Theme::Light => rgb(swatch.1),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR`.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn themed(swatch: Swatch, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), paint(swatch), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length as seen on screen, skipping ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `max` visible characters, ending in `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        paint(GRAY)
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!(
        "{b}│{r} {}{}{b}│{r}",
        content,
        " ".repeat(pad),
        b = border(),
        r = reset()
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{b}┌{r}{}{b}{}┐{r}",
        label_part,
        "─".repeat(remaining),
        b = border(),
        r = reset()
    );
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{b}├{r}{}{b}{}┤{r}",
        label_part,
        "─".repeat(remaining),
        b = border(),
        r = reset()
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Highlighted text for the terminal: marked spans bold yellow, or wrapped
/// in `[` `]` when colors are off.
pub fn highlighted(text: &Highlighted) -> String {
    if use_colors() {
        let open = format!("{}{}", BOLD, paint(YELLOW));
        text.render_with(&open, RESET)
    } else {
        text.render_with("[", "]")
    }
}

/// Highlighted text cut to `max` visible characters. Marks that fall past
/// the cut are dropped with the text.
pub fn highlighted_truncated(text: &Highlighted, max: usize) -> String {
    let plain = text.to_string();
    if plain.chars().count() <= max {
        return highlighted(text);
    }

    let mut budget = max.saturating_sub(1);
    let mut kept = Highlighted::default();
    let mut fragments = Vec::new();
    for fragment in text.fragments() {
        if budget == 0 {
            break;
        }
        let piece: String = fragment.text().chars().take(budget).collect();
        budget -= piece.chars().count();
        fragments.push(match fragment {
            Fragment::Plain(_) => Fragment::Plain(piece),
            Fragment::Marked(_) => Fragment::Marked(piece),
        });
    }
    fragments.push(Fragment::Plain("…".to_string()));
    kept.extend(fragments);
    highlighted(&kept)
}

/// Score colored by strength (title-level, word-level, body-only).
pub fn score_value(score: u32) -> String {
    let text = format!("{:>4}", score);
    if !use_colors() {
        return text;
    }
    let swatch = if score >= 100 {
        BRIGHT_GREEN
    } else if score >= 30 {
        GREEN
    } else if score >= 10 {
        YELLOW
    } else {
        GRAY
    };
    themed(swatch, &[], &text)
}

pub fn section_label(section: &str) -> String {
    themed(CYAN, &[], section)
}

pub fn link(href: &str) -> String {
    themed(BLUE, &[DIM], href)
}

pub fn dim(text: &str) -> String {
    themed(GRAY, &[], text)
}
