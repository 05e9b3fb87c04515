// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The interaction controller: keystrokes in, panels out.
//!
//! # State machine
//!
//! ```text
//!            input ≥ 2                 debounce fires
//!   Idle ─────────────▶ Debouncing ───────────────────▶ Loading | Results | Empty
//!    ▲                      │ input < 2 / blur / Esc           │
//!    └──────────────────────┴──── grace delay elapses ◀────────┘
//! ```
//!
//! Selection is orthogonal: it only means something while rows are on
//! screen, and every render resets it.
//!
//! Everything here runs on one thread. The host delivers DOM events and fired
//! timer tokens one at a time; nothing blocks and nothing locks.

pub mod surface;
pub mod timer;

use crate::config::WidgetConfig;
use crate::highlight::{excerpt, highlight_text};
use crate::loader::{BasePath, SearchIndex};
use crate::error::LoadError;
use crate::search::perform_search_with;
use crate::search::utils::char_len;
use crate::types::{Document, SearchResultOutput};
use log::debug;
use surface::{Panel, ResultRow, ResultsSurface};
use timer::{DebouncedTrigger, Scheduler, TimerKind, TimerToken};

/// Where the dropdown is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing to show (or about to be hidden).
    Idle,
    /// A search is scheduled and waiting for typing to settle.
    Debouncing,
    ShowingLoading,
    ShowingResults,
    ShowingEmpty,
}

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

impl Key {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowUp" => Some(Key::ArrowUp),
            "Enter" => Some(Key::Enter),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Whether the host should suppress the event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Consumed: call `preventDefault()`.
    Handled,
    /// Let the browser do its thing (Enter submits the form, etc).
    Ignored,
}

/// Per-page search state.
///
/// **Invariant**: `selected` is `None` or a valid index into `panel.rows()`,
/// and it is `None` right after every render.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub index: SearchIndex,
    query: String,
    panel: Option<Panel>,
    selected: Option<usize>,
    visible: bool,
    phase: Phase,
    debounce: DebouncedTrigger,
    hide: DebouncedTrigger,
}

impl SearchState {
    pub fn new(index: SearchIndex) -> Self {
        Self {
            index,
            query: String::new(),
            panel: None,
            selected: None,
            visible: false,
            phase: Phase::Idle,
            debounce: DebouncedTrigger::new(TimerKind::Search),
            hide: DebouncedTrigger::new(TimerKind::Hide),
        }
    }

    /// Last trimmed query seen.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The panel currently rendered, if any.
    pub fn panel(&self) -> Option<&Panel> {
        self.panel.as_ref()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn search_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    pub fn hide_pending(&self) -> bool {
        self.hide.is_pending()
    }

    fn row_count(&self) -> usize {
        self.panel.as_ref().map_or(0, |panel| panel.rows().len())
    }
}

/// Drives one search box.
pub struct SearchController<S, T> {
    config: WidgetConfig,
    base: BasePath,
    state: SearchState,
    surface: S,
    scheduler: T,
}

impl<S: ResultsSurface, T: Scheduler> SearchController<S, T> {
    /// A controller for a page whose index is still on its way.
    pub fn new(config: WidgetConfig, base: BasePath, surface: S, scheduler: T) -> Self {
        Self::with_index(config, base, SearchIndex::new(), surface, scheduler)
    }

    pub fn with_index(
        config: WidgetConfig,
        base: BasePath,
        index: SearchIndex,
        surface: S,
        scheduler: T,
    ) -> Self {
        Self {
            config,
            base,
            state: SearchState::new(index),
            surface,
            scheduler,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }

    /// URL the host should fetch the index from.
    pub fn index_url(&self) -> String {
        self.base.join(&self.config.index_file)
    }

    /// Rank the index for `raw` without touching the dropdown, links resolved
    /// for this page. Trimmed the same way typed input is.
    pub fn results_for(&self, raw: &str) -> Vec<SearchResultOutput> {
        perform_search_with(raw.trim(), &self.state.index, &self.config.search_options())
            .iter()
            .map(|scored| SearchResultOutput::new(scored, self.base.join(&scored.doc.url)))
            .collect()
    }

    /// Hand over the result of the one index load.
    ///
    /// If the dropdown is sitting on the loading message, it is refreshed
    /// with real results straight away.
    pub fn install_index(
        &mut self,
        outcome: Result<Vec<Document>, LoadError>,
    ) -> Result<usize, LoadError> {
        let installed = self.state.index.install(outcome);
        if installed.is_ok() && self.state.visible && self.state.phase == Phase::ShowingLoading {
            self.run_search();
        }
        installed
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// The input's value changed.
    pub fn on_input(&mut self, raw: &str) {
        let query = raw.trim();
        self.state.debounce.cancel();
        self.state.query = query.to_string();

        if char_len(query) < self.config.min_query_len {
            self.state.phase = Phase::Idle;
            self.schedule_hide();
            return;
        }

        let token = self.state.debounce.arm();
        self.state.phase = Phase::Debouncing;
        self.scheduler.schedule(self.config.debounce(), token);
    }

    /// The input gained focus. A pre-filled query is searched immediately.
    pub fn on_focus(&mut self, raw: &str) {
        let query = raw.trim();
        if char_len(query) < self.config.min_query_len {
            return;
        }
        self.state.debounce.cancel();
        self.state.query = query.to_string();
        self.run_search();
    }

    /// The input lost focus.
    pub fn on_blur(&mut self) {
        self.dismiss();
    }

    /// A pointer went down somewhere on the page. Returns true when the host
    /// should call `preventDefault()` so the input keeps focus while the
    /// click on a result completes.
    pub fn on_pointer_down(&mut self, inside_dropdown: bool) -> bool {
        inside_dropdown
    }

    /// A key went down in the input.
    pub fn on_key(&mut self, key: Key) -> KeyOutcome {
        if key == Key::Escape {
            if self.state.visible || self.state.search_pending() {
                self.dismiss();
            }
            return KeyOutcome::Ignored;
        }
        if !self.state.visible {
            return KeyOutcome::Ignored;
        }

        match key {
            Key::ArrowDown => {
                let count = self.state.row_count();
                self.state.selected = match self.state.selected {
                    None if count > 0 => Some(0),
                    None => None,
                    Some(i) => Some((i + 1).min(count.saturating_sub(1))),
                };
                self.surface.select(self.state.selected);
                KeyOutcome::Handled
            }
            Key::ArrowUp => {
                self.state.selected = match self.state.selected {
                    None | Some(0) => None,
                    Some(i) => Some(i - 1),
                };
                self.surface.select(self.state.selected);
                KeyOutcome::Handled
            }
            Key::Enter => {
                let href = self.state.selected.and_then(|i| {
                    self.state
                        .panel
                        .as_ref()
                        .and_then(|panel| panel.rows().get(i))
                        .map(|row| row.href.clone())
                });
                match href {
                    Some(href) => {
                        self.surface.navigate(&href);
                        KeyOutcome::Handled
                    }
                    None => KeyOutcome::Ignored,
                }
            }
            Key::Escape => KeyOutcome::Ignored,
        }
    }

    /// The search form was submitted. The host always suppresses the native
    /// submission; a non-empty query goes to the full-results page.
    pub fn on_submit(&mut self, raw: &str) {
        let query = raw.trim();
        if query.is_empty() {
            return;
        }
        let href = self
            .base
            .full_results_url(&self.config.results_page, query);
        self.surface.navigate(&href);
    }

    /// A scheduled task came due. Stale tokens are ignored.
    pub fn on_timer(&mut self, token: TimerToken) {
        match token.kind {
            TimerKind::Search => {
                if self.state.debounce.fire(token) {
                    self.run_search();
                }
            }
            TimerKind::Hide => {
                if self.state.hide.fire(token) {
                    self.hide_now();
                }
            }
        }
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    /// Blur and Escape: a search still waiting on the debounce must not
    /// reopen the dropdown after it has been dismissed.
    fn dismiss(&mut self) {
        self.state.debounce.cancel();
        self.state.phase = Phase::Idle;
        self.schedule_hide();
    }

    fn schedule_hide(&mut self) {
        let token = self.state.hide.arm();
        self.scheduler.schedule(self.config.grace_delay(), token);
    }

    fn hide_now(&mut self) {
        self.state.hide.cancel();
        self.state.visible = false;
        if self.state.phase != Phase::Debouncing {
            self.state.phase = Phase::Idle;
        }
        self.surface.set_visible(false);
    }

    /// Search the current query and put the outcome on screen.
    fn run_search(&mut self) {
        let query = self.state.query.clone();
        let panel = self.build_panel(&query);

        self.state.phase = match &panel {
            Panel::Loading => Phase::ShowingLoading,
            Panel::Empty { .. } => Phase::ShowingEmpty,
            Panel::Results { .. } => Phase::ShowingResults,
        };
        debug!("rendering {:?} for {:?}", self.state.phase, query);

        self.state.hide.cancel();
        self.state.selected = None;
        self.surface.render(&panel);
        self.state.panel = Some(panel);
        self.state.visible = true;
        self.surface.set_visible(true);
    }

    fn build_panel(&self, query: &str) -> Panel {
        if !self.state.index.is_loaded() {
            return Panel::Loading;
        }

        let results = perform_search_with(query, &self.state.index, &self.config.search_options());
        if results.is_empty() {
            return Panel::Empty {
                query: query.to_string(),
            };
        }

        let rows = results
            .iter()
            .map(|scored| ResultRow {
                title: highlight_text(&scored.doc.title, query),
                section: scored.doc.section_label().to_string(),
                excerpt: highlight_text(
                    &excerpt(&scored.doc.content, self.config.excerpt_chars),
                    query,
                ),
                href: self.base.join(&scored.doc.url),
                score: scored.score,
            })
            .collect();

        Panel::Results {
            rows,
            see_all_href: self
                .base
                .full_results_url(&self.config.results_page, query),
        }
    }
}
