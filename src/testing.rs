//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides a recording presentation surface and a virtual-time scheduler
//! so the controller can be driven without a browser.

#![doc(hidden)]

use crate::controller::surface::{Panel, ResultsSurface};
use crate::controller::timer::{Scheduler, TimerToken};
use crate::controller::SearchController;
use crate::types::Document;
use std::time::Duration;

/// Create a test document. Content is derived from the title so excerpts
/// have something to show.
pub fn make_doc(title: &str, section: &str, search_text: &str, url: &str) -> Document {
    Document {
        title: title.to_string(),
        section: section.to_string(),
        search_text: search_text.to_string(),
        content: format!("About {}", title),
        url: url.to_string(),
    }
}

/// Everything a surface was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Render(Panel),
    Visible(bool),
    Select(Option<usize>),
    Navigate(String),
}

/// A surface that remembers calls instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Panels rendered so far.
    pub fn renders(&self) -> Vec<&Panel> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Render(panel) => Some(panel),
                _ => None,
            })
            .collect()
    }

    pub fn last_render(&self) -> Option<&Panel> {
        self.renders().last().copied()
    }

    /// Last selection pushed to the surface.
    pub fn last_selection(&self) -> Option<Option<usize>> {
        self.events.iter().rev().find_map(|e| match e {
            SurfaceEvent::Select(row) => Some(*row),
            _ => None,
        })
    }

    pub fn navigations(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Navigate(href) => Some(href.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl ResultsSurface for RecordingSurface {
    fn render(&mut self, panel: &Panel) {
        self.events.push(SurfaceEvent::Render(panel.clone()));
    }

    fn set_visible(&mut self, visible: bool) {
        self.events.push(SurfaceEvent::Visible(visible));
    }

    fn select(&mut self, row: Option<usize>) {
        self.events.push(SurfaceEvent::Select(row));
    }

    fn navigate(&mut self, href: &str) {
        self.events.push(SurfaceEvent::Navigate(href.to_string()));
    }
}

/// A scheduler on a virtual clock measured in milliseconds.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    queue: Vec<(u64, TimerToken)>,
}

impl ManualScheduler {
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Tokens scheduled but not yet due.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Move the clock forward and return the tokens that came due, earliest
    /// first (ties in scheduling order).
    pub fn advance(&mut self, ms: u64) -> Vec<TimerToken> {
        self.now_ms += ms;
        let now = self.now_ms;
        let mut due: Vec<(u64, TimerToken)> = Vec::new();
        self.queue.retain(|&(at, token)| {
            if at <= now {
                due.push((at, token));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(at, _)| at);
        due.into_iter().map(|(_, token)| token).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, token: TimerToken) {
        let at = self.now_ms + delay.as_millis() as u64;
        self.queue.push((at, token));
    }
}

/// Advance virtual time and deliver every token that came due.
pub fn advance<S: ResultsSurface>(controller: &mut SearchController<S, ManualScheduler>, ms: u64) {
    for token in controller.scheduler_mut().advance(ms) {
        controller.on_timer(token);
    }
}
