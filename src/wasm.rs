// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings: the widget wired into a real page.
//!
//! `SearchWidget.mount("searchInput")` does everything the help center's
//! script used to do on DOMContentLoaded: creates the dropdown inside the
//! search container, resolves the base path from `location.pathname`, starts
//! the one index fetch, and hooks input, focus, blur, keydown, mousedown and
//! form submit up to the controller.
//!
//! The controller lives in an `Rc<RefCell<_>>` shared by the event listeners
//! and the `setTimeout` callbacks. Listeners are registered for the lifetime
//! of the page and never removed.

use crate::config::WidgetConfig;
use crate::controller::surface::{
    panel_html, Panel, ResultsSurface, RESULT_ITEM_CLASS, SELECTED_CLASS,
};
use crate::controller::timer::{Scheduler, TimerToken};
use crate::controller::{Key, KeyOutcome, SearchController};
use crate::error::LoadError;
use crate::loader::{parse_index, BasePath};
use crate::types::Document;
use log::{debug, error, warn};
use serde_wasm_bindgen::{from_value, to_value};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Element, Event, EventTarget, HtmlElement, HtmlInputElement, KeyboardEvent, Node, Response,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

/// Class on the dropdown element the widget creates.
const DROPDOWN_CLASS: &str = "search-results-dropdown";

/// Where the dropdown gets mounted, first match wins (header search, then
/// the landing page's hero search).
const CONTAINER_SELECTORS: &[&str] = &[".search-container", ".hero-search"];

type Controller = SearchController<DomSurface, BrowserScheduler>;
type SharedController = Rc<RefCell<Controller>>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Hosts that load the module twice get an error here; the first logger stays
    if console_log::init_with_level(log::Level::Info).is_err() {
        debug!("console logger already initialized");
    }
}

// =============================================================================
// PRESENTATION SURFACE
// =============================================================================

/// The dropdown element.
struct DomSurface {
    window: Window,
    dropdown: HtmlElement,
}

impl ResultsSurface for DomSurface {
    fn render(&mut self, panel: &Panel) {
        self.dropdown.set_inner_html(&panel_html(panel));
    }

    fn set_visible(&mut self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(err) = self.dropdown.style().set_property("display", display) {
            warn!("failed to set dropdown display: {:?}", err);
        }
    }

    fn select(&mut self, row: Option<usize>) {
        let items = match self
            .dropdown
            .query_selector_all(&format!(".{}", RESULT_ITEM_CLASS))
        {
            Ok(items) => items,
            Err(err) => {
                warn!("failed to query result rows: {:?}", err);
                return;
            }
        };

        for i in 0..items.length() {
            let Some(item) = items.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            let selected = row == Some(i as usize);
            if let Err(err) = item.class_list().toggle_with_force(SELECTED_CLASS, selected) {
                warn!("failed to toggle selection: {:?}", err);
            }
            if selected {
                let options = ScrollIntoViewOptions::new();
                options.set_block(ScrollLogicalPosition::Nearest);
                item.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }

    fn navigate(&mut self, href: &str) {
        if let Err(err) = self.window.location().set_href(href) {
            warn!("navigation to {} failed: {:?}", href, err);
        }
    }
}

// =============================================================================
// SCHEDULER
// =============================================================================

/// `setTimeout`-backed scheduler. Holds a weak handle back to the controller
/// so fired timers can deliver their token without keeping it alive.
struct BrowserScheduler {
    window: Window,
    controller: Weak<RefCell<Controller>>,
}

impl Scheduler for BrowserScheduler {
    fn schedule(&mut self, delay: Duration, token: TimerToken) {
        let controller = self.controller.clone();
        let callback = Closure::once_into_js(move || {
            if let Some(controller) = controller.upgrade() {
                with_controller(&controller, |c| c.on_timer(token));
            }
        });
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let callback: &js_sys::Function = callback.unchecked_ref();
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback, millis)
        {
            warn!("setTimeout failed: {:?}", err);
        }
    }
}

/// Run `f` against the controller. An event that arrives while it is
/// already borrowed is logged and dropped.
fn with_controller<R>(controller: &SharedController, f: impl FnOnce(&mut Controller) -> R) -> Option<R> {
    match controller.try_borrow_mut() {
        Ok(mut c) => Some(f(&mut c)),
        Err(_) => {
            warn!("search controller busy, dropping event");
            None
        }
    }
}

// =============================================================================
// WIDGET
// =============================================================================

/// A search box with its dropdown, mounted on the current page.
#[wasm_bindgen]
pub struct SearchWidget {
    controller: SharedController,
}

#[wasm_bindgen]
impl SearchWidget {
    /// Mount the widget on `<input id={input_id}>`.
    ///
    /// Options (all optional, see `WidgetConfig`):
    /// - `debounceMs`, `graceDelayMs`
    /// - `minQueryLen`, `limit`, `excerptChars`
    /// - `indexFile`, `resultsPage`, `nestedDirs`
    #[wasm_bindgen]
    pub fn mount(input_id: &str, options: Option<JsValue>) -> Result<SearchWidget, JsValue> {
        let config: WidgetConfig = match options {
            Some(opts) if !opts.is_undefined() && !opts.is_null() => {
                from_value(opts).map_err(|e| e.to_string())?
            }
            _ => WidgetConfig::default(),
        };

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let input: HtmlInputElement = document
            .get_element_by_id(input_id)
            .ok_or_else(|| format!("search input #{} not found", input_id))?
            .dyn_into()
            .map_err(|_| format!("#{} is not an <input>", input_id))?;

        let dropdown = create_dropdown(&document)?;
        let pathname = window.location().pathname()?;
        let base = BasePath::resolve(&pathname, &config.nested_dirs);
        debug!("base path for {}: {:?}", pathname, base.as_str());

        let surface = DomSurface {
            window: window.clone(),
            dropdown: dropdown.clone(),
        };
        let scheduler_window = window.clone();
        let controller: SharedController = Rc::new_cyclic(|weak| {
            RefCell::new(SearchController::new(
                config,
                base,
                surface,
                BrowserScheduler {
                    window: scheduler_window,
                    controller: weak.clone(),
                },
            ))
        });

        attach_listeners(&document, &input, &dropdown, &controller)?;
        spawn_index_load(window, &controller);

        Ok(SearchWidget { controller })
    }

    /// Rank the index against `query` without touching the dropdown.
    /// Returns `[{title, section, url, score}]`, urls resolved for this page.
    #[wasm_bindgen]
    pub fn query(&self, query: &str) -> Result<JsValue, JsValue> {
        let controller = self.controller.try_borrow().map_err(|e| e.to_string())?;
        to_value(&controller.results_for(query)).map_err(|e| e.to_string().into())
    }

    /// True once the index has arrived.
    #[wasm_bindgen]
    pub fn is_loaded(&self) -> bool {
        self.controller
            .try_borrow()
            .is_ok_and(|c| c.state().index.is_loaded())
    }

    /// Number of indexed articles (0 until loaded).
    #[wasm_bindgen]
    pub fn doc_count(&self) -> usize {
        self.controller
            .try_borrow()
            .map_or(0, |c| c.state().index.len())
    }
}

fn create_dropdown(document: &web_sys::Document) -> Result<HtmlElement, JsValue> {
    let dropdown: HtmlElement = document.create_element("div")?.dyn_into()?;
    dropdown.set_class_name(DROPDOWN_CLASS);
    dropdown.style().set_property("display", "none")?;

    let container = CONTAINER_SELECTORS
        .iter()
        .find_map(|selector| document.query_selector(selector).ok().flatten())
        .ok_or("search container not found")?;
    if let Some(container) = container.dyn_ref::<HtmlElement>() {
        container.style().set_property("position", "relative")?;
    }
    container.append_child(&dropdown)?;

    Ok(dropdown)
}

fn attach_listeners(
    document: &web_sys::Document,
    input: &HtmlInputElement,
    dropdown: &HtmlElement,
    controller: &SharedController,
) -> Result<(), JsValue> {
    let (c, field) = (controller.clone(), input.clone());
    listen(input, "input", move |_| {
        with_controller(&c, |c| c.on_input(&field.value()));
    })?;

    let (c, field) = (controller.clone(), input.clone());
    listen(input, "focus", move |_| {
        with_controller(&c, |c| c.on_focus(&field.value()));
    })?;

    let c = controller.clone();
    listen(input, "blur", move |_| {
        with_controller(&c, |c| c.on_blur());
    })?;

    let c = controller.clone();
    listen(input, "keydown", move |event| {
        let Some(key) = event
            .dyn_ref::<KeyboardEvent>()
            .and_then(|e| Key::from_name(&e.key()))
        else {
            return;
        };
        if with_controller(&c, |c| c.on_key(key)) == Some(KeyOutcome::Handled) {
            event.prevent_default();
        }
    })?;

    let (c, dropdown) = (controller.clone(), dropdown.clone());
    listen(document, "mousedown", move |event| {
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok())
            .is_some_and(|node| dropdown.contains(Some(&node)));
        if with_controller(&c, |c| c.on_pointer_down(inside)) == Some(true) {
            event.prevent_default();
        }
    })?;

    if let Some(form) = input.closest("form")? {
        let (c, field) = (controller.clone(), input.clone());
        listen(&form, "submit", move |event| {
            event.prevent_default();
            with_controller(&c, |c| c.on_submit(&field.value()));
        })?;
    }

    Ok(())
}

fn listen(
    target: &EventTarget,
    name: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

// =============================================================================
// INDEX LOADING
// =============================================================================

fn spawn_index_load(window: Window, controller: &SharedController) {
    let url = controller.borrow().index_url();
    let controller = Rc::clone(controller);
    spawn_local(async move {
        let outcome = fetch_index(&window, &url).await;
        // The index logs failures itself; there is nothing to show the reader
        if with_controller(&controller, |c| c.install_index(outcome)).is_none() {
            error!("search index arrived while the controller was busy; install dropped");
        }
    });
}

async fn fetch_index(window: &Window, url: &str) -> Result<Vec<Document>, LoadError> {
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| LoadError::Network("fetch did not resolve to a Response".to_string()))?;
    if !response.ok() {
        return Err(LoadError::Http {
            status: response.status(),
        });
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| LoadError::Network("response body is not text".to_string()))?;
    parse_index(body.as_bytes())
}

fn js_error(value: JsValue) -> LoadError {
    LoadError::Network(format!("{:?}", value))
}
