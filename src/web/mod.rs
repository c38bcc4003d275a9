//! Browser entry point (wasm32 only).
//!
//! Boots the [`Dashboard`] once the document is ready, then wires page
//! events to it: one delegated click listener for every `data-action`
//! control, plus resize, search input, form submission, user activity,
//! image selection and Bootstrap dropdowns. Timers run for the life of the
//! page.

use std::future::Future;
use std::rc::Rc;

use futures::StreamExt;
use gloo_timers::future::IntervalStream;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, EventTarget, FileReader, HtmlElement, HtmlInputElement};

use crate::actions::{self, Action, Flow};
use crate::api::fetch::FetchApi;
use crate::config::DashboardConfig;
use crate::controller::Dashboard;
use crate::logging;
use crate::page::browser::BrowserPage;
use crate::session::ACTIVITY_EVENTS;

const ACTION_TARGETS: &str = "[data-action], .update-status, .delete-order";

#[wasm_bindgen(start)]
pub fn start() {
    logging::init();
    tracing::info!(
        "store-dashboard v{} ({})",
        env!("DASHBOARD_VERSION"),
        env!("DASHBOARD_GIT_SHA")
    );

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        tracing::error!("No document; dashboard not started");
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(boot);
        let _ = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.unchecked_ref(),
        );
    } else {
        boot();
    }
}

fn boot() {
    let Some(page) = BrowserPage::new() else {
        return;
    };
    let page = Rc::new(page);
    let config = page_config(&page);

    let dashboard = Rc::new(Dashboard::new(
        page.clone(),
        Rc::new(FetchApi::new()),
        config,
    ));
    dashboard.init();

    register_listeners(&page, &dashboard);
    start_timers(&dashboard);
}

/// Overrides from `body[data-dashboard-config]`, falling back to defaults.
fn page_config(page: &BrowserPage) -> DashboardConfig {
    let Some(raw) = page
        .document()
        .body()
        .and_then(|body| body.get_attribute("data-dashboard-config"))
    else {
        return DashboardConfig::default();
    };

    match DashboardConfig::from_json_overrides(&raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring page config: {}", e);
            DashboardConfig::default()
        }
    }
}

// =============================================================================
// Listeners
// =============================================================================

fn listen(target: &EventTarget, event: &str, capture: bool, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    if let Err(e) = target.add_event_listener_with_callback_and_bool(
        event,
        closure.as_ref().unchecked_ref(),
        capture,
    ) {
        tracing::warn!("Failed to listen for {}: {:?}", event, e);
    }
    // Listeners live as long as the page.
    closure.forget();
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn register_listeners(page: &Rc<BrowserPage>, dashboard: &Rc<Dashboard>) {
    let document: &EventTarget = page.document().as_ref();
    let Some(window) = web_sys::window() else {
        return;
    };

    let d = dashboard.clone();
    listen(document, "click", false, move |event| on_click(&d, &event));

    let d = dashboard.clone();
    listen(window.as_ref(), "resize", false, move |_| d.check_screen_size());

    let d = dashboard.clone();
    listen(document, "input", false, move |event| {
        if event_element(&event).is_some_and(|el| el.id() == "productSearch") {
            d.filter_products();
        }
    });

    let d = dashboard.clone();
    listen(document, "submit", true, move |event| {
        let required = event_element(&event)
            .and_then(|form| form.get_attribute("data-required-permission"));
        if d.submit_form(required.as_deref()) == Flow::Cancel {
            event.prevent_default();
            event.stop_propagation();
        }
    });

    for name in ACTIVITY_EVENTS {
        let d = dashboard.clone();
        listen(document, name, true, move |_| d.note_activity());
    }

    let d = dashboard.clone();
    listen(document, "change", false, move |event| {
        if let Some(input) = event_element(&event)
            .filter(|el| el.id() == "productImage")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            read_preview(&d, &input);
        }
    });

    let p = page.clone();
    listen(document, "shown.bs.dropdown", false, move |event| {
        let Some(toggle) = event_element(&event) else {
            return;
        };
        if let Some(menu) = dropdown_menu(&toggle) {
            p.place_dropdown(&toggle, &menu);
        }
    });
}

fn on_click(dashboard: &Rc<Dashboard>, event: &Event) {
    let Some(el) = event_element(event).and_then(|t| t.closest(ACTION_TARGETS).ok().flatten())
    else {
        return;
    };

    let data_action = el.get_attribute("data-action");
    let name = match actions::resolve_name(data_action.as_deref(), |class| {
        el.class_list().contains(class)
    }) {
        Ok(Some(name)) => name,
        Ok(None) => return,
        Err(e) => {
            tracing::warn!("{}", e);
            return;
        }
    };

    let action = match Action::from_attributes(name, |attr| action_attribute(&el, attr)) {
        Ok(action) => action,
        Err(e) => {
            tracing::warn!("{}", e);
            return;
        }
    };

    if action.default_flow() == Flow::Cancel {
        event.prevent_default();
        event.stop_propagation();
    }

    let d = dashboard.clone();
    spawn_local(async move {
        d.dispatch(action).await;
    });
}

/// `data-{attr}` on the control, falling back to the enclosing order row
/// (`td:first-child strong` for the id, `.status-badge` for the status).
fn action_attribute(el: &Element, attr: &str) -> Option<String> {
    if let Some(value) = el.get_attribute(&format!("data-{attr}")) {
        return Some(value);
    }
    let row_selector = match attr {
        "order-id" => "td:first-child strong",
        "current-status" => ".status-badge",
        _ => return None,
    };
    el.closest("tr")
        .ok()
        .flatten()?
        .query_selector(row_selector)
        .ok()
        .flatten()?
        .text_content()
}

fn dropdown_menu(toggle: &Element) -> Option<HtmlElement> {
    let menu = toggle
        .closest(".dropdown")
        .ok()
        .flatten()
        .and_then(|d| d.query_selector(".dropdown-menu").ok().flatten())
        .or_else(|| toggle.next_element_sibling())?;
    menu.dyn_into::<HtmlElement>().ok()
}

fn read_preview(dashboard: &Rc<Dashboard>, input: &HtmlInputElement) {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        dashboard.preview_image(None);
        return;
    };
    let Ok(reader) = FileReader::new() else {
        return;
    };

    let d = dashboard.clone();
    let r = reader.clone();
    let on_load = Closure::once_into_js(move || {
        let url = r.result().ok().and_then(|v| v.as_string());
        d.preview_image(url.as_deref());
    });
    reader.set_onload(Some(on_load.unchecked_ref()));
    if let Err(e) = reader.read_as_data_url(&file) {
        tracing::warn!("Failed to read image: {:?}", e);
    }
}

// =============================================================================
// Timers
// =============================================================================

/// Run `tick` every `secs` seconds. Each fire gets its own task, so a slow
/// request never delays or swallows the next one.
fn every<F, Fut>(secs: u64, mut tick: F)
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let millis = secs.saturating_mul(1000).min(u32::MAX as u64) as u32;
    spawn_local(async move {
        let mut ticks = IntervalStream::new(millis);
        while ticks.next().await.is_some() {
            spawn_local(tick());
        }
    });
}

fn start_timers(dashboard: &Rc<Dashboard>) {
    let config = dashboard.config().clone();

    let d = dashboard.clone();
    every(config.clock_interval_secs, move || {
        let d = d.clone();
        async move { d.tick_clock() }
    });

    let d = dashboard.clone();
    every(config.stats_interval_secs, move || {
        let d = d.clone();
        async move { d.refresh_stats().await }
    });

    let d = dashboard.clone();
    every(config.session_poll_secs, move || {
        let d = d.clone();
        async move { d.poll_session().await }
    });

    let d = dashboard.clone();
    every(config.inactivity_tick_secs, move || {
        let d = d.clone();
        async move { d.inactivity_tick() }
    });
}
