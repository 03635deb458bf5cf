//! Browser bindings for the page behaviours.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every submodule queries the live document once at boot, registers
//! listeners, and forwards events into the matching pure core module. Missing
//! markup silently disables a behaviour; DOM call failures are discarded at
//! this edge because there is no caller to report them to.
//!
//! Listeners live for the whole page, so their closures are `forget()`-ed.

pub mod carousel;
pub mod headings;
pub mod panel;
pub mod reveal;
pub mod storage;
pub mod theme;
pub mod typewriter;
pub mod weather;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, NodeList};

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};

/// Entry point run by the generated JS glue once the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    boot();
}

/// Wire every behaviour against the current document.
pub fn boot() {
    let Some(document) = document() else {
        log::warn!("folio: no document, nothing to wire");
        return;
    };
    let config = load_config(&document);

    headings::bind(&document, &config.underline_selector);
    for selector in &config.reveal.selectors {
        reveal::bind(&document, selector, config.reveal.threshold);
    }
    theme::bind(&document, &config.theme);
    panel::bind(&document, &config.panel);
    carousel::bind_all(&document, &config.carousel);
    typewriter::bind(&document, &config.typewriter);
    weather::bind(&document, &config.weather);
}

/// Read the optional JSON override block, falling back to defaults.
fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("folio: {e}; using defaults");
            SiteConfig::default()
        }
    }
}

pub(crate) fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Collect the `Element`s of a `NodeList`, skipping non-element nodes.
pub(crate) fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

pub(crate) fn query_within(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub(crate) fn as_html(el: &Element) -> Option<HtmlElement> {
    el.clone().dyn_into::<HtmlElement>().ok()
}

/// Register a page-lifetime listener on `target`.
pub(crate) fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}
