//! Scroll reveal via `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::reveal::{RevealEffect, RevealSet, VISIBLE_CLASS};

fn observer_supported() -> bool {
    web_sys::window().is_some_and(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
}

fn apply(effects: &[RevealEffect], elements: &[Element], observer: Option<&IntersectionObserver>) {
    for effect in effects {
        match *effect {
            RevealEffect::MarkVisible(i) => {
                if let Some(el) = elements.get(i) {
                    let _ = el.class_list().add_1(VISIBLE_CLASS);
                }
            }
            RevealEffect::Unobserve(i) => {
                if let (Some(el), Some(observer)) = (elements.get(i), observer) {
                    observer.unobserve(el);
                }
            }
        }
    }
}

/// Observe every element matching `selector` with its own observer.
pub fn bind(document: &Document, selector: &str, threshold: f64) {
    let elements = super::query_all(document, selector);
    if elements.is_empty() {
        return;
    }
    let mut set = RevealSet::new(elements.len());

    if !observer_supported() {
        log::debug!("reveal: no IntersectionObserver, revealing {selector} immediately");
        apply(&set.reveal_all(), &elements, None);
        return;
    }

    let set = Rc::new(RefCell::new(set));
    let tracked = Rc::new(elements);
    let tracked_for_cb = Rc::clone(&tracked);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = tracked_for_cb.iter().position(|el| *el == target) else {
                    continue;
                };
                let effects = set.borrow_mut().on_intersection(index, entry.is_intersecting());
                apply(&effects, &tracked_for_cb, Some(&observer));
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("reveal: observer construction failed for {selector}: {e:?}");
            let mut fallback = RevealSet::new(tracked.len());
            apply(&fallback.reveal_all(), &tracked, None);
            return;
        }
    };
    callback.forget();
    for el in tracked.iter() {
        observer.observe(el);
    }
}
