//! One-shot hover underline on section titles.

use std::cell::Cell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element};

use crate::headings::UnderlineLatch;

fn bind_title(title: Element) {
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let latch = Cell::new(UnderlineLatch::default());
    let target = title.clone();
    let cb = Closure::<dyn FnMut()>::new(move || {
        let mut state = latch.get();
        if let Some(class) = state.on_hover() {
            let _ = target.class_list().add_1(class);
        }
        latch.set(state);
    });
    let _ = title.add_event_listener_with_callback_and_add_event_listener_options(
        "mouseenter",
        cb.as_ref().unchecked_ref(),
        &options,
    );
    cb.forget();
}

pub fn bind(document: &Document, selector: &str) {
    for title in super::query_all(document, selector) {
        bind_title(title);
    }
}
