//! Carousel button wiring.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement};

use crate::carousel::Carousel;
use crate::config::CarouselConfig;

fn reposition(wrapper: &HtmlElement, carousel: Carousel) {
    let _ = wrapper.style().set_property("transform", &carousel.transform());
}

/// Bind one carousel; inert unless wrapper, items, and both buttons exist.
fn bind(root: &Element, config: &CarouselConfig) -> bool {
    let wrapper = super::query_within(root, &config.wrapper_selector).and_then(|el| super::as_html(&el));
    let prev = super::query_within(root, &config.prev_selector);
    let next = super::query_within(root, &config.next_selector);
    let item_count = root
        .query_selector_all(&config.item_selector)
        .map_or(0, |list| usize::try_from(list.length()).unwrap_or(0));

    let (Some(wrapper), Some(prev), Some(next), Some(carousel)) = (wrapper, prev, next, Carousel::new(item_count))
    else {
        return false;
    };

    let state = Rc::new(Cell::new(carousel));

    let next_state = Rc::clone(&state);
    let next_wrapper = wrapper.clone();
    super::listen(&next, "click", move |_| {
        let mut carousel = next_state.get();
        carousel.next_item();
        next_state.set(carousel);
        reposition(&next_wrapper, carousel);
    });

    super::listen(&prev, "click", move |_| {
        let mut carousel = state.get();
        carousel.prev_item();
        state.set(carousel);
        reposition(&wrapper, carousel);
    });
    true
}

pub fn bind_all(document: &Document, config: &CarouselConfig) {
    let bound = super::query_all(document, &config.selector)
        .iter()
        .filter(|root| bind(root, config))
        .count();
    log::debug!("carousel: bound {bound} carousel(s)");
}
