//! `<details>` contact panel animation and `#fragment` deep links.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, EventTarget, HtmlDetailsElement, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, TransitionEvent,
};

use crate::config::PanelConfig;
use crate::panel::{PanelEffect, PanelEvent, PanelHeight, PanelMachine, deep_link_effects, fragment_targets_panel};

/// One bound panel: the `<details>`, its inner animated node, and its machine.
struct PanelHandle {
    details: HtmlDetailsElement,
    inner: HtmlElement,
    machine: RefCell<PanelMachine>,
}

impl PanelHandle {
    fn content_height(&self) -> f64 {
        f64::from(self.inner.scroll_height())
    }

    fn dispatch(self: &Rc<Self>, event: PanelEvent) {
        let effects = self.machine.borrow_mut().handle(event);
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(self: &Rc<Self>, effect: PanelEffect) {
        let style = self.inner.style();
        match effect {
            PanelEffect::ShowBlock => {
                let _ = style.set_property("display", "block");
            }
            PanelEffect::ClearDisplay => {
                let _ = style.remove_property("display");
            }
            PanelEffect::SetHeight(PanelHeight::Cleared) => {
                let _ = style.remove_property("height");
            }
            PanelEffect::SetHeight(height) => {
                let _ = style.set_property("height", &height.css());
            }
            PanelEffect::SetOpacity(opacity) => {
                let _ = style.set_property("opacity", &opacity.to_string());
            }
            PanelEffect::SetTransition(transition) => {
                let _ = style.set_property("transition", &transition);
            }
            PanelEffect::SetOpen(open) => self.details.set_open(open),
            PanelEffect::RequestFrame { generation } => self.request_frame(generation),
            link @ (PanelEffect::ScrollIntoView | PanelEffect::ReplaceFragment(_)) => apply_link_effect(&self.details, &link),
        }
    }

    fn request_frame(self: &Rc<Self>, generation: u64) {
        let handle = Rc::clone(self);
        let fire = move || {
            let content_height = handle.content_height();
            handle.dispatch(PanelEvent::AnimationFrame { generation, content_height });
        };
        let Some(window) = web_sys::window() else {
            fire();
            return;
        };
        let cb = Closure::once_into_js(fire);
        if window
            .request_animation_frame(cb.unchecked_ref())
            .is_err()
        {
            log::debug!("panel: requestAnimationFrame failed for generation {generation}");
        }
    }
}

/// Scroll and fragment effects; these need only the `<details>` itself.
fn apply_link_effect(details: &Element, effect: &PanelEffect) {
    match effect {
        PanelEffect::ScrollIntoView => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Center);
            details.scroll_into_view_with_scroll_into_view_options(&options);
        }
        PanelEffect::ReplaceFragment(fragment) => replace_fragment(fragment),
        _ => {}
    }
}

/// Update the URL fragment in place; failures are ignored.
fn replace_fragment(fragment: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(fragment));
    }
}

fn current_hash() -> Option<String> {
    web_sys::window().and_then(|w| w.location().hash().ok())
}

fn bind_panel(details: HtmlDetailsElement, config: &PanelConfig) -> Option<Rc<PanelHandle>> {
    let inner = super::query_within(&details, &config.inner_selector).and_then(|el| super::as_html(&el))?;
    let machine = PanelMachine::new(details.open(), &config.transition(), &config.anchor_id);
    let handle = Rc::new(PanelHandle { details, inner, machine: RefCell::new(machine) });

    let initial = handle.machine.borrow().initial_effects();
    for effect in initial {
        handle.apply(effect);
    }

    let on_toggle = Rc::clone(&handle);
    super::listen(&handle.details, "toggle", move |_| {
        let event = on_toggle
            .machine
            .borrow()
            .native_toggle(on_toggle.details.open(), on_toggle.content_height());
        if let Some(event) = event {
            on_toggle.dispatch(event);
        }
    });

    if let Some(summary) = super::query_within(&handle.details, "summary") {
        let on_click = Rc::clone(&handle);
        super::listen(&summary, "click", move |ev| {
            ev.prevent_default();
            let event = on_click.machine.borrow().summary_click(on_click.content_height());
            on_click.dispatch(event);
        });
    }

    let on_end = Rc::clone(&handle);
    super::listen(&handle.inner, "transitionend", move |ev| {
        let inner_target: &EventTarget = on_end.inner.as_ref();
        if ev.target().as_ref() != Some(inner_target) {
            return;
        }
        let Ok(ev) = ev.dyn_into::<TransitionEvent>() else {
            return;
        };
        on_end.dispatch(PanelEvent::TransitionEnd { property: ev.property_name() });
    });

    Some(handle)
}

/// Bind every expandable panel and the deep-link fragment handling.
///
/// The anchor is looked up by id, independently of the animated panels. When
/// it cannot animate (no inner node, or outside the panel selector) links
/// still scroll to it and update the fragment.
pub fn bind(document: &Document, config: &PanelConfig) {
    let handles = super::query_all(document, &config.selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlDetailsElement>().ok())
        .filter_map(|details| bind_panel(details, config))
        .collect::<Vec<_>>();
    log::debug!("panel: bound {} panel(s)", handles.len());

    let Some(details) = document
        .get_element_by_id(&config.anchor_id)
        .and_then(|el| el.dyn_into::<HtmlDetailsElement>().ok())
    else {
        return;
    };
    let animated = handles.into_iter().find(|h| h.details == details);
    if animated.is_none() {
        log::debug!("panel: #{} has no animated content; links only scroll", config.anchor_id);
    }

    if let Some(anchor) = &animated
        && current_hash().is_some_and(|hash| fragment_targets_panel(&hash, &config.anchor_id))
    {
        anchor.dispatch(PanelEvent::OpenRequested);
    }

    let link_selector = format!("a[href=\"#{}\"]", config.anchor_id);
    for link in super::query_all(document, &link_selector) {
        let animated = animated.clone();
        let details = details.clone();
        let anchor_id = config.anchor_id.clone();
        super::listen(&link, "click", move |ev| {
            ev.prevent_default();
            match &animated {
                Some(anchor) => anchor.dispatch(PanelEvent::LinkActivated),
                None => {
                    for effect in deep_link_effects(&anchor_id) {
                        apply_link_effect(&details, &effect);
                    }
                }
            }
        });
    }
}
