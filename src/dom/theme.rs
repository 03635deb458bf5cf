//! Theme toggle wiring.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use super::storage::{LocalStore, prefers_dark};
use crate::config::ThemeConfig;
use crate::theme::{Theme, ThemeController, ThemeSurface};

/// `data-theme` on `<html>` plus `aria-pressed` on every toggle control.
struct DocumentSurface {
    root: Option<Element>,
    toggles: Vec<Element>,
}

impl ThemeSurface for DocumentSurface {
    fn set_root_theme(&mut self, theme: Theme) {
        if let Some(root) = &self.root {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }

    fn set_toggle_pressed(&mut self, pressed: bool) {
        let value = if pressed { "true" } else { "false" };
        for toggle in &self.toggles {
            let _ = toggle.set_attribute("aria-pressed", value);
        }
    }
}

pub fn bind(document: &Document, config: &ThemeConfig) {
    let toggles = super::query_all(document, &config.toggle_selector);
    let surface = Rc::new(RefCell::new(DocumentSurface { root: document.document_element(), toggles: toggles.clone() }));
    let controller = Rc::new(RefCell::new(ThemeController::init(&LocalStore, &config.storage_key, prefers_dark())));
    controller.borrow().apply(&mut *surface.borrow_mut());

    for toggle in &toggles {
        let controller = Rc::clone(&controller);
        let surface = Rc::clone(&surface);
        super::listen(toggle, "click", move |_| {
            let next = controller
                .borrow_mut()
                .toggle(&mut LocalStore, &mut *surface.borrow_mut());
            log::debug!("theme: toggled to {}", next.as_str());
        });
    }
}
