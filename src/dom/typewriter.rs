//! Typewriter heading driven by a `gloo-timers` timeout chain.

use std::time::Duration;

use web_sys::{Document, Element};

use crate::config::TypewriterConfig;
use crate::typewriter::{FINISHED_CLASS, Typewriter, TypewriterTarget, apply_step};

struct HeadingTarget(Element);

impl TypewriterTarget for HeadingTarget {
    fn clear(&mut self) {
        self.0.set_text_content(Some(""));
    }

    fn append(&mut self, ch: char) {
        let mut text = self.0.text_content().unwrap_or_default();
        text.push(ch);
        self.0.set_text_content(Some(&text));
    }

    fn finish(&mut self) {
        let _ = self.0.class_list().add_1(FINISHED_CLASS);
    }
}

/// Start typing the configured heading; returns immediately if it is absent.
///
/// There is no cancellation: if the heading is detached mid-run, the remaining
/// steps write to the detached node.
pub fn bind(document: &Document, config: &TypewriterConfig) {
    let Some(el) = document.get_element_by_id(&config.element_id) else {
        return;
    };
    let typewriter = Typewriter::new(&el.text_content().unwrap_or_default());
    let mut target = HeadingTarget(el);
    target.clear();
    let delay = Duration::from_millis(u64::from(config.delay_ms));

    wasm_bindgen_futures::spawn_local(async move {
        for step in typewriter {
            apply_step(step, &mut target);
            if step.is_paced() {
                gloo_timers::future::sleep(delay).await;
            }
        }
    });
}
