//! `localStorage`-backed preference store and system dark-mode probe.

use crate::theme::PreferenceStore;

/// [`PreferenceStore`] over `window.localStorage`.
///
/// Unavailable storage (privacy mode, sandboxed frames) reads as empty and
/// drops writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Whether the environment reports `prefers-color-scheme: dark`.
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(false, |mq| mq.matches())
}
