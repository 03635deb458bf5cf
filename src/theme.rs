//! Light/dark theme resolution, toggling, and persistence.
//!
//! The current theme is owned by an explicit [`ThemeController`]. Storage and
//! the document are reached only through the [`PreferenceStore`] and
//! [`ThemeSurface`] traits so the controller runs unchanged in tests.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort: store implementations swallow
//! failures, and an unreadable or unknown stored value is treated as absent.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Literal written to storage and to the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted literal. Anything other than `light`/`dark` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Durable key-value storage for the theme preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Where a theme is reflected: the document root and every toggle control.
pub trait ThemeSurface {
    fn set_root_theme(&mut self, theme: Theme);
    fn set_toggle_pressed(&mut self, pressed: bool);
}

/// In-memory [`PreferenceStore`], used off-browser and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Pick the starting theme: stored preference, then system dark mode, then light.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }
    if prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Explicit theme state plus the storage key it persists under.
#[derive(Clone, Debug)]
pub struct ThemeController {
    current: Theme,
    storage_key: String,
}

impl ThemeController {
    /// Resolve the initial theme from `store` and the system preference.
    pub fn init(store: &impl PreferenceStore, storage_key: &str, prefers_dark: bool) -> Self {
        let stored = store.get(storage_key);
        let current = resolve_initial(stored.as_deref(), prefers_dark);
        log::debug!("theme: initial={} stored={stored:?} prefers_dark={prefers_dark}", current.as_str());
        Self { current, storage_key: storage_key.to_owned() }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Reflect the current theme on the root attribute and every toggle.
    pub fn apply(&self, surface: &mut impl ThemeSurface) {
        surface.set_root_theme(self.current);
        surface.set_toggle_pressed(self.current.is_dark());
    }

    /// Switch to the opposite theme, apply it, and persist it.
    pub fn toggle(&mut self, store: &mut impl PreferenceStore, surface: &mut impl ThemeSurface) -> Theme {
        self.current = self.current.toggled();
        self.apply(surface);
        store.set(&self.storage_key, self.current.as_str());
        self.current
    }
}
