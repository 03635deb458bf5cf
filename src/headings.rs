//! Persistent gradient underline on section titles.
//!
//! The first time the pointer enters a title it gains the underline class and
//! keeps it for the rest of the page's life.

#[cfg(test)]
#[path = "headings_test.rs"]
mod headings_test;

/// Titles that get the underline; the typewriter heading is excluded.
pub const UNDERLINE_SELECTOR: &str = "h1:not(#typewriter-h1), h2";

pub const UNDERLINE_CLASS: &str = "underline";

/// Latches on the first hover; later hovers report nothing to do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnderlineLatch {
    applied: bool,
}

impl UnderlineLatch {
    /// Returns the class to add on the first hover only.
    pub fn on_hover(&mut self) -> Option<&'static str> {
        if self.applied {
            return None;
        }
        self.applied = true;
        Some(UNDERLINE_CLASS)
    }

    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.applied
    }
}
