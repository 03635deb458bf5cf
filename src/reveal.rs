//! One-shot scroll reveal bookkeeping.
//!
//! Each [`RevealSet`] tracks the elements matched by one selector. An element
//! moves from pending to visible the first time it intersects the viewport and
//! is then dropped from observation; nothing ever moves it back.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Class added to an element once it has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Visible,
}

/// Side effects the host applies to the element at `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEffect {
    MarkVisible(usize),
    Unobserve(usize),
}

#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    states: Vec<RevealState>,
}

impl RevealSet {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { states: vec![RevealState::Pending; len] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.states.iter().filter(|s| **s == RevealState::Visible).count()
    }

    /// Handle an intersection report for the element at `index`.
    ///
    /// Returns the reveal and unobserve effects the first time the element
    /// intersects; every later report (or an unknown index) yields nothing.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> Vec<RevealEffect> {
        if !is_intersecting {
            return Vec::new();
        }
        let Some(state) = self.states.get_mut(index) else {
            return Vec::new();
        };
        if *state == RevealState::Visible {
            return Vec::new();
        }
        *state = RevealState::Visible;
        vec![RevealEffect::MarkVisible(index), RevealEffect::Unobserve(index)]
    }

    /// Reveal everything at once when the host cannot observe intersections.
    pub fn reveal_all(&mut self) -> Vec<RevealEffect> {
        let mut effects = Vec::new();
        for (index, state) in self.states.iter_mut().enumerate() {
            if *state == RevealState::Pending {
                *state = RevealState::Visible;
                effects.push(RevealEffect::MarkVisible(index));
            }
        }
        effects
    }
}
