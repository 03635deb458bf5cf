//! Wrapping carousel index.
//!
//! Each item is assumed to be exactly 100% of the wrapper's width, so the
//! wrapper is positioned with `translateX(-index * 100%)`.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// `None` for an empty carousel, which stays inert.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.len
    }

    /// Advance one item, wrapping from the last item to the first.
    pub fn next_item(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Step back one item, wrapping from the first item to the last.
    pub fn prev_item(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// CSS `transform` for the sliding wrapper at the current index.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}
