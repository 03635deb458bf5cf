//! Character-by-character heading reveal.
//!
//! [`Typewriter`] is a lazy, finite, non-restartable sequence of
//! [`TypeStep`]s. It knows nothing about time; whoever drives it decides the
//! pacing (a timeout chain in the browser, a plain loop in tests).

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

pub const DEFAULT_DELAY_MS: u32 = 80;

/// Class marking a heading whose reveal has finished (hides the cursor).
pub const FINISHED_CLASS: &str = "finished-typing";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeStep {
    Append(char),
    Finish,
}

impl TypeStep {
    /// Whether the driver waits one delay after this step. The final step
    /// ends the sequence immediately.
    #[must_use]
    pub fn is_paced(self) -> bool {
        matches!(self, Self::Append(_))
    }
}

/// Something a typewriter can type into.
pub trait TypewriterTarget {
    fn clear(&mut self);
    fn append(&mut self, ch: char);
    fn finish(&mut self);
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    text: Vec<char>,
    cursor: usize,
    finished: bool,
}

impl Typewriter {
    /// Capture `source` (trimmed) as the text to reveal.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { text: source.trim().chars().collect(), cursor: 0, finished: false }
    }

    /// Characters revealed so far.
    #[must_use]
    pub fn revealed(&self) -> String {
        self.text[..self.cursor].iter().collect()
    }

    #[must_use]
    pub fn source_len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Iterator for Typewriter {
    type Item = TypeStep;

    fn next(&mut self) -> Option<TypeStep> {
        if self.finished {
            return None;
        }
        if let Some(&ch) = self.text.get(self.cursor) {
            self.cursor += 1;
            return Some(TypeStep::Append(ch));
        }
        self.finished = true;
        Some(TypeStep::Finish)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.finished { 0 } else { self.text.len() - self.cursor + 1 };
        (remaining, Some(remaining))
    }
}

/// Apply one step to `target`.
pub fn apply_step(step: TypeStep, target: &mut impl TypewriterTarget) {
    match step {
        TypeStep::Append(ch) => target.append(ch),
        TypeStep::Finish => target.finish(),
    }
}

/// Clear `target` and run `typewriter` to completion without pacing.
pub fn run_steps(typewriter: Typewriter, target: &mut impl TypewriterTarget) {
    target.clear();
    for step in typewriter {
        apply_step(step, target);
    }
}
