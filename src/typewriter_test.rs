use super::*;

#[derive(Default)]
struct Heading {
    text: String,
    finished: bool,
    clears: usize,
}

impl TypewriterTarget for Heading {
    fn clear(&mut self) {
        self.text.clear();
        self.clears += 1;
    }

    fn append(&mut self, ch: char) {
        self.text.push(ch);
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn steps_append_each_char_then_finish() {
    let steps = Typewriter::new("Hi!").collect::<Vec<_>>();
    assert_eq!(
        steps,
        vec![TypeStep::Append('H'), TypeStep::Append('i'), TypeStep::Append('!'), TypeStep::Finish]
    );
}

#[test]
fn source_is_trimmed() {
    let tw = Typewriter::new("  \n Hello world \t");
    assert_eq!(tw.source_len(), 11);
}

#[test]
fn run_to_completion_matches_trimmed_source() {
    let mut heading = Heading { text: "  stale markup  ".to_owned(), ..Heading::default() };
    run_steps(Typewriter::new("  Bonjour, Nice  "), &mut heading);
    assert_eq!(heading.text, "Bonjour, Nice");
    assert!(heading.finished);
    assert_eq!(heading.clears, 1);
}

#[test]
fn revealed_length_is_monotonic_and_bounded() {
    let mut tw = Typewriter::new("abcdef");
    let mut last = 0;
    while tw.next().is_some() {
        let len = tw.revealed().chars().count();
        assert!(len >= last);
        assert!(len <= tw.source_len());
        last = len;
    }
    assert_eq!(tw.revealed(), "abcdef");
}

#[test]
fn sequence_is_not_restartable() {
    let mut tw = Typewriter::new("a");
    assert_eq!(tw.next(), Some(TypeStep::Append('a')));
    assert_eq!(tw.next(), Some(TypeStep::Finish));
    assert!(tw.is_finished());
    assert_eq!(tw.next(), None);
    assert_eq!(tw.next(), None);
}

#[test]
fn empty_text_finishes_immediately() {
    let mut heading = Heading::default();
    run_steps(Typewriter::new("   "), &mut heading);
    assert_eq!(heading.text, "");
    assert!(heading.finished);
}

#[test]
fn multibyte_characters_are_single_steps() {
    let steps = Typewriter::new("Côte ☀").collect::<Vec<_>>();
    assert_eq!(steps.len(), 7);
    assert_eq!(steps[1], TypeStep::Append('ô'));
    assert_eq!(steps[5], TypeStep::Append('☀'));
}

#[test]
fn size_hint_counts_remaining_steps() {
    let mut tw = Typewriter::new("ab");
    assert_eq!(tw.size_hint(), (3, Some(3)));
    tw.next();
    assert_eq!(tw.size_hint(), (2, Some(2)));
    while tw.next().is_some() {}
    assert_eq!(tw.size_hint(), (0, Some(0)));
}

#[test]
fn only_appends_are_followed_by_a_delay() {
    let paced = Typewriter::new("ab").map(TypeStep::is_paced).collect::<Vec<_>>();
    assert_eq!(paced, vec![true, true, false]);
    assert!(!TypeStep::Finish.is_paced());
}
