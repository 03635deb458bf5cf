use super::*;

#[test]
fn first_hover_applies_underline_once() {
    let mut latch = UnderlineLatch::default();
    assert!(!latch.is_applied());
    assert_eq!(latch.on_hover(), Some("underline"));
    assert!(latch.is_applied());
    assert_eq!(latch.on_hover(), None);
}

#[test]
fn selector_skips_typewriter_heading() {
    assert!(UNDERLINE_SELECTOR.contains(":not(#typewriter-h1)"));
}
