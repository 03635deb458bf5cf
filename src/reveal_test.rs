use super::*;

#[test]
fn new_set_is_all_pending() {
    let set = RevealSet::new(3);
    assert_eq!(set.len(), 3);
    assert_eq!(set.visible_count(), 0);
    assert_eq!(set.state(2), Some(RevealState::Pending));
    assert_eq!(set.state(3), None);
}

#[test]
fn first_intersection_marks_visible_and_unobserves() {
    let mut set = RevealSet::new(2);
    let effects = set.on_intersection(1, true);
    assert_eq!(effects, vec![RevealEffect::MarkVisible(1), RevealEffect::Unobserve(1)]);
    assert_eq!(set.state(1), Some(RevealState::Visible));
    assert_eq!(set.state(0), Some(RevealState::Pending));
}

#[test]
fn non_intersecting_report_changes_nothing() {
    let mut set = RevealSet::new(1);
    assert!(set.on_intersection(0, false).is_empty());
    assert_eq!(set.state(0), Some(RevealState::Pending));
}

#[test]
fn reveal_is_idempotent() {
    let mut set = RevealSet::new(1);
    set.on_intersection(0, true);
    assert!(set.on_intersection(0, true).is_empty());
    assert!(set.on_intersection(0, false).is_empty());
    assert_eq!(set.state(0), Some(RevealState::Visible));
    assert_eq!(set.visible_count(), 1);
}

#[test]
fn unknown_index_is_ignored() {
    let mut set = RevealSet::new(1);
    assert!(set.on_intersection(5, true).is_empty());
    assert_eq!(set.visible_count(), 0);
}

#[test]
fn reveal_all_marks_remaining_without_unobserve() {
    let mut set = RevealSet::new(3);
    set.on_intersection(1, true);
    let effects = set.reveal_all();
    assert_eq!(effects, vec![RevealEffect::MarkVisible(0), RevealEffect::MarkVisible(2)]);
    assert_eq!(set.visible_count(), 3);
    assert!(set.reveal_all().is_empty());
}

#[test]
fn sets_are_isolated() {
    let mut cards = RevealSet::new(2);
    let messages = RevealSet::new(2);
    cards.on_intersection(0, true);
    assert_eq!(cards.visible_count(), 1);
    assert_eq!(messages.visible_count(), 0);
}
