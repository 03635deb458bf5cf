use super::*;

#[test]
fn empty_carousel_is_inert() {
    assert!(Carousel::new(0).is_none());
}

#[test]
fn starts_at_first_item() {
    let c = Carousel::new(3).unwrap();
    assert_eq!(c.index(), 0);
    assert_eq!(c.item_count(), 3);
    assert_eq!(c.transform(), "translateX(-0%)");
}

#[test]
fn next_k_times_returns_to_start() {
    for k in 1..=6 {
        let mut c = Carousel::new(k).unwrap();
        for _ in 0..k {
            c.next_item();
        }
        assert_eq!(c.index(), 0, "k={k}");
    }
}

#[test]
fn prev_from_zero_wraps_to_last() {
    let mut c = Carousel::new(4).unwrap();
    assert_eq!(c.prev_item(), 3);
    assert_eq!(c.transform(), "translateX(-300%)");
}

#[test]
fn next_then_prev_is_identity() {
    let mut c = Carousel::new(5).unwrap();
    c.next_item();
    c.next_item();
    assert_eq!(c.index(), 2);
    c.prev_item();
    assert_eq!(c.index(), 1);
    assert_eq!(c.transform(), "translateX(-100%)");
}

#[test]
fn single_item_never_moves() {
    let mut c = Carousel::new(1).unwrap();
    assert_eq!(c.next_item(), 0);
    assert_eq!(c.prev_item(), 0);
}

#[test]
fn instances_are_isolated() {
    let mut a = Carousel::new(3).unwrap();
    let b = Carousel::new(3).unwrap();
    a.next_item();
    assert_eq!(a.index(), 1);
    assert_eq!(b.index(), 0);
}
