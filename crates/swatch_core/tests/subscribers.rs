//! Integration tests for listener delivery

use std::cell::RefCell;
use std::rc::Rc;
use swatch_core::Subscribers;

/// Listeners see events in the order the owner emits them
#[test]
fn test_listener_observes_events_in_order() {
    let mut subs = Subscribers::<u32>::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = seen.clone();
    subs.subscribe(move |v| seen_clone.borrow_mut().push(*v));

    for v in [3, 1, 2] {
        subs.notify(&v);
    }

    assert_eq!(*seen.borrow(), vec![3, 1, 2]);
}

#[test]
fn test_unsubscribed_listener_misses_later_events() {
    let mut subs = Subscribers::<u32>::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = seen.clone();
    let id = subs.subscribe(move |v| seen_clone.borrow_mut().push(*v));

    subs.notify(&1);
    assert!(subs.unsubscribe(id));
    subs.notify(&2);

    assert_eq!(*seen.borrow(), vec![1]);
}
