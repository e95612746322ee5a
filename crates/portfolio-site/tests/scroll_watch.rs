use std::cell::RefCell;
use std::rc::Rc;

use portfolio::{ManualScroll, Polarity, ScrollThreshold, ScrollWatch};

fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl FnMut(bool) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |active| sink.borrow_mut().push(active))
}

#[test]
fn flag_is_false_up_to_and_including_threshold() {
    let source = ManualScroll::new();
    let rule = ScrollThreshold::new(50.0, Polarity::ActiveWhenPast);
    let watch = ScrollWatch::attach(Rc::clone(&source), rule, |_| {});

    for offset in [0.0, 1.0, 25.0, 49.9, 50.0] {
        source.scroll_to(offset);
        assert!(!watch.is_past(), "offset {offset} should not be past");
    }
    for offset in [50.1, 51.0, 500.0, 10_000.0] {
        source.scroll_to(offset);
        assert!(watch.is_past(), "offset {offset} should be past");
    }
}

#[test]
fn header_and_hero_share_the_signal_with_opposite_polarity() {
    let source = ManualScroll::new();
    let header = ScrollWatch::attach(
        Rc::clone(&source),
        ScrollThreshold::new(50.0, Polarity::ActiveWhenPast),
        |_| {},
    );
    let hero = ScrollWatch::attach(
        Rc::clone(&source),
        ScrollThreshold::new(50.0, Polarity::ActiveUntilPast),
        |_| {},
    );

    assert!(!header.is_active());
    assert!(hero.is_active());

    source.scroll_to(200.0);
    assert!(header.is_active());
    assert!(!hero.is_active());
}

#[test]
fn callback_fires_once_per_crossing() {
    let source = ManualScroll::new();
    let (seen, sink) = recorder();
    let _watch = ScrollWatch::attach(
        Rc::clone(&source),
        ScrollThreshold::new(50.0, Polarity::ActiveWhenPast),
        sink,
    );

    for offset in [10.0, 30.0, 60.0, 90.0, 120.0, 40.0, 0.0, 75.0] {
        source.scroll_to(offset);
    }
    assert_eq!(*seen.borrow(), vec![true, false, true]);
}

#[test]
fn attaching_mid_page_starts_past_threshold() {
    let source = ManualScroll::new();
    source.scroll_to(300.0);
    let (seen, sink) = recorder();
    let watch = ScrollWatch::attach(
        Rc::clone(&source),
        ScrollThreshold::new(50.0, Polarity::ActiveWhenPast),
        sink,
    );

    assert!(watch.is_active());
    source.scroll_to(400.0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn dropping_the_watch_releases_the_subscription() {
    let source = ManualScroll::new();
    let (seen, sink) = recorder();
    {
        let _watch = ScrollWatch::attach(
            Rc::clone(&source),
            ScrollThreshold::new(50.0, Polarity::ActiveWhenPast),
            sink,
        );
        assert_eq!(source.listener_count(), 1);
        source.scroll_to(100.0);
    }
    assert_eq!(source.listener_count(), 0);

    source.scroll_to(0.0);
    source.scroll_to(100.0);
    assert_eq!(*seen.borrow(), vec![true]);
}

#[test]
fn detach_leaves_other_watches_attached() {
    let source = ManualScroll::new();
    let rule = ScrollThreshold::new(50.0, Polarity::ActiveWhenPast);
    let (seen, sink) = recorder();
    let first = ScrollWatch::attach(Rc::clone(&source), rule, |_| {});
    let second = ScrollWatch::attach(Rc::clone(&source), rule, sink);

    first.detach();
    assert_eq!(source.listener_count(), 1);

    source.scroll_to(80.0);
    assert!(second.is_active());
    assert_eq!(*seen.borrow(), vec![true]);
}
