mod common;

use common::{EventLog, RecordingObserver, TestResult, init_logging};
use lectern::{
    InMemoryResourceProvider, NavigationError, Presentation, Slide, SlideObserver, Source,
    load_presentation,
};
use std::rc::Rc;

fn titled(titles: &[&str]) -> Presentation {
    let mut p = Presentation::new();
    p.set_title("Deck");
    for title in titles {
        p.append(Slide::with_title(*title));
    }
    p
}

#[test]
fn test_next_saturates_on_last_slide() {
    let mut p = titled(&["A", "B", "C"]);
    p.set_current_index(2).unwrap();
    p.next_slide();
    assert_eq!(p.current_index(), Some(2));
    assert_eq!(p.current_slide().unwrap().title(), "C");
}

#[test]
fn test_prev_saturates_on_first_slide() {
    let mut p = titled(&["A", "B", "C"]);
    p.set_current_index(0).unwrap();
    p.prev_slide();
    assert_eq!(p.current_index(), Some(0));
}

#[test]
fn test_walk_forward_and_back() {
    let mut p = titled(&["A", "B", "C"]);
    let mut seen = Vec::new();
    while p.next_slide() {
        seen.push(p.current_slide().unwrap().title().to_string());
    }
    while p.prev_slide() {
        seen.push(p.current_slide().unwrap().title().to_string());
    }
    assert_eq!(seen, vec!["A", "B", "C", "B", "A"]);
}

#[test]
fn test_out_of_range_is_rejected_without_notifying() {
    let events = EventLog::default();
    let mut p = titled(&["A", "B"]);
    p.add_observer(Rc::new(RecordingObserver::new("o", events.clone())));

    assert_eq!(
        p.set_current_index(5),
        Err(NavigationError::OutOfRange { index: 5, len: 2 })
    );
    assert_eq!(p.current_index(), None);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_observers_run_in_registration_order() {
    let events = EventLog::default();
    let mut p = titled(&["A", "B", "C"]);
    p.add_observer(Rc::new(RecordingObserver::new("first", events.clone())));
    p.add_observer(Rc::new(RecordingObserver::new("second", events.clone())));

    p.set_current_index(1).unwrap();

    assert_eq!(
        *events.borrow(),
        vec![
            ("first", Some(1), Some("B".to_string())),
            ("second", Some(1), Some("B".to_string())),
        ]
    );
}

#[test]
fn test_removed_observer_is_not_notified() {
    let events = EventLog::default();
    let keep: Rc<dyn SlideObserver> = Rc::new(RecordingObserver::new("keep", events.clone()));
    let dropped: Rc<dyn SlideObserver> = Rc::new(RecordingObserver::new("drop", events.clone()));
    let mut p = titled(&["A", "B"]);
    p.add_observer(keep.clone());
    p.add_observer(dropped.clone());

    assert!(p.remove_observer(&dropped));
    p.next_slide();

    assert_eq!(*events.borrow(), vec![("keep", Some(0), Some("A".to_string()))]);
    assert_eq!(p.observer_count(), 1);
}

#[test]
fn test_load_notifies_clear_then_first_slide() -> TestResult {
    init_logging();
    let events = EventLog::default();
    let mut p = Presentation::new();
    p.add_observer(Rc::new(RecordingObserver::new("o", events.clone())));

    let resolver = InMemoryResourceProvider::new();
    load_presentation(&mut p, &Source::Demo, &resolver)?;

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], ("o", None, None));
    assert_eq!(events[1].1, Some(0));
    assert_eq!(events[1].2.as_deref(), Some("Welcome to Lectern"));
    Ok(())
}
