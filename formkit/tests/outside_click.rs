//! Outside-click dismissal across several widgets sharing one detector.

use std::sync::{Arc, Mutex};

use formkit::prelude::*;

fn options() -> Vec<ComboOption<u32>> {
    ComboOption::from_pairs([(1, "One"), (2, "Two"), (3, "Three")])
}

#[test]
fn test_click_in_one_widget_closes_the_other() {
    let detector = OutsideClickDetector::new();
    let mut first = Select::new("first", options());
    let mut second = Select::new("second", options());
    first.attach(&detector);
    second.attach(&detector);

    first.click();
    second.click();
    assert!(first.is_open() && second.is_open());

    // A press on one of `first`'s rows is outside `second` only.
    let called = detector.dispatch(&PointerEvent::mouse_down("first-opt-1"));
    assert_eq!(called, 1);
    assert!(first.is_open());
    assert!(!second.is_open());
}

#[test]
fn test_mouse_up_does_not_dismiss() {
    let detector = OutsideClickDetector::new();
    let mut select = Select::new("only", options());
    select.attach(&detector);
    select.click();

    assert_eq!(detector.dispatch(&PointerEvent::mouse_up("body")), 0);
    assert!(select.is_open());

    assert_eq!(
        detector.dispatch(&PointerEvent::untargeted(PointerEventKind::MouseDown)),
        1
    );
    assert!(!select.is_open());
}

#[test]
fn test_outside_click_reconciles_autocomplete() {
    let detector = OutsideClickDetector::new();
    let values = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&values);
    let mut widget = SelectAutocomplete::new("pick", options())
        .value(Some(2))
        .on_change(move |value| sink.lock().unwrap().push(value));
    widget.attach(&detector);

    widget.set_text("Thr");
    detector.dispatch(&PointerEvent::mouse_down("elsewhere"));
    assert_eq!(widget.text(), "Two");
    assert!(values.lock().unwrap().is_empty());

    widget.clear();
    widget.set_text("zzz");
    detector.dispatch(&PointerEvent::mouse_down("elsewhere"));
    assert_eq!(widget.text(), "");
    assert_eq!(*values.lock().unwrap(), vec![None, None]);
}

#[test]
fn test_unmount_releases_listener() {
    let detector = OutsideClickDetector::new();
    {
        let mut widget = SelectAutocomplete::new("pick", options());
        widget.attach(&detector);
        assert_eq!(detector.listener_count(), 1);
    }
    assert_eq!(detector.listener_count(), 0);
    assert_eq!(detector.dispatch(&PointerEvent::mouse_down("anything")), 0);
}
