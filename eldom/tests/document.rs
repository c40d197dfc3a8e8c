use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use eldom::{Document, Element, EventKind, MouseButton, PointerEvent};

fn sample_tree() -> Element {
    Element::col()
        .id("page")
        .child(
            Element::row()
                .id("toolbar")
                .clickable(true)
                .child(Element::text("File").id("file-label")),
        )
        .child(Element::text("body text").id("body"))
}

#[test]
fn test_hit_targets() {
    let document = Document::new();
    document.render(sample_tree());

    // Deepest element wins, clickable or not.
    assert_eq!(document.target_at(0, 0), Some("file-label".to_string()));
    // Deepest clickable is the toolbar row, not its text child.
    assert_eq!(document.clickable_at(0, 0), Some("toolbar".to_string()));
    assert_eq!(document.clickable_at(0, 1), None);
    assert_eq!(document.target_at(50, 50), None);
}

#[test]
fn test_subtree_within() {
    let document = Document::new();
    document.render(sample_tree());

    assert!(document.subtree_within("toolbar", "file-label"));
    assert!(document.subtree_within("toolbar", "toolbar"));
    assert!(!document.subtree_within("toolbar", "body"));
    assert!(!document.subtree_within("missing", "body"));
}

#[test]
fn test_listeners_fire_per_kind() {
    let document = Document::new();
    document.render(sample_tree());

    let clicks = Arc::new(AtomicUsize::new(0));
    let touches = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&clicks);
    document.add_listener(
        EventKind::Click,
        Arc::new(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );
    let counter = Arc::clone(&touches);
    document.add_listener(
        EventKind::TouchEnd,
        Arc::new(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );

    assert_eq!(document.listener_count(), 2);
    assert_eq!(document.notify(&PointerEvent::click(0, 0, MouseButton::Left)), 1);
    assert_eq!(document.notify(&PointerEvent::touch_end(0, 0)), 1);
    assert_eq!(
        document.notify(&PointerEvent::mouse_down(0, 0, MouseButton::Left)),
        0
    );
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert_eq!(touches.load(Ordering::SeqCst), 1);
}

#[test]
fn test_remove_listener_exactly_once() {
    let document = Document::new();
    let id = document.add_listener(EventKind::Click, Arc::new(|_, _| {}));

    assert_eq!(document.listener_count(), 1);
    assert!(document.remove_listener(id));
    assert_eq!(document.listener_count(), 0);
    // Second removal is a no-op.
    assert!(!document.remove_listener(id));
}

#[test]
fn test_listener_can_inspect_document() {
    let document = Document::new();
    document.render(sample_tree());

    let saw_inside = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&saw_inside);
    document.add_listener(
        EventKind::Click,
        Arc::new(move |event, doc| {
            let inside = event
                .target
                .as_deref()
                .map(|target| doc.subtree_within("toolbar", target))
                .unwrap_or(false);
            if inside {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        }),
    );

    let event = PointerEvent::click(0, 0, MouseButton::Left).with_target("file-label");
    document.notify(&event);
    assert_eq!(saw_inside.load(Ordering::SeqCst), 1);
}
