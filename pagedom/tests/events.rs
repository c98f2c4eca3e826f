use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pagedom::{Document, Element, Event, PointerEvent, Registration};

fn page() -> Document {
    let doc = Document::new();
    doc.add_container("root");
    doc.add_container("other");
    doc.mount(
        "root",
        Element::div().id("list").child(
            Element::div()
                .id("row")
                .child(Element::span().id("label").child(Element::text("Apple").id("leaf"))),
        ),
    );
    doc.mount("other", Element::text("elsewhere").id("far"));
    doc
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn test_mount_missing_container_is_rejected() {
    let doc = Document::new();
    assert!(!doc.mount("nope", Element::div()));
    assert!(doc.container("nope").is_none());
}

#[test]
fn test_mount_replaces_previous_content() {
    let doc = page();
    doc.mount("root", Element::text("fresh").id("fresh"));
    assert!(doc.find("row").is_none());
    assert!(doc.find("fresh").is_some());
}

#[test]
fn test_contains_is_scoped_to_container() {
    let doc = page();
    assert!(doc.contains("root", "root"));
    assert!(doc.contains("root", "leaf"));
    assert!(!doc.contains("root", "far"));
    assert!(!doc.contains("missing", "leaf"));
}

#[test]
fn test_path_to_starts_at_container() {
    let doc = page();
    assert_eq!(doc.path_to("leaf"), vec!["root", "list", "row", "label", "leaf"]);
    assert!(doc.path_to("ghost").is_empty());
}

#[test]
fn test_unmount_keeps_container() {
    let doc = page();
    doc.unmount("root");
    assert!(doc.has_container("root"));
    assert!(doc.find("list").is_none());
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_click_bubbles_to_nearest_handler() {
    let doc = page();
    let hits = Arc::new(Mutex::new(Vec::new()));

    let h = Arc::clone(&hits);
    let _registration = doc.registry().register(
        "list",
        "on_click",
        Arc::new(move |event: &Event| h.lock().unwrap().push(format!("list:{}", event.target()))),
    );

    doc.dispatch(&Event::click("leaf"));
    assert_eq!(*hits.lock().unwrap(), vec!["list:leaf".to_string()]);
}

#[test]
fn test_click_stops_at_first_handler() {
    let doc = page();
    let hits = Arc::new(Mutex::new(Vec::new()));

    let _registrations: Vec<Registration> = ["list", "row"]
        .into_iter()
        .map(|id| {
            let h = Arc::clone(&hits);
            doc.registry().register(
                id,
                "on_click",
                Arc::new(move |_: &Event| h.lock().unwrap().push(id.to_string())),
            )
        })
        .collect();

    doc.dispatch(&Event::click("label"));
    assert_eq!(*hits.lock().unwrap(), vec!["row".to_string()]);
}

#[test]
fn test_focus_does_not_bubble() {
    let doc = page();
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let _registration = doc.registry().register(
        "list",
        "on_focus",
        Arc::new(move |_: &Event| {
            c.fetch_add(1, Ordering::SeqCst);
        }),
    );

    doc.dispatch(&Event::focus("row"));
    assert_eq!(count.load(Ordering::SeqCst), 0);

    doc.dispatch(&Event::focus("list"));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_input_event_carries_value() {
    let doc = page();
    let seen = Arc::new(Mutex::new(None));
    let s = Arc::clone(&seen);
    let _registration = doc.registry().register(
        "row",
        "on_input",
        Arc::new(move |event: &Event| *s.lock().unwrap() = event.value().map(str::to_string)),
    );

    doc.dispatch(&Event::input("row", "ban"));
    assert_eq!(seen.lock().unwrap().as_deref(), Some("ban"));
}

#[test]
fn test_handler_may_reenter_document() {
    let doc = page();
    let inner = doc.clone();
    let _registration = doc.registry().register(
        "list",
        "on_click",
        Arc::new(move |_: &Event| {
            inner.mount("root", Element::text("replaced").id("replaced"));
        }),
    );

    doc.dispatch(&Event::click("leaf"));
    assert!(doc.find("replaced").is_some());
}

// ============================================================================
// Pointer bus
// ============================================================================

#[test]
fn test_pointer_bus_sees_every_click() {
    let doc = page();
    let events: Arc<Mutex<Vec<PointerEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let e = Arc::clone(&events);
    let _sub = doc
        .pointer_bus()
        .subscribe(Arc::new(move |event: &PointerEvent| e.lock().unwrap().push(event.clone())));

    doc.dispatch(&Event::click("leaf"));
    doc.dispatch(&Event::click("body"));

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events[0].is_within("root"));
    assert!(!events[0].is_within("other"));
    assert!(events[1].path.is_empty());
    assert!(!events[1].is_within("root"));
}

#[test]
fn test_dropping_subscription_unregisters() {
    let doc = page();
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let sub = doc.pointer_bus().subscribe(Arc::new(move |_: &PointerEvent| {
        c.fetch_add(1, Ordering::SeqCst);
    }));
    assert_eq!(doc.pointer_bus().listener_count(), 1);

    doc.dispatch(&Event::click("far"));
    sub.unsubscribe();
    doc.dispatch(&Event::click("far"));

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(doc.pointer_bus().listener_count(), 0);
}

#[test]
fn test_subscription_outliving_bus_is_harmless() {
    let sub = {
        let doc = Document::new();
        doc.pointer_bus().subscribe(Arc::new(|_: &PointerEvent| {}))
    };
    assert!(!sub.is_attached());
    drop(sub);
}

#[test]
fn test_dropping_registration_removes_handler() {
    let doc = page();
    let row = doc.registry().register("row", "on_click", Arc::new(|_: &Event| {}));
    let _focus = doc.registry().register("row", "on_focus", Arc::new(|_: &Event| {}));
    assert_eq!(doc.registry().len(), 2);
    assert!(row.is_current());

    drop(row);
    assert_eq!(doc.registry().len(), 1);
    assert!(doc.registry().get("row", "on_click").is_none());
    assert!(doc.registry().get("row", "on_focus").is_some());
}

#[test]
fn test_superseded_registration_leaves_new_handler() {
    let doc = page();
    let hits = Arc::new(Mutex::new(Vec::new()));

    let h = Arc::clone(&hits);
    let first = doc.registry().register(
        "list",
        "on_click",
        Arc::new(move |_: &Event| h.lock().unwrap().push("first")),
    );
    let h = Arc::clone(&hits);
    let second = doc.registry().register(
        "list",
        "on_click",
        Arc::new(move |_: &Event| h.lock().unwrap().push("second")),
    );
    assert!(!first.is_current());
    assert!(second.is_current());

    drop(first);
    assert_eq!(doc.registry().len(), 1);

    doc.dispatch(&Event::click("leaf"));
    assert_eq!(*hits.lock().unwrap(), vec!["second"]);
}

#[test]
fn test_registration_outliving_document_is_harmless() {
    let registration = {
        let doc = Document::new();
        doc.registry().register("row", "on_click", Arc::new(|_: &Event| {}))
    };
    assert!(!registration.is_current());
    drop(registration);
}

// ============================================================================
// Hidden elements
// ============================================================================

#[test]
fn test_events_skip_hidden_subtrees() {
    let doc = Document::new();
    doc.add_container("root");
    doc.mount(
        "root",
        Element::div()
            .id("list")
            .hidden(true)
            .child(Element::text("Apple").id("row")),
    );

    let clicks = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&clicks);
    let _registration = doc.registry().register(
        "list",
        "on_click",
        Arc::new(move |_: &Event| {
            c.fetch_add(1, Ordering::SeqCst);
        }),
    );
    let pointer = Arc::new(AtomicUsize::new(0));
    let p = Arc::clone(&pointer);
    let _sub = doc.pointer_bus().subscribe(Arc::new(move |_: &PointerEvent| {
        p.fetch_add(1, Ordering::SeqCst);
    }));

    assert!(!doc.is_rendered("row"));
    doc.dispatch(&Event::click("row"));
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
    assert_eq!(pointer.load(Ordering::SeqCst), 0);

    doc.mount(
        "root",
        Element::div()
            .id("list")
            .child(Element::text("Apple").id("row")),
    );
    assert!(doc.is_rendered("row"));
    doc.dispatch(&Event::click("row"));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert_eq!(pointer.load(Ordering::SeqCst), 1);
}
