#![cfg(feature = "tracing")]

//! Structured log events emitted by the drag controller.
//!
//! Run:
//!   cargo test -p dragbox-widgets --features tracing --test tracing_events

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dragbox_core::event::PointerEvent;
use dragbox_core::geometry::Size;
use dragbox_layout::Gravity;
use dragbox_widgets::{DragConfig, DragLayout};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn message(&self) -> &str {
        self.fields.get("message").map_or("", String::as_str)
    }
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for EventCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn with_captured_events<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = EventCapture {
        events: events.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
}

#[test]
fn capture_and_release_are_logged_at_debug() {
    let events = with_captured_events(|| {
        let mut layout = DragLayout::new(Size::new(300, 300), DragConfig::default())
            .expect("default config should be valid");
        layout
            .add_child(Size::new(100, 100), Gravity::TOP_LEFT)
            .expect("id available");
        layout.on_pointer_event(&PointerEvent::down(3, 10, 10));
        layout.on_pointer_event(&PointerEvent::moved(3, 20, 10));
        layout.on_pointer_event(&PointerEvent::up(3, 20, 10));
    });

    let captured = events
        .iter()
        .find(|event| event.message() == "child captured")
        .expect("capture should be logged");
    assert_eq!(captured.level, tracing::Level::DEBUG);
    assert_eq!(captured.fields.get("child").map(String::as_str), Some("1"));
    assert_eq!(captured.fields.get("pointer_id").map(String::as_str), Some("3"));

    let released = events
        .iter()
        .find(|event| event.message() == "child released")
        .expect("release should be logged");
    assert_eq!(released.fields.get("action").map(String::as_str), Some("Stop"));
}

#[test]
fn ignored_events_are_logged_at_trace() {
    let events = with_captured_events(|| {
        let mut layout = DragLayout::new(Size::new(300, 300), DragConfig::default())
            .expect("default config should be valid");
        layout.on_pointer_event(&PointerEvent::moved(5, 10, 10));
    });

    let ignored = events
        .iter()
        .find(|event| event.message() == "pointer event ignored")
        .expect("ignored event should be logged");
    assert_eq!(ignored.level, tracing::Level::TRACE);
    assert!(
        ignored
            .fields
            .get("outcome")
            .is_some_and(|outcome| outcome.contains("UnknownPointer"))
    );
}

#[test]
fn removing_dragged_child_logs_pruning() {
    let events = with_captured_events(|| {
        let mut layout = DragLayout::new(Size::new(300, 300), DragConfig::default())
            .expect("default config should be valid");
        let id = layout
            .add_child(Size::new(100, 100), Gravity::TOP_LEFT)
            .expect("id available");
        layout.on_pointer_event(&PointerEvent::down(1, 10, 10));
        layout.on_pointer_event(&PointerEvent::moved(1, 40, 10));
        layout.remove_child(id);
    });

    assert!(
        events
            .iter()
            .any(|event| event.message() == "stale offset pruned")
    );
}
