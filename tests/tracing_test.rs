#![cfg(feature = "tracing")]

use lazy_slot::LazySlot;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

/// Collects the messages of `lazy_slot` events.
#[derive(Clone, Default)]
struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

struct MessageVisitor<'a> {
    message: &'a mut Option<String>,
    value_type: &'a mut Option<String>,
}

impl Visit for MessageVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "value_type" {
            *self.value_type = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => *self.message = Some(format!("{value:?}")),
            "value_type" => *self.value_type = Some(format!("{value:?}")),
            _ => {}
        }
    }
}

impl Subscriber for EventLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.target() == "lazy_slot"
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let (mut message, mut value_type) = (None, None);
        event.record(&mut MessageVisitor {
            message: &mut message,
            value_type: &mut value_type,
        });
        let value_type = value_type.unwrap_or_default();
        assert!(value_type.ends_with("String"), "unexpected value type {value_type}");
        if let Some(message) = message {
            self.0.lock().unwrap().push(message);
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

#[test]
fn test_lifecycle_events() {
    let log = EventLog::default();

    tracing::subscriber::with_default(log.clone(), || {
        let empty = LazySlot::<String>::new();
        drop(empty);

        let mut slot = LazySlot::<String>::new();
        slot.init(String::from("first"));
        assert_eq!(slot.take().as_deref(), Some("first"));
        assert_eq!(slot.take(), None);

        slot.init_with(|| String::from("second"));
        slot.reset();
        slot.reset();

        slot.init_from("third");
        drop(slot);

        let moved = LazySlot::from(String::from("fourth"));
        assert_eq!(moved.into_inner().as_deref(), Some("fourth"));
    });

    assert_eq!(
        log.messages(),
        [
            "initialized",
            "taken",
            "initialized",
            "reset",
            "initialized",
            "dropped",
            "initialized",
            "taken",
        ]
    );
}
