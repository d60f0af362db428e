use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tracing::{field::Field, span, Level, Metadata};

/// The data reported in a tracing event. Every field value is stored in its string form.
#[derive(Debug, Clone)]
pub(crate) struct TracingEvent {
    pub(crate) level: Level,
    pub(crate) target: String,
    pub(crate) fields: HashMap<String, String>,
}

impl TracingEvent {
    fn new(level: Level, target: String) -> TracingEvent {
        TracingEvent {
            level,
            target,
            fields: Default::default(),
        }
    }

    /// The event's message, or the empty string if it has none.
    pub(crate) fn message(&self) -> &str {
        self.field("message").unwrap_or_default()
    }

    pub(crate) fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Collects the tracing events emitted on the current thread while installed with
/// `set_as_default`.
#[derive(Clone)]
pub(crate) struct TracingHandler {
    /// The most verbose level recorded.
    max_verbosity_level: Level,
    events: Arc<Mutex<Vec<TracingEvent>>>,
}

impl TracingHandler {
    pub(crate) fn new(max_verbosity_level: Level) -> TracingHandler {
        Self {
            max_verbosity_level,
            events: Default::default(),
        }
    }

    /// Installs this as the default handler for tracing events until the returned guard is
    /// dropped.
    pub(crate) fn set_as_default(&self) -> tracing::subscriber::DefaultGuard {
        tracing::subscriber::set_default(self.clone())
    }

    /// The events recorded so far for `target`, oldest first.
    pub(crate) fn events(&self, target: &str) -> Vec<TracingEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.target == target)
            .cloned()
            .collect()
    }
}

impl tracing::Subscriber for TracingHandler {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= &self.max_verbosity_level
    }

    fn event(&self, event: &tracing::Event<'_>) {
        let mut test_event = TracingEvent::new(
            *event.metadata().level(),
            event.metadata().target().to_string(),
        );
        event.record(&mut TracingEventVisitor {
            event: &mut test_event,
        });
        self.events.lock().unwrap().push(test_event);
    }

    // No spans are created on the read path.
    fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }
    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}
    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}
    fn enter(&self, _span: &span::Id) {}
    fn exit(&self, _span: &span::Id) {}
}

struct TracingEventVisitor<'a> {
    event: &'a mut TracingEvent,
}

impl TracingEventVisitor<'_> {
    fn insert(&mut self, field: &Field, value: String) {
        self.event.fields.insert(field.name().to_string(), value);
    }
}

impl tracing::field::Visit for TracingEventVisitor<'_> {
    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.insert(field, format!("{:?}", value));
    }
}
