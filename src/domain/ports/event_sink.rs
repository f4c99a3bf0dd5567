//! Event sink port
//!
//! Fire-and-forget publication of [`DomainEvent`]s.

use crate::domain::events::DomainEvent;

/// Receives domain events
///
/// Implementations can be:
/// - `NoopEventSink`: drop everything (default)
/// - `TracingEventSink`: structured log records
/// - `JsonEventSink`: NDJSON stream
/// - `InProcessEventBus`: synchronous subscriber dispatch
pub trait EventSink: Send + Sync {
    fn publish(&self, event: DomainEvent);
}

/// No-op event sink for silent operation
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn publish(&self, _event: DomainEvent) {
        // Do nothing
    }
}
