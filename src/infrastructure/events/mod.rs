//! Event Sink Implementations
//!
//! Concrete implementations of `EventSink`:
//! - JsonEventSink: NDJSON output for automation
//! - TracingEventSink: structured log records
//! - InProcessEventBus: synchronous fan-out to subscribers

mod bus;
mod json;
mod tracing_sink;

pub use bus::InProcessEventBus;
pub use json::JsonEventSink;
pub use tracing_sink::TracingEventSink;
