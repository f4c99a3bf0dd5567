//! JSON Event Sink
//!
//! Outputs domain events as NDJSON for automation consumption.

use crate::domain::events::DomainEvent;
use crate::domain::ports::EventSink;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that writes one JSON envelope per line
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl EventSink for JsonEventSink {
    fn publish(&self, event: DomainEvent) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event.to_json());
            let _ = writer.flush();
        }
    }
}
