//! In-process event bus
//!
//! Fans each published event out to every subscriber, synchronously and in
//! subscription order.

use std::sync::{Arc, RwLock};

use crate::domain::events::DomainEvent;
use crate::domain::ports::EventSink;

type Handler = Arc<dyn Fn(&DomainEvent) + Send + Sync>;

#[derive(Default)]
pub struct InProcessEventBus {
    subscribers: RwLock<Vec<Handler>>,
}

impl InProcessEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, handler: F)
    where
        F: Fn(&DomainEvent) + Send + Sync + 'static,
    {
        if let Ok(mut subscribers) = self.subscribers.write() {
            subscribers.push(Arc::new(handler));
        }
    }

    /// Forward every event to another sink
    pub fn forward_to(&self, sink: Arc<dyn EventSink>) {
        self.subscribe(move |event| sink.publish(event.clone()));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().map(|s| s.len()).unwrap_or(0)
    }
}

impl EventSink for InProcessEventBus {
    fn publish(&self, event: DomainEvent) {
        // Handlers run outside the lock so they may subscribe further handlers.
        let handlers: Vec<Handler> = match self.subscribers.read() {
            Ok(subscribers) => subscribers.clone(),
            Err(_) => return,
        };
        for handler in handlers {
            handler(&event);
        }
    }
}
