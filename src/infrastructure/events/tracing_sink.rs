//! Tracing Event Sink
//!
//! Records domain events as structured `tracing` events.

use tracing::{info, warn};

use crate::domain::events::DomainEvent;
use crate::domain::ports::EventSink;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn publish(&self, event: DomainEvent) {
        match &event {
            DomainEvent::RecipeCooked(e) => info!(
                event = event.name(),
                event_id = %e.id,
                recipe_id = %e.recipe_id,
                servings = e.servings,
                ingredients = e.consumed.len(),
                "domain event"
            ),
            DomainEvent::InventoryLow(e) => warn!(
                event = event.name(),
                event_id = %e.id,
                ingredient_id = %e.ingredient_id,
                current = %e.current,
                "domain event"
            ),
        }
    }
}
