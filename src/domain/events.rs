//! Domain events
//!
//! Immutable records of things that happened. Events are created by use cases
//! after the enclosing unit of work commits and handed to an
//! [`EventSink`](crate::domain::ports::EventSink).

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::domain::value_objects::{IngredientId, Quantity, QuantityMap, RecipeId};

/// A recipe was cooked and its ingredients were deducted from inventory
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCooked {
    pub id: Uuid,
    pub occurred_on: DateTime<Utc>,
    pub recipe_id: RecipeId,
    pub servings: u32,
    /// Quantities actually deducted, per ingredient
    pub consumed: QuantityMap,
}

impl RecipeCooked {
    pub fn new(recipe_id: RecipeId, servings: u32, consumed: QuantityMap) -> Self {
        Self {
            id: Uuid::new_v4(),
            occurred_on: Utc::now(),
            recipe_id,
            servings,
            consumed,
        }
    }
}

/// Stock of an ingredient fell to the low-stock threshold
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryLow {
    pub id: Uuid,
    pub occurred_on: DateTime<Utc>,
    pub ingredient_id: IngredientId,
    pub current: Quantity,
}

impl InventoryLow {
    pub fn new(ingredient_id: IngredientId, current: Quantity) -> Self {
        Self {
            id: Uuid::new_v4(),
            occurred_on: Utc::now(),
            ingredient_id,
            current,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    RecipeCooked(RecipeCooked),
    InventoryLow(InventoryLow),
}

impl DomainEvent {
    /// Event type name used in serialized envelopes
    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::RecipeCooked(_) => "recipe_cooked",
            DomainEvent::InventoryLow(_) => "inventory_low",
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            DomainEvent::RecipeCooked(e) => e.id,
            DomainEvent::InventoryLow(e) => e.id,
        }
    }

    pub fn occurred_on(&self) -> DateTime<Utc> {
        match self {
            DomainEvent::RecipeCooked(e) => e.occurred_on,
            DomainEvent::InventoryLow(e) => e.occurred_on,
        }
    }

    /// Serialized envelope: `{event, id, occurred_on, payload}`
    pub fn to_json(&self) -> Value {
        let payload = match self {
            DomainEvent::RecipeCooked(e) => json!({
                "recipe_id": e.recipe_id.to_string(),
                "servings": e.servings,
                "consumed": quantity_map_json(&e.consumed),
            }),
            DomainEvent::InventoryLow(e) => json!({
                "ingredient_id": e.ingredient_id.to_string(),
                "current": quantity_json(&e.current),
            }),
        };
        json!({
            "event": self.name(),
            "id": self.id().to_string(),
            "occurred_on": self.occurred_on().to_rfc3339_opts(SecondsFormat::Micros, true),
            "payload": payload,
        })
    }
}

impl From<RecipeCooked> for DomainEvent {
    fn from(event: RecipeCooked) -> Self {
        DomainEvent::RecipeCooked(event)
    }
}

impl From<InventoryLow> for DomainEvent {
    fn from(event: InventoryLow) -> Self {
        DomainEvent::InventoryLow(event)
    }
}

/// `{amount, unit}` with the amount as a decimal string
pub fn quantity_json(quantity: &Quantity) -> Value {
    json!({
        "amount": quantity.amount().to_string(),
        "unit": quantity.unit().symbol(),
    })
}

pub fn quantity_map_json(map: &QuantityMap) -> Value {
    let entries: Map<String, Value> = map
        .iter()
        .map(|(id, qty)| (id.to_string(), quantity_json(qty)))
        .collect();
    Value::Object(entries)
}
