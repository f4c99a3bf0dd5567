//! Shared fixtures: stores, kitchens and a recording event sink.

use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use cookmate::domain::events::DomainEvent;
use cookmate::domain::ports::{EventSink, KitchenStore, NoopEventSink};
use cookmate::domain::value_objects::Unit;
use cookmate::presentation::Services;
use cookmate::{IngredientInput, MemoryStore, TomlStore};

/// A store plus whatever keeps it alive
pub struct StoreFixture {
    pub name: &'static str,
    pub store: Arc<dyn KitchenStore>,
    dir: Option<TempDir>,
}

impl StoreFixture {
    pub fn memory() -> Self {
        Self {
            name: "memory",
            store: Arc::new(MemoryStore::new()),
            dir: None,
        }
    }

    pub fn toml() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let store = TomlStore::new(dir.path().join("kitchen.toml"));
        Self {
            name: "toml",
            store: Arc::new(store),
            dir: Some(dir),
        }
    }

    /// One fixture per backend
    pub fn all() -> Vec<StoreFixture> {
        vec![Self::memory(), Self::toml()]
    }

    /// A second, independent handle on the same persisted document
    pub fn reopen(&self) -> Option<Arc<dyn KitchenStore>> {
        self.dir
            .as_ref()
            .map(|d| Arc::new(TomlStore::new(d.path().join("kitchen.toml"))) as Arc<dyn KitchenStore>)
    }

    pub fn services(&self) -> Services {
        Services::new(Arc::clone(&self.store), Arc::new(NoopEventSink))
    }

    pub fn services_with_events(&self, events: Arc<dyn EventSink>) -> Services {
        Services::new(Arc::clone(&self.store), events)
    }
}

/// Event sink that keeps everything it receives
#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<DomainEvent>>,
}

impl RecordingEventSink {
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(DomainEvent::name).collect()
    }
}

impl EventSink for RecordingEventSink {
    fn publish(&self, event: DomainEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

/// egg (pcs), milk (ml), flour (g), salt (g); omelette needs 2 egg + 50 ml milk
/// per serving.
pub fn omelette_kitchen(services: &Services) {
    for (name, unit) in [
        ("egg", Unit::Piece),
        ("milk", Unit::Milliliter),
        ("flour", Unit::Gram),
        ("salt", Unit::Gram),
    ] {
        services
            .ingredients
            .register(name, unit, Default::default())
            .expect("register ingredient");
    }
    services
        .recipes
        .create_recipe(
            "omelette",
            &[
                IngredientInput::new("egg", "2", "pcs"),
                IngredientInput::new("milk", "50", "ml"),
            ],
            vec!["whisk".to_string(), "fry".to_string()],
            Default::default(),
        )
        .expect("create omelette");
}

pub fn stock(services: &Services, name: &str, amount: &str, unit: &str) {
    services
        .inventory
        .set_stock(name, amount, unit, None)
        .expect("set stock");
}
