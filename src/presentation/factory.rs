//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{
    CookUseCase, IngredientUseCase, InventoryUseCase, PlannerUseCase, RecipeUseCase,
};
use crate::config::{Backend, Config, ConfigWarning, StorageConfig};
use crate::domain::ports::{EventSink, KitchenStore};
use crate::error::CookmateResult;
use crate::infrastructure::{
    InProcessEventBus, JsonEventSink, MemoryStore, TomlStore, TracingEventSink,
};

use super::cli::Cli;

/// Every use case over one shared store
pub struct Services {
    pub store: Arc<dyn KitchenStore>,
    pub ingredients: IngredientUseCase,
    pub recipes: RecipeUseCase,
    pub inventory: InventoryUseCase,
    pub cook: CookUseCase,
    pub planner: PlannerUseCase,
}

impl Services {
    pub fn new(store: Arc<dyn KitchenStore>, events: Arc<dyn EventSink>) -> Self {
        Self {
            ingredients: IngredientUseCase::new(Arc::clone(&store)),
            recipes: RecipeUseCase::new(Arc::clone(&store)),
            inventory: InventoryUseCase::new(Arc::clone(&store)),
            cook: CookUseCase::new(Arc::clone(&store)).with_events(events),
            planner: PlannerUseCase::new(Arc::clone(&store)),
            store,
        }
    }

    /// Services for a loaded configuration
    pub fn from_config(config: &Config, json: bool) -> Self {
        Self::new(create_store(&config.storage), create_event_sink(json))
    }
}

/// Load configuration for `project_dir` and apply CLI flags on top
pub fn resolve_config(cli: &Cli, project_dir: &Path) -> CookmateResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = Config::load_or_default(project_dir)?;
    Ok((apply_cli_overrides(config, cli), warnings))
}

/// CLI flags win over files and environment
pub fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(backend) = cli.backend {
        config.storage.backend = backend;
    }
    if let Some(dir) = &cli.data_dir {
        config.storage.dir = dir.clone();
    }
    if let Some(file) = &cli.data_file {
        config.storage.file = file.clone();
    }
    config
}

pub fn create_store(storage: &StorageConfig) -> Arc<dyn KitchenStore> {
    match storage.backend {
        Backend::Memory => Arc::new(MemoryStore::new()),
        Backend::Toml => Arc::new(TomlStore::new(storage.path())),
    }
}

/// Event bus forwarding every domain event to the log, and to stdout as
/// NDJSON when `json` is set
pub fn create_event_sink(json: bool) -> Arc<dyn EventSink> {
    let bus = InProcessEventBus::new();
    bus.forward_to(Arc::new(TracingEventSink));
    if json {
        bus.forward_to(Arc::new(JsonEventSink::stdout()));
    }
    Arc::new(bus)
}
