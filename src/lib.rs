//! Cookmate - kitchen manager
//!
//! Cookmate tracks ingredients, recipes and stock. Cooking a recipe checks
//! every requirement against inventory and deducts all of them in one unit of
//! work, or none at all.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    with_transaction, CookOutcome, CookUseCase, IngredientInput, IngredientUseCase,
    InventoryUseCase, PlannerUseCase, RecipeUseCase, StockEntry,
};
pub use config::Config;
pub use domain::entities::{Ingredient, InventoryItem, Recipe};
pub use domain::events::DomainEvent;
pub use domain::value_objects::{IngredientId, Quantity, QuantityMap, RecipeId, Unit};
pub use error::{CookmateError, CookmateResult, ErrorKind};
pub use infrastructure::{MemoryStore, TomlStore};
