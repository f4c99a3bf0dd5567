//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

mod event_sink;
mod ingredient_repository;
mod inventory_repository;
mod recipe_repository;
mod repository_error;
mod unit_of_work;

pub use event_sink::{EventSink, NoopEventSink};
pub use ingredient_repository::IngredientRepository;
pub use inventory_repository::InventoryRepository;
pub use recipe_repository::RecipeRepository;
pub use repository_error::{RepositoryError, RepositoryResult};
pub use unit_of_work::{KitchenStore, UnitOfWork};
