//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Runs every operation inside one unit of work via `with_transaction`
//!
//! ## Use Cases
//!
//! - `CookUseCase` - The all-or-nothing cook transaction
//! - `PlannerUseCase` - Cookable recipes and shopping lists
//! - `RecipeUseCase` - Recipe creation and editing
//! - `IngredientUseCase` - Ingredient catalogue
//! - `InventoryUseCase` - Stock maintenance and queries

pub mod cook;
pub mod ingredients;
pub mod inventory;
mod lookup;
pub mod planner;
pub mod recipes;
mod transaction;

pub use cook::{CookOutcome, CookUseCase};
pub use ingredients::IngredientUseCase;
pub use inventory::{InventoryUseCase, StockEntry};
pub use planner::PlannerUseCase;
pub use recipes::{IngredientInput, RecipeUseCase};
pub use transaction::with_transaction;
