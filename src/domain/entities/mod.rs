//! Domain Entities
//!
//! Aggregates with identity:
//! - `Ingredient` - a named thing with a default unit
//! - `Recipe` - per-serving ingredient requirements plus steps
//! - `InventoryItem` - current stock of one ingredient

mod ingredient;
mod inventory_item;
mod recipe;

pub use ingredient::{Ingredient, Metadata};
pub use inventory_item::{InventoryItem, LOW_STOCK_EPSILON};
pub use recipe::Recipe;
