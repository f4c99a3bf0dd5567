//! Domain Layer
//!
//! The core of Cookmate - kitchen rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Unit, Quantity, ids)
//! - `entities/` - Aggregates (Ingredient, Recipe, InventoryItem)
//! - `events` - Domain events (RecipeCooked, InventoryLow)
//! - `services/` - Pure consumption and demand arithmetic
//! - `ports/` - Repository, unit of work and event sink traits
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Immutable values** - Every change produces a new value
//! 3. **Ports & Adapters** - All storage goes through trait-defined ports

pub mod entities;
pub mod events;
pub mod ports;
pub mod services;
pub mod value_objects;
