//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts: identifiers,
//! measurement units and quantities.

mod ids;
mod quantity;
mod unit;

pub use ids::{IngredientId, RecipeId};
pub use quantity::{parse_amount, Quantity, QuantityMap};
pub use unit::Unit;
