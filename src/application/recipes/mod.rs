//! Recipe Use Case
//!
//! Creating, editing, listing and removing recipes. Ingredient inputs name
//! registered ingredients; each name is resolved to its id inside the same
//! unit of work that stores the recipe.

mod input;
mod use_case;

pub use input::IngredientInput;
pub use use_case::RecipeUseCase;
