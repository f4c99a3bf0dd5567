//! Staged kitchen state
//!
//! The three repositories a unit of work writes to before commit. Both the
//! in-memory store and the TOML store stage into this.

use super::{MemoryIngredientRepository, MemoryInventoryRepository, MemoryRecipeRepository};
use crate::domain::ports::{IngredientRepository, InventoryRepository, RecipeRepository};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KitchenState {
    pub ingredients: MemoryIngredientRepository,
    pub recipes: MemoryRecipeRepository,
    pub inventory: MemoryInventoryRepository,
}

impl KitchenState {
    pub(crate) fn ingredients_mut(&mut self) -> &mut dyn IngredientRepository {
        &mut self.ingredients
    }

    pub(crate) fn recipes_mut(&mut self) -> &mut dyn RecipeRepository {
        &mut self.recipes
    }

    pub(crate) fn inventory_mut(&mut self) -> &mut dyn InventoryRepository {
        &mut self.inventory
    }
}
