//! In-memory kitchen store
//!
//! Each repository sits behind its own mutex. A unit of work locks all three
//! in a fixed order (ingredients, recipes, inventory) and holds the guards
//! until it is dropped, so units of work run one at a time. Writes go to a
//! staged copy that `commit` publishes back.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{
    KitchenState, MemoryIngredientRepository, MemoryInventoryRepository, MemoryRecipeRepository,
};
use crate::domain::ports::{
    IngredientRepository, InventoryRepository, KitchenStore, RecipeRepository, UnitOfWork,
};
use crate::error::CookmateResult;

#[derive(Debug, Default)]
pub struct MemoryStore {
    ingredients: Mutex<MemoryIngredientRepository>,
    recipes: Mutex<MemoryRecipeRepository>,
    inventory: Mutex<MemoryInventoryRepository>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `state`
    pub fn with_state(state: KitchenState) -> Self {
        Self {
            ingredients: Mutex::new(state.ingredients),
            recipes: Mutex::new(state.recipes),
            inventory: Mutex::new(state.inventory),
        }
    }
}

impl KitchenStore for MemoryStore {
    fn begin(&self) -> CookmateResult<Box<dyn UnitOfWork + '_>> {
        let ingredients = lock(&self.ingredients);
        let recipes = lock(&self.recipes);
        let inventory = lock(&self.inventory);
        let staged = KitchenState {
            ingredients: ingredients.clone(),
            recipes: recipes.clone(),
            inventory: inventory.clone(),
        };
        Ok(Box::new(MemoryUnitOfWork {
            ingredients,
            recipes,
            inventory,
            staged,
        }))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

/// Committed state is only ever replaced wholesale, so the data behind a
/// poisoned lock is still consistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct MemoryUnitOfWork<'a> {
    ingredients: MutexGuard<'a, MemoryIngredientRepository>,
    recipes: MutexGuard<'a, MemoryRecipeRepository>,
    inventory: MutexGuard<'a, MemoryInventoryRepository>,
    staged: KitchenState,
}

impl UnitOfWork for MemoryUnitOfWork<'_> {
    fn ingredients(&mut self) -> &mut dyn IngredientRepository {
        self.staged.ingredients_mut()
    }

    fn recipes(&mut self) -> &mut dyn RecipeRepository {
        self.staged.recipes_mut()
    }

    fn inventory(&mut self) -> &mut dyn InventoryRepository {
        self.staged.inventory_mut()
    }

    fn commit(&mut self) -> CookmateResult<()> {
        *self.ingredients = self.staged.ingredients.clone();
        *self.recipes = self.staged.recipes.clone();
        *self.inventory = self.staged.inventory.clone();
        Ok(())
    }

    fn rollback(&mut self) -> CookmateResult<()> {
        self.staged = KitchenState {
            ingredients: self.ingredients.clone(),
            recipes: self.recipes.clone(),
            inventory: self.inventory.clone(),
        };
        Ok(())
    }
}
