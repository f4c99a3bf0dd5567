//! Recipe Use Case

use std::sync::Arc;

use tracing::info;

use super::input::{resolve_inputs, IngredientInput};
use crate::application::lookup::{recipe_by_id, recipe_named};
use crate::application::transaction::with_transaction;
use crate::domain::entities::{Metadata, Recipe};
use crate::domain::ports::{KitchenStore, UnitOfWork};
use crate::domain::value_objects::RecipeId;
use crate::error::{CookmateError, CookmateResult};

pub struct RecipeUseCase {
    store: Arc<dyn KitchenStore>,
}

impl RecipeUseCase {
    pub fn new(store: Arc<dyn KitchenStore>) -> Self {
        Self { store }
    }

    /// Create and store a recipe, returning its new id.
    ///
    /// Fails with `RecipeAlreadyExists` on a duplicate name and with
    /// `IngredientNotFound` when an input names an unregistered ingredient.
    pub fn create_recipe(
        &self,
        name: &str,
        inputs: &[IngredientInput],
        steps: Vec<String>,
        metadata: Metadata,
    ) -> CookmateResult<RecipeId> {
        let recipe = with_transaction(self.store.as_ref(), |uow| {
            if uow.recipes().find_by_name(name.trim())?.is_some() {
                return Err(CookmateError::RecipeAlreadyExists {
                    name: name.trim().to_string(),
                });
            }
            let required = resolve_inputs(uow, inputs)?;
            let recipe = Recipe::new(name, required)?
                .with_steps(steps)
                .with_metadata_map(metadata);
            uow.recipes().add(recipe.clone())?;
            Ok(recipe)
        })?;

        info!(
            recipe = %recipe.name(),
            recipe_id = %recipe.id(),
            ingredients = recipe.ingredients().len(),
            "recipe created"
        );
        Ok(recipe.id())
    }

    /// Replace the stored recipe with the same id.
    ///
    /// Renaming onto another recipe's name is a conflict.
    pub fn update_recipe(&self, recipe: Recipe) -> CookmateResult<()> {
        with_transaction(self.store.as_ref(), |uow| {
            recipe_by_id(uow, &recipe.id())?;
            if let Some(other) = uow.recipes().find_by_name(recipe.name())? {
                if other.id() != recipe.id() {
                    return Err(CookmateError::RecipeAlreadyExists {
                        name: recipe.name().to_string(),
                    });
                }
            }
            uow.recipes().update(recipe.clone())?;
            Ok(())
        })?;
        info!(recipe = %recipe.name(), "recipe updated");
        Ok(())
    }

    pub fn remove_recipe(&self, name: &str) -> CookmateResult<()> {
        let removed = with_transaction(self.store.as_ref(), |uow| {
            let recipe = recipe_named(uow, name)?;
            uow.recipes().remove(&recipe.id())?;
            Ok(recipe)
        })?;
        info!(recipe = %removed.name(), "recipe removed");
        Ok(())
    }

    pub fn list_recipes(&self) -> CookmateResult<Vec<Recipe>> {
        with_transaction(self.store.as_ref(), |uow| Ok(uow.recipes().list()?))
    }

    pub fn get(&self, id: RecipeId) -> CookmateResult<Recipe> {
        with_transaction(self.store.as_ref(), |uow| recipe_by_id(uow, &id))
    }

    pub fn get_by_name(&self, name: &str) -> CookmateResult<Recipe> {
        with_transaction(self.store.as_ref(), |uow| recipe_named(uow, name))
    }

    /// Set one metadata field (tags, difficulty, duration, ...)
    pub fn update_metadata_field(&self, name: &str, key: &str, value: &str) -> CookmateResult<Recipe> {
        if key.trim().is_empty() {
            return Err(CookmateError::invalid("metadata key must not be empty"));
        }
        self.edit(name, |recipe, _| Ok(recipe.with_metadata_field(key.trim(), value)))
    }

    /// Replace the ingredient requirements
    pub fn update_ingredients(&self, name: &str, inputs: &[IngredientInput]) -> CookmateResult<Recipe> {
        self.edit(name, |recipe, uow| {
            let required = resolve_inputs(uow, inputs)?;
            recipe.with_ingredients(required)
        })
    }

    pub fn update_steps(&self, name: &str, steps: Vec<String>) -> CookmateResult<Recipe> {
        self.edit(name, |recipe, _| Ok(recipe.clone().with_steps(steps)))
    }

    /// Load by name, apply `change`, write back by id
    fn edit<F>(&self, name: &str, change: F) -> CookmateResult<Recipe>
    where
        F: FnOnce(&Recipe, &mut dyn UnitOfWork) -> CookmateResult<Recipe>,
    {
        let updated = with_transaction(self.store.as_ref(), |uow| {
            let current = recipe_named(uow, name)?;
            let updated = change(&current, uow)?;
            uow.recipes().update(updated.clone())?;
            Ok(updated)
        })?;
        info!(recipe = %updated.name(), "recipe updated");
        Ok(updated)
    }
}
