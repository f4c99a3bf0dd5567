//! Ingredient Use Case

use std::sync::Arc;

use tracing::info;

use crate::application::lookup::ingredient_named;
use crate::application::transaction::with_transaction;
use crate::domain::entities::{Ingredient, Metadata};
use crate::domain::ports::KitchenStore;
use crate::domain::value_objects::Unit;
use crate::error::{CookmateError, CookmateResult};

pub struct IngredientUseCase {
    store: Arc<dyn KitchenStore>,
}

impl IngredientUseCase {
    pub fn new(store: Arc<dyn KitchenStore>) -> Self {
        Self { store }
    }

    /// Register a new ingredient; names are unique
    pub fn register(
        &self,
        name: &str,
        default_unit: Unit,
        metadata: Metadata,
    ) -> CookmateResult<Ingredient> {
        let ingredient = Ingredient::new(name, default_unit)?.with_metadata_map(metadata);
        with_transaction(self.store.as_ref(), |uow| {
            if uow.ingredients().find_by_name(ingredient.name())?.is_some() {
                return Err(CookmateError::IngredientAlreadyExists {
                    name: ingredient.name().to_string(),
                });
            }
            uow.ingredients().add(ingredient.clone())?;
            Ok(())
        })?;
        info!(
            ingredient = %ingredient.name(),
            unit = %ingredient.default_unit(),
            "ingredient registered"
        );
        Ok(ingredient)
    }

    pub fn list(&self) -> CookmateResult<Vec<Ingredient>> {
        with_transaction(self.store.as_ref(), |uow| Ok(uow.ingredients().list()?))
    }

    pub fn get_by_name(&self, name: &str) -> CookmateResult<Ingredient> {
        with_transaction(self.store.as_ref(), |uow| ingredient_named(uow, name))
    }

    /// Set one metadata field, storing the enriched copy
    pub fn enrich_metadata(&self, name: &str, key: &str, value: &str) -> CookmateResult<Ingredient> {
        if key.trim().is_empty() {
            return Err(CookmateError::invalid("metadata key must not be empty"));
        }
        let enriched = with_transaction(self.store.as_ref(), |uow| {
            let enriched = ingredient_named(uow, name)?.with_metadata(key.trim(), value);
            uow.ingredients().update(enriched.clone())?;
            Ok(enriched)
        })?;
        info!(ingredient = %enriched.name(), key = key.trim(), "ingredient metadata updated");
        Ok(enriched)
    }

    /// Remove an ingredient nothing references any more.
    ///
    /// Fails with `IngredientInUse` listing every recipe (and the inventory)
    /// still pointing at it.
    pub fn remove(&self, name: &str) -> CookmateResult<()> {
        let removed = with_transaction(self.store.as_ref(), |uow| {
            let ingredient = ingredient_named(uow, name)?;
            let id = ingredient.id();

            let mut holders: Vec<String> = uow
                .recipes()
                .list()?
                .into_iter()
                .filter(|recipe| recipe.requires(&id))
                .map(|recipe| format!("recipe '{}'", recipe.name()))
                .collect();
            if uow.inventory().get(&id)?.is_some() {
                holders.push("inventory".to_string());
            }
            if !holders.is_empty() {
                return Err(CookmateError::IngredientInUse {
                    name: ingredient.name().to_string(),
                    holders,
                });
            }

            uow.ingredients().remove(&id)?;
            Ok(ingredient)
        })?;
        info!(ingredient = %removed.name(), "ingredient removed");
        Ok(())
    }
}
