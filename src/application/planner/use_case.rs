//! Planner Use Case

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::transaction::with_transaction;
use crate::domain::entities::Recipe;
use crate::domain::ports::KitchenStore;
use crate::domain::services::{aggregate_demand, shortfalls, stock_snapshot};
use crate::domain::value_objects::{QuantityMap, RecipeId};
use crate::error::{CookmateError, CookmateResult};

pub struct PlannerUseCase {
    store: Arc<dyn KitchenStore>,
}

impl PlannerUseCase {
    pub fn new(store: Arc<dyn KitchenStore>) -> Self {
        Self { store }
    }

    /// Recipes whose every requirement, times `servings`, is covered by stock.
    ///
    /// A recipe whose requirement cannot be converted into the stocked unit
    /// is not cookable.
    pub fn list_cookable_recipes(&self, servings: u32) -> CookmateResult<Vec<Recipe>> {
        if servings == 0 {
            return Err(CookmateError::invalid(
                "servings must be a positive integer, got 0",
            ));
        }

        let (recipes, stock) = with_transaction(self.store.as_ref(), |uow| {
            let recipes = uow.recipes().list()?;
            let stock = stock_snapshot(&uow.inventory().list()?);
            Ok((recipes, stock))
        })?;

        let mut cookable = Vec::new();
        for recipe in recipes {
            let required = recipe.consumption_for(servings)?;
            match shortfalls(&required, &stock) {
                Ok(missing) if missing.is_empty() => cookable.push(recipe),
                Ok(_) => {}
                Err(CookmateError::IncompatibleUnits { from, to }) => {
                    warn!(recipe = %recipe.name(), %from, %to, "stock unit does not match recipe unit");
                }
                Err(err) => return Err(err),
            }
        }
        debug!(servings, cookable = cookable.len(), "cookable recipes listed");
        Ok(cookable)
    }

    /// Ingredient deficits for the desired recipes.
    ///
    /// `None` means every recipe at one serving. With `Some`, only the listed
    /// recipes count: an unlisted recipe contributes nothing rather than one
    /// serving. Entries with zero servings are skipped; unknown recipe ids are
    /// ignored with a warning.
    /// Ingredients already covered by stock are omitted.
    pub fn generate_shopping_list(
        &self,
        desired: Option<&BTreeMap<RecipeId, u32>>,
    ) -> CookmateResult<QuantityMap> {
        let (recipes, stock) = with_transaction(self.store.as_ref(), |uow| {
            let recipes = uow.recipes().list()?;
            let stock = stock_snapshot(&uow.inventory().list()?);
            Ok((recipes, stock))
        })?;

        let plan: Vec<(&Recipe, u32)> = match desired {
            None => recipes.iter().map(|r| (r, 1)).collect(),
            Some(desired) => {
                for id in desired.keys() {
                    if !recipes.iter().any(|r| r.id() == *id) {
                        warn!(recipe_id = %id, "unknown recipe in shopping request");
                    }
                }
                recipes
                    .iter()
                    .filter_map(|r| desired.get(&r.id()).map(|servings| (r, *servings)))
                    .collect()
            }
        };

        let demands = plan
            .into_iter()
            .filter(|(_, servings)| *servings > 0)
            .map(|(recipe, servings)| recipe.consumption_for(servings))
            .collect::<CookmateResult<Vec<_>>>()?;

        let total = aggregate_demand(&demands)?;
        let list = shortfalls(&total, &stock)?;
        debug!(items = list.len(), "shopping list generated");
        Ok(list)
    }
}
