//! Cook Use Case

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::application::lookup::{recipe_by_id, recipe_named};
use crate::application::transaction::with_transaction;
use crate::domain::entities::{InventoryItem, Recipe};
use crate::domain::events::{InventoryLow, RecipeCooked};
use crate::domain::ports::{EventSink, KitchenStore, NoopEventSink, UnitOfWork};
use crate::domain::services::{shortfalls, stock_snapshot};
use crate::domain::value_objects::{IngredientId, RecipeId};
use crate::error::{CookmateError, CookmateResult};

/// What a successful cook did
#[derive(Debug, Clone)]
pub struct CookOutcome {
    pub recipe_name: String,
    pub cooked: RecipeCooked,
    /// Consumed ingredients that are now low on stock
    pub low_stock: Vec<InventoryLow>,
}

pub struct CookUseCase {
    store: Arc<dyn KitchenStore>,
    events: Arc<dyn EventSink>,
}

impl CookUseCase {
    /// Cook use case publishing to a no-op sink
    pub fn new(store: Arc<dyn KitchenStore>) -> Self {
        Self {
            store,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Builder: set the event sink
    pub fn with_events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    /// Cook `servings` portions of the recipe with `recipe_id`
    pub fn cook(&self, recipe_id: RecipeId, servings: u32) -> CookmateResult<CookOutcome> {
        validate_servings(servings)?;
        self.run(servings, |uow| recipe_by_id(uow, &recipe_id))
    }

    /// Same as [`cook`](Self::cook), resolving the recipe by name
    pub fn cook_by_name(&self, name: &str, servings: u32) -> CookmateResult<CookOutcome> {
        validate_servings(servings)?;
        self.run(servings, |uow| recipe_named(uow, name))
    }

    fn run<F>(&self, servings: u32, load: F) -> CookmateResult<CookOutcome>
    where
        F: FnOnce(&mut dyn UnitOfWork) -> CookmateResult<Recipe>,
    {
        let outcome = with_transaction(self.store.as_ref(), |uow| {
            let recipe = load(uow)?;
            deduct(uow, &recipe, servings)
        })?;

        info!(
            recipe = %outcome.recipe_name,
            recipe_id = %outcome.cooked.recipe_id,
            servings,
            ingredients = outcome.cooked.consumed.len(),
            "recipe cooked"
        );

        self.events.publish(outcome.cooked.clone().into());
        for low in &outcome.low_stock {
            self.events.publish(low.clone().into());
        }
        Ok(outcome)
    }
}

fn validate_servings(servings: u32) -> CookmateResult<()> {
    if servings == 0 {
        return Err(CookmateError::invalid(
            "servings must be a positive integer, got 0",
        ));
    }
    Ok(())
}

/// Check sufficiency for every ingredient first, then consume.
fn deduct(
    uow: &mut dyn UnitOfWork,
    recipe: &Recipe,
    servings: u32,
) -> CookmateResult<CookOutcome> {
    let consumption = recipe.consumption_for(servings)?;

    let mut items: BTreeMap<IngredientId, InventoryItem> = BTreeMap::new();
    for id in consumption.keys() {
        if let Some(item) = uow.inventory().get(id)? {
            items.insert(*id, item);
        }
    }

    let missing = shortfalls(&consumption, &stock_snapshot(items.values()))?;
    if !missing.is_empty() {
        warn!(
            recipe = %recipe.name(),
            servings,
            missing = missing.len(),
            "not enough stock to cook"
        );
        return Err(CookmateError::InsufficientInventory { missing });
    }

    let mut low_stock = Vec::new();
    for (id, qty) in &consumption {
        let item = items
            .remove(id)
            .ok_or_else(|| CookmateError::InventoryItemNotFound { key: id.to_string() })?;
        let updated = item.consume(qty)?;
        if updated.is_low_stock() {
            low_stock.push(InventoryLow::new(*id, *updated.quantity()));
        }
        uow.inventory().add_or_update(updated)?;
    }

    Ok(CookOutcome {
        recipe_name: recipe.name().to_string(),
        cooked: RecipeCooked::new(recipe.id(), servings, consumption),
        low_stock,
    })
}
