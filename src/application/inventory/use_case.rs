//! Inventory Use Case

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::result::StockEntry;
use crate::application::lookup::{ingredient_named, quantity_for};
use crate::application::transaction::with_transaction;
use crate::domain::entities::InventoryItem;
use crate::domain::ports::{KitchenStore, UnitOfWork};
use crate::domain::value_objects::IngredientId;
use crate::error::{CookmateError, CookmateResult};

pub struct InventoryUseCase {
    store: Arc<dyn KitchenStore>,
}

impl InventoryUseCase {
    pub fn new(store: Arc<dyn KitchenStore>) -> Self {
        Self { store }
    }

    /// Overwrite the stock of an ingredient.
    ///
    /// An empty `unit` means the ingredient's default unit.
    pub fn set_stock(
        &self,
        name: &str,
        amount: &str,
        unit: &str,
        expires_on: Option<NaiveDate>,
    ) -> CookmateResult<StockEntry> {
        let entry = with_transaction(self.store.as_ref(), |uow| {
            let ingredient = ingredient_named(uow, name)?;
            let quantity = quantity_for(&ingredient, amount, unit)?;
            let item = InventoryItem::new(ingredient.id(), quantity)?.with_expiration(expires_on);
            uow.inventory().add_or_update(item.clone())?;
            Ok(StockEntry {
                ingredient_name: ingredient.name().to_string(),
                item,
            })
        })?;
        info!(
            ingredient = %entry.ingredient_name,
            quantity = %entry.item.quantity(),
            "stock set"
        );
        Ok(entry)
    }

    /// Add to the stock of an ingredient, creating the item when absent.
    ///
    /// The delta is converted into the stocked unit; an existing expiration
    /// date is kept.
    pub fn restock(&self, name: &str, amount: &str, unit: &str) -> CookmateResult<StockEntry> {
        let entry = with_transaction(self.store.as_ref(), |uow| {
            let ingredient = ingredient_named(uow, name)?;
            let delta = quantity_for(&ingredient, amount, unit)?;
            if delta.is_negative() {
                return Err(CookmateError::invalid(format!(
                    "restock amount must not be negative, got {}",
                    delta
                )));
            }
            let item = match uow.inventory().get(&ingredient.id())? {
                Some(current) => current.add(&delta)?,
                None => InventoryItem::new(ingredient.id(), delta)?,
            };
            uow.inventory().add_or_update(item.clone())?;
            Ok(StockEntry {
                ingredient_name: ingredient.name().to_string(),
                item,
            })
        })?;
        info!(
            ingredient = %entry.ingredient_name,
            quantity = %entry.item.quantity(),
            "stock added"
        );
        Ok(entry)
    }

    /// Drop the stock entry of an ingredient; no-op when nothing is stocked
    pub fn remove(&self, name: &str) -> CookmateResult<()> {
        let ingredient = with_transaction(self.store.as_ref(), |uow| {
            let ingredient = ingredient_named(uow, name)?;
            uow.inventory().remove(&ingredient.id())?;
            Ok(ingredient)
        })?;
        info!(ingredient = %ingredient.name(), "stock removed");
        Ok(())
    }

    pub fn list(&self) -> CookmateResult<Vec<StockEntry>> {
        with_transaction(self.store.as_ref(), |uow| {
            let items = uow.inventory().list()?;
            named(uow, items)
        })
    }

    pub fn low_stock(&self) -> CookmateResult<Vec<StockEntry>> {
        with_transaction(self.store.as_ref(), |uow| {
            let items = uow.inventory().low_stock()?;
            named(uow, items)
        })
    }

    /// Items expiring within `days` of `today` and not expired yet
    pub fn expiring_soon(&self, days: u32, today: NaiveDate) -> CookmateResult<Vec<StockEntry>> {
        with_transaction(self.store.as_ref(), |uow| {
            let items = uow.inventory().expiring_soon(days, today)?;
            named(uow, items)
        })
    }
}

fn named(uow: &mut dyn UnitOfWork, items: Vec<InventoryItem>) -> CookmateResult<Vec<StockEntry>> {
    let names: BTreeMap<IngredientId, String> = uow
        .ingredients()
        .list()?
        .into_iter()
        .map(|i| (i.id(), i.name().to_string()))
        .collect();
    Ok(items
        .into_iter()
        .map(|item| StockEntry {
            ingredient_name: names
                .get(&item.ingredient_id())
                .cloned()
                .unwrap_or_else(|| item.ingredient_id().to_string()),
            item,
        })
        .collect())
}
