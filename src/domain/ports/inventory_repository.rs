//! InventoryRepository port
//!
//! Inventory items are keyed by the ingredient they track, so writes are
//! upserts rather than add/update pairs.

use chrono::NaiveDate;

use super::RepositoryResult;
use crate::domain::entities::InventoryItem;
use crate::domain::value_objects::IngredientId;

pub trait InventoryRepository: Send {
    fn get(&self, ingredient_id: &IngredientId) -> RepositoryResult<Option<InventoryItem>>;
    fn list(&self) -> RepositoryResult<Vec<InventoryItem>>;

    /// Items whose stock is at the low-stock threshold
    fn low_stock(&self) -> RepositoryResult<Vec<InventoryItem>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(InventoryItem::is_low_stock)
            .collect())
    }

    /// Items expiring within `days` of `today` that are not already expired
    fn expiring_soon(&self, days: u32, today: NaiveDate) -> RepositoryResult<Vec<InventoryItem>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|item| item.will_expire_within(days, today) && !item.is_expired(today))
            .collect())
    }

    /// Insert or overwrite the item for its ingredient
    fn add_or_update(&mut self, item: InventoryItem) -> RepositoryResult<()>;
    /// No-op when no item exists
    fn remove(&mut self, ingredient_id: &IngredientId) -> RepositoryResult<()>;
}
