//! In-memory inventory repository

use crate::domain::entities::InventoryItem;
use crate::domain::ports::{InventoryRepository, RepositoryResult};
use crate::domain::value_objects::IngredientId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryInventoryRepository {
    items: Vec<InventoryItem>,
}

impl MemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_items(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    pub(crate) fn items(&self) -> &[InventoryItem] {
        &self.items
    }
}

impl InventoryRepository for MemoryInventoryRepository {
    fn get(&self, ingredient_id: &IngredientId) -> RepositoryResult<Option<InventoryItem>> {
        Ok(self
            .items
            .iter()
            .find(|item| item.ingredient_id() == *ingredient_id)
            .cloned())
    }

    fn list(&self) -> RepositoryResult<Vec<InventoryItem>> {
        Ok(self.items.clone())
    }

    fn add_or_update(&mut self, item: InventoryItem) -> RepositoryResult<()> {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.ingredient_id() == item.ingredient_id())
        {
            Some(slot) => *slot = item,
            None => self.items.push(item),
        }
        Ok(())
    }

    fn remove(&mut self, ingredient_id: &IngredientId) -> RepositoryResult<()> {
        self.items.retain(|item| item.ingredient_id() != *ingredient_id);
        Ok(())
    }
}
