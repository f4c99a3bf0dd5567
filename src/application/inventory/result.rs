//! Inventory result types

use crate::domain::entities::InventoryItem;

/// An inventory item together with the name of its ingredient
#[derive(Debug, Clone, PartialEq)]
pub struct StockEntry {
    /// Ingredient name, or the bare id when the ingredient is gone
    pub ingredient_name: String,
    pub item: InventoryItem,
}
