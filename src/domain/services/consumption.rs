//! Consumption arithmetic
//!
//! Pure functions shared by the cook transaction and the planner: comparing
//! required quantities against a stock snapshot and summing demand across
//! recipes. No repository access happens here.

use crate::domain::entities::InventoryItem;
use crate::domain::value_objects::{Quantity, QuantityMap};
use crate::error::CookmateResult;

/// Ingredient id -> current stock, as read from the inventory
pub fn stock_snapshot<'a>(items: impl IntoIterator<Item = &'a InventoryItem>) -> QuantityMap {
    items
        .into_iter()
        .map(|item| (item.ingredient_id(), *item.quantity()))
        .collect()
}

/// Deficit of every requirement that `stock` does not cover.
///
/// Each deficit is `required - available`, expressed in the required unit.
/// Missing stock counts as zero, so the deficit is the full requirement.
/// Ingredients with enough stock are omitted. Fails with
/// `IncompatibleUnits` when a stock unit cannot be converted.
pub fn shortfalls(required: &QuantityMap, stock: &QuantityMap) -> CookmateResult<QuantityMap> {
    let mut missing = QuantityMap::new();
    for (id, need) in required {
        let available = match stock.get(id) {
            Some(current) => current.to(need.unit())?,
            None => Quantity::zero(need.unit()),
        };
        if available < *need {
            missing.insert(*id, need.checked_sub(&available)?);
        }
    }
    Ok(missing)
}

/// Sum several demand maps per ingredient.
///
/// The first unit seen for an ingredient is kept; later demands are
/// converted into it.
pub fn aggregate_demand<'a>(
    demands: impl IntoIterator<Item = &'a QuantityMap>,
) -> CookmateResult<QuantityMap> {
    let mut total = QuantityMap::new();
    for demand in demands {
        for (id, qty) in demand {
            let summed = match total.get(id) {
                Some(so_far) => so_far.checked_add(qty)?,
                None => *qty,
            };
            total.insert(*id, summed);
        }
    }
    Ok(total)
}
