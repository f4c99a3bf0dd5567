//! Name lookups shared by the use cases
//!
//! Each helper turns an absent entity into the matching not-found error.

use crate::domain::entities::{Ingredient, Recipe};
use crate::domain::ports::UnitOfWork;
use crate::domain::value_objects::{Quantity, RecipeId};
use crate::error::{CookmateError, CookmateResult};

pub(crate) fn ingredient_named(uow: &mut dyn UnitOfWork, name: &str) -> CookmateResult<Ingredient> {
    uow.ingredients()
        .find_by_name(name.trim())?
        .ok_or_else(|| CookmateError::IngredientNotFound {
            key: name.trim().to_string(),
        })
}

pub(crate) fn recipe_named(uow: &mut dyn UnitOfWork, name: &str) -> CookmateResult<Recipe> {
    uow.recipes()
        .find_by_name(name.trim())?
        .ok_or_else(|| CookmateError::RecipeNotFound {
            key: name.trim().to_string(),
        })
}

pub(crate) fn recipe_by_id(uow: &mut dyn UnitOfWork, id: &RecipeId) -> CookmateResult<Recipe> {
    uow.recipes()
        .get(id)?
        .ok_or_else(|| CookmateError::RecipeNotFound {
            key: id.to_string(),
        })
}

/// Parse `amount` in `unit`, or in the ingredient's default unit when `unit`
/// is empty. The unit must convert to the default unit.
pub(crate) fn quantity_for(
    ingredient: &Ingredient,
    amount: &str,
    unit: &str,
) -> CookmateResult<Quantity> {
    let quantity = if unit.trim().is_empty() {
        Quantity::of(amount, ingredient.default_unit())?
    } else {
        Quantity::parse(amount, unit.trim())?
    };
    if !quantity.unit().is_compatible_with(ingredient.default_unit()) {
        return Err(CookmateError::IncompatibleUnits {
            from: quantity.unit(),
            to: ingredient.default_unit(),
        });
    }
    Ok(quantity)
}
