//! Ingredient inputs for recipe creation and editing

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::application::lookup::{ingredient_named, quantity_for};
use crate::domain::ports::UnitOfWork;
use crate::domain::value_objects::QuantityMap;
use crate::error::{CookmateError, CookmateResult};

/// One `(ingredient name, amount, unit)` triple as typed by a user.
///
/// An empty `unit` means the ingredient's default unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientInput {
    pub name: String,
    pub amount: String,
    pub unit: String,
}

impl IngredientInput {
    pub fn new(name: impl Into<String>, amount: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
        }
    }
}

impl FromStr for IngredientInput {
    type Err = CookmateError;

    /// Parses `name,amount[,unit]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [name, amount] if !name.is_empty() => Ok(Self::new(*name, *amount, "")),
            [name, amount, unit] if !name.is_empty() => Ok(Self::new(*name, *amount, *unit)),
            _ => Err(CookmateError::invalid(format!(
                "ingredient input '{}' must look like name,amount[,unit]",
                s
            ))),
        }
    }
}

/// Resolve inputs to a requirement map.
///
/// Fails on a repeated ingredient name, an unregistered ingredient, a
/// malformed amount, or a unit that is unknown or does not fit the ingredient.
pub(crate) fn resolve_inputs(
    uow: &mut dyn UnitOfWork,
    inputs: &[IngredientInput],
) -> CookmateResult<QuantityMap> {
    let mut seen = BTreeSet::new();
    let mut required = QuantityMap::new();
    for input in inputs {
        let name = input.name.trim();
        if !seen.insert(name.to_string()) {
            return Err(CookmateError::invalid(format!(
                "ingredient '{}' is listed more than once",
                name
            )));
        }
        let ingredient = ingredient_named(uow, name)?;
        let quantity = quantity_for(&ingredient, &input.amount, &input.unit)?;
        required.insert(ingredient.id(), quantity);
    }
    Ok(required)
}
