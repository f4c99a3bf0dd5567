//! Recipe entity
//!
//! A recipe maps each required ingredient to the quantity needed for one
//! serving. Edits never mutate a stored recipe in place: every `with_*`
//! method returns a new value that the caller writes back by id.

use rust_decimal::Decimal;

use super::ingredient::{validate_name, Metadata};
use crate::domain::value_objects::{IngredientId, Quantity, QuantityMap, RecipeId};
use crate::error::{CookmateError, CookmateResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    id: RecipeId,
    name: String,
    ingredients: QuantityMap,
    steps: Vec<String>,
    metadata: Metadata,
}

impl Recipe {
    /// Create a recipe with a fresh id
    ///
    /// Fails when the name is blank, when no ingredient is required, or when a
    /// required quantity is not strictly positive.
    pub fn new(name: impl Into<String>, ingredients: QuantityMap) -> CookmateResult<Self> {
        let name = validate_name("recipe", name.into())?;
        validate_ingredients(&ingredients)?;
        Ok(Self {
            id: RecipeId::new(),
            name,
            ingredients,
            steps: Vec::new(),
            metadata: Metadata::new(),
        })
    }

    /// Builder: keep an existing identity
    pub fn with_id(mut self, id: RecipeId) -> Self {
        self.id = id;
        self
    }

    /// Builder: replace the ordered steps
    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }

    /// Builder: replace the whole metadata map
    pub fn with_metadata_map(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// New instance with one metadata field set
    pub fn with_metadata_field(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut updated = self.clone();
        updated.metadata.insert(key.into(), value.into());
        updated
    }

    /// New instance requiring `ingredients` instead; same validation as `new`
    pub fn with_ingredients(&self, ingredients: QuantityMap) -> CookmateResult<Self> {
        validate_ingredients(&ingredients)?;
        let mut updated = self.clone();
        updated.ingredients = ingredients;
        Ok(updated)
    }

    /// Multiply every requirement by `factor` (> 0); the id is kept
    pub fn scale(&self, factor: Decimal) -> CookmateResult<Self> {
        if factor <= Decimal::ZERO {
            return Err(CookmateError::invalid(format!(
                "scale factor must be positive, got {}",
                factor
            )));
        }
        let ingredients = self
            .ingredients
            .iter()
            .map(|(id, qty)| Ok((*id, qty.multiply(factor)?)))
            .collect::<CookmateResult<QuantityMap>>()?;
        let mut scaled = self.clone();
        scaled.ingredients = ingredients;
        Ok(scaled)
    }

    /// Quantities consumed by cooking `servings` portions
    pub fn consumption_for(&self, servings: u32) -> CookmateResult<QuantityMap> {
        self.ingredients
            .iter()
            .map(|(id, qty)| Ok((*id, qty.times(servings)?)))
            .collect()
    }

    pub fn requires(&self, ingredient: &IngredientId) -> bool {
        self.ingredients.contains_key(ingredient)
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-serving requirements
    pub fn ingredients(&self) -> &QuantityMap {
        &self.ingredients
    }

    pub fn required(&self, ingredient: &IngredientId) -> Option<&Quantity> {
        self.ingredients.get(ingredient)
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

fn validate_ingredients(ingredients: &QuantityMap) -> CookmateResult<()> {
    if ingredients.is_empty() {
        return Err(CookmateError::invalid(
            "recipe must require at least one ingredient",
        ));
    }
    if let Some((id, qty)) = ingredients
        .iter()
        .find(|(_, qty)| qty.amount() <= Decimal::ZERO)
    {
        return Err(CookmateError::invalid(format!(
            "required quantity for ingredient {} must be positive, got {}",
            id, qty
        )));
    }
    Ok(())
}
