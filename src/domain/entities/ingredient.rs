//! Ingredient entity - something a recipe can require and the pantry can stock
//!
//! Names are unique across the ingredient set; uniqueness is enforced by the
//! ingredient use case, not here.

use std::collections::BTreeMap;

use crate::domain::value_objects::{IngredientId, Unit};
use crate::error::{CookmateError, CookmateResult};

/// Free-form string metadata attached to ingredients and recipes
pub type Metadata = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    id: IngredientId,
    name: String,
    default_unit: Unit,
    metadata: Metadata,
}

impl Ingredient {
    /// Create an ingredient with a fresh id
    ///
    /// The name is trimmed and must not be empty.
    pub fn new(name: impl Into<String>, default_unit: Unit) -> CookmateResult<Self> {
        let name = validate_name("ingredient", name.into())?;
        Ok(Self {
            id: IngredientId::new(),
            name,
            default_unit,
            metadata: Metadata::new(),
        })
    }

    /// Builder: keep an existing identity (used when loading from storage)
    pub fn with_id(mut self, id: IngredientId) -> Self {
        self.id = id;
        self
    }

    /// Builder: replace the whole metadata map
    pub fn with_metadata_map(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// New instance with `key` set to `value`; other keys are kept
    pub fn with_metadata(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut enriched = self.clone();
        enriched.metadata.insert(key.into(), value.into());
        enriched
    }

    pub fn id(&self) -> IngredientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_unit(&self) -> Unit {
        self.default_unit
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

pub(crate) fn validate_name(what: &str, name: String) -> CookmateResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CookmateError::invalid(format!("{} name must not be empty", what)));
    }
    Ok(trimmed.to_string())
}
