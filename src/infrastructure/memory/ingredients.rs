//! In-memory ingredient repository

use crate::domain::entities::Ingredient;
use crate::domain::ports::{IngredientRepository, RepositoryError, RepositoryResult};
use crate::domain::value_objects::IngredientId;

/// Vec-backed; listing order is insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryIngredientRepository {
    items: Vec<Ingredient>,
}

impl MemoryIngredientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_items(items: Vec<Ingredient>) -> Self {
        Self { items }
    }

    pub(crate) fn items(&self) -> &[Ingredient] {
        &self.items
    }
}

impl IngredientRepository for MemoryIngredientRepository {
    fn get(&self, id: &IngredientId) -> RepositoryResult<Option<Ingredient>> {
        Ok(self.items.iter().find(|i| i.id() == *id).cloned())
    }

    fn list(&self) -> RepositoryResult<Vec<Ingredient>> {
        Ok(self.items.clone())
    }

    fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Ingredient>> {
        Ok(self.items.iter().find(|i| i.name() == name).cloned())
    }

    fn add(&mut self, ingredient: Ingredient) -> RepositoryResult<()> {
        if self.items.iter().any(|i| i.id() == ingredient.id()) {
            return Err(RepositoryError::Duplicate {
                entity: "ingredient",
                id: ingredient.id().to_string(),
            });
        }
        self.items.push(ingredient);
        Ok(())
    }

    fn update(&mut self, ingredient: Ingredient) -> RepositoryResult<()> {
        match self.items.iter_mut().find(|i| i.id() == ingredient.id()) {
            Some(slot) => {
                *slot = ingredient;
                Ok(())
            }
            None => Err(RepositoryError::Missing {
                entity: "ingredient",
                id: ingredient.id().to_string(),
            }),
        }
    }

    fn remove(&mut self, id: &IngredientId) -> RepositoryResult<()> {
        self.items.retain(|i| i.id() != *id);
        Ok(())
    }
}
