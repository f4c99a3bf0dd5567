//! In-memory recipe repository

use crate::domain::entities::Recipe;
use crate::domain::ports::{RecipeRepository, RepositoryError, RepositoryResult};
use crate::domain::value_objects::RecipeId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRecipeRepository {
    items: Vec<Recipe>,
}

impl MemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_items(items: Vec<Recipe>) -> Self {
        Self { items }
    }

    pub(crate) fn items(&self) -> &[Recipe] {
        &self.items
    }
}

impl RecipeRepository for MemoryRecipeRepository {
    fn get(&self, id: &RecipeId) -> RepositoryResult<Option<Recipe>> {
        Ok(self.items.iter().find(|r| r.id() == *id).cloned())
    }

    fn list(&self) -> RepositoryResult<Vec<Recipe>> {
        Ok(self.items.clone())
    }

    fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Recipe>> {
        Ok(self.items.iter().find(|r| r.name() == name).cloned())
    }

    fn add(&mut self, recipe: Recipe) -> RepositoryResult<()> {
        if self.items.iter().any(|r| r.id() == recipe.id()) {
            return Err(RepositoryError::Duplicate {
                entity: "recipe",
                id: recipe.id().to_string(),
            });
        }
        self.items.push(recipe);
        Ok(())
    }

    fn update(&mut self, recipe: Recipe) -> RepositoryResult<()> {
        let slot = self
            .items
            .iter_mut()
            .find(|r| r.id() == recipe.id())
            .ok_or_else(|| RepositoryError::Missing {
                entity: "recipe",
                id: recipe.id().to_string(),
            })?;
        *slot = recipe;
        Ok(())
    }

    fn remove(&mut self, id: &RecipeId) -> RepositoryResult<()> {
        self.items.retain(|r| r.id() != *id);
        Ok(())
    }
}
