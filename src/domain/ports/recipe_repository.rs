//! RecipeRepository port

use super::RepositoryResult;
use crate::domain::entities::Recipe;
use crate::domain::value_objects::RecipeId;

/// Same contract as [`IngredientRepository`](super::IngredientRepository),
/// keyed by [`RecipeId`].
pub trait RecipeRepository: Send {
    fn get(&self, id: &RecipeId) -> RepositoryResult<Option<Recipe>>;
    fn list(&self) -> RepositoryResult<Vec<Recipe>>;
    fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Recipe>>;
    fn add(&mut self, recipe: Recipe) -> RepositoryResult<()>;
    fn update(&mut self, recipe: Recipe) -> RepositoryResult<()>;
    fn remove(&mut self, id: &RecipeId) -> RepositoryResult<()>;
}
