//! IngredientRepository port

use super::RepositoryResult;
use crate::domain::entities::Ingredient;
use crate::domain::value_objects::IngredientId;

/// Query/mutate contract for ingredients.
///
/// `list` returns insertion order. `remove` of an unknown id is a no-op.
pub trait IngredientRepository: Send {
    fn get(&self, id: &IngredientId) -> RepositoryResult<Option<Ingredient>>;
    fn list(&self) -> RepositoryResult<Vec<Ingredient>>;
    /// Exact, case-sensitive name match
    fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Ingredient>>;
    /// Fails with `Duplicate` when the id is already present
    fn add(&mut self, ingredient: Ingredient) -> RepositoryResult<()>;
    /// Fails with `Missing` when the id is absent
    fn update(&mut self, ingredient: Ingredient) -> RepositoryResult<()>;
    fn remove(&mut self, id: &IngredientId) -> RepositoryResult<()>;
}
