//! Transactional boundary ports
//!
//! A [`KitchenStore`] hands out one [`UnitOfWork`] per logical operation.
//! The unit of work owns the three repositories for its lifetime; nothing it
//! writes is visible to other units of work until `commit` succeeds, and a
//! unit of work dropped without `commit` is rolled back.

use super::{IngredientRepository, InventoryRepository, RecipeRepository};
use crate::error::CookmateResult;

pub trait UnitOfWork {
    fn ingredients(&mut self) -> &mut dyn IngredientRepository;
    fn recipes(&mut self) -> &mut dyn RecipeRepository;
    fn inventory(&mut self) -> &mut dyn InventoryRepository;

    /// Make every staged write durable and visible
    fn commit(&mut self) -> CookmateResult<()>;

    /// Discard every staged write
    fn rollback(&mut self) -> CookmateResult<()>;
}

/// Backing store able to begin units of work
///
/// Implementations serialize units of work that may write the same data, so
/// two concurrent cooks can never both consume the same stock.
pub trait KitchenStore: Send + Sync {
    fn begin(&self) -> CookmateResult<Box<dyn UnitOfWork + '_>>;

    /// Short backend name for logs
    fn backend(&self) -> &'static str;
}
