//! In-memory persistence
//!
//! Vec-backed repositories and the mutex-guarded [`MemoryStore`].

mod ingredients;
mod inventory;
mod recipes;
mod state;
mod store;

pub use ingredients::MemoryIngredientRepository;
pub use inventory::MemoryInventoryRepository;
pub use recipes::MemoryRecipeRepository;
pub use state::KitchenState;
pub use store::{MemoryStore, MemoryUnitOfWork};
