//! Persistent single-file store

mod document;
mod store;

pub use document::{
    IngredientRow, InventoryRow, KitchenDocument, RecipeIngredientRow, RecipeRow,
    DOCUMENT_VERSION,
};
pub use store::{TomlStore, TomlUnitOfWork};
