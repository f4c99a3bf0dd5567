//! Ingredient Use Case
//!
//! Registration and maintenance of the ingredient catalogue.

mod use_case;

pub use use_case::IngredientUseCase;
