//! Cook Use Case
//!
//! The cook transaction: load a recipe, compute consumption for the requested
//! servings, check every ingredient against stock in one pre-pass, deduct,
//! commit, then publish events.
//!
//! Cooking is all-or-nothing. A shortfall on any ingredient fails the whole
//! operation with the complete deficit map and leaves inventory untouched.

mod use_case;

pub use use_case::{CookOutcome, CookUseCase};
