//! Planner Use Case
//!
//! Read-only queries over recipes and stock: which recipes can be cooked right
//! now, and what has to be bought for a set of desired recipes.

mod use_case;

pub use use_case::PlannerUseCase;
