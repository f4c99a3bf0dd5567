//! Inventory Use Case
//!
//! Stock maintenance keyed by ingredient name, plus the low-stock and
//! expiring-soon queries.

mod result;
mod use_case;

pub use result::StockEntry;
pub use use_case::InventoryUseCase;
