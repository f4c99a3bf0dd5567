//! Domain Services
//!
//! Pure business logic that operates on domain entities and value objects.
//! These services have no I/O dependencies and are easily testable.

mod consumption;

pub use consumption::{aggregate_demand, shortfalls, stock_snapshot};
