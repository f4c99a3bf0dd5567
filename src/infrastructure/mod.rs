//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `memory/` - Mutex-guarded in-memory store
//! - `toml_store/` - Single-file TOML store with advisory locking
//! - `events/` - Event sinks (JSON, tracing, in-process bus)

pub mod events;
pub mod memory;
pub mod toml_store;

// Re-export for convenience
pub use events::{InProcessEventBus, JsonEventSink, TracingEventSink};
pub use memory::{KitchenState, MemoryStore};
pub use toml_store::TomlStore;
