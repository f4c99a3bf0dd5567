//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Text renderers and NDJSON emission
//!
//! ## Usage
//!
//! ```ignore
//! use cookmate::presentation::factory::Services;
//!
//! let services = Services::from_config(&config);
//! let outcome = services.cook.cook_by_name("omelette", 2)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::Services;
