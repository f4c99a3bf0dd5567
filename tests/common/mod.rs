//! Common test utilities for Cookmate contract, property and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated sandbox for driving the `cookmate` binary
//! - `StoreFixture`: Both store backends behind one contract
//! - Fixtures: Reusable kitchens and a recording event sink

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
