//! Unit value object - measurement units with a fixed conversion table
//!
//! - Mass: `g` <-> `kg`
//! - Volume: `ml` <-> `l`
//! - Count: `pcs` (no conversion target)

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CookmateError;

/// Measurement unit of a [`Quantity`](super::Quantity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "l")]
    Liter,
    #[serde(rename = "pcs")]
    Piece,
}

impl Unit {
    /// Every supported unit, in display order
    pub const ALL: [Unit; 5] = [
        Unit::Gram,
        Unit::Kilogram,
        Unit::Milliliter,
        Unit::Liter,
        Unit::Piece,
    ];

    /// Short symbol used for parsing, storage and display
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::Piece => "pcs",
        }
    }

    /// Direct conversion factor from `self` to `target`.
    ///
    /// Returns `None` when no single-hop conversion exists. Identity is not
    /// part of the table; callers short-circuit `self == target`.
    pub fn conversion_factor_to(&self, target: Unit) -> Option<Decimal> {
        let thousandth = Decimal::new(1, 3);
        let thousand = Decimal::new(1000, 0);
        match (self, target) {
            (Unit::Gram, Unit::Kilogram) => Some(thousandth),
            (Unit::Kilogram, Unit::Gram) => Some(thousand),
            (Unit::Milliliter, Unit::Liter) => Some(thousandth),
            (Unit::Liter, Unit::Milliliter) => Some(thousand),
            _ => None,
        }
    }

    /// Returns true if a quantity in `self` can be expressed in `other`
    pub fn is_compatible_with(&self, other: Unit) -> bool {
        *self == other || self.conversion_factor_to(other).is_some()
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Unit {
    type Err = CookmateError;

    /// Exact, case-sensitive match on the unit symbol
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.symbol() == s)
            .ok_or_else(|| CookmateError::UnknownUnit {
                input: s.to_string(),
            })
    }
}
