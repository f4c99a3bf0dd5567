//! Quantity value object - an amount paired with a [`Unit`]
//!
//! Amounts are `rust_decimal::Decimal`, never `f64`, and every constructed or
//! computed amount is rounded to [`Quantity::PRECISION`] significant digits so
//! kitchen-scale arithmetic does not drift.
//!
//! Arithmetic between two quantities converts the right operand into the left
//! operand's unit first. Units without a direct conversion factor fail with
//! [`CookmateError::IncompatibleUnits`].

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::{IngredientId, Unit};
use crate::error::{CookmateError, CookmateResult};

/// Ingredient id -> quantity. Used for recipe requirements, cook consumption
/// and deficit (missing) maps.
pub type QuantityMap = BTreeMap<IngredientId, Quantity>;

/// Immutable amount + unit pair
#[derive(Debug, Clone, Copy)]
pub struct Quantity {
    amount: Decimal,
    unit: Unit,
}

impl Quantity {
    /// Significant digits kept by every amount
    pub const PRECISION: u32 = 9;

    pub fn new(amount: Decimal, unit: Unit) -> Self {
        Self {
            amount: round_to_precision(amount),
            unit,
        }
    }

    pub fn zero(unit: Unit) -> Self {
        Self {
            amount: Decimal::ZERO,
            unit,
        }
    }

    /// Build from an amount given as text
    pub fn of(amount: &str, unit: Unit) -> CookmateResult<Self> {
        Ok(Self::new(parse_amount(amount)?, unit))
    }

    /// Build from amount and unit text, validating both
    pub fn parse(amount: &str, unit: &str) -> CookmateResult<Self> {
        if unit.trim().is_empty() {
            return Err(CookmateError::invalid("unit must not be empty"));
        }
        let unit = Unit::from_str(unit)?;
        Self::of(amount, unit)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Express this quantity in `target`.
    ///
    /// Same unit returns `self` unchanged. Only the four direct pairs
    /// (g<->kg, ml<->l) convert; there is no multi-hop conversion.
    pub fn to(&self, target: Unit) -> CookmateResult<Quantity> {
        if self.unit == target {
            return Ok(*self);
        }
        let factor =
            self.unit
                .conversion_factor_to(target)
                .ok_or(CookmateError::IncompatibleUnits {
                    from: self.unit,
                    to: target,
                })?;
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or(CookmateError::ArithmeticOverflow {
                operation: "unit conversion",
            })?;
        Ok(Quantity::new(amount, target))
    }

    pub fn checked_add(&self, other: &Quantity) -> CookmateResult<Quantity> {
        let rhs = self.aligned(other)?;
        let amount = self
            .amount
            .checked_add(rhs)
            .ok_or(CookmateError::ArithmeticOverflow {
                operation: "addition",
            })?;
        Ok(Quantity::new(amount, self.unit))
    }

    /// Subtract `other`; a negative result is an error, never a value
    pub fn checked_sub(&self, other: &Quantity) -> CookmateResult<Quantity> {
        let rhs = self.aligned(other)?;
        let amount = self
            .amount
            .checked_sub(rhs)
            .ok_or(CookmateError::ArithmeticOverflow {
                operation: "subtraction",
            })?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CookmateError::NegativeQuantity {
                minuend: *self,
                subtrahend: *other,
            });
        }
        Ok(Quantity::new(amount, self.unit))
    }

    /// Scale the amount by a plain factor; the unit is kept
    pub fn multiply(&self, factor: Decimal) -> CookmateResult<Quantity> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or(CookmateError::ArithmeticOverflow {
                operation: "multiplication",
            })?;
        Ok(Quantity::new(amount, self.unit))
    }

    /// Requirement for `servings` portions
    pub fn times(&self, servings: u32) -> CookmateResult<Quantity> {
        self.multiply(Decimal::from(servings))
    }

    pub fn divide(&self, divisor: Decimal) -> CookmateResult<Quantity> {
        if divisor.is_zero() {
            return Err(CookmateError::DivisionByZero);
        }
        let amount = self
            .amount
            .checked_div(divisor)
            .ok_or(CookmateError::ArithmeticOverflow {
                operation: "division",
            })?;
        Ok(Quantity::new(amount, self.unit))
    }

    /// Compare magnitudes after converting `other` into this unit
    pub fn try_cmp(&self, other: &Quantity) -> CookmateResult<Ordering> {
        let rhs = self.aligned(other)?;
        Ok(self.amount.cmp(&rhs))
    }

    /// `other`'s amount expressed in `self.unit`
    fn aligned(&self, other: &Quantity) -> CookmateResult<Decimal> {
        if self.unit == other.unit {
            return Ok(other.amount);
        }
        other
            .to(self.unit)
            .map(|q| q.amount)
            .map_err(|_| CookmateError::IncompatibleUnits {
                from: other.unit,
                to: self.unit,
            })
    }
}

impl PartialEq for Quantity {
    /// Quantities in incompatible units are never equal
    fn eq(&self, other: &Self) -> bool {
        matches!(self.try_cmp(other), Ok(Ordering::Equal))
    }
}

impl PartialOrd for Quantity {
    /// `None` for incompatible units
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

impl FromStr for Quantity {
    type Err = CookmateError;

    /// Parses `"500 g"` or `"500g"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| CookmateError::invalid(format!("quantity '{}' has no unit", s)))?;
        let (amount, unit) = s.split_at(split);
        Quantity::parse(amount.trim(), unit.trim())
    }
}

/// Parse a decimal amount, accepting plain and scientific notation
pub fn parse_amount(input: &str) -> CookmateResult<Decimal> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| CookmateError::InvalidAmount {
            input: input.to_string(),
        })
}

fn round_to_precision(amount: Decimal) -> Decimal {
    if amount.is_zero() {
        return Decimal::ZERO;
    }
    amount
        .round_sf_with_strategy(Quantity::PRECISION, RoundingStrategy::MidpointNearestEven)
        .unwrap_or(amount)
        .normalize()
}
