//! InventoryItem entity - current stock of one ingredient
//!
//! Identity is the tracked [`IngredientId`]; there is at most one item per
//! ingredient.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::domain::value_objects::{IngredientId, Quantity};
use crate::error::{CookmateError, CookmateResult};

/// Amounts strictly below this count as low stock.
///
/// Placeholder threshold: a near-zero epsilon rather than a par level.
pub const LOW_STOCK_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 3);

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    ingredient_id: IngredientId,
    quantity: Quantity,
    expires_on: Option<NaiveDate>,
}

impl InventoryItem {
    /// Fails when `quantity` is negative
    pub fn new(ingredient_id: IngredientId, quantity: Quantity) -> CookmateResult<Self> {
        if quantity.is_negative() {
            return Err(CookmateError::invalid(format!(
                "inventory quantity must not be negative, got {}",
                quantity
            )));
        }
        Ok(Self {
            ingredient_id,
            quantity,
            expires_on: None,
        })
    }

    /// Builder: set or clear the expiration date
    pub fn with_expiration(mut self, expires_on: Option<NaiveDate>) -> Self {
        self.expires_on = expires_on;
        self
    }

    /// New item with `delta` added, converted into this item's unit
    pub fn add(&self, delta: &Quantity) -> CookmateResult<Self> {
        let delta = delta.to(self.quantity.unit())?;
        Ok(Self {
            quantity: self.quantity.checked_add(&delta)?,
            ..self.clone()
        })
    }

    /// New item with `delta` removed.
    ///
    /// Consuming more than is in stock fails with
    /// [`CookmateError::NegativeQuantity`].
    pub fn consume(&self, delta: &Quantity) -> CookmateResult<Self> {
        let delta = delta.to(self.quantity.unit())?;
        Ok(Self {
            quantity: self.quantity.checked_sub(&delta)?,
            ..self.clone()
        })
    }

    /// Expiration date strictly before `on`
    pub fn is_expired(&self, on: NaiveDate) -> bool {
        self.expires_on.is_some_and(|date| date < on)
    }

    /// Expiration date within `[today, today + days]`
    pub fn will_expire_within(&self, days: u32, today: NaiveDate) -> bool {
        let Some(date) = self.expires_on else {
            return false;
        };
        let horizon = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        today <= date && date <= horizon
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity.amount() < LOW_STOCK_EPSILON
    }

    pub fn ingredient_id(&self) -> IngredientId {
        self.ingredient_id
    }

    pub fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    pub fn expires_on(&self) -> Option<NaiveDate> {
        self.expires_on
    }
}
