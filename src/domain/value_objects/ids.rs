//! Aggregate identifiers
//!
//! Distinct newtypes over UUID v4 so a recipe id can never be passed where an
//! ingredient id is expected.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CookmateError;

macro_rules! aggregate_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random id
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = CookmateError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim()).map(Self).map_err(|e| {
                    CookmateError::invalid(format!("malformed {} '{}': {}", $label, s, e))
                })
            }
        }
    };
}

aggregate_id!(
    /// Identity of an [`Ingredient`](crate::domain::entities::Ingredient),
    /// also the identity of the inventory item tracking it
    IngredientId,
    "ingredient id"
);

aggregate_id!(
    /// Identity of a [`Recipe`](crate::domain::entities::Recipe)
    RecipeId,
    "recipe id"
);
