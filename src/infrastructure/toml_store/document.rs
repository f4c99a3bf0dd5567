//! On-disk document layout
//!
//! ```toml
//! version = 1
//!
//! [[ingredients]]
//! id = "..."
//! name = "egg"
//! default_unit = "pcs"
//!
//! [[recipes]]
//! id = "..."
//! name = "tomato-egg"
//! steps = ["beat eggs", "fry"]
//!
//! [[recipes.ingredients]]
//! ingredient_id = "..."
//! amount = "2"
//! unit = "pcs"
//!
//! [[inventory]]
//! ingredient_id = "..."
//! amount = "4"
//! unit = "pcs"
//! expires_on = "2024-05-12"
//! ```
//!
//! Amounts are decimal strings so they round-trip without precision loss.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Ingredient, InventoryItem, Metadata, Recipe};
use crate::domain::value_objects::{IngredientId, Quantity, QuantityMap, RecipeId, Unit};
use crate::error::CookmateResult;
use crate::infrastructure::memory::{
    KitchenState, MemoryIngredientRepository, MemoryInventoryRepository, MemoryRecipeRepository,
};

pub const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub ingredients: Vec<IngredientRow>,
    #[serde(default)]
    pub recipes: Vec<RecipeRow>,
    #[serde(default)]
    pub inventory: Vec<InventoryRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRow {
    pub id: IngredientId,
    pub name: String,
    pub default_unit: Unit,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRow {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientRow>,
}

/// Join row between a recipe and one required ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientRow {
    pub ingredient_id: IngredientId,
    pub amount: String,
    pub unit: Unit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub ingredient_id: IngredientId,
    pub amount: String,
    pub unit: Unit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<NaiveDate>,
}

fn default_version() -> u32 {
    DOCUMENT_VERSION
}

impl Default for KitchenDocument {
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION,
            ingredients: Vec::new(),
            recipes: Vec::new(),
            inventory: Vec::new(),
        }
    }
}

impl KitchenDocument {
    /// Rebuild entities, re-validating every row
    pub fn into_state(self) -> CookmateResult<KitchenState> {
        let ingredients = self
            .ingredients
            .into_iter()
            .map(|row| {
                Ok(Ingredient::new(row.name, row.default_unit)?
                    .with_id(row.id)
                    .with_metadata_map(row.metadata))
            })
            .collect::<CookmateResult<Vec<_>>>()?;

        let recipes = self
            .recipes
            .into_iter()
            .map(|row| {
                let required = row
                    .ingredients
                    .iter()
                    .map(|join| Ok((join.ingredient_id, Quantity::of(&join.amount, join.unit)?)))
                    .collect::<CookmateResult<QuantityMap>>()?;
                Ok(Recipe::new(row.name, required)?
                    .with_id(row.id)
                    .with_steps(row.steps)
                    .with_metadata_map(row.metadata))
            })
            .collect::<CookmateResult<Vec<_>>>()?;

        let inventory = self
            .inventory
            .into_iter()
            .map(|row| {
                let quantity = Quantity::of(&row.amount, row.unit)?;
                Ok(InventoryItem::new(row.ingredient_id, quantity)?.with_expiration(row.expires_on))
            })
            .collect::<CookmateResult<Vec<_>>>()?;

        Ok(KitchenState {
            ingredients: MemoryIngredientRepository::from_items(ingredients),
            recipes: MemoryRecipeRepository::from_items(recipes),
            inventory: MemoryInventoryRepository::from_items(inventory),
        })
    }

    pub fn from_state(state: &KitchenState) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            ingredients: state
                .ingredients
                .items()
                .iter()
                .map(|i| IngredientRow {
                    id: i.id(),
                    name: i.name().to_string(),
                    default_unit: i.default_unit(),
                    metadata: i.metadata().clone(),
                })
                .collect(),
            recipes: state
                .recipes
                .items()
                .iter()
                .map(|r| RecipeRow {
                    id: r.id(),
                    name: r.name().to_string(),
                    steps: r.steps().to_vec(),
                    metadata: r.metadata().clone(),
                    ingredients: r
                        .ingredients()
                        .iter()
                        .map(|(id, qty)| RecipeIngredientRow {
                            ingredient_id: *id,
                            amount: qty.amount().to_string(),
                            unit: qty.unit(),
                        })
                        .collect(),
                })
                .collect(),
            inventory: state
                .inventory
                .items()
                .iter()
                .map(|item| InventoryRow {
                    ingredient_id: item.ingredient_id(),
                    amount: item.quantity().amount().to_string(),
                    unit: item.quantity().unit(),
                    expires_on: item.expires_on(),
                })
                .collect(),
        }
    }
}
