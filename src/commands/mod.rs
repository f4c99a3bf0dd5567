//! Command handlers
//!
//! Each handler drives one use case and renders its result as text or NDJSON.

pub mod cook;
pub mod ingredient;
pub mod inventory;
pub mod plan;
pub mod recipe;
pub mod show_config;

use anyhow::Result;

use cookmate::config::Config;
use cookmate::presentation::output::IngredientNames;
use cookmate::presentation::Services;

/// What every handler needs
pub struct Context {
    pub services: Services,
    pub config: Config,
    pub json: bool,
}

impl Context {
    pub fn new(config: Config, json: bool) -> Self {
        Self {
            services: Services::from_config(&config, json),
            config,
            json,
        }
    }

    /// Names of every registered ingredient
    pub fn ingredient_names(&self) -> Result<IngredientNames> {
        let ingredients = self.services.ingredients.list()?;
        Ok(IngredientNames::from_ingredients(&ingredients))
    }
}
