//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --backend, --data-dir, --data-file) are
//!   inherited by all subcommands and override config files and environment
//! - Ingredients are always addressed by name on the command line

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::application::IngredientInput;
use crate::config::Backend;
use crate::domain::value_objects::Unit;

/// Cookmate - kitchen manager for ingredients, recipes and inventory
#[derive(Parser, Debug)]
#[command(name = "cookmate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Storage backend (memory keeps nothing between runs)
    #[arg(long, global = true, value_name = "BACKEND")]
    pub backend: Option<Backend>,

    /// Directory holding the kitchen document
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// File name of the kitchen document inside the data directory
    #[arg(long, global = true, value_name = "FILE")]
    pub data_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register and manage ingredients
    #[command(subcommand)]
    Ingredient(IngredientCommand),

    /// Create and manage recipes
    #[command(subcommand)]
    Recipe(RecipeCommand),

    /// Track what is in stock
    #[command(subcommand)]
    Inventory(InventoryCommand),

    /// Cook a recipe, consuming its ingredients from inventory
    Cook {
        /// Recipe name
        recipe: String,

        /// Number of servings
        #[arg(short, long, default_value_t = 1)]
        servings: u32,
    },

    /// Plan what to cook and what to buy
    #[command(subcommand)]
    Plan(PlanCommand),

    /// Show the effective configuration
    Config,
}

#[derive(Subcommand, Debug)]
pub enum IngredientCommand {
    /// Register a new ingredient
    Add {
        name: String,

        /// Default unit (g, kg, ml, l, pcs)
        #[arg(short, long)]
        unit: Unit,

        #[command(flatten)]
        metadata: MetadataArgs,
    },

    /// List registered ingredients
    List,

    /// Show one ingredient
    Show { name: String },

    /// Remove an ingredient no recipe or stock refers to
    Remove { name: String },

    /// Set one metadata field
    Tag {
        name: String,
        key: String,
        value: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecipeCommand {
    /// Create a recipe
    Add {
        name: String,

        /// Requirement per serving: name,amount[,unit] (repeatable)
        #[arg(short, long = "ingredient", value_name = "NAME,AMOUNT[,UNIT]", required = true)]
        ingredients: Vec<IngredientInput>,

        /// Preparation step (repeatable, kept in order)
        #[arg(long = "step", value_name = "TEXT")]
        steps: Vec<String>,

        #[command(flatten)]
        metadata: MetadataArgs,
    },

    /// List recipes
    List,

    /// Show one recipe with its requirements and steps
    Show { name: String },

    /// Remove a recipe
    Remove { name: String },

    /// Set one metadata field
    Tag {
        name: String,
        key: String,
        value: String,
    },

    /// Replace the ingredient requirements
    Ingredients {
        name: String,

        #[arg(short, long = "ingredient", value_name = "NAME,AMOUNT[,UNIT]", required = true)]
        ingredients: Vec<IngredientInput>,
    },

    /// Replace the preparation steps
    Steps {
        name: String,

        #[arg(long = "step", value_name = "TEXT")]
        steps: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum InventoryCommand {
    /// Overwrite the stock of an ingredient
    Set {
        ingredient: String,

        amount: String,

        /// Unit of the amount (defaults to the ingredient's unit)
        #[arg(short, long)]
        unit: Option<Unit>,

        /// Expiration date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        expires: Option<NaiveDate>,
    },

    /// Add to the stock of an ingredient
    Add {
        ingredient: String,

        amount: String,

        #[arg(short, long)]
        unit: Option<Unit>,
    },

    /// List stock
    List,

    /// Stop tracking an ingredient
    Remove { ingredient: String },

    /// Items at or near zero
    Low,

    /// Items expiring within a window
    Expiring {
        /// Window in days (defaults to inventory.expiring_days)
        #[arg(long)]
        days: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PlanCommand {
    /// Recipes the current stock can cover
    Cookable {
        #[arg(short, long, default_value_t = 1)]
        servings: u32,
    },

    /// Everything missing for the chosen recipes (all recipes by default)
    Shopping {
        /// Recipe and servings: NAME[=SERVINGS] (repeatable)
        #[arg(short, long = "recipe", value_name = "NAME[=SERVINGS]", value_parser = parse_recipe_servings)]
        recipes: Vec<(String, u32)>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct MetadataArgs {
    /// Metadata field KEY=VALUE (repeatable)
    #[arg(short, long = "meta", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub meta: Vec<(String, String)>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("metadata key is empty in '{}'", s));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

fn parse_recipe_servings(s: &str) -> Result<(String, u32), String> {
    match s.rsplit_once('=') {
        None => Ok((s.trim().to_string(), 1)),
        Some((name, servings)) => {
            let servings = servings
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("servings must be a whole number, got '{}'", servings))?;
            Ok((name.trim().to_string(), servings))
        }
    }
}
