//! Ingredient command handlers

use anyhow::Result;
use serde_json::json;

use cookmate::domain::entities::Metadata;
use cookmate::presentation::cli::IngredientCommand;
use cookmate::presentation::output::{emit, ingredient_json, render_ingredients};

use super::Context;

pub fn run(ctx: &Context, command: IngredientCommand) -> Result<()> {
    let use_case = &ctx.services.ingredients;
    match command {
        IngredientCommand::Add {
            name,
            unit,
            metadata,
        } => {
            let metadata: Metadata = metadata.meta.into_iter().collect();
            let ingredient = use_case.register(&name, unit, metadata)?;
            if ctx.json {
                emit(json!({
                    "event": "data",
                    "command": "ingredient.add",
                    "ingredient": ingredient_json(&ingredient),
                }))?;
            } else {
                println!(
                    "Registered {} ({})",
                    ingredient.name(),
                    ingredient.default_unit()
                );
            }
        }
        IngredientCommand::List => {
            let ingredients = use_case.list()?;
            if ctx.json {
                let items: Vec<_> = ingredients.iter().map(ingredient_json).collect();
                emit(json!({
                    "event": "data",
                    "command": "ingredient.list",
                    "ingredients": items,
                }))?;
            } else {
                print!("{}", render_ingredients(&ingredients));
            }
        }
        IngredientCommand::Show { name } => {
            let ingredient = use_case.get_by_name(&name)?;
            if ctx.json {
                emit(json!({
                    "event": "data",
                    "command": "ingredient.show",
                    "ingredient": ingredient_json(&ingredient),
                }))?;
            } else {
                print!("{}", render_ingredients(std::slice::from_ref(&ingredient)));
            }
        }
        IngredientCommand::Remove { name } => {
            use_case.remove(&name)?;
            if ctx.json {
                emit(json!({
                    "event": "data",
                    "command": "ingredient.remove",
                    "name": name,
                }))?;
            } else {
                println!("Removed {}", name);
            }
        }
        IngredientCommand::Tag { name, key, value } => {
            let ingredient = use_case.enrich_metadata(&name, &key, &value)?;
            if ctx.json {
                emit(json!({
                    "event": "data",
                    "command": "ingredient.tag",
                    "ingredient": ingredient_json(&ingredient),
                }))?;
            } else {
                println!("Tagged {} with {}={}", ingredient.name(), key, value);
            }
        }
    }
    Ok(())
}
