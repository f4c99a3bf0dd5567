//! Recipe command handlers

use anyhow::Result;
use serde_json::json;

use cookmate::domain::entities::{Metadata, Recipe};
use cookmate::presentation::cli::RecipeCommand;
use cookmate::presentation::output::{emit, recipe_json, render_recipe, render_recipes};

use super::Context;

pub fn run(ctx: &Context, command: RecipeCommand) -> Result<()> {
    let use_case = &ctx.services.recipes;
    match command {
        RecipeCommand::Add {
            name,
            ingredients,
            steps,
            metadata,
        } => {
            let metadata: Metadata = metadata.meta.into_iter().collect();
            let id = use_case.create_recipe(&name, &ingredients, steps, metadata)?;
            let recipe = use_case.get(id)?;
            report(ctx, "recipe.add", &recipe, &format!("Created {}", recipe.name()))?;
        }
        RecipeCommand::List => {
            let recipes = use_case.list_recipes()?;
            if ctx.json {
                let names = ctx.ingredient_names()?;
                let items: Vec<_> = recipes.iter().map(|r| recipe_json(r, &names)).collect();
                emit(json!({
                    "event": "data",
                    "command": "recipe.list",
                    "recipes": items,
                }))?;
            } else {
                print!("{}", render_recipes(&recipes));
            }
        }
        RecipeCommand::Show { name } => {
            let recipe = use_case.get_by_name(&name)?;
            if ctx.json {
                report(ctx, "recipe.show", &recipe, "")?;
            } else {
                print!("{}", render_recipe(&recipe, &ctx.ingredient_names()?));
            }
        }
        RecipeCommand::Remove { name } => {
            use_case.remove_recipe(&name)?;
            if ctx.json {
                emit(json!({
                    "event": "data",
                    "command": "recipe.remove",
                    "name": name,
                }))?;
            } else {
                println!("Removed {}", name);
            }
        }
        RecipeCommand::Tag { name, key, value } => {
            let recipe = use_case.update_metadata_field(&name, &key, &value)?;
            let message = format!("Tagged {} with {}={}", recipe.name(), key, value);
            report(ctx, "recipe.tag", &recipe, &message)?;
        }
        RecipeCommand::Ingredients { name, ingredients } => {
            let recipe = use_case.update_ingredients(&name, &ingredients)?;
            let message = format!("Updated ingredients of {}", recipe.name());
            report(ctx, "recipe.ingredients", &recipe, &message)?;
        }
        RecipeCommand::Steps { name, steps } => {
            let recipe = use_case.update_steps(&name, steps)?;
            let message = format!("Updated steps of {}", recipe.name());
            report(ctx, "recipe.steps", &recipe, &message)?;
        }
    }
    Ok(())
}

fn report(ctx: &Context, command: &str, recipe: &Recipe, message: &str) -> Result<()> {
    if ctx.json {
        let names = ctx.ingredient_names()?;
        emit(json!({
            "event": "data",
            "command": command,
            "recipe": recipe_json(recipe, &names),
        }))?;
    } else {
        println!("{}", message);
    }
    Ok(())
}
