//! Planning command handlers

use std::collections::BTreeMap;

use anyhow::Result;
use serde_json::json;

use cookmate::domain::value_objects::RecipeId;
use cookmate::presentation::cli::PlanCommand;
use cookmate::presentation::output::{emit, named_quantities_json, render_missing, render_recipes};

use super::Context;

pub fn run(ctx: &Context, command: PlanCommand) -> Result<()> {
    match command {
        PlanCommand::Cookable { servings } => {
            let recipes = ctx.services.planner.list_cookable_recipes(servings)?;
            if ctx.json {
                let names: Vec<&str> = recipes.iter().map(|r| r.name()).collect();
                emit(json!({
                    "event": "data",
                    "command": "plan.cookable",
                    "servings": servings,
                    "recipes": names,
                }))?;
            } else if recipes.is_empty() {
                println!("Nothing can be cooked for {} serving(s).", servings);
            } else {
                print!("{}", render_recipes(&recipes));
            }
        }
        PlanCommand::Shopping { recipes } => {
            let desired = resolve_desired(ctx, &recipes)?;
            let list = ctx.services.planner.generate_shopping_list(desired.as_ref())?;
            let names = ctx.ingredient_names()?;
            if ctx.json {
                emit(json!({
                    "event": "data",
                    "command": "plan.shopping",
                    "missing": named_quantities_json(&list, &names),
                }))?;
            } else if list.is_empty() {
                println!("Nothing to buy.");
            } else {
                println!("Shopping list:");
                print!("{}", render_missing(&list, &names));
            }
        }
    }
    Ok(())
}

/// No `--recipe` flags means every recipe at one serving
fn resolve_desired(
    ctx: &Context,
    recipes: &[(String, u32)],
) -> Result<Option<BTreeMap<RecipeId, u32>>> {
    if recipes.is_empty() {
        return Ok(None);
    }
    let mut desired = BTreeMap::new();
    for (name, servings) in recipes {
        let recipe = ctx.services.recipes.get_by_name(name)?;
        *desired.entry(recipe.id()).or_insert(0) += *servings;
    }
    Ok(Some(desired))
}
