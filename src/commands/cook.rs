//! Cook command handler

use anyhow::Result;
use serde_json::json;

use cookmate::domain::value_objects::QuantityMap;
use cookmate::presentation::output::{emit, named_quantities_json, render_cook, render_missing};

use super::Context;

pub fn run(ctx: &Context, recipe: &str, servings: u32) -> Result<()> {
    let outcome = match ctx.services.cook.cook_by_name(recipe, servings) {
        Ok(outcome) => outcome,
        Err(err) => {
            if let Some(missing) = err.missing() {
                report_missing(ctx, recipe, missing)?;
            }
            return Err(err.into());
        }
    };

    let names = ctx.ingredient_names()?;
    if ctx.json {
        let low: Vec<String> = outcome
            .low_stock
            .iter()
            .map(|e| names.name(&e.ingredient_id))
            .collect();
        emit(json!({
            "event": "data",
            "command": "cook",
            "recipe": outcome.recipe_name,
            "servings": outcome.cooked.servings,
            "consumed": named_quantities_json(&outcome.cooked.consumed, &names),
            "low_stock": low,
        }))?;
    } else {
        print!("{}", render_cook(&outcome, &names));
    }
    Ok(())
}

fn report_missing(ctx: &Context, recipe: &str, missing: &QuantityMap) -> Result<()> {
    let names = ctx.ingredient_names()?;
    if ctx.json {
        emit(json!({
            "event": "missing",
            "recipe": recipe,
            "missing": named_quantities_json(missing, &names),
        }))?;
    } else {
        eprintln!("Cannot cook {}: missing ingredients", recipe);
        eprint!("{}", render_missing(missing, &names));
    }
    Ok(())
}
