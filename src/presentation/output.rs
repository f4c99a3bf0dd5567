//! Output Rendering
//!
//! Text renderers return strings so commands decide where they go. JSON
//! output is NDJSON: one object per line, each carrying an `event` field.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{self, Write};

use serde_json::{json, Value};

use crate::application::{CookOutcome, StockEntry};
use crate::domain::entities::{Ingredient, Metadata, Recipe};
use crate::domain::events::quantity_json;
use crate::domain::value_objects::{IngredientId, QuantityMap};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Ingredient id -> display name
#[derive(Debug, Clone, Default)]
pub struct IngredientNames(BTreeMap<IngredientId, String>);

impl IngredientNames {
    pub fn from_ingredients(ingredients: &[Ingredient]) -> Self {
        Self(
            ingredients
                .iter()
                .map(|i| (i.id(), i.name().to_string()))
                .collect(),
        )
    }

    /// Unknown ids render as the raw id
    pub fn name(&self, id: &IngredientId) -> String {
        self.0
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }

    /// Quantities keyed and sorted by ingredient name
    pub fn by_name(&self, map: &QuantityMap) -> Vec<(String, String)> {
        let mut rows: Vec<(String, String)> = map
            .iter()
            .map(|(id, qty)| (self.name(id), qty.to_string()))
            .collect();
        rows.sort();
        rows
    }
}

fn metadata_suffix(metadata: &Metadata) -> String {
    if metadata.is_empty() {
        return String::new();
    }
    let fields: Vec<String> = metadata.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!(" [{}]", fields.join(", "))
}

pub fn render_ingredients(ingredients: &[Ingredient]) -> String {
    if ingredients.is_empty() {
        return "No ingredients registered.\n".to_string();
    }
    let mut out = String::new();
    for ingredient in ingredients {
        let _ = writeln!(
            out,
            "{} ({}){}",
            ingredient.name(),
            ingredient.default_unit(),
            metadata_suffix(ingredient.metadata())
        );
    }
    out
}

pub fn render_recipes(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes.\n".to_string();
    }
    let mut out = String::new();
    for recipe in recipes {
        let _ = writeln!(
            out,
            "{} - {} ingredient(s), {} step(s){}",
            recipe.name(),
            recipe.ingredients().len(),
            recipe.steps().len(),
            metadata_suffix(recipe.metadata())
        );
    }
    out
}

pub fn render_recipe(recipe: &Recipe, names: &IngredientNames) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}{}", recipe.name(), metadata_suffix(recipe.metadata()));
    let _ = writeln!(out, "Ingredients (per serving):");
    for (name, qty) in names.by_name(recipe.ingredients()) {
        let _ = writeln!(out, "  - {name}: {qty}");
    }
    if !recipe.steps().is_empty() {
        let _ = writeln!(out, "Steps:");
        for (i, step) in recipe.steps().iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, step);
        }
    }
    out
}

pub fn render_stock(entries: &[StockEntry]) -> String {
    if entries.is_empty() {
        return "Nothing in stock.\n".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let _ = write!(out, "{}: {}", entry.ingredient_name, entry.item.quantity());
        if let Some(date) = entry.item.expires_on() {
            let _ = write!(out, " (expires {date})");
        }
        if entry.item.is_low_stock() {
            out.push_str(" [low]");
        }
        out.push('\n');
    }
    out
}

/// Deficits, one ingredient per line
pub fn render_missing(missing: &QuantityMap, names: &IngredientNames) -> String {
    let mut out = String::new();
    for (name, qty) in names.by_name(missing) {
        let _ = writeln!(out, "  - {name}: {qty}");
    }
    out
}

pub fn render_cook(outcome: &CookOutcome, names: &IngredientNames) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Cooked {} ({} serving(s))",
        outcome.recipe_name, outcome.cooked.servings
    );
    let _ = write!(out, "{}", render_missing(&outcome.cooked.consumed, names));
    for low in &outcome.low_stock {
        let _ = writeln!(
            out,
            "Low stock: {} ({})",
            names.name(&low.ingredient_id),
            low.current
        );
    }
    out
}

pub fn ingredient_json(ingredient: &Ingredient) -> Value {
    json!({
        "id": ingredient.id().to_string(),
        "name": ingredient.name(),
        "default_unit": ingredient.default_unit().symbol(),
        "metadata": ingredient.metadata(),
    })
}

/// Deficit or consumption map keyed by ingredient name
pub fn named_quantities_json(map: &QuantityMap, names: &IngredientNames) -> Value {
    let entries: serde_json::Map<String, Value> = map
        .iter()
        .map(|(id, qty)| (names.name(id), quantity_json(qty)))
        .collect();
    Value::Object(entries)
}

pub fn recipe_json(recipe: &Recipe, names: &IngredientNames) -> Value {
    json!({
        "id": recipe.id().to_string(),
        "name": recipe.name(),
        "ingredients": named_quantities_json(recipe.ingredients(), names),
        "steps": recipe.steps(),
        "metadata": recipe.metadata(),
    })
}

pub fn stock_json(entry: &StockEntry) -> Value {
    json!({
        "ingredient": entry.ingredient_name,
        "ingredient_id": entry.item.ingredient_id().to_string(),
        "quantity": quantity_json(entry.item.quantity()),
        "expires_on": entry.item.expires_on().map(|d| d.to_string()),
        "low_stock": entry.item.is_low_stock(),
    })
}
