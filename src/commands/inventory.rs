//! Inventory command handlers

use anyhow::Result;
use chrono::Local;
use serde_json::json;

use cookmate::application::StockEntry;
use cookmate::domain::value_objects::Unit;
use cookmate::presentation::cli::InventoryCommand;
use cookmate::presentation::output::{emit, render_stock, stock_json};

use super::Context;

fn unit_text(unit: Option<Unit>) -> &'static str {
    unit.map(|u| u.symbol()).unwrap_or("")
}

pub fn run(ctx: &Context, command: InventoryCommand) -> Result<()> {
    let use_case = &ctx.services.inventory;
    match command {
        InventoryCommand::Set {
            ingredient,
            amount,
            unit,
            expires,
        } => {
            let entry = use_case.set_stock(&ingredient, &amount, unit_text(unit), expires)?;
            report_one(ctx, "inventory.set", &entry)?;
        }
        InventoryCommand::Add {
            ingredient,
            amount,
            unit,
        } => {
            let entry = use_case.restock(&ingredient, &amount, unit_text(unit))?;
            report_one(ctx, "inventory.add", &entry)?;
        }
        InventoryCommand::List => {
            report_many(ctx, "inventory.list", &use_case.list()?)?;
        }
        InventoryCommand::Remove { ingredient } => {
            use_case.remove(&ingredient)?;
            if ctx.json {
                emit(json!({
                    "event": "data",
                    "command": "inventory.remove",
                    "ingredient": ingredient,
                }))?;
            } else {
                println!("Stopped tracking {}", ingredient);
            }
        }
        InventoryCommand::Low => {
            report_many(ctx, "inventory.low", &use_case.low_stock()?)?;
        }
        InventoryCommand::Expiring { days } => {
            let days = days.unwrap_or(ctx.config.inventory.expiring_days);
            let today = Local::now().date_naive();
            report_many(ctx, "inventory.expiring", &use_case.expiring_soon(days, today)?)?;
        }
    }
    Ok(())
}

fn report_one(ctx: &Context, command: &str, entry: &StockEntry) -> Result<()> {
    if ctx.json {
        emit(json!({
            "event": "data",
            "command": command,
            "item": stock_json(entry),
        }))?;
    } else {
        print!("{}", render_stock(std::slice::from_ref(entry)));
    }
    Ok(())
}

fn report_many(ctx: &Context, command: &str, entries: &[StockEntry]) -> Result<()> {
    if ctx.json {
        let items: Vec<_> = entries.iter().map(stock_json).collect();
        emit(json!({
            "event": "data",
            "command": command,
            "items": items,
        }))?;
    } else {
        print!("{}", render_stock(entries));
    }
    Ok(())
}
