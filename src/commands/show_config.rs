//! Config command handler

use anyhow::Result;
use serde_json::json;

use cookmate::presentation::output::emit;

use super::Context;

pub fn run(ctx: &Context) -> Result<()> {
    if ctx.json {
        emit(json!({
            "event": "data",
            "command": "config",
            "config": serde_json::to_value(&ctx.config)?,
            "store": ctx.config.storage.path().display().to_string(),
        }))?;
    } else {
        print!("{}", toml::to_string_pretty(&ctx.config)?);
        println!();
        println!(
            "# store: {} ({})",
            ctx.config.storage.path().display(),
            ctx.services.store.backend()
        );
    }
    Ok(())
}
