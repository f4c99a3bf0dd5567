//! Cookmate CLI - kitchen manager
//!
//! Usage: cookmate <COMMAND>
//!
//! Commands:
//!   ingredient  Register and manage ingredients
//!   recipe      Create and manage recipes
//!   inventory   Track what is in stock
//!   cook        Cook a recipe, consuming its ingredients
//!   plan        Plan what to cook and what to buy
//!   config      Show the effective configuration

mod commands;

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use tracing::debug;

use cookmate::error::{CookmateError, ErrorKind};
use cookmate::presentation::factory::resolve_config;
use cookmate::presentation::output::emit;
use cookmate::presentation::{Cli, Commands};

use commands::Context;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        report_error(&err, json);
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_dir = std::env::current_dir()?;
    let (config, warnings) = resolve_config(&cli, &project_dir)?;

    config.logging_config().with_verbosity(cli.verbose).init()?;
    for warning in &warnings {
        if cli.json {
            emit(json!({
                "event": "warning",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }))?;
        } else {
            eprintln!("warning: {}", warning);
        }
    }
    debug!(
        backend = ?config.storage.backend,
        store = %config.storage.path().display(),
        "configuration resolved"
    );

    let ctx = Context::new(config, cli.json);
    match cli.command {
        Commands::Ingredient(command) => commands::ingredient::run(&ctx, command),
        Commands::Recipe(command) => commands::recipe::run(&ctx, command),
        Commands::Inventory(command) => commands::inventory::run(&ctx, command),
        Commands::Cook { recipe, servings } => commands::cook::run(&ctx, &recipe, servings),
        Commands::Plan(command) => commands::plan::run(&ctx, command),
        Commands::Config => commands::show_config::run(&ctx),
    }
}

fn report_error(err: &anyhow::Error, json: bool) {
    if json {
        let kind = err
            .downcast_ref::<CookmateError>()
            .map(|e| e.kind().as_str());
        let _ = emit(json!({
            "event": "error",
            "kind": kind,
            "message": format!("{:#}", err),
            "exit_code": exit_code(err),
        }));
    } else {
        eprintln!("error: {:#}", err);
    }
}

/// 0 success, 1 insufficient inventory, 2 validation, 3 not found,
/// 4 conflict, 5 anything else
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<CookmateError>().map(CookmateError::kind) {
        Some(ErrorKind::InsufficientInventory) => 1,
        Some(ErrorKind::Validation | ErrorKind::IncompatibleUnit | ErrorKind::NegativeResult) => 2,
        Some(ErrorKind::NotFound) => 3,
        Some(ErrorKind::Conflict) => 4,
        Some(ErrorKind::Storage) | None => 5,
    }
}
