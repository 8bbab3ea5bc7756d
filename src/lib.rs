//! rClics library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use crate::core::conflict::has_conflict;
pub use crate::core::validate::validate_entry;
pub use models::codes::describe;
pub use models::week_key::week_key;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Week { .. } => cli::commands::week::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Codes => cli::commands::codes::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn effective_config(cli: &Cli, mut cfg: Config) -> Config {
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(owner) = &cli.owner {
        cfg.owner = owner.clone();
    }
    if let Some(format) = cli.key_format {
        cfg.week_key_format = format;
    }
    if let Some(scope) = cli.scope {
        cfg.conflict_scope = scope;
    }
    cfg
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let cfg = Config::load()?;

    // 3️⃣ command-line overrides (--db, --owner, --key-format, --scope)
    let cfg = effective_config(&cli, cfg);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
