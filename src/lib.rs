//! studylog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Subject { .. } => cli::commands::subject::handle(&cli.command, cfg),
        Commands::Session { .. } => cli::commands::session::handle(&cli.command, cfg),
        Commands::Task { .. } => cli::commands::task::handle(&cli.command, cfg),
        Commands::Habit { .. } => cli::commands::habit::handle(&cli.command, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Progress { .. } => cli::commands::progress::handle(&cli.command, cfg),
        Commands::Chart { .. } => cli::commands::chart::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; --db overrides the configured database
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
