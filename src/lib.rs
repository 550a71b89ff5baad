//! WaterBuddy library root.
//! Exposes the CLI parser, the high-level run() function, the progress
//! engine and the daily log store.

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use context::AppContext;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, ctx),
        Commands::Age { .. } => cli::commands::age::handle(&cli.command, ctx),
        Commands::Goal { .. } => cli::commands::goal::handle(&cli.command, ctx),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, ctx),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, ctx),
        Commands::Tip => cli::commands::tip::handle(&cli.command),
        Commands::Theme { .. } => cli::commands::theme::handle(&cli.command, ctx),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    logging::init();

    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, resolve log file and day
    let ctx = AppContext::from_cli(&cli)?;

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &ctx)
}
