//! pmdash library root.
//! Exposes the CLI parser, the high-level run() function and the domain modules
//! (entity store, view engine, time tracker, payroll, export).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};

/// `--today` when given, the local date otherwise.
fn resolve_today(cli: &Cli) -> AppResult<NaiveDate> {
    match &cli.today {
        Some(s) => utils::date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(utils::date::today()),
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let today = resolve_today(cli)?;
    match &cli.command {
        Commands::Init => commands::init::handle(&cli.config_path()),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg, &cli.config_path()),
        Commands::Projects(_)
        | Commands::Tasks(_)
        | Commands::Payroll(_)
        | Commands::Workflows(_)
        | Commands::Team(_) => commands::list::handle(&cli.command, cfg, today),
        Commands::Pay(args) => commands::pay::handle(args, cfg, today),
        Commands::Dashboard => commands::dashboard::handle(cfg, today),
        Commands::LogTime(args) => commands::track::handle_manual(args, today),
        Commands::Track { task, seconds } => commands::track::handle_track(task, *seconds, today),
        Commands::Notifications { unread } => commands::notifications::handle(*unread, today),
        Commands::Export(args) => commands::export::handle(args, today),
        Commands::Shell => commands::shell::handle(cfg, today),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta (file esplicito o ~/.pmdash)
    let cfg = Config::load_from(&cli.config_path())?;

    // 3️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
