//! timetracker-migrate library root.
//! Exposes the CLI parser, the high-level run() function, and the migration
//! modules (registry, driver, data-file storage).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;
use ui::messages;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, 3️⃣ run the migration
    let (result, pause_on_exit) = match load_config(&cli) {
        Ok(cfg) => (cli::commands::migrate::handle(&cli, &cfg), cfg.pause_on_exit),
        Err(e) => (Err(e), true),
    };

    if let Err(e) = &result {
        messages::error(e);
    }

    // 4️⃣ wait for acknowledgment either way
    if pause_on_exit && !cli.no_pause {
        messages::pause();
    }

    result
}

/// Explicit --config wins over the default location
fn load_config(cli: &Cli) -> AppResult<Config> {
    match &cli.config {
        Some(path) => Config::load_from(&utils::path::expand_tilde(path)),
        None => Config::load(),
    }
}
