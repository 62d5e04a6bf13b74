//! rDeparture library root.
//! Exposes the departure calculator, the CLI parser, and the high-level
//! run() function used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(path, cli.test),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, path),
        Commands::Set { .. } => cli::commands::set::handle(&cli.command, cfg, path),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg),
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, cfg, path),
    }
}

/// Settings file to use: `--config` override or the platform default.
pub fn settings_path(cli: &Cli) -> PathBuf {
    match &cli.config {
        Some(p) => expand_tilde(p),
        None => Config::config_file(),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init();

    // settings are loaded once; a missing or broken file yields defaults
    let path = settings_path(&cli);
    let cfg = Config::load_from(&path);
    tracing::debug!(path = %path.display(), ?cfg, "settings loaded");

    dispatch(&cli, &cfg, &path)
}
