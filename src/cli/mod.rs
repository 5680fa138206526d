//! Command-line parsing for the forecast dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the acquisition/derivation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{DEFAULT_INTERVAL_MS, DEFAULT_MAX_ATTEMPTS};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fdeck", version, about = "Sales forecast terminal dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Acquire the forecast and print a KPI + series report.
    Fetch(LoadArgs),
    /// Launch the interactive TUI dashboard.
    ///
    /// This uses the same underlying acquisition pipeline as `fdeck fetch`,
    /// but renders results in a terminal UI using Ratatui.
    Tui(LoadArgs),
}

/// Common options for acquiring the forecast.
#[derive(Debug, Parser, Clone)]
pub struct LoadArgs {
    /// Forecast endpoint URL (overrides FORECAST_API_URL and the default).
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Maximum polling attempts before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Fixed wait between polling attempts, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,

    /// JSON file with a precomputed forecast (same shape as the 200 body);
    /// used instead of the network when it holds a usable forecast.
    #[arg(long)]
    pub inject: Option<PathBuf>,

    /// Disable the network fallback; only injected data can satisfy the load.
    #[arg(long)]
    pub no_poll: bool,
}
