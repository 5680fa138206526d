//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - acquires the forecast (injected fast path or polling)
//! - derives KPI metrics and the chart series
//! - prints the report or launches the TUI

use clap::Parser;

use crate::cli::{Command, LoadArgs};
use crate::domain::DashboardConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `fdeck` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `fdeck` (and `fdeck --endpoint ...`) to behave like
    // `fdeck tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    init_logging(&cli.command);

    match cli.command {
        Command::Fetch(args) => handle_fetch(args),
        Command::Tui(args) => handle_tui(args),
    }
}

/// `fetch` logs attempt progress to stderr by default; the TUI keeps the
/// alternate screen clean unless RUST_LOG says otherwise.
fn init_logging(command: &Command) {
    let default_filter = match command {
        Command::Fetch(_) => "info",
        Command::Tui(_) => "error",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn handle_fetch(args: LoadArgs) -> Result<(), AppError> {
    let config = dashboard_config_from_args(&args);
    let data = pipeline::load_dashboard(&config)?;

    print!("{}", crate::report::format_kpis(&data.metrics));
    print!("{}", crate::report::format_series(&data.result));

    Ok(())
}

fn handle_tui(args: LoadArgs) -> Result<(), AppError> {
    crate::tui::run(args)
}

pub fn dashboard_config_from_args(args: &LoadArgs) -> DashboardConfig {
    DashboardConfig {
        endpoint: args.endpoint.clone(),
        max_attempts: args.max_attempts,
        interval_ms: args.interval_ms,
        inject: args.inject.clone(),
        poll: !args.no_poll,
    }
}

/// Rewrite argv so `fdeck` defaults to `fdeck tui`.
///
/// Rules:
/// - `fdeck`                     -> `fdeck tui`
/// - `fdeck --inject f.json ...` -> `fdeck tui --inject f.json ...`
/// - `fdeck --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fetch" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&["fdeck"])), argv(&["fdeck", "tui"]));
    }

    #[test]
    fn leading_flag_defaults_to_tui() {
        assert_eq!(
            rewrite_args(argv(&["fdeck", "--no-poll", "--inject", "f.json"])),
            argv(&["fdeck", "tui", "--no-poll", "--inject", "f.json"])
        );
    }

    #[test]
    fn explicit_subcommands_are_untouched() {
        assert_eq!(
            rewrite_args(argv(&["fdeck", "fetch", "--max-attempts", "3"])),
            argv(&["fdeck", "fetch", "--max-attempts", "3"])
        );
        assert_eq!(rewrite_args(argv(&["fdeck", "tui"])), argv(&["fdeck", "tui"]));
    }

    #[test]
    fn help_and_version_are_untouched() {
        assert_eq!(rewrite_args(argv(&["fdeck", "--help"])), argv(&["fdeck", "--help"]));
        assert_eq!(rewrite_args(argv(&["fdeck", "-V"])), argv(&["fdeck", "-V"]));
    }

    #[test]
    fn clap_defaults_agree_with_config_defaults() {
        let cli = crate::cli::Cli::try_parse_from(["fdeck", "fetch"]).unwrap();
        let Command::Fetch(args) = cli.command else {
            panic!("expected fetch subcommand");
        };
        let config = dashboard_config_from_args(&args);
        let defaults = DashboardConfig::default();
        assert_eq!(config.max_attempts, defaults.max_attempts);
        assert_eq!(config.interval_ms, defaults.interval_ms);
        assert_eq!(config.poll, defaults.poll);
    }

    #[test]
    fn config_mirrors_args() {
        let args = LoadArgs {
            endpoint: Some("http://example.test/f".to_string()),
            max_attempts: 7,
            interval_ms: 100,
            inject: None,
            no_poll: true,
        };
        let config = dashboard_config_from_args(&args);
        assert_eq!(config.endpoint.as_deref(), Some("http://example.test/f"));
        assert_eq!(config.max_attempts, 7);
        assert_eq!(config.interval_ms, 100);
        assert!(!config.poll);
    }
}
