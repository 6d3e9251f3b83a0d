//! Cassette CLI - Command-line interface for the cassette generator
//!
//! This binary previews generated cassettes in the terminal and reports
//! feature frequencies for tuning the generator's probabilities.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cassette_cli::cli_args::{Cli, Commands};
use cassette_cli::commands;

/// Install the stderr log subscriber. `RUST_LOG` takes precedence.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Preview {
            seed,
            count,
            columns,
            no_color,
            tuning,
        } => commands::preview::run(seed, count, columns, !no_color, &tuning),
        Commands::Stats {
            samples,
            seed,
            json,
            tuning,
        } => commands::stats::run(samples, seed, json, &tuning),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
