//! Zerocurve CLI - Command-line interface for discount curve bootstrapping.
//!
//! # Usage
//!
//! ```bash
//! # Bootstrap a USD curve from CSV quotes
//! zerocurve bootstrap --currency USD --swaps swaps.csv --futures futures.csv --method bloomberg
//!
//! # Build every currency's curve from a data directory
//! zerocurve dashboard --data-dir ./market --method quantlib_log_cubic
//!
//! # Show the currency conventions
//! zerocurve conventions
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use zerocurve_config::CurveSettings;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let settings = match &cli.config {
        Some(path) => CurveSettings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => CurveSettings::default(),
    };

    let format = cli.format;

    match cli.command {
        Commands::Bootstrap(args) => commands::bootstrap::execute(args, &settings, format)?,
        Commands::Dashboard(args) => commands::dashboard::execute(args, &settings, format)?,
        Commands::Conventions(args) => commands::conventions::execute(args, &settings, format)?,
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` raises the level to debug and `-q` lowers
/// it to warnings.
fn init_logging(verbose: bool, quiet: bool) {
    let default = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
