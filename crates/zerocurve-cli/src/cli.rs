//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{BootstrapArgs, ConventionsArgs, DashboardArgs};

/// Zerocurve - Zero-coupon discount curve bootstrapping
#[derive(Parser)]
#[command(name = "zerocurve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (.json or .toml)
    #[arg(short, long, global = true, env = "ZEROCURVE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Bootstrap one currency's curve from CSV quote files
    Bootstrap(BootstrapArgs),

    /// Build every currency's curve from a market data directory
    Dashboard(DashboardArgs),

    /// Show currency conventions and data-source defaults
    Conventions(ConventionsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}
