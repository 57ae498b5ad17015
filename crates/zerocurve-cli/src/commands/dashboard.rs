//! Dashboard command implementation.
//!
//! Builds one curve per currency from a market data directory: swaps and
//! futures for the major currencies, government bonds of a benchmark
//! country for the rest.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use zerocurve_config::CurveSettings;
use zerocurve_curves::batch::{build_all, CurveOutcome};
use zerocurve_curves::export::{export_file_name, export_to_csv_with, CsvPrecision};
use zerocurve_curves::{BootstrapEngine, BootstrapMethod};
use zerocurve_feeds::{dashboard_requests, CachedFeed, JsonDirSource};

use crate::cli::OutputFormat;
use crate::commands::parse_method;
use crate::output::{format_headline, format_tenor, print_header, print_rows, print_success, print_warning};

/// Arguments for the dashboard command.
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Market data directory (futures/, swaps/, bonds/)
    #[arg(short, long, env = "ZEROCURVE_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Bootstrap method id
    #[arg(short, long, default_value = "linear", value_parser = parse_method)]
    pub method: BootstrapMethod,

    /// Ignore cached responses
    #[arg(long)]
    pub force_refresh: bool,

    /// Write one CSV per built curve into this directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Tabled, Serialize)]
struct CardRow {
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Points")]
    points: usize,
    #[tabled(rename = "Max Tenor")]
    max_tenor: String,
    #[tabled(rename = "Headline Zero")]
    headline_zero_rate: String,
}

impl From<&CurveOutcome> for CardRow {
    fn from(outcome: &CurveOutcome) -> Self {
        let (max_tenor, headline_zero_rate) = match outcome.summary() {
            Some(summary) => (
                format_tenor(summary.max_tenor),
                format_headline(summary.headline_zero_rate, summary.headline_tenor),
            ),
            None => ("-".to_string(), "no curve available".to_string()),
        };

        Self {
            currency: outcome.currency.clone(),
            source: outcome.source_name.clone(),
            points: outcome.input_points,
            max_tenor,
            headline_zero_rate,
        }
    }
}

/// Execute the dashboard command.
pub fn execute(args: DashboardArgs, settings: &CurveSettings, format: OutputFormat) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("failed to start the async runtime")?;

    let feed = CachedFeed::from_settings(JsonDirSource::new(&args.data_dir), &settings.cache);
    let requests = runtime.block_on(async {
        let countries = feed
            .countries(args.force_refresh)
            .await
            .into_result()
            .unwrap_or_else(|err| {
                print_warning(&format!("No bond overview: {err}"));
                Vec::new()
            });
        dashboard_requests(&feed, &countries, args.force_refresh).await
    });

    let engine = BootstrapEngine::new(settings.clone());
    let outcomes = build_all(&engine, &requests, args.method);

    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)?;
        let precision = CsvPrecision::from(&settings.export);
        for curve in outcomes.iter().filter_map(CurveOutcome::curve) {
            let path = dir.join(export_file_name(curve));
            std::fs::write(&path, export_to_csv_with(curve, precision)?)?;
        }
        print_success(&format!("Wrote curves to {}", dir.display()));
    }

    let rows: Vec<CardRow> = outcomes.iter().map(CardRow::from).collect();
    match format {
        OutputFormat::Table => {
            print_header(&format!("All Curves - {}", args.method.label()));
            print_rows(&rows, format)
        }
        OutputFormat::Json | OutputFormat::Csv => print_rows(&rows, format),
        OutputFormat::Minimal => {
            let built = outcomes.iter().filter(|o| o.result.is_ok()).count();
            println!("{built}/{}", outcomes.len());
            Ok(())
        }
    }
}
