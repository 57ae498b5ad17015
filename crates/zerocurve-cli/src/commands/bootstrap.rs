//! Bootstrap command implementation.
//!
//! Bootstraps one currency's discount curve from CSV quote files:
//!
//! | File | Columns |
//! |------|---------|
//! | `--swaps` | `tenor,rate` (years, percent) |
//! | `--futures` | `maturity,price` (label such as `3M`, display price) |
//! | `--bonds` | `maturity_years,yield` (years, percent; empty yield allowed) |

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use tracing::info;

use zerocurve_config::CurveSettings;
use zerocurve_curves::export::{export_file_name, export_to_csv_with, export_to_json, CsvPrecision};
use zerocurve_curves::normalize::{normalize_bond, normalize_futures, normalize_swap};
use zerocurve_curves::{BootstrapEngine, BootstrapMethod, BootstrappedCurve, RateObservation};

use crate::cli::OutputFormat;
use crate::commands::parse_method;
use crate::error::{CliError, CliResult};
use crate::output::{format_headline, format_tenor, print_header, print_rows, print_success, print_table, KeyValue};

/// Arguments for the bootstrap command.
#[derive(Args, Debug)]
pub struct BootstrapArgs {
    /// Currency code (selects the compounding convention)
    #[arg(long)]
    pub currency: String,

    /// Bootstrap method id
    #[arg(short, long, default_value = "linear", value_parser = parse_method)]
    pub method: BootstrapMethod,

    /// Swap par rates CSV (tenor,rate)
    #[arg(long)]
    pub swaps: Option<PathBuf>,

    /// Futures quotes CSV (maturity,price)
    #[arg(long)]
    pub futures: Option<PathBuf>,

    /// Government bond yields CSV (maturity_years,yield)
    #[arg(long)]
    pub bonds: Option<PathBuf>,

    /// Also write the curve CSV to this file or directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct SwapRow {
    tenor: f64,
    rate: f64,
}

#[derive(Debug, Deserialize)]
struct FuturesRow {
    maturity: String,
    price: String,
}

#[derive(Debug, Deserialize)]
struct BondRow {
    maturity_years: f64,
    #[serde(rename = "yield")]
    yield_pct: Option<f64>,
}

#[derive(Tabled, Serialize)]
struct CurveRow {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Discount Factor")]
    discount_factor: String,
    #[tabled(rename = "Zero Rate (%)")]
    zero_rate: String,
}

/// Execute the bootstrap command.
pub fn execute(args: BootstrapArgs, settings: &CurveSettings, format: OutputFormat) -> Result<()> {
    let point_sets = load_point_sets(&args)?;
    let raw_points: usize = point_sets.iter().map(Vec::len).sum();
    info!(raw_points, "loaded quotes");

    let engine = BootstrapEngine::new(settings.clone());
    let curve = engine.bootstrap_point_sets(&point_sets, args.method, &args.currency)?;

    let precision = CsvPrecision::from(&settings.export);
    if let Some(target) = &args.output {
        let path = output_path(target, &curve);
        std::fs::write(&path, export_to_csv_with(&curve, precision)?)?;
        print_success(&format!("Wrote {}", path.display()));
    }

    match format {
        OutputFormat::Table => print_curve_table(&curve),
        OutputFormat::Json => {
            println!("{}", export_to_json(&curve)?);
            Ok(())
        }
        OutputFormat::Csv => {
            print!("{}", export_to_csv_with(&curve, precision)?);
            Ok(())
        }
        OutputFormat::Minimal => {
            if let Some(rate) = curve.headline_zero_rate() {
                println!("{:.4}", rate);
            }
            Ok(())
        }
    }
}

/// Swaps precede futures so that swaps win tenor collisions.
fn load_point_sets(args: &BootstrapArgs) -> Result<Vec<Vec<RateObservation>>> {
    if let Some(bonds) = &args.bonds {
        if args.swaps.is_some() || args.futures.is_some() {
            return Err(CliError::MixedSources.into());
        }
        return Ok(vec![read_bonds(bonds)?]);
    }

    if args.swaps.is_none() && args.futures.is_none() {
        return Err(CliError::NoQuotes.into());
    }

    let swaps = args.swaps.as_deref().map(read_swaps).transpose()?.unwrap_or_default();
    let futures = args
        .futures
        .as_deref()
        .map(read_futures)
        .transpose()?
        .unwrap_or_default();
    Ok(vec![swaps, futures])
}

fn read_rows<T: for<'de> Deserialize<'de>>(path: &Path) -> CliResult<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| CliError::quote_file(path, e))?;

    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| CliError::quote_file(path, e))
}

fn read_swaps(path: &Path) -> CliResult<Vec<RateObservation>> {
    Ok(read_rows::<SwapRow>(path)?
        .into_iter()
        .filter_map(|row| normalize_swap(row.tenor, row.rate))
        .collect())
}

fn read_futures(path: &Path) -> CliResult<Vec<RateObservation>> {
    Ok(read_rows::<FuturesRow>(path)?
        .into_iter()
        .filter_map(|row| normalize_futures(&row.price, &row.maturity))
        .collect())
}

fn read_bonds(path: &Path) -> CliResult<Vec<RateObservation>> {
    Ok(read_rows::<BondRow>(path)?
        .into_iter()
        .filter_map(|row| normalize_bond(row.maturity_years, row.yield_pct))
        .collect())
}

fn output_path(target: &Path, curve: &BootstrappedCurve) -> PathBuf {
    if target.is_dir() {
        target.join(export_file_name(curve))
    } else {
        target.to_path_buf()
    }
}

fn print_curve_table(curve: &BootstrappedCurve) -> Result<()> {
    print_header(&format!("Discount Curve - {}", curve.currency()));

    let mut summary = vec![
        KeyValue::new("Method", curve.method().label()),
        KeyValue::new("Convention", curve.convention().to_string()),
        KeyValue::new("Input points", curve.input_points().to_string()),
    ];
    if let Some(max) = curve.max_tenor() {
        summary.push(KeyValue::new("Max tenor", format_tenor(max)));
    }
    if let Some(point) = curve.headline_point() {
        summary.push(KeyValue::new(
            "Headline zero",
            format_headline(point.zero_rate, point.tenor),
        ));
    }
    print_table(&summary)?;

    let rows: Vec<CurveRow> = curve
        .discount_factors()
        .iter()
        .map(|p| CurveRow {
            tenor: format_tenor(p.tenor),
            discount_factor: format!("{:.8}", p.discount_factor),
            zero_rate: format!("{:.4}", p.zero_rate),
        })
        .collect();
    print_rows(&rows, OutputFormat::Table)
}
