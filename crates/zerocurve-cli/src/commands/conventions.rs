//! Conventions command implementation.

use std::collections::BTreeSet;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use zerocurve_config::CurveSettings;
use zerocurve_curves::conventions::{standard_currencies, ConventionTable};
use zerocurve_feeds::{is_irs_futures_currency, CURRENCY_DEFAULTS};

use crate::cli::OutputFormat;
use crate::output::{print_header, print_rows};

/// Arguments for the conventions command.
#[derive(Args, Debug)]
pub struct ConventionsArgs {
    /// Show a single currency
    #[arg(long)]
    pub currency: Option<String>,
}

#[derive(Tabled, Serialize)]
struct ConventionRow {
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Day Count")]
    day_count: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Overridden")]
    overridden: bool,
    #[tabled(rename = "Curve Source")]
    curve_source: String,
    #[tabled(rename = "Futures Index")]
    futures_index: String,
    #[tabled(rename = "Swap Curve")]
    swap_curve: String,
}

/// Execute the conventions command.
pub fn execute(args: ConventionsArgs, settings: &CurveSettings, format: OutputFormat) -> Result<()> {
    let table = ConventionTable::from_settings(settings);

    let currencies: Vec<String> = match &args.currency {
        Some(ccy) => vec![ccy.trim().to_ascii_uppercase()],
        None => standard_currencies()
            .map(str::to_string)
            .chain(settings.conventions.keys().map(|c| c.to_ascii_uppercase()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect(),
    };

    let rows: Vec<ConventionRow> = currencies
        .into_iter()
        .map(|ccy| {
            let convention = table.resolve(&ccy);
            let defaults = CURRENCY_DEFAULTS.iter().find(|d| d.currency == ccy);
            ConventionRow {
                day_count: convention.day_count.to_string(),
                frequency: convention.frequency.to_string(),
                overridden: table.is_overridden(&ccy),
                curve_source: if is_irs_futures_currency(&ccy) {
                    "IRS + Futures".to_string()
                } else {
                    "Gov Bonds".to_string()
                },
                futures_index: defaults.map_or("-", |d| d.futures_index).to_string(),
                swap_curve: defaults.map_or("-", |d| d.swap_currency).to_string(),
                currency: ccy,
            }
        })
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Currency Conventions");
            print_rows(&rows, format)
        }
        OutputFormat::Json | OutputFormat::Csv => print_rows(&rows, format),
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{} {} {}", row.currency, row.day_count, row.frequency);
            }
            Ok(())
        }
    }
}
