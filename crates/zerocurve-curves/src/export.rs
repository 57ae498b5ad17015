//! CSV and JSON export of bootstrapped curves.
//!
//! The CSV layout is a header line `tenor,discountFactor,zeroRate` followed
//! by one row per point in ascending tenor order. Zero rates are in percent.

use serde::Serialize;
use zerocurve_config::ExportSettings;

use crate::curve::{BootstrappedCurve, DiscountPoint};
use crate::error::{CurveError, CurveResult};

const HEADER: [&str; 3] = ["tenor", "discountFactor", "zeroRate"];

/// Decimal places per CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvPrecision {
    /// Tenor decimals.
    pub tenor: usize,
    /// Discount factor decimals.
    pub discount_factor: usize,
    /// Zero rate decimals.
    pub zero_rate: usize,
}

impl Default for CsvPrecision {
    fn default() -> Self {
        Self {
            tenor: 4,
            discount_factor: 8,
            zero_rate: 6,
        }
    }
}

impl From<&ExportSettings> for CsvPrecision {
    fn from(settings: &ExportSettings) -> Self {
        Self {
            tenor: settings.tenor_decimals,
            discount_factor: settings.discount_factor_decimals,
            zero_rate: settings.zero_rate_decimals,
        }
    }
}

/// Writes `curve` as CSV with the default precision.
///
/// # Example
///
/// ```rust
/// use zerocurve_curves::prelude::*;
///
/// let swaps = vec![
///     RateObservation::new(1.0, 0.04, InstrumentSource::Swap).unwrap(),
///     RateObservation::new(2.0, 0.045, InstrumentSource::Swap).unwrap(),
/// ];
/// let curve = bootstrap(&swaps, &[], BootstrapMethod::Linear, "EUR").unwrap();
///
/// let csv = export_to_csv(&curve).unwrap();
/// assert!(csv.starts_with("tenor,discountFactor,zeroRate\n1.0000,"));
/// assert_eq!(csv.lines().count(), 3);
/// ```
pub fn export_to_csv(curve: &BootstrappedCurve) -> CurveResult<String> {
    export_to_csv_with(curve, CsvPrecision::default())
}

/// Writes `curve` as CSV with explicit column precision.
pub fn export_to_csv_with(curve: &BootstrappedCurve, precision: CsvPrecision) -> CurveResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for point in curve.discount_factors() {
        writer.write_record([
            format!("{:.*}", precision.tenor, point.tenor),
            format!("{:.*}", precision.discount_factor, point.discount_factor),
            format!("{:.*}", precision.zero_rate, point.zero_rate),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CurveError::export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CurveError::export(e.to_string()))
}

/// Reads points back from the CSV layout written by [`export_to_csv`].
pub fn parse_csv(text: &str) -> CurveResult<Vec<DiscountPoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?;
    if headers.iter().ne(HEADER) {
        return Err(CurveError::export(format!(
            "unexpected header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    reader
        .deserialize()
        .map(|row| row.map_err(CurveError::from))
        .collect()
}

/// Pretty-printed JSON of `curve`.
pub fn export_to_json(curve: &BootstrappedCurve) -> CurveResult<String> {
    to_pretty_json(curve)
}

pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> CurveResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CurveError::export(e.to_string()))
}

/// Download file name, `all_curves_<CCY>_<method>.csv`.
pub fn export_file_name(curve: &BootstrappedCurve) -> String {
    format!("all_curves_{}_{}.csv", curve.currency(), curve.method().id())
}
