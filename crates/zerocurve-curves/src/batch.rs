//! Multi-currency curve building.
//!
//! Each [`CurveRequest`] is independent: requests are fitted in parallel on
//! the rayon pool and a failing currency never affects the others.

use std::fmt;

use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::assemble::MIN_CURVE_POINTS;
use crate::curve::BootstrappedCurve;
use crate::engine::BootstrapEngine;
use crate::error::{CurveError, CurveResult};
use crate::methods::BootstrapMethod;
use crate::observation::RateObservation;

/// Where a currency's curve inputs come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CurveSource {
    /// Swap par rates plus short-rate futures.
    SwapsAndFutures,
    /// Government bond yields of a benchmark country.
    Bonds,
}

impl CurveSource {
    /// Short badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CurveSource::SwapsAndFutures => "IRS/Futures",
            CurveSource::Bonds => "Gov Bonds",
        }
    }
}

impl fmt::Display for CurveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inputs for one currency.
#[derive(Debug, Clone)]
pub struct CurveRequest {
    /// Currency code.
    pub currency: String,
    /// Kind of inputs.
    pub source: CurveSource,
    /// Human-readable origin, e.g. `IRS + Futures` or `Gov Bonds (Australia)`.
    pub source_name: String,
    /// Point sets in descending precedence (swaps before futures).
    pub point_sets: Vec<Vec<RateObservation>>,
}

impl CurveRequest {
    /// Swap + futures request.
    pub fn swaps_and_futures(
        currency: impl Into<String>,
        swaps: Vec<RateObservation>,
        futures: Vec<RateObservation>,
    ) -> Self {
        Self {
            currency: currency.into(),
            source: CurveSource::SwapsAndFutures,
            source_name: "IRS + Futures".to_string(),
            point_sets: vec![swaps, futures],
        }
    }

    /// Government bond request for the benchmark `country`.
    pub fn bonds(currency: impl Into<String>, country: &str, bonds: Vec<RateObservation>) -> Self {
        Self {
            currency: currency.into(),
            source: CurveSource::Bonds,
            source_name: format!("Gov Bonds ({country})"),
            point_sets: vec![bonds],
        }
    }

    /// Raw observation count, before tenor collisions are resolved.
    pub fn point_count(&self) -> usize {
        self.point_sets.iter().map(Vec::len).sum()
    }
}

/// Result of one [`CurveRequest`].
#[derive(Debug, Clone)]
pub struct CurveOutcome {
    /// Currency code, as requested.
    pub currency: String,
    /// Kind of inputs.
    pub source: CurveSource,
    /// Human-readable origin.
    pub source_name: String,
    /// Raw observation count of the request.
    pub input_points: usize,
    /// The curve, or why none is available.
    pub result: CurveResult<BootstrappedCurve>,
}

/// Dashboard card figures of a built curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveSummary {
    /// Raw input points.
    pub points: usize,
    /// Longest sampled tenor.
    pub max_tenor: f64,
    /// Tenor of the headline point: 10, or the middle point's.
    pub headline_tenor: f64,
    /// Zero rate in percent at `headline_tenor`.
    pub headline_zero_rate: f64,
}

impl CurveOutcome {
    /// Card figures, `None` when no curve is available.
    pub fn summary(&self) -> Option<CurveSummary> {
        let curve = self.result.as_ref().ok()?;
        let headline = curve.headline_point()?;
        Some(CurveSummary {
            points: self.input_points,
            max_tenor: curve.max_tenor()?,
            headline_tenor: headline.tenor,
            headline_zero_rate: headline.zero_rate,
        })
    }

    /// The curve, if one was built.
    pub fn curve(&self) -> Option<&BootstrappedCurve> {
        self.result.as_ref().ok()
    }
}

/// Builds a curve per request with `method`, in request order.
pub fn build_all(
    engine: &BootstrapEngine,
    requests: &[CurveRequest],
    method: BootstrapMethod,
) -> Vec<CurveOutcome> {
    let outcomes: Vec<CurveOutcome> = requests
        .par_iter()
        .map(|request| build_one(engine, request, method))
        .collect();

    let built = outcomes.iter().filter(|o| o.result.is_ok()).count();
    info!(
        "built {built} of {} curves with {method}",
        outcomes.len()
    );
    outcomes
}

fn build_one(engine: &BootstrapEngine, request: &CurveRequest, method: BootstrapMethod) -> CurveOutcome {
    let input_points = request.point_count();

    let result = if input_points < MIN_CURVE_POINTS {
        Err(CurveError::insufficient_data(MIN_CURVE_POINTS, input_points))
    } else {
        engine.bootstrap_point_sets(&request.point_sets, method, &request.currency)
    };

    if let Err(err) = &result {
        warn!("no {} curve from {}: {err}", request.currency, request.source_name);
    }

    CurveOutcome {
        currency: request.currency.clone(),
        source: request.source,
        source_name: request.source_name.clone(),
        input_points,
        result,
    }
}
