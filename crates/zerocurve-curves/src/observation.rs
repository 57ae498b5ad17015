//! Rate observations and assembled curve inputs.

use std::fmt;

use serde::Serialize;

use crate::error::{CurveError, CurveResult};

/// Upper bound (exclusive) for a plausible decimal rate.
pub const MAX_PLAUSIBLE_RATE: f64 = 0.5;

/// Longest accepted tenor in years (inclusive).
///
/// Bounds the whole-year reporting grid; anything longer is a bad tick.
pub const MAX_TENOR_YEARS: f64 = 100.0;

/// Market instrument an observation was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentSource {
    /// Short-term interest rate future.
    Futures,
    /// Interest rate swap.
    Swap,
    /// Government bond yield.
    Bond,
}

impl InstrumentSource {
    /// Collision priority; lower wins.
    ///
    /// Swaps and bonds outrank futures at the same tenor.
    #[must_use]
    pub fn default_priority(self) -> u8 {
        match self {
            InstrumentSource::Swap | InstrumentSource::Bond => 1,
            InstrumentSource::Futures => 2,
        }
    }
}

impl fmt::Display for InstrumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstrumentSource::Futures => "Futures",
            InstrumentSource::Swap => "Swap",
            InstrumentSource::Bond => "Bond",
        };
        write!(f, "{name}")
    }
}

/// A single normalized market point: a tenor in years and a decimal rate.
///
/// Always satisfies `0 < tenor_years <= 100` and `0 < rate < 0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateObservation {
    tenor_years: f64,
    rate: f64,
    source: InstrumentSource,
    priority: u8,
}

impl RateObservation {
    /// Creates an observation with the source's default priority.
    ///
    /// # Errors
    ///
    /// Returns `InvalidObservation` if the tenor is outside
    /// `(0, MAX_TENOR_YEARS]` or the rate is outside `(0, 0.5)`.
    pub fn new(tenor_years: f64, rate: f64, source: InstrumentSource) -> CurveResult<Self> {
        Self::with_priority(tenor_years, rate, source, source.default_priority())
    }

    /// Creates an observation with an explicit priority.
    pub fn with_priority(
        tenor_years: f64,
        rate: f64,
        source: InstrumentSource,
        priority: u8,
    ) -> CurveResult<Self> {
        if !(tenor_years.is_finite() && tenor_years > 0.0 && tenor_years <= MAX_TENOR_YEARS) {
            return Err(CurveError::invalid_observation(format!(
                "tenor must be in (0, {MAX_TENOR_YEARS}], got {tenor_years}"
            )));
        }
        if !(rate.is_finite() && rate > 0.0 && rate < MAX_PLAUSIBLE_RATE) {
            return Err(CurveError::invalid_observation(format!(
                "rate must be in (0, {MAX_PLAUSIBLE_RATE}), got {rate}"
            )));
        }

        Ok(Self {
            tenor_years,
            rate,
            source,
            priority,
        })
    }

    /// Tenor in years.
    pub fn tenor_years(&self) -> f64 {
        self.tenor_years
    }

    /// Decimal rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Originating instrument.
    pub fn source(&self) -> InstrumentSource {
        self.source
    }

    /// Collision priority (lower wins).
    pub fn priority(&self) -> u8 {
        self.priority
    }
}

/// Ordered, de-duplicated observations ready for bootstrapping.
///
/// Tenors are strictly ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveInput {
    points: Vec<RateObservation>,
}

impl CurveInput {
    /// Wraps observations that are already sorted.
    ///
    /// # Errors
    ///
    /// Returns `InvalidObservation` if tenors are not strictly ascending.
    pub fn from_sorted(points: Vec<RateObservation>) -> CurveResult<Self> {
        if let Some(pair) = points
            .windows(2)
            .find(|w| w[1].tenor_years <= w[0].tenor_years)
        {
            return Err(CurveError::invalid_observation(format!(
                "tenors must be strictly ascending: {} then {}",
                pair[0].tenor_years, pair[1].tenor_years
            )));
        }
        Ok(Self { points })
    }

    /// The observations in tenor order.
    pub fn points(&self) -> &[RateObservation] {
        &self.points
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when there are no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Tenors in ascending order.
    pub fn tenors(&self) -> Vec<f64> {
        self.points.iter().map(RateObservation::tenor_years).collect()
    }

    /// Rates in tenor order.
    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(RateObservation::rate).collect()
    }

    /// Shortest tenor, if any.
    pub fn min_tenor(&self) -> Option<f64> {
        self.points.first().map(RateObservation::tenor_years)
    }

    /// Longest tenor, if any.
    pub fn max_tenor(&self) -> Option<f64> {
        self.points.last().map(RateObservation::tenor_years)
    }
}
