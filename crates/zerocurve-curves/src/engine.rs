//! The bootstrapping engine.
//!
//! [`BootstrapEngine::bootstrap`] resolves the currency convention, fits the
//! input with the selected method and samples the fitted curve on the
//! reporting grid:
//!
//! - every input tenor,
//! - every whole year from 1 up to the longest input tenor,
//! - configured extra tenors not beyond the longest input tenor.
//!
//! Grid tenors are rounded to 1e-9 years and de-duplicated. Tenor 0 is never
//! sampled. Zero rates are derived from the sampled discount factors with
//! the convention's periodic compounding and reported in percent.
//!
//! Inputs are strictly positive rates, so a sampled discount factor above 1
//! is a fit artifact. It fails the curve with `FitDivergence`, except for
//! [`BootstrapMethod::QlLogCubic`] whose spline overshoot is accepted.

use log::{debug, info};
use zerocurve_config::CurveSettings;

use crate::assemble::{assemble_with_epsilon, MIN_CURVE_POINTS};
use crate::conventions::ConventionTable;
use crate::curve::{BootstrappedCurve, DiscountPoint, FittedCurve};
use crate::error::{CurveError, CurveResult};
use crate::methods::BootstrapMethod;
use crate::observation::{CurveInput, RateObservation};

const GRID_PRECISION: f64 = 1e9;

/// Stateless curve builder configured with [`CurveSettings`].
///
/// Safe to share across threads; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct BootstrapEngine {
    settings: CurveSettings,
    conventions: ConventionTable,
}

impl BootstrapEngine {
    /// Creates an engine; convention overrides are taken from `settings`.
    #[must_use]
    pub fn new(settings: CurveSettings) -> Self {
        let conventions = ConventionTable::from_settings(&settings);
        Self {
            settings,
            conventions,
        }
    }

    /// Replaces the convention table.
    #[must_use]
    pub fn with_conventions(mut self, conventions: ConventionTable) -> Self {
        self.conventions = conventions;
        self
    }

    /// Engine settings.
    pub fn settings(&self) -> &CurveSettings {
        &self.settings
    }

    /// Convention table used to resolve currencies.
    pub fn conventions(&self) -> &ConventionTable {
        &self.conventions
    }

    /// Assembles point sets with the configured tenor epsilon.
    pub fn assemble(&self, point_sets: &[Vec<RateObservation>]) -> CurveResult<CurveInput> {
        assemble_with_epsilon(point_sets, self.settings.tenor_epsilon)
    }

    /// Fits `input` without sampling it.
    pub fn fit(
        &self,
        input: &CurveInput,
        method: BootstrapMethod,
        currency: &str,
    ) -> CurveResult<FittedCurve> {
        let convention = self.conventions.resolve(currency);
        method.fit(input, convention.compounding(), &self.settings.nelson_siegel)
    }

    /// Builds the discrete discount curve of `currency` from `input`.
    ///
    /// # Errors
    ///
    /// `InsufficientData` for fewer than two points; `FitDivergence` when the
    /// fit fails or any sampled value is not finite.
    pub fn bootstrap(
        &self,
        input: &CurveInput,
        method: BootstrapMethod,
        currency: &str,
    ) -> CurveResult<BootstrappedCurve> {
        if input.len() < MIN_CURVE_POINTS {
            return Err(CurveError::insufficient_data(MIN_CURVE_POINTS, input.len()));
        }

        let currency = currency.trim().to_ascii_uppercase();
        let convention = self.conventions.resolve(&currency);
        let compounding = convention.compounding();
        debug!(
            "bootstrapping {currency} with {method} ({} points, {convention})",
            input.len()
        );

        let fitted = method.fit(input, compounding, &self.settings.nelson_siegel)?;

        let grid = self.reporting_grid(input);
        let mut points = Vec::with_capacity(grid.len());
        for tenor in grid {
            let discount_factor = fitted.discount_factor(tenor)?;
            let zero_rate = compounding.zero_rate(discount_factor, tenor) * 100.0;

            if !(discount_factor.is_finite() && zero_rate.is_finite()) {
                return Err(CurveError::fit_divergence(
                    0,
                    f64::NAN,
                    format!("{method} produced a non-finite value at {tenor}y"),
                ));
            }
            if discount_factor > 1.0 && !method.allows_overshoot() {
                return Err(CurveError::fit_divergence(
                    0,
                    f64::NAN,
                    format!("{method} produced a negative zero rate ({zero_rate:.4}%) at {tenor}y"),
                ));
            }

            points.push(DiscountPoint {
                tenor,
                discount_factor,
                zero_rate,
            });
        }

        info!(
            "bootstrapped {currency} {method} curve: {} points up to {:.2}y",
            points.len(),
            input.max_tenor().unwrap_or_default()
        );

        Ok(BootstrappedCurve::new(
            currency,
            method,
            convention,
            input.len(),
            points,
        ))
    }

    /// Assembles `point_sets` and bootstraps the result.
    pub fn bootstrap_point_sets(
        &self,
        point_sets: &[Vec<RateObservation>],
        method: BootstrapMethod,
        currency: &str,
    ) -> CurveResult<BootstrappedCurve> {
        let input = self.assemble(point_sets)?;
        self.bootstrap(&input, method, currency)
    }

    /// Tenors at which a curve fitted to `input` is sampled, ascending.
    pub fn reporting_grid(&self, input: &CurveInput) -> Vec<f64> {
        let Some(max_tenor) = input.max_tenor() else {
            return Vec::new();
        };
        let reporting = &self.settings.reporting;

        let mut grid: Vec<f64> = input.tenors();
        if reporting.whole_years {
            // observations cap tenors at MAX_TENOR_YEARS, so the cast is exact
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let whole = max_tenor.floor() as u32;
            grid.extend((1..=whole).map(f64::from));
        }
        grid.extend(
            reporting
                .extra_tenors
                .iter()
                .copied()
                .filter(|t| *t > 0.0 && *t <= max_tenor),
        );

        let mut grid: Vec<f64> = grid
            .into_iter()
            .map(|t| (t * GRID_PRECISION).round() / GRID_PRECISION)
            .filter(|t| *t > 0.0)
            .collect();
        grid.sort_by(f64::total_cmp);
        grid.dedup();
        grid
    }
}

/// Bootstraps a swap + futures curve with default settings.
///
/// Swaps outrank futures at colliding tenors.
pub fn bootstrap(
    swaps: &[RateObservation],
    futures: &[RateObservation],
    method: BootstrapMethod,
    currency: &str,
) -> CurveResult<BootstrappedCurve> {
    BootstrapEngine::default().bootstrap_point_sets(
        &[swaps.to_vec(), futures.to_vec()],
        method,
        currency,
    )
}

/// Bootstraps a government bond curve with default settings.
pub fn bootstrap_bonds(
    bonds: &[RateObservation],
    method: BootstrapMethod,
    currency: &str,
) -> CurveResult<BootstrappedCurve> {
    BootstrapEngine::default().bootstrap_point_sets(&[bonds.to_vec()], method, currency)
}
