//! Property-based tests for bootstrapped curve invariants.
//!
//! These hold for every method and every well-formed input:
//! - Output tenors strictly ascending, discount factors at most 1 (first
//!   point always; every point unless the method allows overshoot)
//! - Discount factors and zero rates finite and consistent
//! - Log-discount methods reprice their inputs
//! - Repeated bootstraps are bit-identical

use proptest::prelude::*;
use zerocurve_core::Compounding;
use zerocurve_curves::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

/// 2 to 12 distinct tenors in (0, 30] with rates in [0.5%, 12%].
fn curve_points() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::btree_map(1u32..=360, 0.005f64..0.12, 2..12).prop_map(|points| {
        points
            .into_iter()
            .map(|(months, rate)| (f64::from(months) / 12.0, rate))
            .collect()
    })
}

fn observations(points: &[(f64, f64)], source: InstrumentSource) -> Vec<RateObservation> {
    points
        .iter()
        .map(|(t, r)| RateObservation::new(*t, *r, source).unwrap())
        .collect()
}

fn method() -> impl Strategy<Value = BootstrapMethod> {
    prop::sample::select(BootstrapMethod::ALL.to_vec())
}

fn currency() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["USD", "EUR", "GBP", "CHF", "JPY", "AUD"])
}

fn run(points: &[(f64, f64)], method: BootstrapMethod, currency: &str) -> CurveResult<BootstrappedCurve> {
    bootstrap(&observations(points, InstrumentSource::Swap), &[], method, currency)
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_output_sorted_and_finite(
        points in curve_points(),
        method in method(),
        ccy in currency(),
    ) {
        match run(&points, method, ccy) {
            Ok(curve) => {
                let dfs = curve.discount_factors();
                prop_assert!(!dfs.is_empty());
                prop_assert!(dfs[0].discount_factor <= 1.0);
                for pair in dfs.windows(2) {
                    prop_assert!(pair[0].tenor < pair[1].tenor);
                }
                for p in dfs {
                    prop_assert!(p.tenor > 0.0);
                    prop_assert!(p.discount_factor.is_finite() && p.discount_factor > 0.0);
                    prop_assert!(p.zero_rate.is_finite());
                    if !method.allows_overshoot() {
                        prop_assert!(p.discount_factor <= 1.0, "{} at {}", method, p.tenor);
                    }
                }
            }
            // the least-squares fit and the rate spline may fail on arbitrary
            // data; the other methods cannot leave the positive-rate region
            Err(err) => {
                prop_assert!(
                    matches!(method, BootstrapMethod::NelsonSiegel | BootstrapMethod::CubicSpline),
                    "{} failed: {}", method, err
                );
                prop_assert!(matches!(err, CurveError::FitDivergence { .. }), "{}", err);
            }
        }
    }

    #[test]
    fn prop_zero_rate_matches_discount_factor(
        points in curve_points(),
        method in method(),
        ccy in currency(),
    ) {
        if let Ok(curve) = run(&points, method, ccy) {
            let compounding = curve.convention().compounding();
            for p in curve.discount_factors() {
                let df = compounding.discount_factor(p.zero_rate / 100.0, p.tenor);
                prop_assert!((df - p.discount_factor).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn prop_log_discount_methods_reprice_inputs(
        points in curve_points(),
        ccy in currency(),
    ) {
        let convention = basis_convention(ccy).compounding();
        let cases = [
            (BootstrapMethod::Bloomberg, Compounding::Annual),
            (BootstrapMethod::QlLogLinear, convention),
            (BootstrapMethod::QlLogCubic, convention),
        ];

        for (method, seeding) in cases {
            let curve = run(&points, method, ccy).unwrap();
            for (t, r) in &points {
                let p = curve.point_at(*t).unwrap();
                prop_assert!((p.discount_factor - seeding.discount_factor(*r, *t)).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn prop_rate_methods_reproduce_input_rates(
        points in curve_points(),
        ccy in currency(),
    ) {
        let linear = run(&points, BootstrapMethod::Linear, ccy);
        let spline = run(&points, BootstrapMethod::CubicSpline, ccy);
        for curve in std::iter::once(linear.unwrap()).chain(spline.ok()) {
            for (t, r) in &points {
                prop_assert!((curve.point_at(*t).unwrap().zero_rate - r * 100.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn prop_repeated_bootstrap_is_identical(
        points in curve_points(),
        method in method(),
    ) {
        let first = run(&points, method, "EUR");
        let second = run(&points, method, "EUR");
        match (&first, &second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            // divergence residuals may be NaN
            _ => prop_assert_eq!(format!("{first:?}"), format!("{second:?}")),
        }
    }

    #[test]
    fn prop_swap_wins_over_futures_at_same_tenor(
        tenor_months in 1u32..=120,
        swap_rate in 0.01f64..0.08,
        futures_rate in 0.01f64..0.08,
    ) {
        let tenor = f64::from(tenor_months) / 12.0;
        let swaps = vec![
            RateObservation::new(tenor, swap_rate, InstrumentSource::Swap).unwrap(),
            RateObservation::new(40.0, 0.04, InstrumentSource::Swap).unwrap(),
        ];
        let futures = vec![RateObservation::new(tenor, futures_rate, InstrumentSource::Futures).unwrap()];

        let input = assemble(&[futures, swaps]).unwrap();
        prop_assert_eq!(input.len(), 2);
        prop_assert_eq!(input.points()[0].source(), InstrumentSource::Swap);
        prop_assert_eq!(input.points()[0].rate(), swap_rate);
    }
}
