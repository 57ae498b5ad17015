//! # Zerocurve Curves
//!
//! Zero-coupon discount curve bootstrapping from short-rate futures, swap
//! par rates and government bond yields.
//!
//! This crate provides:
//!
//! - **Normalization**: raw quotes to validated [`RateObservation`]s
//! - **Conventions**: the day-count/frequency basis of each currency
//! - **Assembly**: merging point sets into one ordered [`CurveInput`]
//! - **Methods**: six fitting strategies ([`BootstrapMethod`])
//! - **Engine**: fitting and sampling into a [`BootstrappedCurve`]
//! - **Export**: CSV and JSON output
//! - **Batch**: one curve per currency, built in parallel
//!
//! ## Quick Start
//!
//! ```rust
//! use zerocurve_curves::prelude::*;
//!
//! let futures: Vec<_> = normalize_futures("94.70", "3M").into_iter().collect();
//! let swaps: Vec<_> = [(2.0, 4.10), (10.0, 4.25)]
//!     .iter()
//!     .filter_map(|(t, r)| normalize_swap(*t, *r))
//!     .collect();
//!
//! let curve = bootstrap(&swaps, &futures, BootstrapMethod::QlLogLinear, "USD").unwrap();
//! assert_eq!(curve.discount_factors()[0].tenor, 0.25);
//!
//! let ten = curve.point_at(10.0).unwrap();
//! assert!((ten.zero_rate - 4.25).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod assemble;
pub mod batch;
pub mod conventions;
pub mod curve;
pub mod engine;
pub mod error;
pub mod export;
pub mod methods;
pub mod normalize;
pub mod observation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::assemble::{assemble, assemble_with_epsilon, MIN_CURVE_POINTS};
    pub use crate::batch::{build_all, CurveOutcome, CurveRequest, CurveSource, CurveSummary};
    pub use crate::conventions::{basis_convention, BasisConvention, ConventionTable};
    pub use crate::curve::{BootstrappedCurve, DiscountPoint, FittedCurve};
    pub use crate::engine::{bootstrap, bootstrap_bonds, BootstrapEngine};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::export::{
        export_file_name, export_to_csv, export_to_csv_with, export_to_json, parse_csv,
        CsvPrecision,
    };
    pub use crate::methods::BootstrapMethod;
    pub use crate::normalize::{
        maturity_to_years, normalize_bond, normalize_futures, normalize_swap, price_to_rate,
    };
    pub use crate::observation::{CurveInput, InstrumentSource, RateObservation};
}

pub use curve::{BootstrappedCurve, DiscountPoint, FittedCurve};
pub use engine::{bootstrap, bootstrap_bonds, BootstrapEngine};
pub use error::{CurveError, CurveResult};
pub use methods::BootstrapMethod;
pub use observation::{CurveInput, InstrumentSource, RateObservation};
