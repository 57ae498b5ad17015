//! # Zerocurve Core
//!
//! Core rate vocabulary shared by every Zerocurve crate.
//!
//! This crate provides:
//!
//! - **Compounding**: discount factor <-> zero rate conversions
//! - **Frequency**: coupon/compounding frequency of a market convention
//! - **Day Count Conventions**: the day-count labels attached to a currency
//! - **Tenors**: parsing of maturity labels such as `3M` or `10Y`
//!
//! ## Example
//!
//! ```rust
//! use zerocurve_core::prelude::*;
//!
//! let df = Compounding::SemiAnnual.discount_factor(0.04, 2.0);
//! let rate = Compounding::SemiAnnual.zero_rate(df, 2.0);
//! assert!((rate - 0.04).abs() < 1e-12);
//!
//! let tenor: Tenor = "3M".parse().unwrap();
//! assert_eq!(tenor.to_years(), 0.25);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::DayCountConvention;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Compounding, Frequency, Tenor, TenorUnit};
}

pub use daycounts::DayCountConvention;
pub use error::{CoreError, CoreResult};
pub use types::{Compounding, Frequency, Tenor, TenorUnit};
