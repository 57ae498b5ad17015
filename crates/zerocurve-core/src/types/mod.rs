//! Domain types for rate calculations.
//!
//! - [`Compounding`]: Interest compounding convention
//! - [`Frequency`]: Compounding frequency attached to a market convention
//! - [`Tenor`]: Parsed maturity label (`3M`, `10Y`, `O/N`, ...)

mod frequency;
mod tenor;

pub use frequency::{Compounding, Frequency};
pub use tenor::{Tenor, TenorUnit};
