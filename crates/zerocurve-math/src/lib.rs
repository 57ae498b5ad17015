//! # Zerocurve Math
//!
//! Numerical building blocks for curve construction.
//!
//! This crate provides:
//!
//! - **Interpolation**: linear, natural cubic spline and log-linear
//!   interpolators behind a common [`Interpolator`](interpolation::Interpolator) trait
//! - **Parametric models**: the Nelson-Siegel zero-rate model
//! - **Optimization**: Levenberg-Marquardt nonlinear least squares
//!
//! All routines work on `f64` and never panic on bad data: invalid input is
//! reported through [`MathError`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod interpolation;
pub mod optimization;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{
        CubicSpline, Interpolator, LinearInterpolator, LogLinearInterpolator, NelsonSiegel,
    };
    pub use crate::optimization::{
        LeastSquaresFit, LevenbergMarquardt, SolverConfig,
    };
}

pub use error::{MathError, MathResult};
