//! Zerocurve Configuration Layer
//!
//! Serializable settings for the bootstrapping engine and the provider
//! cache, with validation and JSON/TOML loading.
//!
//! # Example
//!
//! ```rust
//! use zerocurve_config::{CurveSettings, Validate};
//!
//! let settings = CurveSettings::default()
//!     .with_tenor_epsilon(0.0)
//!     .with_extra_tenors([0.5]);
//! assert!(settings.is_valid());
//!
//! let parsed = CurveSettings::from_toml_str("tenor_epsilon = 0.01").unwrap();
//! assert_eq!(parsed.tenor_epsilon, 0.01);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod settings;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use settings::{
    CacheSettings, ConventionOverride, CurveSettings, ExportSettings, NelsonSiegelSettings,
    ReportingSettings, DEFAULT_STALENESS_SECS, DEFAULT_TENOR_EPSILON,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
    pub use crate::settings::{
        CacheSettings, ConventionOverride, CurveSettings, ExportSettings, NelsonSiegelSettings,
        ReportingSettings,
    };
}
