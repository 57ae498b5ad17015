//! Engine settings.
//!
//! Every field has a default, so an empty JSON object or TOML document is a
//! valid settings file. A TOML file overriding a few values looks like:
//!
//! ```toml
//! tenor_epsilon = 0.0
//!
//! [reporting]
//! extra_tenors = [0.5, 1.5]
//!
//! [nelson_siegel]
//! max_iterations = 500
//!
//! [conventions.AUD]
//! day_count = "Act365Fixed"
//! frequency = "Quarterly"
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use zerocurve_core::{DayCountConvention, Frequency};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

// =============================================================================
// DEFAULTS
// =============================================================================

/// One calendar day, in years.
pub const DEFAULT_TENOR_EPSILON: f64 = 1.0 / 365.0;

/// Default provider cache staleness window (30 minutes).
pub const DEFAULT_STALENESS_SECS: u64 = 30 * 60;

fn default_tenor_epsilon() -> f64 {
    DEFAULT_TENOR_EPSILON
}

fn default_true() -> bool {
    true
}

fn default_ns_max_iterations() -> u32 {
    200
}

fn default_ns_tolerance() -> f64 {
    1e-12
}

fn default_ns_min_initial_tau() -> f64 {
    0.25
}

fn default_tenor_decimals() -> usize {
    4
}

fn default_discount_factor_decimals() -> usize {
    8
}

fn default_zero_rate_decimals() -> usize {
    6
}

fn default_staleness_secs() -> u64 {
    DEFAULT_STALENESS_SECS
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Which tenors a bootstrapped curve is sampled at.
///
/// Input tenors are always included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportingSettings {
    /// Also sample every whole year from 1 up to the longest input tenor.
    #[serde(default = "default_true")]
    pub whole_years: bool,

    /// Additional tenors (years); those beyond the longest input are ignored.
    #[serde(default)]
    pub extra_tenors: Vec<f64>,
}

impl Default for ReportingSettings {
    fn default() -> Self {
        Self {
            whole_years: true,
            extra_tenors: Vec::new(),
        }
    }
}

/// Levenberg-Marquardt budget for the Nelson-Siegel fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NelsonSiegelSettings {
    /// Iteration budget; exhausting it is a fit divergence.
    #[serde(default = "default_ns_max_iterations")]
    pub max_iterations: u32,

    /// Convergence tolerance on the residual sum and step size.
    #[serde(default = "default_ns_tolerance")]
    pub tolerance: f64,

    /// Lower bound on the initial decay factor τ, in years.
    #[serde(default = "default_ns_min_initial_tau")]
    pub min_initial_tau: f64,
}

impl Default for NelsonSiegelSettings {
    fn default() -> Self {
        Self {
            max_iterations: default_ns_max_iterations(),
            tolerance: default_ns_tolerance(),
            min_initial_tau: default_ns_min_initial_tau(),
        }
    }
}

/// Decimal places used when writing CSV exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Decimals for tenors.
    #[serde(default = "default_tenor_decimals")]
    pub tenor_decimals: usize,

    /// Decimals for discount factors.
    #[serde(default = "default_discount_factor_decimals")]
    pub discount_factor_decimals: usize,

    /// Decimals for zero rates (percent).
    #[serde(default = "default_zero_rate_decimals")]
    pub zero_rate_decimals: usize,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            tenor_decimals: default_tenor_decimals(),
            discount_factor_decimals: default_discount_factor_decimals(),
            zero_rate_decimals: default_zero_rate_decimals(),
        }
    }
}

/// Replacement basis convention for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionOverride {
    /// Day count label.
    pub day_count: DayCountConvention,
    /// Compounding frequency.
    pub frequency: Frequency,
}

/// Provider cache settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Seconds after which a cached provider response is refetched.
    #[serde(default = "default_staleness_secs")]
    pub staleness_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            staleness_secs: DEFAULT_STALENESS_SECS,
        }
    }
}

impl CacheSettings {
    /// The staleness window as a [`Duration`].
    pub fn staleness(&self) -> Duration {
        Duration::from_secs(self.staleness_secs)
    }
}

// =============================================================================
// CURVE SETTINGS
// =============================================================================

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSettings {
    /// Tenors closer than this (years) are treated as the same maturity.
    /// `0.0` merges exact matches only.
    #[serde(default = "default_tenor_epsilon")]
    pub tenor_epsilon: f64,

    /// Reporting grid.
    #[serde(default)]
    pub reporting: ReportingSettings,

    /// Nelson-Siegel fit budget.
    #[serde(default)]
    pub nelson_siegel: NelsonSiegelSettings,

    /// CSV precision.
    #[serde(default)]
    pub export: ExportSettings,

    /// Per-currency convention overrides, keyed by upper-case ISO code.
    #[serde(default)]
    pub conventions: BTreeMap<String, ConventionOverride>,

    /// Provider cache.
    #[serde(default)]
    pub cache: CacheSettings,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            tenor_epsilon: DEFAULT_TENOR_EPSILON,
            reporting: ReportingSettings::default(),
            nelson_siegel: NelsonSiegelSettings::default(),
            export: ExportSettings::default(),
            conventions: BTreeMap::new(),
            cache: CacheSettings::default(),
        }
    }
}

impl CurveSettings {
    /// Sets the tenor epsilon.
    #[must_use]
    pub fn with_tenor_epsilon(mut self, epsilon: f64) -> Self {
        self.tenor_epsilon = epsilon;
        self
    }

    /// Adds extra reporting tenors.
    #[must_use]
    pub fn with_extra_tenors(mut self, tenors: impl IntoIterator<Item = f64>) -> Self {
        self.reporting.extra_tenors.extend(tenors);
        self
    }

    /// Sets the Nelson-Siegel iteration budget.
    #[must_use]
    pub fn with_nelson_siegel_iterations(mut self, max_iterations: u32) -> Self {
        self.nelson_siegel.max_iterations = max_iterations;
        self
    }

    /// Overrides the convention of one currency.
    #[must_use]
    pub fn with_convention(
        mut self,
        currency: &str,
        day_count: DayCountConvention,
        frequency: Frequency,
    ) -> Self {
        self.conventions.insert(
            currency.to_ascii_uppercase(),
            ConventionOverride {
                day_count,
                frequency,
            },
        );
        self
    }

    /// Case-insensitive lookup of a convention override.
    pub fn convention_override(&self, currency: &str) -> Option<&ConventionOverride> {
        self.conventions.get(&currency.trim().to_ascii_uppercase())
    }

    /// Parses settings from a JSON document and validates them.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate_or_error()?;
        Ok(settings)
    }

    /// Parses settings from a TOML document and validates them.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.validate_or_error()?;
        Ok(settings)
    }

    /// Serializes the settings as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serializes the settings as pretty JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads and validates settings from a `.json` or `.toml` file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = match extension.as_str() {
            "json" => Self::from_json_str(&text)?,
            "toml" => Self::from_toml_str(&text)?,
            _ => return Err(ConfigError::UnsupportedFormat { extension }),
        };

        debug!("loaded curve settings from {}", path.display());
        Ok(settings)
    }
}

impl Validate for CurveSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.tenor_epsilon.is_finite() || !(0.0..1.0).contains(&self.tenor_epsilon) {
            errors.push(ValidationError::new(
                "tenor_epsilon",
                format!("must be in [0, 1) years, got {}", self.tenor_epsilon),
            ));
        }

        for tenor in &self.reporting.extra_tenors {
            if !tenor.is_finite() || *tenor <= 0.0 {
                errors.push(ValidationError::new(
                    "reporting.extra_tenors",
                    format!("tenors must be positive, got {tenor}"),
                ));
            }
        }

        let ns = &self.nelson_siegel;
        if ns.max_iterations == 0 {
            errors.push(ValidationError::new(
                "nelson_siegel.max_iterations",
                "must be at least 1",
            ));
        }
        if !ns.tolerance.is_finite() || ns.tolerance <= 0.0 {
            errors.push(ValidationError::new(
                "nelson_siegel.tolerance",
                "must be positive",
            ));
        }
        if !ns.min_initial_tau.is_finite() || ns.min_initial_tau <= 0.0 {
            errors.push(ValidationError::new(
                "nelson_siegel.min_initial_tau",
                "must be positive",
            ));
        }

        for (field, decimals) in [
            ("export.tenor_decimals", self.export.tenor_decimals),
            (
                "export.discount_factor_decimals",
                self.export.discount_factor_decimals,
            ),
            ("export.zero_rate_decimals", self.export.zero_rate_decimals),
        ] {
            if decimals > 15 {
                errors.push(ValidationError::new(field, "at most 15 decimals"));
            }
        }

        for code in self.conventions.keys() {
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
                errors.push(ValidationError::new(
                    format!("conventions.{code}"),
                    "currency must be a three-letter upper-case ISO code",
                ));
            }
        }

        if self.cache.staleness_secs == 0 {
            errors.push(ValidationError::new(
                "cache.staleness_secs",
                "must be positive",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = CurveSettings::default();
        assert!((settings.tenor_epsilon - 1.0 / 365.0).abs() < 1e-15);
        assert!(settings.reporting.whole_years);
        assert_eq!(settings.nelson_siegel.max_iterations, 200);
        assert_eq!(settings.export.discount_factor_decimals, 8);
        assert_eq!(settings.cache.staleness(), Duration::from_secs(1800));
        assert!(settings.is_valid());
    }

    #[test]
    fn test_empty_documents_use_defaults() {
        assert_eq!(CurveSettings::from_json_str("{}").unwrap(), CurveSettings::default());
        assert_eq!(CurveSettings::from_toml_str("").unwrap(), CurveSettings::default());
    }

    #[test]
    fn test_partial_toml() {
        let text = r#"
            tenor_epsilon = 0.0

            [reporting]
            extra_tenors = [0.5, 1.5]

            [conventions.AUD]
            day_count = "Act365Fixed"
            frequency = "Quarterly"
        "#;
        let settings = CurveSettings::from_toml_str(text).unwrap();

        assert_eq!(settings.tenor_epsilon, 0.0);
        assert_eq!(settings.reporting.extra_tenors, vec![0.5, 1.5]);
        assert!(settings.reporting.whole_years);
        let aud = settings.convention_override("aud").unwrap();
        assert_eq!(aud.day_count, DayCountConvention::Act365Fixed);
        assert_eq!(aud.frequency, Frequency::Quarterly);
    }

    #[test]
    fn test_validation_errors() {
        let mut settings = CurveSettings::default().with_tenor_epsilon(-1.0);
        settings.cache.staleness_secs = 0;
        settings.reporting.extra_tenors.push(f64::NAN);
        settings.conventions.insert(
            "usd".to_string(),
            ConventionOverride {
                day_count: DayCountConvention::Act360,
                frequency: Frequency::Annual,
            },
        );

        let errors = settings.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"tenor_epsilon"));
        assert!(fields.contains(&"cache.staleness_secs"));
        assert!(fields.contains(&"reporting.extra_tenors"));
        assert!(fields.contains(&"conventions.usd"));
        assert!(matches!(
            settings.validate_or_error(),
            Err(ConfigError::MultipleValidationErrors(_))
        ));
    }

    #[test]
    fn test_invalid_document_rejected() {
        assert!(matches!(
            CurveSettings::from_json_str(r#"{"nelson_siegel": {"max_iterations": 0}}"#),
            Err(ConfigError::Validation { .. })
        ));
        assert!(matches!(
            CurveSettings::from_json_str("{not json"),
            Err(ConfigError::Deserialization(_))
        ));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("settings.json");
        std::fs::File::create(&json_path)
            .unwrap()
            .write_all(br#"{"reporting": {"whole_years": false}}"#)
            .unwrap();
        let settings = CurveSettings::load(&json_path).unwrap();
        assert!(!settings.reporting.whole_years);

        let toml_path = dir.path().join("settings.toml");
        let text = CurveSettings::default()
            .with_nelson_siegel_iterations(50)
            .to_toml_string()
            .unwrap();
        std::fs::write(&toml_path, text).unwrap();
        let settings = CurveSettings::load(&toml_path).unwrap();
        assert_eq!(settings.nelson_siegel.max_iterations, 50);

        let yaml_path = dir.path().join("settings.yaml");
        std::fs::write(&yaml_path, "tenor_epsilon: 0").unwrap();
        assert!(matches!(
            CurveSettings::load(&yaml_path),
            Err(ConfigError::UnsupportedFormat { .. })
        ));

        assert!(matches!(
            CurveSettings::load(dir.path().join("missing.json")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = CurveSettings::default()
            .with_extra_tenors([0.75])
            .with_convention("cad", DayCountConvention::Act360, Frequency::Annual);
        let text = settings.to_json_string().unwrap();
        assert_eq!(CurveSettings::from_json_str(&text).unwrap(), settings);
    }
}
