//! CLI command implementations.

pub mod bootstrap;
pub mod conventions;
pub mod dashboard;

pub use bootstrap::BootstrapArgs;
pub use conventions::ConventionsArgs;
pub use dashboard::DashboardArgs;

use zerocurve_curves::BootstrapMethod;

use crate::error::CliError;

/// Parses a method id (`linear`, `bloomberg`, `quantlib_log_cubic`, ...).
pub fn parse_method(s: &str) -> Result<BootstrapMethod, CliError> {
    s.parse().map_err(|_| {
        let ids: Vec<&str> = BootstrapMethod::ALL.iter().map(|m| m.id()).collect();
        CliError::UnknownMethod(s.to_string(), ids.join(", "))
    })
}
