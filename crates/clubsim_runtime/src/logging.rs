//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing-subscriber`; stdout is reserved
//! for the day log. The filter is read from `CLUBSIM_LOG` using the usual
//! `EnvFilter` directive syntax (e.g. `clubsim_engine=debug`).

use clubsim_foundation::{Error, ErrorKind, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CLUBSIM_LOG";

/// Level used when `CLUBSIM_LOG` is unset.
pub const DEFAULT_LEVEL: &str = "warn";

/// Builds the filter from `CLUBSIM_LOG`, falling back to `default_level`.
///
/// # Errors
/// Returns an error if neither the environment nor `default_level` holds a
/// valid directive.
pub fn build_filter(default_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| {
            Error::new(ErrorKind::Config(format!(
                "invalid log filter '{default_level}': {e}"
            )))
        })
}

/// Installs the global `tracing` subscriber.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
///
/// # Errors
/// Returns an error if the filter is invalid.
pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = build_filter(default_level)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init();
    Ok(())
}
