//! Command-line options and the top-level run.

use std::io::Write;
use std::path::PathBuf;

use clubsim_engine::{DayLog, run_day};
use clubsim_foundation::{Error, ErrorKind, Result};
use tracing::info;

use crate::export::save_report;
use crate::logging::DEFAULT_LEVEL;

/// CLI configuration parsed from arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Input file with the day's header and events.
    pub input: Option<PathBuf>,
    /// Where to export the end-of-day report, if anywhere.
    pub report: Option<PathBuf>,
    /// Log level used when `CLUBSIM_LOG` is unset.
    pub log_level: String,
    /// Print usage and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: None,
            report: None,
            log_level: DEFAULT_LEVEL.to_string(),
            show_help: false,
            show_version: false,
        }
    }
}

impl CliConfig {
    /// Parses arguments, not including the program name.
    ///
    /// # Errors
    /// Returns [`ErrorKind::Config`] for unknown options, missing option
    /// values, or more than one input file.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "--report" => {
                    let path = args
                        .next()
                        .ok_or_else(|| config_error("--report requires a path"))?;
                    config.report = Some(PathBuf::from(path));
                }
                "--log-level" => {
                    config.log_level = args
                        .next()
                        .ok_or_else(|| config_error("--log-level requires a value"))?;
                }
                flag if flag.starts_with('-') => {
                    return Err(config_error(format!("unknown option: {flag}")));
                }
                _ if config.input.is_some() => {
                    return Err(config_error(format!("unexpected extra argument: {arg}")));
                }
                _ => config.input = Some(PathBuf::from(arg)),
            }
        }

        Ok(config)
    }
}

fn config_error(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::Config(message.into()))
}

/// Simulates the day described by the input file and writes the log to
/// `out`. Exports the report if requested.
///
/// # Errors
/// Returns the parse error for malformed input (with the offending line
/// attached), or an I/O error if writing fails.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<DayLog> {
    let input = config
        .input
        .as_ref()
        .ok_or_else(|| config_error("missing input file"))?;

    let club = clubsim_parser::parse_file(input)?;
    info!(
        input = %input.display(),
        tables = club.config.table_count(),
        events = club.events.len(),
        "simulating day"
    );

    let log = run_day(&club.config, &club.events)?;
    write!(out, "{log}")
        .and_then(|()| out.flush())
        .map_err(|e| Error::io(format!("failed to write output: {e}")))?;

    if let Some(path) = &config.report {
        save_report(&log.report, path)?;
        info!(report = %path.display(), "report exported");
    }

    Ok(log)
}

/// Returns the usage text.
#[must_use]
pub fn help_text() -> String {
    format!(
        "clubsim {} - computer club day simulator

USAGE:
    clubsim [OPTIONS] <INPUT>

ARGUMENTS:
    <INPUT>              Input file: table count, opening/closing time,
                         hourly price, then one event per line

OPTIONS:
    -h, --help           Print help information
    -V, --version        Print version information
    --report <PATH>      Also write the end-of-day report as MessagePack
    --log-level <LEVEL>  Log level when CLUBSIM_LOG is unset (default: {DEFAULT_LEVEL})

ENVIRONMENT:
    CLUBSIM_LOG          tracing filter directives, e.g. clubsim_engine=debug",
        env!("CARGO_PKG_VERSION")
    )
}
