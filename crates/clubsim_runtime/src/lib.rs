//! CLI, logging, and report export for the club simulator.
//!
//! This crate provides:
//! - [`CliConfig`] - Command-line options
//! - [`run`] - Parse an input file, simulate the day, print the log
//! - [`init_logging`] - `tracing` subscriber setup
//! - Report serialization and deserialization ([`export`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod export;
pub mod logging;

pub use cli::{CliConfig, run};
pub use logging::init_logging;
