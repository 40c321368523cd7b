//! Event-processing state machine for the club simulator.
//!
//! This crate provides:
//! - [`InputEvent`] and [`OutputRecord`] - The two kinds of log line
//! - [`Violation`] - Business-rule violations reported as error records
//! - [`Engine`] - The per-day state machine and closing sweep
//! - [`DayReport`] - Per-table income and occupied time
//! - [`run_day`] - Drives an engine over a whole event sequence

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod day;
pub mod engine;
pub mod event;
pub mod report;
pub mod violation;

pub use day::{DayLog, LogLine, run_day};
pub use engine::{Engine, Step};
pub use event::{Action, InputEvent, OutputKind, OutputRecord};
pub use report::DayReport;
pub use violation::Violation;
