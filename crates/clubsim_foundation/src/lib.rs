//! Core types, configuration, and errors for the club simulator.
//!
//! This crate provides:
//! - [`ClockTime`] and [`Minutes`] - Minute-resolution, same-day time values
//! - [`ClientName`] - Validated client identifiers
//! - [`TableNumber`] - 1-based table numbers
//! - [`ClubConfig`] - Immutable per-run club configuration
//! - [`Error`] - Error types with input-line context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod client;
pub mod config;
pub mod error;
pub mod table;
pub mod time;

pub use client::ClientName;
pub use config::ClubConfig;
pub use error::{Error, ErrorKind, LineContext, Result};
pub use table::TableNumber;
pub use time::{ClockTime, Minutes};
