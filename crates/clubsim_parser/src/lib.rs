//! Input log scanning and validation for the club simulator.
//!
//! Turns the raw text of a day's input into a [`ClubConfig`] and a
//! sequence of validated [`InputEvent`]s. Any problem here is fatal to the
//! run and carries the offending line.
//!
//! # Input format
//!
//! ```text
//! 3                  <- number of tables
//! 09:00 19:00        <- opening and closing time
//! 10                 <- price per started hour
//! 08:48 1 client1    <- events: time, code, client, [table]
//! 09:48 2 client1 1
//! ```
//!
//! # Modules
//!
//! - [`fields`] - Single-field parsers
//! - [`scanner`] - Line-by-line scanning of header and events
//!
//! [`ClubConfig`]: clubsim_foundation::ClubConfig
//! [`InputEvent`]: clubsim_engine::InputEvent

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fields;
pub mod scanner;

pub use scanner::{ClubInput, parse_file, parse_str};
