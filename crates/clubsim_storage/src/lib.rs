//! Table and client registries for the club simulator.
//!
//! This crate provides:
//! - [`TableRegistry`] - Fixed set of tables with occupancy and billing
//! - [`ClientRegistry`] - Present clients, their seats, and the waiting queue
//!
//! Both registries are owned by a single engine for the duration of one run.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod client;
pub mod table;

pub use client::{ClientRegistry, ClientStatus};
pub use table::{Charge, Table, TableRegistry, TableReport};
