//! Clubsim - Computer club day simulator
//!
//! This crate re-exports all layers of the simulator for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: clubsim_runtime    - CLI, logging, report export
//! Layer 3: clubsim_parser     - Input file scanner and field validation
//! Layer 2: clubsim_engine     - Event state machine, closing sweep, day report
//! Layer 1: clubsim_storage    - Table registry, client registry and queue
//! Layer 0: clubsim_foundation - Core types (ClockTime, ClientName, Error)
//! ```

pub use clubsim_engine as engine;
pub use clubsim_foundation as foundation;
pub use clubsim_parser as parser;
pub use clubsim_runtime as runtime;
pub use clubsim_storage as storage;
