//! Business-rule violations.
//!
//! These never abort a run; the engine reports each one as an error record
//! and moves on to the next event.

use thiserror::Error;

/// A rejected client request. `Display` renders the log identifier.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    /// The client is already in the club.
    #[error("AlreadyActive")]
    AlreadyActive,
    /// The club is not open at this time.
    #[error("OutsideHours")]
    OutsideHours,
    /// The client is not in the club.
    #[error("UnknownClient")]
    UnknownClient,
    /// The requested table is taken.
    #[error("TableBusy")]
    TableBusy,
    /// The client asked to wait while a table is free.
    #[error("ExtraWait")]
    ExtraWait,
    /// The event code is not a client request.
    #[error("Unexpected incoming event ID: {0}")]
    UnexpectedEvent(u8),
}
