//! Input events and derived output records.
//!
//! Both render as `<HH:MM> <code> <payload>`, which is the line format of
//! the day log.

use std::fmt;

use clubsim_foundation::{ClientName, ClockTime, TableNumber};

use crate::violation::Violation;

/// Numeric event codes as they appear in the log.
pub mod code {
    /// A client arrives.
    pub const ARRIVE: u8 = 1;
    /// A client sits at a table.
    pub const SIT: u8 = 2;
    /// A client waits for a table.
    pub const WAIT: u8 = 3;
    /// A client leaves.
    pub const LEAVE: u8 = 4;
    /// A client was made to leave.
    pub const FORCED_LEAVE: u8 = 11;
    /// A waiting client was seated.
    pub const SEATED_FROM_QUEUE: u8 = 12;
    /// A business rule was violated.
    pub const ERROR: u8 = 13;
}

// =============================================================================
// Input Event
// =============================================================================

/// What an input event asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// The client enters the club.
    Arrive,
    /// The client takes the given table.
    Sit(TableNumber),
    /// The client waits for the next free table.
    Wait,
    /// The client leaves the club.
    Leave,
    /// A code the parser let through but the engine does not act on.
    Unrecognized(u8),
}

impl Action {
    /// Returns the numeric code for this action.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Arrive => code::ARRIVE,
            Self::Sit(_) => code::SIT,
            Self::Wait => code::WAIT,
            Self::Leave => code::LEAVE,
            Self::Unrecognized(code) => code,
        }
    }
}

/// A validated client event from the input log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputEvent {
    /// When the event happened.
    pub time: ClockTime,
    /// Who it concerns.
    pub client: ClientName,
    /// What was requested.
    pub action: Action,
}

impl InputEvent {
    /// Creates an input event.
    #[must_use]
    pub fn new(time: ClockTime, client: ClientName, action: Action) -> Self {
        Self {
            time,
            client,
            action,
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.time, self.action.code(), self.client)?;
        if let Action::Sit(table) = self.action {
            write!(f, " {table}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Output Record
// =============================================================================

/// What a derived record reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputKind {
    /// The client left without asking to: queue overflow or closing time.
    ForcedDeparture(ClientName),
    /// A waiting client took a freed table.
    SeatedFromQueue {
        /// The client that was seated.
        client: ClientName,
        /// The table it took.
        table: TableNumber,
    },
    /// A business rule was violated; the event had no effect.
    Error(Violation),
}

impl OutputKind {
    /// Returns the numeric code for this record.
    #[must_use]
    pub fn code(&self) -> u8 {
        match self {
            Self::ForcedDeparture(_) => code::FORCED_LEAVE,
            Self::SeatedFromQueue { .. } => code::SEATED_FROM_QUEUE,
            Self::Error(_) => code::ERROR,
        }
    }
}

/// A record derived by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputRecord {
    /// When it happened.
    pub time: ClockTime,
    /// What happened.
    pub kind: OutputKind,
}

impl OutputRecord {
    /// Creates a forced departure record.
    #[must_use]
    pub fn forced_departure(time: ClockTime, client: ClientName) -> Self {
        Self {
            time,
            kind: OutputKind::ForcedDeparture(client),
        }
    }

    /// Creates a seated-from-queue record.
    #[must_use]
    pub fn seated_from_queue(time: ClockTime, client: ClientName, table: TableNumber) -> Self {
        Self {
            time,
            kind: OutputKind::SeatedFromQueue { client, table },
        }
    }

    /// Creates an error record.
    #[must_use]
    pub fn error(time: ClockTime, violation: Violation) -> Self {
        Self {
            time,
            kind: OutputKind::Error(violation),
        }
    }

    /// Returns the violation if this is an error record.
    #[must_use]
    pub fn violation(&self) -> Option<&Violation> {
        match &self.kind {
            OutputKind::Error(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.time, self.kind.code())?;
        match &self.kind {
            OutputKind::ForcedDeparture(client) => write!(f, "{client}"),
            OutputKind::SeatedFromQueue { client, table } => write!(f, "{client} {table}"),
            OutputKind::Error(violation) => write!(f, "{violation}"),
        }
    }
}
