//! Error types for the club simulator.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Everything here is fatal to a run: malformed input is rejected before the
//! engine starts, and the internal registry errors only surface if an
//! invariant has been broken. Business-rule violations are not errors at this
//! level; the engine turns them into output records.

use std::fmt;

use thiserror::Error;

use crate::table::TableNumber;
use crate::time::ClockTime;

/// Convenience alias used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The main error type for club simulator operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// The input line the error was found on, if any.
    pub line: Option<LineContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, line: None }
    }

    /// Attaches the offending input line to this error.
    #[must_use]
    pub fn at_line(mut self, number: usize, text: impl Into<String>) -> Self {
        self.line = Some(LineContext {
            number,
            text: text.into(),
        });
        self
    }

    /// Returns the raw offending input line, if the error came from one.
    #[must_use]
    pub fn line_text(&self) -> Option<&str> {
        self.line.as_ref().map(|l| l.text.as_str())
    }

    /// Creates an invalid time error.
    #[must_use]
    pub fn invalid_time(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidTime(text.into()))
    }

    /// Creates an invalid client name error.
    #[must_use]
    pub fn invalid_client_name(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidClientName(text.into()))
    }

    /// Creates an empty waiting queue error.
    #[must_use]
    pub fn empty_queue() -> Self {
        Self::new(ErrorKind::EmptyQueue)
    }

    /// Creates an I/O error with a description.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The input ended before a required header line.
    #[error("missing {0} line")]
    MissingLine(&'static str),

    /// A line had the wrong number of whitespace-separated fields.
    #[error("invalid field count for {what}: expected {expected}, got {actual}")]
    FieldCount {
        /// What the line describes.
        what: &'static str,
        /// Human-readable expected count.
        expected: &'static str,
        /// Number of fields found.
        actual: usize,
    },

    /// A field could not be parsed as an integer.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// A field could not be parsed as an `HH:MM` time.
    #[error("invalid time: {0:?}, expected HH:MM")]
    InvalidTime(String),

    /// A value that must be positive was zero or negative.
    #[error("invalid {field}: {value}, must be a positive integer")]
    NotPositive {
        /// Which configuration field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// Opening time is after closing time.
    #[error("opening time {opening} is after closing time {closing}")]
    ClosingBeforeOpening {
        /// Configured opening time.
        opening: ClockTime,
        /// Configured closing time.
        closing: ClockTime,
    },

    /// An event's timestamp precedes the previous event's timestamp.
    #[error("event at {current} is out of order: previous event was at {previous}")]
    EventOutOfOrder {
        /// Timestamp of the previous event.
        previous: ClockTime,
        /// Timestamp of the offending event.
        current: ClockTime,
    },

    /// The event code is not one the simulator knows.
    #[error("invalid event code: {0}")]
    UnknownEventCode(i64),

    /// A seat request without a table number.
    #[error("event code {0} requires a table number")]
    MissingTableNumber(u8),

    /// A table number on an event that does not take one.
    #[error("event code {0} does not take a table number")]
    UnexpectedTableNumber(u8),

    /// A table number outside `1..=count`.
    #[error("invalid table number: {number}, expected 1 <= table number <= {count}")]
    TableNumberOutOfRange {
        /// The rejected table number.
        number: i64,
        /// Number of tables in the club.
        count: u32,
    },

    /// A client name with characters outside `[a-z0-9_-]`.
    #[error("invalid client name: {0:?}, must only contain characters from [a-z0-9_-]")]
    InvalidClientName(String),

    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// A process-level setting (command line or environment) is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Serializing or deserializing a report failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Dequeue from an empty waiting queue.
    #[error("waiting queue is empty")]
    EmptyQueue,

    /// Assigning a table that is already occupied.
    #[error("table {0} is already occupied")]
    TableOccupied(TableNumber),

    /// Charging a table that is not occupied.
    #[error("table {0} is not occupied")]
    TableNotOccupied(TableNumber),

    /// A table number the registry does not hold.
    #[error("table {table} does not exist (club has {count} tables)")]
    TableOutOfRange {
        /// The requested table.
        table: TableNumber,
        /// Number of tables in the registry.
        count: usize,
    },
}

/// The input line an error was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineContext {
    /// Line number (1-indexed).
    pub number: usize,
    /// The raw line, whitespace-trimmed.
    pub text: String,
}

impl fmt::Display for LineContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.number, self.text)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}
