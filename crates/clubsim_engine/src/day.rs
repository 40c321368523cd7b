//! Running a whole day.
//!
//! [`run_day`] drives a fresh [`Engine`] over an event sequence and collects
//! everything the presentation layer prints: the echoed events interleaved
//! with their derived records, the closing sweep, and the report.

use std::fmt;

use clubsim_foundation::{ClockTime, ClubConfig, Result};
use tracing::info;

use crate::engine::{Engine, Step};
use crate::event::{InputEvent, OutputRecord};
use crate::report::DayReport;

/// One line of the day log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogLine {
    /// An input event, echoed as received.
    Event(InputEvent),
    /// A record derived from the preceding event.
    Record(OutputRecord),
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event(event) => event.fmt(f),
            Self::Record(record) => record.fmt(f),
        }
    }
}

/// Everything a simulated day produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayLog {
    /// Opening time.
    pub opening: ClockTime,
    /// Consumed events and their derived records, in order.
    pub lines: Vec<LogLine>,
    /// Forced departures from the closing sweep.
    pub closing_departures: Vec<OutputRecord>,
    /// Closing time.
    pub closing: ClockTime,
    /// End-of-day table report.
    pub report: DayReport,
}

impl DayLog {
    /// Returns the number of input events the engine consumed.
    #[must_use]
    pub fn consumed_events(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, LogLine::Event(_)))
            .count()
    }

    /// Iterates over all derived records, including the closing sweep.
    pub fn records(&self) -> impl Iterator<Item = &OutputRecord> + '_ {
        self.lines
            .iter()
            .filter_map(|line| match line {
                LogLine::Record(record) => Some(record),
                LogLine::Event(_) => None,
            })
            .chain(&self.closing_departures)
    }
}

/// Renders the full day log, one item per line.
impl fmt::Display for DayLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.opening)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        for record in &self.closing_departures {
            writeln!(f, "{record}")?;
        }
        writeln!(f, "{}", self.closing)?;
        write!(f, "{}", self.report)
    }
}

/// Simulates one day.
///
/// Events are processed in order until they run out or one falls after
/// closing time; that event and everything after it is dropped from the log.
/// The closing sweep then runs and the report is taken.
///
/// # Errors
/// Returns an error only if a registry invariant is broken, which cannot
/// happen for events that passed input validation.
#[tracing::instrument(skip_all, fields(tables = config.table_count(), events = events.len()))]
pub fn run_day(config: &ClubConfig, events: &[InputEvent]) -> Result<DayLog> {
    let mut engine = Engine::new(config.clone());
    let mut lines = Vec::with_capacity(events.len());

    for event in events {
        match engine.handle(event)? {
            Step::Closed => break,
            Step::Continue(record) => {
                lines.push(LogLine::Event(event.clone()));
                if let Some(record) = record {
                    lines.push(LogLine::Record(record));
                }
            }
        }
    }

    let closing_departures = engine.close()?;
    let report = engine.report();
    info!(
        departures = closing_departures.len(),
        income = report.total_income(),
        "day closed"
    );

    Ok(DayLog {
        opening: config.opening(),
        lines,
        closing_departures,
        closing: config.closing(),
        report,
    })
}
