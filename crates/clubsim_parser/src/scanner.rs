//! Line-by-line scanning of the input log.
//!
//! The first three lines form the header (table count, opening and closing
//! time, hourly price); every following line is one event. Lines are
//! whitespace-trimmed and trailing blank lines are ignored.

use std::path::Path;

use clubsim_engine::event::code;
use clubsim_engine::{Action, InputEvent};
use clubsim_foundation::{ClockTime, ClubConfig, Error, ErrorKind, Result};
use tracing::debug;

use crate::fields::{
    parse_client, parse_event_code, parse_positive, parse_table, parse_time,
};

/// A fully validated day of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClubInput {
    /// Club configuration from the header.
    pub config: ClubConfig,
    /// Events in input order, with non-decreasing timestamps.
    pub events: Vec<InputEvent>,
}

/// Reads and parses an input file.
///
/// # Errors
/// Returns [`ErrorKind::Io`] if the file cannot be read, or any parse error
/// from [`parse_str`].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ClubInput> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read '{}': {e}", path.display())))?;
    parse_str(&text)
}

/// Parses the text of a day's input.
///
/// # Errors
/// Returns the first problem found. Line-level errors carry the line
/// number and the trimmed line text.
pub fn parse_str(input: &str) -> Result<ClubInput> {
    let mut lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .collect();
    while lines.last().is_some_and(|(_, line)| line.is_empty()) {
        lines.pop();
    }

    let mut scanner = Scanner {
        lines: lines.into_iter(),
        next_number: 1,
    };
    let config = scanner.header()?;
    let events = scanner.events(&config)?;
    debug!(
        tables = config.table_count(),
        events = events.len(),
        "input parsed"
    );

    Ok(ClubInput { config, events })
}

struct Scanner<'a> {
    lines: std::vec::IntoIter<(usize, &'a str)>,
    /// Number of the line that would come next; used for missing lines.
    next_number: usize,
}

impl<'a> Scanner<'a> {
    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let line = self.lines.next()?;
        self.next_number = line.0 + 1;
        Some(line)
    }

    /// Returns the fields of the next header line.
    fn header_line(&mut self, what: &'static str) -> Result<(usize, &'a str, Vec<&'a str>)> {
        let (number, line) = self
            .next_line()
            .ok_or_else(|| Error::new(ErrorKind::MissingLine(what)).at_line(self.next_number, ""))?;
        Ok((number, line, line.split_whitespace().collect()))
    }

    fn header(&mut self) -> Result<ClubConfig> {
        let (number, line, fields) = self.header_line("number of tables")?;
        let table_count = match fields.as_slice() {
            [count] => parse_positive("number of tables", count),
            _ => Err(field_count("number of tables", "1", fields.len())),
        }
        .map_err(|e| e.at_line(number, line))?;

        let (number, line, fields) = self.header_line("opening and closing times")?;
        let (opening, closing) = match fields.as_slice() {
            [opening, closing] => parse_time(opening)
                .and_then(|opening| parse_time(closing).map(|closing| (opening, closing))),
            _ => Err(field_count("opening and closing times", "2", fields.len())),
        }
        .map_err(|e| e.at_line(number, line))?;
        if opening > closing {
            return Err(
                Error::new(ErrorKind::ClosingBeforeOpening { opening, closing }).at_line(number, line),
            );
        }

        let (number, line, fields) = self.header_line("price per hour")?;
        let price = match fields.as_slice() {
            [price] => parse_positive("price per hour", price),
            _ => Err(field_count("price per hour", "1", fields.len())),
        }
        .map_err(|e| e.at_line(number, line))?;

        ClubConfig::new(table_count, opening, closing, price).map_err(|e| e.at_line(number, line))
    }

    fn events(&mut self, config: &ClubConfig) -> Result<Vec<InputEvent>> {
        let mut events: Vec<InputEvent> = Vec::new();
        while let Some((number, line)) = self.next_line() {
            let previous = events.last().map(|e| e.time);
            let event = scan_event(line, previous, config).map_err(|e| e.at_line(number, line))?;
            events.push(event);
        }
        Ok(events)
    }
}

fn scan_event(line: &str, previous: Option<ClockTime>, config: &ClubConfig) -> Result<InputEvent> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(field_count("event", "3 or 4", fields.len()));
    }

    let time = parse_time(fields[0])?;
    if let Some(previous) = previous {
        if time < previous {
            return Err(Error::new(ErrorKind::EventOutOfOrder {
                previous,
                current: time,
            }));
        }
    }
    let event_code = parse_event_code(fields[1])?;
    let client = parse_client(fields[2])?;
    let table_field = fields.get(3).copied();

    let action = match event_code {
        code::SIT => {
            let table = table_field
                .ok_or_else(|| Error::new(ErrorKind::MissingTableNumber(event_code)))?;
            Action::Sit(parse_table(table, config.table_count())?)
        }
        _ if table_field.is_some() => {
            return Err(Error::new(ErrorKind::UnexpectedTableNumber(event_code)));
        }
        code::ARRIVE => Action::Arrive,
        code::WAIT => Action::Wait,
        code::LEAVE => Action::Leave,
        other => Action::Unrecognized(other),
    };

    Ok(InputEvent::new(time, client, action))
}

fn field_count(what: &'static str, expected: &'static str, actual: usize) -> Error {
    Error::new(ErrorKind::FieldCount {
        what,
        expected,
        actual,
    })
}
