//! Single-field parsers.
//!
//! Each parser checks one whitespace-separated field. Errors carry no line
//! context; the scanner attaches it.

use clubsim_engine::event::code;
use clubsim_foundation::{ClientName, ClockTime, Error, ErrorKind, Result, TableNumber};

/// Parses a signed integer.
///
/// # Errors
/// Returns [`ErrorKind::InvalidNumber`] if the field is not an integer.
pub fn parse_int(text: &str) -> Result<i64> {
    text.parse()
        .map_err(|_| Error::new(ErrorKind::InvalidNumber(text.to_string())))
}

/// Parses a strictly positive integer that fits in a `u32`.
///
/// # Errors
/// Returns [`ErrorKind::NotPositive`] for zero or negative values and
/// [`ErrorKind::InvalidNumber`] for anything that is not a `u32`.
pub fn parse_positive(field: &'static str, text: &str) -> Result<u32> {
    let value = parse_int(text)?;
    if value <= 0 {
        return Err(Error::new(ErrorKind::NotPositive { field, value }));
    }
    u32::try_from(value).map_err(|_| Error::new(ErrorKind::InvalidNumber(text.to_string())))
}

/// Parses an `HH:MM` time.
///
/// # Errors
/// Returns [`ErrorKind::InvalidTime`] for malformed times.
pub fn parse_time(text: &str) -> Result<ClockTime> {
    ClockTime::parse(text)
}

/// Parses an event code.
///
/// Client request codes (1-4) are accepted, and so are the outgoing codes
/// (11-13), which the engine reports as unexpected.
///
/// # Errors
/// Returns [`ErrorKind::UnknownEventCode`] for any other number.
pub fn parse_event_code(text: &str) -> Result<u8> {
    let value = parse_int(text)?;
    let accepted = (i64::from(code::ARRIVE)..=i64::from(code::LEAVE)).contains(&value)
        || (i64::from(code::FORCED_LEAVE)..=i64::from(code::ERROR)).contains(&value);
    if !accepted {
        return Err(Error::new(ErrorKind::UnknownEventCode(value)));
    }
    u8::try_from(value).map_err(|_| Error::new(ErrorKind::UnknownEventCode(value)))
}

/// Parses a client name.
///
/// # Errors
/// Returns [`ErrorKind::InvalidClientName`] for names outside `[a-z0-9_-]+`.
pub fn parse_client(text: &str) -> Result<ClientName> {
    ClientName::new(text)
}

/// Parses a table number in `1..=table_count`.
///
/// # Errors
/// Returns [`ErrorKind::InvalidNumber`] if the field is not an integer and
/// [`ErrorKind::TableNumberOutOfRange`] if it names no table.
pub fn parse_table(text: &str, table_count: u32) -> Result<TableNumber> {
    let number = parse_int(text)?;
    u32::try_from(number)
        .ok()
        .filter(|n| *n <= table_count)
        .and_then(TableNumber::new)
        .ok_or_else(|| {
            Error::new(ErrorKind::TableNumberOutOfRange {
                number,
                count: table_count,
            })
        })
}
