//! Minute-resolution, same-day time values.
//!
//! All timestamps in a run are logical wall-clock times within one day.
//! There is no date and no timezone; `00:00` is the earliest representable
//! time and `23:59` the latest.

use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// A time of day, stored as minutes since midnight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight, the earliest time of the day.
    pub const MIDNIGHT: Self = Self(0);

    /// Creates a time from hours and minutes.
    ///
    /// Returns `None` if `hours > 23` or `minutes > 59`.
    #[must_use]
    pub const fn from_hm(hours: u16, minutes: u16) -> Option<Self> {
        if hours < 24 && minutes < MINUTES_PER_HOUR {
            Some(Self(hours * MINUTES_PER_HOUR + minutes))
        } else {
            None
        }
    }

    /// Creates a time from minutes since midnight.
    #[must_use]
    pub const fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Parses an `HH:MM` string with exactly two digits on each side.
    ///
    /// # Errors
    /// Returns [`crate::ErrorKind::InvalidTime`] for anything else.
    pub fn parse(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(Error::invalid_time(text));
        }
        let digit = |i: usize| -> Result<u16> {
            let b = bytes[i];
            if b.is_ascii_digit() {
                Ok(u16::from(b - b'0'))
            } else {
                Err(Error::invalid_time(text))
            }
        };
        let hours = digit(0)? * 10 + digit(1)?;
        let minutes = digit(3)? * 10 + digit(4)?;
        Self::from_hm(hours, minutes).ok_or_else(|| Error::invalid_time(text))
    }

    /// Returns the hour component (0-23).
    #[must_use]
    pub const fn hours(self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    /// Returns the minute component (0-59).
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Returns the number of minutes since midnight.
    #[must_use]
    pub const fn minutes_since_midnight(self) -> u16 {
        self.0
    }

    /// Returns the time elapsed from `start` to `self`.
    ///
    /// Saturates at zero if `start` is later than `self`.
    #[must_use]
    pub const fn since(self, start: Self) -> Minutes {
        Minutes(self.0.saturating_sub(start.0) as u32)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// An elapsed duration in whole minutes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Minutes(u32);

impl Minutes {
    /// Zero elapsed time.
    pub const ZERO: Self = Self(0);

    /// Creates a duration from a number of minutes.
    #[must_use]
    pub const fn new(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Returns the duration in minutes.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the number of started hours, so any partial hour counts as a
    /// full one.
    #[must_use]
    pub const fn billable_hours(self) -> u32 {
        self.0.div_ceil(MINUTES_PER_HOUR as u32)
    }
}

impl Add for Minutes {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Minutes {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Renders as `HH:MM`.
impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let per_hour = u32::from(MINUTES_PER_HOUR);
        write!(f, "{:02}:{:02}", self.0 / per_hour, self.0 % per_hour)
    }
}
