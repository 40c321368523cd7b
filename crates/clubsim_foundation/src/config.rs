//! Per-run club configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};
use crate::table::TableNumber;
use crate::time::ClockTime;

/// Configuration for one simulated day.
///
/// Created once from the input header and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClubConfig {
    table_count: u32,
    opening: ClockTime,
    closing: ClockTime,
    hourly_price: u32,
}

impl ClubConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// Returns [`ErrorKind::NotPositive`] if the table count or price is zero,
    /// and [`ErrorKind::ClosingBeforeOpening`] if opening is after closing.
    pub fn new(
        table_count: u32,
        opening: ClockTime,
        closing: ClockTime,
        hourly_price: u32,
    ) -> Result<Self> {
        if table_count == 0 {
            return Err(Error::new(ErrorKind::NotPositive {
                field: "number of tables",
                value: 0,
            }));
        }
        if opening > closing {
            return Err(Error::new(ErrorKind::ClosingBeforeOpening { opening, closing }));
        }
        if hourly_price == 0 {
            return Err(Error::new(ErrorKind::NotPositive {
                field: "price per hour",
                value: 0,
            }));
        }
        Ok(Self {
            table_count,
            opening,
            closing,
            hourly_price,
        })
    }

    /// Returns the number of tables.
    #[must_use]
    pub fn table_count(&self) -> u32 {
        self.table_count
    }

    /// Returns the opening time.
    #[must_use]
    pub fn opening(&self) -> ClockTime {
        self.opening
    }

    /// Returns the closing time.
    #[must_use]
    pub fn closing(&self) -> ClockTime {
        self.closing
    }

    /// Returns the price charged per started hour.
    #[must_use]
    pub fn hourly_price(&self) -> u32 {
        self.hourly_price
    }

    /// Returns true if `time` is within `[opening, closing]`.
    #[must_use]
    pub fn is_open_at(&self, time: ClockTime) -> bool {
        time >= self.opening && time <= self.closing
    }

    /// Returns true if `number` names one of the club's tables.
    #[must_use]
    pub fn has_table(&self, number: TableNumber) -> bool {
        number.get() <= self.table_count
    }

    /// Iterates over all table numbers in order.
    pub fn tables(&self) -> impl Iterator<Item = TableNumber> + use<> {
        (1..=self.table_count).filter_map(TableNumber::new)
    }
}
