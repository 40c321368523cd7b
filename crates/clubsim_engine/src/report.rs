//! End-of-day report.

use std::fmt;

use clubsim_foundation::ClockTime;
use clubsim_storage::TableReport;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Income and occupied time per table for one day.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayReport {
    /// Opening time of the day.
    pub opening: ClockTime,
    /// Closing time of the day.
    pub closing: ClockTime,
    /// One row per table, in table order.
    pub tables: Vec<TableReport>,
}

impl DayReport {
    /// Returns the club's total income for the day.
    #[must_use]
    pub fn total_income(&self) -> u64 {
        self.tables.iter().map(|t| t.income).sum()
    }
}

/// Renders one `<table> <income> <HH:MM>` line per table.
impl fmt::Display for DayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.tables {
            writeln!(f, "{} {} {}", row.table, row.income, row.occupied)?;
        }
        Ok(())
    }
}
