//! Table occupancy and billing.
//!
//! The `TableRegistry` owns a fixed array of tables for the whole run.
//! Income and occupied time are accrued only when a table is vacated
//! ("charged"), never continuously.

use clubsim_foundation::{ClockTime, Error, ErrorKind, Minutes, Result, TableNumber};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// State of a single table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    /// When the current occupant sat down; `None` while the table is free.
    occupied_since: Option<ClockTime>,
    /// Income accrued so far.
    income: u64,
    /// Occupied time accrued so far.
    occupied: Minutes,
}

impl Table {
    /// Returns true if someone is sitting at this table.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupied_since.is_some()
    }

    /// Returns when the current occupant sat down.
    #[must_use]
    pub fn occupied_since(&self) -> Option<ClockTime> {
        self.occupied_since
    }

    /// Returns the income accrued so far.
    #[must_use]
    pub fn income(&self) -> u64 {
        self.income
    }

    /// Returns the occupied time accrued so far.
    #[must_use]
    pub fn occupied(&self) -> Minutes {
        self.occupied
    }
}

/// The result of vacating a table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Charge {
    /// The table that was vacated.
    pub table: TableNumber,
    /// Raw time the occupant spent at the table.
    pub elapsed: Minutes,
    /// Amount billed, in whole started hours.
    pub amount: u64,
}

/// One row of the end-of-day report.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableReport {
    /// 1-based table number.
    pub table: TableNumber,
    /// Total income for the day.
    pub income: u64,
    /// Total occupied time for the day.
    pub occupied: Minutes,
}

/// Fixed-size registry of the club's tables.
#[derive(Clone, Debug)]
pub struct TableRegistry {
    tables: Vec<Table>,
    /// Number of currently occupied tables.
    occupied_count: usize,
    hourly_price: u32,
}

impl TableRegistry {
    /// Creates `count` free tables billed at `hourly_price` per started hour.
    #[must_use]
    pub fn new(count: u32, hourly_price: u32) -> Self {
        Self {
            tables: vec![Table::default(); count as usize],
            occupied_count: 0,
            hourly_price,
        }
    }

    /// Returns the number of tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if the registry has no tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Returns the table with the given number.
    ///
    /// # Errors
    /// Returns [`ErrorKind::TableOutOfRange`] if there is no such table.
    pub fn get(&self, table: TableNumber) -> Result<&Table> {
        let count = self.tables.len();
        self.tables
            .get(table.index())
            .ok_or_else(|| out_of_range(table, count))
    }

    fn get_mut(&mut self, table: TableNumber) -> Result<&mut Table> {
        let count = self.tables.len();
        self.tables
            .get_mut(table.index())
            .ok_or_else(|| out_of_range(table, count))
    }

    /// Returns true if the table is occupied.
    ///
    /// # Errors
    /// Returns [`ErrorKind::TableOutOfRange`] if there is no such table.
    pub fn is_occupied(&self, table: TableNumber) -> Result<bool> {
        Ok(self.get(table)?.is_occupied())
    }

    /// Marks a table occupied from `start`.
    ///
    /// # Errors
    /// Returns [`ErrorKind::TableOccupied`] if the table is already taken.
    pub fn assign(&mut self, table: TableNumber, start: ClockTime) -> Result<()> {
        let slot = self.get_mut(table)?;
        if slot.is_occupied() {
            return Err(Error::new(ErrorKind::TableOccupied(table)));
        }
        slot.occupied_since = Some(start);
        self.occupied_count += 1;
        trace!(%table, %start, "table assigned");
        Ok(())
    }

    /// Vacates a table at `end`, accruing income and occupied time.
    ///
    /// Income is billed per started hour; occupied time accrues the raw
    /// elapsed minutes.
    ///
    /// # Errors
    /// Returns [`ErrorKind::TableNotOccupied`] if the table is free.
    pub fn charge(&mut self, table: TableNumber, end: ClockTime) -> Result<Charge> {
        let price = u64::from(self.hourly_price);
        let slot = self.get_mut(table)?;
        let start = slot
            .occupied_since
            .take()
            .ok_or_else(|| Error::new(ErrorKind::TableNotOccupied(table)))?;

        let elapsed = end.since(start);
        let amount = u64::from(elapsed.billable_hours()) * price;
        slot.income += amount;
        slot.occupied += elapsed;
        self.occupied_count -= 1;

        trace!(%table, %start, %end, amount, "table charged");
        Ok(Charge {
            table,
            elapsed,
            amount,
        })
    }

    /// Returns the number of occupied tables.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied_count
    }

    /// Returns the number of free tables.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.tables.len() - self.occupied_count
    }

    /// Iterates over tables in table order.
    pub fn iter(&self) -> impl Iterator<Item = (TableNumber, &Table)> + '_ {
        self.tables
            .iter()
            .enumerate()
            .filter_map(|(i, t)| TableNumber::from_index(i).map(|n| (n, t)))
    }

    /// Returns the per-table report in table order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TableReport> {
        self.iter()
            .map(|(table, t)| TableReport {
                table,
                income: t.income,
                occupied: t.occupied,
            })
            .collect()
    }
}

fn out_of_range(table: TableNumber, count: usize) -> Error {
    Error::new(ErrorKind::TableOutOfRange { table, count })
}
