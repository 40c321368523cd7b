//! The event-processing state machine.
//!
//! An `Engine` owns both registries for one simulated day. Each call to
//! [`Engine::handle`] fully processes one input event and yields at most one
//! derived record. Once an event arrives after closing time the engine stops
//! accepting events, and [`Engine::close`] runs the closing sweep.

use clubsim_foundation::{ClientName, ClockTime, ClubConfig, Result, TableNumber};
use clubsim_storage::{ClientRegistry, TableRegistry};
use tracing::debug;

use crate::event::{Action, InputEvent, OutputRecord};
use crate::report::DayReport;
use crate::violation::Violation;

/// What happened to an event handed to the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The event was consumed, possibly producing a derived record.
    Continue(Option<OutputRecord>),
    /// The event is past closing time and was not consumed. No further
    /// events will be consumed either.
    Closed,
}

/// Simulation engine for one club day.
#[derive(Clone, Debug)]
pub struct Engine {
    config: ClubConfig,
    tables: TableRegistry,
    clients: ClientRegistry,
    /// Set once an event past closing is seen or the sweep has run.
    closed: bool,
}

impl Engine {
    /// Creates an engine with all tables free and nobody in the club.
    #[must_use]
    pub fn new(config: ClubConfig) -> Self {
        let tables = TableRegistry::new(config.table_count(), config.hourly_price());
        Self {
            config,
            tables,
            clients: ClientRegistry::new(),
            closed: false,
        }
    }

    /// Returns the run configuration.
    #[must_use]
    pub fn config(&self) -> &ClubConfig {
        &self.config
    }

    /// Returns the table registry.
    #[must_use]
    pub fn tables(&self) -> &TableRegistry {
        &self.tables
    }

    /// Returns the client registry.
    #[must_use]
    pub fn clients(&self) -> &ClientRegistry {
        &self.clients
    }

    /// Returns true once the engine no longer consumes events.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Processes one event.
    ///
    /// Business-rule violations are reported as error records, never as
    /// `Err`.
    ///
    /// # Errors
    /// Returns an error only if a registry invariant is broken, e.g. the
    /// event names a table the club does not have.
    pub fn handle(&mut self, event: &InputEvent) -> Result<Step> {
        if self.closed {
            return Ok(Step::Closed);
        }
        if event.time > self.config.closing() {
            debug!(time = %event.time, "event after closing time, stopping");
            self.closed = true;
            return Ok(Step::Closed);
        }

        let record = match event.action {
            Action::Arrive => self.arrive(event),
            Action::Sit(table) => self.sit(event, table)?,
            Action::Wait => self.wait(event)?,
            Action::Leave => self.leave(event)?,
            Action::Unrecognized(code) => reject(event, Violation::UnexpectedEvent(code)),
        };
        Ok(Step::Continue(record))
    }

    fn arrive(&mut self, event: &InputEvent) -> Option<OutputRecord> {
        if self.clients.exists(&event.client) {
            return reject(event, Violation::AlreadyActive);
        }
        if !self.config.is_open_at(event.time) {
            return reject(event, Violation::OutsideHours);
        }

        debug!(client = %event.client, time = %event.time, "client arrived");
        self.clients.set_idle(event.client.clone());
        None
    }

    fn sit(&mut self, event: &InputEvent, table: TableNumber) -> Result<Option<OutputRecord>> {
        if !self.clients.exists(&event.client) {
            return Ok(reject(event, Violation::UnknownClient));
        }
        if self.tables.is_occupied(table)? {
            return Ok(reject(event, Violation::TableBusy));
        }

        self.seat_client(&event.client, table, event.time)?;
        Ok(None)
    }

    fn wait(&mut self, event: &InputEvent) -> Result<Option<OutputRecord>> {
        if !self.clients.exists(&event.client) {
            return Ok(reject(event, Violation::UnknownClient));
        }
        if self.tables.free_count() > 0 {
            return Ok(reject(event, Violation::ExtraWait));
        }
        if self.clients.is_waiting(&event.client) {
            return Ok(None);
        }

        if self.clients.waiting_count() >= self.config.table_count() as usize {
            // Each event yields at most one record, so a table freed here is
            // not handed to the queue; it stays free until the next request.
            debug!(client = %event.client, "waiting queue full, client leaves");
            self.depart(&event.client, event.time)?;
            return Ok(Some(OutputRecord::forced_departure(
                event.time,
                event.client.clone(),
            )));
        }

        debug!(client = %event.client, position = self.clients.waiting_count(), "client waits");
        self.clients.enqueue(event.client.clone());
        Ok(None)
    }

    fn leave(&mut self, event: &InputEvent) -> Result<Option<OutputRecord>> {
        if !self.clients.exists(&event.client) {
            return Ok(reject(event, Violation::UnknownClient));
        }

        debug!(client = %event.client, time = %event.time, "client left");
        let Some(table) = self.depart(&event.client, event.time)? else {
            return Ok(None);
        };
        if self.clients.waiting_count() == 0 {
            return Ok(None);
        }

        let next = self.clients.dequeue_front()?;
        self.seat_client(&next, table, event.time)?;
        debug!(client = %next, %table, "waiting client seated");
        Ok(Some(OutputRecord::seated_from_queue(event.time, next, table)))
    }

    /// Seats `client` at `table`, first vacating any table it already holds.
    ///
    /// The implicit vacate produces no record.
    fn seat_client(&mut self, client: &ClientName, table: TableNumber, time: ClockTime) -> Result<()> {
        if let Some(previous) = self.clients.table_of(client) {
            let charge = self.tables.charge(previous, time)?;
            self.clients.set_idle(client.clone());
            debug!(%client, from = %previous, to = %table, amount = charge.amount, "client changed tables");
        }
        self.clients.seat(client.clone(), table);
        self.tables.assign(table, time)
    }

    /// Removes `client`, charging its table if it had one.
    ///
    /// Returns the vacated table.
    fn depart(&mut self, client: &ClientName, time: ClockTime) -> Result<Option<TableNumber>> {
        let Some(table) = self.clients.remove(client).table() else {
            return Ok(None);
        };
        let charge = self.tables.charge(table, time)?;
        debug!(%client, %table, amount = charge.amount, elapsed = %charge.elapsed, "table vacated");
        Ok(Some(table))
    }

    /// Runs the closing sweep.
    ///
    /// Every client still in the club leaves at closing time, in identifier
    /// order; seated clients' tables are charged. Running the sweep again has
    /// no further effect.
    ///
    /// # Errors
    /// Returns an error only if a registry invariant is broken.
    pub fn close(&mut self) -> Result<Vec<OutputRecord>> {
        self.closed = true;
        let closing = self.config.closing();

        let mut records = Vec::with_capacity(self.clients.len());
        for client in self.clients.all_clients() {
            self.depart(&client, closing)?;
            debug!(%client, "client forced out at closing");
            records.push(OutputRecord::forced_departure(closing, client));
        }
        Ok(records)
    }

    /// Returns the per-table report as it stands now.
    #[must_use]
    pub fn report(&self) -> DayReport {
        DayReport {
            opening: self.config.opening(),
            closing: self.config.closing(),
            tables: self.tables.snapshot(),
        }
    }
}

fn reject(event: &InputEvent, violation: Violation) -> Option<OutputRecord> {
    debug!(client = %event.client, time = %event.time, %violation, "request rejected");
    Some(OutputRecord::error(event.time, violation))
}
