//! Client presence, seating, and the waiting queue.
//!
//! The client map and the waiting queue form one registry so that queue
//! membership can never disagree with presence: removing a client also
//! drops it from the queue.

use clubsim_foundation::{ClientName, Error, Result, TableNumber};
use im::{OrdMap, Vector};
use tracing::trace;

/// Where a client currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClientStatus {
    /// Not in the club.
    Absent,
    /// In the club without a table (possibly waiting in the queue).
    Idle,
    /// Sitting at a table.
    Seated(TableNumber),
}

impl ClientStatus {
    /// Returns true unless the client is absent.
    #[must_use]
    pub fn is_present(self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Returns the table the client sits at, if any.
    #[must_use]
    pub fn table(self) -> Option<TableNumber> {
        match self {
            Self::Seated(table) => Some(table),
            Self::Absent | Self::Idle => None,
        }
    }
}

/// Registry of clients currently in the club.
///
/// Clients are kept in identifier order so that [`ClientRegistry::all_clients`]
/// is deterministic.
#[derive(Clone, Debug, Default)]
pub struct ClientRegistry {
    /// Present clients. Never holds [`ClientStatus::Absent`].
    clients: OrdMap<ClientName, ClientStatus>,
    /// FIFO of clients waiting for a table.
    queue: Vector<ClientName>,
}

impl ClientRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the client is in the club.
    #[must_use]
    pub fn exists(&self, client: &ClientName) -> bool {
        self.status(client).is_present()
    }

    /// Returns the client's current status.
    #[must_use]
    pub fn status(&self, client: &ClientName) -> ClientStatus {
        self.clients
            .get(client)
            .copied()
            .unwrap_or(ClientStatus::Absent)
    }

    /// Returns the table the client sits at, if any.
    #[must_use]
    pub fn table_of(&self, client: &ClientName) -> Option<TableNumber> {
        self.status(client).table()
    }

    /// Marks the client present without a table, adding it if new.
    pub fn set_idle(&mut self, client: ClientName) {
        trace!(%client, "client idle");
        self.clients.insert(client, ClientStatus::Idle);
    }

    /// Records the client as seated at `table`.
    ///
    /// A seated client no longer waits, so it also leaves the queue.
    pub fn seat(&mut self, client: ClientName, table: TableNumber) {
        trace!(%client, %table, "client seated");
        self.queue.retain(|waiting| *waiting != client);
        self.clients.insert(client, ClientStatus::Seated(table));
    }

    /// Removes the client from the club and from the waiting queue.
    ///
    /// Returns the status the client had before removal.
    pub fn remove(&mut self, client: &ClientName) -> ClientStatus {
        self.queue.retain(|waiting| waiting != client);
        let previous = self
            .clients
            .remove(client)
            .unwrap_or(ClientStatus::Absent);
        trace!(%client, ?previous, "client removed");
        previous
    }

    /// Appends the client to the waiting queue.
    ///
    /// Returns false, leaving the queue unchanged, if the client is already
    /// waiting.
    pub fn enqueue(&mut self, client: ClientName) -> bool {
        if self.is_waiting(&client) {
            return false;
        }
        trace!(%client, position = self.queue.len(), "client queued");
        self.queue.push_back(client);
        true
    }

    /// Pops the client at the front of the waiting queue.
    ///
    /// # Errors
    /// Returns [`clubsim_foundation::ErrorKind::EmptyQueue`] if nobody is
    /// waiting.
    pub fn dequeue_front(&mut self) -> Result<ClientName> {
        self.queue.pop_front().ok_or_else(Error::empty_queue)
    }

    /// Returns true if the client is in the waiting queue.
    #[must_use]
    pub fn is_waiting(&self, client: &ClientName) -> bool {
        self.queue.iter().any(|waiting| waiting == client)
    }

    /// Returns the number of waiting clients.
    #[must_use]
    pub fn waiting_count(&self) -> usize {
        self.queue.len()
    }

    /// Iterates over waiting clients, front first.
    pub fn waiting(&self) -> impl Iterator<Item = &ClientName> + '_ {
        self.queue.iter()
    }

    /// Returns all present clients sorted by identifier.
    #[must_use]
    pub fn all_clients(&self) -> Vec<ClientName> {
        self.clients.keys().cloned().collect()
    }

    /// Returns the number of present clients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Returns true if nobody is in the club.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
