//! Integration tests for client presence and the waiting queue

use clubsim_foundation::{ClientName, ErrorKind, TableNumber};
use clubsim_storage::{ClientRegistry, ClientStatus};

fn c(name: &str) -> ClientName {
    ClientName::new(name).unwrap()
}

fn n(i: u32) -> TableNumber {
    TableNumber::new(i).unwrap()
}

// =============================================================================
// Presence
// =============================================================================

#[test]
fn status_tracks_lifecycle() {
    let mut clients = ClientRegistry::new();
    assert_eq!(clients.status(&c("alice")), ClientStatus::Absent);

    clients.set_idle(c("alice"));
    assert_eq!(clients.status(&c("alice")), ClientStatus::Idle);
    assert!(clients.exists(&c("alice")));

    clients.seat(c("alice"), n(2));
    assert_eq!(clients.table_of(&c("alice")), Some(n(2)));

    assert_eq!(clients.remove(&c("alice")), ClientStatus::Seated(n(2)));
    assert!(!clients.exists(&c("alice")));
}

#[test]
fn removing_absent_client_is_noop() {
    let mut clients = ClientRegistry::new();
    assert_eq!(clients.remove(&c("ghost")), ClientStatus::Absent);
    assert!(clients.is_empty());
}

#[test]
fn all_clients_is_sorted() {
    let mut clients = ClientRegistry::new();
    for name in ["zed", "client2", "amy", "client10"] {
        clients.set_idle(c(name));
    }

    let names: Vec<String> = clients
        .all_clients()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(names, ["amy", "client10", "client2", "zed"]);
    assert_eq!(clients.len(), 4);
}

// =============================================================================
// Waiting Queue
// =============================================================================

#[test]
fn queue_is_fifo() {
    let mut clients = ClientRegistry::new();
    for name in ["first", "second", "third"] {
        clients.set_idle(c(name));
        assert!(clients.enqueue(c(name)));
    }

    assert_eq!(clients.dequeue_front().unwrap(), c("first"));
    assert_eq!(clients.dequeue_front().unwrap(), c("second"));
    assert_eq!(clients.waiting_count(), 1);
}

#[test]
fn enqueue_twice_keeps_position() {
    let mut clients = ClientRegistry::new();
    clients.enqueue(c("a"));
    clients.enqueue(c("b"));
    assert!(!clients.enqueue(c("a")));

    let waiting: Vec<&str> = clients.waiting().map(ClientName::as_str).collect();
    assert_eq!(waiting, ["a", "b"]);
}

#[test]
fn dequeue_empty_fails() {
    let mut clients = ClientRegistry::new();
    let err = clients.dequeue_front().unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyQueue);
}

#[test]
fn leaving_drops_client_from_queue() {
    let mut clients = ClientRegistry::new();
    clients.set_idle(c("a"));
    clients.set_idle(c("b"));
    clients.enqueue(c("a"));
    clients.enqueue(c("b"));

    clients.remove(&c("a"));
    assert!(!clients.is_waiting(&c("a")));
    assert_eq!(clients.dequeue_front().unwrap(), c("b"));
}

#[test]
fn seating_drops_client_from_queue() {
    let mut clients = ClientRegistry::new();
    clients.set_idle(c("a"));
    clients.enqueue(c("a"));

    clients.seat(c("a"), n(1));
    assert_eq!(clients.waiting_count(), 0);
}
