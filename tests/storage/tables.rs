//! Integration tests for table occupancy and billing

use clubsim_foundation::{ClockTime, ErrorKind, Minutes, TableNumber};
use clubsim_storage::TableRegistry;

fn hm(h: u16, m: u16) -> ClockTime {
    ClockTime::from_hm(h, m).unwrap()
}

fn n(i: u32) -> TableNumber {
    TableNumber::new(i).unwrap()
}

// =============================================================================
// Occupancy
// =============================================================================

#[test]
fn new_registry_is_all_free() {
    let tables = TableRegistry::new(3, 10);
    assert_eq!(tables.len(), 3);
    assert_eq!(tables.free_count(), 3);
    assert_eq!(tables.occupied_count(), 0);
    for (_, table) in tables.iter() {
        assert!(!table.is_occupied());
    }
}

#[test]
fn assign_marks_table_occupied() {
    let mut tables = TableRegistry::new(2, 10);
    tables.assign(n(2), hm(10, 0)).unwrap();

    assert!(tables.is_occupied(n(2)).unwrap());
    assert!(!tables.is_occupied(n(1)).unwrap());
    assert_eq!(tables.get(n(2)).unwrap().occupied_since(), Some(hm(10, 0)));
    assert_eq!(tables.free_count(), 1);
}

#[test]
fn assigning_occupied_table_fails() {
    let mut tables = TableRegistry::new(1, 10);
    tables.assign(n(1), hm(10, 0)).unwrap();

    let err = tables.assign(n(1), hm(11, 0)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TableOccupied(n(1)));
    assert_eq!(tables.occupied_count(), 1);
}

#[test]
fn unknown_table_is_out_of_range() {
    let tables = TableRegistry::new(2, 10);
    let err = tables.is_occupied(n(3)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TableOutOfRange { count: 2, .. }));
}

// =============================================================================
// Charging
// =============================================================================

#[test]
fn charge_bills_started_hours() {
    let mut tables = TableRegistry::new(1, 10);
    tables.assign(n(1), hm(9, 48)).unwrap();

    let charge = tables.charge(n(1), hm(19, 0)).unwrap();
    assert_eq!(charge.elapsed, Minutes::new(552));
    assert_eq!(charge.amount, 100);
    assert!(!tables.is_occupied(n(1)).unwrap());
}

#[test]
fn charges_accumulate_per_table() {
    let mut tables = TableRegistry::new(1, 10);
    tables.assign(n(1), hm(9, 54)).unwrap();
    tables.charge(n(1), hm(12, 33)).unwrap();
    tables.assign(n(1), hm(12, 33)).unwrap();
    tables.charge(n(1), hm(15, 52)).unwrap();

    let report = tables.snapshot();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].income, 70);
    assert_eq!(report[0].occupied.to_string(), "05:58");
}

#[test]
fn zero_length_session_is_free() {
    let mut tables = TableRegistry::new(1, 10);
    tables.assign(n(1), hm(12, 0)).unwrap();

    let charge = tables.charge(n(1), hm(12, 0)).unwrap();
    assert_eq!(charge.amount, 0);
    assert_eq!(tables.get(n(1)).unwrap().occupied(), Minutes::ZERO);
}

#[test]
fn charging_free_table_fails() {
    let mut tables = TableRegistry::new(1, 10);
    let err = tables.charge(n(1), hm(12, 0)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TableNotOccupied(n(1)));
}

#[test]
fn snapshot_lists_tables_in_order() {
    let mut tables = TableRegistry::new(3, 5);
    tables.assign(n(3), hm(9, 0)).unwrap();
    tables.charge(n(3), hm(9, 30)).unwrap();

    let report = tables.snapshot();
    let numbers: Vec<u32> = report.iter().map(|r| r.table.get()).collect();
    assert_eq!(numbers, [1, 2, 3]);
    assert_eq!(report[0].income, 0);
    assert_eq!(report[2].income, 5);
}
