//! Integration tests for club configuration

use clubsim_foundation::{ClockTime, ClubConfig, ErrorKind, TableNumber};

fn hm(h: u16, m: u16) -> ClockTime {
    ClockTime::from_hm(h, m).unwrap()
}

#[test]
fn valid_config_exposes_fields() {
    let config = ClubConfig::new(3, hm(9, 0), hm(19, 0), 10).unwrap();
    assert_eq!(config.table_count(), 3);
    assert_eq!(config.opening(), hm(9, 0));
    assert_eq!(config.closing(), hm(19, 0));
    assert_eq!(config.hourly_price(), 10);
}

#[test]
fn zero_tables_rejected() {
    let err = ClubConfig::new(0, hm(9, 0), hm(19, 0), 10).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotPositive { .. }));
}

#[test]
fn zero_price_rejected() {
    let err = ClubConfig::new(2, hm(9, 0), hm(19, 0), 0).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotPositive { .. }));
}

#[test]
fn closing_before_opening_rejected() {
    let err = ClubConfig::new(2, hm(19, 0), hm(9, 0), 10).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ClosingBeforeOpening { .. }));
}

#[test]
fn club_window_is_inclusive() {
    let config = ClubConfig::new(1, hm(9, 0), hm(19, 0), 10).unwrap();
    assert!(!config.is_open_at(hm(8, 59)));
    assert!(config.is_open_at(hm(9, 0)));
    assert!(config.is_open_at(hm(19, 0)));
    assert!(!config.is_open_at(hm(19, 1)));
}

#[test]
fn tables_enumerates_every_table() {
    let config = ClubConfig::new(3, hm(9, 0), hm(19, 0), 10).unwrap();
    let tables: Vec<u32> = config.tables().map(TableNumber::get).collect();
    assert_eq!(tables, [1, 2, 3]);
    assert!(config.has_table(TableNumber::new(3).unwrap()));
    assert!(!config.has_table(TableNumber::new(4).unwrap()));
}
