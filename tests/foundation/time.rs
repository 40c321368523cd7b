//! Integration tests for clock times and durations

use clubsim_foundation::{ClockTime, ErrorKind, Minutes};

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parse_accepts_two_digit_fields() {
    let t = ClockTime::parse("09:05").unwrap();
    assert_eq!(t.hours(), 9);
    assert_eq!(t.minutes(), 5);
    assert_eq!(t.minutes_since_midnight(), 545);
}

#[test]
fn parse_accepts_day_bounds() {
    assert_eq!(ClockTime::parse("00:00").unwrap(), ClockTime::MIDNIGHT);
    assert_eq!(ClockTime::parse("23:59").unwrap().minutes_since_midnight(), 1439);
}

#[test]
fn parse_rejects_malformed_times() {
    for text in ["9:05", "09:5", "24:00", "12:60", "0905", "09-05", "", "ab:cd", " 9:05"] {
        let err = ClockTime::parse(text).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::InvalidTime(_)),
            "{text:?} should be an invalid time"
        );
    }
}

#[test]
fn from_str_matches_parse() {
    let t: ClockTime = "18:30".parse().unwrap();
    assert_eq!(Some(t), ClockTime::from_hm(18, 30));
}

// =============================================================================
// Arithmetic
// =============================================================================

#[test]
fn since_measures_minutes_between_times() {
    let start = ClockTime::from_hm(9, 48).unwrap();
    let end = ClockTime::from_hm(19, 0).unwrap();
    assert_eq!(end.since(start), Minutes::new(552));
}

#[test]
fn since_saturates_at_zero() {
    let start = ClockTime::from_hm(10, 0).unwrap();
    let end = ClockTime::from_hm(9, 0).unwrap();
    assert_eq!(end.since(start), Minutes::ZERO);
}

#[test]
fn billable_hours_round_up() {
    assert_eq!(Minutes::ZERO.billable_hours(), 0);
    assert_eq!(Minutes::new(1).billable_hours(), 1);
    assert_eq!(Minutes::new(60).billable_hours(), 1);
    assert_eq!(Minutes::new(61).billable_hours(), 2);
    assert_eq!(Minutes::new(552).billable_hours(), 10);
}

#[test]
fn minutes_accumulate_and_render() {
    let mut total = Minutes::new(159);
    total += Minutes::new(199);
    assert_eq!(total, Minutes::new(358));
    assert_eq!(total.to_string(), "05:58");
    assert_eq!((Minutes::new(30) + Minutes::new(45)).to_string(), "01:15");
}

#[test]
fn display_is_zero_padded() {
    assert_eq!(ClockTime::from_hm(8, 5).unwrap().to_string(), "08:05");
    assert_eq!(Minutes::ZERO.to_string(), "00:00");
}
