//! Header line validation

use clubsim_foundation::ErrorKind;
use clubsim_parser::parse_str;

#[test]
fn header_sets_config() {
    let input = parse_str("4\n08:30 22:15\n150\n").unwrap();
    assert_eq!(input.config.table_count(), 4);
    assert_eq!(input.config.opening().to_string(), "08:30");
    assert_eq!(input.config.closing().to_string(), "22:15");
    assert_eq!(input.config.hourly_price(), 150);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let input = parse_str("  2  \n\t09:00   19:00 \n 10\n").unwrap();
    assert_eq!(input.config.table_count(), 2);
}

#[test]
fn empty_input_is_missing_table_count() {
    let err = parse_str("").unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingLine("number of tables"));
    assert_eq!(err.line.unwrap().number, 1);
}

#[test]
fn non_positive_table_count() {
    for text in ["0", "-2"] {
        let err = parse_str(&format!("{text}\n09:00 19:00\n10\n")).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::NotPositive { .. }), "{text}");
        assert_eq!(err.line_text(), Some(text));
    }
}

#[test]
fn non_numeric_price() {
    let err = parse_str("1\n09:00 19:00\nten\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidNumber("ten".to_string()));
    assert_eq!(err.line.unwrap().number, 3);
}

#[test]
fn malformed_hours_line() {
    let err = parse_str("1\n9:00 19:00\n10\n").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidTime(_)));
    assert_eq!(err.line_text(), Some("9:00 19:00"));

    let err = parse_str("1\n09:00\n10\n").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::FieldCount { actual: 1, .. }));
}

#[test]
fn equal_opening_and_closing_is_allowed() {
    let input = parse_str("1\n12:00 12:00\n10\n").unwrap();
    assert_eq!(input.config.opening(), input.config.closing());
}
