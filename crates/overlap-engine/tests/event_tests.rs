//! Tests for building intervals from input lines.

use overlap_engine::{EventError, Interval, TimeError};

#[test]
fn valid_line_builds_interval() {
    let event = Interval::parse("2018-11-12 07:20 09:20", 5).unwrap();

    assert_eq!(event.id(), 5);
    assert_eq!(event.start(), 1542007200);
    assert_eq!(event.end(), 1542014400);
    assert_eq!(event.duration_seconds(), 2 * 3600);
}

#[test]
fn text_is_kept_verbatim() {
    let line = "2018-11-12 07:20 09:20 weekly sync";
    let event = Interval::parse(line, 0).unwrap();
    assert_eq!(event.text(), line, "extra fields are ignored but kept in the text");
}

#[test]
fn inverted_line_rejected() {
    let err = Interval::parse("2017-02-05 12:00 11:59", 0).unwrap_err();

    assert!(matches!(err, EventError::Inverted { .. }), "got {err:?}");
    assert_eq!(err.line(), "2017-02-05 12:00 11:59");
}

#[test]
fn zero_length_interval_is_valid() {
    let event = Interval::parse("2017-02-05 12:00 12:00", 3).unwrap();
    assert_eq!(event.start(), event.end());
}

#[test]
fn fewer_than_three_fields_rejected() {
    let err = Interval::parse("2020-01-01 09:00", 0).unwrap_err();
    assert_eq!(
        err,
        EventError::MissingFields {
            line: "2020-01-01 09:00".to_string(),
            found: 2,
        }
    );
}

#[test]
fn empty_line_rejected() {
    let err = Interval::parse("", 0).unwrap_err();
    assert!(matches!(err, EventError::MissingFields { found: 1, .. }));
}

#[test]
fn double_space_yields_empty_field() {
    // Fields are separated by single spaces; an empty start time cannot parse.
    let err = Interval::parse("2020-01-01  09:00 10:00", 0).unwrap_err();
    assert_eq!(
        err,
        EventError::Time {
            line: "2020-01-01  09:00 10:00".to_string(),
            source: TimeError::InvalidTime(String::new()),
        }
    );
}

#[test]
fn invalid_month_rejected_with_line() {
    let err = Interval::parse("2020-13-01 09:00 10:00", 0).unwrap_err();
    assert_eq!(err.line(), "2020-13-01 09:00 10:00");
    assert!(err.to_string().contains("invalid date '2020-13-01'"));
}

#[test]
fn invalid_end_time_rejected() {
    let err = Interval::parse("2020-01-01 09:00 25:00", 0).unwrap_err();
    assert!(matches!(
        err,
        EventError::Time {
            source: TimeError::InvalidTime(_),
            ..
        }
    ));
}

#[test]
fn from_bounds_enforces_order() {
    assert!(Interval::from_bounds(0, 10, 5, "x").is_err());
    let ok = Interval::from_bounds(1, 5, 10, "y").unwrap();
    assert_eq!((ok.id(), ok.start(), ok.end(), ok.text()), (1, 5, 10, "y"));
}

#[test]
fn intersects_excludes_touching_endpoints() {
    let a = Interval::from_bounds(0, 0, 10, "a").unwrap();
    let b = Interval::from_bounds(1, 10, 20, "b").unwrap();
    let c = Interval::from_bounds(2, 9, 11, "c").unwrap();

    assert!(!a.intersects(&b));
    assert!(a.intersects(&c));
    assert!(c.intersects(&b));
}
