//! Time normalization: (date, clock-time) text pairs to epoch seconds.
//!
//! The date is resolved to midnight UTC. The clock time is resolved on the
//! epoch day (1970-01-01) so its timestamp is exactly its offset from
//! midnight, and the two are added. Events never cross midnight, so calling
//! this twice with the same date isolates the time-of-day delta.

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike};

use crate::error::TimeError;

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(date: &str) -> Result<NaiveDate, TimeError> {
    if !has_shape(date, "9999-99-99") {
        return Err(TimeError::InvalidDate(date.to_string()));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(date.to_string()))
}

/// Parse a strict 24-hour `HH:MM` or `HH:MM:SS` time of day.
pub fn parse_clock(clock: &str) -> Result<NaiveTime, TimeError> {
    let format = if has_shape(clock, "99:99") {
        "%H:%M"
    } else if has_shape(clock, "99:99:99") {
        "%H:%M:%S"
    } else {
        return Err(TimeError::InvalidTime(clock.to_string()));
    };

    let time = NaiveTime::parse_from_str(clock, format)
        .map_err(|_| TimeError::InvalidTime(clock.to_string()))?;

    // chrono accepts :60 as a leap second; a wall clock reading does not.
    if time.nanosecond() >= 1_000_000_000 {
        return Err(TimeError::InvalidTime(clock.to_string()));
    }

    Ok(time)
}

/// Seconds between midnight and the given clock time.
pub fn clock_offset(clock: &str) -> Result<i64, TimeError> {
    let time = parse_clock(clock)?;
    let epoch_day = DateTime::UNIX_EPOCH.date_naive();
    Ok(epoch_day.and_time(time).and_utc().timestamp())
}

/// Combine a date and a clock time into epoch seconds.
///
/// # Errors
/// Returns `TimeError::InvalidDate` or `TimeError::InvalidTime` for the first
/// component that fails to parse. No partial result is produced.
pub fn to_epoch_seconds(date: &str, clock: &str) -> Result<i64, TimeError> {
    let midnight = parse_date(date)?
        .and_time(NaiveTime::MIN)
        .and_utc()
        .timestamp();
    Ok(midnight + clock_offset(clock)?)
}

/// `shape` uses `9` for "any ASCII digit"; every other byte must match exactly.
fn has_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(c, p)| match p {
            b'9' => c.is_ascii_digit(),
            _ => c == p,
        })
}
