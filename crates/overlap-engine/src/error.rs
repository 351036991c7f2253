//! Error types for event parsing.

use thiserror::Error;

/// A date or clock-time string that could not be normalized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("invalid time '{0}' (expected HH:MM or HH:MM:SS)")]
    InvalidTime(String),
}

/// An input line that could not be turned into an [`Interval`](crate::Interval).
///
/// Every variant keeps the offending line verbatim so it can be reported back
/// to the operator exactly as typed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("expected 'date start end', found {found} field(s): {line}")]
    MissingFields { line: String, found: usize },

    #[error("{source}: {line}")]
    Time {
        line: String,
        #[source]
        source: TimeError,
    },

    #[error("end {end} precedes start {start}: {line}")]
    Inverted { line: String, start: i64, end: i64 },
}

impl EventError {
    /// The rejected input line.
    pub fn line(&self) -> &str {
        match self {
            EventError::MissingFields { line, .. }
            | EventError::Time { line, .. }
            | EventError::Inverted { line, .. } => line,
        }
    }
}

pub type Result<T> = std::result::Result<T, EventError>;
