//! Interval records and the line parser that builds them.

use tracing::debug;

use crate::error::{EventError, Result};
use crate::normalize::to_epoch_seconds;

/// A parsed event: numeric bounds in epoch seconds plus the source line.
///
/// Invariant: `start <= end`. Both constructors reject anything else, and the
/// fields are not mutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    id: usize,
    start: i64,
    end: i64,
    text: String,
}

impl Interval {
    /// Build an interval from a `<date> <start-time> <end-time>` line.
    ///
    /// Fields are split on single spaces; anything after the third field is
    /// ignored. Both times are resolved against the same date. The line is
    /// stored exactly as given.
    ///
    /// # Errors
    /// - `EventError::MissingFields` if fewer than three fields are present.
    /// - `EventError::Time` if the date or either time fails to parse.
    /// - `EventError::Inverted` if the end precedes the start.
    pub fn parse(line: &str, id: usize) -> Result<Self> {
        let fields: Vec<&str> = line.split(' ').collect();
        if fields.len() < 3 {
            let err = EventError::MissingFields {
                line: line.to_string(),
                found: fields.len(),
            };
            debug!(id, %err, "rejected event line");
            return Err(err);
        }

        let date = fields[0];
        let bounds = to_epoch_seconds(date, fields[1])
            .and_then(|start| to_epoch_seconds(date, fields[2]).map(|end| (start, end)));
        let (start, end) = bounds.map_err(|source| {
            let err = EventError::Time {
                line: line.to_string(),
                source,
            };
            debug!(id, %err, "rejected event line");
            err
        })?;

        Self::from_bounds(id, start, end, line)
    }

    /// Build an interval from already-normalized bounds.
    ///
    /// # Errors
    /// Returns `EventError::Inverted` if `end < start`.
    pub fn from_bounds(id: usize, start: i64, end: i64, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if end < start {
            let err = EventError::Inverted {
                line: text,
                start,
                end,
            };
            debug!(id, %err, "rejected event line");
            return Err(err);
        }
        Ok(Self {
            id,
            start,
            end,
            text,
        })
    }

    /// Sequential identity assigned at construction.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Start, in seconds since the Unix epoch.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// End, in seconds since the Unix epoch.
    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn duration_seconds(&self) -> i64 {
        self.end - self.start
    }

    /// The source line, verbatim.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the two time ranges intersect. Touching endpoints do not count.
    pub fn intersects(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}
