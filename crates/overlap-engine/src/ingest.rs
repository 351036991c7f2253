//! Collect intervals from raw input lines up to the `end` terminator.
//!
//! Every line read consumes one id, whether or not it parses, so an
//! interval's id is always its 0-based position in the input.

use tracing::debug;

use crate::error::EventError;
use crate::event::Interval;

/// Line that stops collection (after trimming).
pub const TERMINATOR: &str = "end";

/// What happened to one pushed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line became the interval with this id.
    Accepted(usize),
    /// The line was skipped; the error carries it verbatim.
    Rejected(EventError),
    /// The terminator was seen. Further lines are ignored.
    End,
}

/// Incremental interval collector for line-at-a-time input.
#[derive(Debug, Default)]
pub struct Collector {
    events: Vec<Interval>,
    rejected: usize,
    next_id: usize,
    finished: bool,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim and parse one raw line.
    pub fn push_line(&mut self, raw: &str) -> LineOutcome {
        if self.finished {
            return LineOutcome::End;
        }

        let line = raw.trim();
        if line == TERMINATOR {
            self.finished = true;
            debug!(
                accepted = self.events.len(),
                rejected = self.rejected,
                "input terminated"
            );
            return LineOutcome::End;
        }

        let id = self.next_id;
        self.next_id += 1;

        match Interval::parse(line, id) {
            Ok(event) => {
                self.events.push(event);
                LineOutcome::Accepted(id)
            }
            Err(err) => {
                self.rejected += 1;
                LineOutcome::Rejected(err)
            }
        }
    }

    /// True once the terminator has been pushed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn events(&self) -> &[Interval] {
        &self.events
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected
    }

    pub fn into_events(self) -> Vec<Interval> {
        self.events
    }
}

/// Result of collecting a whole batch of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collected {
    pub events: Vec<Interval>,
    pub rejected: Vec<EventError>,
}

/// Collect intervals from `lines` until the terminator or the end of input.
pub fn collect_events<I, S>(lines: I) -> Collected
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut collector = Collector::new();
    let mut rejected = Vec::new();

    for line in lines {
        match collector.push_line(line.as_ref()) {
            LineOutcome::Accepted(_) => {}
            LineOutcome::Rejected(err) => rejected.push(err),
            LineOutcome::End => break,
        }
    }

    Collected {
        events: collector.into_events(),
        rejected,
    }
}
