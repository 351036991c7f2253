//! Dual ordering of an interval collection: by start and by end.
//!
//! Each ordering is an independent copy; the input slice is never touched.
//! Ties on the key are left in whatever order the sort produces, the overlap
//! sweep does not depend on it.

use crate::event::Interval;
use crate::overlap::{find_overlaps, OverlapPair};

/// The same intervals in two orders, ready for [`find_overlaps`].
#[derive(Debug, Clone, PartialEq)]
pub struct DualOrder {
    pub by_start: Vec<Interval>,
    pub by_end: Vec<Interval>,
}

impl DualOrder {
    pub fn new(events: &[Interval]) -> Self {
        Self {
            by_start: sort_by_start(events),
            by_end: sort_by_end(events),
        }
    }

    pub fn len(&self) -> usize {
        self.by_start.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_start.is_empty()
    }

    /// Run the overlap sweep over both orderings.
    pub fn overlaps(&self) -> Vec<OverlapPair<'_>> {
        find_overlaps(&self.by_start, &self.by_end)
    }
}

/// Copy of `events` ordered ascending by start.
pub fn sort_by_start(events: &[Interval]) -> Vec<Interval> {
    sorted_by_key(events, Interval::start)
}

/// Copy of `events` ordered ascending by end.
pub fn sort_by_end(events: &[Interval]) -> Vec<Interval> {
    sorted_by_key(events, Interval::end)
}

fn sorted_by_key<K, F>(events: &[Interval], key: F) -> Vec<Interval>
where
    K: Ord,
    F: Fn(&Interval) -> K,
{
    let mut sorted = events.to_vec();
    sorted.sort_unstable_by_key(key);
    sorted
}
