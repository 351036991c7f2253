//! Detect overlapping intervals with a sort-and-sweep instead of all-pairs.
//!
//! The sweep walks the intervals in start order while keeping a window over
//! the end-ordered copy. Anything whose end falls before the current start
//! can never overlap the current interval or any later one, so it is dropped
//! from the front of the window for good. Only the survivors are scanned.
//!
//! Touching intervals (one ends exactly when the other starts) do not
//! overlap. Two intervals with exactly the same start are never reported
//! against each other: a pair is only emitted from the member with the
//! strictly earlier start.

use tracing::{debug, trace};

use crate::event::Interval;

/// Two overlapping intervals.
///
/// `first` is the interval being walked in start order, `second` the
/// candidate found in the end-ordered window. Equality ignores the roles.
#[derive(Debug, Clone, Copy)]
pub struct OverlapPair<'a> {
    pub first: &'a Interval,
    pub second: &'a Interval,
}

impl OverlapPair<'_> {
    /// Length of the shared time range in seconds.
    pub fn overlap_seconds(&self) -> i64 {
        let start = self.first.start().max(self.second.start());
        let end = self.first.end().min(self.second.end());
        end - start
    }

    /// The two ids, smaller first.
    pub fn ids(&self) -> (usize, usize) {
        let (a, b) = (self.first.id(), self.second.id());
        (a.min(b), a.max(b))
    }
}

impl PartialEq for OverlapPair<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ids() == other.ids()
    }
}

impl Eq for OverlapPair<'_> {}

/// Leftmost index in `window` whose end is `>= value`.
///
/// `window` must be sorted ascending by end. Returns `None` when no interval
/// qualifies, i.e. the window is empty or even its last end is `< value`.
pub fn nearest_end_at_or_after(value: i64, window: &[Interval]) -> Option<usize> {
    let last = window.last()?;
    if last.end() < value {
        return None;
    }

    let (mut left, mut right) = (0, window.len());
    while left < right {
        let mid = left + (right - left) / 2;
        if window[mid].end() < value {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    Some(left)
}

/// Find every overlapping pair.
///
/// `by_start` and `by_end` must hold the same intervals, sorted ascending by
/// start and by end respectively (see [`DualOrder`](crate::DualOrder)).
/// Each unordered pair is reported at most once, ordered by the start-order
/// walk and, within one step, by end order.
pub fn find_overlaps<'a>(by_start: &'a [Interval], by_end: &'a [Interval]) -> Vec<OverlapPair<'a>> {
    debug_assert_eq!(by_start.len(), by_end.len());

    let mut pairs = Vec::new();
    let mut window = by_end;
    let mut scanned = 0usize;

    for current in by_start {
        let Some(from) = nearest_end_at_or_after(current.start(), window) else {
            continue;
        };
        if from > 0 {
            trace!(dropped = from, remaining = window.len() - from, "window shrunk");
        }
        window = &window[from..];
        scanned += window.len();

        // Only intervals with a strictly later start are taken from this side;
        // the others are (or were) checked from their own turn in the walk.
        pairs.extend(
            window
                .iter()
                .filter(|candidate| {
                    candidate.start() < current.end()
                        && candidate.id() != current.id()
                        && candidate.start() > current.start()
                })
                .map(|candidate| OverlapPair {
                    first: current,
                    second: candidate,
                }),
        );
    }

    debug!(
        events = by_start.len(),
        scanned,
        overlaps = pairs.len(),
        "overlap sweep complete"
    );
    pairs
}
