//! # overlap-engine
//!
//! Report every pair of overlapping events from `date start end` text lines.
//!
//! Lines are normalized to epoch-second intervals, copied into start order and
//! end order, and swept once. The sweep binary-searches a shrinking window of
//! the end-ordered copy instead of comparing all pairs.
//!
//! ```rust
//! use overlap_engine::{collect_events, DualOrder};
//!
//! let input = [
//!     "2020-01-01 09:00 10:30",
//!     "2020-01-01 10:00 11:00",
//!     "2020-01-01 12:00 13:00",
//! ];
//! let collected = collect_events(input);
//! let order = DualOrder::new(&collected.events);
//! let pairs = order.overlaps();
//!
//! assert_eq!(pairs.len(), 1);
//! assert_eq!(pairs[0].first.text(), "2020-01-01 09:00 10:30");
//! assert_eq!(pairs[0].second.text(), "2020-01-01 10:00 11:00");
//! assert_eq!(pairs[0].overlap_seconds(), 30 * 60);
//! ```
//!
//! ## Modules
//!
//! - [`normalize`] — date + clock time → epoch seconds
//! - [`event`] — `Interval` and the line parser that builds it
//! - [`sort`] — start-ordered and end-ordered copies
//! - [`overlap`] — the sweep and its binary search
//! - [`ingest`] — line collection up to the `end` terminator
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod ingest;
pub mod normalize;
pub mod overlap;
pub mod sort;

pub use error::{EventError, TimeError};
pub use event::Interval;
pub use ingest::{collect_events, Collected, Collector, LineOutcome, TERMINATOR};
pub use normalize::to_epoch_seconds;
pub use overlap::{find_overlaps, nearest_end_at_or_after, OverlapPair};
pub use sort::{sort_by_end, sort_by_start, DualOrder};
