//! Rendering of skipped lines and overlap pairs.
//!
//! Text output reproduces the input lines verbatim. JSON output goes through
//! serde DTOs so the engine types stay free of serialization concerns.

use anyhow::{Context, Result};
use chrono::DateTime;
use overlap_engine::{Collected, EventError, Interval, OverlapPair};
use serde::Serialize;
use std::fmt::Write;

pub const NO_OVERLAPS: &str = "No overlaps found";
pub const SKIP_PREFIX: &str = "Skipping invalid event: ";

/// One line per skipped input, then either the pairs or [`NO_OVERLAPS`].
pub fn render_text(rejected: &[EventError], pairs: &[OverlapPair<'_>]) -> String {
    let mut out = String::new();
    for err in rejected {
        let _ = writeln!(out, "{}{}", SKIP_PREFIX, err.line());
    }

    if pairs.is_empty() {
        let _ = writeln!(out, "{}", NO_OVERLAPS);
    }
    for pair in pairs {
        let _ = writeln!(out, "({}, {})", pair.first.text(), pair.second.text());
    }
    out
}

pub fn render_json(collected: &Collected, pairs: &[OverlapPair<'_>]) -> Result<String> {
    let report = ReportDto {
        events: collected.events.len(),
        skipped: collected.rejected.iter().map(EventError::line).collect(),
        overlaps: pairs.iter().map(OverlapDto::from).collect(),
    };
    let mut json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    json.push('\n');
    Ok(json)
}

// ---------------------------------------------------------------------------
// Serde DTOs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ReportDto<'a> {
    events: usize,
    skipped: Vec<&'a str>,
    overlaps: Vec<OverlapDto<'a>>,
}

#[derive(Serialize)]
struct OverlapDto<'a> {
    first: IntervalDto<'a>,
    second: IntervalDto<'a>,
    overlap_seconds: i64,
}

impl<'a> From<&OverlapPair<'a>> for OverlapDto<'a> {
    fn from(pair: &OverlapPair<'a>) -> Self {
        Self {
            first: IntervalDto::from(pair.first),
            second: IntervalDto::from(pair.second),
            overlap_seconds: pair.overlap_seconds(),
        }
    }
}

#[derive(Serialize)]
struct IntervalDto<'a> {
    id: usize,
    start: i64,
    end: i64,
    start_at: Option<String>,
    end_at: Option<String>,
    text: &'a str,
}

impl<'a> From<&'a Interval> for IntervalDto<'a> {
    fn from(e: &'a Interval) -> Self {
        Self {
            id: e.id(),
            start: e.start(),
            end: e.end(),
            start_at: rfc3339(e.start()),
            end_at: rfc3339(e.end()),
            text: e.text(),
        }
    }
}

fn rfc3339(seconds: i64) -> Option<String> {
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.to_rfc3339())
}
