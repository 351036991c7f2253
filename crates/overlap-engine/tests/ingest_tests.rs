//! Tests for line collection up to the `end` terminator.

use overlap_engine::{collect_events, Collector, EventError, LineOutcome};

#[test]
fn ids_follow_line_positions_including_rejects() {
    let collected = collect_events([
        "2020-01-01 09:00 10:00",
        "not an event",
        "2020-01-01 11:00 12:00",
    ]);

    let ids: Vec<usize> = collected.events.iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec![0, 2]);
    assert_eq!(collected.rejected.len(), 1);
    assert_eq!(collected.rejected[0].line(), "not an event");
}

#[test]
fn terminator_stops_collection() {
    let collected = collect_events(["2020-01-01 09:00 10:00", "end", "2020-01-01 11:00 12:00"]);
    assert_eq!(collected.events.len(), 1);
    assert!(collected.rejected.is_empty());
}

#[test]
fn terminator_is_trimmed_and_case_sensitive() {
    let mut collector = Collector::new();
    assert!(matches!(collector.push_line("END"), LineOutcome::Rejected(_)));
    assert!(matches!(collector.push_line("End "), LineOutcome::Rejected(_)));
    assert_eq!(collector.push_line("  end\t"), LineOutcome::End);
    assert!(collector.is_finished());
}

#[test]
fn lines_after_end_are_ignored() {
    let mut collector = Collector::new();
    assert_eq!(collector.push_line("end"), LineOutcome::End);
    assert_eq!(collector.push_line("2020-01-01 09:00 10:00"), LineOutcome::End);
    assert!(collector.events().is_empty());
}

#[test]
fn lines_are_trimmed_before_parsing() {
    let mut collector = Collector::new();
    assert_eq!(
        collector.push_line("  2020-01-01 09:00 10:00\r\n"),
        LineOutcome::Accepted(0)
    );
    assert_eq!(collector.events()[0].text(), "2020-01-01 09:00 10:00");
}

#[test]
fn rejected_line_is_reported_trimmed_and_verbatim() {
    let mut collector = Collector::new();
    let outcome = collector.push_line(" 2020-01-01 11:00 09:00 ");
    match outcome {
        LineOutcome::Rejected(err @ EventError::Inverted { .. }) => {
            assert_eq!(err.line(), "2020-01-01 11:00 09:00");
        }
        other => panic!("expected an inverted rejection, got {other:?}"),
    }
    assert_eq!(collector.rejected_count(), 1);
}

#[test]
fn blank_line_is_rejected_and_consumes_an_id() {
    let mut collector = Collector::new();
    assert!(matches!(collector.push_line(""), LineOutcome::Rejected(_)));
    assert_eq!(
        collector.push_line("2020-01-01 09:00 10:00"),
        LineOutcome::Accepted(1)
    );
}

#[test]
fn exhausted_input_without_terminator() {
    let collected = collect_events(vec![String::from("2020-01-01 09:00 10:00")]);
    assert_eq!(collected.events.len(), 1);
}

#[test]
fn empty_input_is_not_an_error() {
    let collected = collect_events(Vec::<String>::new());
    assert!(collected.events.is_empty());
    assert!(collected.rejected.is_empty());
}
