//! End-to-end tests for trace parsing and summarization.
//!
//! Each test writes a real trace file and runs the full
//! parse -> summarize -> render path against it.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use tracestat::analysis::{parse_trace_file, render_summary, summarize, SummaryError};

/// Write a trace fixture, first line being the producer's header.
fn write_trace(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_full_summary_over_realistic_trace() {
    let file = write_trace(
        "Waf: Entering directory `/home/sim/ns-3/build'\n\
         New packet!\n\
         Received one packet!\n\
         latop:10\n\
         New packet!\n\
         latop 20ms\n\
         AODV routing table updated\n\
         latop:30\n",
    );

    let data = parse_trace_file(file.path()).unwrap();
    assert_eq!(data.packets_sent, 2);
    assert_eq!(data.packets_received, 1);
    assert_eq!(data.latency_samples, vec![10, 20, 30]);

    let summary = summarize(&data).unwrap();
    assert_eq!(
        render_summary(&summary),
        "Average latency (ms): 20.000\n\
         Standard variance: 46.904\n\
         Packet Loss %: 50.000"
    );
}

#[test]
fn test_header_starting_with_marker_is_not_counted() {
    let file = write_trace(
        "New packet!\n\
         New packet!\n\
         Received one packet!\n\
         latop:5\n",
    );

    let data = parse_trace_file(file.path()).unwrap();
    assert_eq!(data.packets_sent, 1);
    assert_eq!(data.packets_received, 1);
    assert_eq!(data.latency_samples, vec![5]);
}

#[test]
fn test_trace_without_latency_records_fails() {
    let file = write_trace(
        "header\n\
         New packet!\n\
         Received one packet!\n",
    );

    let data = parse_trace_file(file.path()).unwrap();
    let err = summarize(&data).unwrap_err();
    assert!(matches!(err, SummaryError::NoLatencySamples));
}

#[test]
fn test_trace_without_sent_packets_fails() {
    let file = write_trace(
        "header\n\
         Received one packet!\n\
         latop:7\n",
    );

    let data = parse_trace_file(file.path()).unwrap();
    let err = summarize(&data).unwrap_err();
    assert!(matches!(err, SummaryError::NoPacketsSent));
}

#[test]
fn test_latency_line_without_digits_aborts_parse() {
    let file = write_trace(
        "header\n\
         New packet!\n\
         latop error\n",
    );

    let err = parse_trace_file(file.path()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SummaryError>(),
        Some(SummaryError::InvalidLatencyLine { .. })
    ));
}

#[test]
fn test_missing_trace_file_fails_with_path_in_context() {
    let err = parse_trace_file(Path::new("definitely_missing_trace")).unwrap_err();
    assert!(format!("{err}").contains("definitely_missing_trace"));
}

#[test]
fn test_markers_at_nonzero_offset_do_not_count() {
    let file = write_trace(
        "header\n\
         xNew packet\n\
         one packet Received\n\
         New packet!\n\
         latop:12\n",
    );

    let data = parse_trace_file(file.path()).unwrap();
    assert_eq!(data.packets_sent, 1);
    assert_eq!(data.packets_received, 0);
    assert_eq!(data.latency_samples, vec![12]);
}

#[test]
fn test_empty_trace_has_no_records() {
    let file = write_trace("");

    let data = parse_trace_file(file.path()).unwrap();
    assert_eq!(data.packets_sent, 0);
    assert_eq!(data.packets_received, 0);
    assert!(data.latency_samples.is_empty());
}
