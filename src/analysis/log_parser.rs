//! Line classification for ns-3 ad-hoc simulation traces.
//!
//! Classifies each trace line by its literal prefix and extracts latency
//! samples from "latop" lines in a single streaming pass.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use color_eyre::eyre::{Context, Result};
use regex::Regex;

use super::types::{LineClass, SummaryError, TraceData};

/// Trace file written by the simulation, relative to the working directory
pub const TRACE_FILE: &str = "output_detail";

/// Marker prefix for a packet handed to the sending socket
pub const MARKER_SENT: &str = "New";
/// Marker prefix for a packet observed at the receiver
pub const MARKER_RECEIVED: &str = "Received";
/// Marker prefix for a latency record
pub const MARKER_LATENCY: &str = "latop";

/// Match the first run of decimal digits anywhere in a line
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid digit-run regex"));

/// Classify a single trace line by its prefix.
///
/// Markers are matched at offset 0 only; a marker occurring later in the
/// line does not count. For a "latop" line the sample value is the first
/// digit run found anywhere in the line, wherever the producer put it.
pub fn classify_line(line: &str) -> Result<LineClass, SummaryError> {
    if line.starts_with(MARKER_SENT) {
        return Ok(LineClass::Sent);
    }
    if line.starts_with(MARKER_RECEIVED) {
        return Ok(LineClass::Received);
    }
    if line.starts_with(MARKER_LATENCY) {
        let sample = DIGIT_RUN
            .find(line)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .ok_or_else(|| SummaryError::InvalidLatencyLine {
                line: line.to_string(),
            })?;
        return Ok(LineClass::Latency(sample));
    }
    Ok(LineClass::Ignored)
}

/// Parse a trace file in one pass.
///
/// The first line is a header and is discarded without classification.
/// Any I/O error and any "latop" line without a sample aborts the pass.
pub fn parse_trace_file(path: &Path) -> Result<TraceData> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open trace file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut data = TraceData::default();
    let mut lines = reader.lines();

    // Header line, content not validated
    if let Some(header) = lines.next() {
        header.with_context(|| format!("Failed to read header from {}", path.display()))?;
    }

    for line_result in lines {
        let line = line_result
            .with_context(|| format!("Failed to read line from {}", path.display()))?;
        data.record(classify_line(&line)?);
    }

    Ok(data)
}
