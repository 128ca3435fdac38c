//! # TraceStat - Summary statistics for ns-3 ad-hoc simulation traces
//!
//! This library summarizes the line-oriented packet trace written by an
//! ns-3 WiFi ad-hoc simulation run. It makes one pass over the trace,
//! classifies each line by a literal marker prefix, and computes three
//! statistics: average latency, the legacy "standard variance", and the
//! packet loss percentage.
//!
//! ## Overview
//!
//! The trace producer logs one line per event: `New` when a packet is
//! handed to the sending socket, `Received` when it arrives, and `latop`
//! followed by a millisecond latency value. The first line of the file is
//! a header and is discarded. Everything else is ignored.
//!
//! ## Architecture
//!
//! All functionality lives in the `analysis` module:
//!
//! - `analysis::log_parser`: line classification and the single-pass reader
//! - `analysis::statistics`: the three closed-form statistics
//! - `analysis::report`: the fixed three-line stdout report
//! - `analysis::types`: classification, accumulator, and error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tracestat::analysis;
//!
//! let data = analysis::parse_trace_file(Path::new(analysis::TRACE_FILE))?;
//! let summary = analysis::summarize(&data)?;
//! analysis::print_summary(&summary);
//! # Ok::<(), color_eyre::eyre::Report>(())
//! ```
//!
//! ## Error Handling
//!
//! Every failure is fatal: I/O errors carry `color_eyre` context naming the
//! trace path, and the named computation failures (`SummaryError`) propagate
//! unrecovered to the binary, which exits non-zero with the diagnostic.

pub mod analysis;
