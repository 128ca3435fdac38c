//! Packet trace summarization for ns-3 ad-hoc simulations.
//!
//! This module provides the single pass over a simulation trace: line
//! classification, counter accumulation, closed-form statistics, and the
//! fixed three-line report.

pub mod log_parser;
pub mod report;
pub mod statistics;
pub mod types;

pub use log_parser::{classify_line, parse_trace_file, TRACE_FILE};
pub use report::{print_summary, render_summary};
pub use statistics::summarize;
pub use types::{LineClass, SummaryError, TraceData, TraceSummary};
