//! Core data types for packet trace summarization.

/// Classification of a single trace line by its literal prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Line starts with "New" - a packet was handed to the sending socket
    Sent,
    /// Line starts with "Received" - a packet arrived at the receiver
    Received,
    /// Line starts with "latop" - carries a latency sample in milliseconds
    Latency(u64),
    /// Line matches no marker
    Ignored,
}

/// Counters and samples accumulated over one pass of the trace file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceData {
    pub packets_sent: u64,
    pub packets_received: u64,
    pub latency_samples: Vec<u64>,
}

impl TraceData {
    /// Fold one classified line into the accumulated counts.
    pub fn record(&mut self, class: LineClass) {
        match class {
            LineClass::Sent => self.packets_sent += 1,
            LineClass::Received => self.packets_received += 1,
            LineClass::Latency(ms) => self.latency_samples.push(ms),
            LineClass::Ignored => {}
        }
    }
}

/// The three statistics printed at the end of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSummary {
    pub average_latency_ms: f64,
    pub standard_variance: f64,
    pub packet_loss_percent: f64,
}

/// Errors that can occur while classifying or summarizing a trace
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("Latency line carries no usable sample: {line:?}")]
    InvalidLatencyLine { line: String },

    #[error("Trace contains no latency samples")]
    NoLatencySamples,

    #[error("Trace contains no sent packets")]
    NoPacketsSent,

    #[error("Variance radicand is negative: {radicand}")]
    NegativeRadicand { radicand: f64 },
}
