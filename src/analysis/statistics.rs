//! Closed-form summary statistics over a parsed trace.
//!
//! The variance formula reproduces the legacy arithmetic
//! `sqrt(sum^2 - sum_of_squares)` rather than a textbook variance; output
//! is compared against historical runs, so the formula must not change.

use super::types::{SummaryError, TraceData, TraceSummary};

/// Compute all three statistics for a trace.
pub fn summarize(data: &TraceData) -> Result<TraceSummary, SummaryError> {
    Ok(TraceSummary {
        average_latency_ms: average_latency(&data.latency_samples)?,
        standard_variance: standard_variance(&data.latency_samples)?,
        packet_loss_percent: packet_loss_percent(data.packets_sent, data.packets_received)?,
    })
}

/// Mean of the latency samples in milliseconds.
fn average_latency(samples: &[u64]) -> Result<f64, SummaryError> {
    if samples.is_empty() {
        return Err(SummaryError::NoLatencySamples);
    }
    let sum: f64 = samples.iter().map(|&s| s as f64).sum();
    Ok(sum / samples.len() as f64)
}

/// Legacy "standard variance": `sqrt(sum^2 - sum_of_squares)`.
///
/// A negative radicand is surfaced as an error instead of a NaN. It cannot
/// occur for unsigned samples, where `sum^2 >= sum_of_squares` always holds.
fn standard_variance(samples: &[u64]) -> Result<f64, SummaryError> {
    if samples.is_empty() {
        return Err(SummaryError::NoLatencySamples);
    }
    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for &s in samples {
        let v = s as f64;
        sum += v;
        sum_sq += v * v;
    }
    let radicand = sum * sum - sum_sq;
    if radicand < 0.0 {
        return Err(SummaryError::NegativeRadicand { radicand });
    }
    Ok(radicand.sqrt())
}

/// Fraction of sent packets never observed as received, as a percentage.
fn packet_loss_percent(sent: u64, received: u64) -> Result<f64, SummaryError> {
    if sent == 0 {
        return Err(SummaryError::NoPacketsSent);
    }
    Ok((1.0 - received as f64 / sent as f64) * 100.0)
}
