//! Rendering of the three-line summary printed on stdout.

use super::types::TraceSummary;

/// Render the summary in its fixed three-line form.
///
/// Labels, order, and the three-decimal precision are part of the output
/// contract; downstream scripts parse these lines.
pub fn render_summary(summary: &TraceSummary) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "Average latency (ms): {:.3}",
        summary.average_latency_ms
    ));
    lines.push(format!("Standard variance: {:.3}", summary.standard_variance));
    lines.push(format!("Packet Loss %: {:.3}", summary.packet_loss_percent));

    lines.join("\n")
}

/// Print the summary to stdout.
pub fn print_summary(summary: &TraceSummary) {
    println!("{}", render_summary(summary));
}
