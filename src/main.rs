use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::Path;

use tracestat::analysis;

/// Summary statistics for ns-3 WiFi ad-hoc simulation packet traces
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging; diagnostics go to stderr, the report owns stdout
    env_logger::Builder::from_env(Env::default().default_filter_or(&args.log_level)).init();

    let trace_path = Path::new(analysis::TRACE_FILE);
    info!("Reading packet trace from {}", trace_path.display());

    let data = analysis::parse_trace_file(trace_path)?;
    info!(
        "Classified {} sent, {} received, {} latency samples",
        data.packets_sent,
        data.packets_received,
        data.latency_samples.len()
    );

    let summary = analysis::summarize(&data)?;
    analysis::print_summary(&summary);

    Ok(())
}
