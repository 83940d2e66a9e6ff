//! Report output: the JSON document for the comparison tooling and the
//! human-readable console summary.

use benchkit_core::{ReportDocument, RunSummary};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the document, pretty-printed, overwriting any previous run.
pub fn write_report(document: &ReportDocument, path: &Path) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(document)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Persists the report and prints the console summary. A failed write is
/// logged and the summary still prints; nothing here aborts the run.
pub fn emit(summary: &RunSummary, path: &Path) {
    let document = ReportDocument::from_summary(summary);

    match write_report(&document, path) {
        Ok(()) => println!("\nResults saved to {}", path.display()),
        Err(err) => error!("could not persist {}: {err}", path.display()),
    }

    print_summary(&document);
}

/// Console rendering of the report figures, two decimal places throughout.
pub fn print_summary(document: &ReportDocument) {
    println!("\n{}", "=".repeat(60));
    println!("Language: {}", document.language.to_uppercase());
    println!("{}", "=".repeat(60));
    println!("Total Requests: {}", document.total_requests);
    println!("Successful: {}", document.successful_requests);
    println!("Failed: {}", document.failed_requests);
    println!("Total Time: {:.2}s", document.total_time_seconds);
    println!("Requests/sec: {:.2}", document.requests_per_second);

    if let Some(times) = &document.response_times {
        println!("\nResponse Times (ms):");
        println!("  Min: {:.2}", times.min_ms);
        println!("  Max: {:.2}", times.max_ms);
        println!("  Avg: {:.2}", times.average_ms);
        println!("  Median: {:.2}", times.median_ms);
        println!("  P95: {:.2}", times.p95_ms);
        println!("  P99: {:.2}", times.p99_ms);
    }
    println!("{}\n", "=".repeat(60));
}
