//! Concurrent request benchmark harness.
//!
//! Launches every request up front, one task per request, with no cap on
//! how many are in flight. The launch-all-at-once shape is a stress
//! characteristic the suite compares across languages; capping it with a
//! pool or semaphore would change what the numbers mean.

use benchkit_core::{RequestOutcome, RunSummary, MAX_REDIRECTS, REQUEST_TIMEOUT};
use reqwest::{redirect, Client, StatusCode};
use std::time::Instant;
use tokio::task::JoinHandle;
#[allow(unused_imports)]
use tracing::{debug, info, warn};

/// Everything a finished pass produces: the per-request outcomes and the
/// summary derived from them.
#[derive(Debug)]
pub struct BenchmarkRun {
    pub outcomes: Vec<RequestOutcome>,
    pub summary: RunSummary,
}

/// Runs a complete pass: `request_count` GETs against `url`, all spawned
/// before any completes, then a single join barrier.
///
/// Individual failures never abort the pass. A hung request is bounded
/// only by the client timeout; there is no run-level cancellation.
pub async fn run(url: &str, request_count: usize) -> BenchmarkRun {
    info!("starting request benchmark: {request_count} requests to {url}");

    // The client (pool, TLS config) is shared and built once, so no
    // per-request sample pays its setup cost.
    let client = match Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .redirect(redirect::Policy::limited(MAX_REDIRECTS))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            warn!("failed to build HTTP client: {err}");
            return failed_run(request_count, err.to_string());
        }
    };

    let run_start = Instant::now();

    let mut tasks: Vec<JoinHandle<RequestOutcome>> = Vec::with_capacity(request_count);
    for sequence_id in 0..request_count {
        let client = client.clone();
        let url = url.to_string();
        tasks.push(tokio::spawn(async move {
            execute_request(&client, &url, sequence_id, run_start).await
        }));
    }

    // The single synchronization barrier: every worker joins before any
    // aggregation happens.
    let mut outcomes = Vec::with_capacity(request_count);
    for (sequence_id, task) in tasks.into_iter().enumerate() {
        match task.await {
            Ok(outcome) => outcomes.push(outcome),
            Err(err) => {
                // A panicked worker still accounts for its slot.
                outcomes.push(RequestOutcome::failure(
                    sequence_id,
                    0.0,
                    run_start.elapsed().as_secs_f64(),
                    Some(err.to_string()),
                ));
            }
        }
    }

    let wall_clock_seconds = run_start.elapsed().as_secs_f64();
    let summary = RunSummary::compute(&outcomes, wall_clock_seconds);
    debug!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        wall_clock_seconds,
        "request benchmark finished"
    );

    BenchmarkRun { outcomes, summary }
}

/// Issues one GET and records the outcome. Exactly one attempt; timeout
/// and redirect policy come from the shared client.
///
/// `duration_ms` spans send through body drain. The body is read and
/// discarded so that completion and the measured time cover the full
/// exchange.
async fn execute_request(
    client: &Client,
    url: &str,
    sequence_id: usize,
    run_start: Instant,
) -> RequestOutcome {
    let request_start = Instant::now();

    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            match response.bytes().await {
                Ok(_) => {
                    let duration_ms = request_start.elapsed().as_secs_f64() * 1000.0;
                    let offset_seconds = run_start.elapsed().as_secs_f64();
                    if status == StatusCode::OK {
                        RequestOutcome::success(sequence_id, duration_ms, offset_seconds)
                    } else {
                        // The transport succeeded, so no error detail.
                        RequestOutcome::failure(sequence_id, duration_ms, offset_seconds, None)
                    }
                }
                Err(err) => transport_failure(sequence_id, request_start, run_start, err),
            }
        }
        Err(err) => transport_failure(sequence_id, request_start, run_start, err),
    }
}

fn transport_failure(
    sequence_id: usize,
    request_start: Instant,
    run_start: Instant,
    err: reqwest::Error,
) -> RequestOutcome {
    RequestOutcome::failure(
        sequence_id,
        request_start.elapsed().as_secs_f64() * 1000.0,
        run_start.elapsed().as_secs_f64(),
        Some(err.to_string()),
    )
}

/// Fallback when no request could even be attempted: every slot is
/// recorded as failed so the pass still yields exactly N outcomes.
fn failed_run(request_count: usize, detail: String) -> BenchmarkRun {
    let outcomes: Vec<RequestOutcome> = (0..request_count)
        .map(|sequence_id| RequestOutcome::failure(sequence_id, 0.0, 0.0, Some(detail.clone())))
        .collect();
    let summary = RunSummary::compute(&outcomes, 0.0);
    BenchmarkRun { outcomes, summary }
}
