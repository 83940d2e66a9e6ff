mod utils;
#[allow(unused)]
use utils::*;

use benchkit::{harness, report};
use benchkit_core::ReportDocument;

#[tokio::test]
async fn no_outcome_is_lost_or_duplicated_under_full_concurrency() {
    let addr = start_mock().await;
    let url = format!("http://{addr}/ok/delay/ms/5");

    let run = harness::run(&url, 1000).await;

    assert_eq!(run.outcomes.len(), 1000);
    assert_eq!(run.summary.succeeded + run.summary.failed, 1000);

    let mut ids: Vec<usize> = run.outcomes.iter().map(|o| o.sequence_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..1000).collect::<Vec<usize>>());
}

#[tokio::test]
async fn mixed_statuses_split_into_successes_and_failures() {
    let addr = start_mock().await;
    // Every 10th request gets a 500: 100 failures out of 1000.
    let url = format!("http://{addr}/flaky/10/delay/ms/5");

    let run = harness::run(&url, 1000).await;

    assert_eq!(run.summary.succeeded, 900);
    assert_eq!(run.summary.failed, 100);

    // Response-time stats come from the 900 successes only.
    let stats = run.summary.response_stats.as_ref().unwrap();
    assert!(stats.min_ms >= 5.0);
    assert!(stats.min_ms <= stats.median_ms);
    assert!(stats.median_ms <= stats.p95_ms);
    assert!(stats.p95_ms <= stats.p99_ms);
    assert!(stats.p99_ms <= stats.max_ms);
    assert_eq!(run.summary.timeseries.len(), 900);

    // A 500 is a clean transport exchange, so it carries no error detail.
    assert!(run
        .outcomes
        .iter()
        .filter(|o| !o.succeeded)
        .all(|o| o.error_detail.is_none()));
}

#[tokio::test]
async fn non_200_status_is_a_failure() {
    let addr = start_mock().await;
    let url = format!("http://{addr}/status/404/delay/ms/1");

    let run = harness::run(&url, 25).await;

    assert_eq!(run.summary.succeeded, 0);
    assert_eq!(run.summary.failed, 25);
    assert!(run.summary.response_stats.is_none());
    assert!(run.summary.timeseries.is_empty());
}

#[tokio::test]
async fn connection_errors_are_recorded_not_fatal() {
    init();
    // Bind and immediately drop a listener to get a port nothing serves.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let run = harness::run(&format!("http://{addr}/"), 10).await;

    assert_eq!(run.summary.failed, 10);
    assert!(run
        .outcomes
        .iter()
        .all(|o| !o.succeeded && o.error_detail.is_some()));
}

#[tokio::test]
async fn zero_requests_still_summarize() {
    let addr = start_mock().await;
    let url = format!("http://{addr}/ok/delay/ms/1");

    let run = harness::run(&url, 0).await;

    assert_eq!(run.outcomes.len(), 0);
    assert_eq!(run.summary.total, 0);
    assert!(run.summary.response_stats.is_none());
}

#[tokio::test]
async fn timeseries_offsets_are_ascending() {
    let addr = start_mock().await;
    let url = format!("http://{addr}/ok/delay/ms/2");

    let run = harness::run(&url, 200).await;

    let offsets: Vec<f64> = run
        .summary
        .timeseries
        .iter()
        .map(|p| p.offset_seconds)
        .collect();
    assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn report_document_matches_the_shared_schema() -> anyhow::Result<()> {
    let addr = start_mock().await;
    let url = format!("http://{addr}/ok/delay/ms/1");

    let run = harness::run(&url, 50).await;
    let document = ReportDocument::from_summary(&run.summary);

    let path = std::env::temp_dir().join("benchkit_schema_check.json");
    report::write_report(&document, &path)?;

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    std::fs::remove_file(&path)?;

    assert_eq!(json["language"], "rust");
    assert_eq!(json["total_requests"], 50);
    assert_eq!(json["successful_requests"], 50);
    assert_eq!(json["failed_requests"], 0);
    assert!(json["total_time_seconds"].is_number());
    assert!(json["requests_per_second"].is_number());
    assert!(json["response_times"]["median_ms"].is_number());

    let timestamps: Vec<f64> = json["timeseries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["timestamp"].as_f64().unwrap())
        .collect();
    assert_eq!(timestamps.len(), 50);
    assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));

    Ok(())
}
