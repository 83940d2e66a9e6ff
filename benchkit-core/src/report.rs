use crate::{RunSummary, LANGUAGE_TAG};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Rounds to two decimal places, the precision used for milliseconds and
/// seconds in the report.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to three decimal places, used for time-series offsets.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// The document persisted to `api_results.json`, shared across the
/// language implementations of the suite.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub language: String,
    pub total_requests: usize,
    pub successful_requests: usize,
    pub failed_requests: usize,
    pub total_time_seconds: f64,
    pub requests_per_second: f64,
    #[serde(serialize_with = "empty_object_when_none")]
    pub response_times: Option<ResponseTimes>,
    pub timeseries: Vec<TimeseriesPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseTimes {
    pub min_ms: f64,
    pub max_ms: f64,
    pub average_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimeseriesPoint {
    pub timestamp: f64,
    pub response_time_ms: f64,
}

/// A run with zero successes serializes `response_times` as `{}` rather
/// than omitting the key, keeping the document shape stable for the
/// cross-language comparison tooling.
fn empty_object_when_none<S>(value: &Option<ResponseTimes>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(times) => times.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

impl ReportDocument {
    /// Renders a summary into the persisted document shape. Rounding
    /// happens here and nowhere earlier.
    pub fn from_summary(summary: &RunSummary) -> Self {
        Self {
            language: LANGUAGE_TAG.to_string(),
            total_requests: summary.total,
            successful_requests: summary.succeeded,
            failed_requests: summary.failed,
            total_time_seconds: round2(summary.wall_clock_seconds),
            requests_per_second: round2(summary.throughput),
            response_times: summary.response_stats.as_ref().map(|s| ResponseTimes {
                min_ms: round2(s.min_ms),
                max_ms: round2(s.max_ms),
                average_ms: round2(s.mean_ms),
                median_ms: round2(s.median_ms),
                p95_ms: round2(s.p95_ms),
                p99_ms: round2(s.p99_ms),
            }),
            timeseries: summary
                .timeseries
                .iter()
                .map(|p| TimeseriesPoint {
                    timestamp: round3(p.offset_seconds),
                    response_time_ms: round2(p.duration_ms),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RequestOutcome;

    #[test]
    fn rounding_precision() {
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round3(0.12349), 0.123);
    }

    #[test]
    fn document_shape_with_successes() {
        let outcomes = vec![
            RequestOutcome::success(0, 10.123, 0.0015),
            RequestOutcome::success(1, 20.456, 0.0031),
            RequestOutcome::failure(2, 30.0, 0.004, Some("timed out".into())),
        ];
        let summary = RunSummary::compute(&outcomes, 0.004);
        let document = ReportDocument::from_summary(&summary);

        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["language"], "rust");
        assert_eq!(json["total_requests"], 3);
        assert_eq!(json["successful_requests"], 2);
        assert_eq!(json["failed_requests"], 1);
        assert_eq!(json["response_times"]["min_ms"], 10.12);
        assert_eq!(json["response_times"]["max_ms"], 20.46);
        assert_eq!(json["timeseries"][0]["timestamp"], 0.002);
        assert_eq!(json["timeseries"][0]["response_time_ms"], 10.12);
    }

    #[test]
    fn zero_successes_serialize_as_empty_object_and_array() {
        let outcomes = vec![RequestOutcome::failure(0, 10_000.0, 10.0, Some("timeout".into()))];
        let summary = RunSummary::compute(&outcomes, 10.0);
        let document = ReportDocument::from_summary(&summary);

        let json = serde_json::to_value(&document).unwrap();
        assert!(json["response_times"].as_object().unwrap().is_empty());
        assert!(json["timeseries"].as_array().unwrap().is_empty());
        assert_eq!(json["failed_requests"], 1);
    }
}
