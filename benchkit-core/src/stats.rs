use crate::RequestOutcome;

/// Nearest-rank percentile over an ascending-sorted slice.
///
/// For `p` in (0, 1] the rank is `ceil(count * p)`, clamped to the valid
/// index range. No interpolation. An empty slice yields 0.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let index = ((sorted.len() as f64 * p).ceil() as usize).saturating_sub(1);
    sorted[index.min(sorted.len() - 1)]
}

/// Response-time statistics over the succeeded outcomes of a run, in
/// milliseconds. Values are kept at full precision; rounding happens only
/// when the report document is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseStats {
    pub min_ms: f64,
    pub max_ms: f64,
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
}

/// One succeeded request, positioned by its completion offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimePoint {
    pub offset_seconds: f64,
    pub duration_ms: f64,
}

/// Aggregate view of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// First dispatch to last completion.
    pub wall_clock_seconds: f64,
    /// Total requests over wall clock; 0 when the wall clock is 0.
    pub throughput: f64,
    /// `None` when the run had zero successes.
    pub response_stats: Option<ResponseStats>,
    /// Succeeded requests sorted by completion offset ascending.
    pub timeseries: Vec<TimePoint>,
}

impl RunSummary {
    /// Computes the summary of a finished run. Pure function of its
    /// inputs: the same outcome list and wall clock always produce an
    /// identical summary.
    pub fn compute(outcomes: &[RequestOutcome], wall_clock_seconds: f64) -> Self {
        let total = outcomes.len();
        let succeeded = outcomes.iter().filter(|o| o.succeeded).count();
        let failed = total - succeeded;

        let throughput = if wall_clock_seconds > 0.0 {
            total as f64 / wall_clock_seconds
        } else {
            0.0
        };

        let mut durations: Vec<f64> = outcomes
            .iter()
            .filter(|o| o.succeeded)
            .map(|o| o.duration_ms)
            .collect();
        durations.sort_by(f64::total_cmp);

        let response_stats = if durations.is_empty() {
            None
        } else {
            let sum: f64 = durations.iter().sum();
            Some(ResponseStats {
                min_ms: durations[0],
                max_ms: durations[durations.len() - 1],
                mean_ms: sum / durations.len() as f64,
                median_ms: percentile(&durations, 0.5),
                p95_ms: percentile(&durations, 0.95),
                p99_ms: percentile(&durations, 0.99),
            })
        };

        // Outcomes arrive in dispatch order; the time series is reported
        // in completion order.
        let mut timeseries: Vec<TimePoint> = outcomes
            .iter()
            .filter(|o| o.succeeded)
            .map(|o| TimePoint {
                offset_seconds: o.offset_seconds,
                duration_ms: o.duration_ms,
            })
            .collect();
        timeseries.sort_by(|a, b| a.offset_seconds.total_cmp(&b.offset_seconds));

        Self {
            total,
            succeeded,
            failed,
            wall_clock_seconds,
            throughput,
            response_stats,
            timeseries,
        }
    }
}
