/// Recorded result of one request attempt.
///
/// Outcomes are created by the worker tasks and never mutated once
/// collected; the summary is derived from the full set after the join
/// barrier.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOutcome {
    /// Position in dispatch order, `0..N`. Completion order may differ.
    pub sequence_id: usize,
    /// Transport completed and the status was exactly 200.
    pub succeeded: bool,
    /// Elapsed time around the request call, recorded on failure too.
    pub duration_ms: f64,
    /// Completion time relative to the start of the whole run.
    pub offset_seconds: f64,
    /// Transport error description. `None` for a non-200 response, since
    /// the transport itself succeeded.
    pub error_detail: Option<String>,
}

impl RequestOutcome {
    pub fn success(sequence_id: usize, duration_ms: f64, offset_seconds: f64) -> Self {
        Self {
            sequence_id,
            succeeded: true,
            duration_ms,
            offset_seconds,
            error_detail: None,
        }
    }

    pub fn failure(
        sequence_id: usize,
        duration_ms: f64,
        offset_seconds: f64,
        error_detail: Option<String>,
    ) -> Self {
        Self {
            sequence_id,
            succeeded: false,
            duration_ms,
            offset_seconds,
            error_detail,
        }
    }
}
