use std::time::Duration;

/// Endpoint every request of the reference run targets.
pub const TARGET_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";

/// Number of requests launched per run, all in flight at once.
pub const REQUEST_COUNT: usize = 1000;

/// Per-request timeout. Exceeding it fails the request; there is no retry.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Redirects are followed transparently up to this depth.
pub const MAX_REDIRECTS: usize = 10;

/// Report document path, overwritten on every run.
pub const RESULTS_PATH: &str = "api_results.json";

/// Implementation tag embedded in the report document.
pub const LANGUAGE_TAG: &str = "rust";
