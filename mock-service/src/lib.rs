//! HTTP endpoint with deterministic latency and failure injection, used
//! to stress the request harness without touching the network.

use axum::{extract::Path, http::StatusCode, routing::get, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

pub fn router() -> Router {
    Router::new()
        .route("/ok/delay/ms/:delay_ms", get(ok))
        .route("/status/:code/delay/ms/:delay_ms", get(status))
        .route("/flaky/:period/delay/ms/:delay_ms", get(flaky))
}

/// Serves forever on `addr`.
pub async fn run(addr: SocketAddr) {
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, router()).await.unwrap();
}

/// Binds `addr` (port 0 picks an ephemeral port), serves in a background
/// task, and returns the bound address.
pub async fn spawn(addr: SocketAddr) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    let local = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });
    local
}

async fn ok(Path(delay_ms): Path<u64>) {
    REQUESTS_SERVED.fetch_add(1, Ordering::Relaxed);
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
}

async fn status(Path((code, delay_ms)): Path<(u16, u64)>) -> StatusCode {
    REQUESTS_SERVED.fetch_add(1, Ordering::Relaxed);
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

static FLAKY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Deterministic failure injection: every `period`-th request (counted
/// from zero) gets a 500, the rest a 200. With period=10, a 1000-request
/// run sees exactly 100 failures.
async fn flaky(Path((period, delay_ms)): Path<(u64, u64)>) -> StatusCode {
    REQUESTS_SERVED.fetch_add(1, Ordering::Relaxed);
    let n = FLAKY_COUNTER.fetch_add(1, Ordering::Relaxed);
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    if period > 0 && n % period == 0 {
        debug!("mock server injecting 500 for request {n}");
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}

/** Throughput printer **/

static REQUESTS_SERVED: AtomicU64 = AtomicU64::new(0);

pub async fn tps_measure_task() {
    loop {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let served = REQUESTS_SERVED.fetch_min(0, Ordering::Relaxed);
        println!("{served} TPS");
    }
}
