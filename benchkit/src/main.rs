use benchkit::{algos, harness, report};
use benchkit_core::{REQUEST_COUNT, RESULTS_PATH, TARGET_URL};
use std::path::Path;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    FmtSubscriber::builder()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "benchkit=info".to_string()))
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "=".repeat(60));
    println!("Rust Performance Benchmarks");
    println!("{}", "=".repeat(60));
    println!();

    println!("Running Sorting Benchmark...");
    algos::sorting::run_benchmark();
    println!();

    println!("Running Fibonacci Benchmarks...");
    algos::fibonacci::run_benchmark();
    println!();

    println!("Running Matrix Multiplication Benchmark...");
    algos::matrix::run_benchmark();
    println!();

    println!("Running String Manipulation Benchmarks...");
    algos::strings::run_benchmark();
    println!();

    println!("Running API Request Benchmark...");
    println!("Starting benchmark: {REQUEST_COUNT} requests to {TARGET_URL}");
    let run = harness::run(TARGET_URL, REQUEST_COUNT).await;
    report::emit(&run.summary, Path::new(RESULTS_PATH));

    println!("{}", "=".repeat(60));
    println!("All benchmarks completed!");
    println!("{}", "=".repeat(60));
}
