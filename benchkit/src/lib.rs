//! Rust implementation of the cross-language performance benchmark suite.
//!
//! Each benchmark is independent: the algorithm benchmarks in [`algos`]
//! time a single-threaded computation and print the figures, while
//! [`harness`] runs the concurrent HTTP request benchmark and [`report`]
//! persists its results for the comparison tooling.

pub mod algos;
pub mod harness;
pub mod report;
