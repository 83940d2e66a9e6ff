//! Single-threaded algorithm benchmarks. Each prints its result and
//! elapsed time once per run; none of them share state with the request
//! harness.

pub mod fibonacci;
pub mod matrix;
pub mod sorting;
pub mod strings;
