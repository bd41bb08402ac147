//! # simd-sweep
//!
//! Throughput benchmark for memory-copy and elementwise-multiply strategies
//! across a sweep of buffer alignments. Each strategy (scalar loop, library
//! copy, unaligned/aligned SSE and AVX, non-temporal streaming stores) is
//! timed over a fixed element budget at every byte alignment from 4 to 64,
//! verified lane-by-lane, and reported as chart-ready rows.

pub mod config;
pub mod copy;
pub mod mult;
pub mod registry;
pub mod report;
pub mod utils;

/// Re-export tui from utils for the CLI
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::RunConfig;
    pub use crate::registry::{build_registry, BenchmarkRegistry, BenchmarkRunner, ResultRow};
    pub use crate::utils::runner::VerifyError;
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;

    #[test]
    fn test_all_benchmarks_registry_verify() {
        let registry = build_registry();
        let benchmarks = registry.all();

        for bench in benchmarks {
            match bench.verify() {
                Ok(_) => {}
                Err(e) => panic!("Benchmark '{}' failed verification: {}", bench.name(), e),
            }
        }
    }
}
