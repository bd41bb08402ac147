//! Benchmark registry for discovery and execution.
//!
//! Each benchmark variant (copy, multiply) implements [`BenchmarkRunner`];
//! the registry holds them in a fixed order so the CLI can run one by name
//! or all of them in sequence.

use crate::config::RunConfig;
use crate::utils::runner::VerifyError;

/// One chart row: the alignment plus one elapsed-seconds sample per strategy
/// in catalog order. Gated-off strategies hold the sentinel `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub alignment: usize,
    pub times: Vec<f64>,
}

impl ResultRow {
    pub fn new(alignment: usize, times: Vec<f64>) -> Self {
        Self { alignment, times }
    }

    /// Total column count including the alignment column.
    pub fn width(&self) -> usize {
        self.times.len() + 1
    }
}

/// Trait that all benchmark variants implement.
pub trait BenchmarkRunner {
    /// Name used to select the benchmark on the command line
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Fixed report column literals, alignment column first
    fn columns(&self) -> &'static [&'static str];

    /// Run the full alignment sweep. A verification mismatch aborts the
    /// sweep and surfaces as the error.
    fn run_sweep(&self, cfg: &RunConfig) -> Result<Vec<ResultRow>, VerifyError>;

    /// Single-shot correctness check of every strategy on random data at a
    /// fully aligned offset, independent of any timing.
    fn verify(&self) -> Result<(), String>;
}

/// Registry of all benchmark variants.
pub struct BenchmarkRegistry {
    benchmarks: Vec<Box<dyn BenchmarkRunner>>,
}

impl BenchmarkRegistry {
    pub fn new() -> Self {
        Self {
            benchmarks: Vec::new(),
        }
    }

    pub fn register<B: BenchmarkRunner + 'static>(&mut self, bench: B) {
        self.benchmarks.push(Box::new(bench));
    }

    pub fn all(&self) -> &[Box<dyn BenchmarkRunner>] {
        &self.benchmarks
    }

    pub fn find(&self, name: &str) -> Option<&dyn BenchmarkRunner> {
        self.benchmarks
            .iter()
            .find(|b| b.name() == name)
            .map(|b| b.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.benchmarks.iter().map(|b| b.name()).collect()
    }
}

impl Default for BenchmarkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with both benchmark variants.
pub fn build_registry() -> BenchmarkRegistry {
    let mut registry = BenchmarkRegistry::new();
    registry.register(crate::copy::CopyBenchmark);
    registry.register(crate::mult::MultBenchmark);
    registry
}
