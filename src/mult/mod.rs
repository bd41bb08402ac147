//! # Multiply benchmark
//!
//! Same sweep as the copy benchmark, but each strategy computes an
//! elementwise product of two source operands instead of copying one. The
//! operands share a single wide allocation, offset from one another, and are
//! shifted independently to each swept alignment.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::config::RunConfig;
use crate::registry::{BenchmarkRunner, ResultRow};
use crate::utils::buffer::{Buffer, OPERAND_OFFSET, SLACK_FLOATS, WIDE_SLACK_FLOATS};
use crate::utils::runner::{clear_block, verify_lanes, VerifyError};
use rand::Rng;

/// Runner for the multiply benchmark.
pub struct MultBenchmark;

impl BenchmarkRunner for MultBenchmark {
    fn name(&self) -> &'static str {
        "mult"
    }

    fn description(&self) -> &'static str {
        "Elementwise-multiply throughput across buffer alignments"
    }

    fn columns(&self) -> &'static [&'static str] {
        code::COLUMNS
    }

    fn run_sweep(&self, cfg: &RunConfig) -> Result<Vec<ResultRow>, VerifyError> {
        bench::run_sweep(cfg)
    }

    fn verify(&self) -> Result<(), String> {
        let mut rng = rand::rng();
        // Non-multiple-of-8 length exercises the scalar tails
        let len = 1023;
        let mut source = Buffer::source(len, WIDE_SLACK_FLOATS, 0.0);
        let mut dest = Buffer::dest(len, SLACK_FLOATS);
        source.fill_with(|| rng.random_range(-1.0f32..1.0));

        // Alignment 64 satisfies every granularity gate
        let a = source.aligned(64);
        let b = source.aligned_at(OPERAND_OFFSET, 64);
        let dst = dest.aligned_mut(64);

        for strategy in code::available_strategies() {
            unsafe {
                clear_block(dst, len);
                (strategy.function)(dst, a, b, len);
                verify_lanes(strategy.name, 64, dst, len, |i| unsafe {
                    a.add(i).read_unaligned() * b.add(i).read_unaligned()
                })
                .map_err(|e| e.to_string())?;
            }
        }
        Ok(())
    }
}
