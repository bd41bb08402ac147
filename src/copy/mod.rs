//! # Copy benchmark
//!
//! Measures the throughput of memory-copy strategies over one hot block of
//! f32 lanes while the sweep shifts the buffers through byte alignments
//! 4..=64. Strategies range from library bulk copies and a scalar loop to
//! 4-lane SSE and 8-lane AVX load/store pairs, with aligned variants in
//! plain and non-temporal (cache-bypassing) store flavors.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::config::RunConfig;
use crate::registry::{BenchmarkRunner, ResultRow};
use crate::utils::buffer::{Buffer, SLACK_FLOATS};
use crate::utils::runner::{clear_block, verify_lanes, VerifyError};
use rand::Rng;

/// Runner for the copy benchmark.
pub struct CopyBenchmark;

impl BenchmarkRunner for CopyBenchmark {
    fn name(&self) -> &'static str {
        "copy"
    }

    fn description(&self) -> &'static str {
        "Memory-copy throughput across buffer alignments"
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
        let mut source = Buffer::dest(len, SLACK_FLOATS);
        let mut dest = Buffer::dest(len, SLACK_FLOATS);

        // Alignment 64 satisfies every granularity gate
        let src_fill = source.aligned_mut(64);
        unsafe {
            for i in 0..len {
                src_fill.add(i).write(rng.random_range(-1.0f32..1.0));
            }
        }
        let src = source.aligned(64);
        let dst = dest.aligned_mut(64);

        for strategy in code::available_strategies() {
            unsafe {
                clear_block(dst, len);
                (strategy.function)(dst, src, len);
                verify_lanes(strategy.name, 64, dst, len, |i| unsafe {
                    src.add(i).read_unaligned()
                })
                .map_err(|e| e.to_string())?;
            }
        }
        Ok(())
    }
}
