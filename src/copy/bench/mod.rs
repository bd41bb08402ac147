//! Alignment sweep driver for the copy benchmark.

use crate::config::RunConfig;
use crate::registry::ResultRow;
use crate::utils::buffer::{Buffer, SLACK_FLOATS};
use crate::utils::runner::{clear_block, time_blocks, verify_lanes, VerifyError};
use crate::utils::StrategyInfo;

use super::code::{self, CopyFn};

/// Sweep alignments 4..=64 and time every admitted strategy at each one.
///
/// Gated-off strategies contribute the `0.0` sentinel so every row has the
/// full column width. One progress line per executed strategy goes to
/// stderr; the first verification mismatch aborts the sweep.
pub fn run_sweep(cfg: &RunConfig) -> Result<Vec<ResultRow>, VerifyError> {
    let strategies = code::available_strategies();
    let source = Buffer::source(cfg.num_floats, SLACK_FLOATS, cfg.check_value);
    let mut dest = Buffer::dest(cfg.num_floats, SLACK_FLOATS);

    let mut rows = Vec::with_capacity(61);
    for alignment in 4..=64 {
        let mut times = Vec::with_capacity(strategies.len());
        for strategy in &strategies {
            if strategy.admitted(alignment, cfg.has_avx) {
                let secs = run_one(cfg, strategy, alignment, &mut dest, &source)?;
                eprintln!("{} ({}) took {} seconds.", strategy.name, alignment, secs);
                times.push(secs);
            } else {
                times.push(0.0);
            }
        }
        let row = ResultRow::new(alignment, times);
        assert_eq!(row.width(), code::COLUMNS.len());
        rows.push(row);
    }
    Ok(rows)
}

/// Verified timed run of one strategy at one alignment.
fn run_one(
    cfg: &RunConfig,
    strategy: &StrategyInfo<CopyFn>,
    alignment: usize,
    dest: &mut Buffer,
    source: &Buffer,
) -> Result<f64, VerifyError> {
    let dst = dest.aligned_mut(alignment);
    let src = source.aligned(alignment);
    let len = cfg.num_floats;
    let f = strategy.function;

    unsafe {
        clear_block(dst, len);
        let secs = time_blocks(cfg, || unsafe { f(dst, src, len) });
        verify_lanes(strategy.name, alignment, dst, len, |i| unsafe {
            src.add(i).read_unaligned()
        })?;
        Ok(secs)
    }
}
