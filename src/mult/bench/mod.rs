//! Alignment sweep driver for the multiply benchmark.

use crate::config::RunConfig;
use crate::registry::ResultRow;
use crate::utils::buffer::{Buffer, OPERAND_OFFSET, SLACK_FLOATS, WIDE_SLACK_FLOATS};
use crate::utils::runner::{clear_block, time_blocks, verify_lanes, VerifyError};
use crate::utils::StrategyInfo;

use super::code::{self, MultFn};

/// Sweep alignments 4..=64 and time every admitted multiply strategy.
///
/// Both operands live in one wide source allocation, the second starting
/// [`OPERAND_OFFSET`] floats past the first; each is shifted independently to
/// the swept alignment. Gated-off strategies contribute the `0.0` sentinel.
pub fn run_sweep(cfg: &RunConfig) -> Result<Vec<ResultRow>, VerifyError> {
    let strategies = code::available_strategies();
    let source = Buffer::source(cfg.num_floats, WIDE_SLACK_FLOATS, cfg.check_value);
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

/// Verified timed run of one multiply strategy at one alignment.
fn run_one(
    cfg: &RunConfig,
    strategy: &StrategyInfo<MultFn>,
    alignment: usize,
    dest: &mut Buffer,
    source: &Buffer,
) -> Result<f64, VerifyError> {
    let dst = dest.aligned_mut(alignment);
    let a = source.aligned(alignment);
    let b = source.aligned_at(OPERAND_OFFSET, alignment);
    let len = cfg.num_floats;
    let f = strategy.function;

    unsafe {
        clear_block(dst, len);
        let secs = time_blocks(cfg, || unsafe { f(dst, a, b, len) });
        verify_lanes(strategy.name, alignment, dst, len, |i| unsafe {
            a.add(i).read_unaligned() * b.add(i).read_unaligned()
        })?;
        Ok(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(has_avx: bool) -> RunConfig {
        RunConfig {
            num_floats: 16,
            total_floats: 64,
            check_value: 1.5,
            has_avx,
            html: false,
        }
    }

    // Column indexes into ResultRow::times (alignment column excluded):
    // 0 for-loop, 1 Unaligned Sse, 2 Unaligned Avx, 3 Aligned Sse,
    // 4 Aligned Sse Stream, 5 Aligned Avx, 6 Aligned Avx Stream

    #[test]
    fn test_sweep_shape() {
        let rows = run_sweep(&small_config(true)).unwrap();
        assert_eq!(rows.len(), 61);
        assert_eq!(rows.first().unwrap().alignment, 4);
        assert_eq!(rows.last().unwrap().alignment, 64);
        for row in &rows {
            assert_eq!(row.width(), code::COLUMNS.len());
            for &t in &row.times {
                assert!(t >= 0.0 && t.is_finite());
            }
        }
    }

    #[test]
    fn test_aligned_strategies_gated_by_granularity() {
        let rows = run_sweep(&small_config(true)).unwrap();
        for row in &rows {
            if row.alignment % 16 != 0 {
                assert_eq!(row.times[3], 0.0);
                assert_eq!(row.times[4], 0.0);
            }
            if row.alignment % 32 != 0 {
                assert_eq!(row.times[5], 0.0);
                assert_eq!(row.times[6], 0.0);
            }
        }
    }

    #[test]
    fn test_avx_flag_gates_avx_columns() {
        let rows = run_sweep(&small_config(false)).unwrap();
        for row in &rows {
            assert_eq!(row.times[2], 0.0);
            assert_eq!(row.times[5], 0.0);
            assert_eq!(row.times[6], 0.0);
        }
    }

    #[test]
    fn test_verification_catches_bad_strategy() {
        unsafe fn broken_mult(dst: *mut f32, a: *const f32, b: *const f32, len: usize) {
            super::code::mult_scalar(dst, a, b, len);
            dst.add(1).write_unaligned(-123.0);
        }

        let cfg = small_config(true);
        let source = Buffer::source(cfg.num_floats, WIDE_SLACK_FLOATS, cfg.check_value);
        let mut dest = Buffer::dest(cfg.num_floats, SLACK_FLOATS);
        let strategy = StrategyInfo {
            name: "broken",
            description: "writes one wrong lane",
            align_bytes: None,
            needs_avx: false,
            function: broken_mult as MultFn,
        };

        let err = run_one(&cfg, &strategy, 8, &mut dest, &source).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.expected, 1.5 * 1.5);
        assert_eq!(err.actual, -123.0);
    }
}
