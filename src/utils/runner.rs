//! Verified timed execution of one strategy.
//!
//! A run times repeated invocations of a strategy over the total element
//! budget, then checks every lane of the written block. A mismatch surfaces
//! as a typed [`VerifyError`] so the harness can be unit-tested; the binary
//! turns it into an exit with status 1, because timings for incorrect
//! execution must never be reported.

use std::fmt;

use crate::config::RunConfig;
use crate::utils::timer::Timer;

/// First mismatching lane found while checking a strategy's output.
#[derive(Clone, Debug, PartialEq)]
pub struct VerifyError {
    pub strategy: &'static str,
    pub alignment: usize,
    pub index: usize,
    pub expected: f32,
    pub actual: f32,
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error in {} ({}) at lane {}: {} != {}",
            self.strategy, self.alignment, self.index, self.actual, self.expected
        )
    }
}

impl std::error::Error for VerifyError {}

/// Zero the active block.
///
/// Cleared before every run so stale data from a previous strategy cannot
/// mask a strategy that fails to write. The block start may be byte-shifted
/// to an address misaligned for `f32`, so the fill goes through a byte
/// pointer, which `write_bytes` accepts at any address.
///
/// # Safety
/// `dst..dst+len` must be inside one allocation.
pub unsafe fn clear_block(dst: *mut f32, len: usize) {
    std::ptr::write_bytes(dst.cast::<u8>(), 0, len * std::mem::size_of::<f32>());
}

/// Invoke `call` once per block stride until `total_floats` lanes are
/// covered, returning elapsed wall-clock seconds.
///
/// The same aligned block is reused every iteration; this measures
/// steady-state throughput of one hot block, not a streaming pass over a
/// large buffer.
pub fn time_blocks<F: FnMut()>(cfg: &RunConfig, mut call: F) -> f64 {
    let timer = Timer::start();
    let mut done = 0;
    while done < cfg.total_floats {
        call();
        done += cfg.num_floats;
    }
    timer.elapsed_secs()
}

/// Check every lane of the written block against `expected`.
///
/// Comparison is bitwise (`!=` on f32): copy and elementwise multiply have
/// no rounding freedom, so any difference is a real defect.
///
/// # Safety
/// `dst..dst+len` must be inside one allocation.
pub unsafe fn verify_lanes<E>(
    strategy: &'static str,
    alignment: usize,
    dst: *const f32,
    len: usize,
    expected: E,
) -> Result<(), VerifyError>
where
    E: Fn(usize) -> f32,
{
    for i in 0..len {
        let actual = dst.add(i).read_unaligned();
        let want = expected(i);
        if actual != want {
            return Err(VerifyError {
                strategy,
                alignment,
                index: i,
                expected: want,
                actual,
            });
        }
    }
    Ok(())
}
