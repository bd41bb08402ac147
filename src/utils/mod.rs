//! Utility modules for the benchmark harness.

pub mod align;
pub mod buffer;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use align::{align_addr, align_ptr, align_ptr_mut};
pub use buffer::Buffer;
pub use cpu_affinity::CpuPinGuard;
pub use runner::{clear_block, time_blocks, verify_lanes, VerifyError};
pub use timer::Timer;

/// One transfer/compute strategy in a benchmark's fixed catalog.
/// Generic over F, the strategy function signature.
pub struct StrategyInfo<F> {
    /// Column literal used in report rows (e.g. "Aligned Sse Stream")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Required byte alignment granularity; None runs at any alignment
    pub align_bytes: Option<usize>,
    /// Whether the strategy only runs when the AVX flag is set
    pub needs_avx: bool,
    /// The strategy implementation
    pub function: F,
}

impl<F> StrategyInfo<F> {
    /// Gating rule: a strategy runs at `alignment` iff its granularity
    /// divides the alignment and its AVX requirement is satisfied.
    pub fn admitted(&self, alignment: usize, has_avx: bool) -> bool {
        if self.needs_avx && !has_avx {
            return false;
        }
        match self.align_bytes {
            Some(granularity) => alignment % granularity == 0,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy(align_bytes: Option<usize>, needs_avx: bool) -> StrategyInfo<()> {
        StrategyInfo {
            name: "test",
            description: "",
            align_bytes,
            needs_avx,
            function: (),
        }
    }

    #[test]
    fn test_unaligned_strategy_always_admitted() {
        let s = strategy(None, false);
        for alignment in 4..=64 {
            assert!(s.admitted(alignment, false));
        }
    }

    #[test]
    fn test_sse_granularity_gate() {
        let s = strategy(Some(16), false);
        for alignment in 4..=64 {
            assert_eq!(s.admitted(alignment, true), alignment % 16 == 0);
        }
    }

    #[test]
    fn test_avx_gate_requires_flag_and_granularity() {
        let s = strategy(Some(32), true);
        assert!(s.admitted(32, true));
        assert!(s.admitted(64, true));
        assert!(!s.admitted(32, false));
        assert!(!s.admitted(16, true));
        assert!(!s.admitted(48, true));
    }
}
