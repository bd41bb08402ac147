//! Multiply strategy catalog.
//!
//! Fixed, ordered list of every elementwise-multiply strategy; the order is
//! the report column order. Always lists all strategies so result rows keep
//! a fixed width (gated-off strategies report the zero sentinel).

pub mod scalar;
pub mod x86_64_avx;
pub mod x86_64_sse;

pub use scalar::mult_scalar;
pub use x86_64_avx::{mult_avx_aligned, mult_avx_stream, mult_avx_unaligned};
pub use x86_64_sse::{mult_sse_aligned, mult_sse_stream, mult_sse_unaligned};

use crate::utils::StrategyInfo;

/// Multiply strategy signature: `dst[i] = a[i] * b[i]` over one block.
pub type MultFn = unsafe fn(*mut f32, *const f32, *const f32, usize);

/// Report column literals, alignment first.
pub const COLUMNS: &[&str] = &[
    "Alignment",
    "for-loop",
    "Unaligned Sse",
    "Unaligned Avx",
    "Aligned Sse",
    "Aligned Sse Stream",
    "Aligned Avx",
    "Aligned Avx Stream",
];

/// All multiply strategies in report column order.
pub fn available_strategies() -> Vec<StrategyInfo<MultFn>> {
    vec![
        StrategyInfo {
            name: "for-loop",
            description: "Scalar element loop",
            align_bytes: None,
            needs_avx: false,
            function: mult_scalar,
        },
        StrategyInfo {
            name: "Unaligned Sse",
            description: "4-lane unaligned vector multiply",
            align_bytes: None,
            needs_avx: false,
            function: mult_sse_unaligned,
        },
        StrategyInfo {
            name: "Unaligned Avx",
            description: "8-lane unaligned vector multiply",
            align_bytes: None,
            needs_avx: true,
            function: mult_avx_unaligned,
        },
        StrategyInfo {
            name: "Aligned Sse",
            description: "4-lane aligned vector multiply",
            align_bytes: Some(16),
            needs_avx: false,
            function: mult_sse_aligned,
        },
        StrategyInfo {
            name: "Aligned Sse Stream",
            description: "4-lane aligned multiply, non-temporal store",
            align_bytes: Some(16),
            needs_avx: false,
            function: mult_sse_stream,
        },
        StrategyInfo {
            name: "Aligned Avx",
            description: "8-lane aligned vector multiply",
            align_bytes: Some(32),
            needs_avx: true,
            function: mult_avx_aligned,
        },
        StrategyInfo {
            name: "Aligned Avx Stream",
            description: "8-lane aligned multiply, non-temporal store",
            align_bytes: Some(32),
            needs_avx: true,
            function: mult_avx_stream,
        },
    ]
}
