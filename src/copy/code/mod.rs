//! Copy strategy catalog.
//!
//! Fixed, ordered list of every copy strategy. The order is the column order
//! of the report; the catalog always lists all strategies regardless of
//! platform so result rows keep a fixed width (gated-off strategies report
//! the zero sentinel instead).

pub mod scalar;
pub mod x86_64_avx;
pub mod x86_64_sse;

pub use scalar::{copy_memcpy, copy_ptr, copy_scalar};
pub use x86_64_avx::{copy_avx_aligned, copy_avx_stream, copy_avx_unaligned};
pub use x86_64_sse::{copy_sse_aligned, copy_sse_stream, copy_sse_unaligned};

use crate::utils::StrategyInfo;

/// Copy strategy signature: process one block of `len` lanes.
pub type CopyFn = unsafe fn(*mut f32, *const f32, usize);

/// Report column literals, alignment first.
pub const COLUMNS: &[&str] = &[
    "Alignment",
    "memcpy",
    "ptr::copy",
    "for-loop",
    "Unaligned Sse",
    "Unaligned Avx",
    "Aligned Sse",
    "Aligned Sse Stream",
    "Aligned Avx",
    "Aligned Avx Stream",
];

/// All copy strategies in report column order.
pub fn available_strategies() -> Vec<StrategyInfo<CopyFn>> {
    vec![
        StrategyInfo {
            name: "memcpy",
            description: "Bulk copy via ptr::copy_nonoverlapping",
            align_bytes: None,
            needs_avx: false,
            function: copy_memcpy,
        },
        StrategyInfo {
            name: "ptr::copy",
            description: "Bulk copy via ptr::copy",
            align_bytes: None,
            needs_avx: false,
            function: copy_ptr,
        },
        StrategyInfo {
            name: "for-loop",
            description: "Scalar element loop",
            align_bytes: None,
            needs_avx: false,
            function: copy_scalar,
        },
        StrategyInfo {
            name: "Unaligned Sse",
            description: "4-lane unaligned vector load/store",
            align_bytes: None,
            needs_avx: false,
            function: copy_sse_unaligned,
        },
        StrategyInfo {
            name: "Unaligned Avx",
            description: "8-lane unaligned vector load/store",
            align_bytes: None,
            needs_avx: true,
            function: copy_avx_unaligned,
        },
        StrategyInfo {
            name: "Aligned Sse",
            description: "4-lane aligned vector load/store",
            align_bytes: Some(16),
            needs_avx: false,
            function: copy_sse_aligned,
        },
        StrategyInfo {
            name: "Aligned Sse Stream",
            description: "4-lane aligned load, non-temporal store",
            align_bytes: Some(16),
            needs_avx: false,
            function: copy_sse_stream,
        },
        StrategyInfo {
            name: "Aligned Avx",
            description: "8-lane aligned vector load/store",
            align_bytes: Some(32),
            needs_avx: true,
            function: copy_avx_aligned,
        },
        StrategyInfo {
            name: "Aligned Avx Stream",
            description: "8-lane aligned load, non-temporal store",
            align_bytes: Some(32),
            needs_avx: true,
            function: copy_avx_stream,
        },
    ]
}
