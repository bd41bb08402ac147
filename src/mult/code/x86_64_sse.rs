//! 4-lane SSE multiply strategies.
//!
//! 128-bit loads, a packed multiply, and a 128-bit store per step. Aligned
//! and streaming variants require 16-byte aligned block starts, guaranteed
//! by the sweep's gating.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Unaligned 128-bit load/multiply/store.
///
/// # Safety
/// `a..a+len`, `b..b+len` and `dst..dst+len` must be valid ranges.
#[cfg(target_arch = "x86_64")]
pub unsafe fn mult_sse_unaligned(dst: *mut f32, a: *const f32, b: *const f32, len: usize) {
    let chunks = len / 4;
    for i in 0..chunks {
        let idx = i * 4;
        let v1 = _mm_loadu_ps(a.add(idx));
        let v2 = _mm_loadu_ps(b.add(idx));
        _mm_storeu_ps(dst.add(idx), _mm_mul_ps(v1, v2));
    }
    for i in chunks * 4..len {
        dst.add(i)
            .write_unaligned(a.add(i).read_unaligned() * b.add(i).read_unaligned());
    }
}

/// Aligned 128-bit load/multiply/store.
///
/// # Safety
/// As [`mult_sse_unaligned`], and all three pointers must be 16-byte aligned.
#[cfg(target_arch = "x86_64")]
pub unsafe fn mult_sse_aligned(dst: *mut f32, a: *const f32, b: *const f32, len: usize) {
    let chunks = len / 4;
    for i in 0..chunks {
        let idx = i * 4;
        let v1 = _mm_load_ps(a.add(idx));
        let v2 = _mm_load_ps(b.add(idx));
        _mm_store_ps(dst.add(idx), _mm_mul_ps(v1, v2));
    }
    for i in chunks * 4..len {
        dst.add(i).write(a.add(i).read() * b.add(i).read());
    }
}

/// Aligned 128-bit load/multiply with non-temporal store. No trailing fence
/// before the timer stops, matching the original tool.
///
/// # Safety
/// As [`mult_sse_aligned`].
#[cfg(target_arch = "x86_64")]
pub unsafe fn mult_sse_stream(dst: *mut f32, a: *const f32, b: *const f32, len: usize) {
    let chunks = len / 4;
    for i in 0..chunks {
        let idx = i * 4;
        let v1 = _mm_load_ps(a.add(idx));
        let v2 = _mm_load_ps(b.add(idx));
        _mm_stream_ps(dst.add(idx), _mm_mul_ps(v1, v2));
    }
    for i in chunks * 4..len {
        dst.add(i).write(a.add(i).read() * b.add(i).read());
    }
}

#[cfg(not(target_arch = "x86_64"))]
pub unsafe fn mult_sse_unaligned(dst: *mut f32, a: *const f32, b: *const f32, len: usize) {
    super::scalar::mult_scalar(dst, a, b, len);
}

#[cfg(not(target_arch = "x86_64"))]
pub unsafe fn mult_sse_aligned(dst: *mut f32, a: *const f32, b: *const f32, len: usize) {
    super::scalar::mult_scalar(dst, a, b, len);
}

#[cfg(not(target_arch = "x86_64"))]
pub unsafe fn mult_sse_stream(dst: *mut f32, a: *const f32, b: *const f32, len: usize) {
    super::scalar::mult_scalar(dst, a, b, len);
}
