//! 4-lane SSE copy strategies.
//!
//! 128-bit loads and stores, 4 f32 lanes per step. The aligned and streaming
//! variants require the block start to be 16-byte aligned; the sweep's gating
//! guarantees that before they are invoked.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Unaligned 128-bit load/store copy.
///
/// # Safety
/// `src..src+len` and `dst..dst+len` must be valid ranges.
#[cfg(target_arch = "x86_64")]
pub unsafe fn copy_sse_unaligned(dst: *mut f32, src: *const f32, len: usize) {
    let chunks = len / 4;
    for i in 0..chunks {
        let idx = i * 4;
        let v = _mm_loadu_ps(src.add(idx));
        _mm_storeu_ps(dst.add(idx), v);
    }
    for i in chunks * 4..len {
        dst.add(i).write_unaligned(src.add(i).read_unaligned());
    }
}

/// Aligned 128-bit load/store copy.
///
/// # Safety
/// As [`copy_sse_unaligned`], and both pointers must be 16-byte aligned.
#[cfg(target_arch = "x86_64")]
pub unsafe fn copy_sse_aligned(dst: *mut f32, src: *const f32, len: usize) {
    let chunks = len / 4;
    for i in 0..chunks {
        let idx = i * 4;
        let v = _mm_load_ps(src.add(idx));
        _mm_store_ps(dst.add(idx), v);
    }
    for i in chunks * 4..len {
        dst.add(i).write(src.add(i).read());
    }
}

/// Aligned 128-bit load with non-temporal (cache-bypassing) store.
/// No trailing fence: the timer stops without waiting for the write
/// combining buffers, matching the measured semantics of the original tool.
///
/// # Safety
/// As [`copy_sse_aligned`].
#[cfg(target_arch = "x86_64")]
pub unsafe fn copy_sse_stream(dst: *mut f32, src: *const f32, len: usize) {
    let chunks = len / 4;
    for i in 0..chunks {
        let idx = i * 4;
        let v = _mm_load_ps(src.add(idx));
        _mm_stream_ps(dst.add(idx), v);
    }
    for i in chunks * 4..len {
        dst.add(i).write(src.add(i).read());
    }
}

#[cfg(not(target_arch = "x86_64"))]
pub unsafe fn copy_sse_unaligned(dst: *mut f32, src: *const f32, len: usize) {
    super::scalar::copy_scalar(dst, src, len);
}

#[cfg(not(target_arch = "x86_64"))]
pub unsafe fn copy_sse_aligned(dst: *mut f32, src: *const f32, len: usize) {
    super::scalar::copy_scalar(dst, src, len);
}

#[cfg(not(target_arch = "x86_64"))]
pub unsafe fn copy_sse_stream(dst: *mut f32, src: *const f32, len: usize) {
    super::scalar::copy_scalar(dst, src, len);
}
