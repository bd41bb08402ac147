//! 8-lane AVX copy strategies.
//!
//! 256-bit loads and stores, 8 f32 lanes per step. Compiled when the target
//! enables the `avx` feature; other builds get scalar fallbacks so the
//! catalog keeps its fixed shape everywhere. The aligned and streaming
//! variants require 32-byte aligned block starts, guaranteed by gating.

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
use std::arch::x86_64::*;

/// Unaligned 256-bit load/store copy.
///
/// # Safety
/// `src..src+len` and `dst..dst+len` must be valid ranges.
#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub unsafe fn copy_avx_unaligned(dst: *mut f32, src: *const f32, len: usize) {
    let chunks = len / 8;
    for i in 0..chunks {
        let idx = i * 8;
        let v = _mm256_loadu_ps(src.add(idx));
        _mm256_storeu_ps(dst.add(idx), v);
    }
    for i in chunks * 8..len {
        dst.add(i).write_unaligned(src.add(i).read_unaligned());
    }
}

/// Aligned 256-bit load/store copy.
///
/// # Safety
/// As [`copy_avx_unaligned`], and both pointers must be 32-byte aligned.
#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub unsafe fn copy_avx_aligned(dst: *mut f32, src: *const f32, len: usize) {
    let chunks = len / 8;
    for i in 0..chunks {
        let idx = i * 8;
        let v = _mm256_load_ps(src.add(idx));
        _mm256_store_ps(dst.add(idx), v);
    }
    for i in chunks * 8..len {
        dst.add(i).write(src.add(i).read());
    }
}

/// Aligned 256-bit load with non-temporal store. No trailing fence, as in
/// the original tool.
///
/// # Safety
/// As [`copy_avx_aligned`].
#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub unsafe fn copy_avx_stream(dst: *mut f32, src: *const f32, len: usize) {
    let chunks = len / 8;
    for i in 0..chunks {
        let idx = i * 8;
        let v = _mm256_load_ps(src.add(idx));
        _mm256_stream_ps(dst.add(idx), v);
    }
    for i in chunks * 8..len {
        dst.add(i).write(src.add(i).read());
    }
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx")))]
pub unsafe fn copy_avx_unaligned(dst: *mut f32, src: *const f32, len: usize) {
    super::scalar::copy_scalar(dst, src, len);
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx")))]
pub unsafe fn copy_avx_aligned(dst: *mut f32, src: *const f32, len: usize) {
    super::scalar::copy_scalar(dst, src, len);
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx")))]
pub unsafe fn copy_avx_stream(dst: *mut f32, src: *const f32, len: usize) {
    super::scalar::copy_scalar(dst, src, len);
}
