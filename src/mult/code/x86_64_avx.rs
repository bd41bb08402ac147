//! 8-lane AVX multiply strategies.
//!
//! Compiled when the target enables the `avx` feature; other builds get
//! scalar fallbacks so the catalog keeps its fixed shape. Aligned and
//! streaming variants require 32-byte aligned block starts.

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
use std::arch::x86_64::*;

/// Unaligned 256-bit load/multiply/store.
///
/// # Safety
/// `a..a+len`, `b..b+len` and `dst..dst+len` must be valid ranges.
#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub unsafe fn mult_avx_unaligned(dst: *mut f32, a: *const f32, b: *const f32, len: usize) {
    let chunks = len / 8;
    for i in 0..chunks {
        let idx = i * 8;
        let v1 = _mm256_loadu_ps(a.add(idx));
        let v2 = _mm256_loadu_ps(b.add(idx));
        _mm256_storeu_ps(dst.add(idx), _mm256_mul_ps(v1, v2));
    }
    for i in chunks * 8..len {
        dst.add(i)
            .write_unaligned(a.add(i).read_unaligned() * b.add(i).read_unaligned());
    }
}

/// Aligned 256-bit load/multiply/store.
///
/// # Safety
/// As [`mult_avx_unaligned`], and all three pointers must be 32-byte aligned.
#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub unsafe fn mult_avx_aligned(dst: *mut f32, a: *const f32, b: *const f32, len: usize) {
    let chunks = len / 8;
    for i in 0..chunks {
        let idx = i * 8;
        let v1 = _mm256_load_ps(a.add(idx));
        let v2 = _mm256_load_ps(b.add(idx));
        _mm256_store_ps(dst.add(idx), _mm256_mul_ps(v1, v2));
    }
    for i in chunks * 8..len {
        dst.add(i).write(a.add(i).read() * b.add(i).read());
    }
}

/// Aligned 256-bit load/multiply with non-temporal store. No trailing fence
/// before the timer stops, matching the original tool.
///
/// # Safety
/// As [`mult_avx_aligned`].
#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub unsafe fn mult_avx_stream(dst: *mut f32, a: *const f32, b: *const f32, len: usize) {
    let chunks = len / 8;
    for i in 0..chunks {
        let idx = i * 8;
        let v1 = _mm256_load_ps(a.add(idx));
        let v2 = _mm256_load_ps(b.add(idx));
        _mm256_stream_ps(dst.add(idx), _mm256_mul_ps(v1, v2));
    }
    for i in chunks * 8..len {
        dst.add(i).write(a.add(i).read() * b.add(i).read());
    }
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx")))]
pub unsafe fn mult_avx_unaligned(dst: *mut f32, a: *const f32, b: *const f32, len: usize) {
    super::scalar::mult_scalar(dst, a, b, len);
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx")))]
pub unsafe fn mult_avx_aligned(dst: *mut f32, a: *const f32, b: *const f32, len: usize) {
    super::scalar::mult_scalar(dst, a, b, len);
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx")))]
pub unsafe fn mult_avx_stream(dst: *mut f32, a: *const f32, b: *const f32, len: usize) {
    super::scalar::mult_scalar(dst, a, b, len);
}
