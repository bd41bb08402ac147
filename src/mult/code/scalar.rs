//! Portable elementwise-multiply strategy.
//!
//! Block starts may be misaligned for `f32`, so lanes go through unaligned
//! reads and writes.

/// One lane at a time: `dst[i] = a[i] * b[i]`.
///
/// # Safety
/// `a..a+len`, `b..b+len` and `dst..dst+len` must be valid ranges.
pub unsafe fn mult_scalar(dst: *mut f32, a: *const f32, b: *const f32, len: usize) {
    for i in 0..len {
        dst.add(i)
            .write_unaligned(a.add(i).read_unaligned() * b.add(i).read_unaligned());
    }
}
