//! Portable copy strategies: library bulk copies and the scalar loop.
//!
//! Block starts may be misaligned for `f32` (the sweep shifts pointers by
//! single bytes), so the scalar loop goes through unaligned reads and writes
//! and the bulk copies go through byte pointers. `copy_nonoverlapping` and
//! `copy` require pointers aligned for `T`, which a byte pointer satisfies
//! at any address, and the lowering is the same memcpy/memmove either way.

use std::mem::size_of;

/// Bulk copy via `ptr::copy_nonoverlapping` (memcpy).
///
/// # Safety
/// `src..src+len` and `dst..dst+len` must be valid, disjoint ranges.
pub unsafe fn copy_memcpy(dst: *mut f32, src: *const f32, len: usize) {
    std::ptr::copy_nonoverlapping(src.cast::<u8>(), dst.cast::<u8>(), len * size_of::<f32>());
}

/// Bulk copy via `ptr::copy` (memmove-class library copy).
///
/// # Safety
/// `src..src+len` and `dst..dst+len` must be valid ranges.
pub unsafe fn copy_ptr(dst: *mut f32, src: *const f32, len: usize) {
    std::ptr::copy(src.cast::<u8>(), dst.cast::<u8>(), len * size_of::<f32>());
}

/// One lane at a time.
///
/// # Safety
/// `src..src+len` and `dst..dst+len` must be valid ranges.
pub unsafe fn copy_scalar(dst: *mut f32, src: *const f32, len: usize) {
    for i in 0..len {
        dst.add(i).write_unaligned(src.add(i).read_unaligned());
    }
}
