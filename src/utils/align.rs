//! Pointer alignment within a 256-byte window.
//!
//! The sweep controls the effective start address of every buffer by shifting
//! it forward until `address % 256` equals the requested alignment. Buffers
//! carry at least 256 bytes of slack so the shifted block never runs past the
//! allocation; that headroom is a caller contract, not checked here.

/// Smallest address `>= addr` with `address % 256 == target`.
///
/// `target` must be in `0..256`.
#[inline]
pub fn align_addr(addr: usize, target: usize) -> usize {
    debug_assert!(target < 256);
    addr + (target.wrapping_sub(addr) & 0xff)
}

/// Shift a const pointer forward to the requested mod-256 alignment.
#[inline]
pub fn align_ptr<T>(p: *const T, target: usize) -> *const T {
    align_addr(p as usize, target) as *const T
}

/// Shift a mut pointer forward to the requested mod-256 alignment.
#[inline]
pub fn align_ptr_mut<T>(p: *mut T, target: usize) -> *mut T {
    align_addr(p as usize, target) as *mut T
}
