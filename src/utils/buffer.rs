//! Slack-padded f32 buffers for the alignment sweep.
//!
//! Every buffer reserves headroom beyond the active block so the sweep can
//! shift the effective start anywhere inside a 256-byte window without the
//! strategies reading or writing past the allocation. Swept alignments are
//! not always multiples of 4, so a shifted block start may be misaligned for
//! `f32`; callers therefore work with raw pointers and unaligned accesses,
//! never with `&[f32]` views of a shifted pointer.

use crate::utils::align::{align_ptr, align_ptr_mut};

/// Slack for single-operand buffers: 0x100 floats (1 KiB).
pub const SLACK_FLOATS: usize = 0x100;

/// Slack for the shared two-operand source: 0x1000 floats, enough for the
/// second operand to start [`OPERAND_OFFSET`] floats in and still shift.
pub const WIDE_SLACK_FLOATS: usize = 0x1000;

/// Distance in floats between the two multiply operands inside one source.
pub const OPERAND_OFFSET: usize = 256;

/// Heap-owned f32 storage with alignment headroom.
pub struct Buffer {
    data: Vec<f32>,
}

impl Buffer {
    /// Source buffer: `num_floats + slack` lanes, every lane `fill`.
    pub fn source(num_floats: usize, slack: usize, fill: f32) -> Self {
        Self {
            data: vec![fill; num_floats + slack],
        }
    }

    /// Destination buffer: `num_floats + slack` zeroed lanes.
    pub fn dest(num_floats: usize, slack: usize) -> Self {
        Self {
            data: vec![0.0; num_floats + slack],
        }
    }

    /// Base pointer shifted to the requested mod-256 alignment.
    pub fn aligned(&self, alignment: usize) -> *const f32 {
        align_ptr(self.data.as_ptr(), alignment)
    }

    /// Mutable base pointer shifted to the requested mod-256 alignment.
    pub fn aligned_mut(&mut self, alignment: usize) -> *mut f32 {
        align_ptr_mut(self.data.as_mut_ptr(), alignment)
    }

    /// Pointer `offset` floats past the base, shifted to `alignment`.
    /// Used for the second multiply operand.
    pub fn aligned_at(&self, offset: usize, alignment: usize) -> *const f32 {
        debug_assert!(offset < self.data.len());
        unsafe { align_ptr(self.data.as_ptr().add(offset), alignment) }
    }

    /// Refill every lane, slack included.
    pub fn fill_with<F: FnMut() -> f32>(&mut self, mut f: F) {
        for lane in &mut self.data {
            *lane = f();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_fill() {
        let buf = Buffer::source(16, SLACK_FLOATS, 2.5);
        let p = buf.aligned(0);
        for i in 0..16 {
            assert_eq!(unsafe { p.add(i).read_unaligned() }, 2.5);
        }
    }

    #[test]
    fn test_aligned_stays_in_slack() {
        let buf = Buffer::source(64, SLACK_FLOATS, 1.0);
        let base = buf.data.as_ptr() as usize;
        for alignment in 4..=64 {
            let shifted = buf.aligned(alignment) as usize;
            assert_eq!(shifted % 256, alignment);
            assert!(shifted - base < SLACK_FLOATS * std::mem::size_of::<f32>());
        }
    }

    #[test]
    fn test_operand_offset_window() {
        let buf = Buffer::source(64, WIDE_SLACK_FLOATS, 1.0);
        let a = buf.aligned(32) as usize;
        let b = buf.aligned_at(OPERAND_OFFSET, 32) as usize;
        assert!(b > a);
        assert_eq!(b % 256, 32);
    }
}
