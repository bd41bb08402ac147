//! Strategy-level tests for the copy benchmark.

#[cfg(test)]
mod tests {
    use crate::copy::code::*;
    use crate::utils::buffer::{Buffer, SLACK_FLOATS};

    /// Run one strategy at the given mod-256 alignment and check every lane.
    fn check_copy(f: CopyFn, alignment: usize, len: usize) {
        let source = Buffer::source(len, SLACK_FLOATS, 3.25);
        let mut dest = Buffer::dest(len, SLACK_FLOATS);
        let src = source.aligned(alignment);
        let dst = dest.aligned_mut(alignment);
        unsafe {
            f(dst, src, len);
            for i in 0..len {
                assert_eq!(
                    dst.add(i).read_unaligned(),
                    src.add(i).read_unaligned(),
                    "lane {} at alignment {}",
                    i,
                    alignment
                );
            }
        }
    }

    #[test]
    fn test_memcpy_any_alignment() {
        for alignment in [4, 5, 7, 13, 64] {
            check_copy(copy_memcpy, alignment, 64);
        }
    }

    #[test]
    fn test_ptr_copy_any_alignment() {
        for alignment in [4, 5, 31, 64] {
            check_copy(copy_ptr, alignment, 64);
        }
    }

    #[test]
    fn test_scalar_any_alignment() {
        for alignment in [4, 5, 6, 9, 64] {
            check_copy(copy_scalar, alignment, 64);
        }
    }

    #[test]
    fn test_sse_unaligned_any_alignment() {
        for alignment in [4, 5, 17, 64] {
            check_copy(copy_sse_unaligned, alignment, 64);
        }
    }

    #[test]
    fn test_avx_unaligned_any_alignment() {
        for alignment in [4, 5, 33, 64] {
            check_copy(copy_avx_unaligned, alignment, 64);
        }
    }

    #[test]
    fn test_sse_aligned_at_16_multiples() {
        for alignment in [16, 32, 48, 64] {
            check_copy(copy_sse_aligned, alignment, 64);
            check_copy(copy_sse_stream, alignment, 64);
        }
    }

    #[test]
    fn test_avx_aligned_at_32_multiples() {
        for alignment in [32, 64] {
            check_copy(copy_avx_aligned, alignment, 64);
            check_copy(copy_avx_stream, alignment, 64);
        }
    }

    #[test]
    fn test_block_length_with_vector_remainder() {
        // 61 lanes leaves a scalar tail after the 4- and 8-lane chunks.
        check_copy(copy_sse_unaligned, 4, 61);
        check_copy(copy_avx_unaligned, 4, 61);
        check_copy(copy_sse_aligned, 16, 61);
        check_copy(copy_avx_aligned, 32, 61);
    }
}
