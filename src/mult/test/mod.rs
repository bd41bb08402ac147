//! Strategy-level tests for the multiply benchmark.

#[cfg(test)]
mod tests {
    use crate::mult::code::*;
    use crate::utils::buffer::{Buffer, OPERAND_OFFSET, SLACK_FLOATS, WIDE_SLACK_FLOATS};

    /// Run one strategy at the given mod-256 alignment and check every lane.
    fn check_mult(f: MultFn, alignment: usize, len: usize) {
        let source = Buffer::source(len, WIDE_SLACK_FLOATS, 0.5);
        let mut dest = Buffer::dest(len, SLACK_FLOATS);
        let a = source.aligned(alignment);
        let b = source.aligned_at(OPERAND_OFFSET, alignment);
        let dst = dest.aligned_mut(alignment);
        unsafe {
            f(dst, a, b, len);
            for i in 0..len {
                let want = a.add(i).read_unaligned() * b.add(i).read_unaligned();
                assert_eq!(
                    dst.add(i).read_unaligned(),
                    want,
                    "lane {} at alignment {}",
                    i,
                    alignment
                );
            }
        }
    }

    #[test]
    fn test_scalar_any_alignment() {
        for alignment in [4, 5, 6, 9, 64] {
            check_mult(mult_scalar, alignment, 64);
        }
    }

    #[test]
    fn test_sse_unaligned_any_alignment() {
        for alignment in [4, 5, 17, 64] {
            check_mult(mult_sse_unaligned, alignment, 64);
        }
    }

    #[test]
    fn test_avx_unaligned_any_alignment() {
        for alignment in [4, 5, 33, 64] {
            check_mult(mult_avx_unaligned, alignment, 64);
        }
    }

    #[test]
    fn test_sse_aligned_at_16_multiples() {
        for alignment in [16, 32, 48, 64] {
            check_mult(mult_sse_aligned, alignment, 64);
            check_mult(mult_sse_stream, alignment, 64);
        }
    }

    #[test]
    fn test_avx_aligned_at_32_multiples() {
        for alignment in [32, 64] {
            check_mult(mult_avx_aligned, alignment, 64);
            check_mult(mult_avx_stream, alignment, 64);
        }
    }

    #[test]
    fn test_block_length_with_vector_remainder() {
        check_mult(mult_sse_unaligned, 4, 61);
        check_mult(mult_avx_unaligned, 4, 61);
        check_mult(mult_sse_aligned, 16, 61);
        check_mult(mult_avx_aligned, 32, 61);
    }
}
