//! Fixed-bit-width block packing.
//!
//! Every block of 32 integers is packed at the smallest width that holds its
//! largest value (integers are viewed as `u32`, so any negative value forces
//! width 32). Blocks are independent: decoding one block never looks at
//! another block's values.

use crate::block::{check_block_multiple, max_words, read_block, write_block};
use oxipack_core::BLOCK_SIZE;
use oxipack_core::codec::{CodecKind, IntegerCodec};
use oxipack_core::error::Result;

/// Block binary packing codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinaryPacking {
    kind: CodecKind,
}

impl BinaryPacking {
    /// Plain binary packing.
    pub const fn new() -> Self {
        Self {
            kind: CodecKind::Plain,
        }
    }

    /// Binary packing advertised as operating on delta-encoded input.
    pub const fn differential() -> Self {
        Self {
            kind: CodecKind::Differential,
        }
    }
}

impl IntegerCodec for BinaryPacking {
    fn name(&self) -> &'static str {
        match self.kind {
            CodecKind::Plain => "BinaryPacking",
            CodecKind::Differential => "DifferentialBinaryPacking",
        }
    }

    fn kind(&self) -> CodecKind {
        self.kind
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn max_compressed_words(&self, len: usize) -> usize {
        max_words(len)
    }

    fn compress(&self, input: &[i32], output: &mut [u32]) -> Result<(usize, usize)> {
        let mut block = [0u32; BLOCK_SIZE];
        let mut out_pos = 0;

        let chunks = input.chunks_exact(BLOCK_SIZE);
        let consumed = input.len() - chunks.remainder().len();

        for chunk in chunks {
            for (slot, &value) in block.iter_mut().zip(chunk) {
                *slot = value as u32;
            }
            out_pos += write_block(&block, &mut output[out_pos..])?;
        }

        Ok((consumed, out_pos))
    }

    fn decompress(&self, input: &[u32], output: &mut [i32]) -> Result<(usize, usize)> {
        check_block_multiple(output.len())?;

        let mut block = [0u32; BLOCK_SIZE];
        let mut in_pos = 0;

        for chunk in output.chunks_exact_mut(BLOCK_SIZE) {
            in_pos += read_block(&input[in_pos..], &mut block)?;
            for (slot, &value) in chunk.iter_mut().zip(&block) {
                *slot = value as i32;
            }
        }

        Ok((in_pos, output.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipack_core::PackError;
    use oxipack_core::bitstream::bit_width;

    fn roundtrip(input: &[i32]) -> Vec<u32> {
        let codec = BinaryPacking::new();
        let mut packed = vec![0u32; codec.max_compressed_words(input.len())];
        let (consumed, written) = codec.compress(input, &mut packed).unwrap();
        assert_eq!(consumed, input.len());
        packed.truncate(written);

        let mut decoded = vec![0i32; input.len()];
        let (read, produced) = codec.decompress(&packed, &mut decoded).unwrap();
        assert_eq!(read, written);
        assert_eq!(produced, input.len());
        assert_eq!(decoded, input);
        packed
    }

    #[test]
    fn test_small_values() {
        let input: Vec<i32> = (0..64).map(|i| i % 5).collect();
        let packed = roundtrip(&input);
        // 2 blocks at width 3
        assert_eq!(packed.len(), 2 * (1 + 3));
        assert_eq!(packed[0], 3);
        assert_eq!(packed[4], 3);
    }

    #[test]
    fn test_all_zero_blocks() {
        let input = vec![0i32; 96];
        let packed = roundtrip(&input);
        assert_eq!(packed, vec![0, 0, 0]);
    }

    #[test]
    fn test_negative_values_use_full_width() {
        let mut input = vec![1i32; 32];
        input[17] = -1;
        let packed = roundtrip(&input);
        assert_eq!(packed.len(), 33);
        assert_eq!(packed[0], 32);
    }

    #[test]
    fn test_width_is_minimal() {
        let input: Vec<i32> = (0..32).map(|i| i * 1000).collect();
        let packed = roundtrip(&input);
        let max = *input.iter().max().unwrap() as u32;
        assert_eq!(packed[0], bit_width(max));
        assert!(max >= 1 << (packed[0] - 1));
    }

    #[test]
    fn test_partial_block_not_consumed() {
        let codec = BinaryPacking::new();
        let input: Vec<i32> = (0..70).collect();
        let mut packed = vec![0u32; 128];
        let (consumed, written) = codec.compress(&input, &mut packed).unwrap();
        assert_eq!(consumed, 64);
        assert_eq!(written, 2 + 5 + 6);

        let (consumed, written) = codec.compress(&input[..31], &mut packed).unwrap();
        assert_eq!((consumed, written), (0, 0));
    }

    #[test]
    fn test_buffer_too_small() {
        let codec = BinaryPacking::new();
        let input = vec![u32::MAX as i32; 32];
        let mut packed = vec![0u32; 10];
        assert!(matches!(
            codec.compress(&input, &mut packed),
            Err(PackError::BufferTooSmall { .. })
        ));
    }

    #[test]
    fn test_decompress_requires_whole_blocks() {
        let codec = BinaryPacking::new();
        let mut out = vec![0i32; 33];
        assert_eq!(
            codec.decompress(&[0, 0], &mut out),
            Err(PackError::invalid_length(33, BLOCK_SIZE))
        );
    }

    #[test]
    fn test_corrupted_width_marker() {
        let codec = BinaryPacking::new();
        let mut out = vec![0i32; 32];
        assert_eq!(
            codec.decompress(&[99], &mut out),
            Err(PackError::InvalidBitWidth(99))
        );
    }

    #[test]
    fn test_truncated_stream() {
        let codec = BinaryPacking::new();
        let mut out = vec![0i32; 64];
        assert!(matches!(
            codec.decompress(&[0], &mut out),
            Err(PackError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_kind_and_name() {
        assert_eq!(BinaryPacking::new().kind(), CodecKind::Plain);
        assert_eq!(BinaryPacking::default(), BinaryPacking::new());
        assert_eq!(
            BinaryPacking::differential().kind(),
            CodecKind::Differential
        );
        assert_eq!(
            BinaryPacking::differential().name(),
            "DifferentialBinaryPacking"
        );
    }
}
