//! XOR binary packing.
//!
//! Same block layout as [`BinaryPacking`](crate::BinaryPacking), but each
//! field stores `value ^ previous` instead of the value. For clustered data
//! consecutive values share their high bits, which cancel out and leave a
//! narrower block width.
//!
//! `previous` is the preceding element of the input, carried across block
//! boundaries, and starts at 0 for each call. The carry lives in a local
//! accumulator, so the codec itself holds no state.

use crate::block::{check_block_multiple, max_words, read_block, write_block};
use oxipack_core::BLOCK_SIZE;
use oxipack_core::codec::{CodecKind, IntegerCodec};
use oxipack_core::error::Result;

/// XOR block packing codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XorBinaryPacking {
    kind: CodecKind,
}

impl XorBinaryPacking {
    /// Plain XOR packing.
    pub const fn new() -> Self {
        Self {
            kind: CodecKind::Plain,
        }
    }

    /// XOR packing advertised as operating on delta-encoded input.
    pub const fn differential() -> Self {
        Self {
            kind: CodecKind::Differential,
        }
    }
}

impl IntegerCodec for XorBinaryPacking {
    fn name(&self) -> &'static str {
        match self.kind {
            CodecKind::Plain => "XorBinaryPacking",
            CodecKind::Differential => "DifferentialXorBinaryPacking",
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
        let mut previous = 0u32;
        let mut out_pos = 0;

        let chunks = input.chunks_exact(BLOCK_SIZE);
        let consumed = input.len() - chunks.remainder().len();

        for chunk in chunks {
            for (slot, &value) in block.iter_mut().zip(chunk) {
                let value = value as u32;
                *slot = value ^ previous;
                previous = value;
            }
            out_pos += write_block(&block, &mut output[out_pos..])?;
        }

        Ok((consumed, out_pos))
    }

    fn decompress(&self, input: &[u32], output: &mut [i32]) -> Result<(usize, usize)> {
        check_block_multiple(output.len())?;

        let mut block = [0u32; BLOCK_SIZE];
        let mut previous = 0u32;
        let mut in_pos = 0;

        for chunk in output.chunks_exact_mut(BLOCK_SIZE) {
            in_pos += read_block(&input[in_pos..], &mut block)?;
            for (slot, &field) in chunk.iter_mut().zip(&block) {
                previous ^= field;
                *slot = previous as i32;
            }
        }

        Ok((in_pos, output.len()))
    }
}
