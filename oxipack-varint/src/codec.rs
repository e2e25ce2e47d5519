//! Word-aligned variable-byte codec.

use crate::varint::{MAX_BYTES, decode_one, encode_one};
use oxipack_core::codec::{CodecKind, IntegerCodec};
use oxipack_core::error::{PackError, Result};

/// Variable-byte codec over `u32` words.
///
/// Byte `k` of the stream is stored in byte `k % 4` (little-endian) of word
/// `k / 4`. The last word is zero padded, so decoding relies on the caller's
/// integer count rather than on the stream length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VariableByte {
    kind: CodecKind,
}

impl VariableByte {
    /// Plain variable byte.
    pub const fn new() -> Self {
        Self {
            kind: CodecKind::Plain,
        }
    }

    /// Variable byte advertised as operating on delta-encoded input.
    pub const fn differential() -> Self {
        Self {
            kind: CodecKind::Differential,
        }
    }
}

/// Writes bytes into consecutive little-endian lanes of a word buffer.
struct ByteSink<'a> {
    output: &'a mut [u32],
    byte_pos: usize,
}

impl<'a> ByteSink<'a> {
    fn new(output: &'a mut [u32]) -> Self {
        Self {
            output,
            byte_pos: 0,
        }
    }

    #[inline]
    fn push(&mut self, byte: u8) -> Result<()> {
        let word = self.byte_pos / 4;
        let lane = self.byte_pos % 4;
        let available = self.output.len();
        let slot = self
            .output
            .get_mut(word)
            .ok_or(PackError::buffer_too_small(word + 1, available))?;
        if lane == 0 {
            *slot = 0;
        }
        *slot |= u32::from(byte) << (lane * 8);
        self.byte_pos += 1;
        Ok(())
    }

    fn words(&self) -> usize {
        self.byte_pos.div_ceil(4)
    }
}

impl IntegerCodec for VariableByte {
    fn name(&self) -> &'static str {
        match self.kind {
            CodecKind::Plain => "VariableByte",
            CodecKind::Differential => "DifferentialVariableByte",
        }
    }

    fn kind(&self) -> CodecKind {
        self.kind
    }

    fn max_compressed_words(&self, len: usize) -> usize {
        (len * MAX_BYTES).div_ceil(4)
    }

    fn compress(&self, input: &[i32], output: &mut [u32]) -> Result<(usize, usize)> {
        let mut sink = ByteSink::new(output);
        let mut buf = [0u8; MAX_BYTES];

        for &value in input {
            let len = encode_one(value as u32, &mut buf);
            for &byte in &buf[..len] {
                sink.push(byte)?;
            }
        }

        Ok((input.len(), sink.words()))
    }

    fn decompress(&self, input: &[u32], output: &mut [i32]) -> Result<(usize, usize)> {
        let mut bytes = input.iter().flat_map(|word| word.to_le_bytes());
        let mut offset = 0;

        for slot in output.iter_mut() {
            *slot = decode_one(&mut bytes, &mut offset)? as i32;
        }

        Ok((offset.div_ceil(4), output.len()))
    }
}
