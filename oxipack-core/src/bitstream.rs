//! Word-level bit I/O for fixed-width integer packing.
//!
//! This module provides `WordWriter` and `WordReader` for writing and reading
//! variable-width bit fields into streams of 32-bit words, plus the
//! [`pack`]/[`unpack`] helpers the block codecs are built on.
//!
//! # Bit Ordering
//!
//! Fields are packed LSB-first: the first field occupies the lowest bits of
//! the first word, the next field starts at the next free bit, and a field
//! that does not fit in the remaining bits of a word continues in the low bits
//! of the following word. Words themselves carry no byte order; the byte form
//! used by the envelope serializer is little-endian.
//!
//! # Example
//!
//! ```
//! use oxipack_core::bitstream::{WordReader, WordWriter};
//!
//! let mut words = [0u32; 2];
//! let mut writer = WordWriter::new(&mut words);
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(u32::MAX, 32).unwrap(); // straddles the word boundary
//! assert_eq!(writer.finish().unwrap(), 2);
//!
//! let mut reader = WordReader::new(&words);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(32).unwrap(), u32::MAX);
//! ```

use crate::error::{PackError, Result};

/// Number of bits needed to represent `value` (0 for 0, 32 for values with the top bit set).
#[inline]
pub fn bit_width(value: u32) -> u32 {
    u32::BITS - value.leading_zeros()
}

/// Smallest width that can hold every value in `values`.
#[inline]
pub fn max_bit_width(values: &[u32]) -> u32 {
    bit_width(values.iter().fold(0, |acc, &v| acc | v))
}

/// Number of words occupied by `count` fields of `width` bits.
#[inline]
pub fn packed_words(count: usize, width: u32) -> usize {
    (count * width as usize).div_ceil(32)
}

#[inline]
fn low_mask(count: u32) -> u32 {
    if count == 32 {
        u32::MAX
    } else {
        (1u32 << count).wrapping_sub(1)
    }
}

/// A bit-level writer over a caller-provided word buffer.
///
/// Completed words are stored as soon as 32 bits are buffered. Call
/// [`finish`](Self::finish) to store a trailing partial word (zero padded).
/// Writing past the end of the buffer is an error, never a truncation.
#[derive(Debug)]
pub struct WordWriter<'a> {
    /// Destination words.
    output: &'a mut [u32],
    /// Next word to store.
    pos: usize,
    /// Bit buffer (LSB-first).
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u32,
    /// Total bits written.
    total_bits_written: u64,
}

impl<'a> WordWriter<'a> {
    /// Create a new `WordWriter` writing from the start of `output`.
    pub fn new(output: &'a mut [u32]) -> Self {
        Self {
            output,
            pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Number of complete words stored so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    #[inline]
    fn store_word(&mut self) -> Result<()> {
        let slot = self
            .output
            .get_mut(self.pos)
            .ok_or(PackError::BufferTooSmall {
                needed: self.pos + 1,
                available: self.pos,
            })?;
        *slot = self.buffer as u32;
        self.pos += 1;
        self.buffer >>= 32;
        self.bits_in_buffer = self.bits_in_buffer.saturating_sub(32);
        Ok(())
    }

    /// Write the low `count` bits of `value` (0-32).
    #[inline]
    pub fn write_bits(&mut self, value: u32, count: u32) -> Result<()> {
        debug_assert!(count <= 32, "Cannot write more than 32 bits at once");

        if count == 0 {
            return Ok(());
        }

        self.buffer |= u64::from(value & low_mask(count)) << self.bits_in_buffer;
        self.bits_in_buffer += count;
        self.total_bits_written += u64::from(count);

        if self.bits_in_buffer >= 32 {
            self.store_word()?;
        }

        Ok(())
    }

    /// Write a whole word.
    #[inline]
    pub fn write_word(&mut self, word: u32) -> Result<()> {
        self.write_bits(word, 32)
    }

    /// Store any partial word (zero padded) and return the number of words written.
    pub fn finish(mut self) -> Result<usize> {
        if self.bits_in_buffer > 0 {
            self.store_word()?;
        }
        Ok(self.pos)
    }
}

/// A bit-level reader over a packed word slice.
#[derive(Debug)]
pub struct WordReader<'a> {
    /// Source words.
    input: &'a [u32],
    /// Next word to load.
    pos: usize,
    /// Bit buffer (LSB-first).
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u32,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<'a> WordReader<'a> {
    /// Create a new `WordReader` reading from the start of `input`.
    pub fn new(input: &'a [u32]) -> Self {
        Self {
            input,
            pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Number of words loaded so far, including a partially consumed one.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Read `count` bits (0-32), first bit in the LSB position.
    #[inline]
    pub fn read_bits(&mut self, count: u32) -> Result<u32> {
        debug_assert!(count <= 32, "Cannot read more than 32 bits at once");

        if count == 0 {
            return Ok(0);
        }

        if self.bits_in_buffer < count {
            let word = *self
                .input
                .get(self.pos)
                .ok_or(PackError::UnexpectedEof { expected: 1 })?;
            self.buffer |= u64::from(word) << self.bits_in_buffer;
            self.bits_in_buffer += 32;
            self.pos += 1;
        }

        let result = (self.buffer as u32) & low_mask(count);
        self.buffer >>= count;
        self.bits_in_buffer -= count;
        self.total_bits_read += u64::from(count);

        Ok(result)
    }

    /// Read a whole word.
    #[inline]
    pub fn read_word(&mut self) -> Result<u32> {
        self.read_bits(32)
    }

    /// Discard the bits remaining in a partially consumed word.
    pub fn align_to_word(&mut self) {
        self.total_bits_read += u64::from(self.bits_in_buffer);
        self.buffer = 0;
        self.bits_in_buffer = 0;
    }
}

/// Pack the low `width` bits of every value into `output`.
///
/// Returns the number of words written, always `packed_words(values.len(), width)`.
/// A width of 0 writes nothing.
pub fn pack(values: &[u32], width: u32, output: &mut [u32]) -> Result<usize> {
    debug_assert!(width <= 32, "bit width {width} out of range");

    let needed = packed_words(values.len(), width);
    if output.len() < needed {
        return Err(PackError::buffer_too_small(needed, output.len()));
    }

    let mut writer = WordWriter::new(&mut output[..needed]);
    for &value in values {
        writer.write_bits(value, width)?;
    }
    writer.finish()
}

/// Unpack `output.len()` fields of `width` bits from `input`.
///
/// Returns the number of words consumed. A width of 0 fills `output` with zeros.
pub fn unpack(input: &[u32], width: u32, output: &mut [u32]) -> Result<usize> {
    if width > 32 {
        return Err(PackError::InvalidBitWidth(width));
    }

    let needed = packed_words(output.len(), width);
    if input.len() < needed {
        return Err(PackError::unexpected_eof(needed - input.len()));
    }

    let mut reader = WordReader::new(&input[..needed]);
    for slot in output.iter_mut() {
        *slot = reader.read_bits(width)?;
    }
    Ok(needed)
}
