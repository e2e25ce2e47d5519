//! Block framing shared by the block codecs.
//!
//! A block on the wire is one width word followed by `width` words holding
//! [`BLOCK_SIZE`] fields of `width` bits each.

use oxipack_core::BLOCK_SIZE;
use oxipack_core::bitstream::{max_bit_width, pack, unpack};
use oxipack_core::error::{PackError, Result};

/// Words occupied by one block packed at `width`.
#[inline]
pub(crate) fn block_words(width: u32) -> usize {
    1 + width as usize
}

/// Worst-case words for the full blocks contained in `len` integers.
#[inline]
pub(crate) fn max_words(len: usize) -> usize {
    (len / BLOCK_SIZE) * block_words(32)
}

/// Write `block` at the minimal width. Returns the words written.
pub(crate) fn write_block(block: &[u32; BLOCK_SIZE], output: &mut [u32]) -> Result<usize> {
    let width = max_bit_width(block);
    assert!(width <= 32, "computed bit width {width} exceeds 32");

    let needed = block_words(width);
    if output.len() < needed {
        return Err(PackError::buffer_too_small(needed, output.len()));
    }

    output[0] = width;
    pack(block, width, &mut output[1..needed])?;
    Ok(needed)
}

/// Read one block into `block`. Returns the words consumed.
pub(crate) fn read_block(input: &[u32], block: &mut [u32; BLOCK_SIZE]) -> Result<usize> {
    let (&width, data) = input
        .split_first()
        .ok_or(PackError::UnexpectedEof { expected: 1 })?;
    if width > 32 {
        return Err(PackError::InvalidBitWidth(width));
    }

    Ok(1 + unpack(data, width, block)?)
}

/// Check that `len` integers form whole blocks.
#[inline]
pub(crate) fn check_block_multiple(len: usize) -> Result<()> {
    if len % BLOCK_SIZE != 0 {
        return Err(PackError::invalid_length(len, BLOCK_SIZE));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_block_is_single_word() {
        let block = [0u32; BLOCK_SIZE];
        let mut out = [0xFFFF_FFFFu32; 4];
        assert_eq!(write_block(&block, &mut out).unwrap(), 1);
        assert_eq!(out[0], 0);

        let mut decoded = [1u32; BLOCK_SIZE];
        assert_eq!(read_block(&out, &mut decoded).unwrap(), 1);
        assert_eq!(decoded, block);
    }

    #[test]
    fn test_full_width_block() {
        let mut block = [0u32; BLOCK_SIZE];
        block[5] = u32::MAX;
        let mut out = [0u32; 33];
        assert_eq!(write_block(&block, &mut out).unwrap(), 33);
        assert_eq!(out[0], 32);
        assert_eq!(out[6], u32::MAX);
    }

    #[test]
    fn test_write_block_short_output() {
        let block = [3u32; BLOCK_SIZE];
        let mut out = [0u32; 2];
        assert_eq!(
            write_block(&block, &mut out),
            Err(PackError::buffer_too_small(3, 2))
        );
    }

    #[test]
    fn test_read_block_errors() {
        let mut block = [0u32; BLOCK_SIZE];
        assert_eq!(
            read_block(&[], &mut block),
            Err(PackError::UnexpectedEof { expected: 1 })
        );
        assert_eq!(
            read_block(&[40, 0, 0], &mut block),
            Err(PackError::InvalidBitWidth(40))
        );
        assert!(matches!(
            read_block(&[4, 0, 0], &mut block),
            Err(PackError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_max_words() {
        assert_eq!(max_words(31), 0);
        assert_eq!(max_words(64), 66);
        assert!(check_block_multiple(96).is_ok());
        assert!(check_block_multiple(97).is_err());
    }
}
