//! Single-integer variable-byte encoding and the byte-stream helpers.
//!
//! An integer (viewed as `u32`) is split into 7-bit groups, least significant
//! group first. Every byte but the last has its high bit set:
//!
//! ```text
//! 300 = 0b10_0101100  ->  [1_0101100] [0_0000010]  ->  0xAC 0x02
//! ```

use oxipack_core::error::{PackError, Result};

/// Maximum encoded length of a 32-bit integer.
pub const MAX_BYTES: usize = 5;

const CONTINUATION: u8 = 0x80;
const PAYLOAD: u8 = 0x7F;

/// Encode one integer into `buf`. Returns the number of bytes used (1-5).
#[inline]
pub fn encode_one(value: u32, buf: &mut [u8; MAX_BYTES]) -> usize {
    let mut remaining = value;
    let mut len = 0;
    loop {
        let byte = (remaining as u8) & PAYLOAD;
        remaining >>= 7;
        if remaining == 0 {
            buf[len] = byte;
            return len + 1;
        }
        buf[len] = byte | CONTINUATION;
        len += 1;
    }
}

/// Number of bytes [`encode_one`] emits for `value`.
#[inline]
pub fn encoded_len(value: u32) -> usize {
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        0x20_0000..=0xFFF_FFFF => 4,
        _ => 5,
    }
}

/// Decode one integer from `bytes`, advancing `offset` by the bytes read.
#[inline]
pub fn decode_one<I: Iterator<Item = u8>>(bytes: &mut I, offset: &mut usize) -> Result<u32> {
    let mut result = 0u32;
    for shift in (0..32).step_by(7) {
        let byte = bytes.next().ok_or(PackError::UnexpectedEof { expected: 1 })?;
        *offset += 1;

        // The fifth group only has room for the top 4 bits and must end the integer.
        if shift == 28 && byte & 0xF0 != 0 {
            return Err(PackError::corrupted(
                (*offset - 1) as u64,
                "variable-byte integer exceeds 32 bits",
            ));
        }

        result |= u32::from(byte & PAYLOAD) << shift;
        if byte & CONTINUATION == 0 {
            return Ok(result);
        }
    }

    Err(PackError::corrupted(
        (*offset - 1) as u64,
        "unterminated variable-byte integer",
    ))
}

/// Append the variable-byte encoding of every integer to `output`.
pub fn encode_bytes(input: &[i32], output: &mut Vec<u8>) {
    output.reserve(input.len());
    let mut buf = [0u8; MAX_BYTES];
    for &value in input {
        let len = encode_one(value as u32, &mut buf);
        output.extend_from_slice(&buf[..len]);
    }
}

/// Decode `output.len()` integers from a byte stream. Returns the bytes consumed.
pub fn decode_bytes(input: &[u8], output: &mut [i32]) -> Result<usize> {
    let mut bytes = input.iter().copied();
    let mut offset = 0;
    for slot in output.iter_mut() {
        *slot = decode_one(&mut bytes, &mut offset)? as i32;
    }
    Ok(offset)
}
