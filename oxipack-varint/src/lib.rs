//! # OxiPack-Varint: Variable-Byte Integer Codec
//!
//! Variable-byte encoding stores each integer in 1 to 5 bytes, 7 data bits
//! per byte, with the high bit flagging that another byte follows. Small
//! values (such as delta-coded posting list gaps) take a single byte.
//!
//! In the OxiPack suite this is the fallback codec: it encodes the tail that
//! does not fill a whole block and any input too small or irregular for
//! block packing.
//!
//! ## Features
//!
//! - [`VariableByte`]: an [`IntegerCodec`](oxipack_core::IntegerCodec) over
//!   word buffers (bytes little-endian within words, last word zero padded)
//! - [`encode_bytes`] / [`decode_bytes`]: the same encoding on plain byte
//!   streams
//!
//! ## Example
//!
//! ```rust
//! use oxipack_varint::VariableByte;
//! use oxipack_core::IntegerCodec;
//!
//! let codec = VariableByte::new();
//! let input = [3, 200, 70000];
//! let mut packed = vec![0u32; codec.max_compressed_words(input.len())];
//! let (_, written) = codec.compress(&input, &mut packed).unwrap();
//! assert_eq!(written, 2); // 1 + 2 + 3 bytes
//!
//! let mut decoded = [0i32; 3];
//! codec.decompress(&packed[..written], &mut decoded).unwrap();
//! assert_eq!(decoded, input);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codec;
mod varint;

pub use codec::VariableByte;
pub use varint::{MAX_BYTES, decode_bytes, decode_one, encode_bytes, encode_one, encoded_len};
