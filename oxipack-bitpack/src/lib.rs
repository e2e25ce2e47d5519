//! # OxiPack-Bitpack: Block Bit Packing for 32-bit Integers
//!
//! This crate provides the block codecs of the OxiPack suite:
//!
//! - [`BinaryPacking`]: each block of 32 integers packed at the width of its
//!   largest value
//! - [`XorBinaryPacking`]: each block packed at the width of the XOR between
//!   consecutive values, which is narrower for locally clustered data
//!
//! ## Stream Layout
//!
//! ```text
//! ┌───────────┬──────────────────────┬───────────┬──────────────────────┐
//! │ width w0  │ w0 words: 32 fields  │ width w1  │ w1 words: 32 fields  │ ...
//! └───────────┴──────────────────────┴───────────┴──────────────────────┘
//! ```
//!
//! Fields are packed LSB-first and may straddle word boundaries. A width of 0
//! (all-zero block) is followed by no data words.
//!
//! Block codecs only consume whole blocks: `compress` reports how many
//! integers it took, and the remainder is expected to go to a fallback codec
//! (see `oxipack-compose`).
//!
//! ## Example
//!
//! ```rust
//! use oxipack_bitpack::BinaryPacking;
//! use oxipack_core::IntegerCodec;
//!
//! let codec = BinaryPacking::new();
//! let input: Vec<i32> = (0..64).collect();
//! let mut packed = vec![0u32; codec.max_compressed_words(input.len())];
//! let (consumed, written) = codec.compress(&input, &mut packed).unwrap();
//! assert_eq!(consumed, 64);
//!
//! let mut decoded = vec![0i32; 64];
//! codec.decompress(&packed[..written], &mut decoded).unwrap();
//! assert_eq!(decoded, input);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod binary;
mod block;
mod xor;

pub use binary::BinaryPacking;
pub use xor::XorBinaryPacking;
