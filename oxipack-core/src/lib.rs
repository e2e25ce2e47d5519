//! # OxiPack Core
//!
//! Core components for the OxiPack integer compression library.
//!
//! This crate provides the fundamental building blocks shared by every codec:
//!
//! - [`bitstream`]: Word-level bit I/O and fixed-width pack/unpack helpers
//! - [`delta`]: Forward/inverse difference coding
//! - [`codec`]: The [`IntegerCodec`] contract and its capability tag
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! OxiPack is designed as a layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: CLI                                                 │
//! │     oxipack compress / decompress / info / bench        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L3: Framing                                             │
//! │     Headless composition, self-describing IntCompressor │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Binary packing, XOR binary packing, variable byte   │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     WordWriter/WordReader, delta, IntegerCodec          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxipack_core::bitstream::{pack, unpack};
//! use oxipack_core::delta;
//!
//! let mut ids = [100, 101, 103, 110];
//! delta::forward(&mut ids, 0);
//! assert_eq!(ids, [100, 1, 2, 7]);
//!
//! let values = [1u32, 2, 3, 4];
//! let mut words = [0u32; 1];
//! assert_eq!(pack(&values, 3, &mut words).unwrap(), 1);
//! let mut decoded = [0u32; 4];
//! unpack(&words, 3, &mut decoded).unwrap();
//! assert_eq!(decoded, values);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod codec;
pub mod delta;
pub mod error;

// Re-exports for convenience
pub use bitstream::{WordReader, WordWriter};
pub use codec::{
    BLOCK_SIZE, CodecKind, IntegerCodec, compress_to_vec, decompress_to_vec, scratch_words,
};
pub use error::{PackError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{WordReader, WordWriter};
    pub use crate::codec::{BLOCK_SIZE, CodecKind, IntegerCodec};
    pub use crate::error::{PackError, Result};
}
