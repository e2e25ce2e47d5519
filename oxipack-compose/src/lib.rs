//! # OxiPack-Compose: Codec Composition and Self-Describing Compression
//!
//! This crate joins the codecs of the suite into complete compressors:
//!
//! - [`Composition`]: a block codec for the bulk of an array plus a fallback
//!   codec for the tail, concatenated with no header ("headless")
//! - [`IntCompressor`]: wraps a headless codec in an envelope recording the
//!   integer count and the payload format, falling back to a raw copy when
//!   compression does not pay off
//! - [`Scheme`] / [`CompressorConfig`]: codec selection
//!
//! ## Envelope
//!
//! ```text
//! ┌──────────┬──────────┬───────────────────────────────┐
//! │ count    │ marker   │ payload (raw copy or codec)   │
//! └──────────┴──────────┴───────────────────────────────┘
//! ```
//!
//! See [`format`] for the marker layout.
//!
//! ## Example
//!
//! ```rust
//! use oxipack_compose::{CompressorConfig, IntCompressor};
//!
//! let compressor = IntCompressor::new(CompressorConfig::DEFAULT);
//! let doc_ids: Vec<i32> = (0..10_000).map(|k| 7 * k + 3).collect();
//!
//! let envelope = compressor.compress(&doc_ids).unwrap();
//! assert!(envelope.len() < doc_ids.len() / 4);
//!
//! let decoded = compressor.decompress(&envelope).unwrap();
//! assert_eq!(decoded, doc_ids);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: enables `IntCompressor::compress_batch` and
//!   `decompress_batch`, which spread independent arrays over the rayon
//!   thread pool

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod composition;
pub mod compressor;
pub mod config;
pub mod format;
pub mod scheme;

pub use composition::Composition;
pub use compressor::IntCompressor;
pub use config::CompressorConfig;
pub use format::{EnvelopeInfo, Format, bytes_to_words, inspect, words_to_bytes};
pub use scheme::{AnyCodec, Scheme};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{AnyCodec, Composition, CompressorConfig, IntCompressor, Scheme};
    pub use oxipack_core::prelude::*;
}
