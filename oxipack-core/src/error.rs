//! Error types for OxiPack operations.
//!
//! Every codec in the workspace reports failures through [`PackError`]. The
//! codecs are pure computations, so every error is deterministic: the same
//! input always fails the same way and retrying is never meaningful.

use thiserror::Error;

/// The main error type for OxiPack operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PackError {
    /// Output or destination buffer too small for the operation.
    #[error("Buffer too small: need {needed} words, have {available}")]
    BufferTooSmall {
        /// Number of units needed.
        needed: usize,
        /// Number of units available.
        available: usize,
    },

    /// Packed input ended before the codec finished decoding.
    #[error("Unexpected end of input: expected {expected} more units")]
    UnexpectedEof {
        /// Number of units that were expected but not available.
        expected: usize,
    },

    /// A block width marker read from a stream is outside `0..=32`.
    #[error("Invalid bit width: {0} (must be 0-32)")]
    InvalidBitWidth(u32),

    /// A block codec was asked to decode a length that is not a whole number of blocks.
    #[error("Invalid length {length}: must be a multiple of block size {block_size}")]
    InvalidLength {
        /// Requested number of integers.
        length: usize,
        /// Block size of the codec.
        block_size: usize,
    },

    /// Corrupted data in a packed stream.
    #[error("Corrupted data at offset {offset}: {message}")]
    CorruptedData {
        /// Word or byte offset where corruption was detected.
        offset: u64,
        /// Description of the corruption.
        message: String,
    },

    /// Invalid envelope header.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// Envelope format marker not understood by this build.
    #[error("Unsupported format marker: {marker:#x}")]
    UnsupportedFormat {
        /// The marker word found in the envelope.
        marker: u32,
    },

    /// Two codecs with different capability tags were composed.
    #[error("Incompatible codecs: {first} cannot be composed with {second}")]
    IncompatibleCodecs {
        /// Name of the bulk codec.
        first: String,
        /// Name of the fallback codec.
        second: String,
    },
}

/// Result type alias for OxiPack operations.
pub type Result<T> = std::result::Result<T, PackError>;

impl PackError {
    /// Create a buffer too small error.
    pub fn buffer_too_small(needed: usize, available: usize) -> Self {
        Self::BufferTooSmall { needed, available }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create an invalid length error.
    pub fn invalid_length(length: usize, block_size: usize) -> Self {
        Self::InvalidLength { length, block_size }
    }

    /// Create a corrupted data error.
    pub fn corrupted(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptedData {
            offset,
            message: message.into(),
        }
    }

    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(marker: u32) -> Self {
        Self::UnsupportedFormat { marker }
    }

    /// Create an incompatible codecs error.
    pub fn incompatible_codecs(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::IncompatibleCodecs {
            first: first.into(),
            second: second.into(),
        }
    }
}
