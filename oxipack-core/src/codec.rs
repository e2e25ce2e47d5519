//! The codec contract shared by every integer codec.
//!
//! A codec turns a slice of `i32` into packed `u32` words and back. Codecs
//! are stateless values: every call is a pure function of its arguments, so a
//! single codec can be shared freely between threads.
//!
//! Each codec advertises a [`CodecKind`]. A [`Differential`](CodecKind::Differential)
//! codec expects delta-encoded input; the driver functions in this module
//! ([`compress_to_vec`], [`decompress_to_vec`]) apply [`delta::forward`] before
//! compressing and [`delta::inverse`] after decompressing for such codecs.

use crate::delta;
use crate::error::{PackError, Result};

/// Canonical number of integers per packed block.
pub const BLOCK_SIZE: usize = 32;

/// Multiplier used when sizing scratch output buffers.
pub const SCRATCH_FACTOR: usize = 4;

/// Fixed slack (in words) added to scratch output buffers.
pub const SCRATCH_SLACK: usize = 1024;

/// Generous output size for compressing `len` integers: `4 * len + 1024` words.
pub fn scratch_words(len: usize) -> usize {
    len.saturating_mul(SCRATCH_FACTOR)
        .saturating_add(SCRATCH_SLACK)
}

/// Capability tag of a codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodecKind {
    /// Operates directly on the values.
    #[default]
    Plain,
    /// Operates on delta-encoded values.
    Differential,
}

impl CodecKind {
    /// Whether callers should delta-encode before compressing.
    pub fn is_differential(self) -> bool {
        self == Self::Differential
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Differential => "differential",
        }
    }
}

impl std::fmt::Display for CodecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An integer codec.
///
/// This trait is implemented by the block codecs, the variable-byte codec and
/// the compositions built from them.
pub trait IntegerCodec {
    /// Human-readable codec name.
    fn name(&self) -> &'static str;

    /// Capability tag.
    fn kind(&self) -> CodecKind;

    /// Granularity of [`compress`](Self::compress): it consumes the largest
    /// prefix of the input whose length is a multiple of this value.
    fn block_size(&self) -> usize {
        1
    }

    /// Worst-case number of output words for `len` input integers.
    fn max_compressed_words(&self, len: usize) -> usize;

    /// Compress integers from `input` into `output`.
    ///
    /// # Arguments
    ///
    /// * `input` - Integers to compress (never modified)
    /// * `output` - Destination words
    ///
    /// # Returns
    ///
    /// A tuple of (integers consumed from input, words written to output).
    /// Fails with [`PackError::BufferTooSmall`] rather than truncating.
    fn compress(&self, input: &[i32], output: &mut [u32]) -> Result<(usize, usize)>;

    /// Decompress exactly `output.len()` integers from `input`.
    ///
    /// The packed stream carries no count; the caller must know how many
    /// integers were compressed.
    ///
    /// # Returns
    ///
    /// A tuple of (words consumed from input, integers written to output).
    fn decompress(&self, input: &[u32], output: &mut [i32]) -> Result<(usize, usize)>;
}

/// Compress all of `input` with `codec` into a freshly sized vector.
///
/// Differential codecs receive delta-encoded input. Fails with
/// [`PackError::InvalidLength`] if the codec cannot consume the whole input
/// (a block codec given a partial block).
pub fn compress_to_vec<C: IntegerCodec + ?Sized>(codec: &C, input: &[i32]) -> Result<Vec<u32>> {
    let mut output = vec![0u32; codec.max_compressed_words(input.len())];

    let (consumed, written) = if codec.kind().is_differential() {
        let mut deltas = input.to_vec();
        delta::forward(&mut deltas, 0);
        codec.compress(&deltas, &mut output)?
    } else {
        codec.compress(input, &mut output)?
    };

    if consumed != input.len() {
        return Err(PackError::invalid_length(input.len(), codec.block_size()));
    }

    output.truncate(written);
    Ok(output)
}

/// Decompress `count` integers produced by [`compress_to_vec`].
///
/// Returns the integers and the number of words consumed from `packed`.
pub fn decompress_to_vec<C: IntegerCodec + ?Sized>(
    codec: &C,
    packed: &[u32],
    count: usize,
) -> Result<(Vec<i32>, usize)> {
    let mut output = vec![0i32; count];
    let (consumed, _) = codec.decompress(packed, &mut output)?;

    if codec.kind().is_differential() {
        delta::inverse(&mut output, 0);
    }

    Ok((output, consumed))
}
