//! Self-describing integer compressor.
//!
//! [`IntCompressor`] wraps a headless codec in an envelope recording the
//! integer count and the payload format, so that [`IntCompressor::decompress`]
//! needs nothing but the envelope itself. When compression would not shrink
//! the array, the input is stored verbatim instead.

use crate::config::CompressorConfig;
use crate::format::{Format, HEADER_WORDS, bytes_to_words, inspect, words_to_bytes};
use oxipack_core::codec::{IntegerCodec, scratch_words};
use oxipack_core::delta;
use oxipack_core::error::{PackError, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Integer array compressor producing self-describing envelopes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntCompressor {
    config: CompressorConfig,
}

impl IntCompressor {
    /// Create a compressor with the given configuration.
    pub const fn new(config: CompressorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &CompressorConfig {
        &self.config
    }

    /// Compress `input` into an envelope.
    pub fn compress(&self, input: &[i32]) -> Result<Vec<u32>> {
        let count = u32::try_from(input.len()).map_err(|_| {
            PackError::invalid_header(format!(
                "{} integers exceed the envelope count field",
                input.len()
            ))
        })?;

        let codec = self.config.codec();
        let mut deltas = Vec::new();
        let source = if codec.kind().is_differential() {
            deltas.resize(input.len(), 0);
            delta::forward_to(input, &mut deltas, 0)?;
            &deltas[..]
        } else {
            input
        };

        let mut envelope = vec![0u32; HEADER_WORDS + scratch_words(input.len())];
        let (consumed, written) = codec.compress(source, &mut envelope[HEADER_WORDS..])?;
        if consumed != input.len() {
            return Err(PackError::invalid_length(input.len(), codec.block_size()));
        }

        log::trace!(
            "{}: {} integers -> {} payload words",
            codec.name(),
            input.len(),
            written
        );

        if self.config.raw_fallback && written >= input.len() {
            log::debug!(
                "{} did not shrink {} integers ({} words), storing raw",
                codec.name(),
                input.len(),
                written
            );
            return Ok(raw_envelope(count, input));
        }

        let format = Format::Packed {
            scheme: self.config.scheme,
            kind: codec.kind(),
        };
        envelope[0] = count;
        envelope[1] = format.marker();
        envelope.truncate(HEADER_WORDS + written);
        Ok(envelope)
    }

    /// Decompress an envelope.
    ///
    /// The envelope names its own format, so any envelope produced by any
    /// configuration decodes here.
    pub fn decompress(&self, envelope: &[u32]) -> Result<Vec<i32>> {
        let info = inspect(envelope)?;
        let payload = &envelope[HEADER_WORDS..];

        let (scheme, kind) = match info.format {
            Format::Raw => {
                log::debug!("raw envelope with {} integers", info.count);
                return Ok(payload.iter().map(|&w| w as i32).collect());
            }
            Format::Packed { scheme, kind } => (scheme, kind),
        };

        let codec = scheme.codec(kind);
        log::debug!("decoding {} integers with {}", info.count, codec.name());

        let mut output = vec![0i32; info.count];
        let (consumed, _) = codec.decompress(payload, &mut output)?;
        if consumed != payload.len() {
            return Err(PackError::corrupted(
                (HEADER_WORDS + consumed) as u64,
                format!(
                    "{} payload words left over after {} integers",
                    payload.len() - consumed,
                    info.count
                ),
            ));
        }

        if kind.is_differential() {
            delta::inverse(&mut output, 0);
        }
        Ok(output)
    }

    /// Compress `input` into the little-endian byte form of its envelope.
    pub fn compress_to_bytes(&self, input: &[i32]) -> Result<Vec<u8>> {
        self.compress(input).map(|words| words_to_bytes(&words))
    }

    /// Decompress the little-endian byte form of an envelope.
    pub fn decompress_from_bytes(&self, bytes: &[u8]) -> Result<Vec<i32>> {
        let words = bytes_to_words(bytes)?;
        self.decompress(&words)
    }

    /// Compress independent arrays in parallel.
    ///
    /// Results are in input order; the first failure is returned.
    #[cfg(feature = "parallel")]
    pub fn compress_batch<T>(&self, inputs: &[T]) -> Result<Vec<Vec<u32>>>
    where
        T: AsRef<[i32]> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.compress(input.as_ref()))
            .collect()
    }

    /// Decompress independent envelopes in parallel.
    #[cfg(feature = "parallel")]
    pub fn decompress_batch<T>(&self, envelopes: &[T]) -> Result<Vec<Vec<i32>>>
    where
        T: AsRef<[u32]> + Sync,
    {
        envelopes
            .par_iter()
            .map(|envelope| self.decompress(envelope.as_ref()))
            .collect()
    }
}

fn raw_envelope(count: u32, input: &[i32]) -> Vec<u32> {
    let mut envelope = Vec::with_capacity(HEADER_WORDS + input.len());
    envelope.push(count);
    envelope.push(Format::Raw.marker());
    envelope.extend(input.iter().map(|&v| v as u32));
    envelope
}
