//! Self-describing envelope format.
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────────────────────┐
//! │ count (u32)  │ marker (u32) │ payload words                │
//! └──────────────┴──────────────┴──────────────────────────────┘
//! ```
//!
//! Marker layout:
//!
//! | Bits  | Meaning                                           |
//! |-------|---------------------------------------------------|
//! | 0-7   | scheme id (0 = raw copy, 1 binary, 2 xor, 3 vbyte) |
//! | 8     | differential flag (payload holds delta-coded data) |
//! | 9-31  | reserved, must be zero                             |
//!
//! A raw payload is the original array verbatim, one word per integer. The
//! byte form of an envelope is the little-endian encoding of its words.

use crate::scheme::Scheme;
use oxipack_core::BLOCK_SIZE;
use oxipack_core::codec::CodecKind;
use oxipack_core::error::{PackError, Result};

/// Number of header words before the payload.
pub const HEADER_WORDS: usize = 2;

/// Marker of a raw (uncompressed) payload.
pub const RAW_MARKER: u32 = 0;

const SCHEME_MASK: u32 = 0xFF;
const DIFFERENTIAL_FLAG: u32 = 1 << 8;

/// How the payload of an envelope is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Verbatim copy of the input.
    Raw,
    /// Headless stream produced by a scheme's codec.
    Packed {
        /// Codec family.
        scheme: Scheme,
        /// Whether the payload is delta coded.
        kind: CodecKind,
    },
}

impl Format {
    /// Encode as a marker word.
    pub fn marker(self) -> u32 {
        match self {
            Self::Raw => RAW_MARKER,
            Self::Packed { scheme, kind } => {
                let flag = if kind.is_differential() {
                    DIFFERENTIAL_FLAG
                } else {
                    0
                };
                u32::from(scheme.id()) | flag
            }
        }
    }

    /// Decode a marker word.
    pub fn from_marker(marker: u32) -> Result<Self> {
        if marker == RAW_MARKER {
            return Ok(Self::Raw);
        }
        if marker & !(SCHEME_MASK | DIFFERENTIAL_FLAG) != 0 {
            return Err(PackError::unsupported_format(marker));
        }

        let scheme = Scheme::from_id((marker & SCHEME_MASK) as u8)
            .ok_or_else(|| PackError::unsupported_format(marker))?;
        let kind = if marker & DIFFERENTIAL_FLAG != 0 {
            CodecKind::Differential
        } else {
            CodecKind::Plain
        };
        Ok(Self::Packed { scheme, kind })
    }

    /// Short description, e.g. `raw` or `xor (differential)`.
    pub fn describe(self) -> String {
        match self {
            Self::Raw => "raw".to_string(),
            Self::Packed { scheme, kind } => format!("{} ({})", scheme, kind),
        }
    }
}

/// Header of an envelope, read without decoding the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeInfo {
    /// Number of integers in the original array.
    pub count: usize,
    /// Payload encoding.
    pub format: Format,
    /// Number of payload words.
    pub payload_words: usize,
}

impl EnvelopeInfo {
    /// Total envelope size in words.
    pub fn total_words(&self) -> usize {
        HEADER_WORDS + self.payload_words
    }

    /// Envelope size relative to the raw array (1.0 means no gain).
    pub fn ratio(&self) -> f64 {
        if self.count == 0 {
            return 1.0;
        }
        self.total_words() as f64 / self.count as f64
    }

    /// Average bits spent per integer, header included.
    pub fn bits_per_int(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.total_words() as f64 * 32.0 / self.count as f64
    }
}

/// Read and validate an envelope header.
///
/// Rejects envelopes shorter than the header, unknown markers, a raw payload
/// whose length differs from the count, and counts larger than the payload
/// could possibly encode.
pub fn inspect(envelope: &[u32]) -> Result<EnvelopeInfo> {
    if envelope.len() < HEADER_WORDS {
        return Err(PackError::invalid_header(format!(
            "envelope has {} words, need at least {}",
            envelope.len(),
            HEADER_WORDS
        )));
    }

    let count = envelope[0] as usize;
    let format = Format::from_marker(envelope[1])?;
    let payload_words = envelope.len() - HEADER_WORDS;

    match format {
        Format::Raw if payload_words != count => {
            return Err(PackError::corrupted(
                HEADER_WORDS as u64,
                format!("raw payload holds {payload_words} words, header says {count}"),
            ));
        }
        // Densest case: a zero-width block stores 32 integers in one word.
        Format::Packed { .. } if count > payload_words.saturating_mul(BLOCK_SIZE) => {
            return Err(PackError::corrupted(
                HEADER_WORDS as u64,
                format!("count {count} cannot fit in {payload_words} payload words"),
            ));
        }
        _ => {}
    }

    Ok(EnvelopeInfo {
        count,
        format,
        payload_words,
    })
}

/// Little-endian byte form of `words`.
pub fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Words from a little-endian byte form.
pub fn bytes_to_words(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return Err(PackError::invalid_header(format!(
            "byte length {} is not a multiple of 4",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_roundtrip() {
        for scheme in Scheme::ALL {
            for kind in [CodecKind::Plain, CodecKind::Differential] {
                let format = Format::Packed { scheme, kind };
                assert_eq!(Format::from_marker(format.marker()), Ok(format));
            }
        }
        assert_eq!(Format::from_marker(RAW_MARKER), Ok(Format::Raw));
    }

    #[test]
    fn test_marker_values() {
        let format = Format::Packed {
            scheme: Scheme::BinaryPacking,
            kind: CodecKind::Differential,
        };
        assert_eq!(format.marker(), 0x101);
        assert_eq!(format.describe(), "binary (differential)");
        assert_eq!(Format::Raw.describe(), "raw");
    }

    #[test]
    fn test_unknown_markers() {
        assert_eq!(Format::from_marker(7), Err(PackError::unsupported_format(7)));
        assert_eq!(
            Format::from_marker(0x200 | 1),
            Err(PackError::unsupported_format(0x201))
        );
        assert_eq!(
            Format::from_marker(DIFFERENTIAL_FLAG),
            Err(PackError::unsupported_format(0x100))
        );
    }

    #[test]
    fn test_inspect() {
        let info = inspect(&[3, RAW_MARKER, 1, 2, 3]).unwrap();
        assert_eq!(info.count, 3);
        assert_eq!(info.format, Format::Raw);
        assert_eq!(info.total_words(), 5);

        assert!(matches!(inspect(&[1]), Err(PackError::InvalidHeader { .. })));
        assert!(matches!(
            inspect(&[4, RAW_MARKER, 1]),
            Err(PackError::CorruptedData { .. })
        ));
        assert!(matches!(
            inspect(&[u32::MAX, 0x101, 0]),
            Err(PackError::CorruptedData { .. })
        ));
    }

    #[test]
    fn test_ratio() {
        let info = EnvelopeInfo {
            count: 64,
            format: Format::Raw,
            payload_words: 30,
        };
        assert!((info.ratio() - 0.5).abs() < f64::EPSILON);
        assert!((info.bits_per_int() - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_byte_form() {
        let words = [0x0403_0201, 0xFFFF_0000];
        let bytes = words_to_bytes(&words);
        assert_eq!(bytes, [1, 2, 3, 4, 0, 0, 0xFF, 0xFF]);
        assert_eq!(bytes_to_words(&bytes).unwrap(), words);
        assert!(matches!(
            bytes_to_words(&bytes[..5]),
            Err(PackError::InvalidHeader { .. })
        ));
    }
}
