//! Compressor configuration.

use crate::scheme::{AnyCodec, Scheme};
use oxipack_core::codec::CodecKind;

/// Configuration of an [`IntCompressor`](crate::IntCompressor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressorConfig {
    /// Codec family used for the payload.
    pub scheme: Scheme,
    /// Delta-encode before compressing.
    pub differential: bool,
    /// Store the input verbatim when compression does not shrink it.
    pub raw_fallback: bool,
}

impl CompressorConfig {
    /// Differential binary packing with raw fallback, suited to sorted arrays.
    pub const DEFAULT: Self = Self {
        scheme: Scheme::BinaryPacking,
        differential: true,
        raw_fallback: true,
    };

    /// Differential XOR binary packing, suited to clustered values.
    pub const XOR: Self = Self {
        scheme: Scheme::XorBinaryPacking,
        differential: true,
        raw_fallback: true,
    };

    /// Differential variable byte, suited to short arrays.
    pub const VARINT: Self = Self {
        scheme: Scheme::VariableByte,
        differential: true,
        raw_fallback: true,
    };

    /// Create a configuration for `scheme` with the default options.
    pub const fn new(scheme: Scheme) -> Self {
        Self {
            scheme,
            ..Self::DEFAULT
        }
    }

    /// Set the scheme.
    pub const fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Enable or disable delta coding.
    pub const fn with_differential(mut self, differential: bool) -> Self {
        self.differential = differential;
        self
    }

    /// Enable or disable the raw fallback.
    pub const fn with_raw_fallback(mut self, raw_fallback: bool) -> Self {
        self.raw_fallback = raw_fallback;
        self
    }

    /// Capability tag of the configured codec.
    pub fn kind(&self) -> CodecKind {
        if self.differential {
            CodecKind::Differential
        } else {
            CodecKind::Plain
        }
    }

    /// The headless codec this configuration compresses with.
    pub fn codec(&self) -> AnyCodec {
        self.scheme.codec(self.kind())
    }
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipack_core::IntegerCodec;

    #[test]
    fn test_presets() {
        assert_eq!(CompressorConfig::default(), CompressorConfig::DEFAULT);
        assert_eq!(CompressorConfig::XOR.scheme, Scheme::XorBinaryPacking);
        assert_eq!(
            CompressorConfig::new(Scheme::VariableByte),
            CompressorConfig::VARINT
        );
    }

    #[test]
    fn test_builders() {
        let config = CompressorConfig::DEFAULT
            .with_scheme(Scheme::XorBinaryPacking)
            .with_differential(false)
            .with_raw_fallback(false);
        assert_eq!(config.kind(), CodecKind::Plain);
        assert!(!config.raw_fallback);
        assert_eq!(config.codec().name(), "XorBinaryPacking+VariableByte");
    }

    #[test]
    fn test_default_codec() {
        let codec = CompressorConfig::DEFAULT.codec();
        assert_eq!(codec.name(), "DifferentialBinaryPacking+VariableByte");
        assert!(codec.kind().is_differential());
    }
}
