//! Compression schemes selectable by the compressor.

use crate::composition::Composition;
use oxipack_bitpack::{BinaryPacking, XorBinaryPacking};
use oxipack_core::codec::{CodecKind, IntegerCodec};
use oxipack_core::error::Result;
use oxipack_varint::VariableByte;
use std::fmt;

/// A codec family, independent of its capability tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    /// Block binary packing with a variable-byte tail.
    #[default]
    BinaryPacking,
    /// XOR block binary packing with a variable-byte tail.
    XorBinaryPacking,
    /// Variable-byte encoding of every integer.
    VariableByte,
}

impl Scheme {
    /// All schemes, in id order.
    pub const ALL: [Scheme; 3] = [
        Scheme::BinaryPacking,
        Scheme::XorBinaryPacking,
        Scheme::VariableByte,
    ];

    /// Identifier stored in envelope markers.
    pub fn id(self) -> u8 {
        match self {
            Self::BinaryPacking => 1,
            Self::XorBinaryPacking => 2,
            Self::VariableByte => 3,
        }
    }

    /// Look a scheme up by its envelope identifier.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::BinaryPacking => "binary",
            Self::XorBinaryPacking => "xor",
            Self::VariableByte => "varint",
        }
    }

    /// Build the headless codec for this scheme.
    pub fn codec(self, kind: CodecKind) -> AnyCodec {
        let differential = kind.is_differential();
        match (self, differential) {
            (Self::BinaryPacking, false) => AnyCodec::Binary(Composition::binary_packing()),
            (Self::BinaryPacking, true) => {
                AnyCodec::Binary(Composition::differential_binary_packing())
            }
            (Self::XorBinaryPacking, false) => AnyCodec::Xor(Composition::xor_binary_packing()),
            (Self::XorBinaryPacking, true) => {
                AnyCodec::Xor(Composition::differential_xor_binary_packing())
            }
            (Self::VariableByte, false) => AnyCodec::VariableByte(VariableByte::new()),
            (Self::VariableByte, true) => AnyCodec::VariableByte(VariableByte::differential()),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One of the headless codecs the compressor can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyCodec {
    /// Binary packing composed with variable byte.
    Binary(Composition<BinaryPacking, VariableByte>),
    /// XOR binary packing composed with variable byte.
    Xor(Composition<XorBinaryPacking, VariableByte>),
    /// Variable byte alone.
    VariableByte(VariableByte),
}

impl AnyCodec {
    fn inner(&self) -> &dyn IntegerCodec {
        match self {
            Self::Binary(c) => c,
            Self::Xor(c) => c,
            Self::VariableByte(c) => c,
        }
    }
}

impl IntegerCodec for AnyCodec {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn kind(&self) -> CodecKind {
        self.inner().kind()
    }

    fn block_size(&self) -> usize {
        self.inner().block_size()
    }

    fn max_compressed_words(&self, len: usize) -> usize {
        self.inner().max_compressed_words(len)
    }

    fn compress(&self, input: &[i32], output: &mut [u32]) -> Result<(usize, usize)> {
        self.inner().compress(input, output)
    }

    fn decompress(&self, input: &[u32], output: &mut [i32]) -> Result<(usize, usize)> {
        self.inner().decompress(input, output)
    }
}
