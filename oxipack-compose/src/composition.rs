//! Headless composition of a bulk block codec with a fallback codec.
//!
//! The bulk codec takes the largest prefix that is a whole number of its
//! blocks, the fallback codec takes the rest, and the two outputs are
//! concatenated with no boundary marker:
//!
//! ```text
//! ┌────────────────────────────┬─────────────────────┐
//! │ bulk stream (len / 32 blk) │ fallback (len % 32) │
//! └────────────────────────────┴─────────────────────┘
//! ```
//!
//! Decoding needs the original element count to find the boundary, which is
//! why the composition is "headless". Anything leaving the process should go
//! through [`IntCompressor`](crate::IntCompressor) instead, whose envelope
//! records the count.

use oxipack_bitpack::{BinaryPacking, XorBinaryPacking};
use oxipack_core::codec::{CodecKind, IntegerCodec};
use oxipack_core::error::{PackError, Result};
use oxipack_varint::VariableByte;

/// Two codecs joined into one headless codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition<F, S> {
    first: F,
    second: S,
    name: &'static str,
}

impl<F: IntegerCodec, S: IntegerCodec> Composition<F, S> {
    /// Compose `first` (bulk) with `second` (tail).
    ///
    /// Both codecs must carry the same capability tag, which the composition
    /// then advertises.
    pub fn new(first: F, second: S) -> Result<Self> {
        if first.kind() != second.kind() {
            return Err(PackError::incompatible_codecs(first.name(), second.name()));
        }
        Ok(Self {
            first,
            second,
            name: "Composition",
        })
    }

    /// The bulk codec.
    pub fn first(&self) -> &F {
        &self.first
    }

    /// The tail codec.
    pub fn second(&self) -> &S {
        &self.second
    }

    /// Number of leading integers handled by the bulk codec.
    fn bulk_len(&self, len: usize) -> usize {
        let block = self.first.block_size().max(1);
        len - len % block
    }
}

impl Composition<BinaryPacking, VariableByte> {
    /// Binary packing with a variable-byte tail.
    pub const fn binary_packing() -> Self {
        Self {
            first: BinaryPacking::new(),
            second: VariableByte::new(),
            name: "BinaryPacking+VariableByte",
        }
    }

    /// Differential binary packing with a differential variable-byte tail.
    pub const fn differential_binary_packing() -> Self {
        Self {
            first: BinaryPacking::differential(),
            second: VariableByte::differential(),
            name: "DifferentialBinaryPacking+VariableByte",
        }
    }
}

impl Composition<XorBinaryPacking, VariableByte> {
    /// XOR binary packing with a variable-byte tail.
    pub const fn xor_binary_packing() -> Self {
        Self {
            first: XorBinaryPacking::new(),
            second: VariableByte::new(),
            name: "XorBinaryPacking+VariableByte",
        }
    }

    /// Differential XOR binary packing with a differential variable-byte tail.
    pub const fn differential_xor_binary_packing() -> Self {
        Self {
            first: XorBinaryPacking::differential(),
            second: VariableByte::differential(),
            name: "DifferentialXorBinaryPacking+VariableByte",
        }
    }
}

impl<F: IntegerCodec, S: IntegerCodec> IntegerCodec for Composition<F, S> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn kind(&self) -> CodecKind {
        self.first.kind()
    }

    fn max_compressed_words(&self, len: usize) -> usize {
        let bulk = self.bulk_len(len);
        self.first.max_compressed_words(bulk) + self.second.max_compressed_words(len - bulk)
    }

    fn compress(&self, input: &[i32], output: &mut [u32]) -> Result<(usize, usize)> {
        let (bulk_consumed, bulk_written) = self.first.compress(input, output)?;
        let (tail_consumed, tail_written) = self
            .second
            .compress(&input[bulk_consumed..], &mut output[bulk_written..])?;

        Ok((bulk_consumed + tail_consumed, bulk_written + tail_written))
    }

    fn decompress(&self, input: &[u32], output: &mut [i32]) -> Result<(usize, usize)> {
        let bulk = self.bulk_len(output.len());
        let (bulk_output, tail_output) = output.split_at_mut(bulk);

        let (bulk_read, _) = self.first.decompress(input, bulk_output)?;
        let (tail_read, _) = self.second.decompress(&input[bulk_read..], tail_output)?;

        Ok((bulk_read + tail_read, output.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipack_core::{compress_to_vec, decompress_to_vec};

    fn roundtrip<C: IntegerCodec>(codec: &C, input: &[i32]) -> Vec<u32> {
        let packed = compress_to_vec(codec, input).unwrap();
        let (decoded, consumed) = decompress_to_vec(codec, &packed, input.len()).unwrap();
        assert_eq!(consumed, packed.len(), "{}", codec.name());
        assert_eq!(decoded, input, "{}", codec.name());
        packed
    }

    #[test]
    fn test_tail_goes_to_fallback() {
        let codec = Composition::binary_packing();
        let input: Vec<i32> = (0..35).collect();
        let packed = roundtrip(&codec, &input);
        // one block at width 5 (6 words), then bytes 32 33 34 in one word
        assert_eq!(packed.len(), 7);
        assert_eq!(packed[6], 0x0022_2120);
    }

    #[test]
    fn test_short_input_is_all_fallback() {
        let codec = Composition::xor_binary_packing();
        let packed = roundtrip(&codec, &[9, 8, 7]);
        assert_eq!(packed, vec![0x0007_0809]);
    }

    #[test]
    fn test_empty_input() {
        let codec = Composition::differential_binary_packing();
        assert!(roundtrip(&codec, &[]).is_empty());
    }

    #[test]
    fn test_all_variants_roundtrip() {
        let input: Vec<i32> = (0..1000).map(|k| 3 * k + 5).collect();
        let binary = roundtrip(&Composition::binary_packing(), &input);
        let diff = roundtrip(&Composition::differential_binary_packing(), &input);
        roundtrip(&Composition::xor_binary_packing(), &input);
        roundtrip(&Composition::differential_xor_binary_packing(), &input);
        // Gaps of 3 pack far tighter than raw values
        assert!(diff.len() < binary.len() / 3);
    }

    #[test]
    fn test_kind_follows_components() {
        assert_eq!(Composition::binary_packing().kind(), CodecKind::Plain);
        assert_eq!(
            Composition::differential_xor_binary_packing().kind(),
            CodecKind::Differential
        );
        let custom = Composition::new(BinaryPacking::new(), VariableByte::new()).unwrap();
        assert_eq!(custom.name(), "Composition");
        assert_eq!(custom.block_size(), 1);
    }

    #[test]
    fn test_mixed_kinds_rejected() {
        let err = Composition::new(BinaryPacking::differential(), VariableByte::new()).unwrap_err();
        assert_eq!(
            err,
            PackError::incompatible_codecs("DifferentialBinaryPacking", "VariableByte")
        );
    }

    #[test]
    fn test_headless_trusts_count() {
        let codec = Composition::binary_packing();
        let input: Vec<i32> = (100..140).collect();
        let packed = compress_to_vec(&codec, &input).unwrap();

        // A headless stream trusts the count: asking for fewer integers still "works".
        let (decoded, consumed) = decompress_to_vec(&codec, &packed, 33).unwrap();
        assert_ne!(consumed, packed.len());
        assert_eq!(&decoded[..32], &input[..32]);
    }

    #[test]
    fn test_output_too_small() {
        let codec = Composition::binary_packing();
        let input: Vec<i32> = (0..40).collect();
        let mut out = vec![0u32; 3];
        assert!(matches!(
            codec.compress(&input, &mut out),
            Err(PackError::BufferTooSmall { .. })
        ));
    }
}
