//! Compress command implementation.

use crate::utils::{DataFormat, format_size, read_integers};
use clap::ValueEnum;
use oxipack_compose::{CompressorConfig, IntCompressor, Scheme, inspect, words_to_bytes};
use std::fs;
use std::path::Path;

/// Compression scheme selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SchemeArg {
    /// Block binary packing (best for sorted ids)
    #[default]
    Binary,
    /// XOR block binary packing (best for clustered values)
    Xor,
    /// Variable byte (short or irregular arrays)
    Varint,
}

impl From<SchemeArg> for Scheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Binary => Scheme::BinaryPacking,
            SchemeArg::Xor => Scheme::XorBinaryPacking,
            SchemeArg::Varint => Scheme::VariableByte,
        }
    }
}

/// Options for the compress command.
pub struct CompressOptions {
    pub scheme: SchemeArg,
    pub differential: bool,
    pub format: DataFormat,
    pub raw_fallback: bool,
}

impl CompressOptions {
    fn config(&self) -> CompressorConfig {
        CompressorConfig::new(self.scheme.into())
            .with_differential(self.differential)
            .with_raw_fallback(self.raw_fallback)
    }
}

pub fn cmd_compress(
    input: &Path,
    output: &Path,
    options: &CompressOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let values = read_integers(input, options.format)?;
    let compressor = IntCompressor::new(options.config());

    let envelope = compressor.compress(&values)?;
    let info = inspect(&envelope)?;
    let bytes = words_to_bytes(&envelope);
    fs::write(output, &bytes)?;

    log::info!(
        "{}: {} integers, format {}",
        input.display(),
        values.len(),
        info.format.describe()
    );

    let original = values.len() * 4;
    println!(
        "Compressed {} integers: {} -> {} ({:.2} bits/int, {})",
        values.len(),
        format_size(original),
        format_size(bytes.len()),
        info.bits_per_int(),
        info.format.describe()
    );

    Ok(())
}
