//! Decompress command implementation.

use crate::utils::{DataFormat, write_integers};
use oxipack_compose::IntCompressor;
use std::fs;
use std::path::Path;

pub fn cmd_decompress(
    input: &Path,
    output: &Path,
    format: DataFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(input)?;
    let values = IntCompressor::default().decompress_from_bytes(&bytes)?;
    write_integers(output, &values, format)?;

    println!(
        "Decompressed {} integers to {}",
        values.len(),
        output.display()
    );
    Ok(())
}
