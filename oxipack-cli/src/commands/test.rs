//! Test command implementation.

use oxipack_compose::{IntCompressor, bytes_to_words, inspect};
use std::fs;
use std::path::Path;

pub fn cmd_test(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing {}", input.display());

    let bytes = fs::read(input)?;
    let result = bytes_to_words(&bytes).and_then(|words| {
        let info = inspect(&words)?;
        let values = IntCompressor::default().decompress(&words)?;
        Ok((info, values))
    });

    match result {
        Ok((info, values)) => {
            println!("  OK: {} integers ({})", values.len(), info.format.describe());
            Ok(())
        }
        Err(e) => {
            println!("  FAILED: {}", e);
            Err(e.into())
        }
    }
}
