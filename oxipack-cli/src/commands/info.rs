//! Info command implementation.

use crate::utils::format_size;
use oxipack_compose::{EnvelopeInfo, Format, bytes_to_words, inspect};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// JSON output for envelope metadata.
#[derive(Debug, Serialize)]
struct EnvelopeJson {
    file: String,
    count: usize,
    marker: u32,
    format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scheme: Option<String>,
    differential: bool,
    payload_words: usize,
    size: usize,
    bits_per_int: f64,
    ratio: f64,
}

impl EnvelopeJson {
    fn new(file: &Path, info: &EnvelopeInfo) -> Self {
        let (scheme, differential) = match info.format {
            Format::Raw => (None, false),
            Format::Packed { scheme, kind } => {
                (Some(scheme.name().to_string()), kind.is_differential())
            }
        };

        Self {
            file: file.display().to_string(),
            count: info.count,
            marker: info.format.marker(),
            format: info.format.describe(),
            scheme,
            differential,
            payload_words: info.payload_words,
            size: info.total_words() * 4,
            bits_per_int: info.bits_per_int(),
            ratio: info.ratio(),
        }
    }
}

pub fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(input)?;
    let words = bytes_to_words(&bytes)?;
    let info = inspect(&words)?;

    if json {
        let output = EnvelopeJson::new(input, &info);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Envelope Information");
    println!("====================");
    println!("File: {}", input.display());
    println!("Size: {}", format_size(bytes.len()));
    println!("Integers: {}", info.count);
    println!(
        "Format: {} (marker {:#x})",
        info.format.describe(),
        info.format.marker()
    );
    println!("Payload: {} words", info.payload_words);
    if info.count > 0 {
        println!("Bits per integer: {:.2}", info.bits_per_int());
        println!("Space savings: {:.1}%", (1.0 - info.ratio()) * 100.0);
    }

    Ok(())
}
