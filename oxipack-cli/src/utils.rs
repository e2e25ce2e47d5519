//! Utility functions for the CLI.

use clap::ValueEnum;
use std::fs;
use std::path::Path;

/// On-disk representation of a plain integer array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum DataFormat {
    /// Whitespace separated decimal integers
    #[default]
    Text,
    /// Little-endian 32-bit integers
    Binary,
}

/// Read an integer array from `path`.
pub fn read_integers(
    path: &Path,
    format: DataFormat,
) -> Result<Vec<i32>, Box<dyn std::error::Error>> {
    match format {
        DataFormat::Text => {
            let text = fs::read_to_string(path)?;
            parse_text(&text)
        }
        DataFormat::Binary => {
            let bytes = fs::read(path)?;
            parse_binary(&bytes)
        }
    }
}

/// Write an integer array to `path`.
pub fn write_integers(
    path: &Path,
    values: &[i32],
    format: DataFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let contents = match format {
        DataFormat::Text => {
            let mut text = String::with_capacity(values.len() * 8);
            for value in values {
                text.push_str(&value.to_string());
                text.push('\n');
            }
            text.into_bytes()
        }
        DataFormat::Binary => values.iter().flat_map(|v| v.to_le_bytes()).collect(),
    };
    fs::write(path, contents)?;
    Ok(())
}

fn parse_text(text: &str) -> Result<Vec<i32>, Box<dyn std::error::Error>> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse::<i32>().map_err(|e| {
                Box::<dyn std::error::Error>::from(format!(
                    "value #{} ({:?}): {}",
                    index + 1,
                    token,
                    e
                ))
            })
        })
        .collect()
}

fn parse_binary(bytes: &[u8]) -> Result<Vec<i32>, Box<dyn std::error::Error>> {
    if bytes.len() % 4 != 0 {
        return Err(format!(
            "binary input is {} bytes, not a multiple of 4",
            bytes.len()
        )
        .into());
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Format a byte count for display.
pub fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let size = bytes as f64;
    if size < KIB {
        format!("{} B", bytes)
    } else if size < KIB * KIB {
        format!("{:.1} KiB", size / KIB)
    } else {
        format!("{:.1} MiB", size / (KIB * KIB))
    }
}
