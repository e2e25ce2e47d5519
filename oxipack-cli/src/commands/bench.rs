//! Bench command implementation.

use oxipack_compose::{CompressorConfig, IntCompressor, Scheme, inspect};
use std::time::{Duration, Instant};

/// Type alias for dataset generator functions
type DatasetGenerator = fn(usize) -> Vec<i32>;

/// Synthetic datasets covering the shapes the schemes are tuned for.
mod datasets {
    fn lcg(seed: &mut u64) -> u32 {
        *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        (*seed >> 32) as u32
    }

    /// Strictly increasing ids with gaps in 1..=64
    pub fn sorted(size: usize) -> Vec<i32> {
        let mut seed: u64 = 0x9E3779B97F4A7C15;
        let mut value = 0i32;
        (0..size)
            .map(|_| {
                value = value.wrapping_add(1 + (lcg(&mut seed) % 64) as i32);
                value
            })
            .collect()
    }

    /// Large base with small local jitter
    pub fn clustered(size: usize) -> Vec<i32> {
        let mut seed: u64 = 0x0FEDCBA987654321;
        (0..size)
            .map(|i| 0x2000_0000 + ((i / 1024) as i32) * 4096 + (lcg(&mut seed) % 32) as i32)
            .collect()
    }

    /// Full-range random values
    pub fn random(size: usize) -> Vec<i32> {
        let mut seed: u64 = 0xDEADBEEFCAFEBABE;
        (0..size).map(|_| lcg(&mut seed) as i32).collect()
    }

    /// A single repeated value
    pub fn constant(size: usize) -> Vec<i32> {
        vec![123_456; size]
    }
}

fn mints_per_sec(count: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return f64::INFINITY;
    }
    count as f64 / secs / 1_000_000.0
}

pub fn cmd_bench(size: usize) -> Result<(), Box<dyn std::error::Error>> {
    let inputs: [(&str, DatasetGenerator); 4] = [
        ("sorted", datasets::sorted as DatasetGenerator),
        ("clustered", datasets::clustered as DatasetGenerator),
        ("random", datasets::random as DatasetGenerator),
        ("constant", datasets::constant as DatasetGenerator),
    ];

    println!("{} integers per dataset", size);
    println!();
    println!(
        "{:<10} {:<7} {:>9} {:>12} {:>12}  Format",
        "Dataset", "Scheme", "Bits/int", "Comp Mi/s", "Decomp Mi/s"
    );
    println!("{}", "-".repeat(72));

    for (name, generator) in inputs {
        let data = generator(size);

        for scheme in Scheme::ALL {
            let compressor = IntCompressor::new(CompressorConfig::new(scheme));

            let start = Instant::now();
            let envelope = compressor.compress(&data)?;
            let compress_time = start.elapsed();

            let start = Instant::now();
            let decoded = compressor.decompress(&envelope)?;
            let decompress_time = start.elapsed();

            if decoded != data {
                return Err(format!("{} round trip mismatch on {}", scheme, name).into());
            }

            let info = inspect(&envelope)?;
            println!(
                "{:<10} {:<7} {:>9.2} {:>12.1} {:>12.1}  {}",
                name,
                scheme,
                info.bits_per_int(),
                mints_per_sec(size, compress_time),
                mints_per_sec(size, decompress_time),
                info.format.describe()
            );
        }
    }

    Ok(())
}
