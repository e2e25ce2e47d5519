//! Performance benchmarks for oxipack-bitpack
//!
//! This benchmark suite evaluates:
//! - Compression/decompression throughput (integers per second)
//! - Binary packing vs XOR packing on uniform and clustered data
//! - Packed size for each data pattern

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxipack_bitpack::{BinaryPacking, XorBinaryPacking};
use oxipack_core::IntegerCodec;
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<i32>;

/// Generate test data patterns for benchmarking
mod test_data {
    fn lcg(seed: &mut u64) -> u64 {
        *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        *seed >> 32
    }

    /// Uniform small values (delta-coded posting list)
    pub fn uniform(size: usize) -> Vec<i32> {
        let mut seed: u64 = 0x123456789ABCDEF0;
        (0..size).map(|_| (lcg(&mut seed) % 1024) as i32).collect()
    }

    /// Clustered values: large base, tiny local variation
    pub fn clustered(size: usize) -> Vec<i32> {
        let mut seed: u64 = 0x0FEDCBA987654321;
        (0..size)
            .map(|i| 0x4000_0000 + ((i / 512) as i32) * 65536 + (lcg(&mut seed) % 16) as i32)
            .collect()
    }

    /// Random full-range values (worst case)
    pub fn random(size: usize) -> Vec<i32> {
        let mut seed: u64 = 0xDEADBEEFCAFEBABE;
        (0..size).map(|_| lcg(&mut seed) as i32).collect()
    }
}

fn codecs() -> [(&'static str, Box<dyn IntegerCodec>); 2] {
    [
        ("binary", Box::new(BinaryPacking::new())),
        ("xor", Box::new(XorBinaryPacking::new())),
    ]
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitpack_compress");
    let size = 1 << 16;

    let patterns: [(&str, PatternGenerator); 3] = [
        ("uniform", test_data::uniform as PatternGenerator),
        ("clustered", test_data::clustered as PatternGenerator),
        ("random", test_data::random as PatternGenerator),
    ];

    for (pattern_name, generator) in patterns {
        let data = generator(size);
        group.throughput(Throughput::Elements(size as u64));

        for (codec_name, codec) in codecs() {
            let mut out = vec![0u32; codec.max_compressed_words(size)];
            let id = format!("{}/{}", codec_name, pattern_name);
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| codec.compress(black_box(data), &mut out).unwrap())
            });
        }
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitpack_decompress");
    let size = 1 << 16;

    for (pattern_name, data) in [
        ("uniform", test_data::uniform(size)),
        ("clustered", test_data::clustered(size)),
    ] {
        group.throughput(Throughput::Elements(size as u64));

        for (codec_name, codec) in codecs() {
            let mut packed = vec![0u32; codec.max_compressed_words(size)];
            let (_, written) = codec.compress(&data, &mut packed).unwrap();
            packed.truncate(written);

            println!(
                "{}/{}: {} ints -> {} words ({:.2} bits/int)",
                codec_name,
                pattern_name,
                size,
                written,
                written as f64 * 32.0 / size as f64
            );

            let mut out = vec![0i32; size];
            let id = format!("{}/{}", codec_name, pattern_name);
            group.bench_with_input(BenchmarkId::from_parameter(&id), &packed, |b, packed| {
                b.iter(|| codec.decompress(black_box(packed), &mut out).unwrap())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
