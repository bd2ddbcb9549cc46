//! Performance benchmarks for the MSB-first bit stream
//!
//! This benchmark suite evaluates:
//! - Codeword write throughput at the widths the codec uses (9-16 bits)
//! - Codeword read throughput for the same streams

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxilzw_core::{MsbBitReader, MsbBitWriter};
use std::hint::black_box;
use std::io::Cursor;

/// Number of codewords written per iteration
const CODEWORDS: usize = 64 * 1024;

/// Generate reproducible codewords that fit in `width` bits
fn codewords(width: u8) -> Vec<u32> {
    let mut seed: u64 = 0x123456789ABCDEF0;
    let mask = (1u64 << width) - 1;
    (0..CODEWORDS)
        .map(|_| {
            // Linear congruential generator
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((seed >> 32) & mask) as u32
        })
        .collect()
}

fn pack(values: &[u32], width: u8) -> Vec<u8> {
    let mut output = Vec::with_capacity(values.len() * 2);
    {
        let mut writer = MsbBitWriter::new(&mut output);
        for &value in values {
            writer.write_bits(value, width).unwrap();
        }
        writer.close().unwrap();
    }
    output
}

/// Benchmark writing codewords at each width
fn bench_write_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("msb_write");

    for width in [9u8, 12, 16] {
        let values = codewords(width);
        group.throughput(Throughput::Elements(values.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &values, |b, values| {
            b.iter(|| pack(black_box(values), width));
        });
    }

    group.finish();
}

/// Benchmark reading codewords at each width
fn bench_read_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("msb_read");

    for width in [9u8, 12, 16] {
        let packed = pack(&codewords(width), width);
        group.throughput(Throughput::Elements(CODEWORDS as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &packed, |b, packed| {
            b.iter(|| {
                let mut reader = MsbBitReader::new(Cursor::new(black_box(packed)));
                let mut sum = 0u64;
                for _ in 0..CODEWORDS {
                    sum += reader.read_bits(width).unwrap() as u64;
                }
                sum
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_write_widths, bench_read_widths);
criterion_main!(benches);
