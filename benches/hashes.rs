use cryptocore::hash::blake2::blake2b_512;
use cryptocore::hash::{ghash, kangaroo_twelve, sha3_256, sha256, siphash_64};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 3] = [64, 1024, 16 * 1024];

pub fn bench_hashes(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashes");

    for size in SIZES {
        let data = vec![0xa5u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("sha256", size), &data, |b, data| {
            b.iter(|| sha256(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("sha3-256", size), &data, |b, data| {
            b.iter(|| sha3_256(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("blake2b-512", size), &data, |b, data| {
            b.iter(|| blake2b_512(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("k12", size), &data, |b, data| {
            b.iter(|| kangaroo_twelve(black_box(data), 32, b""))
        });
        group.bench_with_input(BenchmarkId::new("ghash", size), &data, |b, data| {
            b.iter(|| ghash(black_box(&[0x42; 16]), b"", black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("siphash-2-4", size), &data, |b, data| {
            b.iter(|| siphash_64(black_box(&[7; 16]), black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hashes);
criterion_main!(benches);
