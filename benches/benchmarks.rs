//! Benchmarks for primefield operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;

use primefield::{is_prime, FieldElement};

/// 2^255 - 19
fn p25519() -> BigInt {
    (BigInt::from(1u32) << 255u32) - BigInt::from(19u32)
}

fn bench_small_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF(998244353)");

    let p = 998_244_353i64;
    let a = FieldElement::new(123_456_789, p).unwrap();
    let b = FieldElement::new(987_654_321, p).unwrap();

    group.bench_function("add", |bencher| {
        bencher.iter(|| black_box(&a).try_add(black_box(&b)))
    });

    group.bench_function("sub", |bencher| {
        bencher.iter(|| black_box(&a).try_sub(black_box(&b)))
    });

    group.bench_function("mul", |bencher| {
        bencher.iter(|| black_box(&a).try_mul(black_box(&b)))
    });

    group.bench_function("div", |bencher| {
        bencher.iter(|| black_box(&a).try_div(black_box(&b)))
    });

    group.bench_function("pow_small", |bencher| {
        bencher.iter(|| black_box(&a).pow(1000))
    });

    group.bench_function("pow_negative", |bencher| {
        bencher.iter(|| black_box(&a).pow(-1000))
    });

    group.finish();
}

fn bench_large_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF(2^255 - 19)");

    let p = p25519();
    let a = FieldElement::new(&p - BigInt::from(12345u32), p.clone()).unwrap();
    let b = FieldElement::new(&p / BigInt::from(3u32), p.clone()).unwrap();

    group.bench_function("add", |bencher| {
        bencher.iter(|| black_box(&a).try_add(black_box(&b)))
    });

    group.bench_function("mul", |bencher| {
        bencher.iter(|| black_box(&a).try_mul(black_box(&b)))
    });

    group.bench_function("inverse", |bencher| {
        bencher.iter(|| black_box(&a).inverse())
    });

    group.bench_function("div", |bencher| {
        bencher.iter(|| black_box(&a).try_div(black_box(&b)))
    });

    group.bench_function("pow_full", |bencher| {
        bencher.iter(|| black_box(&a).pow(&p - BigInt::from(3u32)))
    });

    group.finish();
}

fn bench_primality(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime");

    for bits in [61u32, 127, 255] {
        let n = match bits {
            61 => (BigInt::from(1u32) << 61u32) - BigInt::from(1u32),
            127 => (BigInt::from(1u32) << 127u32) - BigInt::from(1u32),
            _ => p25519(),
        };
        let n = n.to_biguint().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(bits), &n, |bencher, n| {
            bencher.iter(|| is_prime(black_box(n)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_small_field, bench_large_field, bench_primality);
criterion_main!(benches);
