//! sm9 pairing benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use num_bigint::BigInt;
use sm9::{Fp12, Pairing};
use std::hint::black_box;

fn base_elements() -> (sm9::primefield::FieldElement, sm9::primefield::FieldElement) {
    let modulus = sm9::Sm9Params::standard().modulus().clone();
    let (x, y) = sm9::P1.split_at(sm9::FIELD_BYTES);
    (
        modulus.element_from_bytes(x).unwrap(),
        modulus.element_from_bytes(y).unwrap(),
    )
}

sm9::primefield::bench_field!(bench_field, "FieldElement", base_elements().0, base_elements().1);

fn bench_tower(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fp12");
    let engine = Pairing::standard();
    let a = engine.miller_loop(&sm9::p1(), &sm9::p2());
    let b = a.square();

    group.bench_function("mul", |bench| bench.iter(|| black_box(&a).multiply(black_box(&b))));
    group.bench_function("square", |bench| bench.iter(|| black_box(&a).square()));
    group.bench_function("invert", |bench| bench.iter(|| black_box(&a).invert()));
    group.bench_function("frobenius", |bench| bench.iter(|| black_box(&a).frobenius()));
    group.finish();
}

fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairing");
    group.sample_size(10);

    let engine = Pairing::standard();
    let (p1, p2) = (sm9::p1(), sm9::p2());
    let f: Fp12 = engine.miller_loop(&p1, &p2);

    group.bench_function("miller loop", |b| {
        b.iter(|| engine.miller_loop(black_box(&p1), black_box(&p2)))
    });
    group.bench_function("final exponentiation", |b| {
        b.iter(|| engine.final_exponentiation(black_box(&f)).unwrap())
    });
    group.bench_function("pairing", |b| {
        b.iter(|| engine.pairing(black_box(&p1), black_box(&p2)))
    });

    let k = BigInt::from(0x1234_5678_9abc_def0u64);
    group.bench_function("G2 scalar multiplication", |b| {
        b.iter(|| black_box(&p2).multiply(black_box(&k)))
    });
    group.finish();
}

criterion_group!(benches, bench_field, bench_tower, bench_pairing);
criterion_main!(benches);
