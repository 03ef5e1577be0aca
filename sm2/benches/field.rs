//! sm2 `FieldElement` benchmarks

use criterion::{criterion_group, criterion_main};

fn elements() -> (primefield::FieldElement, primefield::FieldElement) {
    let modulus = sm2::curve().modulus().clone();
    let (x, y) = sm2::GENERATOR;
    (
        modulus.element_from_bytes(&x).unwrap(),
        modulus.element_from_bytes(&y).unwrap(),
    )
}

primefield::bench_field!(bench_field, "FieldElement", elements().0, elements().1);
criterion_group!(benches, bench_field);
criterion_main!(benches);
