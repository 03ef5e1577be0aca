/// Write a series of `criterion`-based benchmarks for a [`FieldElement`](crate::FieldElement).
///
/// The calling crate needs `criterion` as a dev-dependency.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $fe_a:expr, $fe_b:expr } => {
        fn bench_add<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
            x: &$crate::FieldElement,
            y: &$crate::FieldElement,
        ) {
            group.bench_function("add", |b| b.iter(|| x + y));
        }

        fn bench_sub<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
            x: &$crate::FieldElement,
            y: &$crate::FieldElement,
        ) {
            group.bench_function("sub", |b| b.iter(|| x - y));
        }

        fn bench_mul<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
            x: &$crate::FieldElement,
            y: &$crate::FieldElement,
        ) {
            group.bench_function("mul", |b| b.iter(|| x * y));
        }

        fn bench_square<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
            x: &$crate::FieldElement,
        ) {
            group.bench_function("square", |b| b.iter(|| x.square()));
        }

        fn bench_invert<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
            x: &$crate::FieldElement,
        ) {
            group.bench_function("invert", |b| b.iter(|| x.invert()));
        }

        fn bench_sqrt<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
            x: &$crate::FieldElement,
        ) {
            group.bench_function("sqrt", |b| b.iter(|| x.sqrt()));
        }

        fn $name(c: &mut ::criterion::Criterion) {
            let x: $crate::FieldElement = ::core::hint::black_box($fe_a);
            let y: $crate::FieldElement = ::core::hint::black_box($fe_b);

            let mut group = c.benchmark_group($desc);
            bench_add(&mut group, &x, &y);
            bench_sub(&mut group, &x, &y);
            bench_mul(&mut group, &x, &y);
            bench_square(&mut group, &x);
            bench_invert(&mut group, &x);
            bench_sqrt(&mut group, &x);
            group.finish();
        }
    };
}
