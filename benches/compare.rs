use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mathcheck::asserts::{check_matrix, check_vector4, ToleranceExceeded};
use mathcheck::common::structs::{candidate, reference};

fn vector4(c: &mut Criterion) {
    let r = reference::Vector4::new(1., 2., 3., 4.);
    let v = candidate::Vector4::new(1., 2., 3., 4.5);
    c.bench_function("vector4", |b| {
        b.iter(|| {
            let mut failures = Vec::<ToleranceExceeded>::new();
            check_vector4(black_box(&r), black_box(&v), &mut failures);
            failures
        })
    });
}

fn matrix(c: &mut Criterion) {
    let r = reference::Matrix::identity();
    let m = candidate::Matrix::identity();
    c.bench_function("matrix", |b| {
        b.iter(|| {
            let mut failures = Vec::<ToleranceExceeded>::new();
            check_matrix(black_box(&r), black_box(&m), &mut failures);
            failures
        })
    });
}

criterion_group!(benches, vector4, matrix);
criterion_main!(benches);
