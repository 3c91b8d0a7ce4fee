//! Performance benchmarks for DynamicArray growth and element-wise operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vecbits::random::{fill_random, seeded_rng};
use vecbits::{apply, apply_unary, BitwiseOp, DynamicArray, UnaryOp};

const SEED: u64 = 42;

fn random_array(len: usize) -> DynamicArray<i32> {
    let mut rng = seeded_rng(SEED);
    let mut arr = DynamicArray::new();
    fill_random(&mut arr, len, 0, 100, &mut rng).unwrap();
    arr
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    // Every push reallocates, so this grows quadratically
    for size in [100, 1000, 5000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut arr = DynamicArray::new();
                for i in 0..size {
                    arr.push(black_box(i as i32));
                }
                arr
            });
        });
    }
    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let arr = random_array(10000);

    c.bench_function("clone_10000", |b| {
        b.iter(|| black_box(&arr).clone());
    });
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    for size in [1000, 10000].iter() {
        let a = random_array(*size);
        let b = random_array(*size);

        for op in BitwiseOp::ALL {
            group.bench_with_input(BenchmarkId::new(op.name(), size), size, |bench, _| {
                bench.iter(|| apply(black_box(&a), black_box(&b), op).unwrap());
            });
        }
        group.bench_with_input(BenchmarkId::new("NOT", size), size, |bench, _| {
            bench.iter(|| apply_unary(black_box(&a), UnaryOp::Not));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push, bench_clone, bench_apply);

criterion_main!(benches);
