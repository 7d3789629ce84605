use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vecwise::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn det_matrix(rows: usize, cols: usize) -> Matrix<f64> {
    Matrix::from_fn(rows, cols, |r, c| ((r * 17 + c * 31 + 3) % 1000) as f64 / 1000.0)
}

// ---------------------------------------------------------------------------
// Partial sums
// ---------------------------------------------------------------------------

fn bench_sums(c: &mut Criterion) {
    let mut group = c.benchmark_group("partial_sum_f64");
    for n in [64usize, 256, 1024] {
        let a = det_matrix(n, n);
        group.bench_with_input(BenchmarkId::new("colwise", n), &a, |b, a| {
            b.iter(|| black_box(a.colwise().sum().eval()))
        });
        group.bench_with_input(BenchmarkId::new("rowwise", n), &a, |b, a| {
            b.iter(|| black_box(a.rowwise().sum().eval()))
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Norm strategies
// ---------------------------------------------------------------------------

fn bench_norms(c: &mut Criterion) {
    let a = det_matrix(512, 512);
    let mut group = c.benchmark_group("colwise_norm_512");
    group.bench_function("norm", |b| b.iter(|| black_box(a.colwise().norm().eval())));
    group.bench_function("stable_norm", |b| {
        b.iter(|| black_box(a.colwise().stable_norm().eval()))
    });
    group.bench_function("blue_norm", |b| {
        b.iter(|| black_box(a.colwise().blue_norm().eval()))
    });
    group.bench_function("hypot_norm", |b| {
        b.iter(|| black_box(a.colwise().hypot_norm().eval()))
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Broadcast updates
// ---------------------------------------------------------------------------

fn bench_broadcast(c: &mut Criterion) {
    let base = det_matrix(512, 512);
    let v = Matrix::row_vector(&vec![0.5; 512]);
    c.bench_function("colwise_add_assign_512", |b| {
        b.iter_batched(
            || base.clone(),
            |mut a| {
                a.colwise_mut().add_assign(&v).unwrap();
                black_box(a)
            },
            criterion::BatchSize::LargeInput,
        )
    });
    c.bench_function("colwise_lazy_add_eval_512", |b| {
        b.iter(|| black_box(base.colwise().add(&v).unwrap().eval()))
    });
}

criterion_group!(benches, bench_sums, bench_norms, bench_broadcast);
criterion_main!(benches);
