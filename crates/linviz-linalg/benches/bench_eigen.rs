use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linviz_linalg::{discrete_trajectory, EigenDecomposition, Matrix2, Vector2};

fn bench_eigen(c: &mut Criterion) {
    let mut group = c.benchmark_group("eigen2");

    let real = Matrix2::new(1.0, 2.0, 3.0, 4.0);
    let complex = Matrix2::new(0.9, -0.6, 0.5, 1.1);

    group.bench_function(BenchmarkId::new("from_matrix", "real"), |b| {
        b.iter(|| black_box(EigenDecomposition::from_matrix(black_box(&real))))
    });

    group.bench_function(BenchmarkId::new("from_matrix", "complex"), |b| {
        b.iter(|| black_box(EigenDecomposition::from_matrix(black_box(&complex))))
    });

    if let Ok(EigenDecomposition::Complex(pair)) = EigenDecomposition::from_matrix(&complex) {
        group.bench_function(BenchmarkId::new("discrete_trajectory", ""), |b| {
            b.iter(|| black_box(discrete_trajectory(&pair, Vector2::new(1.0, 0.0))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_eigen);
criterion_main!(benches);
