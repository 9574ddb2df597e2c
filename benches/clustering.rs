use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use thicket::Dbscan;

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");

    // Generate synthetic data
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1000;
    let d = 8;

    let points: Vec<Vec<f32>> = (0..n)
        .map(|_| (0..d).map(|_| rng.random::<f32>()).collect())
        .collect();

    let engine = Dbscan::new(points, 0.25, 5).unwrap();

    group.bench_function("label_all_n1000_d8", |b| {
        b.iter(|| black_box(&engine).label_all())
    });

    group.finish();
}

criterion_group!(benches, bench_dbscan);
criterion_main!(benches);
