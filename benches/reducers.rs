use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use streamfold::{MeanReducer, MovingAverageReducer, Reducer, Sample};

fn create_samples(count: usize) -> Vec<Sample<f64>> {
    (0..count)
        .map(|i| Sample::new(i as i64 * 10, 100.0 + (i as f64 * 0.5)))
        .collect()
}

fn bench_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean_ingest");

    for size in [100, 1000, 10000].iter() {
        let samples = create_samples(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut mean = MeanReducer::new();
                for s in &samples {
                    mean.ingest(s);
                }
                black_box(mean.emit().unwrap())
            })
        });
    }

    group.finish();
}

fn bench_moving_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average_ingest");
    let samples = create_samples(10000);

    for window in [8, 64, 512].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(window), window, |b, &w| {
            b.iter(|| {
                let mut ma = MovingAverageReducer::new(w).unwrap();
                for s in &samples {
                    ma.ingest(s);
                }
                black_box(ma.emit().unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mean, bench_moving_average);
criterion_main!(benches);
