use afinidad::dataset::RatingsDataset;
use afinidad::pipeline::AffinityAnalysis;
use afinidad::pivot::RatingMatrix;
use afinidad::similarity::correlate_with;
use afinidad::synthetic::SyntheticRatings;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_dataset(n_users: usize) -> RatingsDataset {
    let (interactions, titles) = SyntheticRatings::new(n_users, 50)
        .with_density(0.2)
        .with_seed(42)
        .generate();
    RatingsDataset::from_records(interactions, &titles)
}

fn bench_pivot(c: &mut Criterion) {
    let mut group = c.benchmark_group("affinity_pivot");

    for size in [100, 1_000, 10_000].iter() {
        let data = generate_dataset(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| RatingMatrix::from_records(black_box(data.records())));
        });
    }

    group.finish();
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("affinity_fit");

    for size in [100, 1_000, 10_000].iter() {
        let data = generate_dataset(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut analysis = AffinityAnalysis::new().with_min_ratings(10);
                analysis.fit(black_box(&data)).expect("should fit");
                analysis
            });
        });
    }

    group.finish();
}

fn bench_correlate(c: &mut Criterion) {
    let mut group = c.benchmark_group("affinity_correlate");
    group.sample_size(50); // Reduce samples for large datasets

    for size in [100, 1_000, 10_000].iter() {
        // Pre-build the matrix so only correlation is timed
        let data = generate_dataset(*size);
        let matrix = RatingMatrix::from_records(data.records());
        let reference = matrix.titles()[0].clone();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                correlate_with(black_box(&matrix), black_box(reference.as_str()))
                    .expect("should correlate")
            });
        });
    }

    group.finish();
}

fn bench_similar_to_latency(c: &mut Criterion) {
    // Full query path on the largest dataset
    let data = generate_dataset(10_000);
    let mut analysis = AffinityAnalysis::new().with_min_ratings(50);
    analysis.fit(&data).expect("should fit");
    let reference = analysis.matrix().expect("fitted").titles()[0].clone();

    c.bench_function("similar_to_10k_users", |b| {
        b.iter(|| {
            analysis
                .similar_to(black_box(reference.as_str()))
                .expect("should rank")
        });
    });
}

criterion_group!(
    benches,
    bench_pivot,
    bench_fit,
    bench_correlate,
    bench_similar_to_latency
);
criterion_main!(benches);
