use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use dp_catalog::{
    engine::{exhaustive, memoized, tabulated},
    problems::{
        floor_tiling::FloorTiling,
        knapsack::{Item, Knapsack},
        matrix_chain::MatrixChain,
    },
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_items(rng: &mut StdRng, n: usize) -> Vec<Item> {
    (0..n)
        .map(|_| Item::new(rng.gen_range(1..20), rng.gen_range(0..100)))
        .collect()
}

fn bench_tiling(c: &mut Criterion) {
    let mut group = c.benchmark_group("floor_tiling");
    let problem = FloorTiling::new(24).unwrap();
    group.bench_function("exhaustive_24", |b| b.iter(|| black_box(exhaustive(&problem))));
    group.bench_function("memoized_24", |b| b.iter(|| black_box(memoized(&problem))));
    group.bench_function("tabulated_24", |b| b.iter(|| black_box(tabulated(&problem))));
    group.bench_function("compact_24", |b| b.iter(|| black_box(problem.compact())));
    group.finish();
}

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack");
    for &n in &[20usize, 100] {
        let capacity = 5 * n;
        group.bench_function(format!("memoized_{n}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    Knapsack::new(&random_items(&mut rng, n), capacity).unwrap()
                },
                |problem| black_box(memoized(&problem)),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("tabulated_{n}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    Knapsack::new(&random_items(&mut rng, n), capacity).unwrap()
                },
                |problem| black_box(tabulated(&problem)),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("compact_{n}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    Knapsack::new(&random_items(&mut rng, n), capacity).unwrap()
                },
                |problem| black_box(problem.compact()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_matrix_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_chain");
    let mut rng = StdRng::seed_from_u64(7);
    let dims: Vec<usize> = (0..41).map(|_| rng.gen_range(1..100)).collect();
    let problem = MatrixChain::from_dims(&dims).unwrap();
    group.bench_function("memoized_40", |b| b.iter(|| black_box(memoized(&problem))));
    group.bench_function("tabulated_40", |b| b.iter(|| black_box(tabulated(&problem))));
    group.bench_function("splits_40", |b| b.iter(|| black_box(problem.splits())));
    group.finish();
}

criterion_group!(benches, bench_tiling, bench_knapsack, bench_matrix_chain);
criterion_main!(benches);
