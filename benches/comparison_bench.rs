use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{Algorithm, Coordinate, GridModel, SearchEngine};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N_SCENARIOS: usize = 32;

fn random_setup(size: usize, density: f64, seed: u64) -> (GridModel, Vec<(Coordinate, Coordinate)>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = GridModel::new(size);
    for c in grid.cells().collect::<Vec<_>>() {
        if rng.gen_bool(density) {
            grid.add_obstacle(c).unwrap();
        }
    }
    let mut random_point = || {
        Coordinate::new(
            rng.gen_range(0..size as i32),
            rng.gen_range(0..size as i32),
        )
    };
    let scenarios = (0..N_SCENARIOS)
        .map(|_| (random_point(), random_point()))
        .collect::<Vec<_>>();
    for (start, goal) in &scenarios {
        grid.remove_obstacle(*start);
        grid.remove_obstacle(*goal);
    }
    (grid, scenarios)
}

fn random_grid_bench(c: &mut Criterion) {
    for (size, density) in [(20, 0.25), (64, 0.3)] {
        let (grid, scenarios) = random_setup(size, density, 0);
        let mut engine = SearchEngine::new();
        for algorithm in Algorithm::ALL {
            c.bench_function(format!("{size}x{size} random, {algorithm}").as_str(), |b| {
                b.iter(|| {
                    for (start, goal) in &scenarios {
                        black_box(engine.search(algorithm, &grid, *start, *goal).unwrap());
                    }
                })
            });
        }
    }
}

fn unreachable_bench(c: &mut Criterion) {
    // The goal is walled off, so every search exhausts the start's component.
    let size = 64;
    let mut grid = GridModel::new(size);
    for y in 0..size as i32 {
        grid.add_obstacle(Coordinate::new(size as i32 - 2, y)).unwrap();
    }
    let start = Coordinate::new(0, 0);
    let goal = Coordinate::new(size as i32 - 1, 0);
    let mut engine = SearchEngine::new();
    for algorithm in Algorithm::ALL {
        c.bench_function(format!("{size}x{size} unreachable, {algorithm}").as_str(), |b| {
            b.iter(|| black_box(engine.search(algorithm, &grid, start, goal).unwrap()))
        });
    }
}

criterion_group!(benches, random_grid_bench, unreachable_bench);
criterion_main!(benches);
