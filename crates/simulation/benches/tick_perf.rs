//! Benchmark: measure tick() cost under various grid conditions.
//!
//! The canvas runs at one tick per animation frame, so a tick on the
//! default 34×34 lattice must stay far under the 16.7 ms frame budget;
//! the larger grids probe how the scan scales.
//!
//! Falling/settling benchmarks use `iter_batched` to re-seed the grid
//! before every iteration so we measure *active* simulation, not a
//! settled grid.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use mondrian_sand::grain::{Grain, Palette};
use mondrian_sand::{Grid, Region, Universe};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Empty grid — baseline cost of scanning cells with nothing to do.
fn bench_tick_empty(c: &mut Criterion) {
    c.bench_function("tick_empty_256x256", |b| {
        let mut grid = Grid::new(256, 256);
        let mut rng = SmallRng::seed_from_u64(0);
        b.iter(|| {
            grid.tick(&mut rng);
            black_box(&grid);
        });
    });
}

/// Grains falling — re-seed each iteration so sand is always moving.
fn bench_tick_grains_falling(c: &mut Criterion) {
    c.bench_function("tick_grains_falling_256x256", |b| {
        b.iter_batched(
            || {
                let mut grid = Grid::new(256, 256);
                // Fill the top 20% with mixed ids — all actively falling.
                for y in 0..51 {
                    for x in 0..256 {
                        grid.set(x, y, Grain((x * 7 + y * 13) as u8 % 5 + 1));
                    }
                }
                (grid, SmallRng::seed_from_u64(1))
            },
            |(mut grid, mut rng)| {
                grid.tick(&mut rng);
                black_box(&grid);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Clusters mid-collapse — dense same-id contacts keep the
/// annihilation branch hot.
fn bench_tick_cluster_collapse(c: &mut Criterion) {
    c.bench_function("tick_cluster_collapse_256x256", |b| {
        let palette = Palette::random(5, &mut SmallRng::seed_from_u64(2)).unwrap();
        b.iter_batched(
            || {
                let mut grid = Grid::new(256, 256);
                let mut rng = SmallRng::seed_from_u64(3);
                for i in 0..64 {
                    let region = Region {
                        col: (i % 8) * 32 + 4,
                        row: (i / 8) * 32 + 4,
                        w: 3,
                        h: 3,
                    };
                    grid.spawn_cluster(region, &palette, &mut rng);
                }
                (grid, rng)
            },
            |(mut grid, mut rng)| {
                grid.tick(&mut rng);
                black_box(&grid);
            },
            BatchSize::SmallInput,
        );
    });
}

/// The default Mondrian lattice driven through the wasm surface — what
/// the browser actually calls each frame.
fn bench_universe_tick(c: &mut Criterion) {
    c.bench_function("universe_tick_34x34", |b| {
        b.iter_batched(
            || {
                let mut universe = Universe::try_new(34, 34, 5, 8, 4).unwrap();
                // Consume every block so the grid is full of live sand.
                for (col, row) in universe
                    .blocks_flat()
                    .chunks(7)
                    .map(|b| (b[0], b[1]))
                    .collect::<Vec<_>>()
                {
                    universe.pointer_down(col, row);
                }
                universe
            },
            |mut universe| {
                universe.tick();
                black_box(&universe);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_tick_empty,
    bench_tick_grains_falling,
    bench_tick_cluster_collapse,
    bench_universe_tick,
);
criterion_main!(benches);
