//! Micro-benchmarks for propagation and the full search.
//!
//! This benchmark suite measures naked-single propagation and end-to-end
//! solves on representative puzzles.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use kaidoku_core::Grid;
use kaidoku_solver::{BacktrackSolver, propagate};

fn backtracking_puzzle() -> Grid {
    "
        ___ ___ _54
        __7 2__ __9
        _3_ 48_ 2__
        _6_ 8__ 49_
        ___ ___ ___
        _75 __4 _8_
        __8 _61 _2_
        1__ __3 5__
        59_ ___ ___
    "
    .parse()
    .unwrap()
}

fn singles_only_puzzle() -> Grid {
    "
        ___ 37_ 65_
        4_7 2__ ___
        _3_ ___ ___
        3__ 8__ __2
        9__ ___ ___
        ___ __4 _81
        __8 _61 9__
        _2_ _43 ___
        5__ 7__ ___
    "
    .parse()
    .unwrap()
}

fn bench_propagate(c: &mut Criterion) {
    let puzzles = [
        ("backtracking", backtracking_puzzle()),
        ("singles_only", singles_only_puzzle()),
        ("empty", Grid::new()),
    ];

    for (param, grid) in puzzles {
        c.bench_with_input(BenchmarkId::new("propagate", param), &grid, |b, grid| {
            b.iter_batched_ref(
                || hint::black_box(grid.clone()),
                |grid| {
                    let placed = propagate(grid);
                    hint::black_box(placed)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_solve(c: &mut Criterion) {
    let puzzles = [
        ("backtracking", backtracking_puzzle()),
        ("singles_only", singles_only_puzzle()),
        ("empty", Grid::new()),
    ];

    let solver = BacktrackSolver::new();

    for (param, grid) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", param), &grid, |b, grid| {
            b.iter(|| {
                let solved = solver.solve(hint::black_box(grid)).unwrap();
                hint::black_box(solved)
            });
        });
    }
}

criterion_group!(benches, bench_propagate, bench_solve,);
criterion_main!(benches);
