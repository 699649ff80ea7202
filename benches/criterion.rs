#[macro_use]
extern crate criterion;

use criterion::Criterion;
use sudoku_core::Grid;

static PUZZLES: &[&str] = &[
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79",
    "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...",
    "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
];

fn read_grids() -> Vec<Grid> {
    PUZZLES
        .iter()
        .map(|line| Grid::from_str_line(line).unwrap_or_else(|err| panic!("{:?}", err)))
        .collect()
}

fn _1_solve_puzzles(c: &mut Criterion) {
    let grids = read_grids();
    let mut iter = grids.iter().cycle().cloned();
    c.bench_function("_1_solve_puzzles", |b| {
        b.iter(|| iter.next().unwrap().solve())
    });
}

fn _2_solve_empty_grid(c: &mut Criterion) {
    c.bench_function("_2_solve_empty_grid", |b| b.iter(|| Grid::empty().solve()));
}

fn _3_consistency_check(c: &mut Criterion) {
    let grids = read_grids();
    let mut iter = grids.iter().cycle().cloned();
    c.bench_function("_3_consistency_check", |b| {
        b.iter(|| iter.next().unwrap().is_consistent())
    });
}

criterion_group!(benches, _1_solve_puzzles, _2_solve_empty_grid, _3_consistency_check);
criterion_main!(benches);
