//! Benchmarks for clue numbering and cursor scans.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench navigation
//! ```

use std::hint;

use bulmaca_core::{Axis, ClueNumbering, Grid, Position};
use bulmaca_game::{Answers, Cursor, advance_within_word, retreat_within_word};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

/// A `size`×`size` grid with black cells on a diagonal pattern.
fn patterned_grid(size: usize) -> Grid {
    let rows: Vec<String> = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| if (row * 3 + col) % 5 == 4 { '-' } else { 'A' })
                .collect()
        })
        .collect();
    Grid::from_rows(size, rows).unwrap()
}

/// Answers with every white cell filled except the last one.
fn nearly_full(grid: &Grid) -> Answers {
    let mut answers = Answers::new(grid.size());
    let whites: Vec<Position> = grid.white_cells().map(|(pos, _)| pos).collect();
    for &pos in &whites[..whites.len() - 1] {
        answers.set(pos, 'A');
    }
    answers
}

fn bench_numbering(c: &mut Criterion) {
    for size in [5, 15, 25] {
        let grid = patterned_grid(size);
        c.bench_with_input(BenchmarkId::new("numbering", size), &grid, |b, grid| {
            b.iter(|| hint::black_box(ClueNumbering::compute(grid)));
        });
    }
}

fn bench_advance(c: &mut Criterion) {
    for size in [5, 15, 25] {
        let grid = patterned_grid(size);
        let answers = nearly_full(&grid);
        let start = Cursor::start(&grid).unwrap();
        for axis in Axis::ALL {
            c.bench_with_input(
                BenchmarkId::new(format!("advance_{axis}"), size),
                &(&grid, &answers),
                |b, (grid, answers)| {
                    b.iter(|| {
                        let cursor = Cursor { axis, ..start };
                        hint::black_box(advance_within_word(cursor, grid, answers, axis))
                    });
                },
            );
        }
    }
}

fn bench_retreat(c: &mut Criterion) {
    for size in [5, 15, 25] {
        let grid = patterned_grid(size);
        let last = grid.white_cells().last().map(|(pos, _)| pos).unwrap();
        for axis in Axis::ALL {
            c.bench_with_input(
                BenchmarkId::new(format!("retreat_{axis}"), size),
                &grid,
                |b, grid| {
                    b.iter(|| {
                        let cursor = Cursor::new(last, axis);
                        hint::black_box(retreat_within_word(cursor, grid, axis))
                    });
                },
            );
        }
    }
}

criterion_group!(benches, bench_numbering, bench_advance, bench_retreat);
criterion_main!(benches);
