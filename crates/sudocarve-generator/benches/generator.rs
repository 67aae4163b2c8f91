//! Benchmarks for Sudoku puzzle generation.
//!
//! Measures complete generation (grid construction, hole carving, and
//! uniqueness verification) at medium and hard difficulty. Fixed seed
//! phrases keep the runs reproducible while covering several cases.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sudocarve_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

const SEED_PHRASES: [&str; 3] = ["bench seed 0", "bench seed 1", "bench seed 2"];

fn bench_difficulty(c: &mut Criterion, difficulty: Difficulty) {
    let generator = PuzzleGenerator::new();
    for phrase in SEED_PHRASES {
        let seed = PuzzleSeed::from_phrase(phrase);
        c.bench_with_input(
            BenchmarkId::new(format!("generate_{difficulty}"), phrase),
            &seed,
            |b, seed| {
                b.iter(|| {
                    generator
                        .generate_with_seed(hint::black_box(*seed), difficulty)
                        .unwrap()
                });
            },
        );
    }
}

fn bench_generate_medium(c: &mut Criterion) {
    bench_difficulty(c, Difficulty::Medium);
}

fn bench_generate_hard(c: &mut Criterion) {
    bench_difficulty(c, Difficulty::Hard);
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(12));
    targets = bench_generate_medium, bench_generate_hard
);
criterion_main!(benches);
