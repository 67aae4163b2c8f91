//! Example demonstrating background pooling of generated puzzles.
//!
//! Primes the pool at every difficulty, waits for the stock to fill, then
//! serves one puzzle per difficulty. Run with logging to watch the
//! background refills:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example pool_demo
//! ```

use std::{thread, time::Duration};

use sudocarve_generator::Difficulty;
use sudocarve_pool::PuzzlePool;

fn main() {
    env_logger::init();

    let pool = PuzzlePool::new();
    for difficulty in Difficulty::ALL {
        pool.prime(difficulty);
    }

    while pool.in_flight() > 0 {
        pool.pump();
        thread::sleep(Duration::from_millis(50));
    }

    for difficulty in Difficulty::ALL {
        println!(
            "{difficulty}: {} shelved",
            pool.shelved(difficulty)
        );
        if let Some(puzzle) = pool.take(difficulty) {
            println!(
                "  served a puzzle with {} holes (seed {})",
                puzzle.problem.hole_count(),
                puzzle.seed
            );
        }
    }
}
