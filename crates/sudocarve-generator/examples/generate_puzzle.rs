//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` and generate a puzzle at a chosen difficulty
//! - Reproduce a puzzle from a seed or a seed phrase
//! - Display the problem and its solution
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a specific puzzle from its printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Or derive the seed from a memorable phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "daily 2026-08-24"
//! ```

use std::process;

use clap::Parser;
use sudocarve_core::Grid;
use sudocarve_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level (easy, medium, hard). Unknown names mean medium.
    #[arg(short, long, value_name = "LEVEL", default_value = "medium")]
    difficulty: String,

    /// Reproduce a puzzle from a 64-character hex seed.
    #[arg(long, value_name = "SEED", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Derive the seed from a phrase instead of drawing one at random.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,
}

fn main() {
    let args = Args::parse();
    let difficulty = Difficulty::from_name(&args.difficulty);

    let seed = match (&args.seed, &args.phrase) {
        (Some(text), _) => match text.parse::<PuzzleSeed>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("invalid seed: {err}");
                process::exit(2);
            }
        },
        (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
        (None, None) => PuzzleSeed::random(),
    };

    let generator = PuzzleGenerator::new();
    let puzzle = match generator.generate_with_seed(seed, difficulty) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    println!("  {} (requested {difficulty})", puzzle.difficulty);
    println!();
    println!("Problem ({} holes):", puzzle.problem.hole_count());
    print_grid(&puzzle.problem);
    println!();
    println!("Solution:");
    print_grid(&puzzle.solution);
}

fn print_grid(grid: &Grid) {
    for (row, values) in grid.values().into_iter().enumerate() {
        print!(" ");
        for (col, value) in values.into_iter().enumerate() {
            if col % 3 == 0 {
                print!(" ");
            }
            if value == 0 {
                print!("_");
            } else {
                print!("{value}");
            }
        }
        println!();
        if row == 2 || row == 5 {
            println!();
        }
    }
}
