//! Sudoku puzzle generation with verified-unique solutions.
//!
//! The engine works in three stages:
//!
//! 1. [`pattern`]: build a random fully-filled, rule-valid grid from a
//!    shuffled base pattern (band, row, column, and digit-label
//!    permutations all preserve validity).
//! 2. [`carve`]: remove point-symmetric pairs of digits (then singles) from
//!    the complete grid, keeping a removal only if the puzzle still has
//!    exactly one solution.
//! 3. [`counter`]: the uniqueness oracle — a backtracking search with
//!    most-constrained-cell ordering that counts completions up to an
//!    early-stop limit of 2.
//!
//! [`PuzzleGenerator`] ties the stages together with a bounded attempt loop
//! and a one-shot fallback to [`Difficulty::Medium`] when the requested
//! difficulty cannot be carved.
//!
//! Generation is deterministic per [`PuzzleSeed`]: the same seed always
//! yields the same puzzle.
//!
//! # Examples
//!
//! ```
//! use sudocarve_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(Difficulty::Easy)?;
//!
//! assert!(puzzle.solution.is_complete_valid());
//! assert!(puzzle.problem.hole_count() <= Difficulty::Easy.hole_target());
//! # Ok::<(), sudocarve_generator::GenerateError>(())
//! ```

pub mod carve;
pub mod counter;
pub mod difficulty;
pub mod generator;
pub mod pattern;
pub mod seed;

pub use self::{
    counter::{count_solutions, has_unique_solution},
    difficulty::Difficulty,
    generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
