//! The puzzle generation facade.

use derive_more::{Display, Error};
use rand::Rng;
use sudocarve_core::{Grid, Mask};

use crate::{Difficulty, PuzzleSeed, carve, pattern};

/// A finished puzzle: the problem grid, its given mask, and the complete
/// solution it was carved from.
///
/// Invariants at construction time:
///
/// - `solution` is a complete valid grid;
/// - every filled `problem` cell equals the corresponding `solution` cell;
/// - `mask` is `true` exactly where `problem` is filled;
/// - `problem` has exactly one completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle grid, with holes to fill in.
    pub problem: Grid,
    /// The given layout of `problem`.
    pub mask: Mask,
    /// The complete grid `problem` was carved from.
    pub solution: Grid,
    /// The achieved difficulty. Differs from the requested one only when
    /// generation fell back to [`Difficulty::Medium`].
    pub difficulty: Difficulty,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// An error produced when generation runs out of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GenerateError {
    /// Every attempt at the requested difficulty failed, and so did the
    /// capped fallback round at medium difficulty.
    ///
    /// With the default attempt budget this is not expected to occur in
    /// practice; the variant exists so the fallback terminates by
    /// construction instead of probabilistically.
    #[display("all generation attempts exhausted, including the medium fallback")]
    AttemptsExhausted,
}

/// Generates Sudoku puzzles with verified-unique solutions.
///
/// Each generation request runs up to [`max_attempts`] rounds of "build a
/// complete grid, carve holes, verify uniqueness". If every round at the
/// requested difficulty fails, one fallback pass at
/// [`Difficulty::Medium`] runs with the same budget; only if that also
/// fails does the call return [`GenerateError::AttemptsExhausted`].
///
/// The generator holds no mutable state: concurrent calls are independent
/// apart from their own random draws.
///
/// [`max_attempts`]: Self::with_max_attempts
///
/// # Examples
///
/// ```
/// use sudocarve_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
///
/// // Seeded generation is reproducible.
/// let seed = PuzzleSeed::from_phrase("doc example");
/// let a = generator.generate_with_seed(seed, Difficulty::Medium)?;
/// let b = generator.generate_with_seed(seed, Difficulty::Medium)?;
/// assert_eq!(a, b);
/// # Ok::<(), sudocarve_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    max_attempts: usize,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// The default number of carving attempts per difficulty round.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 8;

    /// Creates a generator with the default attempt budget.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Creates a generator with a custom attempt budget.
    #[must_use]
    pub const fn with_max_attempts(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Generates a puzzle at `difficulty` from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::AttemptsExhausted`] if both the requested
    /// round and the medium fallback run out of attempts.
    pub fn generate(&self, difficulty: Difficulty) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(PuzzleSeed::random(), difficulty)
    }

    /// Generates a puzzle deterministically from `seed`.
    ///
    /// The same seed and difficulty always produce the same puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::AttemptsExhausted`] if both the requested
    /// round and the medium fallback run out of attempts.
    pub fn generate_with_seed(
        &self,
        seed: PuzzleSeed,
        difficulty: Difficulty,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = seed.rng();
        Self::generate_rounds(
            &mut rng,
            seed,
            difficulty,
            self.max_attempts,
            self.max_attempts,
        )
    }

    /// Runs the requested-difficulty round and, on exhaustion, the single
    /// capped fallback round at medium.
    ///
    /// The budgets are split so the fallback path stays testable: forcing
    /// `requested_attempts` to zero exercises the fallback without mocking
    /// the uniqueness oracle.
    fn generate_rounds<R: Rng + ?Sized>(
        rng: &mut R,
        seed: PuzzleSeed,
        difficulty: Difficulty,
        requested_attempts: usize,
        fallback_attempts: usize,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        if let Some((problem, solution)) =
            attempt_rounds(rng, difficulty.hole_target(), requested_attempts)
        {
            return Ok(assemble(problem, solution, difficulty, seed));
        }
        if difficulty != Difficulty::Medium
            && let Some((problem, solution)) =
                attempt_rounds(rng, Difficulty::Medium.hole_target(), fallback_attempts)
        {
            return Ok(assemble(problem, solution, Difficulty::Medium, seed));
        }
        Err(GenerateError::AttemptsExhausted)
    }
}

/// One bounded round of complete-grid construction plus carving.
fn attempt_rounds<R: Rng + ?Sized>(
    rng: &mut R,
    target: usize,
    attempts: usize,
) -> Option<(Grid, Grid)> {
    for _ in 0..attempts {
        let solution = pattern::complete_grid(rng);
        if let Some(problem) = carve::carve(rng, &solution, target) {
            return Some((problem, solution));
        }
    }
    None
}

fn assemble(
    problem: Grid,
    solution: Grid,
    difficulty: Difficulty,
    seed: PuzzleSeed,
) -> GeneratedPuzzle {
    let mask = Mask::from_grid(&problem);
    GeneratedPuzzle {
        problem,
        mask,
        solution,
        difficulty,
        seed,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sudocarve_core::Position;

    use super::*;
    use crate::counter;

    fn assert_invariants(puzzle: &GeneratedPuzzle, target: usize) {
        assert!(puzzle.solution.is_complete_valid());
        assert!(puzzle.problem.hole_count() <= target);
        assert!(counter::has_unique_solution(&puzzle.problem));
        for pos in Position::ALL {
            assert_eq!(puzzle.mask.is_given(pos), puzzle.problem.get(pos).is_some());
            if let Some(digit) = puzzle.problem.get(pos) {
                assert_eq!(puzzle.solution.get(pos), Some(digit));
            }
        }
    }

    #[test]
    fn generates_each_difficulty() {
        let generator = PuzzleGenerator::new();
        for difficulty in Difficulty::ALL {
            let seed = PuzzleSeed::from_phrase(difficulty.name());
            let puzzle = generator.generate_with_seed(seed, difficulty).unwrap();
            assert_invariants(&puzzle, difficulty.hole_target());
            assert_eq!(puzzle.seed, seed);
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let generator = PuzzleGenerator::new();
        let seed = PuzzleSeed::from_phrase("determinism");
        let a = generator.generate_with_seed(seed, Difficulty::Hard).unwrap();
        let b = generator.generate_with_seed(seed, Difficulty::Hard).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn exhausted_requested_round_falls_back_to_medium() {
        // A zero budget for the requested round forces the fallback path.
        let seed = PuzzleSeed::from_phrase("fallback");
        let mut rng = seed.rng();
        let puzzle = PuzzleGenerator::generate_rounds(
            &mut rng,
            seed,
            Difficulty::Hard,
            0,
            PuzzleGenerator::DEFAULT_MAX_ATTEMPTS,
        )
        .unwrap();
        assert_eq!(puzzle.difficulty, Difficulty::Medium);
        assert_invariants(&puzzle, Difficulty::Medium.hole_target());
    }

    #[test]
    fn exhausted_fallback_terminates_with_an_error() {
        let seed = PuzzleSeed::from_phrase("exhausted");
        let mut rng = seed.rng();
        let result = PuzzleGenerator::generate_rounds(&mut rng, seed, Difficulty::Hard, 0, 0);
        assert_eq!(result, Err(GenerateError::AttemptsExhausted));
    }

    #[test]
    fn medium_does_not_fall_back_to_itself() {
        let seed = PuzzleSeed::from_phrase("no self fallback");
        let mut rng = seed.rng();
        let result = PuzzleGenerator::generate_rounds(&mut rng, seed, Difficulty::Medium, 0, 8);
        assert_eq!(result, Err(GenerateError::AttemptsExhausted));
    }

    #[test]
    fn unseeded_generation_succeeds() {
        let generator = PuzzleGenerator::new();
        let puzzle = generator.generate(Difficulty::Easy).unwrap();
        assert_invariants(&puzzle, Difficulty::Easy.hole_target());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(4))]

        #[test]
        fn invariants_hold_for_random_seeds(seed in proptest::array::uniform32(any::<u8>())) {
            let generator = PuzzleGenerator::new();
            let puzzle = generator
                .generate_with_seed(PuzzleSeed::from_bytes(seed), Difficulty::Medium)
                .unwrap();
            assert_invariants(&puzzle, Difficulty::Medium.hole_target());
        }
    }
}
