//! Hole carving: turning a complete grid into a unique-solution puzzle.
//!
//! Carving walks the 81 cells in a random order. At each step it tries to
//! clear the cell together with its 180-degree point-symmetric partner,
//! keeping the removal only if the puzzle still has exactly one solution.
//! When the pair removal breaks uniqueness, the two cells are retried one
//! at a time in random order and the first single removal that preserves
//! uniqueness is kept. The walk stops once the hole target is reached.
//!
//! The symmetric-pair preference keeps the given layout rotationally
//! balanced, the same aesthetic most published puzzles use.

use rand::{Rng, RngExt as _, seq::SliceRandom as _};
use sudocarve_core::{Grid, Position};

use crate::counter;

/// Carves holes into a copy of `solution`, aiming for `target` empty cells.
///
/// Returns `None` if the finished puzzle fails the final uniqueness
/// re-verification. That re-check is defensive: every committed removal was
/// already verified, so a failure indicates an accumulated edge case and the
/// caller should retry with a fresh complete grid.
///
/// The returned puzzle has at most `target` holes; it may have fewer when
/// uniqueness repeatedly fails near the target.
pub fn carve<R: Rng + ?Sized>(rng: &mut R, solution: &Grid, target: usize) -> Option<Grid> {
    let mut puzzle = solution.clone();
    let mut order = Position::ALL;
    order.shuffle(rng);

    let mut removed = 0usize;
    for pos in order {
        if removed >= target {
            break;
        }
        let twin = pos.mirrored();
        let held = puzzle.get(pos);
        let twin_held = puzzle.get(twin);
        let would_clear =
            usize::from(held.is_some()) + usize::from(twin != pos && twin_held.is_some());
        if would_clear == 0 {
            continue;
        }

        // The pair attempt is only allowed when every cell it would clear
        // fits in the remaining budget; an odd target near completion drops
        // down to single-cell removal instead of overshooting.
        let remaining = target - removed;
        if would_clear <= remaining {
            // Tentatively clear the symmetric pair (the center cell only
            // once).
            if held.is_some() {
                puzzle.clear(pos);
            }
            if twin != pos && twin_held.is_some() {
                puzzle.clear(twin);
            }

            if counter::has_unique_solution(&puzzle) {
                removed += would_clear;
                continue;
            }

            // Revert the pair, then fall back to single-cell removal.
            if let Some(digit) = held {
                puzzle.set(pos, digit);
            }
            if twin != pos
                && let Some(digit) = twin_held
            {
                puzzle.set(twin, digit);
            }
            if would_clear == 1 || twin == pos {
                // A one-cell pair attempt (center cell, or a partner that
                // was already empty) is the single-cell removal; retrying
                // it would repeat the check that just failed.
                continue;
            }
        }

        let singles = if rng.random_bool(0.5) {
            [pos, twin]
        } else {
            [twin, pos]
        };
        for cell in singles {
            let Some(digit) = puzzle.get(cell) else {
                continue;
            };
            puzzle.clear(cell);
            if counter::has_unique_solution(&puzzle) {
                removed += 1;
                break;
            }
            puzzle.set(cell, digit);
        }
    }

    counter::has_unique_solution(&puzzle).then_some(puzzle)
}
