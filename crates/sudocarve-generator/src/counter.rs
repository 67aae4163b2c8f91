//! Solution counting with an early-stop limit.
//!
//! This is the uniqueness oracle for hole carving: a backtracking search
//! that counts distinct completions of a partial grid, abandoning the whole
//! search as soon as `limit` solutions have been found. Branching always
//! happens on the empty cell with the fewest candidates (minimum remaining
//! values), which keeps near-empty boards tractable; without that ordering
//! the search degenerates on sparse grids.
//!
//! Counts at the limit are saturated: a return value equal to `limit` means
//! "at least this many", not an exact count.

use sudocarve_core::{DigitSet, Grid, Position};

/// The solution limit that distinguishes unique from ambiguous puzzles.
pub const UNIQUENESS_LIMIT: usize = 2;

/// Counts completions of `grid`, up to `limit`.
///
/// Returns `min(true number of completions, limit)`. A grid with no empty
/// cells counts as its own single completion.
///
/// # Examples
///
/// ```
/// use sudocarve_generator::count_solutions;
///
/// let empty = sudocarve_core::Grid::empty();
/// // An empty board has a vast number of completions; the count saturates.
/// assert_eq!(count_solutions(&empty, 2), 2);
/// ```
#[must_use]
pub fn count_solutions(grid: &Grid, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    let mut work = grid.clone();
    search(&mut work, limit, 0)
}

/// Returns `true` if `grid` has exactly one completion.
#[must_use]
pub fn has_unique_solution(grid: &Grid) -> bool {
    count_solutions(grid, UNIQUENESS_LIMIT) == 1
}

/// Recursive core of the counter.
///
/// `found` is the number of solutions discovered so far, threaded through
/// the recursion as explicit local state so concurrent searches never share
/// anything. Every frame re-checks the limit after each child returns and
/// short-circuits its remaining candidates once it is reached.
fn search(grid: &mut Grid, limit: usize, found: usize) -> usize {
    // MRV cell selection, ties broken by first encounter in scan order.
    // A single-candidate cell cannot be beaten, so stop scanning at one.
    let mut best: Option<(Position, DigitSet)> = None;
    for pos in Position::ALL {
        if grid.get(pos).is_some() {
            continue;
        }
        let candidates = grid.candidates_at(pos);
        match candidates.len() {
            // Dead end: this partial assignment admits no completion.
            0 => return found,
            1 => {
                best = Some((pos, candidates));
                break;
            }
            len => {
                if best.is_none_or(|(_, held)| len < held.len()) {
                    best = Some((pos, candidates));
                }
            }
        }
    }

    // No empty cell left: a full valid assignment.
    let Some((pos, candidates)) = best else {
        return found + 1;
    };

    let mut found = found;
    for digit in candidates {
        grid.set(pos, digit);
        found = search(grid, limit, found);
        grid.clear(pos);
        if found >= limit {
            break;
        }
    }
    found
}
