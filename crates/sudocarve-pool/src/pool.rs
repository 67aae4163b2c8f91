//! A difficulty-keyed stock of pre-generated puzzles.

use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use sudocarve_generator::{Difficulty, GeneratedPuzzle};

use crate::{CancelToken, WorkHandle, dispatcher};

/// A pool of ready-to-serve puzzles, refilled in the background.
///
/// The pool keeps a small per-difficulty stock so interactive callers can
/// start a new game without waiting for generation. Serving a puzzle
/// automatically re-primes the stock.
///
/// All shared state lives behind a single `Mutex`, so the pool is safe to
/// share across threads; background generation happens on the dispatcher's
/// worker thread and is collected by [`pump`](Self::pump), which runs
/// implicitly on every [`take`](Self::take).
///
/// # Examples
///
/// ```no_run
/// use sudocarve_generator::Difficulty;
/// use sudocarve_pool::PuzzlePool;
///
/// let pool = PuzzlePool::new();
/// pool.prime(Difficulty::Medium);
///
/// // ... later, on the interactive path:
/// if let Some(puzzle) = pool.take(Difficulty::Medium) {
///     println!("serving a puzzle with {} holes", puzzle.problem.hole_count());
/// }
/// ```
#[derive(Debug)]
pub struct PuzzlePool {
    inner: Mutex<PoolInner>,
}

#[derive(Debug, Default)]
struct PoolInner {
    shelves: HashMap<Difficulty, VecDeque<GeneratedPuzzle>>,
    pending: Vec<WorkHandle>,
}

impl Default for PuzzlePool {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzlePool {
    /// Creates an empty pool. Nothing is generated until the pool is primed
    /// or drawn from.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(PoolInner::default()),
        }
    }

    /// Returns the stock the pool keeps per difficulty.
    ///
    /// Harder puzzles take longer to carve, so fewer are stocked.
    #[must_use]
    pub const fn stock_target(difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy | Difficulty::Medium => 3,
            Difficulty::Hard => 2,
        }
    }

    /// Enqueues enough background generation to bring `difficulty` up to
    /// its stock target, counting both shelved puzzles and work already in
    /// flight.
    pub fn prime(&self, difficulty: Difficulty) {
        let mut inner = self.inner.lock().expect("pool lock poisoned");
        let shelved = inner.shelves.get(&difficulty).map_or(0, VecDeque::len);
        let in_flight = inner
            .pending
            .iter()
            .filter(|handle| handle.difficulty() == difficulty)
            .count();
        let target = Self::stock_target(difficulty);

        for _ in shelved + in_flight..target {
            match dispatcher::enqueue(difficulty, CancelToken::new()) {
                Ok(handle) => {
                    log::debug!("priming pool with a {difficulty} puzzle");
                    inner.pending.push(handle);
                }
                Err(err) => {
                    log::warn!("failed to enqueue {difficulty} generation: {err}");
                    return;
                }
            }
        }
    }

    /// Collects finished background work onto the shelves.
    ///
    /// Failed generations are logged and dropped; the next
    /// [`prime`](Self::prime) replaces them.
    pub fn pump(&self) {
        let mut inner = self.inner.lock().expect("pool lock poisoned");
        let PoolInner { shelves, pending } = &mut *inner;
        pending.retain_mut(|handle| match handle.poll() {
            None => true,
            Some(Ok(puzzle)) => {
                log::debug!("shelving a {} puzzle", puzzle.difficulty);
                shelves
                    .entry(handle.difficulty())
                    .or_default()
                    .push_back(puzzle);
                false
            }
            Some(Err(err)) => {
                log::warn!("background {} generation failed: {err}", handle.difficulty());
                false
            }
        });
    }

    /// Serves a puzzle from the shelf, if one is ready, and re-primes the
    /// stock in the background.
    ///
    /// Returns `None` when nothing is shelved yet; callers wanting a puzzle
    /// immediately can fall back to a direct synchronous
    /// [`PuzzleGenerator::generate`] call.
    ///
    /// [`PuzzleGenerator::generate`]: sudocarve_generator::PuzzleGenerator::generate
    pub fn take(&self, difficulty: Difficulty) -> Option<GeneratedPuzzle> {
        self.pump();
        let puzzle = {
            let mut inner = self.inner.lock().expect("pool lock poisoned");
            inner
                .shelves
                .get_mut(&difficulty)
                .and_then(VecDeque::pop_front)
        };
        // Top the stock back up regardless of whether a puzzle was served.
        self.prime(difficulty);
        puzzle
    }

    /// Returns the number of puzzles currently shelved for `difficulty`.
    #[must_use]
    pub fn shelved(&self, difficulty: Difficulty) -> usize {
        let inner = self.inner.lock().expect("pool lock poisoned");
        inner.shelves.get(&difficulty).map_or(0, VecDeque::len)
    }

    /// Returns the number of generation requests still in flight.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        let inner = self.inner.lock().expect("pool lock poisoned");
        inner.pending.len()
    }
}
