//! The given/blank layout of a puzzle.

use std::ops::Index;

use crate::{Grid, Position};

/// An 81-cell boolean layout marking which puzzle cells are givens.
///
/// A mask is derived from a puzzle grid — `true` exactly where the grid has
/// a digit — and is immutable afterwards.
///
/// # Examples
///
/// ```
/// use sudocarve_core::{Digit, Grid, Mask, Position};
///
/// let mut puzzle = Grid::empty();
/// puzzle.set(Position::new(0, 0), Digit::D5);
///
/// let mask = Mask::from_grid(&puzzle);
/// assert!(mask.is_given(Position::new(0, 0)));
/// assert!(!mask.is_given(Position::new(0, 1)));
/// assert_eq!(mask.given_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    given: [bool; 81],
}

impl Mask {
    /// Derives the mask of `grid`: `true` wherever a cell holds a digit.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut given = [false; 81];
        for pos in Position::ALL {
            given[pos.index()] = grid.get(pos).is_some();
        }
        Self { given }
    }

    /// Returns `true` if the cell at `pos` is a given.
    #[must_use]
    pub const fn is_given(&self, pos: Position) -> bool {
        self.given[pos.index()]
    }

    /// Returns the number of given cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.given.iter().filter(|given| **given).count()
    }
}

impl Index<Position> for Mask {
    type Output = bool;

    fn index(&self, pos: Position) -> &bool {
        &self.given[pos.index()]
    }
}
