//! Core board types for Sudoku puzzle generation.
//!
//! This crate provides the value types shared by the generation engine and
//! the puzzle pool:
//!
//! - [`Digit`]: type-safe Sudoku digit in the range 1-9
//! - [`DigitSet`]: a bitset of digits, used for candidate computation
//! - [`Position`]: a board coordinate with point-symmetry support
//! - [`Grid`]: an 81-cell board of optional digits
//! - [`Mask`]: the given/blank layout derived from a puzzle grid
//!
//! # Examples
//!
//! ```
//! use sudocarve_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::empty();
//! grid.set(Position::new(0, 0), Digit::D5);
//!
//! // Candidates exclude digits already present in the row, column, and box.
//! let candidates = grid.candidates_at(Position::new(0, 8));
//! assert!(!candidates.contains(Digit::D5));
//! assert_eq!(candidates.len(), 8);
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod mask;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    mask::Mask,
    position::Position,
};
