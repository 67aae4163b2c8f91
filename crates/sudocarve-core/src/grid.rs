//! The 9x9 Sudoku board.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};

use crate::{Digit, DigitSet, Position};

/// A 9x9 Sudoku board of optional digits.
///
/// Cells are stored in row-major order. `None` represents an empty cell
/// (a "hole" in puzzle terms). A grid is *complete valid* when every row,
/// column, and 3x3 box contains each digit exactly once.
///
/// # Text format
///
/// [`FromStr`] and [`Display`] use an 81-character representation with `_`
/// for empty cells; `.` and `0` are also accepted on input, and whitespace
/// is ignored, so grids can be laid out row by row in test fixtures:
///
/// ```
/// use sudocarve_core::Grid;
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid.hole_count(), 51);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// Creates a grid with all 81 cells empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places `digit` at `pos`, overwriting any previous value.
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Empties the cell at `pos`.
    pub const fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        81 - self.hole_count()
    }

    /// Computes the candidate set for the cell at `pos`: the digits not
    /// already present in its row, column, or 3x3 box.
    ///
    /// The set is recomputed from the current board state on every call;
    /// nothing is cached. The cell's own value, if any, is ignored.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        let mut used = DigitSet::new();
        for i in 0..9 {
            if let Some(digit) = self.get(Position::new(pos.row(), i))
                && i != pos.col()
            {
                used.insert(digit);
            }
            if let Some(digit) = self.get(Position::new(i, pos.col()))
                && i != pos.row()
            {
                used.insert(digit);
            }
        }
        let box_row = pos.row() / 3 * 3;
        let box_col = pos.col() / 3 * 3;
        for row in box_row..box_row + 3 {
            for col in box_col..box_col + 3 {
                let other = Position::new(row, col);
                if other != pos
                    && let Some(digit) = self.get(other)
                {
                    used.insert(digit);
                }
            }
        }
        DigitSet::FULL.difference(used)
    }

    /// Returns `true` if every cell is filled and every row, column, and
    /// 3x3 box is a permutation of the digits 1-9.
    #[must_use]
    pub fn is_complete_valid(&self) -> bool {
        if self.hole_count() != 0 {
            return false;
        }
        for i in 0..9 {
            let row: DigitSet = (0..9)
                .filter_map(|col| self.get(Position::new(i, col)))
                .collect();
            let col: DigitSet = (0..9)
                .filter_map(|row| self.get(Position::new(row, i)))
                .collect();
            let box_row = i / 3 * 3;
            let box_col = i % 3 * 3;
            let boxed: DigitSet = (box_row..box_row + 3)
                .flat_map(|row| {
                    (box_col..box_col + 3).filter_map(move |col| self.get(Position::new(row, col)))
                })
                .collect();
            if row != DigitSet::FULL || col != DigitSet::FULL || boxed != DigitSet::FULL {
                return false;
            }
        }
        true
    }

    /// Returns the board as rows of numeric values, with 0 for empty cells.
    ///
    /// This is the exchange shape expected by embedding callers that do not
    /// work with [`Digit`] directly.
    #[must_use]
    pub fn values(&self) -> [[u8; 9]; 9] {
        let mut rows = [[0u8; 9]; 9];
        for pos in Position::ALL {
            if let Some(digit) = self.get(pos) {
                rows[pos.row() as usize][pos.col() as usize] = digit.value();
            }
        }
        rows
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

/// An error produced when parsing a [`Grid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveDisplay, Error)]
pub enum ParseGridError {
    /// The text contained a character that is not a digit, a blank marker,
    /// or whitespace.
    #[display("unexpected character {_0:?} in grid text")]
    UnexpectedChar(#[error(not(source))] char),
    /// The text did not contain exactly 81 cells.
    #[display("grid text has {_0} cells, expected 81")]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut grid = Self::empty();
        let mut count = 0usize;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let cell = match ch {
                '_' | '.' | '0' => None,
                '1'..='9' => Digit::try_from_value(ch as u8 - b'0'),
                _ => return Err(ParseGridError::UnexpectedChar(ch)),
            };
            if count >= 81 {
                return Err(ParseGridError::WrongCellCount(count + 1));
            }
            grid.cells[count] = cell;
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount(count));
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_grid() -> Grid {
        "
            123 456 789
            456 789 123
            789 123 456
            234 567 891
            567 891 234
            891 234 567
            345 678 912
            678 912 345
            912 345 678
        "
        .parse()
        .unwrap()
    }

    #[test]
    fn set_get_clear() {
        let mut grid = Grid::empty();
        let pos = Position::new(3, 5);
        assert_eq!(grid.get(pos), None);

        grid.set(pos, Digit::D8);
        assert_eq!(grid.get(pos), Some(Digit::D8));
        assert_eq!(grid[pos], Some(Digit::D8));
        assert_eq!(grid.filled_count(), 1);

        grid.clear(pos);
        assert_eq!(grid.get(pos), None);
        assert_eq!(grid.hole_count(), 81);
    }

    #[test]
    fn candidates_exclude_row_col_box() {
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), Digit::D1); // same row
        grid.set(Position::new(8, 8), Digit::D2); // same column
        grid.set(Position::new(1, 7), Digit::D3); // same box

        let candidates = grid.candidates_at(Position::new(0, 8));
        assert!(!candidates.contains(Digit::D1));
        assert!(!candidates.contains(Digit::D2));
        assert!(!candidates.contains(Digit::D3));
        assert_eq!(candidates.len(), 6);
    }

    #[test]
    fn candidates_ignore_own_value() {
        let mut grid = Grid::empty();
        let pos = Position::new(4, 4);
        grid.set(pos, Digit::D9);
        assert_eq!(grid.candidates_at(pos).len(), 9);
    }

    #[test]
    fn complete_valid_grid_passes() {
        assert!(complete_grid().is_complete_valid());
    }

    #[test]
    fn incomplete_or_conflicting_grid_fails() {
        let mut grid = complete_grid();
        grid.clear(Position::new(0, 0));
        assert!(!grid.is_complete_valid());

        let mut grid = complete_grid();
        // Duplicate within row 0.
        grid.set(Position::new(0, 0), Digit::D2);
        assert!(!grid.is_complete_valid());
    }

    #[test]
    fn parse_display_round_trip() {
        let grid = complete_grid();
        let text = grid.to_string();
        assert_eq!(text.len(), 81);
        let reparsed: Grid = text.parse().unwrap();
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn parse_accepts_blank_markers() {
        let text = "0".repeat(27) + &".".repeat(27) + &"_".repeat(27);
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.hole_count(), 81);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "x".repeat(81).parse::<Grid>(),
            Err(ParseGridError::UnexpectedChar('x'))
        );
        assert_eq!(
            "1".repeat(80).parse::<Grid>(),
            Err(ParseGridError::WrongCellCount(80))
        );
        assert_eq!(
            "1".repeat(82).parse::<Grid>(),
            Err(ParseGridError::WrongCellCount(82))
        );
    }

    #[test]
    fn values_uses_zero_for_holes() {
        let mut grid = Grid::empty();
        grid.set(Position::new(2, 3), Digit::D7);
        let values = grid.values();
        assert_eq!(values[2][3], 7);
        assert_eq!(values[0][0], 0);
    }
}
