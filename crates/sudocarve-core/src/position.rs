//! Board coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on the 9x9 board.
///
/// Rows and columns are both in the range 0-8, with row 0 at the top and
/// column 0 on the left.
///
/// # Examples
///
/// ```
/// use sudocarve_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_index(), 5);
///
/// // 180-degree point symmetry around the board center.
/// assert_eq!(pos.mirrored(), Position::new(4, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of range");
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index of the 3x3 box containing this position
    /// (0-8, left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the point-symmetric partner of this position, reflected
    /// through the center of the board.
    ///
    /// The center cell (4, 4) is its own partner.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self {
            row: 8 - self.row,
            col: 8 - self.col,
        }
    }

    /// Returns the row-major array index of this position (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_board_in_row_major_order() {
        assert_eq!(Position::ALL.len(), 81);
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
    }

    #[test]
    fn box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(2, 8).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 0).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn mirrored_is_involutive() {
        for pos in Position::ALL {
            assert_eq!(pos.mirrored().mirrored(), pos);
        }
        assert_eq!(Position::new(0, 0).mirrored(), Position::new(8, 8));
        assert_eq!(Position::new(4, 4).mirrored(), Position::new(4, 4));
    }

    #[test]
    #[should_panic(expected = "position out of range")]
    fn rejects_out_of_range_row() {
        let _ = Position::new(9, 0);
    }
}
