//! Cell coordinates on a 9x9 board.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A cell position on a 9x9 sudoku board.
///
/// Rows and columns are zero-based, with `(0, 0)` at the top-left corner.
/// Construction is checked, so a `Position` always refers to a real cell.
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 4);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 4);
/// assert_eq!(pos.box_index(), 4);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
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

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        let (row, col) = ((index / 9) as u8, (index % 9) as u8);
        Self { row, col }
    }

    /// Returns the zero-based row (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the zero-based column (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index of the 3x3 box containing this position (0-8).
    ///
    /// Boxes are numbered in row-major order, so box 0 is top-left and box 8
    /// is bottom-right.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.row / 3 * 3 + self.col / 3
    }

    /// Returns the position mirrored through the board center.
    ///
    /// The center cell `(4, 4)` maps to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).mirrored(), Position::new(8, 8));
    /// assert_eq!(Position::new(4, 4).mirrored(), Position::new(4, 4));
    /// ```
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self {
            row: 8 - self.row,
            col: 8 - self.col,
        }
    }

    /// Returns the 20 positions that share a row, column, or box with this
    /// position, excluding the position itself.
    ///
    /// The result lists the row peers first, then the column peers, then the
    /// box peers that share neither row nor column.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// let peers = Position::new(0, 0).peers();
    /// assert_eq!(peers.len(), 20);
    /// assert!(!peers.contains(&Position::new(0, 0)));
    /// assert!(peers.contains(&Position::new(0, 8)));
    /// assert!(peers.contains(&Position::new(8, 0)));
    /// assert!(peers.contains(&Position::new(2, 2)));
    /// ```
    #[must_use]
    pub fn peers(self) -> [Self; 20] {
        let mut peers = [Self { row: 0, col: 0 }; 20];
        let mut n = 0;
        for col in 0..9 {
            if col != self.col {
                peers[n] = Self { row: self.row, col };
                n += 1;
            }
        }
        for row in 0..9 {
            if row != self.row {
                peers[n] = Self { row, col: self.col };
                n += 1;
            }
        }
        let band = self.row - self.row % 3;
        let stack = self.col - self.col % 3;
        for row in band..band + 3 {
            for col in stack..stack + 3 {
                if row != self.row && col != self.col {
                    peers[n] = Self { row, col };
                    n += 1;
                }
            }
        }
        debug_assert_eq!(n, 20);
        peers
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL.len(), 81);
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(pos, Position::from_index(i));
        }
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(0, 8).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 0).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_mirrored() {
        assert_eq!(Position::new(0, 0).mirrored(), Position::new(8, 8));
        assert_eq!(Position::new(2, 7).mirrored(), Position::new(6, 1));
        assert_eq!(Position::new(4, 4).mirrored(), Position::new(4, 4));
        for pos in Position::ALL {
            assert_eq!(pos.mirrored().mirrored(), pos);
        }
    }

    #[test]
    fn test_peers_are_distinct_and_related() {
        for pos in Position::ALL {
            let peers = pos.peers();
            let unique: HashSet<_> = peers.into_iter().collect();
            assert_eq!(unique.len(), 20);
            assert!(!unique.contains(&pos));
            for peer in peers {
                let related = peer.row() == pos.row()
                    || peer.col() == pos.col()
                    || peer.box_index() == pos.box_index();
                assert!(related, "{peer} is not related to {pos}");
            }
        }
    }

    #[test]
    #[should_panic(expected = "row < 9 && col < 9")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }
}
