//! The full play-time board.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::{cell::Cell, grid::DigitGrid, position::Position};

/// A 9x9 board of [`Cell`]s, including all play-time state.
///
/// Unlike [`DigitGrid`], a board carries givens, validity flags, pencil notes,
/// and highlights. Cells are stored in row-major order and indexed by
/// [`Position`].
///
/// Cloning a board is a plain memory copy, so operations that return an
/// updated board instead of mutating in place stay cheap.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Board, Digit, Position};
///
/// let mut board = Board::empty();
/// let pos = Position::new(0, 0);
/// board[pos].value = Some(Digit::D5);
///
/// assert_eq!(board[pos].value, Some(Digit::D5));
/// assert!(!board[pos].is_given);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Cell>", try_from = "Vec<Cell>")]
pub struct Board {
    cells: [Cell; 81],
}

impl Board {
    /// Creates a board of 81 empty, editable cells.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::empty(); 81],
        }
    }

    /// Creates a board from a puzzle grid.
    ///
    /// Filled cells become givens; empty cells become editable cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Board, DigitGrid, Position};
    ///
    /// let puzzle: DigitGrid =
    ///     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
    ///         .parse()?;
    /// let board = Board::from_givens(&puzzle);
    ///
    /// assert!(board[Position::new(0, 0)].is_given);
    /// assert!(!board[Position::new(0, 2)].is_given);
    /// assert_eq!(board.given_count(), 30);
    /// # Ok::<(), ninefold_core::GridError>(())
    /// ```
    #[must_use]
    pub fn from_givens(grid: &DigitGrid) -> Self {
        let mut board = Self::empty();
        for pos in Position::ALL {
            if let Some(digit) = grid.get(pos) {
                board[pos] = Cell::given(digit);
            }
        }
        board
    }

    /// Returns the board's values as a [`DigitGrid`], dropping all play-time
    /// state.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self[pos].value);
        }
        grid
    }

    /// Returns the number of given cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_given).count()
    }

    /// Returns the number of cells holding a digit, givens included.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Returns an iterator over `(Position, &Cell)` pairs in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (Position, &Cell)> {
        Position::ALL.into_iter().zip(self.cells.iter())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.index()]
    }
}

impl From<Board> for Vec<Cell> {
    fn from(board: Board) -> Vec<Cell> {
        board.cells.to_vec()
    }
}

impl TryFrom<Vec<Cell>> for Board {
    type Error = BoardSizeError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        let len = cells.len();
        let cells: [Cell; 81] = cells.try_into().map_err(|_| BoardSizeError { len })?;
        Ok(Self { cells })
    }
}

/// Error returned when deserializing a board with the wrong cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid board length: expected 81 cells, got {len}")]
pub struct BoardSizeError {
    /// Number of cells found.
    pub len: usize,
}
