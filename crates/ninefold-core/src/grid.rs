//! Value-only 9x9 grids, free of play-time state.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// A 9x9 grid of optional digits.
///
/// This is the working representation used while generating and counting
/// solutions: just values, no givens, notes, or validity flags. Cells are
/// stored in row-major order.
///
/// The text form is 81 characters in row-major order, one per cell, with
/// `.` or `0` for an empty cell. ASCII whitespace is ignored on parsing, so
/// grids can be written one row per line.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// assert_eq!(grid.filled_count(), 0);
///
/// grid.set(Position::new(0, 0), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert!(grid.to_string().starts_with('5'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the digit at `pos`.
    pub const fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index()] = value;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the first empty position in row-major order, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(Position::from_index)
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_char('.')?,
            }
        }
        Ok(())
    }
}

impl FromStr for DigitGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut index = 0;
        for ch in s.chars() {
            if ch.is_ascii_whitespace() {
                continue;
            }
            if index >= 81 {
                index += 1;
                continue;
            }
            let value = match ch {
                '.' | '0' => None,
                '1'..='9' => Some(Digit::ALL[ch as usize - '1' as usize]),
                _ => return Err(GridError::BadChar { ch, index }),
            };
            grid.cells[index] = value;
            index += 1;
        }
        if index != 81 {
            return Err(GridError::BadLength { len: index });
        }
        Ok(grid)
    }
}

impl From<DigitGrid> for String {
    fn from(grid: DigitGrid) -> String {
        grid.to_string()
    }
}

impl TryFrom<String> for DigitGrid {
    type Error = GridError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A completely filled, rule-consistent 9x9 grid.
///
/// Construction always verifies that every row, column, and box contains all
/// nine digits, so holding a `SolutionGrid` is proof that the grid is a valid
/// sudoku solution.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Position, SolutionGrid};
///
/// let solution: SolutionGrid =
///     "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
///         .parse()?;
/// assert_eq!(solution[Position::new(0, 0)], Digit::D5);
/// # Ok::<(), ninefold_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SolutionGrid {
    cells: [Digit; 81],
}

impl SolutionGrid {
    /// Returns the digit at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Digit {
        self.cells[pos.index()]
    }

    /// Returns the solution as a [`DigitGrid`] with every cell filled.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, Some(self.get(pos)));
        }
        grid
    }

    fn is_consistent(&self) -> bool {
        for i in 0..9 {
            let mut row = DigitSet::EMPTY;
            let mut col = DigitSet::EMPTY;
            let mut boxed = DigitSet::EMPTY;
            for j in 0..9 {
                row.insert(self.get(Position::new(i, j)));
                col.insert(self.get(Position::new(j, i)));
                boxed.insert(self.get(Position::new(i / 3 * 3 + j / 3, i % 3 * 3 + j % 3)));
            }
            if row != DigitSet::FULL || col != DigitSet::FULL || boxed != DigitSet::FULL {
                return false;
            }
        }
        true
    }
}

impl std::ops::Index<Position> for SolutionGrid {
    type Output = Digit;

    fn index(&self, pos: Position) -> &Digit {
        &self.cells[pos.index()]
    }
}

impl TryFrom<&DigitGrid> for SolutionGrid {
    type Error = GridError;

    /// Checks that `grid` is completely filled and rule-consistent.
    fn try_from(grid: &DigitGrid) -> Result<Self, Self::Error> {
        let mut cells = [Digit::D1; 81];
        for pos in Position::ALL {
            cells[pos.index()] = grid.get(pos).ok_or(GridError::Incomplete)?;
        }
        let solution = Self { cells };
        if !solution.is_consistent() {
            return Err(GridError::Inconsistent);
        }
        Ok(solution)
    }
}

impl Display for SolutionGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.cells {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for SolutionGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid: DigitGrid = s.parse()?;
        Self::try_from(&grid)
    }
}

impl From<SolutionGrid> for String {
    fn from(solution: SolutionGrid) -> String {
        solution.to_string()
    }
}

impl TryFrom<String> for SolutionGrid {
    type Error = GridError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Errors from parsing or constructing grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The text form did not contain exactly 81 cells.
    #[display("invalid grid length: expected 81 cells, got {len}")]
    BadLength {
        /// Number of cells found.
        len: usize,
    },
    /// A character was neither a digit, `.`, `0`, nor whitespace.
    #[display("invalid character {ch:?} at cell {index}")]
    BadChar {
        /// The rejected character.
        ch: char,
        /// Row-major index of the cell being parsed.
        index: usize,
    },
    /// The grid has at least one empty cell.
    #[display("grid is not completely filled")]
    Incomplete,
    /// A row, column, or box is missing a digit.
    #[display("grid violates sudoku rules")]
    Inconsistent,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_parse_and_display_roundtrip() {
        let puzzle = "\
            53..7....\
            6..195...\
            .98....6.\
            8...6...3\
            4..8.3..1\
            7...2...6\
            .6....28.\
            ...419..5\
            ....8..79";
        let grid: DigitGrid = puzzle.parse().unwrap();
        assert_eq!(grid.filled_count(), 30);
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(grid.get(Position::new(0, 2)), None);
        assert_eq!(grid.to_string().parse::<DigitGrid>().unwrap(), grid);
    }

    #[test]
    fn test_parse_accepts_zero_and_whitespace() {
        let with_zeros = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let with_dots = with_zeros.replace('0', ".");
        let spaced = with_zeros
            .as_bytes()
            .chunks(9)
            .map(|row| std::str::from_utf8(row).unwrap())
            .collect::<Vec<_>>()
            .join("\n");

        let a: DigitGrid = with_zeros.parse().unwrap();
        let b: DigitGrid = with_dots.parse().unwrap();
        let c: DigitGrid = spaced.parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(GridError::BadLength { len: 3 })
        );
        assert_eq!(
            "x".repeat(81).parse::<DigitGrid>(),
            Err(GridError::BadChar { ch: 'x', index: 0 })
        );
        assert_eq!(
            "1".repeat(82).parse::<DigitGrid>(),
            Err(GridError::BadLength { len: 82 })
        );
    }

    #[test]
    fn test_first_empty_is_row_major() {
        let mut grid = DigitGrid::new();
        assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));
        for col in 0..9 {
            grid.set(Position::new(0, col), Some(Digit::D1));
        }
        assert_eq!(grid.first_empty(), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_solution_accepts_valid_grid() {
        let solution: SolutionGrid = SOLVED.parse().unwrap();
        assert_eq!(solution[Position::new(0, 0)], Digit::D5);
        assert_eq!(solution[Position::new(8, 8)], Digit::D9);
        assert!(solution.to_digit_grid().is_complete());
        assert_eq!(solution.to_string(), SOLVED);
    }

    #[test]
    fn test_solution_rejects_incomplete_grid() {
        let grid = DigitGrid::new();
        assert_eq!(SolutionGrid::try_from(&grid), Err(GridError::Incomplete));
    }

    #[test]
    fn test_solution_rejects_rule_violation() {
        // Swap two digits in one row so the columns no longer check out
        let mut chars: Vec<char> = SOLVED.chars().collect();
        chars.swap(0, 1);
        let broken: String = chars.into_iter().collect();
        assert_eq!(broken.parse::<SolutionGrid>(), Err(GridError::Inconsistent));
    }

    #[test]
    fn test_serde_as_string() {
        let solution: SolutionGrid = SOLVED.parse().unwrap();
        let json = serde_json::to_string(&solution).unwrap();
        assert_eq!(json, format!("\"{SOLVED}\""));
        let back: SolutionGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, solution);

        let grid: DigitGrid =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
                .parse()
                .unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: DigitGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
