//! Placement checks and whole-board validation.
//!
//! All functions here are pure: they borrow the board or grid, never mutate
//! their input, and return fresh values. The play-time operations in the game
//! crate and the generator's backtracking both build on [`can_place`].

use crate::{
    board::Board,
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, SolutionGrid},
    position::Position,
};

/// Returns `true` if `digit` can be placed at `pos` without conflicting with
/// any value in the same row, column, or box.
///
/// The scans do not skip the queried cell, so a cell that already holds
/// `digit` reports `false`. Whole-board validation clears each cell before
/// querying it for exactly this reason; see [`validate`].
///
/// # Examples
///
/// ```
/// use ninefold_core::{rules, Digit, DigitGrid, Position};
///
/// let grid: DigitGrid =
///     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
///         .parse()?;
/// // Row 0 already contains a 5
/// assert!(!rules::can_place(&grid, Position::new(0, 2), Digit::D5));
/// assert!(rules::can_place(&grid, Position::new(0, 2), Digit::D4));
/// # Ok::<(), ninefold_core::GridError>(())
/// ```
#[must_use]
pub fn can_place(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    if let Some(held) = grid.get(pos)
        && held != digit
    {
        return false;
    }
    for i in 0..9 {
        if grid.get(Position::new(pos.row(), i)) == Some(digit) {
            return false;
        }
        if grid.get(Position::new(i, pos.col())) == Some(digit) {
            return false;
        }
    }
    let band = pos.row() - pos.row() % 3;
    let stack = pos.col() - pos.col() % 3;
    for row in band..band + 3 {
        for col in stack..stack + 3 {
            if grid.get(Position::new(row, col)) == Some(digit) {
                return false;
            }
        }
    }
    true
}

/// Returns `true` if writing `value` at `pos` would leave the board
/// conflict-free at that cell.
///
/// Clearing a cell (`value` of `None`) is always a valid move. This is a
/// preview check against the current values; it does not consider what the
/// solution holds there.
#[must_use]
pub fn is_valid_move(board: &Board, pos: Position, value: Option<Digit>) -> bool {
    match value {
        None => true,
        Some(digit) => can_place(&board.to_digit_grid(), pos, digit),
    }
}

/// Refreshes the validity flag of every cell and returns the updated board.
///
/// Each filled cell is temporarily cleared from a scratch grid before being
/// queried, so a cell never conflicts with its own stored value. Empty cells
/// are always marked valid. All other cell state is preserved.
#[must_use]
pub fn validate(board: &Board) -> Board {
    let mut validated = board.clone();
    let mut grid = board.to_digit_grid();
    for pos in Position::ALL {
        match validated[pos].value {
            None => validated[pos].is_valid = true,
            Some(digit) => {
                grid.set(pos, None);
                validated[pos].is_valid = can_place(&grid, pos, digit);
                grid.set(pos, Some(digit));
            }
        }
    }
    validated
}

/// Returns `true` if every cell is filled and marked valid.
///
/// This reads the validity flags as last refreshed by [`validate`]; it does
/// not re-run the placement checks itself.
#[must_use]
pub fn is_complete(board: &Board) -> bool {
    board.iter().all(|cell| cell.value.is_some() && cell.is_valid)
}

/// Returns the set of digits that could legally go in the empty cell at
/// `pos`.
///
/// A filled cell has no possible values; the result is empty.
///
/// # Examples
///
/// ```
/// use ninefold_core::{rules, Board, Digit, DigitGrid, DigitSet, Position};
///
/// let grid: DigitGrid =
///     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
///         .parse()?;
/// let board = Board::from_givens(&grid);
///
/// let values = rules::possible_values(&board, Position::new(0, 2));
/// assert_eq!(
///     values,
///     DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D4])
/// );
/// # Ok::<(), ninefold_core::GridError>(())
/// ```
#[must_use]
pub fn possible_values(board: &Board, pos: Position) -> DigitSet {
    if board[pos].value.is_some() {
        return DigitSet::EMPTY;
    }
    let grid = board.to_digit_grid();
    let mut values = DigitSet::EMPTY;
    for digit in Digit::ALL {
        if can_place(&grid, pos, digit) {
            values.insert(digit);
        }
    }
    values
}

/// Returns the first cell, in row-major order, that is not a given and does
/// not yet hold its solution digit.
///
/// Returns `None` when the board matches the solution everywhere outside the
/// givens. Both empty cells and cells holding a wrong digit qualify.
#[must_use]
pub fn hint_position(board: &Board, solution: &SolutionGrid) -> Option<Position> {
    Position::ALL.into_iter().find(|&pos| {
        let cell = &board[pos];
        !cell.is_given && cell.value != Some(solution[pos])
    })
}
