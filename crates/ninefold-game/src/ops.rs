//! Play-time board operations.
//!
//! Every operation here is pure: it takes the board by reference, clones it,
//! applies the change, and returns the new board for the caller to swap in.
//! Invalid requests never fail loudly. Editing a given cell, or noting a
//! filled cell, returns an unmodified clone so callers can apply operations
//! unconditionally.
//!
//! Operations that write or erase a digit re-validate the entire board
//! before returning, because one placement can invalidate or revalidate any
//! cell sharing its row, column, or box. The full sweep is cheap on a 9x9
//! board and keeps every validity flag trustworthy after every mutation.

use ninefold_core::{Board, Digit, DigitSet, Highlight, Position, SolutionGrid, rules};

/// Writes `value` into the cell at `pos`, or erases it when the cell already
/// holds `value`.
///
/// Given cells are never modified. Writing clears the cell's notes and
/// re-validates the whole board; erasing re-validates too, so cells that
/// conflicted with the erased digit recover their validity immediately.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Board, Digit, DigitGrid, Position};
/// use ninefold_game::ops;
///
/// let puzzle: DigitGrid =
///     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
///         .parse()?;
/// let board = Board::from_givens(&puzzle);
/// let pos = Position::new(0, 2);
///
/// let board = ops::set_cell_value(&board, pos, Digit::D4);
/// assert_eq!(board[pos].value, Some(Digit::D4));
/// assert!(board[pos].is_valid);
///
/// // Same digit again erases
/// let board = ops::set_cell_value(&board, pos, Digit::D4);
/// assert_eq!(board[pos].value, None);
/// # Ok::<(), ninefold_core::GridError>(())
/// ```
#[must_use]
pub fn set_cell_value(board: &Board, pos: Position, value: Digit) -> Board {
    let mut next = board.clone();
    let cell = &mut next[pos];
    if cell.is_given {
        return next;
    }
    if cell.value == Some(value) {
        cell.value = None;
    } else {
        cell.value = Some(value);
        cell.notes = DigitSet::EMPTY;
    }
    rules::validate(&next)
}

/// Toggles `note` in the pencil notes of the empty cell at `pos`.
///
/// Given and filled cells are never modified. Notes always read back in
/// ascending order.
#[must_use]
pub fn toggle_cell_note(board: &Board, pos: Position, note: Digit) -> Board {
    let mut next = board.clone();
    let cell = &mut next[pos];
    if cell.is_given || cell.value.is_some() {
        return next;
    }
    cell.notes.toggle(note);
    next
}

/// Empties the notes of the cell at `pos`.
///
/// Unlike [`toggle_cell_note`] this has no guard at all: it applies to any
/// cell, givens included.
#[must_use]
pub fn clear_cell_notes(board: &Board, pos: Position) -> Board {
    let mut next = board.clone();
    next[pos].notes = DigitSet::EMPTY;
    next
}

/// Erases the digit in the cell at `pos` and re-validates the board.
///
/// Given cells are never modified. Notes are left in place.
#[must_use]
pub fn clear_cell_value(board: &Board, pos: Position) -> Board {
    let mut next = board.clone();
    let cell = &mut next[pos];
    if cell.is_given {
        return next;
    }
    cell.value = None;
    rules::validate(&next)
}

/// Fills the cell at `pos` with its solution digit and marks it with a hint
/// highlight.
///
/// Given cells are never modified. The cell's notes are cleared and the
/// whole board is re-validated. The highlight is plain state; the caller
/// owns any timer that later removes it via [`clear_highlights`].
#[must_use]
pub fn solve_cell(board: &Board, solution: &SolutionGrid, pos: Position) -> Board {
    let mut next = board.clone();
    let cell = &mut next[pos];
    if cell.is_given {
        return next;
    }
    cell.value = Some(solution[pos]);
    cell.notes = DigitSet::EMPTY;
    cell.highlight = Some(Highlight::Hint);
    rules::validate(&next)
}

/// Re-validates the board and marks every conflicting cell with an error
/// highlight.
///
/// The marking is additive: highlights on valid cells are left untouched,
/// and nothing is ever cleared here. Use [`clear_highlights`] to reset.
#[must_use]
pub fn highlight_errors(board: &Board) -> Board {
    let mut next = rules::validate(board);
    for pos in Position::ALL {
        let cell = &mut next[pos];
        if cell.value.is_some() && !cell.is_valid {
            cell.highlight = Some(Highlight::Error);
        }
    }
    next
}

/// Removes every highlight from the board.
///
/// Highlights are transient UI markers set by [`solve_cell`] and
/// [`highlight_errors`]; the caller decides when they expire, typically from
/// a timer, and applies this operation to reset them.
#[must_use]
pub fn clear_highlights(board: &Board) -> Board {
    let mut next = board.clone();
    for pos in Position::ALL {
        next[pos].highlight = None;
    }
    next
}

/// Overwrites the notes of every empty, editable cell with the digits that
/// could currently go there.
///
/// This is destructive: manually entered notes on those cells are replaced.
/// Filled cells and givens keep their state.
#[must_use]
pub fn auto_update_notes(board: &Board) -> Board {
    let mut next = board.clone();
    for pos in Position::ALL {
        if next[pos].value.is_none() && !next[pos].is_given {
            next[pos].notes = rules::possible_values(board, pos);
        }
    }
    next
}

/// Removes `value` from the notes of every empty cell sharing a row, column,
/// or box with `pos`.
///
/// Applied after a successful placement so stale candidates disappear from
/// the neighborhood. The cell at `pos` itself is not touched.
#[must_use]
pub fn remove_note_from_related_cells(board: &Board, pos: Position, value: Digit) -> Board {
    let mut next = board.clone();
    for peer in pos.peers() {
        let cell = &mut next[peer];
        if cell.value.is_none() && !cell.notes.is_empty() {
            cell.notes.remove(value);
        }
    }
    next
}
