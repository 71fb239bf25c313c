//! A single board cell and its play-time state.

use serde::{Deserialize, Serialize};

use crate::{digit::Digit, digit_set::DigitSet};

/// A transient visual marker attached to a cell.
///
/// Highlights are pure data. The engine only sets them; clearing them after a
/// delay is the caller's job, typically driven by a UI timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Highlight {
    /// The cell conflicts with another cell.
    Error,
    /// The cell was confirmed or revealed as correct.
    Success,
    /// The cell was filled in by a hint.
    Hint,
}

/// A single cell of a sudoku board.
///
/// This is plain data with no invariants beyond those of its field types, so
/// the whole struct is public. A cell is either a given (part of the original
/// puzzle, never editable) or a player cell holding an optional value and a
/// set of pencil notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The digit in the cell, or `None` if it is empty.
    pub value: Option<Digit>,
    /// Whether the cell is part of the original puzzle.
    pub is_given: bool,
    /// Whether the cell's value is consistent with the rest of the board.
    ///
    /// Empty cells are always valid. This flag is refreshed by
    /// [`rules::validate`](crate::rules::validate).
    pub is_valid: bool,
    /// Pencil notes attached to the cell.
    pub notes: DigitSet,
    /// Transient visual marker, if any.
    pub highlight: Option<Highlight>,
}

impl Cell {
    /// Creates an empty, editable cell with no notes.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            value: None,
            is_given: false,
            is_valid: true,
            notes: DigitSet::EMPTY,
            highlight: None,
        }
    }

    /// Creates a given cell holding `digit`.
    #[must_use]
    pub const fn given(digit: Digit) -> Self {
        Self {
            value: Some(digit),
            is_given: true,
            is_valid: true,
            notes: DigitSet::EMPTY,
            highlight: None,
        }
    }

    /// Returns `true` if the cell holds no digit.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}
