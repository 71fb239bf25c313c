//! Core data structures and rules for the ninefold sudoku engine.
//!
//! This crate provides the board model shared by puzzle generation and play:
//! type-safe digits, positions, cells with play-time state, and the placement
//! rules every other component builds on.
//!
//! # Overview
//!
//! The crate is organized around four layers:
//!
//! 1. **Scalar types** - Small, checked building blocks
//!    - [`digit`]: Type-safe representation of sudoku digits 1-9
//!    - [`digit_set`]: Bitset of digits, used for pencil notes and candidates
//!    - [`position`]: Checked (row, col) coordinates with peer and mirror
//!      queries
//!
//! 2. **Boards** - The 9x9 containers
//!    - [`grid`]: Value-only grids ([`DigitGrid`], [`SolutionGrid`]) used by
//!      the generator
//!    - [`cell`] and [`board`]: The play-time board with givens, validity
//!      flags, notes, and highlights
//!
//! 3. **Rules** - Pure placement and validation checks
//!    - [`rules`]: Conflict scans, whole-board validation, candidate and hint
//!      queries
//!
//! 4. **Difficulty** - Carving profiles
//!    - [`difficulty`]: How many givens each difficulty leaves behind
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{rules, Board, Digit, DigitGrid, Position};
//!
//! let puzzle: DigitGrid =
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
//!         .parse()?;
//! let board = Board::from_givens(&puzzle);
//!
//! // The top-left box already contains a 9, so it can't go in (0, 2)
//! let candidates = rules::possible_values(&board, Position::new(0, 2));
//! assert!(!candidates.contains(Digit::D9));
//! assert!(candidates.contains(Digit::D4));
//! # Ok::<(), ninefold_core::GridError>(())
//! ```

pub mod board;
pub mod cell;
pub mod difficulty;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;
pub mod rules;

// Re-export commonly used types
pub use self::{
    board::Board,
    cell::{Cell, Highlight},
    difficulty::{Difficulty, DifficultyProfile},
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, GridError, SolutionGrid},
    position::Position,
};
