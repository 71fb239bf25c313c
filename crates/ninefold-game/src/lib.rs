//! Play-time game state and board operations for the ninefold sudoku engine.
//!
//! This crate sits on top of the core board model and the generator:
//!
//! - [`generate_game`] assembles a ready-to-play [`Game`] by generating a
//!   solution, carving a puzzle, and validating the resulting board.
//! - [`ops`] holds the mutation surface the play UI drives: writing and
//!   erasing digits, pencil notes, hints, and highlights. Every operation
//!   clones the board, applies the change, and returns the new board, so
//!   game state can be swapped atomically and never observed mid-update.
//!
//! Queries that do not change the board, such as completion checks, hints,
//! and candidate sets, live in [`ninefold_core::rules`].
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{rules, Difficulty};
//! use ninefold_game::{generate_game, ops};
//!
//! let game = generate_game(Difficulty::Medium);
//!
//! // Ask for a hint and let the engine fill that cell
//! let pos = rules::hint_position(&game.board, &game.solution).unwrap();
//! let board = ops::solve_cell(&game.board, &game.solution, pos);
//!
//! assert_eq!(board[pos].value, Some(game.solution[pos]));
//! ```

pub mod game;
pub mod ops;

// Re-export commonly used types
pub use self::game::{Game, generate_game, generate_game_with_seed};
