//! Puzzle generation for the ninefold sudoku engine.
//!
//! Generation happens in two phases, both driven by one seeded random
//! stream:
//!
//! 1. **Fill** - [`fill_solution`] backtracks over an empty grid with
//!    shuffled candidate orders until it has a complete, rule-consistent
//!    solution.
//! 2. **Carve** - [`carve_puzzle`] removes cells from that solution in
//!    mirrored pairs, rolling back any removal that would let a second
//!    solution in, until the difficulty's clue target is reached.
//!
//! [`PuzzleGenerator`] ties the phases together and stamps the result with
//! the [`PuzzleSeed`] that produced it, so every puzzle can be regenerated
//! from its seed alone.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::Difficulty;
//! use ninefold_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(Difficulty::Medium);
//! let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("docs"));
//!
//! // The seed reproduces the identical puzzle
//! let again = generator.generate_with_seed(puzzle.seed);
//! assert_eq!(again, puzzle);
//! ```

pub mod carve;
pub mod fill;
pub mod generator;
pub mod seed;
pub mod solutions;

// Re-export commonly used types
pub use self::{
    carve::carve_puzzle,
    fill::fill_solution,
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
    solutions::{count_solutions, has_unique_solution},
};
