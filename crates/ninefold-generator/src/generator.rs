//! End-to-end puzzle generation.

use log::debug;
use ninefold_core::{Difficulty, DigitGrid, SolutionGrid};
use serde::{Deserialize, Serialize};

use crate::{carve::carve_puzzle, fill::fill_solution, seed::PuzzleSeed};

/// A generated puzzle, its solution, and the seed that produced both.
///
/// The seed makes the puzzle reproducible: feeding it back into
/// [`PuzzleGenerator::generate_with_seed`] with the same difficulty returns
/// an identical puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    /// The carved puzzle, with empty cells where the player fills in digits.
    pub problem: DigitGrid,
    /// The complete solution the puzzle was carved from.
    pub solution: SolutionGrid,
    /// The seed that determined the solution and the carving order.
    pub seed: PuzzleSeed,
    /// The difficulty the puzzle was carved for.
    pub difficulty: Difficulty,
}

/// Generates puzzles for a fixed difficulty.
///
/// # Examples
///
/// ```
/// use ninefold_core::Difficulty;
/// use ninefold_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new(Difficulty::Medium);
/// let puzzle = generator.generate();
///
/// assert!((35..=39).contains(&puzzle.problem.filled_count()));
/// assert!(puzzle.solution.to_digit_grid().is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
}

impl PuzzleGenerator {
    /// Creates a generator for the given difficulty.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Returns the difficulty this generator carves for.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The seed drives both the solution fill and the carving order, so the
    /// result is fully reproducible.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.to_rng();
        let solution = fill_solution(&mut rng);
        let problem = carve_puzzle(&solution, self.difficulty, &mut rng);
        debug!(
            "generated {} puzzle with {} givens from seed {seed}",
            self.difficulty,
            problem.filled_count()
        );
        GeneratedPuzzle {
            problem,
            solution,
            seed,
            difficulty: self.difficulty,
        }
    }
}
