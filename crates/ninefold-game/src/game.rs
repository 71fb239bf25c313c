//! Game assembly.

use ninefold_core::{Board, Difficulty, SolutionGrid, rules};
use ninefold_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use serde::{Deserialize, Serialize};

/// A ready-to-play game session.
///
/// Holds everything the play surface needs: the board with the puzzle's
/// givens applied and validated, the solution for hints and cell solving,
/// and the provenance of the puzzle. The struct is plain data; all play-time
/// changes go through the operations in [`ops`](crate::ops), which take the
/// board and hand back a new one.
///
/// # Examples
///
/// ```
/// use ninefold_core::Difficulty;
/// use ninefold_game::generate_game;
///
/// let game = generate_game(Difficulty::Easy);
/// assert_eq!(game.board.given_count(), 78);
/// assert_eq!(game.difficulty, Difficulty::Easy);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The play board, with the puzzle's givens applied and validated.
    pub board: Board,
    /// The solution the puzzle was carved from.
    pub solution: SolutionGrid,
    /// The difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
    /// The seed that reproduces this exact game.
    pub seed: PuzzleSeed,
}

impl Game {
    /// Builds a game session from a generated puzzle.
    ///
    /// The puzzle's givens become the board's given cells and the board is
    /// validated once, so every validity flag starts out trustworthy.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let board = rules::validate(&Board::from_givens(&puzzle.problem));
        Self {
            board,
            solution: puzzle.solution,
            difficulty: puzzle.difficulty,
            seed: puzzle.seed,
        }
    }
}

/// Generates a fresh random game at the requested difficulty.
///
/// This is the entry point for starting a new game: it runs the generator,
/// carves the puzzle, and assembles the session in one call. It performs no
/// I/O; persisting the result is the caller's concern.
#[must_use]
pub fn generate_game(difficulty: Difficulty) -> Game {
    Game::new(PuzzleGenerator::new(difficulty).generate())
}

/// Generates the game determined by `seed` at the requested difficulty.
#[must_use]
pub fn generate_game_with_seed(difficulty: Difficulty, seed: PuzzleSeed) -> Game {
    Game::new(PuzzleGenerator::new(difficulty).generate_with_seed(seed))
}

#[cfg(test)]
mod tests {
    use ninefold_core::{Digit, Position};

    use crate::ops;

    use super::*;

    #[test]
    fn test_seeded_games_are_reproducible() {
        let seed = PuzzleSeed::from_phrase("game-a");
        let a = generate_game_with_seed(Difficulty::Medium, seed);
        let b = generate_game_with_seed(Difficulty::Medium, seed);
        assert_eq!(a, b);
        assert_eq!(a.seed, seed);
    }

    #[test]
    fn test_board_matches_generated_puzzle() {
        let seed = PuzzleSeed::from_phrase("game-b");
        let game = generate_game_with_seed(Difficulty::Medium, seed);

        assert!((35..=39).contains(&game.board.given_count()));
        for (pos, cell) in game.board.entries() {
            assert!(cell.is_valid);
            assert!(cell.notes.is_empty());
            if let Some(digit) = cell.value {
                assert!(cell.is_given);
                assert_eq!(digit, game.solution[pos]);
            }
        }
    }

    #[test]
    fn test_play_through_to_completion() {
        let game = generate_game_with_seed(Difficulty::Easy, PuzzleSeed::from_phrase("game-c"));
        let mut board = game.board;

        // An easy carve leaves three holes; solve them one hint at a time
        let mut holes = 0;
        while let Some(pos) = rules::hint_position(&board, &game.solution) {
            board = ops::solve_cell(&board, &game.solution, pos);
            holes += 1;
        }
        assert_eq!(holes, 3);
        assert!(rules::is_complete(&board));
    }

    #[test]
    fn test_wrong_entry_blocks_completion() {
        let game = generate_game_with_seed(Difficulty::Easy, PuzzleSeed::from_phrase("game-d"));
        let first = rules::hint_position(&game.board, &game.solution).unwrap();

        // Fill the first hole with a digit other than the solution's
        let solution_digit = game.solution[first];
        let wrong = Digit::ALL
            .into_iter()
            .find(|&d| d != solution_digit)
            .unwrap();
        let board = ops::set_cell_value(&game.board, first, wrong);

        assert_eq!(rules::hint_position(&board, &game.solution), Some(first));
        assert!(!rules::is_complete(&board));
    }

    #[test]
    fn test_center_is_carved_on_easy() {
        // The easy budget is odd, so the self-mirrored center goes first
        let game = generate_game_with_seed(Difficulty::Easy, PuzzleSeed::from_phrase("game-e"));
        assert!(game.board[Position::new(4, 4)].is_empty());
        assert!(!game.board[Position::new(4, 4)].is_given);
    }

    #[test]
    fn test_serde_roundtrip() {
        let game = generate_game_with_seed(Difficulty::Easy, PuzzleSeed::from_phrase("game-f"));
        let json = serde_json::to_string(&game).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
    }
}
