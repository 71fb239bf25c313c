//! Carving puzzles out of complete solutions.

use log::debug;
use ninefold_core::{Difficulty, DifficultyProfile, DigitGrid, Position, SolutionGrid};
use rand::{Rng, RngExt as _, seq::SliceRandom as _};

use crate::solutions::has_unique_solution;

const CENTER: Position = Position::new(4, 4);

/// Removes cells from a complete solution until the difficulty's clue target
/// is reached.
///
/// The number of givens to keep is drawn from the difficulty's clue range.
/// Cells are visited in an order shuffled from `rng` and removed as
/// 180-degree rotational pairs when the profile asks for symmetry. When the
/// profile demands a unique solution, every removal that would introduce a
/// second solution is rolled back and the next candidate is tried.
///
/// The result always keeps at least the profile's minimum number of givens.
/// If no remaining removal can preserve uniqueness the carve stops short of
/// its target, leaving more givens than asked; with the current profiles this
/// does not happen in practice.
///
/// # Examples
///
/// ```
/// use ninefold_core::Difficulty;
/// use ninefold_generator::{PuzzleSeed, carve_puzzle, fill_solution, has_unique_solution};
///
/// let mut rng = PuzzleSeed::from_phrase("carve").to_rng();
/// let solution = fill_solution(&mut rng);
/// let puzzle = carve_puzzle(&solution, Difficulty::Medium, &mut rng);
///
/// assert!((35..=39).contains(&puzzle.filled_count()));
/// assert!(has_unique_solution(&puzzle));
/// ```
pub fn carve_puzzle<R: Rng + ?Sized>(
    solution: &SolutionGrid,
    difficulty: Difficulty,
    rng: &mut R,
) -> DigitGrid {
    carve_with_profile(solution, difficulty.profile(), rng)
}

fn carve_with_profile<R: Rng + ?Sized>(
    solution: &SolutionGrid,
    profile: DifficultyProfile,
    rng: &mut R,
) -> DigitGrid {
    let mut grid = solution.to_digit_grid();

    let clue_target = rng.random_range(profile.min_clues..=profile.max_clues);
    let mut budget = 81 - usize::from(clue_target);

    // Under rotational symmetry every removal is a two-cell pair, except the
    // self-mirrored center. Taking the center first when the budget is odd
    // keeps the remaining budget even, so pairs land exactly on target.
    if profile.symmetric && budget % 2 == 1 {
        // A complete grid with a single blank has that digit forced, so this
        // removal can never cost uniqueness.
        grid.set(CENTER, None);
        budget -= 1;
    }

    let mut order = Position::ALL;
    order.shuffle(rng);

    for pos in order {
        if budget == 0 {
            break;
        }
        if grid.get(pos).is_none() {
            continue;
        }
        if profile.symmetric {
            if pos == CENTER {
                continue;
            }
            let mirror = pos.mirrored();
            debug_assert!(grid.get(mirror).is_some(), "pairs are removed atomically");
            let kept = (grid.get(pos), grid.get(mirror));
            grid.set(pos, None);
            grid.set(mirror, None);
            if profile.unique_solution && !has_unique_solution(&grid) {
                grid.set(pos, kept.0);
                grid.set(mirror, kept.1);
            } else {
                budget -= 2;
            }
        } else {
            let kept = grid.get(pos);
            grid.set(pos, None);
            if profile.unique_solution && !has_unique_solution(&grid) {
                grid.set(pos, kept);
            } else {
                budget -= 1;
            }
        }
    }

    if budget > 0 {
        debug!(
            "carve ran out of removable cells, leaving {} givens instead of {clue_target}",
            grid.filled_count()
        );
    }
    grid
}
