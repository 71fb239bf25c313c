//! Randomized construction of complete solution grids.

use ninefold_core::{Digit, DigitGrid, SolutionGrid, rules};
use rand::{Rng, seq::SliceRandom as _};

/// Fills an empty grid with a complete, rule-consistent solution.
///
/// Cells are filled in row-major order by backtracking. At each empty cell
/// the nine digits are tried in an order shuffled from `rng`, so distinct
/// random streams produce distinct solutions while the same stream always
/// reproduces the same grid.
///
/// # Panics
///
/// Never panics in practice: backtracking from an empty grid always reaches
/// a complete solution.
///
/// # Examples
///
/// ```
/// use ninefold_generator::{PuzzleSeed, fill_solution};
///
/// let seed = PuzzleSeed::from_phrase("example");
/// let a = fill_solution(&mut seed.to_rng());
/// let b = fill_solution(&mut seed.to_rng());
/// assert_eq!(a, b);
/// ```
pub fn fill_solution<R: Rng + ?Sized>(rng: &mut R) -> SolutionGrid {
    let mut grid = DigitGrid::new();
    let filled = fill_from(&mut grid, rng);
    debug_assert!(filled);
    SolutionGrid::try_from(&grid).expect("backtracking produced an incomplete grid")
}

/// Fills the grid's remaining empty cells by backtracking.
///
/// Returns `false` if the current values admit no completion, leaving the
/// grid exactly as it was.
fn fill_from<R: Rng + ?Sized>(grid: &mut DigitGrid, rng: &mut R) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if rules::can_place(grid, pos, digit) {
            grid.set(pos, Some(digit));
            if fill_from(grid, rng) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use ninefold_core::Position;

    use crate::seed::PuzzleSeed;

    use super::*;

    #[test]
    fn test_fill_produces_consistent_solution() {
        // SolutionGrid construction re-checks every row, column, and box, so
        // reaching this assert at all means the fill was consistent.
        let solution = fill_solution(&mut PuzzleSeed::from_phrase("fill-a").to_rng());
        assert!(solution.to_digit_grid().is_complete());
    }

    #[test]
    fn test_fill_is_deterministic_per_seed() {
        let seed = PuzzleSeed::from_phrase("fill-b");
        let a = fill_solution(&mut seed.to_rng());
        let b = fill_solution(&mut seed.to_rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_seeds_give_distinct_solutions() {
        let a = fill_solution(&mut PuzzleSeed::from_phrase("fill-c").to_rng());
        let b = fill_solution(&mut PuzzleSeed::from_phrase("fill-d").to_rng());
        assert_ne!(a, b);
    }

    #[test]
    fn test_fill_respects_existing_values() {
        let mut grid: DigitGrid =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
                .parse()
                .unwrap();
        let givens = grid.clone();

        assert!(fill_from(&mut grid, &mut PuzzleSeed::from_phrase("fill-e").to_rng()));
        assert!(grid.is_complete());
        for pos in Position::ALL {
            if let Some(digit) = givens.get(pos) {
                assert_eq!(grid.get(pos), Some(digit));
            }
        }
        // The classic puzzle has a unique solution
        assert_eq!(
            grid.to_string(),
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
        );
    }

    #[test]
    fn test_fill_reports_dead_ends() {
        // Two cells left in the last row, but both missing digits are blocked
        let mut grid: DigitGrid =
            "534678912672195348198342567859761423426853791713924856961537284287419635345286..."
                .parse()
                .unwrap();
        // Make the remaining cells unfillable by stealing their digits
        grid.set(Position::new(8, 6), Some(Digit::D7));
        assert!(!fill_from(&mut grid, &mut PuzzleSeed::from_phrase("fill-f").to_rng()));
    }
}
