//! Exhaustive solution counting for uniqueness checks.

use ninefold_core::{Digit, DigitGrid, rules};

/// Counts the solutions of `grid` by exhaustive backtracking.
///
/// A `limit` of zero counts every solution. A non-zero `limit` stops the
/// search as soon as that many solutions have been found, which is what makes
/// carving affordable: [`has_unique_solution`] only ever needs to know
/// whether a second solution exists, not how many there are.
///
/// # Examples
///
/// ```
/// use ninefold_core::DigitGrid;
/// use ninefold_generator::count_solutions;
///
/// let puzzle: DigitGrid =
///     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
///         .parse()?;
/// assert_eq!(count_solutions(&puzzle, 0), 1);
/// # Ok::<(), ninefold_core::GridError>(())
/// ```
#[must_use]
pub fn count_solutions(grid: &DigitGrid, limit: usize) -> usize {
    let mut scratch = grid.clone();
    let mut count = 0;
    count_from(&mut scratch, limit, &mut count);
    count
}

fn count_from(grid: &mut DigitGrid, limit: usize, count: &mut usize) {
    let Some(pos) = grid.first_empty() else {
        *count += 1;
        return;
    };
    for digit in Digit::ALL {
        if rules::can_place(grid, pos, digit) {
            grid.set(pos, Some(digit));
            count_from(grid, limit, count);
            grid.set(pos, None);
            if limit != 0 && *count >= limit {
                return;
            }
        }
    }
}

/// Returns `true` if `grid` has exactly one solution.
///
/// The search is capped at two solutions, so this is cheap even for grids
/// with many solutions.
#[must_use]
pub fn has_unique_solution(grid: &DigitGrid) -> bool {
    count_solutions(grid, 2) == 1
}

#[cfg(test)]
mod tests {
    use ninefold_core::Position;

    use super::*;

    const PUZZLE: &str = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const SOLVED: &str = "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_unique_puzzle_counts_one() {
        let grid: DigitGrid = PUZZLE.parse().unwrap();
        assert_eq!(count_solutions(&grid, 0), 1);
        assert_eq!(count_solutions(&grid, 2), 1);
        assert!(has_unique_solution(&grid));
    }

    #[test]
    fn test_complete_grid_counts_one() {
        let grid: DigitGrid = SOLVED.parse().unwrap();
        assert_eq!(count_solutions(&grid, 0), 1);
    }

    #[test]
    fn test_contradictory_grid_counts_zero() {
        let mut grid: DigitGrid = PUZZLE.parse().unwrap();
        // Write a digit that conflicts with the solution's forced value
        grid.set(Position::new(0, 2), Some(Digit::D1));
        assert_eq!(count_solutions(&grid, 0), 0);
        assert!(!has_unique_solution(&grid));
    }

    #[test]
    fn test_limit_stops_early() {
        // Nine givens can never pin down a unique solution
        let mut sparse = DigitGrid::new();
        let full: DigitGrid = SOLVED.parse().unwrap();
        for col in 0..9 {
            let pos = Position::new(0, col);
            sparse.set(pos, full.get(pos));
        }

        assert_eq!(count_solutions(&sparse, 2), 2);
        assert_eq!(count_solutions(&sparse, 5), 5);
        assert!(!has_unique_solution(&sparse));
    }

    #[test]
    fn test_search_leaves_input_unchanged() {
        let grid: DigitGrid = PUZZLE.parse().unwrap();
        let before = grid.clone();
        let _ = count_solutions(&grid, 0);
        assert_eq!(grid, before);
    }
}
