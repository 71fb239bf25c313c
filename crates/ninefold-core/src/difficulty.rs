//! Difficulty levels and their carving profiles.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// How hard a generated puzzle should be.
///
/// Each difficulty maps to a [`DifficultyProfile`] that tells the generator
/// how many givens to leave on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Nearly complete boards, suitable for onboarding.
    Easy,
    /// A standard puzzle with 35-39 givens.
    Medium,
    /// Placeholder profile, currently as dense as easy.
    Hard,
    /// Placeholder profile, currently as dense as easy.
    Expert,
}

/// Carving parameters for one [`Difficulty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Fewest givens the generator may leave on the board.
    pub min_clues: u8,
    /// Most givens the generator may leave on the board.
    pub max_clues: u8,
    /// Whether removals keep 180-degree rotational symmetry.
    pub symmetric: bool,
    /// Whether the carved puzzle must keep exactly one solution.
    pub unique_solution: bool,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the carving profile for this difficulty.
    #[must_use]
    pub const fn profile(self) -> DifficultyProfile {
        // TODO: tune the easy/hard/expert clue counts; 78 givens leaves at
        // most three holes, so medium is the only profile that carves a real
        // puzzle today.
        match self {
            Self::Easy => DifficultyProfile {
                min_clues: 78,
                max_clues: 78,
                symmetric: true,
                unique_solution: true,
            },
            Self::Medium => DifficultyProfile {
                min_clues: 35,
                max_clues: 39,
                symmetric: true,
                unique_solution: true,
            },
            Self::Hard => DifficultyProfile {
                min_clues: 78,
                max_clues: 78,
                symmetric: true,
                unique_solution: true,
            },
            Self::Expert => DifficultyProfile {
                min_clues: 78,
                max_clues: 78,
                symmetric: true,
                unique_solution: true,
            },
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_within_board_bounds() {
        for difficulty in Difficulty::ALL {
            let profile = difficulty.profile();
            assert!(profile.min_clues <= profile.max_clues);
            assert!(profile.max_clues <= 81);
            // 17 givens is the known minimum for a unique puzzle
            assert!(
                profile.min_clues >= 17,
                "{difficulty} profile allows fewer than 17 givens"
            );
        }
    }

    #[test]
    fn test_medium_carves_a_real_puzzle() {
        let profile = Difficulty::Medium.profile();
        assert_eq!(profile.min_clues, 35);
        assert_eq!(profile.max_clues, 39);
        assert!(profile.symmetric);
        assert!(profile.unique_solution);
    }

    #[test]
    fn test_display() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::Expert.to_string(), "expert");
    }
}
