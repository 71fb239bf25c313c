//! Reproducible seeds for puzzle generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated puzzle.
///
/// The same seed always reproduces the same solution and the same carving
/// order, which makes puzzles shareable and bug reports replayable. The text
/// form is 64 lowercase hex characters.
///
/// # Examples
///
/// ```
/// use ninefold_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef".parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
/// );
/// # Ok::<(), ninefold_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase.
    ///
    /// The phrase is hashed with SHA-256, so any string maps to a full-width
    /// seed. Useful for "daily puzzle" style sharing where the phrase is a
    /// date or a name.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_generator::PuzzleSeed;
    ///
    /// let a = PuzzleSeed::from_phrase("2026-08-25");
    /// let b = PuzzleSeed::from_phrase("2026-08-25");
    /// assert_eq!(a, b);
    /// assert_ne!(a, PuzzleSeed::from_phrase("2026-08-26"));
    /// ```
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the deterministic random number stream for this seed.
    #[must_use]
    pub fn to_rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 32];
        let mut count = 0;
        for ch in s.chars() {
            let Some(value) = ch.to_digit(16) else {
                return Err(ParseSeedError::BadChar { ch });
            };
            if count < 64 {
                #[expect(clippy::cast_possible_truncation)]
                let nibble = value as u8;
                bytes[count / 2] = (bytes[count / 2] << 4) | nibble;
            }
            count += 1;
        }
        if count != 64 {
            return Err(ParseSeedError::BadLength { len: count });
        }
        Ok(Self(bytes))
    }
}

impl From<PuzzleSeed> for String {
    fn from(seed: PuzzleSeed) -> String {
        seed.to_string()
    }
}

impl TryFrom<String> for PuzzleSeed {
    type Error = ParseSeedError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Errors from parsing the hex form of a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text did not contain exactly 64 hex digits.
    #[display("invalid seed length: expected 64 hex digits, got {len}")]
    BadLength {
        /// Number of hex digits found.
        len: usize,
    },
    /// A character was not a hex digit.
    #[display("invalid seed character: {ch:?}")]
    BadChar {
        /// The rejected character.
        ch: char,
    },
}
