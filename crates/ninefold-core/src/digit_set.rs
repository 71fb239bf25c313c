//! A set of digits 1-9, optimized for pencil notes and candidate queries.

use std::{fmt, ops};

use serde::{Deserialize, Serialize};

use crate::digit::Digit;

/// A set of [`Digit`]s, represented as a bitset.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively, providing efficient storage and fast set operations.
/// Iteration always yields digits in ascending order, so the set doubles as
/// the canonical ordered representation of a cell's pencil notes.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, DigitSet};
///
/// let mut notes = DigitSet::new();
/// notes.insert(Digit::D1);
/// notes.insert(Digit::D5);
/// notes.insert(Digit::D9);
///
/// assert_eq!(notes.len(), 3);
/// assert!(notes.contains(Digit::D5));
/// assert!(!notes.contains(Digit::D2));
/// ```
///
/// # Set Operations
///
/// ```
/// use ninefold_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// // Union
/// let union = a | b;
/// assert_eq!(
///     union,
///     DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4])
/// );
///
/// // Intersection
/// let intersection = a & b;
/// assert_eq!(intersection, DigitSet::from_iter([Digit::D2, Digit::D3]));
///
/// // Difference
/// let diff = a.difference(b);
/// assert_eq!(diff, DigitSet::from_iter([Digit::D1]));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub struct DigitSet(u16);

/// Bit mask covering all nine digits.
const FULL_BITS: u16 = 0x01ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing all nine digits.
    pub const FULL: Self = Self(FULL_BITS);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set from a raw bit pattern, if every set bit maps to a digit.
    ///
    /// Returns `None` if any bit above bit 8 is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Digit, DigitSet};
    ///
    /// let set = DigitSet::try_from_bits(0b1_0000_0001).unwrap();
    /// assert!(set.contains(Digit::D1));
    /// assert!(set.contains(Digit::D9));
    /// assert!(DigitSet::try_from_bits(0b10_0000_0000).is_none());
    /// ```
    #[must_use]
    pub const fn try_from_bits(bits: u16) -> Option<Self> {
        if bits & !FULL_BITS == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Returns the raw bit pattern of this set.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns `true` if `digit` is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Adds `digit` to the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= Self::bit(digit);
    }

    /// Removes `digit` from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::bit(digit);
    }

    /// Removes `digit` if present, adds it otherwise.
    ///
    /// Returns `true` if the digit is in the set afterwards.
    pub const fn toggle(&mut self, digit: Digit) -> bool {
        self.0 ^= Self::bit(digit);
        self.contains(digit)
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the union of `self` and `other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of `self` and `other`.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }

    const fn bit(digit: Digit) -> u16 {
        1 << digit.offset()
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, "}}")
    }
}

impl ops::BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl ops::BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Some(Digit::from_value(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl From<DigitSet> for u16 {
    fn from(set: DigitSet) -> u16 {
        set.bits()
    }
}

impl TryFrom<u16> for DigitSet {
    type Error = TryFromBitsError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        Self::try_from_bits(bits).ok_or(TryFromBitsError { bits })
    }
}

/// Error returned when a raw bit pattern has bits outside the digit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid digit set bits: {bits:#05x}")]
pub struct TryFromBitsError {
    /// The rejected bit pattern.
    pub bits: u16,
}

#[cfg(test)]
mod tests {
    use crate::digit::Digit::*;

    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        set.insert(D1);
        set.insert(D9);
        assert!(set.contains(D1));
        assert!(set.contains(D9));
        assert!(!set.contains(D5));
        assert_eq!(set.len(), 2);

        set.remove(D1);
        assert!(!set.contains(D1));
        assert_eq!(set.len(), 1);

        // Removing an absent digit is a no-op
        set.remove(D1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_toggle() {
        let mut set = DigitSet::new();
        assert!(set.toggle(D5));
        assert!(set.contains(D5));
        assert!(!set.toggle(D5));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
    }

    #[test]
    fn test_operations() {
        let a = DigitSet::from_iter([D1, D2, D3]);
        let b = DigitSet::from_iter([D2, D3, D4]);

        assert_eq!(a.union(b).len(), 4);
        assert_eq!(a.intersection(b).len(), 2);
        assert_eq!(a.difference(b).len(), 1);
        assert_eq!(a | b, a.union(b));
        assert_eq!(a & b, a.intersection(b));
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);

        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_bits_roundtrip() {
        let set = DigitSet::from_iter([D1, D9]);
        assert_eq!(set.bits(), 0b1_0000_0001);
        assert_eq!(DigitSet::try_from_bits(set.bits()), Some(set));
        assert_eq!(DigitSet::try_from_bits(0xffff), None);

        // Each digit occupies the bit named by its offset
        for digit in Digit::ALL {
            assert_eq!(DigitSet::from_iter([digit]).bits(), 1 << digit.offset());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(DigitSet::EMPTY.to_string(), "{}");
        assert_eq!(DigitSet::from_iter([D3, D1, D7]).to_string(), "{1,3,7}");
    }

    #[test]
    fn test_serde_as_bits() {
        let set = DigitSet::from_iter([D1, D5, D9]);
        let json = serde_json::to_string(&set).unwrap();
        let back: DigitSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
        assert!(serde_json::from_str::<DigitSet>("1024").is_err());
    }
}
