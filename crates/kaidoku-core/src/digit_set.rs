//! A set of digits 1-9 backed by a `u16` bitset.

use std::{fmt, iter::FusedIterator, ops};

use crate::digit::Digit;

/// A set of [`Digit`]s, used for per-cell candidate sets.
///
/// Bit `i` of the backing `u16` represents digit `i + 1`, so membership
/// tests and the set operations are single integer instructions. Iteration
/// yields digits in ascending order.
///
/// # Examples
///
/// ```
/// use kaidoku_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::new();
/// set.insert(Digit::D2);
/// set.insert(Digit::D7);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Digit::D7));
/// assert!(!set.contains(Digit::D1));
/// ```
///
/// # Set operations
///
/// ```
/// use kaidoku_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a.difference(b), DigitSet::from_elem(Digit::D1));
/// assert_eq!(!DigitSet::FULL, DigitSet::EMPTY);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: 0x01ff };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self {
            bits: Self::bit(digit),
        }
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Adds a digit to the set.
    ///
    /// Returns whether the digit was newly inserted.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let missing = !self.contains(digit);
        self.bits |= Self::bit(digit);
        missing
    }

    /// Removes a digit from the set.
    ///
    /// Returns whether the digit was present.
    pub fn remove(&mut self, digit: Digit) -> bool {
        let present = self.contains(digit);
        self.bits &= !Self::bit(digit);
        present
    }

    /// Returns whether the set contains `digit`.
    #[must_use]
    #[inline]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the sole member of the set, or `None` if the set does not
    /// contain exactly one digit.
    ///
    /// This is the naked-single test: a blank cell whose candidate set
    /// answers `Some` here has a forced value.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaidoku_core::{Digit, DigitSet};
    ///
    /// assert_eq!(DigitSet::from_elem(Digit::D4).as_single(), Some(Digit::D4));
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.len() != 1 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = (self.bits.trailing_zeros() + 1) as u8;
        Digit::try_from_value(value)
    }

    /// Returns the digits present in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the digits present in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the digits present in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
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

impl ops::Not for DigitSet {
    type Output = Self;

    /// Complement within the nine digits: `!FULL` is `EMPTY`.
    fn not(self) -> Self {
        Self::FULL.difference(self)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::value)).finish()
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = (self.bits.trailing_zeros() + 1) as u8;
        self.bits &= self.bits - 1;
        Digit::try_from_value(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::Digit::{self, *};

    #[test]
    fn test_insert_remove() {
        let mut set = DigitSet::new();
        assert!(set.insert(D1));
        assert!(!set.insert(D1));
        assert!(set.insert(D9));
        assert_eq!(set.len(), 2);
        assert!(set.contains(D1));
        assert!(set.contains(D9));
        assert!(!set.contains(D5));

        assert!(set.remove(D1));
        assert!(!set.remove(D1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_iter_and_order() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        assert_eq!(set.len(), 4);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_operations() {
        let a = DigitSet::from_iter([D1, D2, D3]);
        let b = DigitSet::from_iter([D2, D3, D4]);

        assert_eq!(a.union(b), a | b);
        assert_eq!((a | b).len(), 4);
        assert_eq!(a.intersection(b), a & b);
        assert_eq!((a & b).len(), 2);
        assert_eq!(a.difference(b), DigitSet::from_elem(D1));
        assert_eq!(!a, DigitSet::from_iter([D4, D5, D6, D7, D8, D9]));
        assert_eq!(!DigitSet::EMPTY, DigitSet::FULL);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::from_elem(D7).as_single(), Some(D7));
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::from_iter([D1, D2]).as_single(), None);
        for digit in Digit::ALL {
            assert_eq!(DigitSet::from_elem(digit).as_single(), Some(digit));
        }
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
        assert_eq!(DigitSet::default(), DigitSet::new());
    }

    #[test]
    fn test_debug_format() {
        let set = DigitSet::from_iter([D3, D1]);
        assert_eq!(format!("{set:?}"), "{1, 3}");
    }
}
