//! A set of digits 1-9, backed by a 9-bit mask.
//!
//! [`DigitSet`] is the candidate-set representation used by the solution
//! counter: for an empty cell it holds the digits not yet present in the
//! cell's row, column, and box.
//!
//! # Examples
//!
//! ```
//! use sudocarve_core::{Digit, DigitSet};
//!
//! let mut set = DigitSet::FULL;
//! set.remove(Digit::D5);
//! set.remove(Digit::D7);
//!
//! assert_eq!(set.len(), 7);
//! assert!(!set.contains(Digit::D5));
//! assert!(set.contains(Digit::D1));
//! ```

use crate::Digit;

/// A set of digits 1-9 represented as bits 0-8 of a `u16`.
///
/// Provides constant-time membership tests and set operations, and iterates
/// digits in ascending order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const FULL_BITS: u16 = 0x1ff;

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

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::bit(digit);
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
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

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the single digit in the set, or `None` if the set does not
    /// contain exactly one digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudocarve_core::{Digit, DigitSet};
    ///
    /// let mut set = DigitSet::new();
    /// set.insert(Digit::D4);
    /// assert_eq!(set.as_single(), Some(Digit::D4));
    ///
    /// set.insert(Digit::D6);
    /// assert_eq!(set.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.len() != 1 {
            return None;
        }
        self.into_iter().next()
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl std::ops::BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let lowest = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Digit::try_from_value(u8::try_from(lowest).ok()? + 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = DigitSet::new();
        assert!(set.is_empty());

        set.insert(Digit::D1);
        set.insert(Digit::D9);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Digit::D1));
        assert!(set.contains(Digit::D9));
        assert!(!set.contains(Digit::D5));

        set.remove(Digit::D1);
        assert!(!set.contains(Digit::D1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn full_contains_every_digit() {
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn iterates_in_ascending_order() {
        let set: DigitSet = [Digit::D7, Digit::D2, Digit::D5].into_iter().collect();
        let digits: Vec<_> = set.into_iter().collect();
        assert_eq!(digits, vec![Digit::D2, Digit::D5, Digit::D7]);
    }

    #[test]
    fn difference_and_operators() {
        let a: DigitSet = [Digit::D1, Digit::D2, Digit::D3].into_iter().collect();
        let b: DigitSet = [Digit::D2, Digit::D3, Digit::D4].into_iter().collect();

        let union: Vec<_> = (a | b).into_iter().collect();
        assert_eq!(union, vec![Digit::D1, Digit::D2, Digit::D3, Digit::D4]);

        let inter: Vec<_> = (a & b).into_iter().collect();
        assert_eq!(inter, vec![Digit::D2, Digit::D3]);

        let diff: Vec<_> = a.difference(b).into_iter().collect();
        assert_eq!(diff, vec![Digit::D1]);
    }

    #[test]
    fn as_single() {
        let mut set = DigitSet::new();
        assert_eq!(set.as_single(), None);
        set.insert(Digit::D8);
        assert_eq!(set.as_single(), Some(Digit::D8));
        set.insert(Digit::D3);
        assert_eq!(set.as_single(), None);
    }

    proptest! {
        #[test]
        fn collect_round_trips(values in proptest::collection::btree_set(1u8..=9, 0..=9)) {
            let set: DigitSet = values
                .iter()
                .map(|v| Digit::try_from_value(*v).unwrap())
                .collect();
            prop_assert_eq!(set.len(), values.len());
            let back: Vec<u8> = set.into_iter().map(Digit::value).collect();
            let expected: Vec<u8> = values.into_iter().collect();
            prop_assert_eq!(back, expected);
        }
    }
}
