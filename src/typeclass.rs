//! Algebraic structure of sets.
//!
//! Sets under union form a monoid: union is associative and the empty set
//! is its identity. This module provides the [`Semigroup`] and [`Monoid`]
//! traits and implements them for [`Set`].
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))   // Associativity
//! Self::empty().combine(a) == a                          // Left identity
//! a.combine(Self::empty()) == a                          // Right identity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use mutable_set::Set;
//! use mutable_set::typeclass::{Monoid, Semigroup};
//!
//! let sets = vec![Set::from([1, 2]), Set::from([2, 3]), Set::from([4])];
//! assert_eq!(Set::combine_all(sets), Set::from([1, 2, 3, 4]));
//!
//! let none: Vec<Set<i32>> = vec![];
//! assert!(Set::combine_all(none).is_empty());
//! ```

use std::hash::{BuildHasher, Hash};

use crate::Set;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    /// use mutable_set::typeclass::Semigroup;
    ///
    /// let sets = vec![Set::from([1]), Set::from([2])];
    /// assert_eq!(Set::reduce_all(sets), Some(Set::from([1, 2])));
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// Set Implementation
// =============================================================================

/// Union is the semigroup operation; the receiver's hash builder is kept.
impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> Semigroup for Set<T, S> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone + Default> Monoid for Set<T, S> {
    fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn combine_is_union() {
        let combined = Set::from([1, 2]).combine(Set::from([2, 3]));
        assert_eq!(combined, Set::from([1, 2, 3]));
    }

    #[rstest]
    fn combine_ref_preserves_originals() {
        let left = Set::from([1]);
        let right = Set::from([2]);
        let combined = left.combine_ref(&right);

        assert_eq!(left, Set::from([1]));
        assert_eq!(right, Set::from([2]));
        assert_eq!(combined, Set::from([1, 2]));
    }

    #[rstest]
    fn empty_is_identity() {
        let set = Set::from([1, 2, 3]);
        assert_eq!(Set::empty().combine(set.copy()), set);
        assert_eq!(set.copy().combine(Set::empty()), set);
    }

    #[rstest]
    fn is_empty_value_detects_identity() {
        assert!(Set::<i32>::empty().is_empty_value());
        assert!(!Set::from([1]).is_empty_value());
    }

    #[rstest]
    fn reduce_all_of_nothing_is_none() {
        let sets: Vec<Set<i32>> = vec![];
        assert_eq!(Set::reduce_all(sets), None);
    }
}
