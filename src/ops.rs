//! Operator overloads for [`Set`].
//!
//! Binary operators take both operands by reference and return a new set:
//!
//! | Operator  | Method                                             |
//! |-----------|----------------------------------------------------|
//! | `&a \| &b` | [`union`](Set::union)                             |
//! | `&a & &b` | [`intersection`](Set::intersection)                |
//! | `&a - &b` | [`difference`](Set::difference)                    |
//! | `&a ^ &b` | [`symmetric_difference`](Set::symmetric_difference) |
//!
//! The compound assignment forms mutate the left operand in place:
//! `a |= &b` is [`merge`](Set::merge) and `a -= &b` is [`discard`](Set::discard).
//!
//! # Examples
//!
//! ```rust
//! use mutable_set::Set;
//!
//! let set_a = Set::from([1, 2, 3]);
//! let set_b = Set::from([2, 3, 4]);
//!
//! assert_eq!(&set_a | &set_b, Set::from([1, 2, 3, 4]));
//! assert_eq!(&set_a & &set_b, Set::from([2, 3]));
//! assert_eq!(&set_a - &set_b, Set::from([1]));
//! assert_eq!(&set_a ^ &set_b, Set::from([1, 4]));
//!
//! let mut set_c = set_a.copy();
//! set_c -= &set_b;
//! assert_eq!(set_c, Set::from([1]));
//! ```

use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use crate::Set;

impl<T, S> BitOr<&Set<T, S>> for &Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    /// Returns the union of `self` and `rhs` as a new set.
    #[inline]
    fn bitor(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.union(rhs)
    }
}

impl<T, S> BitAnd<&Set<T, S>> for &Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    /// Returns the intersection of `self` and `rhs` as a new set.
    #[inline]
    fn bitand(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.intersection(rhs)
    }
}

impl<T, S> Sub<&Set<T, S>> for &Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    /// Returns the difference of `self` and `rhs` as a new set.
    #[inline]
    fn sub(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.difference(rhs)
    }
}

impl<T, S> BitXor<&Set<T, S>> for &Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    /// Returns the symmetric difference of `self` and `rhs` as a new set.
    #[inline]
    fn bitxor(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.symmetric_difference(rhs)
    }
}

impl<T, S> BitOrAssign<&Set<T, S>> for Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Adds every element of `rhs` to this set.
    #[inline]
    fn bitor_assign(&mut self, rhs: &Set<T, S>) {
        self.merge(rhs);
    }
}

impl<T, S> SubAssign<&Set<T, S>> for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Removes every element of `rhs` from this set.
    #[inline]
    fn sub_assign(&mut self, rhs: &Set<T, S>) {
        self.discard(rhs);
    }
}

impl<T, S> BitAndAssign<&Set<T, S>> for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Keeps only the elements that are also in `rhs`.
    #[inline]
    fn bitand_assign(&mut self, rhs: &Set<T, S>) {
        self.retain(|element| rhs.contains(element));
    }
}

impl<T, S> BitXorAssign<&Set<T, S>> for Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Keeps the elements that are in exactly one of this set and `rhs`.
    fn bitxor_assign(&mut self, rhs: &Set<T, S>) {
        for element in rhs {
            if !self.remove(element) {
                self.insert(element.clone());
            }
        }
    }
}
