//! Mutable unordered hash set.
//!
//! This module provides [`Set`], a mutable collection of distinct elements
//! with the usual set algebra.
//!
//! # Overview
//!
//! Operations fall into four groups:
//!
//! - Membership: [`contains`](Set::contains), [`len`](Set::len), [`is_empty`](Set::is_empty)
//! - In-place mutators: [`insert`](Set::insert), [`remove`](Set::remove),
//!   [`merge`](Set::merge), [`discard`](Set::discard)
//! - Combinators returning a new set: [`copy`](Set::copy), [`union`](Set::union),
//!   [`intersection`](Set::intersection), [`difference`](Set::difference),
//!   [`symmetric_difference`](Set::symmetric_difference)
//! - Predicates: [`is_subset`](Set::is_subset), [`is_superset`](Set::is_superset),
//!   [`is_disjoint`](Set::is_disjoint)
//!
//! Combinators never share storage with their operands: mutating the result
//! does not affect the operands, and the other way around.
//!
//! # Examples
//!
//! ```rust
//! use mutable_set::Set;
//!
//! let mut set = Set::from([1, 2, 3]);
//! set.merge(&Set::from([2, 3, 4]));
//! assert_eq!(set.len(), 4);
//!
//! set.discard(&set.copy());
//! assert!(set.is_empty());
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use mutable_set::Set;
//!
//! let set_a = Set::from([1, 2, 3]);
//! let set_b = Set::from([2, 3, 4]);
//!
//! let union = set_a.union(&set_b);               // {1, 2, 3, 4}
//! let intersection = set_a.intersection(&set_b); // {2, 3}
//! let difference = set_a.difference(&set_b);     // {1}
//!
//! assert_eq!(union.len(), 4);
//! assert_eq!(intersection.len(), 2);
//! assert_eq!(difference.len(), 1);
//! ```

use std::borrow::Borrow;
use std::collections::{HashSet, hash_set};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};

use crate::hash::DefaultHashBuilder;

// =============================================================================
// Set Definition
// =============================================================================

/// A mutable, unordered collection of distinct elements.
///
/// Elements must implement [`Eq`] and [`Hash`]. The hash builder `S` defaults
/// to [`DefaultHashBuilder`].
///
/// # Logic errors
///
/// It is a logic error for an element to be modified in such a way that its
/// hash or its equality changes while it is in the set, which is only
/// possible through interior mutability (`Cell`, `RefCell`, ...). It is
/// likewise a logic error for `Hash` and `Eq` to disagree
/// (`a == b` must imply `hash(a) == hash(b)`). The behavior resulting from
/// such a logic error is unspecified, but it never leads to undefined behavior.
///
/// # Time Complexity
///
/// | Operation              | Complexity         |
/// |------------------------|--------------------|
/// | `new`                  | O(1)               |
/// | `contains`             | O(1) expected      |
/// | `insert`               | O(1) expected      |
/// | `remove`               | O(1) expected      |
/// | `len` / `is_empty`     | O(1)               |
/// | `merge`                | O(m)               |
/// | `discard`              | O(min(n, m))       |
/// | `union`                | O(n + m)           |
/// | `intersection`         | O(min(n, m))       |
/// | `difference`           | O(n)               |
/// | `is_subset`            | O(n)               |
/// | `freeze`               | O(n)               |
///
/// # Examples
///
/// ```rust
/// use mutable_set::Set;
///
/// let mut set = Set::new();
/// assert!(set.insert("apple"));
/// assert!(!set.insert("apple"));
/// assert!(set.contains("apple"));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone)]
pub struct Set<T, S = DefaultHashBuilder> {
    inner: HashSet<T, S>,
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

impl<T> Set<T> {
    /// Creates a new empty set using the default hash builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.len(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T: Eq + Hash> Set<T> {
    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let set = Set::singleton(42);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&42));
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.insert(element);
        set
    }
}

impl<T, S> Set<T, S> {
    /// Creates an empty set which uses `hasher` to hash its elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    /// use std::hash::RandomState;
    ///
    /// let mut set = Set::with_hasher(RandomState::new());
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashSet::with_hasher(hasher),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements,
    /// using `hasher` to hash them.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            inner: HashSet::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of distinct elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let set = Set::from([1, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(42);
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the set's hash builder.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Returns an iterator over the elements of the set, in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let set = Set::from([1, 2, 3]);
    /// let total: i32 = set.iter().sum();
    /// assert_eq!(total, 6);
    /// ```
    #[inline]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.inner.iter(),
        }
    }

    /// Removes every element, keeping the allocated memory for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let mut set = Set::from([1, 2, 3, 4, 5, 6]);
    /// set.retain(|element| element % 2 == 0);
    /// assert_eq!(set, Set::from([2, 4, 6]));
    /// ```
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.retain(predicate);
    }

    /// Consumes the set and returns its elements, in unspecified order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_iter().collect()
    }
}

impl<T: Eq + Hash, S: BuildHasher> Set<T, S> {
    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let set = Set::from(["hello".to_string(), "world".to_string()]);
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("other"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }

    /// Inserts an element into the set.
    ///
    /// Returns `true` if the element was newly inserted, `false` if an equal
    /// element was already present. In the latter case the stored element is
    /// kept and the set is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(1));   // New element
    /// assert!(!set.insert(1));  // Already present
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        self.inner.insert(element)
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present and removed, `false` if it
    /// was not a member (the set is then unchanged).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let mut set = Set::from([1, 2]);
    /// assert!(set.remove(&1));   // Was present
    /// assert!(!set.remove(&1));  // Already removed
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element)
    }

    /// Removes an element from the set and returns the stored value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let mut set = Set::from(["key".to_string()]);
    /// assert_eq!(set.take("key"), Some("key".to_string()));
    /// assert_eq!(set.take("key"), None);
    /// ```
    pub fn take<Q>(&mut self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.take(element)
    }

    /// Removes from `self` every element that is also in `other`.
    ///
    /// Elements of `other` that are not in `self` are ignored, and `other`
    /// is not modified. This is the in-place form of
    /// [`difference`](Self::difference).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let mut set = Set::from([1, 2, 3]);
    /// set.discard(&Set::from([2, 3, 4]));
    /// assert_eq!(set, Set::from([1]));
    /// ```
    pub fn discard(&mut self, other: &Self) {
        // Walk whichever side is smaller.
        if other.len() < self.len() {
            for element in &other.inner {
                self.inner.remove(element);
            }
        } else {
            self.inner.retain(|element| !other.inner.contains(element));
        }
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// The relation is non-strict: every set is a subset of itself, and the
    /// empty set is a subset of every set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let subset = Set::from([1, 2, 3]);
    /// let superset = Set::from([1, 2, 3, 4]);
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// assert!(subset.is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }

        self.inner
            .iter()
            .all(|element| other.inner.contains(element))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    ///
    /// Equivalent to `other.is_subset(self)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let superset = Set::from([1, 2, 3, 4]);
    /// let subset = Set::from([1, 2, 3]);
    ///
    /// assert!(superset.is_superset(&subset));
    /// assert!(!subset.is_superset(&superset));
    /// ```
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let set_a = Set::from([1, 2]);
    /// assert!(set_a.is_disjoint(&Set::from([3, 4])));
    /// assert!(!set_a.is_disjoint(&Set::from([2, 3])));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        !smaller
            .inner
            .iter()
            .any(|element| larger.inner.contains(element))
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher> Set<T, S> {
    /// Inserts into `self` every element of `other` that is not already
    /// present.
    ///
    /// Elements already in `self` are left untouched, and `other` is not
    /// modified. This is the in-place form of [`union`](Self::union).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let mut set = Set::from([1, 2, 3]);
    /// let other = Set::from([2, 3, 4]);
    /// set.merge(&other);
    ///
    /// assert_eq!(set.len(), 4);
    /// assert_eq!(other.len(), 3);
    /// ```
    pub fn merge(&mut self, other: &Self) {
        for element in &other.inner {
            if !self.inner.contains(element) {
                self.inner.insert(element.clone());
            }
        }
    }

    /// Returns a snapshot of the elements as a vector.
    ///
    /// Every element appears exactly once. The order is unspecified and may
    /// differ between calls and between equal sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let set = Set::from([3, 1, 2]);
    /// let mut elements = set.freeze();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn freeze(&self) -> Vec<T> {
        self.inner.iter().cloned().collect()
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> Set<T, S> {
    /// Returns a new set with the same elements, backed by its own storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let original = Set::from([1, 2, 3]);
    /// let mut copy = original.copy();
    /// copy.insert(4);
    ///
    /// assert_eq!(original.len(), 3); // Original unchanged
    /// assert_eq!(copy.len(), 4);
    /// ```
    #[must_use]
    pub fn copy(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }

    /// Returns a new set holding every element that is in `self`, `other`,
    /// or both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let set_a = Set::from([1, 2, 3]);
    /// let set_b = Set::from([2, 3, 4]);
    ///
    /// let union = set_a.union(&set_b);
    /// assert_eq!(union, Set::from([1, 2, 3, 4]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity_and_hasher(
            self.len().max(other.len()),
            self.inner.hasher().clone(),
        );
        result.inner.extend(self.inner.iter().cloned());
        result.merge(other);
        result
    }

    /// Returns a new set holding the elements present in both `self` and
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let set_a = Set::from([1, 2, 3]);
    /// let set_b = Set::from([2, 3, 4]);
    ///
    /// assert_eq!(set_a.intersection(&set_b), Set::from([2, 3]));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = Self::with_hasher(self.inner.hasher().clone());
        for element in &smaller.inner {
            if larger.inner.contains(element) {
                result.inner.insert(element.clone());
            }
        }
        result
    }

    /// Returns a new set holding the elements of `self` that are not in
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let set_a = Set::from([1, 2, 3]);
    /// let set_b = Set::from([2, 3, 4]);
    ///
    /// assert_eq!(set_a.difference(&set_b), Set::from([1]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Self::with_hasher(self.inner.hasher().clone());
        for element in &self.inner {
            if !other.inner.contains(element) {
                result.inner.insert(element.clone());
            }
        }
        result
    }

    /// Returns a new set holding the elements that are in exactly one of
    /// `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mutable_set::Set;
    ///
    /// let set_a = Set::from([1, 2, 3]);
    /// let set_b = Set::from([2, 3, 4]);
    ///
    /// assert_eq!(set_a.symmetric_difference(&set_b), Set::from([1, 4]));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.difference(other);
        for element in &other.inner {
            if !self.inner.contains(element) {
                result.inner.insert(element.clone());
            }
        }
        result
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the elements of a [`Set`].
///
/// Created by [`Set::iter`]. The order is unspecified.
#[derive(Clone)]
pub struct SetIterator<'a, T> {
    inner: hash_set::Iter<'a, T>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIterator<'_, T> {}

/// An owning iterator over the elements of a [`Set`].
pub struct SetIntoIterator<T> {
    inner: hash_set::IntoIter<T>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash, S: BuildHasher> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a, T: 'a + Eq + Hash + Clone, S: BuildHasher> Extend<&'a T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for element in iter {
            if !self.inner.contains(element) {
                self.inner.insert(element.clone());
            }
        }
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    /// Builds a set from an array; duplicates collapse to one element.
    fn from(elements: [T; N]) -> Self {
        let mut set = Self::with_capacity(N);
        set.extend(elements);
        set
    }
}

impl<T, S> From<HashSet<T, S>> for Set<T, S> {
    #[inline]
    fn from(inner: HashSet<T, S>) -> Self {
        Self { inner }
    }
}

impl<T, S> From<Set<T, S>> for HashSet<T, S> {
    #[inline]
    fn from(set: Set<T, S>) -> Self {
        set.inner
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash, S: BuildHasher> PartialEq for Set<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for Set<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sorted(set: &Set<i32>) -> Vec<i32> {
        let mut elements = set.freeze();
        elements.sort_unstable();
        elements
    }

    #[rstest]
    fn test_new_creates_empty() {
        let set: Set<i32> = Set::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[rstest]
    fn test_insert_and_contains() {
        let mut set = Set::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn test_remove() {
        let mut set = Set::from([1, 2]);
        assert!(set.remove(&1));
        assert!(!set.contains(&1));
        assert!(!set.remove(&1));
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn test_merge_keeps_existing_and_adds_missing() {
        let mut set = Set::from([1, 2, 3]);
        set.merge(&Set::from([2, 3, 4]));
        assert_eq!(sorted(&set), vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[case::other_smaller(vec![1, 2, 3, 4, 5], vec![2, 9], vec![1, 3, 4, 5])]
    #[case::other_larger(vec![1, 2], vec![2, 3, 4, 5, 6], vec![1])]
    #[case::equal_size(vec![1, 2, 3], vec![3, 4, 5], vec![1, 2])]
    fn test_discard_both_walk_directions(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        let mut set: Set<i32> = left.into_iter().collect();
        let other: Set<i32> = right.into_iter().collect();
        let other_len = other.len();

        set.discard(&other);

        assert_eq!(sorted(&set), expected);
        assert_eq!(other.len(), other_len);
    }

    #[rstest]
    fn test_union() {
        let union = Set::from([1, 2, 3]).union(&Set::from([2, 3, 4]));
        assert_eq!(sorted(&union), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_intersection() {
        let intersection = Set::from([1, 2, 3]).intersection(&Set::from([2, 3, 4]));
        assert_eq!(sorted(&intersection), vec![2, 3]);
    }

    #[rstest]
    fn test_difference() {
        let difference = Set::from([1, 2, 3]).difference(&Set::from([2, 3, 4]));
        assert_eq!(sorted(&difference), vec![1]);
    }

    #[rstest]
    fn test_symmetric_difference() {
        let result = Set::from([1, 2, 3]).symmetric_difference(&Set::from([2, 3, 4]));
        assert_eq!(sorted(&result), vec![1, 4]);
    }

    #[rstest]
    fn test_is_subset_rejects_larger_set_early() {
        let small = Set::from([1]);
        let large = Set::from([1, 2]);
        assert!(!large.is_subset(&small));
        assert!(small.is_subset(&large));
    }

    #[rstest]
    fn test_is_disjoint() {
        assert!(Set::from([1, 2]).is_disjoint(&Set::from([3, 4])));
        assert!(!Set::from([1, 2]).is_disjoint(&Set::from([2, 3, 4])));
        assert!(Set::<i32>::new().is_disjoint(&Set::new()));
    }

    #[rstest]
    fn test_copy_does_not_share_storage() {
        let original = Set::from([1, 2, 3]);
        let mut copy = original.copy();
        copy.remove(&1);
        copy.insert(10);

        assert_eq!(sorted(&original), vec![1, 2, 3]);
        assert_eq!(sorted(&copy), vec![2, 3, 10]);
    }

    #[rstest]
    fn test_extend_by_reference_skips_existing() {
        let mut set = Set::from([1, 2]);
        let extra = [2, 3, 3];
        set.extend(extra.iter());
        assert_eq!(sorted(&set), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_hash_set_conversions() {
        let standard: HashSet<i32> = [1, 2, 3].into_iter().collect();
        let set: Set<i32, std::hash::RandomState> = Set::from(standard.clone());
        let back: HashSet<i32> = set.into();
        assert_eq!(back, standard);
    }

    #[rstest]
    fn test_iterators_report_exact_length() {
        let set = Set::from([1, 2, 3]);
        assert_eq!(set.iter().len(), 3);
        assert_eq!(set.clone().into_iter().len(), 3);
    }

    #[rstest]
    fn test_display_empty_set() {
        let set: Set<i32> = Set::new();
        assert_eq!(format!("{set}"), "{}");
    }

    #[rstest]
    fn test_display_single_element_set() {
        assert_eq!(format!("{}", Set::singleton(42)), "{42}");
    }

    #[rstest]
    fn test_display_multiple_elements_set() {
        let set = Set::from([1, 2, 3]);
        let display = format!("{set}");
        assert!(display.starts_with('{'));
        assert!(display.ends_with('}'));
        assert!(display.contains('1'));
        assert!(display.contains('2'));
        assert!(display.contains('3'));
        assert_eq!(display.matches(", ").count(), 2);
    }

    #[rstest]
    fn test_debug_uses_set_notation() {
        assert_eq!(format!("{:?}", Set::singleton("a")), "{\"a\"}");
    }
}
