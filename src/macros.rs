//! Set literal macro.

/// Creates a [`Set`](crate::Set) from a list of elements.
///
/// Duplicates collapse to a single element. With no arguments the macro
/// creates an empty set.
///
/// # Examples
///
/// ```rust
/// use mutable_set::set;
///
/// let set = set![1, 2, 2, 3];
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(&2));
///
/// let empty: mutable_set::Set<i32> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Set::from([$($element),+])
    };
}
