//! # mutable-set
//!
//! A generic, mutable, unordered set with the usual set algebra.
//!
//! ## Overview
//!
//! [`Set`] holds distinct elements of any type implementing [`Eq`] and
//! [`Hash`](std::hash::Hash). It provides:
//!
//! - **Membership**: `contains`, `len`, `is_empty`
//! - **In-place mutation**: `insert`, `remove`, `merge` (in-place union),
//!   `discard` (in-place difference)
//! - **Combinators**: `copy`, `union`, `intersection`, `difference`,
//!   `symmetric_difference`, each returning an independent set
//! - **Relations**: `is_subset`, `is_superset`, `is_disjoint` (non-strict)
//! - **Snapshots**: `freeze` returns the elements as a `Vec` in unspecified order
//!
//! A set is a plain value with no internal locking. Mutation needs
//! `&mut Set`; share a set across threads behind a lock of your choice.
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup` / `Monoid` traits with set union (default)
//! - `fxhash`: use `rustc-hash` as the default hash builder
//! - `ahash`: use `ahash` as the default hash builder
//! - `full`: Enable all optional functionality (hasher choice is separate)
//!
//! ## Example
//!
//! ```rust
//! use mutable_set::prelude::*;
//!
//! let mut fruits = set!["apple", "banana"];
//! assert!(fruits.insert("cherry"));
//! assert!(!fruits.insert("apple"));
//!
//! let citrus = set!["lemon", "cherry"];
//! assert_eq!(fruits.intersection(&citrus), set!["cherry"]);
//! assert!(set!["apple"].is_subset(&fruits));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use mutable_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::hash::DefaultHashBuilder;
    pub use crate::set;
    pub use crate::set::{Set, SetIntoIterator, SetIterator};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

mod macros;

pub mod hash;
pub mod ops;
pub mod set;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use hash::DefaultHashBuilder;
pub use set::{Set, SetIntoIterator, SetIterator};
