//! Hash builder selection.
//!
//! [`Set`](crate::Set) is generic over its [`BuildHasher`](std::hash::BuildHasher).
//! When no hasher is named, [`DefaultHashBuilder`] is used. Which type that is
//! depends on the enabled features:
//!
//! | Feature  | `DefaultHashBuilder`            |
//! |----------|---------------------------------|
//! | (none)   | [`std::hash::RandomState`]      |
//! | `fxhash` | `rustc_hash::FxBuildHasher`     |
//! | `ahash`  | `ahash::RandomState`            |
//!
//! If both `fxhash` and `ahash` are enabled, `ahash` is used.
//!
//! The fast hashers are not resistant to HashDoS. Only enable them when the
//! elements do not come from untrusted input.

/// The hash builder used by [`Set`](crate::Set) when none is specified.
#[cfg(feature = "ahash")]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hash builder used by [`Set`](crate::Set) when none is specified.
#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hash builder used by [`Set`](crate::Set) when none is specified.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;

static_assertions::assert_impl_all!(DefaultHashBuilder: std::hash::BuildHasher, Default, Clone, Send, Sync);

#[cfg(test)]
mod tests {
    use super::DefaultHashBuilder;
    use rstest::rstest;
    use std::hash::BuildHasher;

    #[rstest]
    fn same_builder_hashes_equal_values_equally() {
        let builder = DefaultHashBuilder::default();
        assert_eq!(builder.hash_one("key"), builder.hash_one("key"));
        assert_eq!(builder.hash_one(42_u64), builder.hash_one(42_u64));
    }

    #[rstest]
    fn cloned_builder_keeps_hashing_consistent() {
        let builder = DefaultHashBuilder::default();
        let cloned = builder.clone();
        assert_eq!(builder.hash_one(7_i32), cloned.hash_one(7_i32));
    }
}
