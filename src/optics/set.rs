//! Optics for sets: membership as a lens, element remapping as a setter.
//!
//! - [`contains`]: a `Lens<S, bool>` that reads whether a key is in the set
//!   and inserts or removes the key when written.
//! - [`members`]: a `Setter<S, K>` that maps a function over every element.
//!   It is deliberately not a [`Lens`] or [`Traversal`]: a non-injective
//!   function merges elements, so the result cannot be read back element by
//!   element.
//! - [`set_of`]: collects every focus of a traversal into a `BTreeSet`.
//!
//! Both optics work for any set type implementing [`Membership`]; `BTreeSet`
//! and `HashSet` (with any hasher) are provided. With the `fxhash` feature,
//! [`FxHashSet`] is re-exported for sets keyed by small integers. The set is
//! assumed to carry no information beyond which elements it holds.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeSet;
//! use optics_extra::optics::{Lens, Setter};
//! use optics_extra::optics::set::{contains, members};
//!
//! let numbers: BTreeSet<i32> = [1, 2, 3, 4].into_iter().collect();
//!
//! assert!(contains(3).get(&numbers));
//! let without_three = contains(3).set(numbers.clone(), false);
//! assert_eq!(without_three, BTreeSet::from([1, 2, 4]));
//!
//! let shifted = members().over(numbers, |x| x + 1);
//! assert_eq!(shifted, BTreeSet::from([2, 3, 4, 5]));
//! ```

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use super::{Lens, Setter, Traversal};

#[cfg(feature = "fxhash")]
pub use rustc_hash::FxHashSet;

/// A set primitive: membership test, insertion and removal by value.
///
/// `insert_member` and `remove_member` are idempotent.
pub trait Membership<K>: Sized {
    /// Returns `true` if `key` is an element of the set.
    fn is_member(&self, key: &K) -> bool;

    /// Returns the set with `key` added.
    #[must_use]
    fn insert_member(self, key: K) -> Self;

    /// Returns the set with `key` removed.
    #[must_use]
    fn remove_member(self, key: &K) -> Self;
}

impl<K: Ord> Membership<K> for BTreeSet<K> {
    fn is_member(&self, key: &K) -> bool {
        self.contains(key)
    }

    fn insert_member(mut self, key: K) -> Self {
        self.insert(key);
        self
    }

    fn remove_member(mut self, key: &K) -> Self {
        self.remove(key);
        self
    }
}

impl<K: Eq + Hash, H: BuildHasher> Membership<K> for HashSet<K, H> {
    fn is_member(&self, key: &K) -> bool {
        self.contains(key)
    }

    fn insert_member(mut self, key: K) -> Self {
        self.insert(key);
        self
    }

    fn remove_member(mut self, key: &K) -> Self {
        self.remove(key);
        self
    }
}

// =============================================================================
// ContainsLens
// =============================================================================

/// A lens focusing on whether a key is an element of a set.
///
/// - `get`: `key ∈ set`
/// - `set(true)`: `set ∪ {key}`
/// - `set(false)`: `set \ {key}`
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use optics_extra::optics::Lens;
/// use optics_extra::optics::set::ContainsLens;
///
/// let lens = ContainsLens::new(7);
/// let set: HashSet<i32> = lens.set(HashSet::new(), true);
/// assert!(lens.get(&set));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainsLens<K> {
    key: K,
}

impl<K> ContainsLens<K> {
    /// Creates a new `ContainsLens` for the given key.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self { key }
    }

    /// Returns the key this lens looks up.
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }
}

impl<S, K> Setter<S, bool> for ContainsLens<K>
where
    S: Membership<K>,
    K: Clone,
{
    fn over<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(bool) -> bool,
    {
        self.modify(source, function)
    }
}

impl<S, K> Lens<S, bool> for ContainsLens<K>
where
    S: Membership<K>,
    K: Clone,
{
    fn get(&self, source: &S) -> bool {
        source.is_member(&self.key)
    }

    fn set(&self, source: S, value: bool) -> S {
        if value {
            source.insert_member(self.key.clone())
        } else {
            source.remove_member(&self.key)
        }
    }
}

/// Returns a lens focusing on whether `key` is in a set.
#[must_use]
pub const fn contains<K>(key: K) -> ContainsLens<K> {
    ContainsLens::new(key)
}

// =============================================================================
// Members
// =============================================================================

/// A setter over every element of a set.
///
/// Mapping `f` over a set yields `{f(x) | x ∈ set}`. The cardinality never
/// grows, and it shrinks whenever `f` sends two elements to the same value.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use optics_extra::optics::Setter;
/// use optics_extra::optics::set::members;
///
/// let numbers: BTreeSet<i32> = [-2, -1, 1, 2].into_iter().collect();
/// let magnitudes = members().over(numbers, i32::abs);
/// assert_eq!(magnitudes, BTreeSet::from([1, 2]));
/// ```
pub struct Members<K> {
    _marker: PhantomData<K>,
}

impl<K> Members<K> {
    /// Creates a new `Members` setter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<K> Default for Members<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for Members<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Members<K> {}

impl<K> std::fmt::Debug for Members<K> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Members").finish()
    }
}

impl<S, K> Setter<S, K> for Members<K>
where
    S: Membership<K> + IntoIterator<Item = K> + FromIterator<K>,
{
    fn over<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(K) -> K,
    {
        source.into_iter().map(function).collect()
    }
}

/// Returns a setter over every element of a set.
#[must_use]
pub const fn members<K>() -> Members<K> {
    Members::new()
}

/// Collects every focus of `traversal` into an ordered set.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use optics_extra::optics::{VecTraversal, both};
/// use optics_extra::optics::set::set_of;
///
/// let words = vec!["b", "a", "b"];
/// assert_eq!(set_of(&VecTraversal::new(), &words), BTreeSet::from(["a", "b"]));
/// assert_eq!(set_of(&both(), &(3, 3)), BTreeSet::from([3]));
/// ```
pub fn set_of<S, A, T>(traversal: &T, source: &S) -> BTreeSet<A>
where
    T: Traversal<S, A>,
    A: Ord,
{
    traversal.to_vec(source).into_iter().collect()
}

static_assertions::assert_impl_all!(ContainsLens<i64>: Lens<BTreeSet<i64>, bool>, Copy, Send, Sync);
static_assertions::assert_impl_all!(Members<i64>: Setter<BTreeSet<i64>, i64>, Copy, Send, Sync);
static_assertions::assert_not_impl_any!(Members<i64>: Lens<BTreeSet<i64>, i64>, Traversal<BTreeSet<i64>, i64>);
#[cfg(feature = "fxhash")]
static_assertions::assert_impl_all!(ContainsLens<u32>: Lens<FxHashSet<u32>, bool>);
