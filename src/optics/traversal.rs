//! Traversal optics for focusing on multiple elements.
//!
//! A Traversal focuses on zero or more elements within a structure. It can
//! read every focus (as owned values) and, being a [`Setter`], modify them
//! all in one pass.
//!
//! # Laws
//!
//! 1. **Modify Identity Law**: `traversal.over(source, |x| x) == source`
//! 2. **Modify Composition Law**:
//!    `traversal.over(traversal.over(source, f), g) == traversal.over(source, |x| g(f(x)))`
//!
//! # Examples
//!
//! ```
//! use optics_extra::optics::{Setter, Traversal, VecTraversal, both};
//!
//! let traversal: VecTraversal<i32> = VecTraversal::new();
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! let sum: i32 = traversal.to_vec(&numbers).into_iter().sum();
//! assert_eq!(sum, 15);
//!
//! let doubled = traversal.over(numbers, |x| x * 2);
//! assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
//!
//! let greeting = both().over(("hello".to_string(), "world".to_string()), |word| word + "!");
//! assert_eq!(greeting, ("hello!".to_string(), "world!".to_string()));
//! ```

use std::marker::PhantomData;

use super::Setter;

/// A Traversal focuses on zero or more elements within a structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused elements)
pub trait Traversal<S, A>: Setter<S, A> {
    /// Returns every focused element, in traversal order.
    fn to_vec(&self, source: &S) -> Vec<A>;

    /// Folds over all focused elements.
    ///
    /// # Example
    ///
    /// ```
    /// use optics_extra::optics::{Traversal, VecTraversal};
    ///
    /// let traversal: VecTraversal<i32> = VecTraversal::new();
    /// let sum = traversal.fold(&vec![1, 2, 3], 0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold<B, F>(&self, source: &S, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.to_vec(source).into_iter().fold(initial, function)
    }

    /// Returns the number of focused elements.
    fn length(&self, source: &S) -> usize {
        self.to_vec(source).len()
    }
}

// =============================================================================
// VecTraversal - Traversal for Vec<A>
// =============================================================================

/// A Traversal that focuses on all elements of a `Vec`.
///
/// # Example
///
/// ```
/// use optics_extra::optics::{Setter, VecTraversal};
///
/// let traversal: VecTraversal<String> = VecTraversal::new();
/// let files = vec!["a".to_string(), "b".to_string()];
///
/// let with_extension = traversal.over(files, |name| name + ".rs");
/// assert_eq!(with_extension, vec!["a.rs".to_string(), "b.rs".to_string()]);
/// ```
pub struct VecTraversal<A> {
    _marker: PhantomData<A>,
}

impl<A> VecTraversal<A> {
    /// Creates a new `VecTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for VecTraversal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for VecTraversal<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for VecTraversal<A> {}

impl<A> std::fmt::Debug for VecTraversal<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("VecTraversal").finish()
    }
}

impl<A> Setter<Vec<A>, A> for VecTraversal<A> {
    fn over<F>(&self, source: Vec<A>, function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        source.into_iter().map(function).collect()
    }
}

impl<A: Clone> Traversal<Vec<A>, A> for VecTraversal<A> {
    fn to_vec(&self, source: &Vec<A>) -> Vec<A> {
        source.clone()
    }

    fn length(&self, source: &Vec<A>) -> usize {
        source.len()
    }
}

// =============================================================================
// Both - Traversal over both halves of a homogeneous pair
// =============================================================================

/// A Traversal that focuses on both elements of a pair `(A, A)`.
///
/// The first element is visited before the second.
///
/// # Example
///
/// ```
/// use optics_extra::optics::{Setter, Traversal, both};
///
/// assert_eq!(both().over((1, 2), |x| x + 10), (11, 12));
/// assert_eq!(both().to_vec(&('a', 'b')), vec!['a', 'b']);
/// ```
pub struct Both<A> {
    _marker: PhantomData<A>,
}

impl<A> Both<A> {
    /// Creates a new `Both` traversal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for Both<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for Both<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Both<A> {}

impl<A> std::fmt::Debug for Both<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Both").finish()
    }
}

impl<A> Setter<(A, A), A> for Both<A> {
    fn over<F>(&self, (left, right): (A, A), mut function: F) -> (A, A)
    where
        F: FnMut(A) -> A,
    {
        let left = function(left);
        (left, function(right))
    }
}

impl<A: Clone> Traversal<(A, A), A> for Both<A> {
    fn to_vec(&self, (left, right): &(A, A)) -> Vec<A> {
        vec![left.clone(), right.clone()]
    }

    fn length(&self, _source: &(A, A)) -> usize {
        2
    }
}

/// Returns a traversal over both elements of a homogeneous pair.
#[must_use]
pub const fn both<A>() -> Both<A> {
    Both::new()
}
