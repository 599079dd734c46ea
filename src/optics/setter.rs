//! Setter optics for write-only transformations.
//!
//! A Setter can apply a function to zero or more parts of a structure but
//! offers no way to read those parts back. It is the weakest optic in this
//! crate: every [`Lens`](super::Lens) and every [`Traversal`](super::Traversal)
//! is also a Setter.
//!
//! Setters exist for transformations that cannot be inverted, such as
//! remapping the elements of a set, where two elements may collapse into one.
//!
//! # Laws
//!
//! 1. **Over Identity Law**: `setter.over(source, |x| x) == source`
//! 2. **Over Composition Law**:
//!    `setter.over(setter.over(source, f), g) == setter.over(source, |x| g(f(x)))`
//!
//! # Examples
//!
//! ```
//! use optics_extra::optics::{FunctionSetter, Setter};
//!
//! let each_word = FunctionSetter::new(|words: Vec<String>, function: &mut dyn FnMut(String) -> String| {
//!     words.into_iter().map(|word| function(word)).collect::<Vec<_>>()
//! });
//!
//! let shouted = each_word.over(vec!["a".to_string(), "b".to_string()], |word| word.to_uppercase());
//! assert_eq!(shouted, vec!["A".to_string(), "B".to_string()]);
//! ```

use std::marker::PhantomData;

/// A Setter modifies the focused parts of a structure without reading them.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused parts)
pub trait Setter<S, A> {
    /// Applies `function` to every focused part and returns the new source.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `function` - The function to apply to each focused part
    fn over<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A;

    /// Replaces every focused part with `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use optics_extra::optics::{Setter, both};
    ///
    /// let pair = both().set_all((1, 2), 0);
    /// assert_eq!(pair, (0, 0));
    /// ```
    fn set_all(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.over(source, |_| value.clone())
    }

    /// Composes this setter with another setter focusing inside each part.
    ///
    /// Any optic can be used on either side, so a traversal composed with a
    /// lens yields a setter that updates the lens focus in every element.
    ///
    /// # Example
    ///
    /// ```
    /// use optics_extra::optics::{Setter, both, first};
    ///
    /// let firsts = both().compose_setter(first());
    /// let updated = firsts.over(((1, 'a'), (2, 'b')), |x: i32| x * 10);
    /// assert_eq!(updated, ((10, 'a'), (20, 'b')));
    /// ```
    fn compose_setter<B, O>(self, other: O) -> ComposedSetter<Self, O, A>
    where
        Self: Sized,
        O: Setter<A, B>,
    {
        ComposedSetter::new(self, other)
    }
}

/// A setter implemented with a single `over` function.
///
/// The function receives the source and a `&mut dyn FnMut` to apply to each
/// focused part.
///
/// # Example
///
/// ```
/// use optics_extra::optics::{FunctionSetter, Setter};
///
/// let evens = FunctionSetter::new(|numbers: Vec<i32>, function: &mut dyn FnMut(i32) -> i32| {
///     numbers
///         .into_iter()
///         .map(|number| if number % 2 == 0 { function(number) } else { number })
///         .collect::<Vec<_>>()
/// });
///
/// assert_eq!(evens.over(vec![1, 2, 3, 4], |x| x * 100), vec![1, 200, 3, 400]);
/// ```
pub struct FunctionSetter<S, A, O>
where
    O: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    over_function: O,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, O> FunctionSetter<S, A, O>
where
    O: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    /// Creates a new `FunctionSetter` from an `over` function.
    #[must_use]
    pub const fn new(over_function: O) -> Self {
        Self {
            over_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, O> Setter<S, A> for FunctionSetter<S, A, O>
where
    O: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn over<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        (self.over_function)(source, &mut function)
    }
}

impl<S, A, O> Clone for FunctionSetter<S, A, O>
where
    O: Fn(S, &mut dyn FnMut(A) -> A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            over_function: self.over_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, O> std::fmt::Debug for FunctionSetter<S, A, O>
where
    O: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionSetter")
            .finish_non_exhaustive()
    }
}

/// A setter composed of two setters.
///
/// # Type Parameters
///
/// - `O1`: The outer setter
/// - `O2`: The inner setter
/// - `A`: The intermediate type (target of O1, source of O2)
pub struct ComposedSetter<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<A>,
}

impl<O1, O2, A> ComposedSetter<O1, O2, A> {
    /// Creates a new composed setter.
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Setter<S, B> for ComposedSetter<O1, O2, A>
where
    O1: Setter<S, A>,
    O2: Setter<A, B>,
{
    fn over<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        let second = &self.second;
        self.first
            .over(source, |intermediate| second.over(intermediate, &mut function))
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedSetter<O1, O2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O1: Copy, O2: Copy, A> Copy for ComposedSetter<O1, O2, A> {}

impl<O1: std::fmt::Debug, O2: std::fmt::Debug, A> std::fmt::Debug for ComposedSetter<O1, O2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedSetter")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}
