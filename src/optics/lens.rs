//! Lens optics for focusing on a single part of a structure.
//!
//! A Lens provides get/set access to a part of a larger structure. The part
//! does not have to be a stored field: it may be computed on demand (whether
//! a key is in a set, the extension of a path), so [`Lens::get`] returns an
//! owned value rather than a reference.
//!
//! Every Lens is also a [`Setter`]: `over` reads the focus once, applies the
//! function and writes the result back.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source, lens.get(&source)) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use optics_extra::optics::{Lens, FunctionLens};
//! use optics_extra::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated.x, 100);
//! ```

use std::marker::PhantomData;

use super::Setter;

/// A Lens focuses on exactly one part of a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused part)
///
/// # Laws
///
/// 1. **GetPut Law**: `lens.set(source, lens.get(&source)) == source`
/// 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == value`
/// 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
pub trait Lens<S, A>: Setter<S, A> {
    /// Reads the focused part.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    ///
    /// # Returns
    ///
    /// The current value of the focused part
    fn get(&self, source: &S) -> A;

    /// Sets the focused part to a new value, returning a new source.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `value` - The new value for the focused part
    ///
    /// # Returns
    ///
    /// A new source with the focused part replaced
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused part by applying a function.
    ///
    /// This is equivalent to getting the current value, applying the function,
    /// and setting the result.
    ///
    /// # Example
    ///
    /// ```
    /// use optics_extra::optics::Lens;
    /// use optics_extra::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let point = Point { x: 10, y: 20 };
    /// let doubled = x_lens.modify(point, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = self.get(&source);
        self.set(source, function(current))
    }

    /// Composes this lens with another lens to focus on a nested part.
    ///
    /// The composed getter is `other.get(&self.get(source))`; the composed
    /// setter reads the intermediate value, sets the inner part on it and
    /// writes it back through `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use optics_extra::optics::Lens;
    /// use optics_extra::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let person_street = lens!(Person, address).compose(lens!(Address, street));
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address {
    ///         street: "Main St".to_string(),
    ///         city: "Tokyo".to_string(),
    ///     },
    /// };
    ///
    /// assert_eq!(person_street.get(&person), "Main St");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }
}

/// A lens implemented using getter and setter functions.
///
/// The `lens!` macro generates a `FunctionLens` internally.
///
/// # Example
///
/// ```
/// use optics_extra::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.get(&point), 10);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// # Arguments
    ///
    /// * `getter` - A function that reads the focused part from the source
    /// * `setter` - A function that creates a new source with the part replaced
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Setter<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn over<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.modify(source, function)
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `A`: The intermediate type (target of L1, source of L2)
///
/// # Example
///
/// ```
/// use optics_extra::optics::{Lens, first, second};
///
/// let inner = second::<&str, (i32, i32)>().compose(first());
/// let nested = ("label", (1, 2));
///
/// assert_eq!(inner.get(&nested), 1);
/// assert_eq!(inner.set(nested, 9), ("label", (9, 2)));
/// ```
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer lens (focuses on the intermediate structure)
    /// * `second` - The inner lens (focuses on the final part)
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Setter<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn over<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        self.modify(source, function)
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.second.get(&self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let second = &self.second;
        self.first
            .modify(source, |intermediate| second.set(intermediate, value))
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: Copy, L2: Copy, A> Copy for ComposedLens<L1, L2, A> {}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a lens for a struct field.
///
/// This macro generates a `FunctionLens` that focuses on the specified field
/// of the given struct type. The getter clones the field.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use optics_extra::optics::Lens;
/// use optics_extra::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.get(&point), 10);
///
/// let updated = x_lens.set(point, 100);
/// assert_eq!(updated, Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_function_lens_get() {
        let x_lens = FunctionLens::new(
            |point: &Point| point.x,
            |point: Point, x: i32| Point { x, ..point },
        );

        let point = Point { x: 10, y: 20 };
        assert_eq!(x_lens.get(&point), 10);
    }

    #[test]
    fn test_function_lens_set() {
        let x_lens = FunctionLens::new(
            |point: &Point| point.x,
            |point: Point, x: i32| Point { x, ..point },
        );

        let updated = x_lens.set(Point { x: 10, y: 20 }, 100);
        assert_eq!(updated, Point { x: 100, y: 20 });
    }

    #[test]
    fn test_function_lens_computed_view() {
        let is_origin = FunctionLens::new(
            |point: &Point| point.x == 0 && point.y == 0,
            |point: Point, origin: bool| if origin { Point { x: 0, y: 0 } } else { point },
        );

        assert!(is_origin.get(&Point { x: 0, y: 0 }));
        assert_eq!(is_origin.set(Point { x: 3, y: 4 }, true), Point { x: 0, y: 0 });
    }

    #[test]
    fn test_lens_modify() {
        let x_lens = lens!(Point, x);
        let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
        assert_eq!(doubled.x, 20);
    }

    #[test]
    fn test_lens_over_via_setter() {
        let y_lens = lens!(Point, y);
        let shifted = Setter::over(&y_lens, Point { x: 1, y: 1 }, |y| y - 5);
        assert_eq!(shifted, Point { x: 1, y: -4 });
    }

    #[test]
    fn test_lens_compose() {
        #[derive(Clone, PartialEq, Debug)]
        struct Inner {
            value: i32,
        }

        #[derive(Clone, PartialEq, Debug)]
        struct Outer {
            inner: Inner,
        }

        let composed = lens!(Outer, inner).compose(lens!(Inner, value));

        let data = Outer {
            inner: Inner { value: 42 },
        };

        assert_eq!(composed.get(&data), 42);

        let updated = composed.set(data, 100);
        assert_eq!(updated.inner.value, 100);
    }
}
