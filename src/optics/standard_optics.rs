//! Standard optics that are commonly used.
//!
//! This module provides pre-defined lenses for tuples and the identity lens.
//! They are the usual glue when a path or set lens has to reach inside a
//! larger value, e.g. `second().compose(extension())`.

use std::marker::PhantomData;

use super::{Lens, Setter};

/// A lens onto the first element of a pair `(A, B)`.
pub struct First<A, B> {
    _marker: PhantomData<(A, B)>,
}

/// A lens onto the second element of a pair `(A, B)`.
pub struct Second<A, B> {
    _marker: PhantomData<(A, B)>,
}

/// A lens whose focus is the whole value.
pub struct Identity<A> {
    _marker: PhantomData<A>,
}

macro_rules! impl_marker_traits {
    ($name:ident < $($param:ident),+ >) => {
        impl<$($param),+> Clone for $name<$($param),+> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($param),+> Copy for $name<$($param),+> {}

        impl<$($param),+> Default for $name<$($param),+> {
            fn default() -> Self {
                Self { _marker: PhantomData }
            }
        }

        impl<$($param),+> std::fmt::Debug for $name<$($param),+> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.debug_struct(stringify!($name)).finish()
            }
        }
    };
}

impl_marker_traits!(First<A, B>);
impl_marker_traits!(Second<A, B>);
impl_marker_traits!(Identity<A>);

impl<A, B> Setter<(A, B), A> for First<A, B> {
    fn over<F>(&self, (first, second): (A, B), mut function: F) -> (A, B)
    where
        F: FnMut(A) -> A,
    {
        (function(first), second)
    }
}

impl<A: Clone, B> Lens<(A, B), A> for First<A, B> {
    fn get(&self, source: &(A, B)) -> A {
        source.0.clone()
    }

    fn set(&self, (_, second): (A, B), value: A) -> (A, B) {
        (value, second)
    }
}

impl<A, B> Setter<(A, B), B> for Second<A, B> {
    fn over<F>(&self, (first, second): (A, B), mut function: F) -> (A, B)
    where
        F: FnMut(B) -> B,
    {
        (first, function(second))
    }
}

impl<A, B: Clone> Lens<(A, B), B> for Second<A, B> {
    fn get(&self, source: &(A, B)) -> B {
        source.1.clone()
    }

    fn set(&self, (first, _): (A, B), value: B) -> (A, B) {
        (first, value)
    }
}

impl<A> Setter<A, A> for Identity<A> {
    fn over<F>(&self, source: A, mut function: F) -> A
    where
        F: FnMut(A) -> A,
    {
        function(source)
    }
}

impl<A: Clone> Lens<A, A> for Identity<A> {
    fn get(&self, source: &A) -> A {
        source.clone()
    }

    fn set(&self, _source: A, value: A) -> A {
        value
    }
}

/// Creates a lens focusing on the first element of a pair.
///
/// # Example
///
/// ```
/// use optics_extra::optics::{Lens, first};
///
/// let pair = (1, "one");
/// assert_eq!(first().get(&pair), 1);
/// assert_eq!(first().set(pair, 2), (2, "one"));
/// ```
#[must_use]
pub const fn first<A, B>() -> First<A, B> {
    First {
        _marker: PhantomData,
    }
}

/// Creates a lens focusing on the second element of a pair.
///
/// # Example
///
/// ```
/// use optics_extra::optics::{Lens, second};
///
/// let pair = (1, "one");
/// assert_eq!(second().get(&pair), "one");
/// assert_eq!(second().set(pair, "uno"), (1, "uno"));
/// ```
#[must_use]
pub const fn second<A, B>() -> Second<A, B> {
    Second {
        _marker: PhantomData,
    }
}

/// Creates the identity lens.
///
/// The identity lens satisfies:
/// - `identity().get(&x) == x`
/// - `identity().set(x, y) == y`
#[must_use]
pub const fn identity<A>() -> Identity<A> {
    Identity {
        _marker: PhantomData,
    }
}

static_assertions::assert_impl_all!(First<String, String>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Second<String, String>: Copy, Send, Sync);
