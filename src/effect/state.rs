//! State Monad - stateful computation.
//!
//! A `State<S, A>` encapsulates a function `S -> (A, S)`. The path
//! combinators in [`crate::optics::file_path`] produce `State` values so that
//! a sequence of edits can be threaded through a container without the
//! caller holding a `&mut` borrow.
//!
//! # Laws
//!
//! - Get Put Law: `get().flat_map(|s| put(s)) == pure(())`
//! - Put Get Law: `put(s).then(get())` returns `s`
//! - Put Put Law: `put(s1).then(put(s2)) == put(s2)`
//! - Modify Composition: `modify(f).then(modify(g)) == modify(|s| g(f(s)))`
//!
//! # Examples
//!
//! ```rust
//! use optics_extra::effect::State;
//!
//! fn push(segment: &'static str) -> State<String, ()> {
//!     State::modify(move |path: String| format!("{path}/{segment}"))
//! }
//!
//! let computation = push("usr").then(push("lib")).then(State::get());
//! let (path, _) = computation.run(String::new());
//! assert_eq!(path, "/usr/lib");
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

/// A monad for computations that thread state through a sequence of operations.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The result type
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Uses Rc to allow cloning of the State for `flat_map`.
    run_function: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new State from a state transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optics_extra::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// let (result, final_state) = state.run(10);
    /// assert_eq!(result, 20);
    /// assert_eq!(final_state, 11);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the State computation with the given initial state.
    ///
    /// Returns both the result and the final state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the State computation and returns only the result.
    pub fn eval(&self, initial_state: S) -> A {
        let (result, _) = self.run(initial_state);
        result
    }

    /// Runs the State computation and returns only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        let (_, final_state) = self.run(initial_state);
        final_state
    }

    /// Creates a State that returns a constant value without modifying the state.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Maps a function over the result of this State.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optics_extra::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s));
    /// let mapped = state.fmap(|value| value * 2);
    /// assert_eq!(mapped.run(21), (42, 21));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, new_state) = (original_function)(state);
            (function(result), new_state)
        })
    }

    /// Chains this State with a function that produces another State.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optics_extra::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let chained = state.flat_map(|value| State::new(move |s: i32| (value + s, s)));
    /// assert_eq!(chained.run(10), (21, 11));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, intermediate_state) = (original_function)(state);
            let next_state = function(result);
            next_state.run(intermediate_state)
        })
    }

    /// Sequences two States, discarding the result of the first.
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Creates a State that projects a value from the current state.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let result = projection(&state);
            (result, state)
        })
    }
}

// =============================================================================
// MonadState Operations (as inherent methods)
// =============================================================================

impl<St> State<St, St>
where
    St: Clone + 'static,
{
    /// Creates a State that returns the current state without modifying it.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: St| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Creates a State that replaces the current state with a new value.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Creates a State that modifies the current state using a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optics_extra::effect::State;
    ///
    /// let state: State<i32, ()> = State::modify(|x| x * 2);
    /// assert_eq!(state.exec(21), 42);
    /// ```
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

impl<S, A> std::fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}

impl<S, A> std::fmt::Debug for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("State").finish_non_exhaustive()
    }
}

// State holds an Rc, so it must stay on the thread that built it.
static_assertions::assert_not_impl_any!(State<String, ()>: Send, Sync);
