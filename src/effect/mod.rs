//! Effect types for threading state through optic updates.
//!
//! # Base Monads
//!
//! - [`State`]: Computations with threaded state
//!
//! ```rust
//! use optics_extra::effect::State;
//!
//! let counter = State::modify(|count: i32| count + 1)
//!     .then(State::modify(|count: i32| count + 1))
//!     .then(State::get());
//! assert_eq!(counter.eval(0), 2);
//! ```

mod state;

pub use state::State;
