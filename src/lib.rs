//! # optics-extra
//!
//! Composable lenses and setters for set membership and file path
//! components.
//!
//! ## Overview
//!
//! - **Optics core**: [`Setter`](optics::Setter), [`Lens`](optics::Lens) and
//!   [`Traversal`](optics::Traversal), with closure-backed constructors and
//!   composition.
//! - **Set membership**: a `bool` lens over "is this key in the set" and a
//!   write-only setter that remaps every element.
//! - **File paths**: lenses onto the basename, directory, extension and
//!   filename of a path string, plus combinators that append a segment or an
//!   extension through any optic.
//! - **State**: a `State` monad so the path combinators can run against a
//!   threaded state container.
//!
//! ## Feature Flags
//!
//! - `optics`: Setter, Lens, Traversal and the standard optics
//! - `set`: set membership optics
//! - `path`: path string primitives and path component optics
//! - `effect`: the `State` monad and the `State` flavored path combinators
//! - `full`: Enable all features
//! - `fxhash`: Re-export `rustc_hash::FxHashSet` from the set optics
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use optics_extra::prelude::*;
//!
//! let numbers: BTreeSet<i32> = [1, 2, 3, 4].into_iter().collect();
//! let without_three = contains(3).set(numbers, false);
//! assert_eq!(without_three, BTreeSet::from([1, 2, 4]));
//!
//! let renamed = basename().set("path/name.png".to_string(), "filename".to_string());
//! assert_eq!(renamed, "path/filename.png");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

#[doc(hidden)]
pub use paste;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use optics_extra::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "set")]
    pub use crate::optics::set::*;

    #[cfg(feature = "path")]
    pub use crate::optics::file_path::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "path")]
pub mod file_path;

#[cfg(feature = "effect")]
pub mod effect;
