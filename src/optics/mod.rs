//! Optics for immutable data manipulation.
//!
//! This module provides optics - composable accessors for immutable
//! data structures. Optics focus on parts of a structure, enabling
//! type-safe reading and updating of those parts, even when the part is
//! computed rather than stored (set membership, path components).
//!
//! # Optics Hierarchy
//!
//! ```text
//! Lens      <: Setter
//! Traversal <: Setter
//! ```
//!
//! # Available Optics
//!
//! - [`Setter`]: Modify zero or more parts, with no way to read them back
//! - [`Lens`]: Focus on exactly one part (get/set access)
//! - [`Traversal`]: Focus on zero or more parts (read all, modify all)
//! - [`set`]: Set membership lens and element remapping setter
//! - [`file_path`]: Path component lenses and path-building combinators
//!
//! # Example with Lens
//!
//! ```
//! use optics_extra::optics::{Lens, FunctionLens};
//! use optics_extra::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.get(&person), "Main St");
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! ```
//!
//! # Lens Laws
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
//! # Setter Laws
//!
//! Every Setter (and so every Lens and Traversal) must satisfy:
//!
//! 1. **Identity**: `setter.over(source, |x| x) == source`
//! 2. **Composition**: `setter.over(setter.over(source, f), g) == setter.over(source, |x| g(f(x)))`

mod lens;
mod setter;
mod standard_optics;
mod traversal;

#[cfg(feature = "path")]
pub mod file_path;
#[cfg(feature = "set")]
pub mod set;

// Re-export all setter-related types and traits
pub use setter::ComposedSetter;
pub use setter::FunctionSetter;
pub use setter::Setter;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;

// Re-export standard optics
pub use standard_optics::First;
pub use standard_optics::Identity;
pub use standard_optics::Second;
pub use standard_optics::first;
pub use standard_optics::identity;
pub use standard_optics::second;

// Re-export all traversal-related types and traits
pub use traversal::Both;
pub use traversal::Traversal;
pub use traversal::VecTraversal;
pub use traversal::both;
