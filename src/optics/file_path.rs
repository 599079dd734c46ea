//! Lenses onto the components of a path string, and path-building combinators.
//!
//! | Lens | get | set(v) |
//! |---|---|---|
//! | [`basename`] | file name minus extension | `directory </> v <.> extension` |
//! | [`directory`] | everything before the final segment | `v </> filename` |
//! | [`extension`] | suffix from the last `.` of the final segment | `path minus extension <.> v` |
//! | [`filename`] | final segment | `directory </> v` |
//!
//! The combinators work through any optic whose focus is a `String`:
//!
//! | Operator | Pure | `&mut` state | [`State`](crate::effect::State) |
//! |---|---|---|---|
//! | `</>~` / `</>=` | [`append_segment`](PathSetterExt::append_segment) | [`append_segment_assign`](PathSetterExt::append_segment_assign) | `append_segment_state` |
//! | `<</>~` / `<</>=` | [`append_segment_returning`](PathLensExt::append_segment_returning) | [`append_segment_assign_returning`](PathLensExt::append_segment_assign_returning) | `append_segment_returning_state` |
//! | `<<</>~` / `<<</>=` | [`append_segment_returning_old`](PathLensExt::append_segment_returning_old) | [`append_segment_assign_returning_old`](PathLensExt::append_segment_assign_returning_old) | `append_segment_returning_old_state` |
//! | `<.>~` / `<.>=` | [`append_extension`](PathSetterExt::append_extension) | [`append_extension_assign`](PathSetterExt::append_extension_assign) | `append_extension_state` |
//! | `<<.>~` / `<<.>=` | [`append_extension_returning`](PathLensExt::append_extension_returning) | [`append_extension_assign_returning`](PathLensExt::append_extension_assign_returning) | `append_extension_returning_state` |
//! | `<<<.>~` / `<<<.>=` | [`append_extension_returning_old`](PathLensExt::append_extension_returning_old) | [`append_extension_assign_returning_old`](PathLensExt::append_extension_assign_returning_old) | `append_extension_returning_old_state` |
//!
//! The plain variants only need a [`Setter`], so they also run through
//! traversals. The returning variants need a [`Lens`] because they report a
//! single leaf.
//!
//! # Examples
//!
//! ```
//! use optics_extra::optics::{Lens, both};
//! use optics_extra::optics::file_path::{PathLensExt, PathSetterExt, basename, directory};
//!
//! let renamed = basename().set("path/name.png".to_string(), "filename".to_string());
//! assert_eq!(renamed, "path/filename.png");
//!
//! assert_eq!(directory().get(&"long/path/name.txt".to_string()), "long/path");
//!
//! let pair = ("hello".to_string(), "world".to_string());
//! assert_eq!(
//!     both().append_segment(pair, "!!!"),
//!     ("hello/!!!".to_string(), "world/!!!".to_string()),
//! );
//!
//! let (moved_to, path) = directory().append_segment_returning("src/lib.rs".to_string(), "optics");
//! assert_eq!(moved_to, "src/optics");
//! assert_eq!(path, "src/optics/lib.rs");
//! ```

use crate::file_path::{
    add_extension, combine, drop_extension, take_base_name, take_directory, take_extension,
    take_file_name,
};

use super::{Lens, Setter};

// =============================================================================
// Component lenses
// =============================================================================

macro_rules! path_component_lens {
    (
        $(#[$meta:meta])*
        $name:ident, $constructor:ident,
        get: |$get_path:ident| $get:expr,
        set: |$set_path:ident, $value:ident| $set:expr $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Setter<String, String> for $name {
            fn over<F>(&self, source: String, function: F) -> String
            where
                F: FnMut(String) -> String,
            {
                self.modify(source, function)
            }
        }

        impl Lens<String, String> for $name {
            fn get(&self, $get_path: &String) -> String {
                let $get_path = $get_path.as_str();
                ($get).to_owned()
            }

            fn set(&self, $set_path: String, $value: String) -> String {
                let $set_path = $set_path.as_str();
                let $value = $value.as_str();
                $set
            }
        }

        #[doc = concat!("Returns the [`", stringify!($name), "`] lens.")]
        #[must_use]
        pub const fn $constructor() -> $name {
            $name
        }
    };
}

path_component_lens!(
    /// A lens onto the file name of a path without its extension.
    ///
    /// ```
    /// use optics_extra::optics::Lens;
    /// use optics_extra::optics::file_path::basename;
    ///
    /// let path = "dir/report.pdf".to_string();
    /// assert_eq!(basename().get(&path), "report");
    /// assert_eq!(basename().set(path, "summary".to_string()), "dir/summary.pdf");
    /// ```
    Basename, basename,
    get: |path| take_base_name(path),
    set: |path, value| add_extension(&combine(take_directory(path), value), take_extension(path)),
);

path_component_lens!(
    /// A lens onto the directory of a path.
    ///
    /// Reads `""` for a bare file name and `"/"` for a child of the root.
    ///
    /// ```
    /// use optics_extra::optics::Lens;
    /// use optics_extra::optics::file_path::directory;
    ///
    /// let path = "long/path/name.txt".to_string();
    /// assert_eq!(directory().get(&path), "long/path");
    /// assert_eq!(directory().set(path, "/tmp".to_string()), "/tmp/name.txt");
    /// ```
    Directory, directory,
    get: |path| take_directory(path),
    set: |path, value| combine(value, take_file_name(path)),
);

path_component_lens!(
    /// A lens onto the extension of a path, including its leading `.`.
    ///
    /// Written values may omit the leading `.`; an empty value removes the
    /// extension.
    ///
    /// ```
    /// use optics_extra::optics::Lens;
    /// use optics_extra::optics::file_path::extension;
    ///
    /// let path = "img/photo.jpeg".to_string();
    /// assert_eq!(extension().get(&path), ".jpeg");
    /// assert_eq!(extension().set(path.clone(), ".png".to_string()), "img/photo.png");
    /// assert_eq!(extension().set(path, String::new()), "img/photo");
    /// ```
    Extension, extension,
    get: |path| take_extension(path),
    set: |path, value| add_extension(drop_extension(path), value),
);

path_component_lens!(
    /// A lens onto the final segment of a path.
    ///
    /// ```
    /// use optics_extra::optics::Lens;
    /// use optics_extra::optics::file_path::filename;
    ///
    /// let path = "src/main.rs".to_string();
    /// assert_eq!(filename().get(&path), "main.rs");
    /// assert_eq!(filename().set(path, "lib.rs".to_string()), "src/lib.rs");
    /// ```
    Filename, filename,
    get: |path| take_file_name(path),
    set: |path, value| combine(take_directory(path), value),
);

// =============================================================================
// Combinators
// =============================================================================

/// Path-building combinators for any setter focusing on path strings.
///
/// Implemented for every [`Setter<S, String>`], including lenses and
/// traversals.
pub trait PathSetterExt<S>: Setter<S, String> {
    /// Joins `segment` onto every focused path (`</>~`).
    ///
    /// ```
    /// use optics_extra::optics::{VecTraversal, file_path::PathSetterExt};
    ///
    /// let dirs = vec!["a".to_string(), "b/".to_string()];
    /// let joined = VecTraversal::new().append_segment(dirs, "c");
    /// assert_eq!(joined, vec!["a/c".to_string(), "b/c".to_string()]);
    /// ```
    fn append_segment(&self, source: S, segment: &str) -> S {
        self.over(source, |current| combine(&current, segment))
    }

    /// Appends `extension` to every focused path (`<.>~`).
    fn append_extension(&self, source: S, extension: &str) -> S {
        self.over(source, |current| add_extension(&current, extension))
    }

    /// Joins `segment` onto every focused path of the container held in
    /// `state` (`</>=`).
    fn append_segment_assign(&self, state: &mut S, segment: &str)
    where
        S: Clone,
    {
        *state = self.append_segment(state.clone(), segment);
    }

    /// Appends `extension` to every focused path of the container held in
    /// `state` (`<.>=`).
    fn append_extension_assign(&self, state: &mut S, extension: &str)
    where
        S: Clone,
    {
        *state = self.append_extension(state.clone(), extension);
    }
}

impl<S, O> PathSetterExt<S> for O where O: Setter<S, String> + ?Sized {}

/// Path-building combinators that also report the focused leaf.
///
/// Implemented for every [`Lens<S, String>`].
pub trait PathLensExt<S>: Lens<S, String> {
    /// Joins `segment` onto the focus and returns the new focus alongside the
    /// updated source (`<</>~`).
    fn append_segment_returning(&self, source: S, segment: &str) -> (String, S) {
        let updated = combine(&self.get(&source), segment);
        (updated.clone(), self.set(source, updated))
    }

    /// Joins `segment` onto the focus and returns the previous focus
    /// alongside the updated source (`<<</>~`).
    fn append_segment_returning_old(&self, source: S, segment: &str) -> (String, S) {
        let previous = self.get(&source);
        let updated = combine(&previous, segment);
        (previous, self.set(source, updated))
    }

    /// Appends `extension` to the focus and returns the new focus alongside
    /// the updated source (`<<.>~`).
    ///
    /// ```
    /// use optics_extra::optics::{first, file_path::PathLensExt};
    ///
    /// let (name, entry) = first().append_extension_returning(("notes".to_string(), 3), "md");
    /// assert_eq!(name, "notes.md");
    /// assert_eq!(entry, ("notes.md".to_string(), 3));
    /// ```
    fn append_extension_returning(&self, source: S, extension: &str) -> (String, S) {
        let updated = add_extension(&self.get(&source), extension);
        (updated.clone(), self.set(source, updated))
    }

    /// Appends `extension` to the focus and returns the previous focus
    /// alongside the updated source (`<<<.>~`).
    fn append_extension_returning_old(&self, source: S, extension: &str) -> (String, S) {
        let previous = self.get(&source);
        let updated = add_extension(&previous, extension);
        (previous, self.set(source, updated))
    }

    /// `&mut` form of [`append_segment_returning`](Self::append_segment_returning) (`<</>=`).
    fn append_segment_assign_returning(&self, state: &mut S, segment: &str) -> String
    where
        S: Clone,
    {
        let (updated, source) = self.append_segment_returning(state.clone(), segment);
        *state = source;
        updated
    }

    /// `&mut` form of [`append_segment_returning_old`](Self::append_segment_returning_old) (`<<</>=`).
    fn append_segment_assign_returning_old(&self, state: &mut S, segment: &str) -> String
    where
        S: Clone,
    {
        let (previous, source) = self.append_segment_returning_old(state.clone(), segment);
        *state = source;
        previous
    }

    /// `&mut` form of [`append_extension_returning`](Self::append_extension_returning) (`<<.>=`).
    fn append_extension_assign_returning(&self, state: &mut S, extension: &str) -> String
    where
        S: Clone,
    {
        let (updated, source) = self.append_extension_returning(state.clone(), extension);
        *state = source;
        updated
    }

    /// `&mut` form of [`append_extension_returning_old`](Self::append_extension_returning_old) (`<<<.>=`).
    fn append_extension_assign_returning_old(&self, state: &mut S, extension: &str) -> String
    where
        S: Clone,
    {
        let (previous, source) = self.append_extension_returning_old(state.clone(), extension);
        *state = source;
        previous
    }
}

impl<S, L> PathLensExt<S> for L where L: Lens<S, String> + ?Sized {}

// =============================================================================
// State combinators
// =============================================================================

#[cfg(feature = "effect")]
pub use state_combinators::*;

#[cfg(feature = "effect")]
mod state_combinators {
    use super::{PathLensExt, PathSetterExt};
    use crate::effect::State;
    use crate::optics::{Lens, Setter};

    macro_rules! path_state_combinators {
        ($($kind:ident: $argument:ident),+ $(,)?) => {
            $crate::paste::paste! {
                $(
                    #[doc = concat!(
                        "Returns a [`State`] step that runs [`append_", stringify!($kind),
                        "`](super::PathSetterExt::append_", stringify!($kind),
                        ") on the threaded container."
                    )]
                    pub fn [<append_ $kind _state>]<S, O>(optic: O, $argument: impl Into<String>) -> State<S, ()>
                    where
                        S: 'static,
                        O: Setter<S, String> + 'static,
                    {
                        let $argument = $argument.into();
                        State::modify(move |source| optic.[<append_ $kind>](source, &$argument))
                    }

                    #[doc = concat!(
                        "Returns a [`State`] step that runs [`append_", stringify!($kind),
                        "_returning`](super::PathLensExt::append_", stringify!($kind),
                        "_returning) and yields the new focus."
                    )]
                    pub fn [<append_ $kind _returning_state>]<S, L>(lens: L, $argument: impl Into<String>) -> State<S, String>
                    where
                        S: 'static,
                        L: Lens<S, String> + 'static,
                    {
                        let $argument = $argument.into();
                        State::new(move |source| lens.[<append_ $kind _returning>](source, &$argument))
                    }

                    #[doc = concat!(
                        "Returns a [`State`] step that runs [`append_", stringify!($kind),
                        "_returning_old`](super::PathLensExt::append_", stringify!($kind),
                        "_returning_old) and yields the previous focus."
                    )]
                    pub fn [<append_ $kind _returning_old_state>]<S, L>(lens: L, $argument: impl Into<String>) -> State<S, String>
                    where
                        S: 'static,
                        L: Lens<S, String> + 'static,
                    {
                        let $argument = $argument.into();
                        State::new(move |source| lens.[<append_ $kind _returning_old>](source, &$argument))
                    }
                )+
            }
        };
    }

    path_state_combinators!(segment: segment, extension: extension);
}

static_assertions::assert_impl_all!(Basename: Lens<String, String>, Copy, Send, Sync);
static_assertions::assert_impl_all!(Directory: Lens<String, String>, Copy, Send, Sync);
static_assertions::assert_impl_all!(Extension: Lens<String, String>, Copy, Send, Sync);
static_assertions::assert_impl_all!(Filename: Lens<String, String>, Copy, Send, Sync);
