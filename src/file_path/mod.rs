//! Path string primitives.
//!
//! Splits and joins POSIX style path strings (`directory/basename.extension`)
//! without touching the filesystem. `/` is the only separator and `.` the
//! only extension separator. Every function is total: malformed input such
//! as the empty string degrades to empty components.
//!
//! `std::path::Path` drops the leading dot from extensions and keeps
//! trailing separators out of its model, so the path lenses use these
//! string primitives instead.
//!
//! # Examples
//!
//! ```
//! use optics_extra::file_path::{
//!     add_extension, combine, split_extension, take_base_name, take_directory, take_extension,
//!     take_file_name,
//! };
//!
//! let path = "long/path/name.txt";
//! assert_eq!(take_directory(path), "long/path");
//! assert_eq!(take_file_name(path), "name.txt");
//! assert_eq!(take_base_name(path), "name");
//! assert_eq!(take_extension(path), ".txt");
//! assert_eq!(split_extension(path), ("long/path/name", ".txt"));
//!
//! assert_eq!(combine("long/path", "other.txt"), "long/path/other.txt");
//! assert_eq!(add_extension("archive.tar", "gz"), "archive.tar.gz");
//! ```

/// The path separator.
pub const SEPARATOR: char = '/';

/// The extension separator.
pub const EXTENSION_SEPARATOR: char = '.';

/// Returns `true` if `path` starts with a separator.
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}

/// Returns `true` if `path` ends with a separator.
#[must_use]
pub fn has_trailing_separator(path: &str) -> bool {
    path.ends_with(SEPARATOR)
}

/// Splits `path` after its last separator.
///
/// The first half keeps the trailing separator, so concatenating the halves
/// always yields `path` again. A path without separators has an empty
/// directory half.
///
/// ```
/// use optics_extra::file_path::split_file_name;
///
/// assert_eq!(split_file_name("dir/sub/file.rs"), ("dir/sub/", "file.rs"));
/// assert_eq!(split_file_name("file.rs"), ("", "file.rs"));
/// assert_eq!(split_file_name("dir/"), ("dir/", ""));
/// ```
#[must_use]
pub fn split_file_name(path: &str) -> (&str, &str) {
    match path.rfind(SEPARATOR) {
        Some(index) => path.split_at(index + SEPARATOR.len_utf8()),
        None => ("", path),
    }
}

/// Returns the final segment of `path`.
#[must_use]
pub fn take_file_name(path: &str) -> &str {
    split_file_name(path).1
}

/// Returns everything before the final segment, without trailing separators.
///
/// Children of the root keep the root (`"/"`); a bare file name has no
/// directory and yields `""`.
///
/// ```
/// use optics_extra::file_path::take_directory;
///
/// assert_eq!(take_directory("long/path/name.txt"), "long/path");
/// assert_eq!(take_directory("/name.txt"), "/");
/// assert_eq!(take_directory("name.txt"), "");
/// assert_eq!(take_directory("dir//name.txt"), "dir");
/// ```
#[must_use]
pub fn take_directory(path: &str) -> &str {
    let (directory, _) = split_file_name(path);
    let trimmed = directory.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() && !directory.is_empty() {
        &directory[..SEPARATOR.len_utf8()]
    } else {
        trimmed
    }
}

/// Splits `path` before the last extension separator of its final segment.
///
/// The second half keeps the separator and is empty when the final segment
/// has no `.` at all. Dots in directory names are never treated as
/// extension separators.
///
/// ```
/// use optics_extra::file_path::split_extension;
///
/// assert_eq!(split_extension("dir/file.tar.gz"), ("dir/file.tar", ".gz"));
/// assert_eq!(split_extension("dir.d/file"), ("dir.d/file", ""));
/// assert_eq!(split_extension(".bashrc"), ("", ".bashrc"));
/// ```
#[must_use]
pub fn split_extension(path: &str) -> (&str, &str) {
    let (directory, file_name) = split_file_name(path);
    match file_name.rfind(EXTENSION_SEPARATOR) {
        Some(index) => path.split_at(directory.len() + index),
        None => (path, ""),
    }
}

/// Returns the extension of `path`, including the leading `.`.
#[must_use]
pub fn take_extension(path: &str) -> &str {
    split_extension(path).1
}

/// Returns `path` with the extension of its final segment removed.
#[must_use]
pub fn drop_extension(path: &str) -> &str {
    split_extension(path).0
}

/// Returns the final segment of `path` without its extension.
#[must_use]
pub fn take_base_name(path: &str) -> &str {
    drop_extension(take_file_name(path))
}

/// Joins two paths with a separator (`</>`).
///
/// An absolute `child` replaces `parent`. Empty operands are dropped, and no
/// separator is doubled when `parent` already ends with one.
///
/// ```
/// use optics_extra::file_path::combine;
///
/// assert_eq!(combine("hello", "!!!"), "hello/!!!");
/// assert_eq!(combine("dir/", "file"), "dir/file");
/// assert_eq!(combine("dir", "/etc/hosts"), "/etc/hosts");
/// assert_eq!(combine("", "file"), "file");
/// assert_eq!(combine("dir", ""), "dir");
/// ```
#[must_use]
pub fn combine(parent: &str, child: &str) -> String {
    if is_absolute(child) || parent.is_empty() {
        child.to_owned()
    } else if child.is_empty() {
        parent.to_owned()
    } else if has_trailing_separator(parent) {
        format!("{parent}{child}")
    } else {
        format!("{parent}{SEPARATOR}{child}")
    }
}

/// Appends an extension to `path` (`<.>`).
///
/// The extension may be given with or without its leading `.`; an empty
/// extension leaves `path` unchanged.
///
/// ```
/// use optics_extra::file_path::add_extension;
///
/// assert_eq!(add_extension("file", "txt"), "file.txt");
/// assert_eq!(add_extension("file", ".txt"), "file.txt");
/// assert_eq!(add_extension("file.txt", ""), "file.txt");
/// ```
#[must_use]
pub fn add_extension(path: &str, extension: &str) -> String {
    if extension.is_empty() || extension.starts_with(EXTENSION_SEPARATOR) {
        format!("{path}{extension}")
    } else {
        format!("{path}{EXTENSION_SEPARATOR}{extension}")
    }
}
