//! Integration tests for the path component lenses and path combinators.

#![forbid(unsafe_code)]

use optics_extra::file_path::{split_extension, take_base_name, take_extension, take_file_name};
use optics_extra::lens;
use optics_extra::optics::file_path::{
    PathLensExt, PathSetterExt, basename, directory, extension, filename,
};
use optics_extra::optics::{Lens, Setter, VecTraversal, both, first, second};
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
struct Asset {
    id: u32,
    path: String,
}

// =============================================================================
// Component lenses
// =============================================================================

/// Test renaming a file while keeping its directory and extension
#[rstest]
fn test_basename_set_keeps_directory_and_extension() {
    let renamed = basename().set("path/name.png".to_string(), "filename".to_string());
    assert_eq!(renamed, "path/filename.png");
}

#[rstest]
fn test_directory_get() {
    assert_eq!(directory().get(&"long/path/name.txt".to_string()), "long/path");
}

#[rstest]
#[case("long/path/name.txt", "long/path", "name.txt", "name", ".txt")]
#[case("/etc/hosts", "/etc", "hosts", "hosts", "")]
#[case("/vmlinuz", "/", "vmlinuz", "vmlinuz", "")]
#[case("README", "", "README", "README", "")]
#[case("src/.gitignore", "src", ".gitignore", "", ".gitignore")]
#[case("dist/app.tar.gz", "dist", "app.tar.gz", "app.tar", ".gz")]
#[case("", "", "", "", "")]
fn test_component_getters(
    #[case] path: &str,
    #[case] expected_directory: &str,
    #[case] expected_filename: &str,
    #[case] expected_basename: &str,
    #[case] expected_extension: &str,
) {
    let path = path.to_string();
    assert_eq!(directory().get(&path), expected_directory);
    assert_eq!(filename().get(&path), expected_filename);
    assert_eq!(basename().get(&path), expected_basename);
    assert_eq!(extension().get(&path), expected_extension);
}

/// Test that basename and extension concatenate back to the filename
#[rstest]
#[case("dir/name.png")]
#[case("name")]
#[case(".profile")]
#[case("a.b/c.d.e")]
fn test_basename_and_extension_rebuild_filename(#[case] path: &str) {
    let path = path.to_string();
    let rebuilt = format!("{}{}", basename().get(&path), extension().get(&path));
    assert_eq!(rebuilt, filename().get(&path));
}

#[rstest]
#[case("photo.jpeg", ".png", "photo.png")]
#[case("photo.jpeg", "png", "photo.png")]
#[case("photo", ".png", "photo.png")]
#[case("photo.jpeg", "", "photo")]
#[case("archive.tar.gz", ".zst", "archive.tar.zst")]
fn test_extension_set(#[case] path: &str, #[case] value: &str, #[case] expected: &str) {
    assert_eq!(extension().set(path.to_string(), value.to_string()), expected);
}

#[rstest]
fn test_directory_set_moves_file() {
    let moved = directory().set("build/debug/app".to_string(), "/usr/local/bin".to_string());
    assert_eq!(moved, "/usr/local/bin/app");
}

#[rstest]
fn test_filename_over() {
    let shouted = filename().over("docs/readme".to_string(), |name| name.to_uppercase());
    assert_eq!(shouted, "docs/README");
}

/// Test that the primitives agree with the lenses
#[rstest]
fn test_primitives_agree_with_lenses() {
    let path = "assets/logo.svg".to_string();
    assert_eq!(take_file_name(&path), filename().get(&path));
    assert_eq!(take_base_name(&path), basename().get(&path));
    assert_eq!(take_extension(&path), extension().get(&path));
    assert_eq!(split_extension(&path), ("assets/logo", ".svg"));
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn test_field_lens_composed_with_extension() {
    let asset = Asset {
        id: 7,
        path: "img/banner.gif".to_string(),
    };
    let asset_extension = lens!(Asset, path).compose(extension());

    assert_eq!(asset_extension.get(&asset), ".gif");

    let converted = asset_extension.set(asset, ".webp".to_string());
    assert_eq!(converted.path, "img/banner.webp");
    assert_eq!(converted.id, 7);
}

#[rstest]
fn test_traversal_composed_with_basename() {
    let paths = vec!["a/one.rs".to_string(), "b/two.rs".to_string()];
    let suffixed = VecTraversal::new()
        .compose_setter(basename())
        .over(paths, |name: String| name + "_test");
    assert_eq!(suffixed, vec!["a/one_test.rs".to_string(), "b/two_test.rs".to_string()]);
}

// =============================================================================
// Combinators
// =============================================================================

/// Test appending a segment to both elements of a pair
#[rstest]
fn test_append_segment_through_both() {
    let pair = ("hello".to_string(), "world".to_string());
    assert_eq!(
        both().append_segment(pair, "!!!"),
        ("hello/!!!".to_string(), "world/!!!".to_string())
    );
}

#[rstest]
fn test_append_extension_through_vec_traversal() {
    let stems = vec!["a".to_string(), "b".to_string()];
    let sources = VecTraversal::new().append_extension(stems, "c");
    assert_eq!(sources, vec!["a.c".to_string(), "b.c".to_string()]);
}

#[rstest]
fn test_append_segment_through_directory() {
    let path = "src/lib.rs".to_string();
    assert_eq!(directory().append_segment(path, "optics"), "src/optics/lib.rs");
}

#[rstest]
fn test_append_segment_returning_reports_new_leaf() {
    let (leaf, entry) = first().append_segment_returning(("/var".to_string(), 1), "log");
    assert_eq!(leaf, "/var/log");
    assert_eq!(entry, ("/var/log".to_string(), 1));
}

#[rstest]
fn test_append_segment_returning_old_reports_previous_leaf() {
    let (previous, entry) = second().append_segment_returning_old((0, "tmp".to_string()), "cache");
    assert_eq!(previous, "tmp");
    assert_eq!(entry, (0, "tmp/cache".to_string()));
}

#[rstest]
fn test_append_extension_returning_through_composed_lens() {
    let asset = Asset {
        id: 1,
        path: "out/report".to_string(),
    };
    let (leaf, updated) = lens!(Asset, path).append_extension_returning(asset, "pdf");
    assert_eq!(leaf, "out/report.pdf");
    assert_eq!(updated.path, "out/report.pdf");
}

#[rstest]
fn test_append_extension_returning_old_on_basename() {
    let (previous, path) = basename().append_extension_returning_old("dir/data.csv".to_string(), "bak");
    assert_eq!(previous, "data");
    assert_eq!(path, "dir/data.bak.csv");
}

/// Test that an absolute segment replaces the focused path
#[rstest]
fn test_append_absolute_segment_replaces() {
    let pair = ("relative".to_string(), "other".to_string());
    assert_eq!(
        both().append_segment(pair, "/abs"),
        ("/abs".to_string(), "/abs".to_string())
    );
}

// =============================================================================
// In-place combinators
// =============================================================================

#[rstest]
fn test_assign_variants_mutate_state() {
    let mut entry = (String::from("target"), String::from("lib"));

    both().append_segment_assign(&mut entry, "release");
    assert_eq!(entry, ("target/release".to_string(), "lib/release".to_string()));

    second().append_extension_assign(&mut entry, "so");
    assert_eq!(entry.1, "lib/release.so");
}

#[rstest]
fn test_assign_returning_variants() {
    let mut path = "notes".to_string();

    let previous = filename().append_extension_assign_returning_old(&mut path, "md");
    assert_eq!(previous, "notes");
    assert_eq!(path, "notes.md");

    let leaf = directory().append_segment_assign_returning(&mut path, "drafts");
    assert_eq!(leaf, "drafts");
    assert_eq!(path, "drafts/notes.md");

    let previous = directory().append_segment_assign_returning_old(&mut path, "2024");
    assert_eq!(previous, "drafts");
    assert_eq!(path, "drafts/2024/notes.md");
}
