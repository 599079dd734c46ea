//! Integration tests for the set membership optics.
//!
//! - [`contains`]: reads and writes whether a key is in a set
//! - [`members`]: remaps every element of a set, merging collisions
//! - [`set_of`]: collects the foci of a traversal into a set

#![forbid(unsafe_code)]

use std::collections::{BTreeSet, HashSet};

use optics_extra::lens;
use optics_extra::optics::set::{ContainsLens, Membership, contains, members, set_of};
use optics_extra::optics::{Lens, Setter, Traversal, VecTraversal, first};
use rstest::{fixture, rstest};

#[fixture]
fn one_to_four() -> BTreeSet<i32> {
    BTreeSet::from([1, 2, 3, 4])
}

// =============================================================================
// contains
// =============================================================================

#[rstest]
#[case(3, true)]
#[case(5, false)]
#[case(-1, false)]
fn test_contains_get(one_to_four: BTreeSet<i32>, #[case] key: i32, #[case] expected: bool) {
    assert_eq!(contains(key).get(&one_to_four), expected);
}

/// Test removing a present element
#[rstest]
fn test_contains_set_false_removes(one_to_four: BTreeSet<i32>) {
    assert_eq!(contains(3).set(one_to_four, false), BTreeSet::from([1, 2, 4]));
}

/// Test inserting an absent element
#[rstest]
fn test_contains_set_true_inserts(one_to_four: BTreeSet<i32>) {
    assert_eq!(contains(5).set(one_to_four, true), BTreeSet::from([1, 2, 3, 4, 5]));
}

/// Test that writing the current membership leaves the set untouched
#[rstest]
#[case(3, true)]
#[case(7, false)]
fn test_contains_set_current_value_is_noop(
    one_to_four: BTreeSet<i32>,
    #[case] key: i32,
    #[case] value: bool,
) {
    assert_eq!(contains(key).set(one_to_four.clone(), value), one_to_four);
}

#[rstest]
fn test_contains_on_empty_set() {
    let empty: BTreeSet<u8> = BTreeSet::new();
    assert!(!contains(0).get(&empty));
    assert_eq!(contains(0).set(empty, true), BTreeSet::from([0]));
}

#[rstest]
fn test_contains_over_toggles_membership(one_to_four: BTreeSet<i32>) {
    let toggled = contains(2).over(one_to_four, |present| !present);
    assert_eq!(toggled, BTreeSet::from([1, 3, 4]));
}

#[rstest]
fn test_contains_works_with_hash_set() {
    let tags: HashSet<String> = ["draft", "review"].iter().map(ToString::to_string).collect();
    let published = contains("draft".to_string()).set(tags, false);
    let published = contains("published".to_string()).set(published, true);

    let expected: HashSet<String> = ["review", "published"].iter().map(ToString::to_string).collect();
    assert_eq!(published, expected);
}

#[rstest]
fn test_contains_key_accessor() {
    let lens = ContainsLens::new("needle");
    assert_eq!(*lens.key(), "needle");
    assert_eq!(lens, contains("needle"));
}

/// Test that a membership lens composes behind a struct field lens
#[rstest]
fn test_contains_composed_with_field_lens() {
    #[derive(Clone, PartialEq, Debug)]
    struct Account {
        owner: String,
        roles: BTreeSet<String>,
    }

    let account = Account {
        owner: "alice".to_string(),
        roles: BTreeSet::from(["reader".to_string()]),
    };

    let is_admin = lens!(Account, roles).compose(contains("admin".to_string()));
    assert!(!is_admin.get(&account));

    let promoted = is_admin.set(account, true);
    assert!(is_admin.get(&promoted));
    assert_eq!(promoted.owner, "alice");
    assert_eq!(promoted.roles.len(), 2);
}

#[rstest]
fn test_contains_through_tuple_lens() {
    let entry = (BTreeSet::from([10_u32]), "label");
    let updated = first().compose(contains(20_u32)).set(entry, true);
    assert_eq!(updated, (BTreeSet::from([10, 20]), "label"));
}

// =============================================================================
// members
// =============================================================================

#[rstest]
fn test_members_maps_every_element(one_to_four: BTreeSet<i32>) {
    assert_eq!(members().over(one_to_four, |x: i32| x * 10), BTreeSet::from([10, 20, 30, 40]));
}

/// Test that colliding images merge into one element
#[rstest]
fn test_members_merges_collisions(one_to_four: BTreeSet<i32>) {
    let parity = members().over(one_to_four, |x: i32| x % 2);
    assert_eq!(parity, BTreeSet::from([0, 1]));
}

#[rstest]
fn test_members_set_all_collapses_to_single_element(one_to_four: BTreeSet<i32>) {
    assert_eq!(members().set_all(one_to_four, 7), BTreeSet::from([7]));
}

#[rstest]
fn test_members_on_empty_set() {
    let empty: BTreeSet<i32> = BTreeSet::new();
    assert!(members().over(empty, |x: i32| x + 1).is_empty());
}

#[rstest]
fn test_members_on_hash_set() {
    let words: HashSet<&str> = HashSet::from(["Apple", "apple", "Pear"]);
    let lowered: HashSet<String> = words.into_iter().map(str::to_string).collect();
    let folded = members().over(lowered, |word: String| word.to_lowercase());
    assert_eq!(folded, HashSet::from(["apple".to_string(), "pear".to_string()]));
}

#[rstest]
fn test_members_composes_with_field_lens() {
    #[derive(Clone, PartialEq, Debug)]
    struct Team {
        ids: BTreeSet<u32>,
    }

    let team = Team {
        ids: BTreeSet::from([1, 2]),
    };
    let shifted = lens!(Team, ids).compose_setter(members()).over(team, |id: u32| id + 100);
    assert_eq!(shifted.ids, BTreeSet::from([101, 102]));
}

// =============================================================================
// set_of and Membership
// =============================================================================

#[rstest]
fn test_set_of_deduplicates_and_orders() {
    let visits = vec!["home", "about", "home", "blog"];
    assert_eq!(
        set_of(&VecTraversal::new(), &visits),
        BTreeSet::from(["about", "blog", "home"])
    );
}

#[rstest]
fn test_set_of_size_never_exceeds_traversal_length() {
    let traversal: VecTraversal<i32> = VecTraversal::new();
    let values = vec![3, 1, 3, 3, 2];
    assert!(set_of(&traversal, &values).len() <= traversal.length(&values));
}

#[rstest]
fn test_membership_insert_and_remove_are_idempotent(one_to_four: BTreeSet<i32>) {
    let inserted_twice = one_to_four.clone().insert_member(9).insert_member(9);
    assert_eq!(inserted_twice, one_to_four.clone().insert_member(9));

    let removed_twice = one_to_four.clone().remove_member(&1).remove_member(&1);
    assert_eq!(removed_twice, one_to_four.remove_member(&1));
}
