/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for reverse, copy, clone, re-sorting and release.

use std::cmp::Ordering;

use avl_tree::{AvlTree, Bound, NodePool};
use pretty_assertions::assert_eq;

use crate::helpers::{int_tree_from, int_tree_in, items, permutation};

#[test]
fn test_reverse() {
    let mut tree = int_tree_from(permutation(1000, 55));
    assert_eq!(items(&tree), (0..1000).collect::<Vec<_>>());

    tree.reverse();
    tree.check_invariants();
    assert_eq!(items(&tree), (0..1000).rev().collect::<Vec<_>>());
    assert_eq!(tree.min(), Some(&999));
    assert_eq!(tree.max(), Some(&0));

    tree.reverse();
    tree.check_invariants();
    assert_eq!(items(&tree), (0..1000).collect::<Vec<_>>());
}

#[test]
fn test_reversed_tree_stays_usable() {
    let mut tree = int_tree_from(0..100);
    tree.reverse();

    tree.insert(1000);
    tree.insert(-1);
    assert_eq!(tree.delete(&50), Some(50));
    tree.check_invariants();
    assert_eq!(tree.min(), Some(&1000));
    assert_eq!(tree.max(), Some(&-1));
    assert!(tree.has(tree.compare_to(&49)));

    // Bounds follow the reversed order: "after 3" means smaller numbers.
    let mut seen = Vec::new();
    tree.after(Bound::le(tree.compare_to(&3)), |item| {
        seen.push(*item);
        true
    });
    assert_eq!(seen, [2, 1, 0, -1]);
}

#[test]
fn test_compare_to_keeps_ordering_across_reverse() {
    let mut tree = int_tree_from(0..10);
    let before = tree.compare_to(&5);
    tree.reverse();
    let after = tree.compare_to(&5);
    assert_eq!(before(&7), Ordering::Greater);
    assert_eq!(after(&7), Ordering::Less);
}

#[test]
fn test_copy_is_empty_and_shares_pool() {
    let tree = int_tree_from(0..10);
    let mut copy = tree.copy();
    assert!(copy.is_empty());
    assert!(copy.pool().same_pool(tree.pool()));

    copy.insert(2);
    copy.insert(1);
    assert_eq!(items(&copy), [1, 2]);
    assert_eq!(tree.len(), 10);
}

#[test]
fn test_clone_is_deep() {
    let tree = int_tree_from(permutation(500, 3));
    let mut clone = tree.clone();
    assert!(clone.pool().same_pool(tree.pool()));
    assert_eq!(items(&clone), items(&tree));
    assert_eq!(
        clone.root().map(|root| root.height()),
        tree.root().map(|root| root.height())
    );

    for i in 0..250 {
        clone.delete(&i);
    }
    clone.check_invariants();
    assert_eq!(clone.len(), 250);
    assert_eq!(tree.len(), 500);
    assert_eq!(items(&tree), (0..500).collect::<Vec<_>>());
}

#[test]
fn test_clone_of_empty_tree() {
    let tree = int_tree_from([]);
    let clone = tree.clone_tree();
    assert!(clone.is_empty());
    clone.check_invariants();
}

#[test]
fn test_sort_by_falls_back_to_source_order() {
    // Ordered by tag; re-sorted by value with tag as the tie-break.
    let mut tree = AvlTree::new(|a: &(i32, char), b: &(i32, char)| a.1 < b.1);
    for pair in [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')] {
        tree.insert(pair);
    }

    let mut sorted = tree.sort_by(|a, b| a.0 < b.0);
    assert!(sorted.is_empty());
    assert!(sorted.pool().same_pool(tree.pool()));
    for pair in &tree {
        sorted.insert(*pair);
    }
    assert_eq!(sorted.len(), 5);
    assert_eq!(
        items(&sorted),
        [(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
    );
}

#[test]
fn test_sorted_clone() {
    let tree = int_tree_from(permutation(300, 11));
    let by_residue = tree.sorted_clone(|a, b| a % 3 < b % 3);
    by_residue.check_invariants();
    assert_eq!(by_residue.len(), 300);

    let mut expected: Vec<i32> = (0..300).collect();
    expected.sort_by_key(|item| (item % 3, *item));
    assert_eq!(items(&by_residue), expected);

    // The source is untouched.
    assert_eq!(items(&tree), (0..300).collect::<Vec<_>>());
}

#[test]
fn test_release_recycles_storage() {
    let pool = NodePool::new();
    let mut tree = int_tree_in(&pool);
    for item in permutation(1000, 5) {
        tree.insert(item);
    }
    assert_eq!(pool.idle_arenas(), 0);

    tree.release();
    assert_eq!(pool.idle_arenas(), 1);
    let capacity = pool.idle_capacity();
    assert!(capacity >= 1000);

    let mut next = int_tree_in(&pool);
    assert_eq!(pool.idle_arenas(), 0);
    for item in 0..1000 {
        next.insert(item);
    }
    next.check_invariants();
    drop(next);
    assert_eq!(pool.idle_capacity(), capacity);
}

#[test]
fn test_derived_trees_recycle_into_shared_pool() {
    let tree = int_tree_from(0..100);
    let pool = tree.pool().clone();
    let clone = tree.clone_tree();
    let sorted = tree.sorted_clone(|a, b| b < a);
    drop(clone);
    drop(sorted);
    assert_eq!(pool.idle_arenas(), 2);
    drop(tree);
    assert_eq!(pool.idle_arenas(), 3);
}
