/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for the diagnostics.

use rstest::rstest;

use crate::helpers::{int_tree, int_tree_from, permutation};

const N: i32 = 20_000;

/// Expected mean node depth of a balanced tree of `n` nodes.
fn expected_mean_depth(n: i32) -> f64 {
    f64::from(n).log2() - 1.5
}

#[rstest]
#[case::random(permutation(N, 0))]
#[case::sequential((0..N).collect())]
#[case::descending((0..N).rev().collect())]
fn test_mean_depth_is_logarithmic(#[case] items: Vec<i32>) {
    let tree = int_tree_from(items);
    let (mean, std_dev) = tree.height_stats();
    let expected = expected_mean_depth(N);
    assert!(
        (mean - expected).abs() < 1.44,
        "mean depth {mean} too far from {expected}"
    );
    assert!(std_dev > 0.0);
    assert!(std_dev < mean);
}

#[test]
fn test_height_stats_small_trees() {
    assert_eq!(int_tree().height_stats(), (0.0, 0.0));
    assert_eq!(int_tree_from([1]).height_stats(), (0.0, 0.0));
    // Depths 0, 1, 1.
    let (mean, _) = int_tree_from([2, 1, 3]).height_stats();
    assert!((mean - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_depth_of() {
    let tree = int_tree_from([1, 0, 3, 2, 4]);
    assert_eq!(tree.depth_of(tree.compare_to(&1)), Some((&1, 0)));
    assert_eq!(tree.depth_of(tree.compare_to(&0)), Some((&0, 1)));
    assert_eq!(tree.depth_of(tree.compare_to(&3)), Some((&3, 1)));
    assert_eq!(tree.depth_of(tree.compare_to(&2)), Some((&2, 2)));
    assert_eq!(tree.depth_of(tree.compare_to(&4)), Some((&4, 2)));
    assert_eq!(tree.depth_of(tree.compare_to(&5)), None);
}

#[test]
fn test_rebalance_counters() {
    let mut tree = int_tree_from(0..3);
    let stats = tree.rebalance_stats();
    assert_eq!(stats.inserts, 3);
    assert_eq!(stats.insert_rebalances, 1);
    assert_eq!(stats.removes, 0);
    assert_eq!(stats.rebalances_per_remove(), 0.0);

    // Replacing an equal item allocates nothing.
    tree.insert(1);
    assert_eq!(tree.rebalance_stats().inserts, 3);

    tree.delete(&1);
    let stats = tree.rebalance_stats();
    assert_eq!(stats.removes, 1);
    assert_eq!(stats.remove_rebalances, 0);
    assert!((stats.rebalances_per_insert() - 1.0 / 3.0).abs() < 1e-12);
}
