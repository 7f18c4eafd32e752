/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Shared test helpers for the avl_tree integration tests.

use avl_tree::{AvlTree, NodePool};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// The strings used by the range and iterator scenarios, in insertion order.
pub const WORDS: [&str; 9] = ["ab", "aba", "abc", "a", "aa", "aaa", "b", "a-", "a!"];

/// An empty tree of integers in ascending order.
pub fn int_tree() -> AvlTree<i32> {
    AvlTree::new(|a: &i32, b: &i32| a < b)
}

/// An empty tree of integers in ascending order, drawing from `pool`.
pub fn int_tree_in(pool: &NodePool<i32>) -> AvlTree<i32> {
    AvlTree::with_pool(|a: &i32, b: &i32| a < b, pool.clone())
}

/// Build an ascending integer tree by inserting `items` in order.
pub fn int_tree_from(items: impl IntoIterator<Item = i32>) -> AvlTree<i32> {
    let mut tree = int_tree();
    for item in items {
        assert_eq!(tree.insert(item), None, "{item} inserted twice");
    }
    tree
}

/// Build an ascending string tree holding [`WORDS`].
pub fn word_tree() -> AvlTree<&'static str> {
    let mut tree = AvlTree::<&'static str>::new(|a, b| a < b);
    for word in WORDS {
        tree.insert(word);
    }
    tree
}

/// A deterministic permutation of `0..n`.
pub fn permutation(n: i32, seed: u64) -> Vec<i32> {
    let mut items: Vec<i32> = (0..n).collect();
    items.shuffle(&mut StdRng::seed_from_u64(seed));
    items
}

/// Collect the items of `tree` in iteration order.
pub fn items<T: Copy>(tree: &AvlTree<T>) -> Vec<T> {
    tree.iter().copied().collect()
}

/// Collect the items a sweep hands to its callback.
pub fn swept<T: Copy>(sweep: impl FnOnce(&mut dyn FnMut(&T) -> bool)) -> Vec<T> {
    let mut seen = Vec::new();
    sweep(&mut |item: &T| {
        seen.push(*item);
        true
    });
    seen
}
