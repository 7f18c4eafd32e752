/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for TreeIter and the callback sweeps.

use std::cmp::Ordering;

use avl_tree::{Bound, Direction, IterError};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::helpers::{int_tree, int_tree_from, swept, word_tree};

/// Compare integers against `reference` in ascending order.
fn cmp(reference: i32) -> impl Fn(&i32) -> Ordering {
    move |item| item.cmp(&reference)
}

fn forward<T: Copy>(iter: &mut avl_tree::TreeIter<'_, T>) -> Vec<T> {
    let mut seen = Vec::new();
    while iter.move_next() {
        seen.push(*iter.item());
    }
    seen
}

fn backward<T: Copy>(iter: &mut avl_tree::TreeIter<'_, T>) -> Vec<T> {
    let mut seen = Vec::new();
    while iter.move_prev() {
        seen.push(*iter.item());
    }
    seen
}

#[test]
fn test_iter_string_bounds() {
    let tree = word_tree();
    let expected = ["ab", "aba", "abc"];

    let mut iter = tree.iter_bounded(
        Some(Bound::lt(tree.compare_to(&"ab"))),
        Some(Bound::gt(tree.compare_to(&"ac"))),
    );
    assert_eq!(forward(&mut iter), expected);

    let mut iter = tree.iter_bounded(
        Some(Bound::le(tree.compare_to(&"aaa"))),
        Some(Bound::ge(tree.compare_to(&"b"))),
    );
    assert_eq!(forward(&mut iter), expected);

    let mut iter = tree.iter_bounded(Some(Bound::lt(tree.compare_to(&"z"))), None);
    assert_eq!(forward(&mut iter), Vec::<&str>::new());

    let mut iter = tree.iter_bounded(None, Some(Bound::gt(tree.compare_to(&"0"))));
    assert_eq!(forward(&mut iter), Vec::<&str>::new());
}

#[test]
fn test_range_string_bounds() {
    let tree = word_tree();
    let seen = swept(|f| {
        tree.range(
            Some(Bound::lt(tree.compare_to(&"ab"))),
            Some(Bound::gt(tree.compare_to(&"ac"))),
            f,
        )
    });
    assert_eq!(seen, ["ab", "aba", "abc"]);
}

#[rstest]
#[case(0)]
#[case(10)]
#[case(90)]
fn test_iter_direction(#[case] idx: i32) {
    let tree = int_tree_from(0..100);

    let mut iter = tree.iter_bounded(Some(Bound::lt(cmp(idx))), None);
    assert_eq!(forward(&mut iter), (idx..100).collect::<Vec<_>>());

    let mut iter = tree.iter_bounded(None, Some(Bound::gt(cmp(idx))));
    assert_eq!(backward(&mut iter), (0..=idx).rev().collect::<Vec<_>>());
}

#[test]
fn test_backward_exclusive_upper_bound() {
    let tree = int_tree_from(0..100);
    let mut iter = tree.iter_bounded(None, Some(Bound::ge(cmp(90))));
    assert_eq!(backward(&mut iter), (0..90).rev().collect::<Vec<_>>());
}

#[test]
fn test_backward_between_bounds() {
    let tree = int_tree_from(0..10);
    let mut iter = tree.iter_bounded(Some(Bound::lt(cmp(3))), Some(Bound::gt(cmp(7))));
    assert_eq!(backward(&mut iter), [7, 6, 5, 4, 3]);
}

#[test]
fn test_reversal_while_positioned_yields_neighbour() {
    let tree = int_tree_from(0..10);
    let mut iter = tree.iter();
    for expected in 0..3 {
        assert!(iter.move_next());
        assert_eq!(*iter.item(), expected);
    }
    assert!(iter.move_prev());
    assert_eq!(*iter.item(), 1);
    assert_eq!(iter.direction(), Some(Direction::Backward));
    assert!(iter.move_prev());
    assert_eq!(*iter.item(), 0);
    assert!(iter.move_next());
    assert_eq!(*iter.item(), 1);
    assert!(iter.move_next());
    assert_eq!(*iter.item(), 2);
}

#[test]
fn test_reversal_after_exhaustion_yields_pivot() {
    let tree = int_tree_from(0..10);

    // Off the low end, then back up.
    let mut iter = tree.iter();
    assert!(iter.move_next());
    assert!(!iter.move_prev());
    assert!(!iter.move_prev());
    assert_eq!(iter.try_item(), Err(IterError::Exhausted));
    assert!(iter.move_next());
    assert_eq!(*iter.item(), 0);
    assert!(iter.move_next());
    assert_eq!(*iter.item(), 1);

    // Into the stop bound, then back down.
    let mut iter = tree.iter_bounded(None, Some(Bound::ge(cmp(5))));
    assert_eq!(forward(&mut iter), [0, 1, 2, 3, 4]);
    assert!(!iter.move_next());
    assert!(iter.move_prev());
    assert_eq!(*iter.item(), 4);
    assert!(iter.move_prev());
    assert_eq!(*iter.item(), 3);
}

#[test]
fn test_reversal_keeps_bounds() {
    let tree = int_tree_from(0..10);
    let mut iter = tree.iter_bounded(Some(Bound::lt(cmp(3))), Some(Bound::gt(cmp(6))));
    assert_eq!(forward(&mut iter), [3, 4, 5, 6]);
    assert_eq!(backward(&mut iter), [6, 5, 4, 3]);
    assert_eq!(forward(&mut iter), [3, 4, 5, 6]);
}

#[test]
fn test_first_step_backward_starts_at_max() {
    let tree = int_tree_from([4, 6, 1, 3]);
    let mut iter = tree.iter();
    assert!(iter.move_prev());
    assert_eq!(*iter.item(), 6);
}

#[test]
fn test_empty_tree_iteration() {
    let tree = int_tree();
    let mut iter = tree.iter();
    assert!(!iter.move_next());
    assert!(!iter.move_prev());
    assert!(!iter.move_next());
    assert_eq!(tree.iter().next(), None);
}

#[test]
fn test_release_is_terminal() {
    let tree = int_tree_from(0..10);
    let mut iter = tree.iter();
    assert!(iter.move_next());
    assert!(iter.is_positioned());
    iter.release();
    assert!(!iter.is_positioned());
    assert_eq!(iter.direction(), None);
    assert!(!iter.move_next());
    assert!(!iter.move_prev());
    assert_eq!(iter.try_item(), Err(IterError::Released));
}

#[test]
#[should_panic(expected = "iterator was released")]
fn test_item_after_release_panics() {
    let tree = int_tree_from(0..3);
    let mut iter = tree.iter();
    iter.move_next();
    iter.release();
    let _ = iter.item();
}

#[test]
fn test_iterator_trait_is_ascending_and_fused() {
    let tree = int_tree_from([5, 2, 8, 1]);
    let mut iter = tree.iter();
    assert_eq!(iter.by_ref().copied().collect::<Vec<_>>(), [1, 2, 5, 8]);
    assert_eq!(iter.next(), None);
    assert_eq!((&tree).into_iter().count(), 4);
}

#[rstest]
#[case::inclusive_below_all(Bound::le(cmp(-1)), vec![1, 3, 4, 6])]
#[case::inclusive(Bound::lt(cmp(3)), vec![3, 4, 6])]
#[case::exclusive(Bound::le(cmp(3)), vec![4, 6])]
#[case::between_items(Bound::lt(cmp(2)), vec![3, 4, 6])]
fn test_after(#[case] start: Bound<'static, i32>, #[case] expected: Vec<i32>) {
    let tree = int_tree_from([4, 6, 1, 3]);
    assert_eq!(swept(|f| tree.after(start, f)), expected);
}

#[rstest]
#[case::above_all(Bound::gt(cmp(10)), vec![1, 3, 4, 6])]
#[case::exclusive(Bound::ge(cmp(4)), vec![1, 3])]
#[case::inclusive(Bound::gt(cmp(4)), vec![1, 3, 4])]
fn test_before(#[case] stop: Bound<'static, i32>, #[case] expected: Vec<i32>) {
    let tree = int_tree_from([4, 6, 1, 3]);
    assert_eq!(swept(|f| tree.before(stop, f)), expected);
}

#[test]
fn test_walk_stops_when_callback_declines() {
    let tree = int_tree_from([4, 6, 1, 3]);
    let mut seen = Vec::new();
    tree.walk(|item| {
        seen.push(*item);
        *item < 3
    });
    assert_eq!(seen, [1, 3]);
}

#[test]
fn test_custom_bound() {
    let tree = int_tree_from(0..20);
    let mut iter = tree.iter_bounded(Some(Bound::new(|item: &i32| *item < 15)), None);
    assert_eq!(forward(&mut iter), [15, 16, 17, 18, 19]);
}
