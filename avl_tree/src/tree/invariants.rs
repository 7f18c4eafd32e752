/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Structural invariant checks.
//!
//! With the `unittest` feature these run after every mutation (`insert`,
//! `delete`, `reverse`) to catch violations where they are introduced.

use super::AvlTree;

impl<T> AvlTree<T> {
    /// Assert every structural invariant of the tree.
    ///
    /// Checks, for every node reachable from the root:
    /// 1. the cached height matches the children's heights;
    /// 2. the balance factor is within `-1..=1`;
    /// 3. each child points back at its parent, and the root has no parent;
    ///
    /// and, for the tree as a whole:
    /// 4. every stored node is reachable from the root;
    /// 5. an in-order walk yields strictly increasing items, which implies
    ///    search-tree order and uniqueness.
    ///
    /// # Panics
    ///
    /// Panics with a descriptive message on the first violation.
    pub fn check_invariants(&self) {
        let Some(root) = self.root else {
            assert_eq!(
                self.nodes.len(),
                0,
                "empty tree still stores {} nodes",
                self.nodes.len()
            );
            return;
        };
        assert!(
            self.nodes[root].parent.is_none(),
            "root {root:?} has parent {:?}",
            self.nodes[root].parent
        );

        let mut reachable = 0;
        for (idx, node, depth) in self.nodes() {
            reachable += 1;

            let left_height = self.nodes.height(node.left);
            let right_height = self.nodes.height(node.right);
            assert_eq!(
                node.height,
                left_height.max(right_height) + 1,
                "stale height at {idx:?} (depth {depth}): left={left_height}, right={right_height}",
            );

            let balance = self.nodes.balance(idx);
            assert!(
                (-1..=1).contains(&balance),
                "node {idx:?} (depth {depth}) out of balance: {balance}",
            );

            for child in [node.left, node.right].into_iter().flatten() {
                assert_eq!(
                    self.nodes[child].parent,
                    Some(idx),
                    "child {child:?} of {idx:?} points at the wrong parent",
                );
            }
        }
        assert_eq!(
            reachable,
            self.nodes.len(),
            "{} stored nodes are unreachable from the root",
            self.nodes.len().saturating_sub(reachable),
        );

        let mut prev: Option<&T> = None;
        for (position, item) in self.iter().enumerate() {
            if let Some(prev) = prev {
                assert!(
                    (self.less)(prev, item),
                    "items at in-order positions {} and {position} are not strictly increasing",
                    position - 1,
                );
            }
            prev = Some(item);
        }
    }
}
