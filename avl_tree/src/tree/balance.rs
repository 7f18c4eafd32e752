/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! The rebalance walk.
//!
//! After a node is attached or detached, the heights along the path to the
//! root may change and some ancestors may end up with a balance factor of
//! ±2. [`AvlTree::rebalance_at`] walks upward from the first affected node,
//! restoring the AVL property with single or double rotations, and stops as
//! soon as a subtree's height comes out unchanged.

use super::AvlTree;
use crate::arena::NodeIndex;
use crate::node::Side;

/// Which mutation triggered a rebalance walk. Only used for accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RebalancePath {
    Insert,
    Delete,
}

impl<T> AvlTree<T> {
    /// Walk upward from `n`, rebalancing every node whose balance factor
    /// left the `-1..=1` range.
    ///
    /// The walk ends at the root (which is then recorded as the tree's root)
    /// or at the first node whose height did not change.
    ///
    /// # Panics
    ///
    /// Panics if a balance factor outside `-2..=2` is observed: the tree was
    /// already corrupt before this mutation.
    pub(crate) fn rebalance_at(&mut self, mut n: NodeIndex, path: RebalancePath) {
        loop {
            let old_height = self.nodes[n].height;
            match self.nodes.balance(n) {
                -1..=1 => {}
                2 => {
                    n = self.rotate_heavy(n, Side::Right);
                    self.count_rebalance(path);
                }
                -2 => {
                    n = self.rotate_heavy(n, Side::Left);
                    self.count_rebalance(path);
                }
                balance => panic!("tree too far out of shape: balance factor {balance} at {n:?}"),
            }
            self.nodes.set_height(n);
            let Some(parent) = self.nodes[n].parent else {
                self.root = Some(n);
                return;
            };
            if self.nodes[n].height == old_height {
                return;
            }
            n = parent;
        }
    }

    /// Fix a subtree rooted at `n` that is two levels too tall on `heavy`.
    ///
    /// If the heavy child leans the other way, it is first rotated so the
    /// single rotation at `n` does not just move the imbalance across. Returns
    /// the new subtree root; its height is left for the caller to recompute.
    fn rotate_heavy(&mut self, n: NodeIndex, heavy: Side) -> NodeIndex {
        let child = self.nodes[n]
            .child(heavy)
            .expect("heavy side of an unbalanced node has a child");
        let child_balance = self.nodes.balance(child);
        let leans_inward = match heavy {
            Side::Right => child_balance < 0,
            Side::Left => child_balance > 0,
        };
        if leans_inward {
            // Rotating toward `heavy` demotes `child` to the outside.
            self.nodes.rotate(child, heavy);
            self.nodes.set_height(child);
        }
        let root = self.nodes.rotate(n, heavy.flip());
        self.nodes.set_height(n);
        root
    }

    const fn count_rebalance(&mut self, path: RebalancePath) {
        match path {
            RebalancePath::Insert => self.stats.insert_rebalances += 1,
            RebalancePath::Delete => self.stats.remove_rebalances += 1,
        }
    }
}
