/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Whole-tree operations: reversal, derived trees and teardown.
//!
//! Every tree derived from another one ([`copy`](AvlTree::copy),
//! [`clone_tree`](AvlTree::clone_tree), [`sort_by`](AvlTree::sort_by),
//! [`sorted_clone`](AvlTree::sorted_clone)) shares its source's
//! [`NodePool`](crate::NodePool).

use std::sync::Arc;

use tracing::debug;

use super::AvlTree;
use crate::arena::NodeIndex;
use crate::iter::{Cursor, Direction};
use crate::node::Side;

impl<T> AvlTree<T> {
    /// Reverse the tree in place.
    ///
    /// Every node's children are swapped and the ordering relation is
    /// replaced by its argument-flipped form, so the items come out in the
    /// opposite order without being moved or compared. Swapping children
    /// preserves every balance factor's magnitude, so no rebalancing is
    /// needed.
    ///
    /// Compare functions built with [`compare_to`](Self::compare_to) before
    /// the reversal keep the old ordering.
    pub fn reverse(&mut self)
    where
        T: 'static,
    {
        let less = Arc::clone(&self.less);
        self.less = Arc::new(move |a: &T, b: &T| less(b, a));

        // Each node is mirrored once the cursor has moved past it; by then
        // the cursor no longer needs its links.
        let mut cursor = Cursor::default();
        let mut behind: Option<NodeIndex> = None;
        let mut at = cursor.seek(&self.nodes, self.root, Direction::Forward, |_| false);
        while let Some(idx) = at {
            if let Some(prev) = behind.replace(idx) {
                self.nodes[prev].mirror();
            }
            at = cursor.step(&self.nodes, Direction::Forward, |_| false);
        }
        if let Some(last) = behind {
            self.nodes[last].mirror();
        }
        self.bump_revision();
        debug!(len = self.len(), "reversed tree");

        #[cfg(all(feature = "unittest", not(miri)))]
        self.check_invariants();
    }

    /// Create an empty tree with the same ordering and the same pool.
    pub fn copy(&self) -> Self {
        Self::from_parts(Arc::clone(&self.less), self.pool.clone())
    }

    /// Create a deep copy of the tree: same ordering, same pool, and an
    /// identical shape (including cached heights) holding clones of the
    /// items.
    pub fn clone_tree(&self) -> Self
    where
        T: Clone,
    {
        let mut res = self.copy();
        let Some(root) = self.root else {
            return res;
        };

        // Pre-order, carrying the attachment point of each pending copy.
        let mut pending: Vec<(NodeIndex, Option<(NodeIndex, Side)>)> =
            Vec::with_capacity(self.nodes[root].height as usize + 1);
        pending.push((root, None));
        while let Some((src, attach)) = pending.pop() {
            let node = &self.nodes[src];
            let copy = res.alloc_node(node.item.clone());
            res.nodes[copy].height = node.height;
            match attach {
                Some((parent, side)) => {
                    res.nodes[copy].parent = Some(parent);
                    res.nodes[parent].set_child(side, Some(copy));
                }
                None => res.root = Some(copy),
            }
            for side in [Side::Right, Side::Left] {
                if let Some(child) = node.child(side) {
                    pending.push((child, Some((copy, side))));
                }
            }
        }
        res.bump_revision();
        res
    }

    /// Create an empty tree ordered by `less`, falling back to this tree's
    /// ordering for items `less` considers equal. The new tree shares this
    /// tree's pool.
    ///
    /// This is how trees with compound sort orders are built: the source
    /// ordering acts as the final tie-break.
    pub fn sort_by(&self, less: impl Fn(&T, &T) -> bool + Send + Sync + 'static) -> Self
    where
        T: 'static,
    {
        let fallback = Arc::clone(&self.less);
        Self::with_pool(
            move |a: &T, b: &T| {
                if less(a, b) {
                    true
                } else if less(b, a) {
                    false
                } else {
                    fallback(a, b)
                }
            },
            self.pool.clone(),
        )
    }

    /// Like [`sort_by`](Self::sort_by), then insert a clone of every item of
    /// this tree into the new one.
    pub fn sorted_clone(&self, less: impl Fn(&T, &T) -> bool + Send + Sync + 'static) -> Self
    where
        T: Clone + 'static,
    {
        let mut res = self.sort_by(less);
        for item in self {
            res.insert(item.clone());
        }
        debug!(len = res.len(), "built sorted clone");
        res
    }

    /// Tear the tree down node by node and return its storage to the pool.
    ///
    /// Dropping a tree also returns its storage to the pool; `release` makes
    /// the teardown explicit and accounts for every reclaimed node in
    /// [`rebalance_stats`](Self::rebalance_stats) until the arena is
    /// recycled.
    pub fn release(mut self) {
        let len = self.len();
        // Post-order: descend until a leaf, detach and reclaim it, then go
        // back up through the parent link.
        let mut at = self.root.take();
        while let Some(idx) = at {
            let node = &self.nodes[idx];
            if let Some(child) = node.left.or(node.right) {
                at = Some(child);
                continue;
            }
            let parent = node.parent;
            if let Some(parent) = parent {
                self.nodes.swap_child(parent, idx, None);
            }
            drop(self.reclaim_node(idx));
            at = parent;
        }
        debug!(len, removes = self.stats.removes, "released tree");
    }
}

impl<T: Clone> Clone for AvlTree<T> {
    fn clone(&self) -> Self {
        self.clone_tree()
    }
}
