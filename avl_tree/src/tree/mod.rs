/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AVL tree implementation.
//!
//! This module contains the tree structure and its algorithms. The
//! implementation is split into sub-modules by concern:
//! - [`balance`]: the rebalance walk run after every structural change
//! - [`insert`] and [`delete`]: the write path
//! - [`query`]: point lookups
//! - [`structural`]: reverse, copy, clone, re-sort and release
//! - [`sweep`]: callback-driven range traversals
//! - [`invariants`]: structural self-checks

mod balance;
mod delete;
mod insert;
mod invariants;
mod query;
mod structural;
mod sweep;

use std::fmt;
use std::sync::Arc;

use crate::arena::{NodeArena, NodeIndex};
use crate::bound::Bound;
use crate::iter::{PreOrderNodes, TreeIter};
use crate::node::Node;
use crate::pool::NodePool;
use crate::stats::RebalanceStats;

/// A strict less-than relation over items.
///
/// Two items are considered equal when neither is less than the other.
pub type LessThan<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// An AVL tree holding items of type `T`, ordered by a caller-supplied
/// strict less-than relation.
///
/// The tree is intended as a long-lived in-memory store. Several trees can
/// offer different sorted views over the same data (see
/// [`sort_by`](Self::sort_by), [`sorted_clone`](Self::sorted_clone) and
/// [`reverse`](Self::reverse)) while sharing a [`NodePool`].
///
/// # Arena Storage
///
/// All nodes are stored in a [`NodeArena`]. Children and parents are
/// referenced by [`NodeIndex`] instead of pointers. The parent link is a
/// back-reference used only to re-attach subtrees after rotations and to walk
/// upward while rebalancing.
///
/// # Invariants
///
/// After every public operation:
/// - every item in a node's left subtree is less than the node's item, and
///   every item in its right subtree is greater;
/// - for every node, `height(right) - height(left)` is -1, 0 or 1;
/// - every cached height equals the true height of its subtree;
/// - every non-root node is a child of its parent, and the root has no
///   parent;
/// - no two stored items compare equal.
pub struct AvlTree<T> {
    /// The root node index, `None` when the tree is empty.
    root: Option<NodeIndex>,
    /// Arena holding all tree nodes.
    nodes: NodeArena<T>,
    /// The ordering relation.
    less: LessThan<T>,
    /// Where the arena came from and where it goes back to.
    pool: NodePool<T>,
    /// Mutation counters.
    stats: RebalanceStats,
    /// Revision ID, incremented whenever the tree structure changes.
    revision_id: u32,
}

impl<T> AvlTree<T> {
    /// Create a new empty tree ordered by `less`, with a pool of its own.
    pub fn new(less: impl Fn(&T, &T) -> bool + Send + Sync + 'static) -> Self {
        Self::with_pool(less, NodePool::new())
    }

    /// Create a new empty tree ordered by `less`, drawing its node storage
    /// from `pool`.
    pub fn with_pool(
        less: impl Fn(&T, &T) -> bool + Send + Sync + 'static,
        pool: NodePool<T>,
    ) -> Self {
        Self::from_parts(Arc::new(less), pool)
    }

    pub(crate) fn from_parts(less: LessThan<T>, pool: NodePool<T>) -> Self {
        Self {
            root: None,
            nodes: pool.acquire(),
            less,
            pool,
            stats: RebalanceStats::default(),
            revision_id: 0,
        }
    }

    /// Number of items in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree holds no items.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Get the root node index, if the tree is not empty.
    pub const fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    /// Get a reference to the root node, if the tree is not empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.map(|idx| &self.nodes[idx])
    }

    /// Resolve a [`NodeIndex`] to a shared reference to the node.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a node of this tree.
    pub fn node(&self, idx: NodeIndex) -> &Node<T> {
        &self.nodes[idx]
    }

    /// The ordering relation of this tree.
    pub const fn less(&self) -> &LessThan<T> {
        &self.less
    }

    /// The pool this tree draws its node storage from.
    pub const fn pool(&self) -> &NodePool<T> {
        &self.pool
    }

    /// Get the revision ID of the tree.
    ///
    /// The revision ID changes whenever nodes are attached, detached or
    /// re-linked. Replacing the value of an existing item does not change it.
    pub const fn revision_id(&self) -> u32 {
        self.revision_id
    }

    /// Mutation counters accumulated over the tree's lifetime.
    pub const fn rebalance_stats(&self) -> RebalanceStats {
        self.stats
    }

    const fn bump_revision(&mut self) {
        self.revision_id = self.revision_id.wrapping_add(1);
    }

    /// Allocate a detached leaf for `item`.
    fn alloc_node(&mut self, item: T) -> NodeIndex {
        self.stats.inserts += 1;
        self.nodes.insert_leaf(item)
    }

    /// Remove a node from the arena, returning its item. The slot is reused
    /// by the next allocation.
    fn reclaim_node(&mut self, idx: NodeIndex) -> T {
        self.stats.removes += 1;
        self.nodes.remove(idx).into_item()
    }

    /// Returns a cursor over the items of the tree in ascending order, with
    /// no bounds.
    pub fn iter(&self) -> TreeIter<'_, T> {
        TreeIter::new(self, None, None)
    }

    /// Returns a cursor over the items of the tree that skips the low items
    /// for which `start` holds and ends at the first high item for which
    /// `stop` holds.
    ///
    /// `start` should usually be built with [`Bound::lt`] (inclusive) or
    /// [`Bound::le`] (exclusive); `stop` with [`Bound::gt`] (inclusive) or
    /// [`Bound::ge`] (exclusive). A `None` bound does not apply.
    ///
    /// When walking backward with [`TreeIter::move_prev`], the roles are
    /// mirrored: high items for which `stop` holds are skipped and the walk
    /// ends at the first low item for which `start` holds.
    pub fn iter_bounded<'a>(
        &'a self,
        start: Option<Bound<'a, T>>,
        stop: Option<Bound<'a, T>>,
    ) -> TreeIter<'a, T> {
        TreeIter::new(self, start, stop)
    }

    /// Returns an iterator over all nodes in the tree, with their indices
    /// and depths (depth-first, pre-order).
    pub fn nodes(&self) -> PreOrderNodes<'_, T> {
        PreOrderNodes::new(self)
    }

    pub(crate) const fn arena(&self) -> &NodeArena<T> {
        &self.nodes
    }
}

impl<T> Drop for AvlTree<T> {
    fn drop(&mut self) {
        let nodes = std::mem::take(&mut self.nodes);
        self.pool.recycle(nodes);
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("len", &self.len())
            .field("items", &DebugItems(self))
            .field("revision_id", &self.revision_id)
            .finish_non_exhaustive()
    }
}

struct DebugItems<'a, T>(&'a AvlTree<T>);

impl<T: fmt::Debug> fmt::Debug for DebugItems<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = TreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
