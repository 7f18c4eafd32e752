/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for tree nodes, plus the local geometry the balancing engine
//! is built from: heights, balance factors, child swaps and rotations.
//!
//! Nodes refer to each other through [`NodeIndex`] handles instead of
//! pointers. Removing a node vacates its slot, and the next insertion reuses
//! it, so a long-lived tree with a steady insert/delete churn stops
//! allocating once its arena has grown to its working size.

use std::ops::{Index, IndexMut};

use slab::Slab;

use crate::node::{Node, Side};

/// Handle to a node in a [`NodeArena`].
///
/// Handles are only meaningful for the arena (and therefore the tree) that
/// issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// Build a handle from a raw slot number.
    pub const fn from_raw(slot: u32) -> Self {
        Self(slot)
    }

    /// The raw slot number.
    pub const fn slot(self) -> u32 {
        self.0
    }

    const fn key(self) -> usize {
        self.0 as usize
    }
}

/// Arena storage for [`Node`]s.
///
/// This is a newtype wrapper around [`Slab<Node<T>>`] that provides
/// type-safe indexing via [`NodeIndex`] instead of raw `usize` keys.
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    nodes: Slab<Node<T>>,
}

impl<T> NodeArena<T> {
    /// Create a new empty arena.
    pub const fn new() -> Self {
        Self { nodes: Slab::new() }
    }

    /// Get the number of nodes currently stored in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the capacity of the arena: the number of nodes it can hold
    /// without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Store a detached leaf holding `item`, returning its handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena would grow beyond `u32::MAX` nodes.
    pub fn insert_leaf(&mut self, item: T) -> NodeIndex {
        self.insert(Node::leaf(item))
    }

    pub(crate) fn insert(&mut self, node: Node<T>) -> NodeIndex {
        let key = self.nodes.insert(node);
        let slot = u32::try_from(key).expect("node arena exceeded u32::MAX nodes");
        NodeIndex(slot)
    }

    /// Remove a node from the arena, returning it.
    ///
    /// # Panics
    ///
    /// Panics if the index is vacant.
    pub fn remove(&mut self, idx: NodeIndex) -> Node<T> {
        self.nodes.remove(idx.key())
    }

    /// Get a reference to a node, if the slot is occupied.
    pub fn get(&self, idx: NodeIndex) -> Option<&Node<T>> {
        self.nodes.get(idx.key())
    }

    /// Drop every node, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterate over all nodes in slot order (not tree order).
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node<T>)> {
        self.nodes
            .iter()
            .map(|(key, node)| (NodeIndex(key as u32), node))
    }

    /// Height of an optional subtree; an absent subtree has height 0.
    pub fn height(&self, idx: Option<NodeIndex>) -> u32 {
        idx.map_or(0, |idx| self[idx].height)
    }

    /// Balance factor of a node: `height(right) - height(left)`.
    ///
    /// Negative values mean the subtree is left-heavy, positive values mean
    /// it is right-heavy.
    pub fn balance(&self, idx: NodeIndex) -> i64 {
        let node = &self[idx];
        i64::from(self.height(node.right)) - i64::from(self.height(node.left))
    }

    /// Recompute the cached height of a node from its children.
    pub fn set_height(&mut self, idx: NodeIndex) {
        let node = &self[idx];
        let height = self.height(node.left).max(self.height(node.right)) + 1;
        self[idx].height = height;
    }

    /// The leftmost node of the subtree rooted at `idx`.
    pub fn min(&self, mut idx: NodeIndex) -> NodeIndex {
        while let Some(left) = self[idx].left {
            idx = left;
        }
        idx
    }

    /// The rightmost node of the subtree rooted at `idx`.
    pub fn max(&self, mut idx: NodeIndex) -> NodeIndex {
        while let Some(right) = self[idx].right {
            idx = right;
        }
        idx
    }

    /// Exchange the items stored in two distinct nodes, leaving links and
    /// heights untouched.
    ///
    /// # Panics
    ///
    /// Panics if `a == b` or either slot is vacant.
    pub(crate) fn swap_items(&mut self, a: NodeIndex, b: NodeIndex) {
        let (a, b) = self
            .nodes
            .get2_mut(a.key(), b.key())
            .expect("item swap needs two distinct occupied slots");
        std::mem::swap(&mut a.item, &mut b.item);
    }

    /// Replace the child link of `parent` that points at `was` with `is`,
    /// and point `is` back at `parent`.
    pub(crate) fn swap_child(
        &mut self,
        parent: NodeIndex,
        was: NodeIndex,
        is: Option<NodeIndex>,
    ) {
        let node = &mut self[parent];
        if node.right == Some(was) {
            node.right = is;
        } else {
            node.left = is;
        }
        if let Some(is) = is {
            self[is].parent = Some(parent);
        }
    }

    /// Rotate the subtree rooted at `a` towards `side`, returning the new
    /// subtree root `b` (the former child of `a` on the opposite side).
    ///
    /// A left rotation transforms
    ///
    /// ```text
    ///   |               |
    ///   a               b
    ///  / \             / \
    /// x   b    into   a   z
    ///    / \         / \
    ///   y   z       x   y
    /// ```
    ///
    /// and a right rotation is its mirror image. `b` takes over `a`'s slot in
    /// `a`'s parent (or becomes parentless). Heights are *not* updated: the
    /// caller must recompute `a` and then `b`, in that order.
    ///
    /// # Panics
    ///
    /// Panics if `a` has no child on the side opposite to `side`.
    pub(crate) fn rotate(&mut self, a: NodeIndex, side: Side) -> NodeIndex {
        let b = self[a]
            .child(side.flip())
            .expect("rotation pivot must have a child on the far side");
        match self[a].parent {
            Some(parent) => self.swap_child(parent, a, Some(b)),
            None => self[b].parent = None,
        }
        self[a].parent = Some(b);
        let y = self[b].child(side);
        self[a].set_child(side.flip(), y);
        if let Some(y) = y {
            self[y].parent = Some(a);
        }
        self[b].set_child(side, Some(a));
        b
    }

    /// Rotate left around `a`. See [`Self::rotate`].
    pub fn rotate_left(&mut self, a: NodeIndex) -> NodeIndex {
        self.rotate(a, Side::Left)
    }

    /// Rotate right around `a`. See [`Self::rotate`].
    pub fn rotate_right(&mut self, a: NodeIndex) -> NodeIndex {
        self.rotate(a, Side::Right)
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeIndex> for NodeArena<T> {
    type Output = Node<T>;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        &self.nodes[idx.key()]
    }
}

impl<T> IndexMut<NodeIndex> for NodeArena<T> {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[idx.key()]
    }
}
