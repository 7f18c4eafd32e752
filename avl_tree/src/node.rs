/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Node - the unit of storage in an [`AvlTree`](crate::AvlTree).

use crate::arena::NodeIndex;

/// Which child slot of a node a link occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The opposite side.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A node in the tree: an item, links to its children and parent, and the
/// cached height of the subtree rooted here.
///
/// Nodes live in the tree's [`NodeArena`](crate::arena::NodeArena) and refer
/// to each other through [`NodeIndex`] handles. The `left` and `right` links
/// are the tree edges; `parent` is a back-link used only to re-attach subtrees
/// after rotations and to walk upward while rebalancing.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) item: T,
    pub(crate) parent: Option<NodeIndex>,
    pub(crate) left: Option<NodeIndex>,
    pub(crate) right: Option<NodeIndex>,
    /// 1 for a leaf, `1 + max(height(left), height(right))` otherwise.
    pub(crate) height: u32,
}

impl<T> Node<T> {
    /// Create a detached leaf holding `item`.
    #[must_use]
    pub const fn leaf(item: T) -> Self {
        Self {
            item,
            parent: None,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// The stored item.
    pub const fn item(&self) -> &T {
        &self.item
    }

    /// Handle of the parent node, `None` for the root.
    pub const fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Handle of the left child, if any.
    pub const fn left(&self) -> Option<NodeIndex> {
        self.left
    }

    /// Handle of the right child, if any.
    pub const fn right(&self) -> Option<NodeIndex> {
        self.right
    }

    /// Handle of the child on `side`, if any.
    pub const fn child(&self, side: Side) -> Option<NodeIndex> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) const fn set_child(&mut self, side: Side, child: Option<NodeIndex>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Exchange the left and right links. Heights are unaffected.
    pub(crate) const fn mirror(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    /// Cached height of the subtree rooted at this node.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns true if this node has no children.
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Consume the node, returning its item.
    pub(crate) fn into_item(self) -> T {
        self.item
    }
}
