/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: locating an item and inserting it.

use super::AvlTree;
use super::balance::RebalancePath;
use crate::arena::NodeIndex;
use crate::node::Side;

/// Result of descending the tree looking for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Located {
    /// A node holding an equal item.
    Found(NodeIndex),
    /// No equal item; a new node would be attached on `side` of `parent`.
    Vacant { parent: NodeIndex, side: Side },
}

impl<T> AvlTree<T> {
    /// Descend from the root looking for an item equal to `item`.
    ///
    /// Returns `None` only when the tree is empty.
    pub(crate) fn locate(&self, item: &T) -> Option<Located> {
        let mut current = self.root?;
        loop {
            let node = &self.nodes[current];
            let side = if (self.less)(item, &node.item) {
                Side::Left
            } else if (self.less)(&node.item, item) {
                Side::Right
            } else {
                return Some(Located::Found(current));
            };
            match node.child(side) {
                Some(child) => current = child,
                None => {
                    return Some(Located::Vacant {
                        parent: current,
                        side,
                    });
                }
            }
        }
    }

    /// Insert `item` into the tree.
    ///
    /// If the tree already holds an item equal to `item`, the stored item is
    /// replaced in place and returned; the shape of the tree does not change.
    /// Otherwise a new leaf is attached, the tree is rebalanced as needed,
    /// and `None` is returned.
    pub fn insert(&mut self, item: T) -> Option<T> {
        #[cfg(all(feature = "unittest", not(miri)))]
        let len_before = self.len();

        let replaced = self.insert_inner(item);

        #[cfg(all(feature = "unittest", not(miri)))]
        {
            let expected = len_before + usize::from(replaced.is_none());
            assert_eq!(self.len(), expected, "len mismatch after insert");
            self.check_invariants();
        }
        replaced
    }

    fn insert_inner(&mut self, item: T) -> Option<T> {
        let (parent, side) = match self.locate(&item) {
            None => {
                let root = self.alloc_node(item);
                self.root = Some(root);
                self.bump_revision();
                return None;
            }
            Some(Located::Found(idx)) => {
                return Some(std::mem::replace(&mut self.nodes[idx].item, item));
            }
            Some(Located::Vacant { parent, side }) => (parent, side),
        };

        let leaf = self.alloc_node(item);
        self.nodes[leaf].parent = Some(parent);
        self.nodes[parent].set_child(side, Some(leaf));
        self.bump_revision();

        // A parent that already had a child keeps height 2; nothing above it
        // can change.
        if self.nodes[parent].child(side.flip()).is_none() {
            self.nodes[parent].height = 2;
            if let Some(grandparent) = self.nodes[parent].parent {
                self.rebalance_at(grandparent, RebalancePath::Insert);
            }
        }
        None
    }
}
