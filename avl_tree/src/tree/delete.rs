/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: deletion.
//!
//! Only leaves are ever detached. To delete an inner node, its item is
//! swapped down with its in-order neighbour until the item to delete sits in
//! a leaf; the leaf is then detached and the rebalance walk starts at its
//! former parent.

use super::AvlTree;
use super::balance::RebalancePath;
use super::insert::Located;

impl<T> AvlTree<T> {
    /// Remove the item equal to `item` from the tree, returning the stored
    /// item, or `None` if there is no such item.
    pub fn delete(&mut self, item: &T) -> Option<T> {
        #[cfg(all(feature = "unittest", not(miri)))]
        let len_before = self.len();

        let deleted = self.delete_inner(item);

        #[cfg(all(feature = "unittest", not(miri)))]
        {
            let expected = len_before - usize::from(deleted.is_some());
            assert_eq!(self.len(), expected, "len mismatch after delete");
            self.check_invariants();
        }
        deleted
    }

    fn delete_inner(&mut self, item: &T) -> Option<T> {
        let Some(Located::Found(mut at)) = self.locate(item) else {
            return None;
        };

        // Sink the item into a leaf. The replacement is the minimum of the
        // right subtree if there is one, the maximum of the left otherwise.
        loop {
            let node = &self.nodes[at];
            let replacement = match (node.left, node.right) {
                (_, Some(right)) => self.nodes.min(right),
                (Some(left), None) => self.nodes.max(left),
                (None, None) => break,
            };
            self.nodes.swap_items(at, replacement);
            at = replacement;
        }

        match self.nodes[at].parent {
            Some(parent) => {
                self.nodes.swap_child(parent, at, None);
                self.rebalance_at(parent, RebalancePath::Delete);
            }
            None => self.root = None,
        }
        self.bump_revision();
        Some(self.reclaim_node(at))
    }
}
