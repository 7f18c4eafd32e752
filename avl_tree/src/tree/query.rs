/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: point lookups.
//!
//! Lookups take a "compare item against reference" function instead of an
//! item, so callers can search by a partial key. The function must agree
//! with the tree's current ordering, or results are meaningless (but never
//! unsafe).

use std::cmp::Ordering;

use super::AvlTree;
use crate::arena::NodeIndex;

impl<T> AvlTree<T> {
    /// Build a function comparing tree items against `reference` under the
    /// tree's current ordering.
    ///
    /// The function returns [`Ordering::Less`] for items less than
    /// `reference`, [`Ordering::Greater`] for items greater than it, and
    /// [`Ordering::Equal`] otherwise. It holds its own handle to the ordering
    /// relation, so it stays valid (with the old ordering) if the tree is
    /// later reversed.
    pub fn compare_to<'r>(&self, reference: &'r T) -> impl Fn(&T) -> Ordering + use<'r, T> {
        let less = self.less.clone();
        move |item: &T| {
            if less(item, reference) {
                Ordering::Less
            } else if less(reference, item) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
    }

    /// Find the node whose item compares equal under `cmp`.
    pub(crate) fn find_node(&self, cmp: impl Fn(&T) -> Ordering) -> Option<NodeIndex> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = match cmp(&node.item) {
                Ordering::Greater => node.left,
                Ordering::Less => node.right,
                Ordering::Equal => return Some(idx),
            };
        }
        None
    }

    /// Get the item that compares equal under `cmp`, if there is one.
    ///
    /// Use [`range`](Self::range) or one of the iterators to visit every item
    /// matching a looser predicate.
    pub fn get(&self, cmp: impl Fn(&T) -> Ordering) -> Option<&T> {
        self.find_node(cmp).map(|idx| &self.nodes[idx].item)
    }

    /// Returns true if the tree holds an item that compares equal under `cmp`.
    pub fn has(&self, cmp: impl Fn(&T) -> Ordering) -> bool {
        self.find_node(cmp).is_some()
    }

    /// The smallest item in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.nodes.min(root)].item)
    }

    /// The largest item in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.nodes.max(root)].item)
    }
}
