/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AvlTree - an ordered in-memory container kept height-balanced with AVL
//! rotations.
//!
//! # Overview
//!
//! [`AvlTree`] stores items ordered by a caller-supplied strict less-than
//! relation. It is meant as a long-lived store offering several sorted views
//! over the same data:
//!
//! - [`AvlTree::sort_by`] / [`AvlTree::sorted_clone`] derive trees with
//!   compound orderings;
//! - [`AvlTree::reverse`] flips a tree's order in place without moving items;
//! - [`TreeIter`] walks items in either direction between optional bounds,
//!   and can change direction mid-walk.
//!
//! Nodes live in a per-tree [`NodeArena`] and reference each other by
//! [`NodeIndex`]. Trees that share a [`NodePool`] hand their emptied arenas
//! to each other when they are released or dropped.
//!
//! # Example
//!
//! ```
//! use avl_tree::{AvlTree, Bound};
//!
//! let mut tree = AvlTree::new(|a: &i32, b: &i32| a < b);
//! for item in [5, 1, 4, 2, 3] {
//!     tree.insert(item);
//! }
//!
//! // Items from 2 (inclusive) up to 4 (exclusive).
//! let mut seen = Vec::new();
//! tree.range(
//!     Some(Bound::lt(tree.compare_to(&2))),
//!     Some(Bound::ge(tree.compare_to(&4))),
//!     |item| {
//!         seen.push(*item);
//!         true
//!     },
//! );
//! assert_eq!(seen, [2, 3]);
//!
//! // Walk forward, then turn around.
//! let mut iter = tree.iter();
//! assert!(iter.move_next() && iter.move_next());
//! assert_eq!(*iter.item(), 2);
//! assert!(iter.move_prev());
//! assert_eq!(*iter.item(), 1);
//! ```

mod arena;
mod bound;
mod iter;
mod node;
mod pool;
mod stats;
mod tree;

pub use arena::{NodeArena, NodeIndex};
pub use bound::Bound;
pub use iter::{Direction, IterError, PreOrderNodes, TreeIter};
pub use node::{Node, Side};
pub use pool::NodePool;
pub use stats::{RebalanceStats, RunningStats};
pub use tree::{AvlTree, LessThan};
