/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Node pool shared between trees.
//!
//! Within a single tree, node slots are recycled by the tree's
//! [`NodeArena`]: deleting a node vacates its slot and the next insertion
//! reuses it. The [`NodePool`] recycles whole arenas *between* trees: when a
//! tree is released or dropped, its emptied arena (with its allocation) goes
//! back to the pool, and the next tree built on the same pool starts from it
//! instead of from a fresh allocation.
//!
//! A pool is an explicit value: construct it once and pass it to every tree
//! that should share it. Trees derived from another tree
//! ([`copy`](crate::AvlTree::copy), [`clone_tree`](crate::AvlTree::clone_tree),
//! [`sort_by`](crate::AvlTree::sort_by), ...) share their source's pool.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::trace;

use crate::arena::NodeArena;

/// A shared reservoir of empty node arenas.
///
/// Cloning a `NodePool` produces another handle to the same reservoir. The
/// reservoir is guarded by a mutex, so trees living on different threads may
/// share one pool.
pub struct NodePool<T> {
    arenas: Arc<Mutex<Vec<NodeArena<T>>>>,
}

impl<T> NodePool<T> {
    /// Maximum number of idle arenas a pool keeps around.
    ///
    /// Arenas recycled into a full pool are dropped.
    pub const MAX_RETAINED_ARENAS: usize = 8;

    /// Create a new, empty pool.
    pub fn new() -> Self {
        Self {
            arenas: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Take an empty arena out of the pool, or create one if the pool is
    /// empty.
    ///
    /// The arena with the largest capacity is handed out first.
    pub(crate) fn acquire(&self) -> NodeArena<T> {
        let mut arenas = self.arenas.lock().unwrap_or_else(PoisonError::into_inner);
        match arenas.pop() {
            Some(arena) => {
                trace!(capacity = arena.capacity(), "reusing pooled node arena");
                arena
            }
            None => NodeArena::new(),
        }
    }

    /// Return an arena to the pool.
    ///
    /// Any nodes still stored in the arena are dropped first. Arenas without
    /// an allocation are not worth keeping and are discarded.
    pub(crate) fn recycle(&self, mut arena: NodeArena<T>) {
        arena.clear();
        if arena.capacity() == 0 {
            return;
        }
        let mut arenas = self.arenas.lock().unwrap_or_else(PoisonError::into_inner);
        if arenas.len() >= Self::MAX_RETAINED_ARENAS {
            // Keep the larger allocations.
            let smallest = arenas
                .iter()
                .enumerate()
                .min_by_key(|(_, pooled)| pooled.capacity())
                .map(|(pos, pooled)| (pos, pooled.capacity()));
            match smallest {
                Some((pos, capacity)) if capacity < arena.capacity() => {
                    arenas.swap_remove(pos);
                }
                _ => {
                    trace!(capacity = arena.capacity(), "node pool full, dropping arena");
                    return;
                }
            }
        }
        trace!(capacity = arena.capacity(), "recycling node arena");
        arenas.push(arena);
        arenas.sort_unstable_by_key(NodeArena::capacity);
    }

    /// Number of idle arenas currently held by the pool.
    pub fn idle_arenas(&self) -> usize {
        self.arenas
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Total number of node slots held by the pool's idle arenas.
    pub fn idle_capacity(&self) -> usize {
        self.arenas
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(NodeArena::capacity)
            .sum()
    }

    /// Returns true if `self` and `other` are handles to the same pool.
    pub fn same_pool(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.arenas, &other.arenas)
    }
}

impl<T> Clone for NodePool<T> {
    fn clone(&self) -> Self {
        Self {
            arenas: Arc::clone(&self.arenas),
        }
    }
}

impl<T> Default for NodePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for NodePool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodePool")
            .field("idle_arenas", &self.idle_arenas())
            .field("idle_capacity", &self.idle_capacity())
            .finish()
    }
}
