/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Iterators over an [`AvlTree`].
//!
//! - [`TreeIter`] is a bidirectional, bounded, in-order cursor over items.
//! - [`PreOrderNodes`] is a depth-first walk over nodes, used for
//!   introspection and statistics.
//!
//! Both are iterative, using an explicit stack bounded by the tree height, so
//! stepping can be suspended and resumed at any point.

use std::fmt;
use std::iter::FusedIterator;

use thiserror::Error;

use crate::arena::{NodeArena, NodeIndex};
use crate::bound::{Bound, holds};
use crate::node::{Node, Side};
use crate::tree::AvlTree;

/// Direction of an in-order step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order.
    Forward,
    /// Descending order.
    Backward,
}

impl Direction {
    /// The side the next item is searched on first.
    const fn toward(self) -> Side {
        match self {
            Self::Forward => Side::Left,
            Self::Backward => Side::Right,
        }
    }

    /// The side a step moves to once a subtree's near side is done.
    const fn away(self) -> Side {
        self.toward().flip()
    }
}

/// Errors reported when reading the current item of a [`TreeIter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IterError {
    /// No step has been taken yet.
    #[error("iteration has not started")]
    NotStarted,
    /// The last step ran past a bound or off the end of the tree.
    #[error("iteration is exhausted")]
    Exhausted,
    /// The iterator was released.
    #[error("iterator was released")]
    Released,
}

/// Explicit-stack in-order walk over a [`NodeArena`].
///
/// The stack holds the ancestors whose items are still to be visited, in the
/// direction of travel; its head is the working node. The cursor does not
/// borrow the arena between steps, so the tree itself can use one to walk
/// over nodes it is rewriting (see [`AvlTree::reverse`]).
#[derive(Debug, Default)]
pub(crate) struct Cursor {
    stack: Vec<NodeIndex>,
}

impl Cursor {
    /// The node the cursor is positioned on.
    pub(crate) fn working(&self) -> Option<NodeIndex> {
        self.stack.last().copied()
    }

    pub(crate) fn clear(&mut self) {
        self.stack.clear();
    }

    /// Position the cursor on the first node from `root` in direction `dir`
    /// for which `skip` does not hold.
    pub(crate) fn seek<T>(
        &mut self,
        nodes: &NodeArena<T>,
        root: Option<NodeIndex>,
        dir: Direction,
        skip: impl Fn(&T) -> bool,
    ) -> Option<NodeIndex> {
        self.stack.clear();
        if let Some(root) = root {
            self.descend(nodes, root, dir, &skip);
        }
        self.working()
    }

    /// Move to the next node in direction `dir`.
    ///
    /// `skip` only applies to subtrees entered by this step; `skip` must be
    /// monotone in `dir` (once it stops holding, it never holds again).
    pub(crate) fn step<T>(
        &mut self,
        nodes: &NodeArena<T>,
        dir: Direction,
        skip: impl Fn(&T) -> bool,
    ) -> Option<NodeIndex> {
        let working = self.working()?;
        match nodes[working].child(dir.away()) {
            None => {
                self.stack.pop();
            }
            Some(next) => {
                if let Some(head) = self.stack.last_mut() {
                    *head = next;
                }
                if let Some(near) = nodes[next].child(dir.toward()) {
                    self.descend(nodes, near, dir, &skip);
                }
            }
        }
        self.working()
    }

    /// Follow the near spine from `n`. Nodes for which `skip` holds are
    /// passed over toward the far side without being stacked.
    fn descend<T>(
        &mut self,
        nodes: &NodeArena<T>,
        mut n: NodeIndex,
        dir: Direction,
        skip: &impl Fn(&T) -> bool,
    ) {
        loop {
            let node = &nodes[n];
            let side = if skip(&node.item) {
                dir.away()
            } else {
                self.stack.push(n);
                dir.toward()
            };
            match node.child(side) {
                Some(child) => n = child,
                None => return,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IterState {
    NotStarted,
    Positioned(Direction),
    Exhausted(Direction),
    Released,
}

/// A bidirectional, bounded, in-order cursor over the items of an
/// [`AvlTree`].
///
/// Created by [`AvlTree::iter`] and [`AvlTree::iter_bounded`]. The cursor
/// starts *before* the first item: call [`move_next`](Self::move_next) (or
/// [`move_prev`](Self::move_prev)) to position it, then read the item with
/// [`item`](Self::item). It also implements [`Iterator`], yielding items in
/// ascending order.
///
/// # Bounds
///
/// Moving forward, low items for which `start` holds are skipped and the walk
/// ends at the first item for which `stop` holds. Moving backward, the roles
/// are mirrored.
///
/// # Direction reversal
///
/// Stepping in the opposite direction restarts the walk from the root,
/// anchored at the last item the cursor yielded:
/// - if the cursor is positioned on that item, the step yields its neighbour;
/// - if the cursor is exhausted, the step yields that item again.
///
/// Continuing in the same direction after exhaustion keeps returning `false`.
///
/// The cursor borrows the tree, so the tree cannot be mutated while it is
/// alive.
pub struct TreeIter<'a, T> {
    tree: &'a AvlTree<T>,
    cursor: Cursor,
    start: Option<Bound<'a, T>>,
    stop: Option<Bound<'a, T>>,
    state: IterState,
    /// The last item yielded, anchoring direction reversal.
    last: Option<NodeIndex>,
}

impl<'a, T> TreeIter<'a, T> {
    pub(crate) fn new(
        tree: &'a AvlTree<T>,
        start: Option<Bound<'a, T>>,
        stop: Option<Bound<'a, T>>,
    ) -> Self {
        Self {
            tree,
            cursor: Cursor::default(),
            start,
            stop,
            state: IterState::NotStarted,
            last: None,
        }
    }

    /// Step to the next item in ascending order. Returns `false` if there is
    /// none within bounds.
    pub fn move_next(&mut self) -> bool {
        self.step(Direction::Forward)
    }

    /// Step to the next item in descending order. Returns `false` if there is
    /// none within bounds.
    pub fn move_prev(&mut self) -> bool {
        self.step(Direction::Backward)
    }

    fn step(&mut self, dir: Direction) -> bool {
        let nodes = self.tree.arena();
        let (skip, halt) = match dir {
            Direction::Forward => (self.start.as_ref(), self.stop.as_ref()),
            Direction::Backward => (self.stop.as_ref(), self.start.as_ref()),
        };

        let next = match self.state {
            IterState::Released => return false,
            IterState::Exhausted(d) if d == dir => return false,
            IterState::Positioned(d) if d == dir => {
                self.cursor.step(nodes, dir, |item| holds(skip, item))
            }
            IterState::NotStarted => {
                self.cursor
                    .seek(nodes, self.tree.root_index(), dir, |item| holds(skip, item))
            }
            IterState::Positioned(_) | IterState::Exhausted(_) => {
                let inclusive = matches!(self.state, IterState::Exhausted(_));
                let root = self.tree.root_index();
                match self.last {
                    None => self.cursor.seek(nodes, root, dir, |item| holds(skip, item)),
                    Some(pivot) => {
                        let pivot = &nodes[pivot].item;
                        let less = self.tree.less();
                        // Items on the far side of the pivot; the pivot itself
                        // only when it was already visited in this direction.
                        let beyond = |item: &T| match (dir, inclusive) {
                            (Direction::Forward, false) => !less(pivot, item),
                            (Direction::Forward, true) => less(item, pivot),
                            (Direction::Backward, false) => !less(item, pivot),
                            (Direction::Backward, true) => less(pivot, item),
                        };
                        self.cursor
                            .seek(nodes, root, dir, |item| holds(skip, item) || beyond(item))
                    }
                }
            }
        };

        match next {
            Some(idx) if !holds(halt, &nodes[idx].item) => {
                self.state = IterState::Positioned(dir);
                self.last = Some(idx);
                true
            }
            _ => {
                self.cursor.clear();
                self.state = IterState::Exhausted(dir);
                false
            }
        }
    }

    /// The item the cursor is positioned on.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not positioned on an item: before the first
    /// step, after exhaustion, or after [`release`](Self::release).
    pub fn item(&self) -> &'a T {
        self.try_item().unwrap_or_else(|err| panic!("{err}"))
    }

    /// The item the cursor is positioned on, or why there is none.
    pub fn try_item(&self) -> Result<&'a T, IterError> {
        let nodes: &'a NodeArena<T> = self.tree.arena();
        match (self.state, self.cursor.working()) {
            (IterState::Released, _) => Err(IterError::Released),
            (IterState::Exhausted(_), _) => Err(IterError::Exhausted),
            (IterState::Positioned(_), Some(idx)) => Ok(&nodes[idx].item),
            _ => Err(IterError::NotStarted),
        }
    }

    /// Returns true if the cursor is positioned on an item.
    pub const fn is_positioned(&self) -> bool {
        matches!(self.state, IterState::Positioned(_))
    }

    /// Direction of the last step, or `None` before the first step and after
    /// release.
    pub const fn direction(&self) -> Option<Direction> {
        match self.state {
            IterState::Positioned(dir) | IterState::Exhausted(dir) => Some(dir),
            IterState::NotStarted | IterState::Released => None,
        }
    }

    /// Drop the cursor state and bounds. Every later step returns `false`
    /// and reading the item fails.
    pub fn release(&mut self) {
        self.cursor.clear();
        self.cursor.stack.shrink_to_fit();
        self.start = None;
        self.stop = None;
        self.last = None;
        self.state = IterState::Released;
    }
}

impl<'a, T> Iterator for TreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.try_item().ok()
        } else {
            None
        }
    }
}

impl<T> FusedIterator for TreeIter<'_, T> {}

impl<T> fmt::Debug for TreeIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeIter")
            .field("state", &self.state)
            .field("depth", &self.cursor.stack.len())
            .field("start", &self.start)
            .field("stop", &self.stop)
            .finish_non_exhaustive()
    }
}

/// A depth-first, pre-order walk over the nodes of an [`AvlTree`].
///
/// Yields each node with its handle and its depth (the root is at depth 0).
/// Left children are visited before right children.
#[derive(Debug)]
pub struct PreOrderNodes<'a, T> {
    tree: &'a AvlTree<T>,
    /// Nodes still to visit, right pushed first so left is processed first.
    stack: Vec<(NodeIndex, usize)>,
}

impl<'a, T> PreOrderNodes<'a, T> {
    pub(crate) fn new(tree: &'a AvlTree<T>) -> Self {
        let mut stack = Vec::with_capacity(tree.root().map_or(0, |root| root.height() as usize));
        stack.extend(tree.root_index().map(|root| (root, 0)));
        Self { tree, stack }
    }
}

impl<'a, T> Iterator for PreOrderNodes<'a, T> {
    type Item = (NodeIndex, &'a Node<T>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, depth) = self.stack.pop()?;
        let node = self.tree.node(idx);
        self.stack
            .extend(node.right().into_iter().chain(node.left()).map(|child| (child, depth + 1)));
        Some((idx, node, depth))
    }
}

impl<T> FusedIterator for PreOrderNodes<'_, T> {}
