/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Callback-driven sweeps.
//!
//! Each sweep drives a [`TreeIter`](crate::TreeIter) forward and hands every
//! item to a callback, in ascending order. The sweep ends when the bounds are
//! exhausted or the callback returns `false`.

use super::AvlTree;
use crate::bound::Bound;

impl<T> AvlTree<T> {
    /// Visit the items between `start` and `stop`.
    ///
    /// Use [`Bound::lt`] for an inclusive and [`Bound::le`] for an exclusive
    /// `start`; [`Bound::gt`] for an inclusive and [`Bound::ge`] for an
    /// exclusive `stop`.
    pub fn range<'a>(
        &'a self,
        start: Option<Bound<'a, T>>,
        stop: Option<Bound<'a, T>>,
        f: impl FnMut(&T) -> bool,
    ) {
        self.sweep(start, stop, f);
    }

    /// Visit the items after `start`.
    pub fn after<'a>(&'a self, start: Bound<'a, T>, f: impl FnMut(&T) -> bool) {
        self.sweep(Some(start), None, f);
    }

    /// Visit the items before `stop`.
    pub fn before<'a>(&'a self, stop: Bound<'a, T>, f: impl FnMut(&T) -> bool) {
        self.sweep(None, Some(stop), f);
    }

    /// Visit every item.
    pub fn walk(&self, f: impl FnMut(&T) -> bool) {
        self.sweep(None, None, f);
    }

    fn sweep<'a>(
        &'a self,
        start: Option<Bound<'a, T>>,
        stop: Option<Bound<'a, T>>,
        mut f: impl FnMut(&T) -> bool,
    ) {
        let mut iter = self.iter_bounded(start, stop);
        while iter.move_next() {
            if !f(iter.item()) {
                iter.release();
            }
        }
    }
}
