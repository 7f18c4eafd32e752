/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Boundary predicates for bounded iteration.
//!
//! A [`Bound`] is a test over items. Bounds are usually built from a
//! "compare item against a fixed reference" function, such as the one
//! returned by [`AvlTree::compare_to`](crate::AvlTree::compare_to), through
//! one of six combinators:
//!
//! | combinator       | holds when the item is...        |
//! |------------------|----------------------------------|
//! | [`Bound::lt`]    | less than the reference          |
//! | [`Bound::le`]    | less than or equal               |
//! | [`Bound::eq`]    | equal                            |
//! | [`Bound::ge`]    | greater than or equal            |
//! | [`Bound::gt`]    | greater than                     |
//! | [`Bound::ne`]    | not equal                        |
//!
//! Used as the `start` bound of an iterator, items for which the bound holds
//! are skipped on the low side, so `lt(x)` starts at `x` inclusive while
//! `le(x)` starts just after it. Used as the `stop` bound, the first item for
//! which the bound holds ends forward iteration, so `gt(x)` stops after `x`
//! inclusive while `ge(x)` stops before it.

use std::cmp::Ordering;
use std::fmt;

/// A boundary predicate over items of type `T`.
pub struct Bound<'a, T> {
    test: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, T> Bound<'a, T> {
    /// Wrap an arbitrary item test.
    pub fn new(test: impl Fn(&T) -> bool + 'a) -> Self {
        Self {
            test: Box::new(test),
        }
    }

    fn from_ordering(
        cmp: impl Fn(&T) -> Ordering + 'a,
        accept: impl Fn(Ordering) -> bool + 'a,
    ) -> Self {
        Self::new(move |item| accept(cmp(item)))
    }

    /// Holds for items strictly less than the reference.
    pub fn lt(cmp: impl Fn(&T) -> Ordering + 'a) -> Self {
        Self::from_ordering(cmp, Ordering::is_lt)
    }

    /// Holds for items less than or equal to the reference.
    pub fn le(cmp: impl Fn(&T) -> Ordering + 'a) -> Self {
        Self::from_ordering(cmp, Ordering::is_le)
    }

    /// Holds for items equal to the reference.
    pub fn eq(cmp: impl Fn(&T) -> Ordering + 'a) -> Self {
        Self::from_ordering(cmp, Ordering::is_eq)
    }

    /// Holds for items greater than or equal to the reference.
    pub fn ge(cmp: impl Fn(&T) -> Ordering + 'a) -> Self {
        Self::from_ordering(cmp, Ordering::is_ge)
    }

    /// Holds for items strictly greater than the reference.
    pub fn gt(cmp: impl Fn(&T) -> Ordering + 'a) -> Self {
        Self::from_ordering(cmp, Ordering::is_gt)
    }

    /// Holds for items not equal to the reference.
    pub fn ne(cmp: impl Fn(&T) -> Ordering + 'a) -> Self {
        Self::from_ordering(cmp, Ordering::is_ne)
    }

    /// Apply the predicate to `item`.
    pub fn test(&self, item: &T) -> bool {
        (self.test)(item)
    }
}

impl<T> fmt::Debug for Bound<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bound").finish_non_exhaustive()
    }
}

/// Apply an optional bound; an absent bound never holds.
pub(crate) fn holds<T>(bound: Option<&Bound<'_, T>>, item: &T) -> bool {
    bound.is_some_and(|bound| bound.test(item))
}
