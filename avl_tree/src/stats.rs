/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read-only diagnostics over a tree's shape and mutation history.

use std::cmp::Ordering;

use crate::tree::AvlTree;

/// Streaming mean and variance of a sequence of samples, in constant space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RunningStats {
    count: u64,
    sum: f64,
    sum_sq: f64,
}

impl RunningStats {
    pub const fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            sum_sq: 0.0,
        }
    }

    /// Record one sample.
    pub fn add(&mut self, sample: f64) {
        self.count += 1;
        self.sum += sample;
        self.sum_sq += sample * sample;
    }

    pub const fn count(&self) -> u64 {
        self.count
    }

    pub const fn total(&self) -> f64 {
        self.sum
    }

    /// Mean of the samples; 0 when there are none.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }

    /// Population variance of the samples; 0 when there are none.
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let mean = self.mean();
        // Rounding can push an exact zero slightly negative.
        (self.sum_sq / self.count as f64 - mean * mean).max(0.0)
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

impl Extend<f64> for RunningStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, samples: I) {
        for sample in samples {
            self.add(sample);
        }
    }
}

/// Mutation counters and rebalance ratios of a tree.
///
/// `inserts` counts node allocations (including nodes created by
/// [`clone_tree`](AvlTree::clone_tree)); `removes` counts node reclaims
/// (including [`release`](AvlTree::release) teardown). Replacing an equal
/// item counts as neither.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RebalanceStats {
    pub inserts: u64,
    pub removes: u64,
    pub insert_rebalances: u64,
    pub remove_rebalances: u64,
}

impl RebalanceStats {
    /// Rebalance rotations per allocated node; 0 if nothing was allocated.
    pub fn rebalances_per_insert(&self) -> f64 {
        ratio(self.insert_rebalances, self.inserts)
    }

    /// Rebalance rotations per reclaimed node; 0 if nothing was reclaimed.
    pub fn rebalances_per_remove(&self) -> f64 {
        ratio(self.remove_rebalances, self.removes)
    }
}

fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

impl<T> AvlTree<T> {
    /// Find the item that compares equal under `cmp`, along with its depth
    /// (the root is at depth 0).
    pub fn depth_of(&self, cmp: impl Fn(&T) -> Ordering) -> Option<(&T, usize)> {
        let mut current = self.root_index();
        let mut depth = 0;
        while let Some(idx) = current {
            let node = self.node(idx);
            current = match cmp(node.item()) {
                Ordering::Greater => node.left(),
                Ordering::Less => node.right(),
                Ordering::Equal => return Some((node.item(), depth)),
            };
            depth += 1;
        }
        None
    }

    /// Mean and standard deviation of the depth of every node (the root is
    /// at depth 0). Both are 0 for an empty tree.
    pub fn height_stats(&self) -> (f64, f64) {
        let mut stats = RunningStats::new();
        stats.extend(self.nodes().map(|(_, _, depth)| depth as f64));
        (stats.mean(), stats.std_dev())
    }
}
