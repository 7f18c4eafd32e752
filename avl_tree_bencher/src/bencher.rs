/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Criterion groups comparing [`AvlTree`] with [`BTreeSet`] over the same keys.

use std::collections::BTreeSet;
use std::hint::black_box;
use std::time::Duration;

use avl_tree::{AvlTree, Bound};
use criterion::{BatchSize, BenchmarkGroup, Criterion, measurement::WallTime};

/// A loaded tree and set, plus the keys they were loaded from.
#[derive(Debug)]
pub struct OperationBencher<K> {
    prefix: String,
    keys: Vec<K>,
    tree: AvlTree<K>,
    set: BTreeSet<K>,
}

impl<K> OperationBencher<K>
where
    K: Ord + Clone + Send + Sync + 'static,
{
    const MEASUREMENT_TIME: Duration = Duration::from_millis(2000);
    const WARMUP_TIME: Duration = Duration::from_millis(200);

    /// Load `keys`, in order, into both containers.
    pub fn new(prefix: impl Into<String>, keys: Vec<K>) -> Self {
        let tree = load_tree(&keys);
        let set = keys.iter().cloned().collect();
        Self {
            prefix: prefix.into(),
            keys,
            tree,
            set,
        }
    }

    fn benchmark_group<'a>(
        &self,
        c: &'a mut Criterion,
        label: &str,
    ) -> BenchmarkGroup<'a, WallTime> {
        let mut group = c.benchmark_group(format!("{}|{label}", self.prefix));
        group.measurement_time(Self::MEASUREMENT_TIME);
        group.warm_up_time(Self::WARMUP_TIME);
        group
    }

    /// Build each container from scratch.
    pub fn load_group(&self, c: &mut Criterion) {
        let mut group = self.benchmark_group(c, "Load");
        group.bench_function("AVL", |b| {
            b.iter(|| load_tree(black_box(&self.keys)));
        });
        group.bench_function("BTreeSet", |b| {
            b.iter(|| black_box(&self.keys).iter().cloned().collect::<BTreeSet<_>>());
        });
        group.finish();
    }

    /// Insert `key` into a copy of each loaded container.
    pub fn insert_group(&self, c: &mut Criterion, key: &K, label: &str) {
        let mut group = self.benchmark_group(c, label);
        group.bench_function("AVL", |b| {
            b.iter_batched_ref(
                || self.tree.clone(),
                |tree| tree.insert(black_box(key.clone())),
                BatchSize::LargeInput,
            );
        });
        group.bench_function("BTreeSet", |b| {
            b.iter_batched_ref(
                || self.set.clone(),
                |set| set.replace(black_box(key.clone())),
                BatchSize::LargeInput,
            );
        });
        group.finish();
    }

    /// Delete `key` from a copy of each loaded container.
    pub fn delete_group(&self, c: &mut Criterion, key: &K, label: &str) {
        let mut group = self.benchmark_group(c, label);
        group.bench_function("AVL", |b| {
            b.iter_batched_ref(
                || self.tree.clone(),
                |tree| tree.delete(black_box(key)),
                BatchSize::LargeInput,
            );
        });
        group.bench_function("BTreeSet", |b| {
            b.iter_batched_ref(
                || self.set.clone(),
                |set| set.take(black_box(key)),
                BatchSize::LargeInput,
            );
        });
        group.finish();
    }

    /// Look `key` up in each loaded container.
    pub fn find_group(&self, c: &mut Criterion, key: &K, label: &str) {
        let mut group = self.benchmark_group(c, label);
        group.bench_function("AVL", |b| {
            b.iter(|| self.tree.get(self.tree.compare_to(black_box(key))).is_some());
        });
        group.bench_function("BTreeSet", |b| {
            b.iter(|| self.set.get(black_box(key)).is_some());
        });
        group.finish();
    }

    /// Visit every item in ascending order.
    pub fn iter_group(&self, c: &mut Criterion) {
        let mut group = self.benchmark_group(c, "Iterate forward");
        group.bench_function("AVL", |b| {
            b.iter(|| {
                for item in &self.tree {
                    black_box(item);
                }
            });
        });
        group.bench_function("BTreeSet", |b| {
            b.iter(|| {
                for item in &self.set {
                    black_box(item);
                }
            });
        });
        group.finish();
    }

    /// Visit every item in descending order.
    pub fn iter_backward_group(&self, c: &mut Criterion) {
        let mut group = self.benchmark_group(c, "Iterate backward");
        group.bench_function("AVL", |b| {
            b.iter(|| {
                let mut iter = self.tree.iter();
                while iter.move_prev() {
                    black_box(iter.item());
                }
            });
        });
        group.bench_function("BTreeSet", |b| {
            b.iter(|| {
                for item in self.set.iter().rev() {
                    black_box(item);
                }
            });
        });
        group.finish();
    }

    /// Visit the items in `[low, high)`.
    pub fn range_group(&self, c: &mut Criterion, low: &K, high: &K, label: &str) {
        let mut group = self.benchmark_group(c, label);
        group.bench_function("AVL", |b| {
            b.iter(|| {
                let start = Bound::lt(self.tree.compare_to(black_box(low)));
                let stop = Bound::ge(self.tree.compare_to(black_box(high)));
                self.tree.range(Some(start), Some(stop), |item| {
                    black_box(item);
                    true
                });
            });
        });
        group.bench_function("BTreeSet", |b| {
            b.iter(|| {
                for item in self.set.range(black_box(low)..black_box(high)) {
                    black_box(item);
                }
            });
        });
        group.finish();
    }

    /// Walk `steps` items forward from `pivot`, then all the way back.
    pub fn direction_change_group(&self, c: &mut Criterion, pivot: &K, steps: usize) {
        let mut group = self.benchmark_group(c, "Change direction");
        group.bench_function("AVL", |b| {
            b.iter(|| {
                let start = Bound::lt(self.tree.compare_to(black_box(pivot)));
                let mut iter = self.tree.iter_bounded(Some(start), None);
                for _ in 0..steps {
                    if !iter.move_next() {
                        break;
                    }
                    black_box(iter.item());
                }
                while iter.move_prev() {
                    black_box(iter.item());
                }
            });
        });
        group.bench_function("BTreeSet", |b| {
            b.iter(|| {
                let pivot = black_box(pivot);
                let mut last = None;
                for item in self.set.range(pivot..).take(steps) {
                    last = Some(black_box(item));
                }
                let Some(last) = last else {
                    return;
                };
                for item in self.set.range(..last).rev() {
                    black_box(item);
                }
            });
        });
        group.finish();
    }
}

fn load_tree<K>(keys: &[K]) -> AvlTree<K>
where
    K: Ord + Clone + Send + Sync + 'static,
{
    let mut tree = AvlTree::new(|a: &K, b: &K| a < b);
    for key in keys {
        tree.insert(key.clone());
    }
    tree
}
