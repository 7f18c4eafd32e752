/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Key sets the benchmarks are run over.

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// `0..n` in ascending order.
pub fn sequential(n: u64) -> Vec<u64> {
    (0..n).collect()
}

/// `0..n` in descending order.
pub fn descending(n: u64) -> Vec<u64> {
    (0..n).rev().collect()
}

/// A deterministic permutation of `0..n`.
pub fn shuffled(n: u64, seed: u64) -> Vec<u64> {
    let mut keys = sequential(n);
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}

/// `n` deterministic alphanumeric words of 4 to 16 characters. Duplicates
/// are possible but rare.
pub fn words(n: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let len = rng.random_range(4..=16);
            (&mut rng)
                .sample_iter(Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}
