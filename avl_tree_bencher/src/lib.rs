/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Supporting types and functions for benchmarking AVL tree operations
//! against [`std::collections::BTreeSet`].

use std::error::Error;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

pub use bencher::OperationBencher;

pub mod bencher;
pub mod corpus;

/// Install a global subscriber printing the tree's trace events, filtered
/// by `RUST_LOG` (warnings and above by default).
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn try_init_tracing() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
}
