// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stride (interleaved) partitioning of the step index space.
//!
//! # Assignment Rule
//!
//! ```text
//! owner(i) = i mod W        for i in [0, N)
//! ```
//!
//! Worker `w` gets `[w, w+W, w+2W, ...] ∩ [0, N)`. No worker receives a
//! remainder block; sizes differ by at most one. When `W > N` the trailing
//! workers get empty sets and contribute an exact `0.0`.
//!
//! The union over all workers is `[0, N)` with no overlaps, for every
//! `(N, W)` with `N >= 1, W >= 1`.

use std::iter::StepBy;
use std::ops::Range;

use crate::config::Configuration;

/// Index set owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StridePartition {
    worker: usize,
    workers: usize,
    step_count: u64,
}

impl StridePartition {
    /// Partition for `worker` out of `config.worker_count()`.
    ///
    /// Returns `None` if `worker` is not a valid worker index.
    pub fn for_worker(config: &Configuration, worker: usize) -> Option<Self> {
        (worker < config.worker_count()).then_some(Self {
            worker,
            workers: config.worker_count(),
            step_count: config.step_count(),
        })
    }

    /// Worker index this set belongs to.
    pub fn worker(&self) -> usize {
        self.worker
    }

    /// Owned step indices in ascending order.
    pub fn indices(&self) -> StepBy<Range<u64>> {
        (self.worker as u64..self.step_count).step_by(self.workers)
    }

    /// Number of owned indices.
    pub fn len(&self) -> u64 {
        let first = self.worker as u64;
        if first >= self.step_count {
            return 0;
        }
        (self.step_count - 1 - first) / self.workers as u64 + 1
    }

    /// True when this worker owns no indices (only possible if `W > N`).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits `[0, N)` into `W` stride partitions, in worker-index order.
///
/// The result always has exactly `config.worker_count()` entries, including
/// empty ones.
pub fn partition(config: &Configuration) -> Vec<StridePartition> {
    (0..config.worker_count())
        .map(|worker| StridePartition {
            worker,
            workers: config.worker_count(),
            step_count: config.step_count(),
        })
        .collect()
}
