// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Run configuration: step count and worker count, validated once.

use thiserror::Error;

/// Largest accepted step count.
///
/// Every midpoint index `i < 2^53` converts to `f64` exactly, so sample
/// points never collapse onto each other.
pub const MAX_STEP_COUNT: u64 = 1 << 53;

/// Largest accepted worker count.
///
/// The fan-out is all-or-nothing; asking the OS for more threads than this
/// is treated as a configuration mistake rather than attempted.
pub const MAX_WORKERS: usize = 4096;

/// Rejected configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `step_count` was zero; there is nothing to integrate over.
    #[error("step count must be at least 1")]
    ZeroSteps,
    /// `step_count` exceeds [`MAX_STEP_COUNT`].
    #[error("step count {0} exceeds the maximum of {max}", max = MAX_STEP_COUNT)]
    StepCountTooLarge(u64),
    /// `worker_count` exceeds [`MAX_WORKERS`].
    #[error("worker count {0} exceeds the maximum of {max}", max = MAX_WORKERS)]
    TooManyWorkers(i64),
}

/// Immutable `(step_count, worker_count)` pair for one run.
///
/// Construct with [`Configuration::new`]; the fields are private so a value
/// of this type is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    step_count: u64,
    worker_count: usize,
}

impl Configuration {
    /// Validates and normalizes a configuration.
    ///
    /// A `worker_count` of zero or below is clamped to 1. This is never an
    /// error.
    pub fn new(step_count: u64, worker_count: i64) -> Result<Self, ConfigError> {
        if step_count == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if step_count > MAX_STEP_COUNT {
            return Err(ConfigError::StepCountTooLarge(step_count));
        }
        let worker_count = if worker_count <= 0 {
            1
        } else {
            match usize::try_from(worker_count) {
                Ok(w) if w <= MAX_WORKERS => w,
                _ => return Err(ConfigError::TooManyWorkers(worker_count)),
            }
        };
        Ok(Self {
            step_count,
            worker_count,
        })
    }

    /// Number of rectangles `N`.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Degree of parallelism `W` (always at least 1).
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Rectangle width `1/N`.
    #[allow(clippy::cast_precision_loss)] // step_count <= 2^53
    pub fn step_width(&self) -> f64 {
        1.0 / self.step_count as f64
    }
}
