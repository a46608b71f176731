// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Timed end-to-end estimate: fan-out, join, reduce.

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::Configuration;
use crate::exec::{execute_parallel, ExecError};
use crate::reduce::reduce;

/// Result of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// The π estimate.
    pub value: f64,
    /// Wall-clock time from just before fan-out to just after reduction.
    pub elapsed: Duration,
    /// Configuration the run used.
    pub config: Configuration,
}

impl Estimate {
    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Absolute distance from [`std::f64::consts::PI`].
    pub fn abs_error(&self) -> f64 {
        (self.value - PI).abs()
    }
}

/// Runs the parallel integration for `config` and times it.
///
/// The clock is read only outside the fan-out/reduce region; it never feeds
/// back into the numeric result.
pub fn estimate(config: &Configuration) -> Result<Estimate, ExecError> {
    let start = Instant::now();
    let slots = execute_parallel(config)?;
    let value = reduce(&slots);
    let elapsed = start.elapsed();

    debug!(
        value,
        elapsed_secs = elapsed.as_secs_f64(),
        workers = config.worker_count(),
        steps = config.step_count(),
        "estimate complete"
    );

    Ok(Estimate {
        value,
        elapsed,
        config: *config,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn million_steps_four_workers() {
        let cfg = Configuration::new(1_000_000, 4).unwrap();
        let est = estimate(&cfg).unwrap();
        assert!(est.abs_error() < 1e-7, "error {}", est.abs_error());
        assert_eq!(est.config, cfg);
    }

    #[test]
    fn abs_error_is_distance_to_pi() {
        let est = Estimate {
            value: 3.0,
            elapsed: Duration::ZERO,
            config: Configuration::new(1, 1).unwrap(),
        };
        assert!((est.abs_error() - (PI - 3.0)).abs() < f64::EPSILON);
        assert!(est.elapsed_secs().abs() < f64::EPSILON);
    }
}
