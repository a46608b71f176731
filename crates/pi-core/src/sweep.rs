// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scaling sweep: run the estimator over a grid of step and worker counts.
//!
//! Cells run one after another (steps outer, workers inner) so that timings
//! never compete for cores.

use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, Configuration};
use crate::estimate::{estimate, Estimate};
use crate::exec::ExecError;

/// Grid of configurations to measure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct SweepPlan {
    /// Step counts, outer axis.
    pub step_counts: Vec<u64>,
    /// Worker counts, inner axis. Non-positive values clamp to 1 as usual.
    pub worker_counts: Vec<i64>,
}

impl Default for SweepPlan {
    /// 100M, 1B and 3B steps against 1..=50 workers.
    fn default() -> Self {
        Self {
            step_counts: vec![100_000_000, 1_000_000_000, 3_000_000_000],
            worker_counts: (1..=50).collect(),
        }
    }
}

impl SweepPlan {
    /// Checks every axis value up front so a sweep never fails halfway on
    /// bad input.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.step_counts.is_empty() {
            return Err(SweepError::NoStepCounts);
        }
        if self.worker_counts.is_empty() {
            return Err(SweepError::NoWorkerCounts);
        }
        for &steps in &self.step_counts {
            Configuration::new(steps, 1)?;
        }
        for &workers in &self.worker_counts {
            Configuration::new(1, workers)?;
        }
        Ok(())
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize {
        self.step_counts.len() * self.worker_counts.len()
    }

    /// True when either axis is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One measured cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepRecord {
    /// Steps used.
    pub step_count: u64,
    /// Workers used, after clamping.
    pub worker_count: usize,
    /// π estimate.
    pub value: f64,
    /// Wall-clock seconds for fan-out through reduction.
    pub elapsed_secs: f64,
    /// `|value - π|`.
    pub abs_error: f64,
}

impl From<&Estimate> for SweepRecord {
    fn from(est: &Estimate) -> Self {
        Self {
            step_count: est.config.step_count(),
            worker_count: est.config.worker_count(),
            value: est.value,
            elapsed_secs: est.elapsed_secs(),
            abs_error: est.abs_error(),
        }
    }
}

/// Sweep failure.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Plan has no step counts.
    #[error("sweep plan has no step counts")]
    NoStepCounts,
    /// Plan has no worker counts.
    #[error("sweep plan has no worker counts")]
    NoWorkerCounts,
    /// A step or worker count in the plan is out of range.
    #[error("invalid sweep plan: {0}")]
    Config(#[from] ConfigError),
    /// A run could not start its workers.
    #[error(transparent)]
    Exec(#[from] ExecError),
}

/// Runs every cell of `plan`, calling `on_record` as each one finishes.
///
/// Returns all records in run order.
pub fn run_sweep<F>(plan: &SweepPlan, mut on_record: F) -> Result<Vec<SweepRecord>, SweepError>
where
    F: FnMut(&SweepRecord),
{
    plan.validate()?;
    info!(cells = plan.len(), "starting sweep");

    let mut records = Vec::with_capacity(plan.len());
    for &steps in &plan.step_counts {
        for &workers in &plan.worker_counts {
            let config = Configuration::new(steps, workers)?;
            let record = SweepRecord::from(&estimate(&config)?);
            on_record(&record);
            records.push(record);
        }
    }
    Ok(records)
}
