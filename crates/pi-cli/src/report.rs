// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Output formatting for single runs and sweep records.

use std::io::{self, Write};

use pi_core::{Estimate, SweepRecord};
use serde::Serialize;

/// Machine-readable summary of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunReport {
    /// π estimate.
    pub pi: f64,
    /// Seconds from fan-out to end of reduction.
    pub elapsed_secs: f64,
    /// Workers used, after clamping.
    pub worker_count: usize,
    /// Steps used.
    pub step_count: u64,
}

impl From<&Estimate> for RunReport {
    fn from(est: &Estimate) -> Self {
        Self {
            pi: est.value,
            elapsed_secs: est.elapsed_secs(),
            worker_count: est.config.worker_count(),
            step_count: est.config.step_count(),
        }
    }
}

/// Writes the three-line human report: estimate (15 decimals), elapsed
/// seconds, configuration echo.
pub fn write_estimate<W: Write>(out: &mut W, est: &Estimate) -> io::Result<()> {
    writeln!(out, "PI estimate: {:.15}", est.value)?;
    writeln!(out, "Elapsed: {:.9} s", est.elapsed_secs())?;
    writeln!(
        out,
        "Workers: {} | Steps: {}",
        est.config.worker_count(),
        est.config.step_count()
    )
}

/// Writes `est` as a single JSON object line.
pub fn write_estimate_json<W: Write>(out: &mut W, est: &Estimate) -> io::Result<()> {
    serde_json::to_writer(&mut *out, &RunReport::from(est))?;
    writeln!(out)
}

/// Writes one sweep record, as text or as a JSON line.
pub fn write_record<W: Write>(out: &mut W, record: &SweepRecord, json: bool) -> io::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, record)?;
        return writeln!(out);
    }
    writeln!(
        out,
        "steps={} workers={} pi={:.15} elapsed={:.9} s error={:.3e}",
        record.step_count,
        record.worker_count,
        record.value,
        record.elapsed_secs,
        record.abs_error
    )
}
