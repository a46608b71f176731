// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Parallel and serial execution of the per-worker accumulations.
//!
//! One output slot per worker, pre-sized before fan-out. Each worker thread
//! receives an exclusive `&mut f64` to its own slot; the borrow checker
//! proves the slots are disjoint, so no lock or atomic is involved.

use std::io;
use std::thread;

use thiserror::Error;
use tracing::debug;

use crate::accumulate::accumulate;
use crate::config::Configuration;
use crate::partition::partition;

/// Failure to complete the fan-out.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The OS refused to start a worker thread.
    ///
    /// Workers started before the failure are still joined; no partial
    /// result is returned.
    #[error("failed to spawn worker {worker}")]
    Spawn {
        /// Index of the worker that could not be started.
        worker: usize,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },
}

/// Serial execution baseline.
///
/// Runs every partition on the calling thread, in worker-index order.
pub fn execute_serial(config: &Configuration) -> Vec<f64> {
    let width = config.step_width();
    partition(config)
        .iter()
        .map(|part| accumulate(part, width))
        .collect()
}

/// Parallel execution entry point.
///
/// Spawns exactly `config.worker_count()` scoped threads named
/// `pi-worker-{i}`. Returns one partial result per worker, indexed by worker.
///
/// # Barrier
///
/// Every handle is joined before the scope ends, and the slots vector is
/// only handed back after the scope ends. Reading a slot before its writer
/// finishes is therefore unrepresentable.
///
/// # Panics
///
/// Re-raises the panic of any worker thread.
pub fn execute_parallel(config: &Configuration) -> Result<Vec<f64>, ExecError> {
    let parts = partition(config);
    let width = config.step_width();
    let mut slots = vec![0.0_f64; config.worker_count()];

    debug!(
        workers = config.worker_count(),
        steps = config.step_count(),
        "fan-out"
    );

    thread::scope(|s| -> Result<(), ExecError> {
        let mut handles = Vec::with_capacity(parts.len());

        for (part, slot) in parts.iter().zip(slots.iter_mut()) {
            let handle = thread::Builder::new()
                .name(format!("pi-worker-{}", part.worker()))
                .spawn_scoped(s, move || {
                    *slot = accumulate(part, width);
                })
                .map_err(|source| ExecError::Spawn {
                    worker: part.worker(),
                    source,
                })?;
            handles.push(handle);
        }

        for handle in handles {
            if let Err(payload) = handle.join() {
                std::panic::resume_unwind(payload);
            }
        }
        Ok(())
    })?;

    Ok(slots)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn one_slot_per_worker() {
        let cfg = Configuration::new(100, 6).unwrap();
        assert_eq!(execute_parallel(&cfg).unwrap().len(), 6);
        assert_eq!(execute_serial(&cfg).len(), 6);
    }

    #[test]
    fn parallel_matches_serial_slot_for_slot() {
        let cfg = Configuration::new(50_000, 5).unwrap();
        let par = execute_parallel(&cfg).unwrap();
        let ser = execute_serial(&cfg);
        for (w, (p, s)) in par.iter().zip(&ser).enumerate() {
            assert_eq!(p.to_bits(), s.to_bits(), "slot {w} differs");
        }
    }

    #[test]
    fn surplus_worker_slots_are_zero() {
        let cfg = Configuration::new(3, 8).unwrap();
        let slots = execute_parallel(&cfg).unwrap();
        assert!(slots[..3].iter().all(|v| *v > 0.0));
        assert!(slots[3..].iter().all(|v| *v == 0.0));
    }
}
