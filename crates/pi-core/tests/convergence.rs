// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Accuracy against π and against the unpartitioned baseline.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::f64::consts::PI;

use pi_core::{estimate, sequential_estimate, Configuration};

fn abs_error(steps: u64, workers: i64) -> f64 {
    let cfg = Configuration::new(steps, workers).expect("valid config");
    estimate(&cfg).expect("fan-out").abs_error()
}

#[test]
fn error_shrinks_as_steps_grow() {
    let errors: Vec<f64> = [1_000, 100_000, 10_000_000]
        .iter()
        .map(|&n| abs_error(n, 4))
        .collect();
    for pair in errors.windows(2) {
        assert!(pair[1] < pair[0], "error did not shrink: {errors:?}");
    }
}

#[test]
fn million_steps_four_workers_matches_pi_to_seven_digits() {
    let cfg = Configuration::new(1_000_000, 4).unwrap();
    let est = estimate(&cfg).unwrap();
    assert!((est.value - PI).abs() < 1e-7, "got {:.15}", est.value);
    assert_eq!(format!("{:.7}", est.value), "3.1415927");
}

#[test]
fn single_worker_equals_sequential_sum() {
    let cfg = Configuration::new(1_000_000, 1).unwrap();
    let est = estimate(&cfg).unwrap();
    assert_eq!(est.value.to_bits(), sequential_estimate(1_000_000).to_bits());
}
