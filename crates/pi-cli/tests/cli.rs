// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end checks of the `pi` binary's exit codes and output.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn pi() -> Command {
    Command::cargo_bin("pi").expect("pi binary built")
}

#[test]
fn no_arguments_prints_usage_and_exits_one() {
    pi().assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn one_argument_prints_usage_and_exits_one() {
    pi().arg("1000")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn reports_estimate_duration_and_configuration() {
    pi().args(["1000000", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PI estimate: 3.1415926"))
        .stdout(predicate::str::is_match(r"Elapsed: \d+\.\d+ s").unwrap())
        .stdout(predicate::str::contains("Workers: 4 | Steps: 1000000"));
}

#[test]
fn negative_workers_clamp_to_one() {
    pi().args(["1000", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Workers: 1 | Steps: 1000"));
}

#[test]
fn non_numeric_step_count_fails() {
    pi().args(["lots", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn zero_steps_fails_with_message() {
    pi().args(["0", "4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("step count must be at least 1"));
}

#[test]
fn json_output_is_parseable() {
    let out = pi().args(["10000", "3", "--json"]).output().unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["worker_count"], 3);
    assert_eq!(v["step_count"], 10_000);
    assert!((v["pi"].as_f64().unwrap() - std::f64::consts::PI).abs() < 1e-6);
}

#[test]
fn sweep_saves_and_reuses_plan() {
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    pi().args([
        "sweep",
        "--steps",
        "100,200",
        "--workers",
        "1,3",
        "--save",
        "--config-dir",
        dir_arg,
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("steps=200 workers=3"));
    assert!(dir.path().join("sweep.json").exists());

    let out = pi()
        .args(["sweep", "--json", "--config-dir", dir_arg])
        .output()
        .unwrap();
    assert!(out.status.success());
    let lines: Vec<serde_json::Value> = String::from_utf8(out.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["step_count"], 100);
    assert_eq!(lines[3]["worker_count"], 3);
}

#[test]
fn sweep_reads_plan_file() {
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    std::fs::write(&plan, r#"{"step_counts":[500],"worker_counts":[0,2]}"#).unwrap();

    pi().args(["sweep", "--plan", plan.to_str().unwrap()])
        .args(["--config-dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("steps=500 workers=1"))
        .stdout(predicate::str::contains("steps=500 workers=2"));
}

#[test]
fn sweep_rejects_invalid_plan_file() {
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    std::fs::write(&plan, r#"{"step_counts":[],"worker_counts":[1]}"#).unwrap();

    pi().args(["sweep", "--plan", plan.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no step counts"));
}
