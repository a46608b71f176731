// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line front end for `pi-core`.
//!
//! ```text
//! pi <STEP_COUNT> <WORKER_COUNT> [--json]
//! pi sweep [--plan FILE] [--steps N,..] [--workers W,..] [--save] [--json]
//! ```
//!
//! Results go to stdout; logs and usage errors go to stderr.

pub mod cli;
pub mod config;
pub mod report;
