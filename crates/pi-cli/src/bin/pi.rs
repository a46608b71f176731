// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `pi` binary.

use std::process::ExitCode;

use anyhow::Result;
use pi_cli::cli::entrypoint;

fn main() -> Result<ExitCode> {
    entrypoint()
}
