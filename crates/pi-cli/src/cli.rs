// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Argument parsing and command dispatch.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use pi_core::{estimate, run_sweep, Configuration};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::{parse_plan, FsConfigStore, PlanService, SWEEP_PLAN_KEY};
use crate::report::{write_estimate, write_estimate_json, write_record};

/// How a run ended, short of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command completed; exit status 0.
    Success,
    /// Positional arguments were missing; usage went to stderr, exit status 1.
    Usage,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Self::SUCCESS,
            Outcome::Usage => Self::from(1),
        }
    }
}

/// `pi` command line.
#[derive(Parser, Debug)]
#[command(
    name = "pi",
    version,
    about = "Estimate pi by parallel midpoint integration of 4/(1+x^2) over [0,1]",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Number of rectangles (1 ..= 2^53).
    #[arg(value_name = "STEP_COUNT")]
    pub step_count: Option<u64>,

    /// Number of worker threads; zero or negative runs a single worker.
    #[arg(value_name = "WORKER_COUNT")]
    pub worker_count: Option<i64>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding stored sweep plans (defaults to the platform config dir).
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Subcommand; without one both positionals are required.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Time the estimator over a grid of step counts and worker counts.
    Sweep(SweepArgs),
}

/// Options for `pi sweep`.
#[derive(Args, Debug, Default)]
pub struct SweepArgs {
    /// Read the plan from a JSON file instead of the stored plan.
    #[arg(long, value_name = "FILE")]
    pub plan: Option<PathBuf>,

    /// Replace the plan's step counts (comma separated).
    #[arg(long, value_delimiter = ',', value_name = "N,..")]
    pub steps: Vec<u64>,

    /// Replace the plan's worker counts (comma separated).
    #[arg(long, value_delimiter = ',', value_name = "W,..")]
    pub workers: Vec<i64>,

    /// Store the effective plan as the new default before running.
    #[arg(long)]
    pub save: bool,
}

/// Parses the process arguments, installs logging, and runs.
pub fn entrypoint() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    run(&cli, &mut io::stdout().lock(), &mut io::stderr().lock()).map(ExitCode::from)
}

/// Runs a parsed command line, writing results to `out` and usage to `err`.
pub fn run<O: Write, E: Write>(cli: &Cli, out: &mut O, err: &mut E) -> Result<Outcome> {
    if let Some(Command::Sweep(args)) = &cli.command {
        return sweep(cli, args, out).map(|()| Outcome::Success);
    }

    let (Some(step_count), Some(worker_count)) = (cli.step_count, cli.worker_count) else {
        writeln!(err, "{}", Cli::command().render_usage())?;
        return Ok(Outcome::Usage);
    };

    let config = Configuration::new(step_count, worker_count).context("invalid configuration")?;
    let est = estimate(&config).context("parallel run failed")?;

    if cli.json {
        write_estimate_json(out, &est)?;
    } else {
        write_estimate(out, &est)?;
    }
    Ok(Outcome::Success)
}

fn sweep<O: Write>(cli: &Cli, args: &SweepArgs, out: &mut O) -> Result<()> {
    let store = match &cli.config_dir {
        Some(dir) => Some(FsConfigStore::at(dir)),
        None => FsConfigStore::user_default()
            .inspect_err(|e| warn!("plan store unavailable: {e}"))
            .ok(),
    };
    let service = store.map(PlanService::new);

    let mut plan = if let Some(path) = &args.plan {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        parse_plan(&bytes).with_context(|| format!("loading plan {}", path.display()))?
    } else {
        let stored = match &service {
            Some(svc) => svc.load(SWEEP_PLAN_KEY).context("loading stored plan")?,
            None => None,
        };
        stored.unwrap_or_default()
    };
    if !args.steps.is_empty() {
        plan.step_counts.clone_from(&args.steps);
    }
    if !args.workers.is_empty() {
        plan.worker_counts.clone_from(&args.workers);
    }

    if args.save {
        let svc = service
            .as_ref()
            .context("no config directory available to save the plan")?;
        svc.save(SWEEP_PLAN_KEY, &plan).context("saving plan")?;
        info!("saved sweep plan");
    }

    let mut write_result = Ok(());
    run_sweep(&plan, |record| {
        if write_result.is_ok() {
            write_result = write_record(out, record, cli.json);
        }
    })
    .context("sweep failed")?;
    write_result.context("writing sweep output")?;
    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}
