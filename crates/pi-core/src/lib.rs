// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Parallel midpoint-rule estimate of π.
//!
//! Integrates `4/(1+x²)` over `[0, 1]` with `N` rectangles split across `W`
//! worker threads:
//!
//! 1. [`partition`]: worker `i` owns indices `i, i+W, i+2W, ...`
//! 2. [`accumulate`]: each worker sums its midpoints and scales by `1/N`
//! 3. [`execute_parallel`]: scoped threads, one exclusive slot each, all joined
//! 4. [`reduce`]: slots added in worker order
//!
//! Results for a fixed `(N, W)` are bit-identical across runs. Different `W`
//! changes summation order, so results across worker counts agree only to
//! within rounding.
//!
//! ```
//! use pi_core::{estimate, Configuration};
//!
//! let cfg = Configuration::new(100_000, 4).unwrap();
//! let est = estimate(&cfg).unwrap();
//! assert!((est.value - std::f64::consts::PI).abs() < 1e-9);
//! ```

mod accumulate;
mod config;
mod estimate;
mod exec;
mod partition;
mod reduce;
pub mod sweep;

pub use accumulate::{accumulate, integrand, midpoint, sequential_estimate};
pub use config::{ConfigError, Configuration, MAX_STEP_COUNT, MAX_WORKERS};
pub use estimate::{estimate, Estimate};
pub use exec::{execute_parallel, execute_serial, ExecError};
pub use partition::{partition, StridePartition};
pub use reduce::reduce;
pub use sweep::{run_sweep, SweepError, SweepPlan, SweepRecord};
