// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persistent sweep plans.
//!
//! A [`ConfigStore`] holds raw JSON blobs by key; [`PlanService`] turns them
//! into validated [`SweepPlan`]s. [`FsConfigStore`] keeps one `<key>.json`
//! file per key under the platform config directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use pi_core::{SweepError, SweepPlan};
use thiserror::Error;

/// Key under which the default sweep plan is stored.
pub const SWEEP_PLAN_KEY: &str = "sweep";

/// Error type for plan storage.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// Stored blob is not a well-formed plan.
    #[error("malformed plan: {0}")]
    Serde(#[from] serde_json::Error),
    /// Stored plan parsed but has out-of-range values.
    #[error("invalid plan: {0}")]
    Invalid(#[from] SweepError),
    /// No platform config directory could be resolved.
    #[error("could not resolve a config directory")]
    NoConfigDir,
}

/// Storage port for raw config blobs.
pub trait ConfigStore {
    /// Loads the blob for `key`, or [`StoreError::NotFound`].
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StoreError>;
    /// Persists the blob for `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StoreError>;
}

/// JSON files under a base directory.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Store rooted at the user config directory (e.g. `~/.config/stride-pi`).
    pub fn user_default() -> Result<Self, StoreError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "stride-pi")
            .ok_or(StoreError::NoConfigDir)?;
        Ok(Self::at(proj.config_dir()))
    }

    /// Store rooted at `dir`. The directory is created on first save.
    pub fn at(dir: impl AsRef<Path>) -> Self {
        Self {
            base: dir.as_ref().to_path_buf(),
        }
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base)?;
        fs::write(self.path_for(key), data)?;
        Ok(())
    }
}

/// Typed access to sweep plans in a [`ConfigStore`].
#[derive(Debug)]
pub struct PlanService<S> {
    store: S,
}

impl<S: ConfigStore> PlanService<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads and validates the plan stored under `key`.
    ///
    /// Missing or empty blobs yield `Ok(None)`.
    pub fn load(&self, key: &str) -> Result<Option<SweepPlan>, StoreError> {
        let bytes = match self.store.load_raw(key) {
            Ok(bytes) => bytes,
            Err(StoreError::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };
        if bytes.is_empty() {
            return Ok(None);
        }
        let plan = parse_plan(&bytes)?;
        Ok(Some(plan))
    }

    /// Validates and stores `plan` under `key` as pretty JSON.
    pub fn save(&self, key: &str, plan: &SweepPlan) -> Result<(), StoreError> {
        plan.validate()?;
        let data = serde_json::to_vec_pretty(plan)?;
        self.store.save_raw(key, &data)
    }
}

/// Parses and validates a JSON sweep plan.
pub fn parse_plan(bytes: &[u8]) -> Result<SweepPlan, StoreError> {
    let plan: SweepPlan = serde_json::from_slice(bytes)?;
    plan.validate()?;
    Ok(plan)
}
