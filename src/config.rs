//! Engine configuration and validation.
//!
//! Environment overrides mirror the thread-count convention of rayon-based
//! binaries: `RAYON_NUM_THREADS` picks the worker count, `FLEA_SIM_SEED`
//! makes a run reproducible.

use crate::automaton::TrialParams;
use crate::error::{Result, SimError};
use crate::grid::{cell_count_fits, OccupantCount};

/// Worker count used when nothing else is specified.
pub const DEFAULT_WORKERS: usize = 8;

/// Everything needed to run an estimate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Side length of the square grid.
    pub grid_size: usize,
    /// Occupants placed in every cell before the first step.
    pub initial_occupants: OccupantCount,
    /// Steps per trial.
    pub steps: u32,
    /// Total trials, split evenly across workers.
    pub trials: usize,
    /// Parallel workers (and pool threads).
    pub workers: usize,
    /// Base seed; worker `i` uses `seed + i`. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            grid_size: 30,
            initial_occupants: 1,
            steps: 50,
            trials: 100_000,
            workers: DEFAULT_WORKERS,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Apply `RAYON_NUM_THREADS` and `FLEA_SIM_SEED` when they parse.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup` instead of the process environment.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(workers) = lookup("RAYON_NUM_THREADS").and_then(|s| s.parse().ok()) {
            self.workers = workers;
        }
        if let Some(seed) = lookup("FLEA_SIM_SEED").and_then(|s| s.parse().ok()) {
            self.seed = Some(seed);
        }
        self
    }

    /// Reject configurations the engine cannot run.
    ///
    /// A 1x1 grid has no neighbor to jump to, so sizes below 2 are refused.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size < 2 {
            return Err(SimError::InvalidConfig(format!(
                "grid size must be at least 2, got {}",
                self.grid_size
            )));
        }
        if !cell_count_fits(self.grid_size) {
            return Err(SimError::InvalidConfig(format!(
                "grid size {} has more cells than a grid can index",
                self.grid_size
            )));
        }
        if self.initial_occupants < 0 {
            return Err(SimError::InvalidConfig(format!(
                "initial occupant count must be non-negative, got {}",
                self.initial_occupants
            )));
        }
        let total = (self.grid_size as u128)
            * (self.grid_size as u128)
            * (self.initial_occupants as u128);
        if total > OccupantCount::MAX as u128 {
            return Err(SimError::InvalidConfig(format!(
                "{total} total occupants overflow a cell count"
            )));
        }
        if self.workers == 0 {
            return Err(SimError::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }
        if self.trials < self.workers {
            return Err(SimError::InvalidConfig(format!(
                "{} trials cannot be split across {} workers",
                self.trials, self.workers
            )));
        }
        Ok(())
    }

    /// Trials each worker runs. Remainder trials are dropped.
    pub fn trials_per_worker(&self) -> usize {
        self.trials / self.workers
    }

    /// Trials lost to integer division.
    pub fn dropped_trials(&self) -> usize {
        self.trials % self.workers
    }

    pub fn trial_params(&self) -> TrialParams {
        TrialParams {
            grid_size: self.grid_size,
            initial_occupants: self.initial_occupants,
            steps: self.steps,
        }
    }
}
