//! Parallel trial engine.
//!
//! Splits the trial count into equal batches, one per worker, and runs the
//! batches on a dedicated rayon pool. Each worker averages its own batch; the
//! estimate is the mean of those per-worker averages.
//!
//! Workers share nothing mutable except two flags, both polled between
//! trials: the caller's [`CancellationToken`] and an internal abort flag raised
//! by the first worker that fails.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, error, info, warn};

use crate::automaton::{run_trial, TrialParams};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::grid::OccupantCount;

/// Cooperative cancellation flag shared between the caller and a run.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every worker to stop at its next trial boundary.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Result of a completed run.
#[derive(Clone, Debug)]
pub struct Estimate {
    /// Mean of the per-worker means: the estimated number of empty cells.
    pub mean_empty_cells: f64,
    /// Average empty-cell count of each worker's batch, in worker order.
    pub worker_means: Vec<f64>,
    pub trials_per_worker: usize,
    /// Trials skipped because the total did not divide evenly.
    pub dropped_trials: usize,
    pub elapsed: Duration,
}

/// Configured runner. Owns the worker pool for its lifetime.
pub struct TrialEngine {
    config: EngineConfig,
    thread_pool: rayon::ThreadPool,
}

impl TrialEngine {
    /// Create an engine without a fixed seed.
    pub fn new(
        grid_size: usize,
        initial_occupants: OccupantCount,
        steps: u32,
        trials: usize,
        workers: usize,
    ) -> Result<Self> {
        Self::from_config(EngineConfig {
            grid_size,
            initial_occupants,
            steps,
            trials,
            workers,
            seed: None,
        })
    }

    pub fn from_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .thread_name(|i| format!("flea-worker-{i}"))
            .build()?;

        Ok(TrialEngine {
            config,
            thread_pool,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run every batch and return the estimate.
    ///
    /// Blocks until all workers have stopped. Returns `Ok(None)` when the run
    /// was cancelled before every worker finished its batch, and the first
    /// worker error otherwise aborts the whole run.
    pub fn run(&self, cancel: &CancellationToken) -> Result<Option<Estimate>> {
        let start = Instant::now();
        let workers = self.config.workers;
        let trials_per_worker = self.config.trials_per_worker();
        let dropped_trials = self.config.dropped_trials();
        let params = self.config.trial_params();

        if dropped_trials > 0 {
            warn!(
                trials = self.config.trials,
                workers, dropped_trials, "Trial count not divisible by worker count; dropping remainder"
            );
        }
        info!(
            grid_size = params.grid_size,
            initial_occupants = params.initial_occupants,
            steps = params.steps,
            workers,
            trials_per_worker,
            "Starting estimate"
        );

        let abort = AtomicBool::new(false);
        let outcomes: Result<Vec<Option<f64>>> = self.thread_pool.install(|| {
            (0..workers)
                .into_par_iter()
                .map(|worker| {
                    let mut rng = self.worker_rng(worker);
                    let outcome = run_worker(
                        worker,
                        &params,
                        trials_per_worker,
                        &mut rng,
                        cancel,
                        &abort,
                    );
                    if let Err(err) = &outcome {
                        abort.store(true, Ordering::Relaxed);
                        error!(worker, %err, "Worker failed; aborting run");
                    }
                    outcome
                })
                .collect()
        });

        let Some(worker_means) = outcomes?.into_iter().collect::<Option<Vec<f64>>>() else {
            info!(elapsed_ms = start.elapsed().as_millis() as u64, "Run cancelled");
            return Ok(None);
        };

        let mean_empty_cells = worker_means.iter().sum::<f64>() / worker_means.len() as f64;
        let elapsed = start.elapsed();
        info!(
            mean_empty_cells,
            elapsed_ms = elapsed.as_millis() as u64,
            "Estimate complete"
        );

        Ok(Some(Estimate {
            mean_empty_cells,
            worker_means,
            trials_per_worker,
            dropped_trials,
            elapsed,
        }))
    }

    fn worker_rng(&self, worker: usize) -> SmallRng {
        match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(worker as u64)),
            None => SmallRng::from_os_rng(),
        }
    }
}

/// Run one worker's batch and return its mean empty-cell count.
///
/// Returns `Ok(None)` if cancellation or an abort is observed before the
/// batch completes.
fn run_worker<R: Rng + ?Sized>(
    worker: usize,
    params: &TrialParams,
    trials: usize,
    rng: &mut R,
    cancel: &CancellationToken,
    abort: &AtomicBool,
) -> Result<Option<f64>> {
    let mut empty_total: u64 = 0;

    for completed in 0..trials {
        if cancel.is_cancelled() || abort.load(Ordering::Relaxed) {
            debug!(worker, completed, trials, "Worker stopped before finishing its batch");
            return Ok(None);
        }
        empty_total += run_trial(params, rng)? as u64;
    }

    let mean = empty_total as f64 / trials as f64;
    debug!(worker, trials, mean, "Worker finished");
    Ok(Some(mean))
}
