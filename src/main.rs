//! Flea Sim CLI.
//!
//! Estimate the expected number of empty cells after repeated random jumps.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flea_sim::{CancellationToken, EngineConfig, OccupantCount, TrialEngine};

#[derive(Parser)]
#[command(name = "flea-sim")]
#[command(about = "Monte Carlo estimate of empty cells after random jumps on a square grid")]
struct Cli {
    /// Side length of the square grid [default: 30]
    #[arg(long)]
    grid_size: Option<usize>,

    /// Occupants per cell before the first step [default: 1]
    #[arg(long)]
    initial: Option<OccupantCount>,

    /// Steps per trial [default: 50]
    #[arg(long)]
    steps: Option<u32>,

    /// Total number of trials [default: 100000]
    #[arg(long)]
    trials: Option<usize>,

    /// Parallel workers [default: RAYON_NUM_THREADS or 8]
    #[arg(long)]
    workers: Option<usize>,

    /// Base random seed for a reproducible run [default: FLEA_SIM_SEED]
    #[arg(long)]
    seed: Option<u64>,

    /// Cancel the run after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    /// Flags win over environment overrides, which win over defaults.
    fn engine_config(&self) -> EngineConfig {
        let base = EngineConfig::default().with_env_overrides();
        EngineConfig {
            grid_size: self.grid_size.unwrap_or(base.grid_size),
            initial_occupants: self.initial.unwrap_or(base.initial_occupants),
            steps: self.steps.unwrap_or(base.steps),
            trials: self.trials.unwrap_or(base.trials),
            workers: self.workers.unwrap_or(base.workers),
            seed: self.seed.or(base.seed),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let engine = TrialEngine::from_config(cli.engine_config())?;

    let cancel = CancellationToken::new();
    if let Some(secs) = cli.timeout_secs {
        let timer = cancel.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(secs));
            timer.cancel();
        });
    }

    match engine.run(&cancel)? {
        Some(estimate) => {
            info!(
                trials_per_worker = estimate.trials_per_worker,
                dropped_trials = estimate.dropped_trials,
                elapsed_ms = estimate.elapsed.as_millis() as u64,
                "Run finished"
            );
            println!("{:.6}", estimate.mean_empty_cells);
        }
        None => {
            println!("Run cancelled before all trials completed");
        }
    }

    Ok(())
}
