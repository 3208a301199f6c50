//! End-to-end estimates for a 30x30 grid with one occupant per cell after 50
//! steps. Picking the axis first and the direction second gives an exact
//! expectation of ~335.417 empty cells; uniform choice among neighbors would
//! give ~330.72 instead.

use flea_sim::{CancellationToken, EngineConfig, TrialEngine};

fn estimate(trials: usize, workers: usize) -> f64 {
    let engine = TrialEngine::from_config(EngineConfig {
        trials,
        workers,
        seed: Some(213),
        ..EngineConfig::default()
    })
    .unwrap();
    engine
        .run(&CancellationToken::new())
        .unwrap()
        .expect("run was not cancelled")
        .mean_empty_cells
}

#[test]
fn test_estimate_in_expected_range() {
    let empty = estimate(1_000, 8);
    assert!(
        (300.0..=399.0).contains(&empty),
        "empty cells {empty:.6} outside [300, 399]"
    );
}

#[test]
#[ignore = "runs 100k full trials; use --release --ignored"]
fn test_estimate_full_run() {
    let empty = estimate(100_000, 8);
    println!("{empty:.6}");
    assert!((300.0..=399.0).contains(&empty));
    assert!((empty - 335.42).abs() < 0.5, "empty cells {empty:.6}");
}

#[test]
fn test_zero_steps_any_trial_count() {
    for trials in [1, 7, 64] {
        let engine = TrialEngine::new(30, 1, 0, trials, 1).unwrap();
        let result = engine.run(&CancellationToken::new()).unwrap().unwrap();
        assert_eq!(result.mean_empty_cells, 0.0);
    }
}

#[test]
fn test_single_cell_grid_rejected() {
    assert!(TrialEngine::new(1, 1, 50, 100, 4).is_err());
}
