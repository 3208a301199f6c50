//! A single trial: fill, step N times, count empty cells.

use rand::Rng;

use super::stepping::step;
use crate::error::Result;
use crate::grid::{OccupancyGrid, OccupantCount};

/// Fixed inputs of a trial, shared read-only by every worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrialParams {
    pub grid_size: usize,
    pub initial_occupants: OccupantCount,
    pub steps: u32,
}

/// Run one trial and return the number of empty cells after the last step.
pub fn run_trial<R: Rng + ?Sized>(params: &TrialParams, rng: &mut R) -> Result<usize> {
    let mut grid = OccupancyGrid::filled(params.grid_size, params.initial_occupants)?;
    for _ in 0..params.steps {
        grid = step(&grid, rng)?;
    }
    grid.empty_cells()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_steps_leaves_no_empty_cells() {
        let mut rng = SmallRng::seed_from_u64(10);
        let params = TrialParams {
            grid_size: 8,
            initial_occupants: 1,
            steps: 0,
        };
        for _ in 0..10 {
            assert_eq!(run_trial(&params, &mut rng).unwrap(), 0);
        }
    }

    #[test]
    fn test_no_occupants_leaves_every_cell_empty() {
        let mut rng = SmallRng::seed_from_u64(11);
        let params = TrialParams {
            grid_size: 6,
            initial_occupants: 0,
            steps: 5,
        };
        assert_eq!(run_trial(&params, &mut rng).unwrap(), 36);
    }

    #[test]
    fn test_two_by_two_one_step() {
        // Every occupant of a 2x2 grid lands on a neighbor; at least one cell
        // stays occupied and at most two can be empty.
        let mut rng = SmallRng::seed_from_u64(12);
        let params = TrialParams {
            grid_size: 2,
            initial_occupants: 1,
            steps: 1,
        };
        for _ in 0..50 {
            let empty = run_trial(&params, &mut rng).unwrap();
            assert!(empty <= 3);
        }
    }

    #[test]
    fn test_trial_is_reproducible_with_seed() {
        let params = TrialParams {
            grid_size: 10,
            initial_occupants: 1,
            steps: 15,
        };
        let a = run_trial(&params, &mut SmallRng::seed_from_u64(99)).unwrap();
        let b = run_trial(&params, &mut SmallRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_cell_grid_fails() {
        let mut rng = SmallRng::seed_from_u64(13);
        let params = TrialParams {
            grid_size: 1,
            initial_occupants: 1,
            steps: 1,
        };
        assert!(run_trial(&params, &mut rng).is_err());
    }
}
